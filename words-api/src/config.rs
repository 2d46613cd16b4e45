//! High-level configuration API

use crate::error::{ApiError, Result};
use words_core::{ExtractOption, ExtractorConfig, RuneKind};

#[cfg(feature = "serde")]
use std::path::Path;
#[cfg(feature = "serde")]
use tracing::debug;

/// High-level configuration for word extraction
///
/// With the `serde` feature this serializes as a flat table, e.g. in TOML:
///
/// ```toml
/// include_punctuation = true
/// allow_hyphenated_words = true
/// ignored_runes = ["."]
/// ignored_rune_kinds = ["digit"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Config {
    inner: ExtractorConfig,
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Create a configuration from an ordered list of options
    pub fn from_options(options: &[ExtractOption]) -> Self {
        Self {
            inner: ExtractorConfig::with_options(options),
        }
    }

    /// Get the underlying extractor configuration
    pub fn extractor_config(&self) -> &ExtractorConfig {
        &self.inner
    }

    /// Convert into the underlying extractor configuration
    pub fn into_inner(self) -> ExtractorConfig {
        self.inner
    }

    /// Parse a configuration from TOML
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a configuration from JSON
    #[cfg(feature = "serde")]
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a configuration file, TOML or JSON by extension
    #[cfg(feature = "serde")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            other => {
                return Err(ApiError::Config(format!(
                    "unsupported config file extension {:?} for {}",
                    other.unwrap_or(""),
                    path.display()
                )))
            }
        };

        debug!(path = %path.display(), ?config, "loaded extraction config");
        Ok(config)
    }

    /// Serialize to TOML
    #[cfg(feature = "serde")]
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| ApiError::Config(e.to_string()))
    }
}

impl From<ExtractorConfig> for Config {
    fn from(inner: ExtractorConfig) -> Self {
        Self { inner }
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: ExtractorConfig,
}

impl ConfigBuilder {
    /// Include runs of symbols
    pub fn include_symbols(self) -> Self {
        self.option(ExtractOption::IncludeSymbols)
    }

    /// Include runs of punctuation
    pub fn include_punctuation(self) -> Self {
        self.option(ExtractOption::IncludePunctuation)
    }

    /// Include runs of white space
    pub fn include_spaces(self) -> Self {
        self.option(ExtractOption::IncludeSpaces)
    }

    /// Keep hyphens between letters of the same case
    pub fn allow_hyphenated_words(self) -> Self {
        self.option(ExtractOption::AllowHyphenatedWords)
    }

    /// Add code points to glue onto words
    pub fn ignored_runes(self, runes: impl IntoIterator<Item = char>) -> Self {
        self.option(ExtractOption::ignored_runes(runes))
    }

    /// Add kinds to glue onto words
    pub fn ignored_rune_kinds(self, kinds: impl IntoIterator<Item = RuneKind>) -> Self {
        self.option(ExtractOption::ignored_rune_kinds(kinds))
    }

    /// Add kinds to glue onto words, by name
    pub fn ignored_rune_kind_names<S: AsRef<str>>(self, names: &[S]) -> Result<Self> {
        let kinds = names
            .iter()
            .map(|name| name.as_ref().parse::<RuneKind>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(self.ignored_rune_kinds(kinds))
    }

    /// Apply an option
    pub fn option(mut self, option: ExtractOption) -> Self {
        option.apply(&mut self.config);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config { inner: self.config }
    }
}
