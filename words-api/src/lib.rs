//! Public API for word extraction
//!
//! This crate wraps `words-core` with an options-based entry point, a
//! reusable extractor, and configuration that can be built in code or loaded
//! from TOML and JSON files.
//!
//! # Example
//!
//! ```rust
//! use words_api::{extract, ExtractOption};
//!
//! assert_eq!(extract("XmlHTTP", &[]), vec!["Xml", "HTTP"]);
//! assert_eq!(
//!     extract("Etc. and so on", &[ExtractOption::ignored_runes(['.'])]),
//!     vec!["Etc.", "and", "so", "on"]
//! );
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use error::Result;
use std::borrow::Cow;
use std::io::Read;
use words_core::{Extractor, ExtractorConfig};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Metadata, Output};
pub use error::ApiError;
pub use words_core::{classify, ExtractOption, ParseRuneKindError, RuneKind};

/// Reusable word extractor
///
/// Holds one immutable configuration; each call works on its own buffers, so
/// a single extractor can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct WordExtractor {
    inner: Extractor,
    config: Config,
}

impl WordExtractor {
    /// Create an extractor with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            inner: Extractor::new(config.extractor_config().clone()),
            config,
        }
    }

    /// Create an extractor from an ordered list of options
    pub fn with_options(options: &[ExtractOption]) -> Self {
        Self::with_config(Config::from_options(options))
    }

    /// Create an extractor from a TOML or JSON configuration file
    #[cfg(feature = "serde")]
    pub fn from_config_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        Ok(Self::with_config(Config::from_file(path)?))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Split text into words
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.inner.extract(text)
    }

    /// Split raw bytes into words, returning malformed UTF-8 unsplit
    pub fn extract_bytes<'a>(&self, bytes: &'a [u8]) -> Vec<Cow<'a, [u8]>> {
        self.inner.extract_bytes(bytes)
    }

    /// Read a source to the end and split it into words
    pub fn extract_reader<R: Read>(&self, mut reader: R) -> Result<Vec<Vec<u8>>> {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;

        Ok(self
            .extract_bytes(&buffer)
            .into_iter()
            .map(Cow::into_owned)
            .collect())
    }

    /// Split text into words and report metadata
    pub fn process_text(&self, text: &str) -> Output {
        Output::new(text, self.extract(text))
    }
}

impl From<ExtractorConfig> for WordExtractor {
    fn from(config: ExtractorConfig) -> Self {
        Self::with_config(Config::from(config))
    }
}

// Convenience functions

/// Extract words from text, applying options to the default configuration in order
pub fn extract(input: &str, options: &[ExtractOption]) -> Vec<String> {
    Extractor::new(ExtractorConfig::with_options(options)).extract(input)
}

/// Extract words from raw bytes, applying options in order
///
/// If the bytes are not valid UTF-8 the input is returned as the only element.
pub fn extract_bytes<'a>(input: &'a [u8], options: &[ExtractOption]) -> Vec<Cow<'a, [u8]>> {
    Extractor::new(ExtractorConfig::with_options(options)).extract_bytes(input)
}
