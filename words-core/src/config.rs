//! Extraction configuration and options

use crate::kind::RuneKind;
use std::collections::BTreeSet;

/// The hyphen-minus, the only code point that can join hyphenated words
pub const HYPHEN: char = '-';

/// Configuration for a single extraction
///
/// Everything is excluded or disabled by default. Runs of excluded kinds are
/// still tracked as boundaries, they are just left out of the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ExtractorConfig {
    /// Emit runs of symbols
    pub include_symbols: bool,
    /// Emit runs of punctuation
    pub include_punctuation: bool,
    /// Emit runs of white space
    pub include_spaces: bool,
    /// Keep a hyphen between two letters of the same case inside one word
    pub allow_hyphenated_words: bool,
    /// Code points glued onto the current word
    pub ignored_runes: BTreeSet<char>,
    /// Kinds whose code points are glued onto the current word
    pub ignored_rune_kinds: BTreeSet<RuneKind>,
}

impl ExtractorConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply options in order
    pub fn apply<'a, I>(&mut self, options: I)
    where
        I: IntoIterator<Item = &'a ExtractOption>,
    {
        for option in options {
            option.apply(self);
        }
    }

    /// Build a configuration from the defaults and a list of options
    pub fn with_options(options: &[ExtractOption]) -> Self {
        let mut config = Self::default();
        config.apply(options);
        config
    }

    /// Check if runs of `kind` belong in the output
    pub fn includes(&self, kind: RuneKind) -> bool {
        match kind {
            RuneKind::Symbol => self.include_symbols,
            RuneKind::Punctuation => self.include_punctuation,
            RuneKind::Space => self.include_spaces,
            _ => true,
        }
    }

    /// Check if `ch` of the given kind is glue
    pub fn is_ignored(&self, ch: char, kind: RuneKind) -> bool {
        self.ignored_runes.contains(&ch) || self.ignored_rune_kinds.contains(&kind)
    }
}

/// A single change to the default configuration
///
/// Boolean toggles are idempotent. The ignore lists are additive: later
/// options extend what earlier options added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOption {
    /// Include symbols, e.g. `"beer>food"` becomes `["beer", ">", "food"]`
    IncludeSymbols,
    /// Include punctuation, e.g. `"a.nested_path"` becomes
    /// `["a", ".", "nested", "_", "path"]`
    IncludePunctuation,
    /// Include white space, e.g. `"the  moon"` becomes `["the", "  ", "moon"]`
    IncludeSpaces,
    /// Allow hyphenated words, e.g. `"a family-sized pizza"` becomes
    /// `["a", "family-sized", "pizza"]`
    AllowHyphenatedWords,
    /// Treat these code points as glue, e.g. with `'.'` the text
    /// `"Etc. and so on"` becomes `["Etc.", "and", "so", "on"]`
    IgnoredRunes(Vec<char>),
    /// Treat code points of these kinds as glue
    IgnoredRuneKinds(Vec<RuneKind>),
}

impl ExtractOption {
    /// Glue the given code points onto the surrounding words
    pub fn ignored_runes(runes: impl IntoIterator<Item = char>) -> Self {
        ExtractOption::IgnoredRunes(runes.into_iter().collect())
    }

    /// Glue code points of the given kinds onto the surrounding words
    pub fn ignored_rune_kinds(kinds: impl IntoIterator<Item = RuneKind>) -> Self {
        ExtractOption::IgnoredRuneKinds(kinds.into_iter().collect())
    }

    /// Apply this option to a configuration
    pub fn apply(&self, config: &mut ExtractorConfig) {
        match self {
            ExtractOption::IncludeSymbols => config.include_symbols = true,
            ExtractOption::IncludePunctuation => config.include_punctuation = true,
            ExtractOption::IncludeSpaces => config.include_spaces = true,
            ExtractOption::AllowHyphenatedWords => config.allow_hyphenated_words = true,
            ExtractOption::IgnoredRunes(runes) => {
                config.ignored_runes.extend(runes.iter().copied())
            }
            ExtractOption::IgnoredRuneKinds(kinds) => {
                config.ignored_rune_kinds.extend(kinds.iter().copied())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_excludes_everything() {
        let config = ExtractorConfig::new();
        assert!(!config.include_symbols);
        assert!(!config.include_punctuation);
        assert!(!config.include_spaces);
        assert!(!config.allow_hyphenated_words);
        assert!(config.ignored_runes.is_empty());
        assert!(config.ignored_rune_kinds.is_empty());
    }

    #[test]
    fn test_includes() {
        let config = ExtractorConfig::with_options(&[ExtractOption::IncludeSpaces]);
        assert!(config.includes(RuneKind::Space));
        assert!(!config.includes(RuneKind::Symbol));
        assert!(!config.includes(RuneKind::Punctuation));
        assert!(config.includes(RuneKind::Uppercase));
        assert!(config.includes(RuneKind::Digit));
        assert!(config.includes(RuneKind::Unknown));
    }

    #[test]
    fn test_toggles_are_idempotent_and_commutative() {
        let a = ExtractorConfig::with_options(&[
            ExtractOption::IncludeSymbols,
            ExtractOption::AllowHyphenatedWords,
            ExtractOption::IncludeSymbols,
        ]);
        let b = ExtractorConfig::with_options(&[
            ExtractOption::AllowHyphenatedWords,
            ExtractOption::IncludeSymbols,
        ]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_ignore_lists_are_additive() {
        let config = ExtractorConfig::with_options(&[
            ExtractOption::ignored_runes(['.', '\'']),
            ExtractOption::ignored_runes(['.', '@']),
            ExtractOption::ignored_rune_kinds([RuneKind::Digit]),
            ExtractOption::ignored_rune_kinds([RuneKind::Symbol]),
        ]);
        assert_eq!(config.ignored_runes.len(), 3);
        assert!(config.ignored_runes.contains(&'@'));
        assert!(config.is_ignored('.', RuneKind::Punctuation));
        assert!(config.is_ignored('9', RuneKind::Digit));
        assert!(config.is_ignored('+', RuneKind::Symbol));
        assert!(!config.is_ignored(',', RuneKind::Punctuation));
    }

    #[test]
    fn test_empty_option_list_is_default() {
        assert_eq!(ExtractorConfig::with_options(&[]), ExtractorConfig::default());
        assert_eq!(
            ExtractorConfig::with_options(&[ExtractOption::IgnoredRunes(Vec::new())]),
            ExtractorConfig::default()
        );
    }
}
