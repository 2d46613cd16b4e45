//! Rule-based word extraction
//!
//! Splits text into words by classifying every code point into a
//! [`RuneKind`] and grouping adjacent code points of the same kind. Camel-case
//! boundaries are detected, hyphenated words can optionally be kept whole, and
//! individual code points or whole kinds can be declared glue.
//!
//! This is not a natural-language tokenizer: there is no dictionary and no
//! locale-aware word breaking, only a deterministic pass over code points.
//!
//! # Example
//!
//! ```rust
//! use words_core::{Extractor, ExtractorConfig, ExtractOption};
//!
//! let extractor = Extractor::default();
//! assert_eq!(extractor.extract("YAMLParser"), vec!["YAML", "Parser"]);
//!
//! let config = ExtractorConfig::with_options(&[ExtractOption::AllowHyphenatedWords]);
//! let extractor = Extractor::new(config);
//! assert_eq!(
//!     extractor.extract("a dog-friendly home"),
//!     vec!["a", "dog-friendly", "home"]
//! );
//! ```

pub mod config;
pub mod extractor;
pub mod kind;

pub use config::{ExtractOption, ExtractorConfig, HYPHEN};
pub use extractor::Extractor;
pub use kind::{classify, ParseRuneKindError, RuneKind};
