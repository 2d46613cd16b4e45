//! Character kind classification
//!
//! Every code point of the input is assigned exactly one [`RuneKind`]. Runs of
//! equal kind become words; the transitions between kinds are word boundaries.

use core::fmt;
use core::str::FromStr;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Kind of a single code point
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RuneKind {
    /// Math, currency, modifier and other symbols (`S*`)
    Symbol,
    /// Uppercase letter (`Lu`)
    Uppercase,
    /// Lowercase letter (`Ll`)
    Lowercase,
    /// White space
    Space,
    /// Decimal digit (`Nd`)
    Digit,
    /// Punctuation (`P*`)
    Punctuation,
    /// Anything else
    Unknown,
}

impl RuneKind {
    /// All kinds, in classification priority order
    pub const ALL: [RuneKind; 7] = [
        RuneKind::Symbol,
        RuneKind::Uppercase,
        RuneKind::Lowercase,
        RuneKind::Space,
        RuneKind::Digit,
        RuneKind::Punctuation,
        RuneKind::Unknown,
    ];

    /// Lowercase name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            RuneKind::Symbol => "symbol",
            RuneKind::Uppercase => "uppercase",
            RuneKind::Lowercase => "lowercase",
            RuneKind::Space => "space",
            RuneKind::Digit => "digit",
            RuneKind::Punctuation => "punctuation",
            RuneKind::Unknown => "unknown",
        }
    }

    /// Check if this is a cased letter kind
    pub fn is_letter(&self) -> bool {
        matches!(self, RuneKind::Uppercase | RuneKind::Lowercase)
    }
}

impl fmt::Display for RuneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a kind name is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRuneKindError {
    name: String,
}

impl ParseRuneKindError {
    /// The name that failed to parse
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseRuneKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown rune kind: {:?}", self.name)
    }
}

impl std::error::Error for ParseRuneKindError {}

impl FromStr for RuneKind {
    type Err = ParseRuneKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuneKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseRuneKindError {
                name: s.to_string(),
            })
    }
}

/// Classify a code point.
///
/// Predicates are checked in a fixed order and the first match wins:
/// symbol, uppercase, lowercase, space, digit, punctuation. General categories
/// overlap with the white space property (e.g. `U+0085` is a control), so the
/// order is significant.
pub fn classify(ch: char) -> RuneKind {
    let category = get_general_category(ch);

    if is_symbol(category) {
        RuneKind::Symbol
    } else if category == GeneralCategory::UppercaseLetter {
        RuneKind::Uppercase
    } else if category == GeneralCategory::LowercaseLetter {
        RuneKind::Lowercase
    } else if ch.is_whitespace() {
        RuneKind::Space
    } else if category == GeneralCategory::DecimalNumber {
        RuneKind::Digit
    } else if is_punctuation(category) {
        RuneKind::Punctuation
    } else {
        RuneKind::Unknown
    }
}

fn is_symbol(category: GeneralCategory) -> bool {
    matches!(
        category,
        GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}

fn is_punctuation(category: GeneralCategory) -> bool {
    matches!(
        category,
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}
