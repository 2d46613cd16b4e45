//! Data Transfer Objects for API

/// Extraction metadata
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Total bytes of input
    pub total_bytes: usize,
    /// Total code points of input
    pub total_chars: usize,
    /// Number of words extracted
    pub word_count: usize,
}

/// Extracted words with metadata
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Words in input order
    pub words: Vec<String>,
    /// Extraction metadata
    pub metadata: Metadata,
}

impl Output {
    /// Create output for the given input text and its words
    pub fn new(text: &str, words: Vec<String>) -> Self {
        let metadata = Metadata {
            total_bytes: text.len(),
            total_chars: text.chars().count(),
            word_count: words.len(),
        };

        Self { words, metadata }
    }

    /// Serialize to JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
