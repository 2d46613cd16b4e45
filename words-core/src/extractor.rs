//! Single-pass word extraction
//!
//! The extractor walks the input once, left to right, classifying each code
//! point and deciding whether it extends the current run, opens a new run or
//! is dropped. Rules, in evaluation order:
//!
//! 1. Ignored runes and ignored kinds are glued onto the current run.
//! 2. With hyphenation enabled, a hyphen between two letters of the same case
//!    stays inside the word.
//! 3. Symbols, punctuation and spaces are dropped unless included, but still
//!    end the run before them.
//! 4. Code points of the same kind as the previous one extend the run.
//! 5. An uppercase run followed by a lowercase letter hands its last letter
//!    to the new run, so `"YAMLParser"` splits into `"YAML"` and `"Parser"`.

use crate::config::{ExtractorConfig, HYPHEN};
use crate::kind::{classify, RuneKind};
use std::borrow::Cow;
use tracing::{debug, trace};

/// Word extractor bound to one configuration
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create an extractor with the given configuration
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Split text into words
    pub fn extract(&self, input: &str) -> Vec<String> {
        let mut runs = RunBuffer::with_capacity(input.len() / 4);
        let mut last_kind: Option<RuneKind> = None;
        let mut chars = input.chars().map(|ch| (ch, classify(ch))).peekable();

        while let Some((ch, kind)) = chars.next() {
            let next_kind = chars.peek().map(|&(_, next)| next);

            if self.config.is_ignored(ch, kind) {
                runs.push(ch);
                last_kind = next_kind;
                continue;
            }

            if self.config.allow_hyphenated_words && joins_words(ch, last_kind, next_kind) {
                runs.push(ch);
                continue;
            }

            if !self.config.includes(kind) {
                last_kind = Some(kind);
                continue;
            }

            if last_kind == Some(kind) {
                runs.push(ch);
                continue;
            }

            runs.open(ch);

            if last_kind == Some(RuneKind::Uppercase) && kind == RuneKind::Lowercase {
                runs.carry_back();
            }

            last_kind = Some(kind);
        }

        let words = runs.into_words();
        trace!(words = words.len(), bytes = input.len(), "extracted words");
        words
    }

    /// Split raw bytes into words.
    ///
    /// Bytes that are not valid UTF-8 are not split at all: the whole input
    /// comes back as the only element.
    pub fn extract_bytes<'a>(&self, input: &'a [u8]) -> Vec<Cow<'a, [u8]>> {
        match std::str::from_utf8(input) {
            Ok(text) => self
                .extract(text)
                .into_iter()
                .map(|word| Cow::Owned(word.into_bytes()))
                .collect(),
            Err(err) => {
                debug!(
                    bytes = input.len(),
                    valid_up_to = err.valid_up_to(),
                    "input is not valid UTF-8, returning it unsplit"
                );
                vec![Cow::Borrowed(input)]
            }
        }
    }
}

/// Check if a hyphen sits between two letters of the same case
fn joins_words(ch: char, last_kind: Option<RuneKind>, next_kind: Option<RuneKind>) -> bool {
    if ch != HYPHEN {
        return false;
    }

    // "SOME-word" must still split
    match (last_kind, next_kind) {
        (Some(last), Some(next)) => last == next && last.is_letter(),
        _ => false,
    }
}

/// Runs collected so far, the last one being the open run
#[derive(Debug, Default)]
struct RunBuffer {
    runs: Vec<String>,
}

impl RunBuffer {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            runs: Vec::with_capacity(capacity),
        }
    }

    /// Append to the open run, opening one if there is none yet
    fn push(&mut self, ch: char) {
        match self.runs.last_mut() {
            Some(run) => run.push(ch),
            None => self.open(ch),
        }
    }

    fn open(&mut self, ch: char) {
        self.runs.push(String::from(ch));
    }

    /// Move the last code point of the previous run to the front of the open run
    fn carry_back(&mut self) {
        let len = self.runs.len();
        if len < 2 {
            return;
        }

        if let Some(ch) = self.runs[len - 2].pop() {
            self.runs[len - 1].insert(0, ch);
        }
    }

    /// Finish, dropping runs emptied by carry-back
    fn into_words(self) -> Vec<String> {
        self.runs.into_iter().filter(|run| !run.is_empty()).collect()
    }
}
