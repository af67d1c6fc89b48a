//! Canonical question text: lower-cased, punctuation-free, stemmed.

use std::borrow::Cow;
use std::fmt;

use rust_stemmers::{Algorithm, Stemmer};

/// Tokenizer and stemmer pair used to build normalized keys.
///
/// Changing the implementation changes every stored key, so the algorithm
/// in use must stay fixed for the lifetime of a store.
pub trait TextAnalyzer: Send + Sync {
    /// Split punctuation-free, lower-case text into tokens.
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Reduce a single token to its stem.
    fn stem<'a>(&self, token: &'a str) -> Cow<'a, str>;
}

/// Whitespace tokenizer with the Snowball English (Porter2) stemmer.
///
/// Porter2 is not idempotent on every word: "recursion" stems to "recurs",
/// which stems again to "recur". Normalizing an already normalized key can
/// therefore change it; only raw text should be passed to the normalizer.
pub struct EnglishAnalyzer {
    stemmer: Stemmer,
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl TextAnalyzer for EnglishAnalyzer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_whitespace().collect()
    }

    fn stem<'a>(&self, token: &'a str) -> Cow<'a, str> {
        self.stemmer.stem(token)
    }
}

/// Normalized form of a question, used as storage key and comparison basis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
impl NormalizedText {
    /// Wrap text that is already in normalized form.
    pub(crate) fn from_normalized(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// Turns raw question text into [`NormalizedText`].
pub struct Normalizer {
    analyzer: Box<dyn TextAnalyzer>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(EnglishAnalyzer::default())
    }
}

impl Normalizer {
    pub fn new(analyzer: impl TextAnalyzer + 'static) -> Self {
        Self {
            analyzer: Box::new(analyzer),
        }
    }

    /// Normalize `text`. Total: any input produces a key, possibly empty.
    ///
    /// Steps run in a fixed order: lower-case, strip every character that is
    /// neither an ASCII word character (`[A-Za-z0-9_]`) nor whitespace,
    /// tokenize, stem each token and join with single spaces. Accented and
    /// other non-ASCII letters are stripped, so "café" keys as "caf".
    pub fn normalize(&self, text: &str) -> NormalizedText {
        let stripped: String = text
            .to_lowercase()
            .chars()
            .filter(|c| is_word_char(*c) || c.is_whitespace())
            .collect();

        let stemmed: Vec<Cow<'_, str>> = self
            .analyzer
            .tokenize(&stripped)
            .into_iter()
            .map(|token| self.analyzer.stem(token))
            .collect();

        NormalizedText(stemmed.join(" "))
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
