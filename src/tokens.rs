//! Token sequences and n-gram keys.

use std::fmt;

/// Joiner placed between tokens of a multi-token dictionary key.
///
/// It must never appear inside a token; tokens containing it produce keys
/// that cannot be told apart from longer n-grams.
pub const NGRAM_SEPARATOR: char = ';';

/// A `(surface, tag)` pair produced by a part-of-speech tagger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub surface: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(surface: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            tag: tag.into(),
        }
    }
}

impl fmt::Display for TaggedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.surface, self.tag)
    }
}

/// An ordered sequence of `surface/TAG` tokens.
///
/// Order is preserved exactly as received. The sequence may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<String>,
}

impl TokenSequence {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Split a space-joined, pre-tagged sentence.
    ///
    /// Empty pieces produced by leading, trailing or doubled spaces are dropped.
    pub fn from_tagged_text(text: &str) -> Self {
        Self {
            tokens: text
                .split(' ')
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Linearize tagger output as `surface/tag` tokens.
    pub fn from_tagged_tokens<'a>(tagged: impl IntoIterator<Item = &'a TaggedToken>) -> Self {
        Self {
            tokens: tagged.into_iter().map(ToString::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Contiguous windows of `len` tokens, paired with their start index.
    ///
    /// Yields nothing when the sequence is shorter than `len`.
    pub fn windows(&self, len: usize) -> impl Iterator<Item = (usize, &[String])> {
        // `slice::windows` panics on zero
        self.tokens.windows(len.max(1)).enumerate()
    }
}

impl<S: Into<String>> FromIterator<S> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

/// Build the dictionary key for a window of tokens.
pub fn ngram_key<S: AsRef<str>>(window: &[S]) -> String {
    let mut key = String::new();
    for (idx, token) in window.iter().enumerate() {
        if idx > 0 {
            key.push(NGRAM_SEPARATOR);
        }
        key.push_str(token.as_ref());
    }
    key
}
