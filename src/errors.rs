//! Error types for sentiment analysis.
//!
//! Every failure of the analyzer is reported through [`SentimentError`].
//! None of them is retried internally.

use thiserror::Error;

/// Errors that can occur while loading a dictionary, tagging, or scoring.
#[derive(Debug, Error)]
pub enum SentimentError {
    /// The polarity dictionary could not be loaded.
    #[error("failed to load dictionary: {path}: {message}")]
    DictionaryLoad { path: String, message: String },

    /// The requested tagger name is not one of the supported backends.
    #[error("unknown tagger `{name}` (expected one of hannanum, kkma, komoran, mecab, okt)")]
    UnknownTagger { name: String },

    /// The depth level is outside 1..=3.
    #[error("level must be between 1 and 3, got {level}")]
    InvalidLevel { level: i64 },

    /// No backend is registered for the selected tagger.
    #[error("no backend registered for tagger `{tagger}`")]
    TaggerUnavailable { tagger: String },

    /// The tagger backend failed.
    #[error("tagger `{tagger}` failed: {message}")]
    Tagging { tagger: String, message: String },

    /// The analyzer configuration could not be read.
    #[error("invalid configuration: {path}: {message}")]
    Config { path: String, message: String },
}

/// Result type for sentiment operations.
pub type SentimentResult<T> = Result<T, SentimentError>;
