//! Analyzer configuration.

use crate::dictionary::DictionaryFormat;
use crate::errors::{SentimentError, SentimentResult};
use crate::tagger::MecabConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for an [`Analyzer`](crate::Analyzer), loadable from TOML.
///
/// `level` and `tagger` are kept as written so that out-of-range levels and
/// unknown tagger names are reported when the analyzer is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Largest n-gram order to match (1 to 3).
    pub level: i64,
    /// Path to the polarity dictionary.
    pub dictionary: PathBuf,
    /// Tagger backend name.
    pub tagger: String,
    /// Treat input as already tagged, space-joined tokens.
    pub skip_tagging: bool,
    pub format: DictionaryFormat,
    pub mecab: MecabConfig,
}

impl AnalyzerConfig {
    /// Trigram depth, `./polarity.csv`, mecab tagging.
    pub fn standard() -> Self {
        Self {
            level: 3,
            dictionary: PathBuf::from("./polarity.csv"),
            tagger: "mecab".into(),
            skip_tagging: false,
            format: DictionaryFormat::default(),
            mecab: MecabConfig::default(),
        }
    }

    /// Load from a TOML file. A missing file yields the standard configuration.
    pub fn load(path: &Path) -> SentimentResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let config_error = |message: String| SentimentError::Config {
            path: path.display().to_string(),
            message,
        };

        let content = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        toml::from_str(&content).map_err(|e| config_error(e.to_string()))
    }

    pub fn with_level(mut self, level: i64) -> Self {
        self.level = level;
        self
    }

    pub fn with_dictionary(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary = path.into();
        self
    }

    pub fn with_tagger(mut self, name: impl Into<String>) -> Self {
        self.tagger = name.into();
        self
    }

    pub fn with_skip_tagging(mut self, skip: bool) -> Self {
        self.skip_tagging = skip;
        self
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::standard()
    }
}
