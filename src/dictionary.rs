//! Polarity dictionary loading and lookup.
//!
//! The dictionary is read once from a CSV source laid out like the KOSAC
//! `polarity.csv` lexicon: one row per n-gram, with the n-gram in one column
//! and its dominant polarity label in another. Multi-token n-grams are already
//! joined with [`NGRAM_SEPARATOR`](crate::NGRAM_SEPARATOR) in the source.

use crate::errors::{SentimentError, SentimentResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Fewer data rows than this is treated as a missing or truncated dictionary.
const MIN_ROWS: usize = 3;

/// Polarity category of a dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Positive,
    Neutral,
    Negative,
}

impl Category {
    /// Lookup order used when a key is listed under several categories.
    pub const PRECEDENCE: [Category; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    /// Score contribution of one match.
    pub fn weight(self) -> i64 {
        match self {
            Self::Positive => 1,
            Self::Neutral => 0,
            Self::Negative => -1,
        }
    }

    /// Parse a source label (`POS`, `NEUT`, `NEG`). Other labels are not categories.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "POS" => Some(Self::Positive),
            "NEUT" => Some(Self::Neutral),
            "NEG" => Some(Self::Negative),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "POS",
            Self::Neutral => "NEUT",
            Self::Negative => "NEG",
        }
    }

    fn rank(self) -> usize {
        match self {
            Self::Positive => 0,
            Self::Neutral => 1,
            Self::Negative => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Column names of the dictionary source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryFormat {
    /// Column holding the n-gram key.
    pub ngram_column: String,
    /// Column holding the `POS`/`NEUT`/`NEG` label.
    pub category_column: String,
}

impl DictionaryFormat {
    /// Layout of KOSAC `polarity.csv`.
    pub fn kosac() -> Self {
        Self {
            ngram_column: "ngram".into(),
            category_column: "max.value".into(),
        }
    }
}

impl Default for DictionaryFormat {
    fn default() -> Self {
        Self::kosac()
    }
}

/// Immutable index from n-gram key to polarity category.
///
/// Safe to share between threads once loaded.
#[derive(Debug, Clone, Default)]
pub struct SentimentDictionary {
    entries: HashMap<String, Category>,
}

impl SentimentDictionary {
    /// Load a dictionary file in the KOSAC layout.
    pub fn load(path: &Path) -> SentimentResult<Self> {
        Self::load_with_format(path, &DictionaryFormat::default())
    }

    /// Load a dictionary file with custom column names.
    pub fn load_with_format(path: &Path, format: &DictionaryFormat) -> SentimentResult<Self> {
        let file = File::open(path).map_err(|e| SentimentError::DictionaryLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_reader(file, &path.display().to_string(), format)
    }

    /// Read a dictionary from any CSV source. `origin` names the source in errors.
    pub fn from_reader<R: Read>(
        reader: R,
        origin: &str,
        format: &DictionaryFormat,
    ) -> SentimentResult<Self> {
        let load_error = |message: String| SentimentError::DictionaryLoad {
            path: origin.to_string(),
            message,
        };

        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = csv_reader
            .headers()
            .map_err(|e| load_error(e.to_string()))?
            .clone();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            rows.push(record.map_err(|e| load_error(e.to_string()))?);
        }

        if rows.len() < MIN_ROWS {
            return Err(load_error(format!(
                "expected at least {} rows, found {}",
                MIN_ROWS,
                rows.len()
            )));
        }

        let column = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim() == name)
                .ok_or_else(|| load_error(format!("missing column `{}`", name)))
        };
        let ngram_idx = column(&format.ngram_column)?;
        let category_idx = column(&format.category_column)?;

        let entries = rows.iter().filter_map(|row| {
            let ngram = row.get(ngram_idx)?;
            let category = Category::from_label(row.get(category_idx)?)?;
            Some((ngram.to_string(), category))
        });

        Ok(Self::from_entries(entries))
    }

    /// Build a dictionary from `(key, category)` pairs.
    ///
    /// A key listed under several categories keeps the one that comes first
    /// in [`Category::PRECEDENCE`].
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Category)>,
    {
        let mut index: HashMap<String, Category> = HashMap::new();
        for (key, category) in entries {
            index
                .entry(key.into())
                .and_modify(|existing| {
                    if category.rank() < existing.rank() {
                        *existing = category;
                    }
                })
                .or_insert(category);
        }
        Self { entries: index }
    }

    /// Exact-match lookup of an n-gram key.
    pub fn lookup(&self, key: &str) -> Option<Category> {
        self.entries.get(key).copied()
    }

    /// Number of keys in the given category.
    pub fn count(&self, category: Category) -> usize {
        self.entries.values().filter(|c| **c == category).count()
    }

    /// Keys of the given category, in no particular order.
    pub fn keys(&self, category: Category) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |(_, c)| **c == category)
            .map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
