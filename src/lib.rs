//! Dictionary-driven compositional sentiment scoring.
//!
//! A sentence is a sequence of part-of-speech tagged tokens (`surface/TAG`).
//! Its score is the sum of the polarities of the dictionary n-grams found in
//! it, where longer matches take priority over the tokens they cover.
//!
//! ## Modules
//!
//! - [`dictionary`] - Loading and indexing the polarity dictionary
//! - [`pass`] - A single unigram, bigram or trigram matching pass
//! - [`scorer`] - Running the passes from the depth level down to unigrams
//! - [`analyzer`] - The entry point: tagging, dictionary loading and scoring
//! - [`config`] - Analyzer configuration loaded from TOML
//! - [`errors`] - Error types shared by every module
//! - [`tagger`] - Tagger backends
//! - [`trace`] - Hooks for observing the passes
//!
//! ## Example
//!
//! ```
//! use layered_sentiment::{score, Category, SentimentDictionary, TokenSequence};
//!
//! let dictionary = SentimentDictionary::from_entries(vec![
//!     ("좋/VA;지/EC;않/VX", Category::Negative),
//!     ("좋/VA", Category::Positive),
//! ]);
//! let tokens = TokenSequence::from_tagged_text("좋/VA 지/EC 않/VX 다/EF");
//!
//! assert_eq!(score(&tokens, 3, &dictionary).unwrap(), -1);
//! assert_eq!(score(&tokens, 1, &dictionary).unwrap(), 1);
//! ```

pub mod analyzer;
pub mod config;
pub mod dictionary;
mod display;
pub mod errors;
mod order;
pub mod pass;
pub mod scorer;
pub mod tagger;
mod tokens;
pub mod trace;

pub use analyzer::{analyze, Analyzer};
pub use config::AnalyzerConfig;
pub use dictionary::{Category, DictionaryFormat, SentimentDictionary};
pub use display::AnalysisDisplay;
pub use errors::{SentimentError, SentimentResult};
pub use order::NGramOrder;
pub use pass::{run_pass, ClaimedSet, NGramMatch, PassOutcome};
pub use scorer::{score, score_at, Analysis, PassSummary};
pub use tagger::{parse_mecab_output, MecabCommand, MecabConfig, Tagger, TaggerKind};
pub use tokens::{ngram_key, TaggedToken, TokenSequence, NGRAM_SEPARATOR};
pub use trace::{LogTracer, NoopTracer, ScoreTracer};
