//! Entry point tying tagging, dictionary and scoring together.

use crate::config::AnalyzerConfig;
use crate::dictionary::{Category, SentimentDictionary};
use crate::errors::{SentimentError, SentimentResult};
use crate::order::NGramOrder;
use crate::scorer::{score_at, Analysis};
use crate::tagger::{MecabCommand, Tagger, TaggerKind};
use crate::tokens::TokenSequence;
use crate::trace::{NoopTracer, ScoreTracer};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Scores sentences against a shared, read-only polarity dictionary.
///
/// An `Analyzer` holds no per-sentence state and can be shared between threads.
pub struct Analyzer {
    dictionary: Arc<SentimentDictionary>,
    level: NGramOrder,
    tagger: TaggerKind,
    skip_tagging: bool,
    backends: HashMap<TaggerKind, Box<dyn Tagger>>,
    tracer: Box<dyn ScoreTracer + Send + Sync>,
}

impl Analyzer {
    /// Analyzer over a pre-loaded dictionary, tagging with the default mecab backend.
    pub fn new(dictionary: Arc<SentimentDictionary>, level: NGramOrder) -> Self {
        let mut backends: HashMap<TaggerKind, Box<dyn Tagger>> = HashMap::new();
        backends.insert(TaggerKind::Mecab, Box::new(MecabCommand::default()));

        Self {
            dictionary,
            level,
            tagger: TaggerKind::default(),
            skip_tagging: false,
            backends,
            tracer: Box::new(NoopTracer),
        }
    }

    /// Build from configuration.
    ///
    /// The tagger name is checked first, then the level, and only then is the
    /// dictionary read.
    pub fn from_config(config: &AnalyzerConfig) -> SentimentResult<Self> {
        let tagger: TaggerKind = config.tagger.parse()?;
        let level = NGramOrder::try_from(config.level)?;

        let dictionary = SentimentDictionary::load_with_format(&config.dictionary, &config.format)?;
        tracing::info!(
            path = %config.dictionary.display(),
            positive = dictionary.count(Category::Positive),
            neutral = dictionary.count(Category::Neutral),
            negative = dictionary.count(Category::Negative),
            "loaded polarity dictionary"
        );

        Ok(Self::new(Arc::new(dictionary), level)
            .with_tagger(tagger)
            .with_skip_tagging(config.skip_tagging)
            .register_tagger(TaggerKind::Mecab, MecabCommand::new(config.mecab.clone())))
    }

    /// Select the tagger backend used for raw text.
    pub fn with_tagger(mut self, kind: TaggerKind) -> Self {
        self.tagger = kind;
        self
    }

    /// Provide the backend for a tagger kind, replacing any existing one.
    pub fn register_tagger(mut self, kind: TaggerKind, tagger: impl Tagger + 'static) -> Self {
        self.backends.insert(kind, Box::new(tagger));
        self
    }

    pub fn with_skip_tagging(mut self, skip: bool) -> Self {
        self.skip_tagging = skip;
        self
    }

    pub fn with_tracer(mut self, tracer: impl ScoreTracer + Send + Sync + 'static) -> Self {
        self.tracer = Box::new(tracer);
        self
    }

    pub fn dictionary(&self) -> &Arc<SentimentDictionary> {
        &self.dictionary
    }

    pub fn level(&self) -> NGramOrder {
        self.level
    }

    pub fn tagger(&self) -> TaggerKind {
        self.tagger
    }

    /// Turn input text into tokens, tagging it unless tagging is skipped.
    pub fn tokenize(&self, text: &str) -> SentimentResult<TokenSequence> {
        if self.skip_tagging {
            return Ok(TokenSequence::from_tagged_text(text));
        }

        let backend = self
            .backends
            .get(&self.tagger)
            .ok_or_else(|| SentimentError::TaggerUnavailable {
                tagger: self.tagger.to_string(),
            })?;
        let tagged = backend.tag(text)?;
        Ok(TokenSequence::from_tagged_tokens(&tagged))
    }

    /// Sentiment score of `text`.
    pub fn analyze(&self, text: &str) -> SentimentResult<i64> {
        Ok(self.analyze_detailed(text)?.score)
    }

    /// Score of `text` with the per-pass breakdown.
    pub fn analyze_detailed(&self, text: &str) -> SentimentResult<Analysis> {
        let tokens = self.tokenize(text)?;
        Ok(self.score_tokens(&tokens))
    }

    /// Score an already tokenized sentence.
    pub fn score_tokens(&self, tokens: &TokenSequence) -> Analysis {
        let analysis = score_at(tokens, self.level, &self.dictionary, self.tracer.as_ref());
        tracing::debug!(
            tokens = tokens.len(),
            level = %self.level,
            score = analysis.score,
            "scored sentence"
        );
        analysis
    }
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut backends: Vec<_> = self.backends.keys().map(|kind| kind.name()).collect();
        backends.sort_unstable();
        f.debug_struct("Analyzer")
            .field("entries", &self.dictionary.len())
            .field("level", &self.level)
            .field("tagger", &self.tagger)
            .field("skip_tagging", &self.skip_tagging)
            .field("backends", &backends)
            .finish()
    }
}

/// One-shot analysis: validate `config`, load its dictionary, score `text`.
pub fn analyze(text: &str, config: &AnalyzerConfig) -> SentimentResult<i64> {
    Analyzer::from_config(config)?.analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TaggedToken;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DICTIONARY: &str = "\
ngram,max.value
좋/VA,POS
나쁘/VA,NEG
않/VX,NEUT
좋/VA;지/EC;않/VX,NEG
";

    fn dictionary_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", DICTIONARY).unwrap();
        file
    }

    fn whitespace_tagger(text: &str) -> SentimentResult<Vec<TaggedToken>> {
        Ok(text
            .split_whitespace()
            .filter_map(|word| word.split_once('_'))
            .map(|(surface, tag)| TaggedToken::new(surface, tag))
            .collect())
    }

    #[test]
    fn test_analyze_pretagged() {
        let file = dictionary_file();
        let config = AnalyzerConfig::default()
            .with_dictionary(file.path())
            .with_skip_tagging(true);

        assert_eq!(analyze("좋/VA 지/EC 않/VX 다/EF", &config).unwrap(), -1);
        assert_eq!(analyze("좋/VA 다/EF", &config).unwrap(), 1);
        assert_eq!(analyze("", &config).unwrap(), 0);
    }

    #[test]
    fn test_unknown_tagger_checked_before_dictionary() {
        let config = AnalyzerConfig::default()
            .with_dictionary("/nonexistent/polarity.csv")
            .with_tagger("spacy");

        assert!(matches!(
            Analyzer::from_config(&config),
            Err(SentimentError::UnknownTagger { .. })
        ));
    }

    #[test]
    fn test_invalid_level_checked_before_dictionary() {
        let config = AnalyzerConfig::default()
            .with_dictionary("/nonexistent/polarity.csv")
            .with_level(4);

        assert!(matches!(
            Analyzer::from_config(&config),
            Err(SentimentError::InvalidLevel { level: 4 })
        ));
    }

    #[test]
    fn test_missing_dictionary() {
        let config = AnalyzerConfig::default().with_dictionary("/nonexistent/polarity.csv");

        assert!(matches!(
            analyze("좋/VA", &config),
            Err(SentimentError::DictionaryLoad { .. })
        ));
    }

    #[test]
    fn test_registered_tagger() {
        let file = dictionary_file();
        let config = AnalyzerConfig::default()
            .with_dictionary(file.path())
            .with_tagger("komoran");
        let analyzer = Analyzer::from_config(&config)
            .unwrap()
            .register_tagger(TaggerKind::Komoran, whitespace_tagger);

        assert_eq!(analyzer.analyze("나쁘_VA 다_EF").unwrap(), -1);
        let analysis = analyzer.analyze_detailed("좋_VA 지_EC 않_VX").unwrap();
        assert_eq!(analysis.score, -1);
        assert_eq!(analysis.delta(NGramOrder::Trigram), -1);
    }

    #[test]
    fn test_tagger_without_backend() {
        let dictionary = Arc::new(SentimentDictionary::default());
        let analyzer = Analyzer::new(dictionary, NGramOrder::Trigram).with_tagger(TaggerKind::Kkma);

        assert!(matches!(
            analyzer.analyze("좋다"),
            Err(SentimentError::TaggerUnavailable { .. })
        ));
    }

    #[test]
    fn test_skip_tagging_ignores_tagger() {
        let dictionary = Arc::new(SentimentDictionary::from_entries(vec![(
            "좋/VA",
            Category::Positive,
        )]));
        let analyzer = Analyzer::new(dictionary, NGramOrder::Unigram)
            .with_tagger(TaggerKind::Hannanum)
            .with_skip_tagging(true);

        assert_eq!(analyzer.analyze("좋/VA 좋/VA").unwrap(), 2);
    }

    #[test]
    fn test_debug_lists_backends() {
        let analyzer = Analyzer::new(Arc::new(SentimentDictionary::default()), NGramOrder::Bigram)
            .register_tagger(TaggerKind::Okt, whitespace_tagger);
        let debug = format!("{:?}", analyzer);
        assert!(debug.contains(r#"backends: ["mecab", "okt"]"#));
    }
}
