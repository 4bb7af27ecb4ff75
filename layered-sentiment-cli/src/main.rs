//! Sentiment analysis for Korean text using a KOSAC polarity dictionary.
//!
//! Usage:
//!   layered-sentiment -l 2 -n 걱정/NNG 없/VA 다/EF
//!   layered-sentiment --explain "걱정 없는 하루"

use anyhow::{Context, Result};
use clap::Parser;
use layered_sentiment::{AnalysisDisplay, Analyzer, AnalyzerConfig, LogTracer, SentimentError};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "layered-sentiment")]
#[command(about = "Sentiment analysis for Korean using KOSAC")]
struct Args {
    /// Sentence to analyze
    #[arg(required = true)]
    sentence: Vec<String>,

    /// The depth of the n-gram. An integer between 1 and 3
    #[arg(short, long)]
    level: Option<i64>,

    /// Tagger to use
    #[arg(short, long)]
    tagger: Option<String>,

    /// Treat the sentence as already tagged `surface/TAG` tokens
    #[arg(short = 'n', long)]
    no_tagging: bool,

    /// File name for sentiment dictionary
    #[arg(short, long = "file-name")]
    file_name: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, default_value = "layered-sentiment.toml")]
    config: PathBuf,

    /// Trace every n-gram lookup
    #[arg(short, long)]
    debug: bool,

    /// Show the matched n-grams under the sentence
    #[arg(long)]
    explain: bool,

    /// Print the full analysis as JSON
    #[arg(long, conflicts_with = "explain")]
    json: bool,
}

impl Args {
    fn analyzer_config(&self) -> Result<AnalyzerConfig> {
        let mut config = AnalyzerConfig::load(&self.config)
            .with_context(|| format!("Failed to read config: {}", self.config.display()))?;

        if let Some(level) = self.level {
            config.level = level;
        }
        if let Some(tagger) = &self.tagger {
            config.tagger = tagger.clone();
        }
        if let Some(file_name) = &self.file_name {
            config.dictionary = file_name.clone();
        }
        if self.no_tagging {
            config.skip_tagging = true;
        }

        Ok(config)
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let sentence = args.sentence.join(" ");
    let config = args.analyzer_config()?;

    let mut analyzer = Analyzer::from_config(&config).map_err(|e| match e {
        SentimentError::DictionaryLoad { .. } => anyhow::Error::new(e).context(
            "Please get the polarity.csv-like dictionary file from the KOSAC page: \
             http://word.snu.ac.kr/kosac/lexicon.php",
        ),
        SentimentError::UnknownTagger { .. } => anyhow::Error::new(e)
            .context("Refer to https://konlpy.org/en/latest/ for available taggers."),
        other => other.into(),
    })?;
    if args.debug {
        analyzer = analyzer.with_tracer(LogTracer);
    }

    tracing::debug!(%sentence, level = %analyzer.level(), tagger = %analyzer.tagger(), "analyzing");
    let tokens = analyzer
        .tokenize(&sentence)
        .with_context(|| format!("Failed to tag sentence with {}", analyzer.tagger()))?;
    let analysis = analyzer.score_tokens(&tokens);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else if args.explain {
        println!("{}", AnalysisDisplay::new(&tokens, &analysis));
    } else {
        println!(
            "The sentiment score of the following sentence is {}.\n    {}",
            analysis.score, sentence
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::try_parse_from([
            "layered-sentiment",
            "-l",
            "2",
            "-t",
            "okt",
            "-n",
            "-f",
            "dict.csv",
            "-c",
            "/nonexistent/layered-sentiment.toml",
            "좋/VA",
            "다/EF",
        ])
        .unwrap();

        assert_eq!(args.sentence.join(" "), "좋/VA 다/EF");
        let config = args.analyzer_config().unwrap();
        assert_eq!(config.level, 2);
        assert_eq!(config.tagger, "okt");
        assert!(config.skip_tagging);
        assert_eq!(config.dictionary, PathBuf::from("dict.csv"));
    }

    #[test]
    fn test_defaults_come_from_config() {
        let args = Args::try_parse_from([
            "layered-sentiment",
            "-c",
            "/nonexistent/layered-sentiment.toml",
            "좋다",
        ])
        .unwrap();

        let config = args.analyzer_config().unwrap();
        assert_eq!(config, AnalyzerConfig::default());
    }

    #[test]
    fn test_sentence_is_required() {
        assert!(Args::try_parse_from(["layered-sentiment", "-l", "1"]).is_err());
    }

    #[test]
    fn test_json_conflicts_with_explain() {
        assert!(Args::try_parse_from(["layered-sentiment", "--json", "--explain", "좋다"]).is_err());
    }
}
