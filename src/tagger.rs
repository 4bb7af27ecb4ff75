//! Part-of-speech tagger seam.
//!
//! Tagging itself happens outside this crate. A backend is anything that
//! implements [`Tagger`]; [`TaggerKind`] is the closed set of backend names a
//! configuration may select.

use crate::errors::{SentimentError, SentimentResult};
use crate::tokens::TaggedToken;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::str::FromStr;
use std::thread;

/// Converts raw text into `(surface, tag)` pairs.
pub trait Tagger: Send + Sync {
    fn tag(&self, text: &str) -> SentimentResult<Vec<TaggedToken>>;
}

impl<F> Tagger for F
where
    F: Fn(&str) -> SentimentResult<Vec<TaggedToken>> + Send + Sync,
{
    fn tag(&self, text: &str) -> SentimentResult<Vec<TaggedToken>> {
        self(text)
    }
}

/// Supported tagger backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaggerKind {
    Hannanum,
    Kkma,
    Komoran,
    #[default]
    Mecab,
    Okt,
}

impl TaggerKind {
    pub const ALL: [TaggerKind; 5] = [
        Self::Hannanum,
        Self::Kkma,
        Self::Komoran,
        Self::Mecab,
        Self::Okt,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Hannanum => "hannanum",
            Self::Kkma => "kkma",
            Self::Komoran => "komoran",
            Self::Mecab => "mecab",
            Self::Okt => "okt",
        }
    }
}

impl FromStr for TaggerKind {
    type Err = SentimentError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "hannanum" => Ok(Self::Hannanum),
            "kkma" => Ok(Self::Kkma),
            "komoran" => Ok(Self::Komoran),
            "mecab" => Ok(Self::Mecab),
            "okt" | "twitter" => Ok(Self::Okt),
            _ => Err(SentimentError::UnknownTagger {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for TaggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How to invoke the `mecab` executable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MecabConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for MecabConfig {
    fn default() -> Self {
        Self {
            program: "mecab".into(),
            args: Vec::new(),
        }
    }
}

/// Backend that pipes text through an external `mecab` process.
///
/// Expects mecab-ko output: one `surface\tTAG,feature,...` line per morpheme
/// and an `EOS` line after each sentence.
#[derive(Debug, Clone, Default)]
pub struct MecabCommand {
    config: MecabConfig,
}

impl MecabCommand {
    pub fn new(config: MecabConfig) -> Self {
        Self { config }
    }

    fn failure(&self, message: impl Into<String>) -> SentimentError {
        SentimentError::Tagging {
            tagger: TaggerKind::Mecab.to_string(),
            message: message.into(),
        }
    }
}

impl Tagger for MecabCommand {
    fn tag(&self, text: &str) -> SentimentResult<Vec<TaggedToken>> {
        let mut child = Command::new(&self.config.program)
            .args(&self.config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.failure(format!("cannot run `{}`: {}", self.config.program, e)))?;

        // stdout is drained while stdin is written, or a full pipe on either
        // side blocks both processes
        let stdin = child.stdin.take();
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || -> io::Result<()> {
                if let Some(mut stdin) = stdin {
                    stdin.write_all(text.as_bytes())?;
                    stdin.write_all(b"\n")?;
                }
                Ok(())
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::new(io::ErrorKind::Other, "stdin writer panicked")));
            (written, output)
        });

        let output = output.map_err(|e| self.failure(e.to_string()))?;
        if !output.status.success() {
            return Err(self.failure(format!(
                "exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        written.map_err(|e| self.failure(e.to_string()))?;

        let stdout = String::from_utf8(output.stdout).map_err(|e| self.failure(e.to_string()))?;
        Ok(parse_mecab_output(&stdout))
    }
}

/// Parse mecab output into tagged tokens, ignoring `EOS` markers and blank lines.
pub fn parse_mecab_output(output: &str) -> Vec<TaggedToken> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty() && line.trim() != "EOS")
        .filter_map(|line| {
            let (surface, features) = line.split_once('\t')?;
            let tag = features.split(',').next().unwrap_or(features);
            Some(TaggedToken::new(surface, tag))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("mecab".parse::<TaggerKind>().unwrap(), TaggerKind::Mecab);
        assert_eq!("Komoran".parse::<TaggerKind>().unwrap(), TaggerKind::Komoran);
        assert_eq!("twitter".parse::<TaggerKind>().unwrap(), TaggerKind::Okt);
        for kind in TaggerKind::ALL {
            assert_eq!(kind.name().parse::<TaggerKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_default_is_mecab() {
        assert_eq!(TaggerKind::default(), TaggerKind::Mecab);
    }

    #[test]
    fn test_unknown_name() {
        match "spacy".parse::<TaggerKind>() {
            Err(SentimentError::UnknownTagger { name }) => assert_eq!(name, "spacy"),
            other => panic!("expected UnknownTagger, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_mecab_output() {
        let output = "동해\tNNP,지명,T,동해,*,*,*,*\n물\tNNG,*,T,물,*,*,*,*\n과\tJC,*,F,과,*,*,*,*\nEOS\n";
        let tokens = parse_mecab_output(output);
        assert_eq!(
            tokens,
            vec![
                TaggedToken::new("동해", "NNP"),
                TaggedToken::new("물", "NNG"),
                TaggedToken::new("과", "JC"),
            ]
        );
    }

    #[test]
    fn test_closure_tagger() {
        let tagger = |text: &str| -> SentimentResult<Vec<TaggedToken>> {
            Ok(text
                .split_whitespace()
                .map(|word| TaggedToken::new(word, "NNG"))
                .collect())
        };
        let tokens = tagger.tag("좋은 날").unwrap();
        assert_eq!(tokens[1], TaggedToken::new("날", "NNG"));
    }

    #[test]
    fn test_missing_mecab_binary() {
        let tagger = MecabCommand::new(MecabConfig {
            program: "/nonexistent/mecab".into(),
            args: vec![],
        });
        assert!(matches!(
            tagger.tag("좋다"),
            Err(SentimentError::Tagging { .. })
        ));
    }

    #[test]
    fn test_command_output_is_parsed() {
        // `cat` echoes the input back, which is already in mecab's output layout
        let tagger = MecabCommand::new(MecabConfig {
            program: "cat".into(),
            args: vec![],
        });
        let tokens = tagger.tag("동해\tNNP,지명,T\n물\tNNG,*,T\nEOS").unwrap();
        assert_eq!(
            tokens,
            vec![TaggedToken::new("동해", "NNP"), TaggedToken::new("물", "NNG")]
        );
    }

    #[test]
    fn test_large_input_does_not_block() {
        let tagger = MecabCommand::new(MecabConfig {
            program: "cat".into(),
            args: vec![],
        });
        let input = "동해\tNNP,*\n".repeat(20_000);
        let tokens = tagger.tag(&input).unwrap();
        assert_eq!(tokens.len(), 20_000);
        assert_eq!(tokens[19_999], TaggedToken::new("동해", "NNP"));
    }

    #[test]
    fn test_failing_command() {
        let tagger = MecabCommand::new(MecabConfig {
            program: "false".into(),
            args: vec![],
        });
        assert!(matches!(
            tagger.tag("좋다"),
            Err(SentimentError::Tagging { .. })
        ));
    }
}
