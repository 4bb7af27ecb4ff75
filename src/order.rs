//! N-gram orders and depth levels.

use crate::errors::SentimentError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a token window. Also used as the depth level of an analysis:
/// the largest order that takes part in scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum NGramOrder {
    Unigram,
    Bigram,
    #[default]
    Trigram,
}

impl NGramOrder {
    /// Number of tokens in a window of this order.
    pub fn window_len(self) -> usize {
        match self {
            Self::Unigram => 1,
            Self::Bigram => 2,
            Self::Trigram => 3,
        }
    }

    /// Orders that take part in an analysis at this depth, highest first.
    pub fn descending(self) -> impl Iterator<Item = NGramOrder> {
        [Self::Trigram, Self::Bigram, Self::Unigram]
            .into_iter()
            .filter(move |order| *order <= self)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Unigram => "unigram",
            Self::Bigram => "bigram",
            Self::Trigram => "trigram",
        }
    }
}

impl TryFrom<i64> for NGramOrder {
    type Error = SentimentError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Self::Unigram),
            2 => Ok(Self::Bigram),
            3 => Ok(Self::Trigram),
            _ => Err(SentimentError::InvalidLevel { level }),
        }
    }
}

impl From<NGramOrder> for i64 {
    fn from(order: NGramOrder) -> i64 {
        order.window_len() as i64
    }
}

impl fmt::Display for NGramOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_level() {
        assert_eq!(NGramOrder::try_from(1).unwrap(), NGramOrder::Unigram);
        assert_eq!(NGramOrder::try_from(3).unwrap(), NGramOrder::Trigram);
        assert!(matches!(
            NGramOrder::try_from(0),
            Err(SentimentError::InvalidLevel { level: 0 })
        ));
        assert!(matches!(
            NGramOrder::try_from(4),
            Err(SentimentError::InvalidLevel { level: 4 })
        ));
    }

    #[test]
    fn test_descending() {
        let orders: Vec<_> = NGramOrder::Trigram.descending().collect();
        assert_eq!(
            orders,
            vec![NGramOrder::Trigram, NGramOrder::Bigram, NGramOrder::Unigram]
        );

        let orders: Vec<_> = NGramOrder::Bigram.descending().collect();
        assert_eq!(orders, vec![NGramOrder::Bigram, NGramOrder::Unigram]);

        let orders: Vec<_> = NGramOrder::Unigram.descending().collect();
        assert_eq!(orders, vec![NGramOrder::Unigram]);
    }

    #[test]
    fn test_default_depth_and_window_len() {
        assert_eq!(NGramOrder::default(), NGramOrder::Trigram);
        assert_eq!(NGramOrder::Unigram.window_len(), 1);
        assert_eq!(NGramOrder::Trigram.window_len(), 3);
    }
}
