//! A single n-gram matching pass.

use crate::dictionary::{Category, SentimentDictionary};
use crate::order::NGramOrder;
use crate::tokens::{ngram_key, TokenSequence};
use crate::trace::ScoreTracer;
use serde::Serialize;
use std::collections::HashSet;

/// Tokens already used up by a match, compared by value.
pub type ClaimedSet<'t> = HashSet<&'t str>;

/// One dictionary hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NGramMatch {
    pub order: NGramOrder,
    /// Index of the first token of the window.
    pub start: usize,
    pub key: String,
    pub category: Category,
}

impl NGramMatch {
    /// Index of the last token of the window.
    pub fn end(&self) -> usize {
        self.start + self.order.window_len() - 1
    }
}

/// Result of one pass over a sentence.
#[derive(Debug, Clone)]
pub struct PassOutcome<'t> {
    pub order: NGramOrder,
    pub delta: i64,
    /// Tokens claimed by this pass's matches.
    pub claimed: ClaimedSet<'t>,
    pub matches: Vec<NGramMatch>,
}

/// Scan every window of `order` tokens and score the ones found in `dictionary`.
///
/// A window is skipped only when every token in it is already in `claimed`;
/// a partly claimed window is still looked up, so one token can count
/// toward more than one match.
pub fn run_pass<'t>(
    tokens: &'t TokenSequence,
    order: NGramOrder,
    claimed: &ClaimedSet<'t>,
    dictionary: &SentimentDictionary,
    tracer: &dyn ScoreTracer,
) -> PassOutcome<'t> {
    let mut outcome = PassOutcome {
        order,
        delta: 0,
        claimed: HashSet::new(),
        matches: Vec::new(),
    };

    if tokens.len() < order.window_len() {
        tracer.pass_finished(order, 0, 0);
        return outcome;
    }

    for (start, window) in tokens.windows(order.window_len()) {
        if window.iter().all(|token| claimed.contains(token.as_str())) {
            tracer.window_skipped(order, start);
            continue;
        }

        let key = ngram_key(window);
        let hit = dictionary.lookup(&key);
        tracer.window_evaluated(order, start, &key, hit);

        if let Some(category) = hit {
            outcome.delta += category.weight();
            outcome.claimed.extend(window.iter().map(String::as_str));
            outcome.matches.push(NGramMatch {
                order,
                start,
                key,
                category,
            });
        }
    }

    tracer.pass_finished(order, outcome.delta, outcome.claimed.len());
    outcome
}
