//! Composite scoring: n-gram passes from the depth level down to unigrams.
//!
//! Each pass sees the tokens claimed by the higher-order passes before it,
//! so a matched trigram hides its bigrams and unigrams, and a matched bigram
//! hides its unigrams.

use crate::dictionary::SentimentDictionary;
use crate::errors::SentimentResult;
use crate::order::NGramOrder;
use crate::pass::{run_pass, ClaimedSet, NGramMatch};
use crate::tokens::TokenSequence;
use crate::trace::{NoopTracer, ScoreTracer};
use serde::Serialize;
use std::collections::BTreeSet;

/// Contribution of one executed pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassSummary {
    pub order: NGramOrder,
    pub delta: i64,
    pub matches: Vec<NGramMatch>,
}

/// Outcome of scoring one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub level: NGramOrder,
    pub score: i64,
    /// Executed passes, highest order first.
    pub passes: Vec<PassSummary>,
    /// Every token claimed by some match.
    pub claimed: BTreeSet<String>,
}

impl Analysis {
    /// All matches across passes, highest order first.
    pub fn matches(&self) -> impl Iterator<Item = &NGramMatch> {
        self.passes.iter().flat_map(|pass| pass.matches.iter())
    }

    /// Delta of the pass for `order`, or 0 if it did not run.
    pub fn delta(&self, order: NGramOrder) -> i64 {
        self.passes
            .iter()
            .find(|pass| pass.order == order)
            .map_or(0, |pass| pass.delta)
    }
}

/// Score `tokens` at depth `level` (1, 2 or 3).
pub fn score(tokens: &TokenSequence, level: i64, dictionary: &SentimentDictionary) -> SentimentResult<i64> {
    let level = NGramOrder::try_from(level)?;
    Ok(score_at(tokens, level, dictionary, &NoopTracer).score)
}

/// Run every pass up to `level` and collect the per-pass breakdown.
pub fn score_at(
    tokens: &TokenSequence,
    level: NGramOrder,
    dictionary: &SentimentDictionary,
    tracer: &dyn ScoreTracer,
) -> Analysis {
    let mut claimed = ClaimedSet::new();
    let mut passes = Vec::new();

    for order in level.descending() {
        let outcome = run_pass(tokens, order, &claimed, dictionary, tracer);
        claimed.extend(outcome.claimed);
        passes.push(PassSummary {
            order,
            delta: outcome.delta,
            matches: outcome.matches,
        });
    }

    Analysis {
        level,
        score: passes.iter().map(|pass| pass.delta).sum(),
        passes,
        claimed: claimed.into_iter().map(str::to_string).collect(),
    }
}
