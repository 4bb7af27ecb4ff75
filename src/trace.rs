//! Tracing hooks for the scoring passes.
//!
//! A [`ScoreTracer`] is handed to the scorer explicitly. The default
//! [`NoopTracer`] ignores every event; [`LogTracer`] forwards them to
//! `tracing`.

use crate::dictionary::Category;
use crate::order::NGramOrder;

/// Observer of the n-gram passes.
pub trait ScoreTracer {
    /// A window was looked up in the dictionary.
    fn window_evaluated(&self, _order: NGramOrder, _start: usize, _key: &str, _hit: Option<Category>) {}

    /// A window was skipped because all of its tokens were already claimed.
    fn window_skipped(&self, _order: NGramOrder, _start: usize) {}

    /// A pass finished with the given delta and number of newly claimed tokens.
    fn pass_finished(&self, _order: NGramOrder, _delta: i64, _claimed: usize) {}
}

/// Tracer that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracer;

impl ScoreTracer for NoopTracer {}

/// Tracer that emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracer;

impl ScoreTracer for LogTracer {
    fn window_evaluated(&self, order: NGramOrder, start: usize, key: &str, hit: Option<Category>) {
        match hit {
            Some(category) => tracing::debug!(%order, start, key, %category, "dictionary hit"),
            None => tracing::trace!(%order, start, key, "no match"),
        }
    }

    fn window_skipped(&self, order: NGramOrder, start: usize) {
        tracing::trace!(%order, start, "window already claimed");
    }

    fn pass_finished(&self, order: NGramOrder, delta: i64, claimed: usize) {
        tracing::debug!(%order, delta, claimed, "pass finished");
    }
}
