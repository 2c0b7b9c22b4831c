//! The public entry point for running an algorithm against a sink.

use super::catalog::{SearchAlgorithm, SortAlgorithm};
use super::emitter::Emitter;
use super::pacing::{CancelToken, NoPacing, Pacer};
use super::sink::StepSink;
use super::sortedness::first_descent;
use super::{search, sort};
use crate::domain::error::{AlgoscopeError, Result};
use crate::domain::{SearchOutcome, SearchStep, SortOutcome, SortStep};

/// Drives one algorithm to completion, delivering each step to a sink.
///
/// A runner is cheap to clone and can be reused for consecutive runs. Only one
/// run happens at a time per call; the caller's thread is blocked while the
/// pacer sleeps.
///
/// # Example
///
/// ```
/// use algoscope::algorithms::{Runner, SearchAlgorithm};
/// use algoscope::domain::{SearchOutcome, SearchStep};
///
/// let mut steps = Vec::new();
/// let mut sink = |step: SearchStep| steps.push(step);
/// let outcome = Runner::immediate()
///     .search(SearchAlgorithm::Binary, &[2, 5, 8, 12, 23, 27, 31, 39], 23, &mut sink)
///     .unwrap();
///
/// assert_eq!(outcome, SearchOutcome::Found(4));
/// assert!(steps.last().unwrap().found);
/// ```
#[derive(Debug, Clone)]
pub struct Runner<P = NoPacing> {
    pacer: P,
    cancel: CancelToken,
    bubble_early_exit: bool,
}

impl Runner<NoPacing> {
    /// A runner that never pauses between steps.
    #[must_use]
    pub fn immediate() -> Self {
        Self::new(NoPacing)
    }
}

impl Default for Runner<NoPacing> {
    fn default() -> Self {
        Self::immediate()
    }
}

impl<P: Pacer> Runner<P> {
    #[must_use]
    pub fn new(pacer: P) -> Self {
        Self {
            pacer,
            cancel: CancelToken::new(),
            bubble_early_exit: false,
        }
    }

    /// Enables or disables Bubble Sort's stop-after-a-quiet-pass exit.
    #[must_use]
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.bubble_early_exit = enabled;
        self
    }

    /// Replaces the runner's cancel token with a shared one.
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// A handle that cancels any run started by this runner.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    #[must_use]
    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    #[must_use]
    pub const fn bubble_early_exit(&self) -> bool {
        self.bubble_early_exit
    }

    /// Sorts a copy of `values` ascending, emitting steps along the way.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoscopeError::Cancelled`] if the cancel token was set
    /// before the run finished.
    pub fn sort(
        &self,
        algorithm: SortAlgorithm,
        values: &[i64],
        sink: &mut dyn StepSink<SortStep>,
    ) -> Result<SortOutcome> {
        let _span = tracing::debug_span!("sort", algorithm = algorithm.key(), len = values.len())
            .entered();
        tracing::debug!(early_exit = self.bubble_early_exit, "sort run started");

        let mut emitter = Emitter::new(sink, &self.pacer, &self.cancel);
        let working = values.to_vec();
        match algorithm {
            SortAlgorithm::Bubble => sort::bubble::run(working, self.bubble_early_exit, &mut emitter),
            SortAlgorithm::Insertion => sort::insertion::run(working, &mut emitter),
            SortAlgorithm::Selection => sort::selection::run(working, &mut emitter),
        }
    }

    /// Searches `values` for `target`, emitting steps along the way.
    ///
    /// # Errors
    ///
    /// - [`AlgoscopeError::Unsorted`] when the algorithm needs ascending input
    ///   and `values` is not; no step is emitted in that case
    /// - [`AlgoscopeError::Cancelled`] if the cancel token was set before the
    ///   run finished
    pub fn search(
        &self,
        algorithm: SearchAlgorithm,
        values: &[i64],
        target: i64,
        sink: &mut dyn StepSink<SearchStep>,
    ) -> Result<SearchOutcome> {
        let _span = tracing::debug_span!(
            "search",
            algorithm = algorithm.key(),
            len = values.len(),
            target
        )
        .entered();

        if algorithm.requires_sorted() {
            if let Some(index) = first_descent(values) {
                tracing::warn!(index, "refusing unsorted input");
                return Err(AlgoscopeError::Unsorted { index });
            }
        }
        tracing::debug!("search run started");

        let mut emitter = Emitter::new(sink, &self.pacer, &self.cancel);
        match algorithm {
            SearchAlgorithm::Linear => search::linear::run(values, target, &mut emitter),
            SearchAlgorithm::Binary => search::binary::run(values, target, &mut emitter),
            SearchAlgorithm::Jump => search::jump::run(values, target, &mut emitter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortStepKind;

    #[test]
    fn unsorted_input_is_refused_before_any_step() {
        let mut steps = Vec::new();
        let mut sink = |step: SearchStep| steps.push(step);
        let err = Runner::immediate()
            .search(SearchAlgorithm::Jump, &[1, 4, 3], 3, &mut sink)
            .unwrap_err();
        assert!(matches!(err, AlgoscopeError::Unsorted { index: 1 }));
        assert!(steps.is_empty());
    }

    #[test]
    fn linear_search_accepts_unsorted_input() {
        let mut sink = |_: SearchStep| {};
        let outcome = Runner::immediate()
            .search(SearchAlgorithm::Linear, &[1, 4, 3], 3, &mut sink)
            .unwrap();
        assert_eq!(outcome, SearchOutcome::Found(2));
    }

    #[test]
    fn sort_leaves_caller_values_untouched() {
        let input = vec![3, 2, 1];
        let mut sink = |_: SortStep| {};
        let outcome = Runner::immediate()
            .sort(SortAlgorithm::Selection, &input, &mut sink)
            .unwrap();
        assert_eq!(input, vec![3, 2, 1]);
        assert_eq!(outcome.values, vec![1, 2, 3]);
    }

    #[test]
    fn early_exit_flag_reaches_bubble_sort() {
        let mut kinds = Vec::new();
        let mut sink = |step: SortStep| kinds.push(step.kind);
        Runner::immediate()
            .with_early_exit(true)
            .sort(SortAlgorithm::Bubble, &[1, 2, 3], &mut sink)
            .unwrap();
        assert!(kinds.contains(&SortStepKind::EarlyExit));
    }

    #[test]
    fn cancelled_runner_delivers_nothing() {
        let runner = Runner::immediate();
        runner.cancel_token().cancel();
        let mut count = 0;
        let mut sink = |_: SortStep| count += 1;
        let result = runner.sort(SortAlgorithm::Insertion, &[2, 1], &mut sink);
        assert!(matches!(result, Err(AlgoscopeError::Cancelled)));
        assert_eq!(count, 0);
    }
}
