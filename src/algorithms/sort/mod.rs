//! Step-emitting sort runners.
//!
//! Every runner owns its working copy of the values, emits a snapshot before
//! and after each state change, and finishes with a single `Sorted` step.

pub(crate) mod bubble;
pub(crate) mod insertion;
pub(crate) mod selection;

use super::emitter::Emitter;
use crate::domain::error::Result;
use crate::domain::{SortOutcome, SortStep, SortStepKind};

pub(crate) type SortEmitter<'a> = Emitter<'a, SortStep>;

pub(crate) fn snapshot(
    values: &[i64],
    primary: Option<usize>,
    secondary: Option<usize>,
    kind: SortStepKind,
    log: String,
    line: Option<usize>,
) -> SortStep {
    SortStep {
        values: values.to_vec(),
        primary,
        secondary,
        kind,
        log,
        line,
    }
}

/// Emits the terminal step and packages the outcome.
pub(crate) fn finish(
    values: Vec<i64>,
    comparisons: usize,
    moves: usize,
    emitter: &mut SortEmitter<'_>,
) -> Result<SortOutcome> {
    emitter.conclude(snapshot(
        &values,
        None,
        None,
        SortStepKind::Sorted,
        "Array is sorted!".to_string(),
        None,
    ))?;
    tracing::debug!(comparisons, moves, steps = emitter.delivered(), "sort finished");
    Ok(SortOutcome {
        values,
        comparisons,
        moves,
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use super::SortEmitter;
    use crate::algorithms::pacing::{CancelToken, NoPacing};
    use crate::domain::error::Result;
    use crate::domain::{SortOutcome, SortStep};

    /// Runs `f` against a zero-delay emitter and returns the collected steps.
    pub(crate) fn collect<F>(f: F) -> (SortOutcome, Vec<SortStep>)
    where
        F: FnOnce(&mut SortEmitter<'_>) -> Result<SortOutcome>,
    {
        let cancel = CancelToken::new();
        let mut steps = Vec::new();
        let mut sink = |step: SortStep| steps.push(step);
        let outcome = {
            let mut emitter = SortEmitter::new(&mut sink, &NoPacing, &cancel);
            f(&mut emitter).unwrap()
        };
        (outcome, steps)
    }
}
