//! Step-emitting search runners.
//!
//! All three share [`Tracker`], which owns the cumulative visited trail so that
//! every emitted step carries the indices examined so far in first-visit order.

pub(crate) mod binary;
pub(crate) mod jump;
pub(crate) mod linear;

use super::emitter::Emitter;
use crate::domain::error::Result;
use crate::domain::{SearchOutcome, SearchStep, SearchStepKind, VisitTrail};

pub(crate) type SearchEmitter<'a> = Emitter<'a, SearchStep>;

pub(crate) struct Tracker<'e, 'a> {
    emitter: &'e mut SearchEmitter<'a>,
    trail: VisitTrail,
}

impl<'e, 'a> Tracker<'e, 'a> {
    pub(crate) fn new(emitter: &'e mut SearchEmitter<'a>) -> Self {
        Self {
            emitter,
            trail: VisitTrail::new(),
        }
    }

    /// Intermediate step that examines no particular index.
    pub(crate) fn note(&mut self, kind: SearchStepKind, log: String, line: usize) -> Result<()> {
        let step = self.step(None, false, kind, log, line);
        self.emitter.emit(step)
    }

    /// Intermediate step focused on `index`, which joins the trail.
    pub(crate) fn probe(
        &mut self,
        index: usize,
        kind: SearchStepKind,
        log: String,
        line: usize,
    ) -> Result<()> {
        self.trail.visit(index);
        let step = self.step(Some(index), false, kind, log, line);
        self.emitter.emit(step)
    }

    pub(crate) fn found(mut self, index: usize, target: i64, line: usize) -> Result<SearchOutcome> {
        self.trail.visit(index);
        let step = self.step(
            Some(index),
            true,
            SearchStepKind::Found,
            format!("Target {target} found at index {index}!"),
            line,
        );
        self.emitter.conclude(step)?;
        tracing::debug!(index, probes = self.trail.as_slice().len(), "search found target");
        Ok(SearchOutcome::Found(index))
    }

    pub(crate) fn not_found(mut self, log: String, line: usize) -> Result<SearchOutcome> {
        let step = self.step(None, false, SearchStepKind::NotFound, log, line);
        self.emitter.conclude(step)?;
        tracing::debug!(probes = self.trail.as_slice().len(), "search exhausted");
        Ok(SearchOutcome::NotFound)
    }

    fn step(
        &self,
        probe: Option<usize>,
        found: bool,
        kind: SearchStepKind,
        log: String,
        line: usize,
    ) -> SearchStep {
        SearchStep {
            probe,
            found,
            visited: self.trail.to_vec(),
            kind,
            log,
            line: Some(line),
        }
    }
}

/// The closing line of a search that ran out of candidates.
pub(crate) fn exhausted(target: i64) -> String {
    format!("Target {target} not found in the array.")
}

#[cfg(test)]
pub(crate) mod testing {
    use super::SearchEmitter;
    use crate::algorithms::pacing::{CancelToken, NoPacing};
    use crate::domain::error::Result;
    use crate::domain::{SearchOutcome, SearchStep};

    pub(crate) fn collect<F>(f: F) -> (SearchOutcome, Vec<SearchStep>)
    where
        F: FnOnce(&mut SearchEmitter<'_>) -> Result<SearchOutcome>,
    {
        let cancel = CancelToken::new();
        let mut steps = Vec::new();
        let mut sink = |step: SearchStep| steps.push(step);
        let outcome = {
            let mut emitter = SearchEmitter::new(&mut sink, &NoPacing, &cancel);
            f(&mut emitter).unwrap()
        };
        (outcome, steps)
    }

    pub(crate) const REFERENCE: [i64; 8] = [2, 5, 8, 12, 23, 27, 31, 39];
}
