//! Step delivery shared by all runners.

use super::pacing::{CancelToken, Pacer};
use super::sink::StepSink;
use crate::domain::error::{AlgoscopeError, Result};

/// Couples a sink with the run's pacer and cancel token.
///
/// Runners call [`emit`](Self::emit) for intermediate steps and
/// [`conclude`](Self::conclude) exactly once for the terminal step. The cancel
/// flag is checked before each delivery, so nothing reaches the sink after a
/// cancellation is observed.
pub(crate) struct Emitter<'a, S> {
    sink: &'a mut dyn StepSink<S>,
    pacer: &'a dyn Pacer,
    cancel: &'a CancelToken,
    delivered: usize,
}

impl<'a, S> Emitter<'a, S> {
    pub(crate) fn new(
        sink: &'a mut dyn StepSink<S>,
        pacer: &'a dyn Pacer,
        cancel: &'a CancelToken,
    ) -> Self {
        Self {
            sink,
            pacer,
            cancel,
            delivered: 0,
        }
    }

    /// Delivers an intermediate step, then pauses.
    pub(crate) fn emit(&mut self, step: S) -> Result<()> {
        self.deliver(step)?;
        self.pacer.pause();
        Ok(())
    }

    /// Delivers the terminal step. No pause follows.
    pub(crate) fn conclude(&mut self, step: S) -> Result<()> {
        self.deliver(step)
    }

    pub(crate) const fn delivered(&self) -> usize {
        self.delivered
    }

    fn deliver(&mut self, step: S) -> Result<()> {
        if self.cancel.is_cancelled() {
            tracing::debug!(delivered = self.delivered, "run cancelled between steps");
            return Err(AlgoscopeError::Cancelled);
        }
        self.sink.accept(step);
        self.delivered += 1;
        Ok(())
    }
}
