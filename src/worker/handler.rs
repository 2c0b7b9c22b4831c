//! Run execution and the action loop.
//!
//! [`RunWorker`] executes one [`RunRequest`] at a time on the calling thread,
//! pacing steps with a [`SleepPacer`] and reporting each one through a
//! callback. [`drive`] ties it to the application state machine: it executes
//! the actions returned by [`handle_event`], feeds every step back as
//! [`Event::Progress`], and closes the run with [`Event::Finished`] or
//! [`Event::RunFailed`].

use std::collections::VecDeque;

use crate::algorithms::{CancelToken, Runner, SleepPacer};
use crate::app::{handle_event, Action, AppState, Event};
use crate::domain::error::{AlgoscopeError, Result};
use crate::domain::{SearchStep, SortStep};
use crate::worker::{RunReport, RunRequest, RunResult, RunUpdate};
use crate::Config;

/// Executes runs with the configured pacing.
///
/// The cancel token is shared with every run this worker starts; cancelling
/// it stops the run in flight at its next step.
#[derive(Debug, Clone)]
pub struct RunWorker {
    sort_delay_ms: u64,
    search_delay_ms: u64,
    bubble_early_exit: bool,
    cancel: CancelToken,
}

impl RunWorker {
    /// Creates a worker using the delays and Bubble Sort behavior from `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            sort_delay_ms: config.sort_delay_ms,
            search_delay_ms: config.search_delay_ms,
            bubble_early_exit: config.bubble_early_exit,
            cancel: CancelToken::new(),
        }
    }

    /// A worker that never pauses between steps.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            sort_delay_ms: 0,
            search_delay_ms: 0,
            bubble_early_exit: false,
            cancel: CancelToken::new(),
        }
    }

    /// Overrides both inter-step delays.
    #[must_use]
    pub const fn with_delays(mut self, sort_delay_ms: u64, search_delay_ms: u64) -> Self {
        self.sort_delay_ms = sort_delay_ms;
        self.search_delay_ms = search_delay_ms;
        self
    }

    #[must_use]
    pub const fn with_early_exit(mut self, enabled: bool) -> Self {
        self.bubble_early_exit = enabled;
        self
    }

    /// A handle that cancels the run in flight.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Executes a run, calling `on_update` once per step.
    ///
    /// The cancel token is cleared when the run starts, so a cancellation only
    /// affects the run that was in flight.
    ///
    /// # Parameters
    ///
    /// * `request` - The run to execute
    /// * `on_update` - Receives every step in order
    ///
    /// # Returns
    ///
    /// A [`RunReport`] with the outcome, or [`RunResult::Cancelled`] if the
    /// token was set before the terminal step.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoscopeError::Unsorted`] when a search algorithm that needs
    /// ascending input receives unsorted values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use algoscope::algorithms::SortAlgorithm;
    /// use algoscope::worker::{RunRequest, RunResult, RunWorker};
    ///
    /// let worker = RunWorker::immediate();
    /// let mut logs = Vec::new();
    /// let report = worker.execute(
    ///     &RunRequest::Sort { algorithm: SortAlgorithm::Insertion, values: vec![2, 1] },
    ///     &mut |update| logs.push(update.log().to_string()),
    /// )?;
    ///
    /// assert_eq!(report.steps, logs.len());
    /// assert!(matches!(report.result, RunResult::Sorted(_)));
    /// # Ok::<(), algoscope::AlgoscopeError>(())
    /// ```
    pub fn execute(
        &self,
        request: &RunRequest,
        on_update: &mut dyn FnMut(RunUpdate),
    ) -> Result<RunReport> {
        let _span = tracing::debug_span!(
            "execute_run",
            algorithm = request.algorithm_name(),
            len = request.len()
        )
        .entered();

        self.cancel.reset();
        let started_at_ms = chrono::Utc::now().timestamp_millis();
        let mut steps = 0_usize;

        let outcome = match request {
            RunRequest::Sort { algorithm, values } => {
                let runner = self.runner(self.sort_delay_ms);
                let mut sink = |step: SortStep| {
                    steps += 1;
                    on_update(RunUpdate::Sort(step));
                };
                runner
                    .sort(*algorithm, values, &mut sink)
                    .map(RunResult::Sorted)
            }
            RunRequest::Search {
                algorithm,
                values,
                target,
            } => {
                let runner = self.runner(self.search_delay_ms);
                let mut sink = |step: SearchStep| {
                    steps += 1;
                    on_update(RunUpdate::Search(step));
                };
                runner
                    .search(*algorithm, values, *target, &mut sink)
                    .map(|outcome| RunResult::Searched {
                        target: *target,
                        outcome,
                    })
            }
        };

        let result = match outcome {
            Ok(result) => result,
            Err(AlgoscopeError::Cancelled) => {
                tracing::debug!(steps, "run cancelled");
                RunResult::Cancelled
            }
            Err(e) => return Err(e),
        };

        let report = RunReport {
            algorithm: request.algorithm_name().to_string(),
            result,
            steps,
            started_at_ms,
            finished_at_ms: chrono::Utc::now().timestamp_millis(),
        };
        tracing::debug!(steps, elapsed_ms = report.elapsed_ms(), "run complete");
        Ok(report)
    }

    fn runner(&self, delay_ms: u64) -> Runner<SleepPacer> {
        Runner::new(SleepPacer::from_millis(delay_ms))
            .with_early_exit(self.bubble_early_exit)
            .with_cancel_token(self.cancel.clone())
    }
}

/// Executes `actions` against `state` until no actions remain.
///
/// `on_frame` is called after every state change a run produces: once per
/// step, and once after the run ends.
///
/// # Errors
///
/// Propagates errors from [`handle_event`]. A refused or failed run is not
/// an error here; it is recorded in `state` through [`Event::RunFailed`].
pub fn drive(
    state: &mut AppState,
    actions: Vec<Action>,
    worker: &RunWorker,
    on_frame: &mut dyn FnMut(&AppState),
) -> Result<()> {
    let mut queue: VecDeque<Action> = actions.into();

    while let Some(action) = queue.pop_front() {
        match action {
            Action::StartRun(request) => {
                let mut handler_error = None;
                let outcome = worker.execute(&request, &mut |update| {
                    if handler_error.is_some() {
                        return;
                    }
                    match handle_event(state, &Event::Progress(update)) {
                        Ok(_) => on_frame(state),
                        Err(e) => {
                            worker.cancel_token().cancel();
                            handler_error = Some(e);
                        }
                    }
                });
                if let Some(e) = handler_error {
                    return Err(e);
                }

                let event = match outcome {
                    Ok(report) => Event::Finished(report),
                    Err(e) => Event::RunFailed(e.to_string()),
                };
                let (_, follow_up) = handle_event(state, &event)?;
                on_frame(state);
                queue.extend(follow_up);
            }
        }
    }

    Ok(())
}
