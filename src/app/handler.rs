//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes input, page
//! switches, and run updates, translating them into state changes and action
//! sequences. It is the only place where panel state changes.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the CLI or from a running [`RunWorker`](crate::worker::RunWorker)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. Panel state is mutated
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `ShowSorting`, `ShowSearching`
//! - **Input**: `InputChanged`, `LoadValues`, `Randomize`, `TargetChanged`, `SetTarget`
//! - **Selection**: `SelectSort`, `SelectSearch`
//! - **Commands**: `Run`, `SortArray`
//! - **Run feedback**: `Progress`, `Finished`, `RunFailed`
//!
//! # Example
//!
//! ```rust
//! use algoscope::app::{handle_event, Action, AppState, Event};
//! use algoscope::app::state::Limits;
//!
//! let mut state = AppState::new(Limits::default(), 1);
//! let (render, actions) = handle_event(&mut state, &Event::Run)?;
//! assert!(render);
//! assert!(matches!(actions.as_slice(), [Action::StartRun(_)]));
//! # Ok::<(), algoscope::AlgoscopeError>(())
//! ```

use crate::algorithms::{SearchAlgorithm, SortAlgorithm};
use crate::app::modes::{Page, RunStatus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{SearchOutcome, Sequence};
use crate::worker::{RunReport, RunRequest, RunResult, RunUpdate};

/// Events triggered by input, commands, or a running worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Switches to the sorting page.
    ShowSorting,
    /// Switches to the searching page.
    ShowSearching,

    /// New text in the sequence box. Sanitized to digits and commas.
    InputChanged(String),
    /// Replaces the active page's sequence with an already validated one.
    LoadValues(Sequence),
    /// Draws a random sequence sized for the active page.
    Randomize,

    SelectSort(SortAlgorithm),
    SelectSearch(SearchAlgorithm),

    /// New text in the target box. Only digits are kept.
    TargetChanged(String),
    /// Sets an already validated target, negative values included.
    SetTarget(i64),

    /// Sorts the search page's sequence in place so Binary and Jump can run.
    SortArray,

    /// The primary button of the active page.
    ///
    /// On the search page this sorts the sequence instead when the selected
    /// algorithm needs ascending input and the sequence is not.
    Run,

    /// One step of the current run.
    Progress(RunUpdate),
    /// The current run ended, completed or cancelled.
    Finished(RunReport),
    /// The current run could not start or failed.
    RunFailed(String),
}

const SORTED_FOR_SEARCH: &str = "Array sorted! Now you can perform Binary or Jump Search.";
const TARGET_REQUIRED: &str = "Error: Target value is required to perform a search.";

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// Whether the view should be redrawn, and the actions to execute in order.
/// Input events received while a run is in flight are ignored.
///
/// # Errors
///
/// Reserved for failures in state transitions; the current transitions are
/// infallible.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let is_feedback = matches!(
        event,
        Event::Progress(_) | Event::Finished(_) | Event::RunFailed(_)
    );
    if state.status.is_running() && !is_feedback {
        tracing::debug!("run in flight, ignoring input");
        return Ok((false, vec![]));
    }

    match event {
        Event::ShowSorting => {
            state.page = Page::Sorting;
            Ok((true, vec![]))
        }
        Event::ShowSearching => {
            state.page = Page::Searching;
            Ok((true, vec![]))
        }
        Event::InputChanged(text) => {
            let max_len = state.max_len();
            let sequence = Sequence::sanitize(text, max_len);
            let input: String = text
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == ',')
                .collect();
            tracing::trace!(input = %input, parsed = sequence.len(), "sequence input changed");

            let empty = sequence.is_empty();
            match state.page {
                Page::Sorting => {
                    state.sort.set_values(sequence.into_vec());
                    state.sort.input = input;
                    state.sort.log = vec![if empty {
                        "Array cleared.".to_string()
                    } else {
                        "New array entered. Run to sort.".to_string()
                    }];
                }
                Page::Searching => {
                    state.search.set_values(sequence.into_vec());
                    state.search.input = input;
                    state.search.log = vec![if empty {
                        "Array cleared.".to_string()
                    } else {
                        "New array entered. Check algorithm requirements or run.".to_string()
                    }];
                    state.search.refresh_readiness();
                }
            }
            state.status = RunStatus::Idle;
            Ok((true, vec![]))
        }
        Event::LoadValues(sequence) => {
            load_sequence(state, sequence.clone(), "New array loaded.");
            Ok((true, vec![]))
        }
        Event::Randomize => {
            let sequence = state.random_sequence();
            tracing::debug!(len = sequence.len(), "random sequence generated");
            let message = match state.page {
                Page::Sorting => "Generated a random array. Run to sort.",
                Page::Searching => "Generated a random array. Check algorithm requirements or run.",
            };
            load_sequence(state, sequence, message);
            Ok((true, vec![]))
        }
        Event::SelectSort(algorithm) => {
            if state.sort.algorithm == *algorithm {
                return Ok((false, vec![]));
            }
            state.sort.algorithm = *algorithm;
            state.sort.reset_visuals();
            Ok((true, vec![]))
        }
        Event::SelectSearch(algorithm) => {
            if state.search.algorithm == *algorithm {
                return Ok((false, vec![]));
            }
            state.search.algorithm = *algorithm;
            state.search.reset_visuals();
            state.search.refresh_readiness();
            Ok((true, vec![]))
        }
        Event::TargetChanged(text) => {
            let digits: String = text.chars().filter(char::is_ascii_digit).collect();
            let target = digits.parse::<i64>().ok();
            set_target(state, target, digits);
            Ok((true, vec![]))
        }
        Event::SetTarget(target) => {
            set_target(state, Some(*target), target.to_string());
            Ok((true, vec![]))
        }
        Event::SortArray => {
            sort_search_values(state);
            Ok((true, vec![]))
        }
        Event::Run => match state.page {
            Page::Sorting => Ok(start_sort(state)),
            Page::Searching => Ok(start_search(state)),
        },
        Event::Progress(update) => {
            state.steps_applied += 1;
            match update {
                RunUpdate::Sort(step) => state.sort.apply_step(step),
                RunUpdate::Search(step) => state.search.apply_step(step),
            }
            Ok((true, vec![]))
        }
        Event::Finished(report) => {
            finish_run(state, report);
            Ok((true, vec![]))
        }
        Event::RunFailed(message) => {
            tracing::warn!(error = %message, "run failed");
            state.status = RunStatus::Failed;
            let line = format!("Error: {message}");
            match state.page {
                Page::Sorting => state.sort.log.push(line),
                Page::Searching => state.search.log.push(line),
            }
            Ok((true, vec![]))
        }
    }
}

fn load_sequence(state: &mut AppState, sequence: Sequence, message: &str) {
    match state.page {
        Page::Sorting => {
            state.sort.set_values(sequence.into_vec());
            state.sort.log = vec![message.to_string()];
        }
        Page::Searching => {
            state.search.set_values(sequence.into_vec());
            state.search.log = vec![message.to_string()];
            state.search.refresh_readiness();
        }
    }
    state.status = RunStatus::Idle;
}

fn set_target(state: &mut AppState, target: Option<i64>, input: String) {
    let panel = &mut state.search;
    panel.target = target;
    panel.target_error = target.is_none();
    panel.log = vec![match target {
        Some(target) => format!("Target value set to {target}."),
        None => "Target value cleared.".to_string(),
    }];
    panel.target_input = input;
    panel.reset_visuals();
    state.status = RunStatus::Idle;
}

fn sort_search_values(state: &mut AppState) {
    let mut values = state.search.values.clone();
    values.sort_unstable();
    state.search.set_values(values);
    state.search.needs_sorting = false;
    state.search.log = vec![SORTED_FOR_SEARCH.to_string()];
    state.status = RunStatus::Idle;
}

fn start_sort(state: &mut AppState) -> (bool, Vec<Action>) {
    let panel = &mut state.sort;
    panel.reset_visuals();
    panel.log = vec![format!("Starting {}...", panel.algorithm.name())];
    state.status = RunStatus::Running;
    state.steps_applied = 0;
    tracing::debug!(algorithm = panel.algorithm.key(), len = panel.values.len(), "starting sort");

    let request = RunRequest::Sort {
        algorithm: panel.algorithm,
        values: panel.values.clone(),
    };
    (true, vec![Action::StartRun(request)])
}

fn start_search(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.search.values.is_empty() {
        tracing::debug!("empty sequence, nothing to search");
        return (false, vec![]);
    }

    if state.search.needs_sorting && state.search.algorithm.requires_sorted() {
        sort_search_values(state);
        return (true, vec![]);
    }

    let panel = &mut state.search;
    let Some(target) = panel.target else {
        panel.target_error = true;
        panel.log.push(TARGET_REQUIRED.to_string());
        return (true, vec![]);
    };

    panel.target_error = false;
    panel.reset_visuals();
    panel.log = vec![format!(
        "Starting {} search for target {target}...",
        panel.algorithm.short_name()
    )];
    state.status = RunStatus::Running;
    state.steps_applied = 0;
    tracing::debug!(algorithm = panel.algorithm.key(), target, "starting search");

    let request = RunRequest::Search {
        algorithm: panel.algorithm,
        values: panel.values.clone(),
        target,
    };
    (true, vec![Action::StartRun(request)])
}

fn finish_run(state: &mut AppState, report: &RunReport) {
    tracing::debug!(
        algorithm = %report.algorithm,
        steps = report.steps,
        elapsed_ms = report.elapsed_ms(),
        "run finished"
    );
    match &report.result {
        RunResult::Sorted(outcome) => {
            state.status = RunStatus::Completed;
            let panel = &mut state.sort;
            panel.primary = None;
            panel.secondary = None;
            panel.values.clone_from(&outcome.values);
            panel.outcome = Some(outcome.clone());
        }
        RunResult::Searched { target, outcome } => {
            state.status = RunStatus::Completed;
            let panel = &mut state.search;
            panel.probe = None;
            panel.line = None;
            panel.found = outcome.index();
            panel.outcome = Some(*outcome);
            panel.log.push(match outcome {
                SearchOutcome::Found(index) => {
                    format!("Search complete: Target {target} found at final index {index}.")
                }
                SearchOutcome::NotFound => {
                    format!("Search complete: Target {target} was not found.")
                }
            });
        }
        RunResult::Cancelled => {
            state.status = RunStatus::Cancelled;
            let line = format!("Run cancelled after {} steps.", report.steps);
            match state.page {
                Page::Sorting => {
                    state.sort.primary = None;
                    state.sort.secondary = None;
                    state.sort.log.push(line);
                }
                Page::Searching => {
                    state.search.probe = None;
                    state.search.log.push(line);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Limits;
    use crate::domain::{SortOutcome, SortStep, SortStepKind};

    fn state() -> AppState {
        AppState::new(Limits::default(), 3)
    }

    fn report(result: RunResult, steps: usize) -> RunReport {
        RunReport {
            algorithm: "test".to_string(),
            result,
            steps,
            started_at_ms: 0,
            finished_at_ms: 5,
        }
    }

    #[test]
    fn sort_run_resets_log_and_requests_a_run() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Run).unwrap();
        assert_eq!(state.sort.log, vec!["Starting Bubble Sort...".to_string()]);
        assert!(state.status.is_running());
        assert_eq!(
            actions,
            vec![Action::StartRun(RunRequest::Sort {
                algorithm: SortAlgorithm::Bubble,
                values: vec![5, 3, 8, 4, 1, 2, 7],
            })]
        );
    }

    #[test]
    fn input_is_ignored_while_running() {
        let mut state = state();
        handle_event(&mut state, &Event::Run).unwrap();
        let (render, actions) =
            handle_event(&mut state, &Event::InputChanged("1,2".to_string())).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.sort.values, vec![5, 3, 8, 4, 1, 2, 7]);

        let (_, actions) = handle_event(&mut state, &Event::Run).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn input_is_sanitized_and_truncated() {
        let mut state = state();
        let text = "9, 8a, 7,,6, 5, 4, 3, 2, 1, 10, 11, 12, 13, 14, 15, 16, 17";
        handle_event(&mut state, &Event::InputChanged(text.to_string())).unwrap();
        assert_eq!(state.sort.values.len(), 15);
        assert_eq!(&state.sort.values[..4], &[9, 8, 7, 6]);
        assert!(!state.sort.input.contains('a'));
    }

    #[test]
    fn progress_and_finish_update_the_sort_panel() {
        let mut state = state();
        handle_event(&mut state, &Event::Run).unwrap();
        let step = SortStep {
            values: vec![3, 5, 8, 4, 1, 2, 7],
            primary: Some(0),
            secondary: Some(1),
            kind: SortStepKind::Swapped,
            log: "Swap complete. Array: [3, 5, 8, 4, 1, 2, 7]".to_string(),
            line: Some(3),
        };
        handle_event(&mut state, &Event::Progress(RunUpdate::Sort(step))).unwrap();
        assert_eq!(state.sort.primary, Some(0));
        assert_eq!(state.steps_applied, 1);

        let outcome = SortOutcome {
            values: vec![1, 2, 3, 4, 5, 7, 8],
            comparisons: 21,
            moves: 11,
        };
        handle_event(
            &mut state,
            &Event::Finished(report(RunResult::Sorted(outcome), 40)),
        )
        .unwrap();
        assert_eq!(state.status, RunStatus::Completed);
        assert_eq!(state.sort.primary, None);
        assert_eq!(state.sort.values, vec![1, 2, 3, 4, 5, 7, 8]);
    }

    #[test]
    fn binary_on_unsorted_input_sorts_instead_of_searching() {
        let mut state = state();
        handle_event(&mut state, &Event::ShowSearching).unwrap();
        handle_event(&mut state, &Event::InputChanged("9,3,5".to_string())).unwrap();
        handle_event(&mut state, &Event::SelectSearch(SearchAlgorithm::Binary)).unwrap();
        assert!(state.search.needs_sorting);
        assert!(state
            .search
            .log
            .iter()
            .any(|l| l.contains("requires a sorted array")));

        let (_, actions) = handle_event(&mut state, &Event::Run).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.search.values, vec![3, 5, 9]);
        assert_eq!(state.search.input, "3, 5, 9");
        assert!(!state.search.needs_sorting);

        let (_, actions) = handle_event(&mut state, &Event::Run).unwrap();
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn search_without_target_reports_an_error() {
        let mut state = state();
        handle_event(&mut state, &Event::ShowSearching).unwrap();
        handle_event(&mut state, &Event::TargetChanged("abc".to_string())).unwrap();
        assert_eq!(state.search.target, None);
        assert_eq!(state.search.log, vec!["Target value cleared.".to_string()]);

        let (_, actions) = handle_event(&mut state, &Event::Run).unwrap();
        assert!(actions.is_empty());
        assert!(state.search.target_error);
        assert_eq!(state.search.log.last().map(String::as_str), Some(TARGET_REQUIRED));
    }

    #[test]
    fn target_keeps_digits_only() {
        let mut state = state();
        handle_event(&mut state, &Event::TargetChanged("-4x2".to_string())).unwrap();
        assert_eq!(state.search.target, Some(42));
        assert_eq!(state.search.target_input, "42");
    }

    #[test]
    fn set_target_accepts_negative_values() {
        let mut state = state();
        handle_event(&mut state, &Event::SetTarget(-7)).unwrap();
        assert_eq!(state.search.target, Some(-7));
        assert_eq!(state.search.log, vec!["Target value set to -7.".to_string()]);
    }

    #[test]
    fn empty_search_sequence_does_nothing() {
        let mut state = state();
        handle_event(&mut state, &Event::ShowSearching).unwrap();
        handle_event(&mut state, &Event::InputChanged(String::new())).unwrap();
        assert_eq!(state.search.log[0], "Array cleared.");
        let (render, actions) = handle_event(&mut state, &Event::Run).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn finished_search_appends_completion_line() {
        let mut state = state();
        handle_event(&mut state, &Event::ShowSearching).unwrap();
        handle_event(&mut state, &Event::Run).unwrap();
        handle_event(
            &mut state,
            &Event::Finished(report(
                RunResult::Searched {
                    target: 23,
                    outcome: SearchOutcome::Found(4),
                },
                7,
            )),
        )
        .unwrap();
        assert_eq!(state.search.found, Some(4));
        assert_eq!(
            state.search.log.last().map(String::as_str),
            Some("Search complete: Target 23 found at final index 4.")
        );
    }

    #[test]
    fn cancelled_run_is_reported_and_unlocks_input() {
        let mut state = state();
        handle_event(&mut state, &Event::Run).unwrap();
        handle_event(&mut state, &Event::Finished(report(RunResult::Cancelled, 3))).unwrap();
        assert_eq!(state.status, RunStatus::Cancelled);
        assert_eq!(
            state.sort.log.last().map(String::as_str),
            Some("Run cancelled after 3 steps.")
        );
        let (render, _) = handle_event(&mut state, &Event::Randomize).unwrap();
        assert!(render);
        assert_eq!(state.sort.values.len(), 10);
    }
}
