//! Actions representing side effects to be executed by the caller.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or run updates.
//! Actions bridge pure state transformations and effectful operations such as
//! starting a paced run on a [`RunWorker`](crate::worker::RunWorker).
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event, so
//! several side effects can be queued at once. [`drive`](crate::worker::drive)
//! executes them in order.
//!
//! # Example
//!
//! ```rust
//! use algoscope::algorithms::SortAlgorithm;
//! use algoscope::app::Action;
//! use algoscope::worker::RunRequest;
//!
//! let actions = vec![Action::StartRun(RunRequest::Sort {
//!     algorithm: SortAlgorithm::Bubble,
//!     values: vec![3, 1, 2],
//! })];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::RunRequest;

/// Commands representing side effects to be executed outside the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Executes a run. Its steps come back as [`Event::Progress`](crate::app::Event::Progress)
    /// and its end as [`Event::Finished`](crate::app::Event::Finished) or
    /// [`Event::RunFailed`](crate::app::Event::RunFailed).
    StartRun(RunRequest),
}
