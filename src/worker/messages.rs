//! Run request and update message types.
//!
//! This module defines the protocol between the application state machine and
//! the [`RunWorker`](crate::worker::RunWorker): a [`RunRequest`] goes in, a
//! stream of [`RunUpdate`]s comes out, and a [`RunReport`] closes the run.
//! Every type serializes to JSON so a run can be recorded line by line.

use serde::{Deserialize, Serialize};

use crate::algorithms::{SearchAlgorithm, SortAlgorithm};
use crate::domain::{SearchOutcome, SearchStep, SortOutcome, SortStep};

/// A run to execute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunRequest {
    /// Sort a copy of `values`.
    Sort {
        algorithm: SortAlgorithm,
        values: Vec<i64>,
    },

    /// Search `values` for `target`.
    Search {
        algorithm: SearchAlgorithm,
        values: Vec<i64>,
        target: i64,
    },
}

impl RunRequest {
    /// Display name of the requested algorithm, e.g. `"Jump Search"`.
    #[must_use]
    pub fn algorithm_name(&self) -> &'static str {
        match self {
            Self::Sort { algorithm, .. } => algorithm.name(),
            Self::Search { algorithm, .. } => algorithm.name(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Sort { values, .. } | Self::Search { values, .. } => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One step of a run in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "step", rename_all = "snake_case")]
pub enum RunUpdate {
    Sort(SortStep),
    Search(SearchStep),
}

impl RunUpdate {
    /// Log line carried by the step.
    #[must_use]
    pub fn log(&self) -> &str {
        match self {
            Self::Sort(step) => &step.log,
            Self::Search(step) => &step.log,
        }
    }

    /// Whether this is the last step a run emits.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        match self {
            Self::Sort(step) => step.kind.is_terminal(),
            Self::Search(step) => step.kind.is_terminal(),
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunResult {
    Sorted(SortOutcome),
    Searched { target: i64, outcome: SearchOutcome },
    /// The cancel token was set before the terminal step.
    Cancelled,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Display name of the algorithm that ran.
    pub algorithm: String,

    pub result: RunResult,

    /// Number of steps delivered before the run ended.
    pub steps: usize,

    /// Unix timestamp in milliseconds when the run started.
    pub started_at_ms: i64,

    /// Unix timestamp in milliseconds when the run ended.
    pub finished_at_ms: i64,
}

impl RunReport {
    /// Wall-clock duration of the run, pacing included.
    #[must_use]
    pub fn elapsed_ms(&self) -> i64 {
        (self.finished_at_ms - self.started_at_ms).max(0)
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self.result, RunResult::Cancelled)
    }
}
