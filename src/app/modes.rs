//! Page and run-status state types for the application.
//!
//! # State Machine
//!
//! The application shows one of two pages, each with its own panel state:
//! - **Sorting**: a sequence, a sort algorithm, bar highlights
//! - **Searching**: a sequence, a target, a search algorithm, probe/visited highlights
//!
//! Independently, [`RunStatus`] tracks whether a run is in flight. Input
//! events are ignored while a run is `Running`.
//!
//! # Example
//!
//! ```rust
//! use algoscope::app::modes::{Page, RunStatus};
//!
//! let page = Page::default();
//! assert_eq!(page, Page::Sorting);
//! assert!(!RunStatus::Idle.is_running());
//! ```

/// Which visualizer is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    /// Bars are rearranged by a sort runner.
    #[default]
    Sorting,

    /// Bars are probed by a search runner.
    Searching,
}

impl Page {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Sorting => "Sorting Algorithm Visualizer",
            Self::Searching => "Searching Algorithm Visualizer",
        }
    }
}

/// Lifecycle of the most recent run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunStatus {
    /// No run has started since the last input change.
    #[default]
    Idle,

    /// A runner is delivering steps. A second run cannot start.
    Running,

    /// The last run reached its terminal step.
    Completed,

    /// The last run was cancelled before its terminal step.
    Cancelled,

    /// The last run was refused or failed.
    Failed,
}

impl RunStatus {
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "ready",
            Self::Running => "running",
            Self::Completed => "done",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
        }
    }
}
