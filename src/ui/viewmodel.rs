//! View model types representing renderable UI state.
//!
//! View models are immutable snapshots computed from application state. They
//! carry display-ready data only: bar heights are derived later by the bar
//! component from `value` and `scale_max`, and the log is already cut to the
//! lines that fit.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer.
//!
//! # Example
//!
//! ```rust
//! use algoscope::ui::viewmodel::{Bar, BarRole, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo {
//!         title: "Sorting Algorithm Visualizer".to_string(),
//!         subtitle: "Bubble Sort".to_string(),
//!     },
//!     bars: vec![Bar { value: 3, role: BarRole::Primary }],
//!     scale_max: 50,
//!     code: vec![],
//!     log: vec!["Comparing 3 and 5...".to_string()],
//!     footer: FooterInfo { status: "running".to_string() },
//!     empty_state: None,
//! };
//! assert_eq!(vm.bars.len(), 1);
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Page title and algorithm summary.
    pub header: HeaderInfo,

    /// One bar per value, in sequence order.
    pub bars: Vec<Bar>,

    /// Value drawn as a full-height bar.
    pub scale_max: i64,

    /// The selected algorithm's listing.
    pub code: Vec<CodeLine>,

    /// Tail of the thought log, oldest first.
    pub log: Vec<String>,

    pub footer: FooterInfo,

    /// Set when there are no values to draw.
    pub empty_state: Option<EmptyState>,
}

/// How a bar is highlighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BarRole {
    #[default]
    Idle,
    /// First index of interest, or the index being probed.
    Primary,
    /// Second index of interest.
    Secondary,
    /// Already examined by a search.
    Visited,
    /// Where the target was found.
    Found,
}

/// A single value in the bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub value: i64,
    pub role: BarRole,
}

/// One line of the code listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeLine {
    pub text: &'static str,
    /// The last step pointed at this line.
    pub is_current: bool,
}

/// Header information (title, algorithm summary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
}

/// Footer information (run status and counters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub status: String,
}

/// Message shown instead of the bar chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary hint.
    pub subtitle: String,
}
