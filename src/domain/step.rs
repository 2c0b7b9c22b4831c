//! Step events and run outcomes.
//!
//! A step is an immutable snapshot emitted once per notable moment of a run.
//! Steps carry everything a consumer needs to redraw: the values (sorts) or the
//! probe and visited trail (searches), a log line in plain English, and a line
//! marker into the algorithm's static code listing. The `kind` field lets
//! consumers count comparisons and swaps without parsing the prose.

use serde::{Deserialize, Serialize};

/// What happened at a sort step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStepKind {
    /// A new outer pass begins.
    PassStart,
    /// Two elements are about to be compared.
    Compare,
    /// The comparison succeeded and a swap will follow.
    SwapDecision,
    /// A swap was applied; the snapshot shows the post-swap values.
    Swapped,
    /// The comparison failed; order is retained.
    Retain,
    /// Insertion sort picked the key for this pass.
    Select,
    /// Insertion sort shifts one element right.
    Shift,
    /// Insertion sort placed the key after at least one shift.
    Inserted,
    /// Insertion sort placed the key without shifting anything.
    NoShift,
    /// Selection sort found a smaller element.
    NewMinimum,
    /// Selection sort's minimum was already in place.
    NoSwap,
    /// Bubble sort stopped early after a pass without swaps.
    EarlyExit,
    /// Terminal: the values are in ascending order.
    Sorted,
}

impl SortStepKind {
    /// Whether this is the single terminal step of a sort run.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Sorted)
    }
}

/// One snapshot emitted by a sort runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStep {
    /// Full values at the moment of the step.
    pub values: Vec<i64>,
    /// First index of interest.
    pub primary: Option<usize>,
    /// Second index of interest.
    pub secondary: Option<usize>,
    pub kind: SortStepKind,
    /// Human-readable "thought process" line.
    pub log: String,
    /// Zero-based line in the algorithm's code listing, if any applies.
    pub line: Option<usize>,
}

/// What happened at a search step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStepKind {
    /// The search begins; nothing has been probed yet.
    Start,
    /// A single index is examined.
    Check,
    /// Binary search announces its current inclusive bounds.
    Range,
    /// Binary search probes the midpoint.
    Midpoint,
    /// Binary search drops the left half.
    DiscardLeft,
    /// Binary search drops the right half.
    DiscardRight,
    /// Jump search lands on a block boundary.
    Jump,
    /// Jump search identified the block to scan.
    BlockFound,
    /// Terminal: the target was found.
    Found,
    /// Terminal: every candidate was examined and the target is absent.
    NotFound,
}

impl SearchStepKind {
    /// Whether this is the single terminal step of a search run.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Found | Self::NotFound)
    }
}

/// One snapshot emitted by a search runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStep {
    /// Index examined at this step.
    pub probe: Option<usize>,
    /// Whether `probe` holds the target.
    pub found: bool,
    /// Indices examined so far, first-visit order, no duplicates.
    pub visited: Vec<usize>,
    pub kind: SearchStepKind,
    pub log: String,
    pub line: Option<usize>,
}

/// Order-preserving record of probed indices with duplicates collapsed.
///
/// Jump search revisits the block start during its linear scan; the trail
/// keeps the first visit only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitTrail {
    order: Vec<usize>,
}

impl VisitTrail {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a visit. Returns `false` if the index was already on the trail.
    pub fn visit(&mut self, index: usize) -> bool {
        if self.order.contains(&index) {
            return false;
        }
        self.order.push(index);
        true
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<usize> {
        self.order.clone()
    }
}

/// Result of a completed sort run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOutcome {
    /// The values in ascending order.
    pub values: Vec<i64>,
    /// Number of element comparisons performed.
    pub comparisons: usize,
    /// Swaps (bubble, selection) or shifts (insertion) performed.
    pub moves: usize,
}

/// Result of a completed search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    Found(usize),
    NotFound,
}

impl SearchOutcome {
    /// Sentinel returned by [`to_signed`](Self::to_signed) when the target is absent.
    pub const NOT_FOUND: isize = -1;

    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::NotFound => None,
        }
    }

    /// The index as a signed integer, `-1` when not found.
    ///
    /// ```
    /// use algoscope::domain::SearchOutcome;
    ///
    /// assert_eq!(SearchOutcome::Found(4).to_signed(), 4);
    /// assert_eq!(SearchOutcome::NotFound.to_signed(), -1);
    /// ```
    #[must_use]
    pub fn to_signed(self) -> isize {
        self.index()
            .and_then(|index| isize::try_from(index).ok())
            .unwrap_or(Self::NOT_FOUND)
    }
}
