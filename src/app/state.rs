//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container, along with
//! the per-page panels it owns. It is the single source of truth for what the
//! renderer shows: the current sequence, the highlighted indices, the current
//! code line, and the thought log.
//!
//! # State Components
//!
//! - **Page**: Which visualizer is active
//! - **Limits**: Length and value bounds taken from [`Config`](crate::Config)
//! - **Sort panel**: Sequence, algorithm, bar highlights, log
//! - **Search panel**: Sequence, target, algorithm, probe and visited trail, log
//! - **Status**: Whether a run is in flight
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] turns the active panel into a
//! [`UIViewModel`](crate::ui::viewmodel::UIViewModel) sized for the terminal.
//!
//! # Example
//!
//! ```rust
//! use algoscope::app::AppState;
//! use algoscope::app::state::Limits;
//!
//! let state = AppState::new(Limits::default(), 7);
//! let viewmodel = state.compute_viewmodel(40, 80);
//! assert_eq!(viewmodel.bars.len(), 7);
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::modes::{Page, RunStatus};
use crate::algorithms::{is_sorted, SearchAlgorithm, SortAlgorithm};
use crate::domain::{join_values, SearchOutcome, SearchStep, Sequence, SortOutcome, SortStep};
use crate::ui::viewmodel::{
    Bar, BarRole, CodeLine, EmptyState, FooterInfo, HeaderInfo, UIViewModel,
};

/// Rows reserved for the bar chart, excluding the value labels.
pub const BAR_ROWS: usize = 10;

/// Rows used by everything except the code listing and the log.
///
/// Blank line, title, subtitle, border, bars, labels, border, border above
/// the log, border above the footer, footer.
pub const CHROME_ROWS: usize = 9 + BAR_ROWS;

const SORT_SAMPLE: [i64; 7] = [5, 3, 8, 4, 1, 2, 7];
const SEARCH_SAMPLE: [i64; 8] = [2, 5, 8, 12, 23, 27, 31, 39];
const SEARCH_SAMPLE_TARGET: i64 = 23;

/// Smallest length the search page draws when randomizing.
const SEARCH_RANDOM_MIN_LEN: usize = 5;

/// Bounds on user-provided and generated sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub sort_max_len: usize,
    pub search_max_len: usize,
    pub sort_random_len: usize,
    pub sort_max_value: i64,
    pub search_max_value: i64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            sort_max_len: 15,
            search_max_len: 15,
            sort_random_len: 10,
            sort_max_value: 50,
            search_max_value: 99,
        }
    }
}

/// View state of the sorting page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortPanel {
    pub algorithm: SortAlgorithm,
    /// Text of the sequence input box.
    pub input: String,
    pub values: Vec<i64>,
    pub primary: Option<usize>,
    pub secondary: Option<usize>,
    pub line: Option<usize>,
    pub log: Vec<String>,
    pub outcome: Option<SortOutcome>,
}

impl SortPanel {
    fn new(values: Vec<i64>) -> Self {
        Self {
            algorithm: SortAlgorithm::default(),
            input: join_values(&values),
            values,
            primary: None,
            secondary: None,
            line: None,
            log: Vec::new(),
            outcome: None,
        }
    }

    /// Replaces the sequence and clears everything derived from the last run.
    pub fn set_values(&mut self, values: Vec<i64>) {
        self.input = join_values(&values);
        self.values = values;
        self.reset_visuals();
    }

    pub fn reset_visuals(&mut self) {
        self.primary = None;
        self.secondary = None;
        self.line = None;
        self.outcome = None;
    }

    /// Mirrors a step into the panel. The log grows by one line.
    pub fn apply_step(&mut self, step: &SortStep) {
        self.values.clone_from(&step.values);
        self.primary = step.primary;
        self.secondary = step.secondary;
        self.line = step.line;
        self.log.push(step.log.clone());
    }
}

/// View state of the searching page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPanel {
    pub algorithm: SearchAlgorithm,
    pub input: String,
    pub values: Vec<i64>,
    /// Text of the target input box, digits only.
    pub target_input: String,
    pub target: Option<i64>,
    /// Set when a search was requested without a usable target.
    pub target_error: bool,
    /// The selected algorithm needs ascending input and the sequence is not.
    pub needs_sorting: bool,
    pub probe: Option<usize>,
    pub found: Option<usize>,
    pub visited: Vec<usize>,
    pub line: Option<usize>,
    pub log: Vec<String>,
    pub outcome: Option<SearchOutcome>,
}

impl SearchPanel {
    fn new(values: Vec<i64>, target: i64) -> Self {
        Self {
            algorithm: SearchAlgorithm::default(),
            input: join_values(&values),
            values,
            target_input: target.to_string(),
            target: Some(target),
            target_error: false,
            needs_sorting: false,
            probe: None,
            found: None,
            visited: Vec::new(),
            line: None,
            log: Vec::new(),
            outcome: None,
        }
    }

    pub fn set_values(&mut self, values: Vec<i64>) {
        self.input = join_values(&values);
        self.values = values;
        self.reset_visuals();
    }

    pub fn reset_visuals(&mut self) {
        self.probe = None;
        self.found = None;
        self.visited.clear();
        self.line = None;
        self.outcome = None;
    }

    pub fn apply_step(&mut self, step: &SearchStep) {
        self.probe = step.probe;
        self.found = if step.found { step.probe } else { None };
        self.visited.clone_from(&step.visited);
        self.line = step.line;
        self.log.push(step.log.clone());
    }

    /// Re-evaluates whether the selected algorithm can run on the sequence.
    ///
    /// Previous readiness lines are dropped from the log and the current one
    /// is appended, so the log never accumulates stale requirements.
    pub fn refresh_readiness(&mut self) {
        let requires = self.algorithm.requires_sorted();
        let sorted = is_sorted(&self.values);
        self.needs_sorting = requires && !sorted;

        let name = self.algorithm.short_name();
        let message = if self.needs_sorting {
            format!(
                "This algorithm ({name}) requires a sorted array. Please sort the input array first."
            )
        } else if requires {
            format!("Array is sorted. Ready for {name} search.")
        } else {
            format!("Algorithm changed to {name}.")
        };

        self.log.retain(|line| !is_readiness_line(line));
        self.log.push(message);
    }
}

fn is_readiness_line(line: &str) -> bool {
    line.starts_with("This algorithm (")
        || line.starts_with("Array is sorted. Ready for")
        || line.starts_with("Algorithm changed to")
}

/// Central application state container.
///
/// Mutated only through [`handle_event`](crate::app::handle_event). The random
/// generator lives here so a seeded configuration replays the same sequences.
#[derive(Debug, Clone)]
pub struct AppState {
    pub page: Page,
    pub limits: Limits,
    pub sort: SortPanel,
    pub search: SearchPanel,
    pub status: RunStatus,
    /// Number of steps applied during the current or last run.
    pub steps_applied: usize,
    rng: StdRng,
}

impl AppState {
    /// Creates the initial state with the sample sequences on both pages.
    ///
    /// # Parameters
    ///
    /// * `limits` - Length and value bounds
    /// * `seed` - Seed for the random generator behind `Randomize`
    #[must_use]
    pub fn new(limits: Limits, seed: u64) -> Self {
        Self::with_rng(limits, StdRng::seed_from_u64(seed))
    }

    /// Like [`new`](Self::new), with an OS-seeded generator.
    #[must_use]
    pub fn unseeded(limits: Limits) -> Self {
        Self::with_rng(limits, StdRng::from_os_rng())
    }

    fn with_rng(limits: Limits, rng: StdRng) -> Self {
        let mut search = SearchPanel::new(SEARCH_SAMPLE.to_vec(), SEARCH_SAMPLE_TARGET);
        search.refresh_readiness();
        Self {
            page: Page::default(),
            limits,
            sort: SortPanel::new(SORT_SAMPLE.to_vec()),
            search,
            status: RunStatus::Idle,
            steps_applied: 0,
            rng,
        }
    }

    /// Maximum sequence length on the active page.
    #[must_use]
    pub const fn max_len(&self) -> usize {
        match self.page {
            Page::Sorting => self.limits.sort_max_len,
            Page::Searching => self.limits.search_max_len,
        }
    }

    /// Thought log of the active page.
    #[must_use]
    pub fn active_log(&self) -> &[String] {
        match self.page {
            Page::Sorting => &self.sort.log,
            Page::Searching => &self.search.log,
        }
    }

    /// Draws a random sequence sized for the active page.
    pub(crate) fn random_sequence(&mut self) -> Sequence {
        match self.page {
            Page::Sorting => {
                let len = self.limits.sort_random_len;
                let max = self.limits.sort_max_value;
                Sequence::random(&mut self.rng, len, max)
            }
            Page::Searching => {
                use rand::Rng;

                let upper = self.limits.search_max_len;
                let lower = SEARCH_RANDOM_MIN_LEN.min(upper);
                let len = self.rng.random_range(lower..=upper);
                let max = self.limits.search_max_value;
                Sequence::random(&mut self.rng, len, max)
            }
        }
    }

    /// Computes a renderable view model for the active page.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    ///
    /// # Returns
    ///
    /// A [`UIViewModel`] with one bar per value, the code listing with the
    /// current line marked, and as much of the log tail as fits.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let (values, listing, line) = match self.page {
            Page::Sorting => (&self.sort.values, self.sort.algorithm.listing(), self.sort.line),
            Page::Searching => (&self.search.values, self.search.algorithm.listing(), self.search.line),
        };

        let log_rows = rows.saturating_sub(CHROME_ROWS + listing.len());
        let log = self.active_log();
        let log_tail = log[log.len().saturating_sub(log_rows)..].to_vec();

        let code = listing
            .iter()
            .copied()
            .enumerate()
            .map(|(index, text)| CodeLine {
                text,
                is_current: line == Some(index),
            })
            .collect();

        let empty_state = values.is_empty().then(|| EmptyState {
            message: "No values to visualize".to_string(),
            subtitle: format!("Enter up to {} comma-separated numbers", self.max_len()),
        });

        tracing::trace!(rows, cols, bars = values.len(), log_rows, "view model computed");

        UIViewModel {
            header: self.compute_header(),
            bars: self.compute_bars(),
            scale_max: self.scale_max(),
            code,
            log: log_tail,
            footer: self.compute_footer(),
            empty_state,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let subtitle = match self.page {
            Page::Sorting => {
                let alg = self.sort.algorithm;
                format!(
                    "{}  time {}  space {}",
                    alg.name(),
                    alg.time_complexity(),
                    alg.space_complexity()
                )
            }
            Page::Searching => {
                let alg = self.search.algorithm;
                let target = self
                    .search
                    .target
                    .map_or_else(|| "none".to_string(), |t| t.to_string());
                format!(
                    "{}  time {}  space {}  target {target}",
                    alg.name(),
                    alg.time_complexity(),
                    alg.space_complexity()
                )
            }
        };
        HeaderInfo {
            title: self.page.title().to_string(),
            subtitle,
        }
    }

    fn compute_bars(&self) -> Vec<Bar> {
        match self.page {
            Page::Sorting => {
                let panel = &self.sort;
                panel
                    .values
                    .iter()
                    .enumerate()
                    .map(|(index, &value)| {
                        let role = if panel.primary == Some(index) {
                            BarRole::Primary
                        } else if panel.secondary == Some(index) {
                            BarRole::Secondary
                        } else {
                            BarRole::Idle
                        };
                        Bar { value, role }
                    })
                    .collect()
            }
            Page::Searching => {
                let panel = &self.search;
                panel
                    .values
                    .iter()
                    .enumerate()
                    .map(|(index, &value)| {
                        let role = if panel.found == Some(index) {
                            BarRole::Found
                        } else if panel.probe == Some(index) {
                            BarRole::Primary
                        } else if panel.visited.contains(&index) {
                            BarRole::Visited
                        } else {
                            BarRole::Idle
                        };
                        Bar { value, role }
                    })
                    .collect()
            }
        }
    }

    /// Height that maps to a full bar: the page's value bound, or the largest
    /// value if user input exceeds it.
    fn scale_max(&self) -> i64 {
        let (values, bound) = match self.page {
            Page::Sorting => (&self.sort.values, self.limits.sort_max_value),
            Page::Searching => (&self.search.values, self.limits.search_max_value),
        };
        values.iter().copied().max().unwrap_or(0).max(bound).max(1)
    }

    fn compute_footer(&self) -> FooterInfo {
        let mut status = format!("{}  steps {}", self.status.label(), self.steps_applied);
        match self.page {
            Page::Sorting => {
                if let Some(outcome) = &self.sort.outcome {
                    status.push_str(&format!(
                        "  comparisons {}  moves {}",
                        outcome.comparisons, outcome.moves
                    ));
                }
            }
            Page::Searching => {
                if self.search.needs_sorting {
                    status.push_str("  input must be sorted first");
                }
                if self.search.target_error {
                    status.push_str("  target required");
                }
                if let Some(outcome) = self.search.outcome {
                    status.push_str(&format!("  result {}", outcome.to_signed()));
                }
            }
        }
        FooterInfo { status }
    }
}
