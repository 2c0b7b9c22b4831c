//! Algoscope: step-by-step sorting and searching visualizer.
//!
//! Algoscope runs classic sorting and searching algorithms one observable step
//! at a time:
//! - Bubble, Insertion and Selection sort emit snapshots of the whole sequence
//!   with the indices under consideration
//! - Linear, Binary and Jump search emit the probed index and the trail of
//!   visited indices
//! - Every step carries a human-readable log line and a pointer into the
//!   algorithm's code listing
//! - Pacing and cancellation are injected, so the same run animates in a
//!   terminal or completes instantly under test

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI Shim (main.rs)                                 │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                       │
//! ┌───────────────┐                       ┌───────────────┐
//! │ UI Layer      │                       │ Worker Layer  │
//! │ (ui/)         │                       │ (worker/)     │
//! │ - Rendering   │                       │ - Paced runs  │
//! │ - Components  │                       │ - Run reports │
//! └───────────────┘                       └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Algorithms (algorithms/)                           │  ← Runners
//! │  - Sort and search runners, step sinks, pacing      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Config paths (infrastructure/)                   │
//! │  - Error types, sequences, steps (domain/)          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`algorithms`]: Step-emitting runners and the [`Runner`](algorithms::Runner) facade
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (sequences, steps, errors)
//! - [`infrastructure`]: Configuration file paths
//! - [`worker`]: Paced run execution and the action loop
//! - [`ui`]: Terminal rendering
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! Every key is optional:
//!
//! ```toml
//! # ~/.config/algoscope/config.toml
//! sort_delay_ms = 400
//! search_delay_ms = 800
//! sort_max_len = 15
//! search_max_len = 15
//! sort_random_len = 10
//! sort_max_value = 50
//! search_max_value = 99
//! bubble_early_exit = false
//! trace_level = "debug"
//! seed = 7
//! ```
//!
//! # Examples
//!
//! ## Running an algorithm directly
//!
//! ```rust
//! use algoscope::algorithms::{Runner, SortAlgorithm};
//! use algoscope::domain::SortStep;
//!
//! let mut steps = Vec::new();
//! let mut sink = |step: SortStep| steps.push(step);
//! let outcome = Runner::immediate().sort(SortAlgorithm::Selection, &[3, 1, 2], &mut sink)?;
//!
//! assert_eq!(outcome.values, vec![1, 2, 3]);
//! assert!(steps.last().is_some_and(|step| step.kind.is_terminal()));
//! # Ok::<(), algoscope::AlgoscopeError>(())
//! ```
//!
//! ## Driving the state machine
//!
//! ```rust
//! use algoscope::worker::{drive, RunWorker};
//! use algoscope::{handle_event, initialize, Config, Event};
//!
//! let config = Config { seed: Some(1), ..Default::default() };
//! let mut state = initialize(&config);
//!
//! let (_, actions) = handle_event(&mut state, &Event::Run)?;
//! drive(&mut state, actions, &RunWorker::immediate(), &mut |_| {})?;
//! assert_eq!(state.sort.values, vec![1, 2, 3, 4, 5, 7, 8]);
//! # Ok::<(), algoscope::AlgoscopeError>(())
//! ```

pub mod algorithms;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{AlgoscopeError, Result};

use std::path::Path;

use serde::Deserialize;

use app::state::Limits;

/// Runtime configuration, read from TOML.
///
/// Missing keys take their defaults; unknown keys are rejected so typos do
/// not pass silently.
///
/// # Example
///
/// ```rust
/// use algoscope::Config;
///
/// let config = Config::from_toml_str("sort_delay_ms = 50\nseed = 3")?;
/// assert_eq!(config.sort_delay_ms, 50);
/// assert_eq!(config.search_delay_ms, 800);
/// assert_eq!(config.seed, Some(3));
/// # Ok::<(), algoscope::AlgoscopeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Pause after each sort step, in milliseconds. Default: 400
    pub sort_delay_ms: u64,

    /// Pause after each search step, in milliseconds. Default: 800
    pub search_delay_ms: u64,

    /// Maximum number of values on the sorting page. Default: 15
    pub sort_max_len: usize,

    /// Maximum number of values on the searching page. Default: 15
    pub search_max_len: usize,

    /// Number of values drawn by `Randomize` on the sorting page. Default: 10
    pub sort_random_len: usize,

    /// Largest value drawn on the sorting page. Default: 50
    pub sort_max_value: i64,

    /// Largest value drawn on the searching page. Default: 99
    pub search_max_value: i64,

    /// Stop Bubble Sort after a pass without swaps. Default: false
    pub bubble_early_exit: bool,

    /// Tracing filter directive, e.g. `debug` or `algoscope=trace`.
    ///
    /// `RUST_LOG` takes precedence. Default: `"warn"`
    pub trace_level: Option<String>,

    /// Seed for `Randomize`. Unset draws from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        let limits = Limits::default();
        Self {
            sort_delay_ms: 400,
            search_delay_ms: 800,
            sort_max_len: limits.sort_max_len,
            search_max_len: limits.search_max_len,
            sort_random_len: limits.sort_random_len,
            sort_max_value: limits.sort_max_value,
            search_max_value: limits.search_max_value,
            bubble_early_exit: false,
            trace_level: None,
            seed: None,
        }
    }
}

impl Config {
    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// - [`AlgoscopeError::Toml`] on malformed TOML or unknown keys
    /// - [`AlgoscopeError::Config`] when [`validate`](Self::validate) fails
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoscopeError::Io`] if the file cannot be read, otherwise
    /// as [`from_toml_str`](Self::from_toml_str).
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "config file read");
        Self::from_toml_str(&text)
    }

    /// Loads configuration from `explicit`, or from the default location.
    ///
    /// An explicit path must exist. The default location is optional: when no
    /// file is there, defaults are used.
    ///
    /// # Errors
    ///
    /// As [`from_file`](Self::from_file).
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match infrastructure::config_file() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Checks that limits are usable.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoscopeError::Config`] when a length or value bound is not
    /// positive, or when `sort_random_len` exceeds `sort_max_len`.
    pub fn validate(&self) -> Result<()> {
        if self.sort_max_len == 0 || self.search_max_len == 0 {
            return Err(AlgoscopeError::Config(
                "maximum lengths must be positive".to_string(),
            ));
        }
        if self.sort_random_len == 0 {
            return Err(AlgoscopeError::Config(
                "sort_random_len must be positive".to_string(),
            ));
        }
        if self.sort_random_len > self.sort_max_len {
            return Err(AlgoscopeError::Config(format!(
                "sort_random_len ({}) exceeds sort_max_len ({})",
                self.sort_random_len, self.sort_max_len
            )));
        }
        if self.sort_max_value < 1 || self.search_max_value < 1 {
            return Err(AlgoscopeError::Config(
                "maximum values must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The length and value bounds the state machine enforces.
    #[must_use]
    pub const fn limits(&self) -> Limits {
        Limits {
            sort_max_len: self.sort_max_len,
            search_max_len: self.search_max_len,
            sort_random_len: self.sort_random_len,
            sort_max_value: self.sort_max_value,
            search_max_value: self.search_max_value,
        }
    }
}

/// Creates the initial application state.
///
/// Uses the configured seed when present so `Randomize` replays the same
/// sequences across runs.
///
/// # Example
///
/// ```rust
/// use algoscope::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.sort.values, vec![5, 3, 8, 4, 1, 2, 7]);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(seeded = config.seed.is_some(), "initializing algoscope");

    let limits = config.limits();
    config.seed.map_or_else(
        || AppState::unseeded(limits),
        |seed| AppState::new(limits, seed),
    )
}
