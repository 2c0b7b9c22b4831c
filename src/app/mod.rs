//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the entry point (main.rs) and the
//! algorithms/worker layers. It implements the event-driven loop behind both
//! visualizer pages.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Input → Events → Event Handler → State Mutations → Actions → Runs
//!                       ↑                                        ↓
//!                       └──────────── Run Updates ───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Page and run-status types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use algoscope::app::{handle_event, AppState, Event};
//! use algoscope::app::state::Limits;
//!
//! let mut state = AppState::new(Limits::default(), 0);
//! let (render, _actions) = handle_event(&mut state, &Event::ShowSearching)?;
//! assert!(render);
//! # Ok::<(), algoscope::AlgoscopeError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Page, RunStatus};
pub use state::AppState;
