//! Step-emitting sort and search runners.
//!
//! Each runner is a plain function of its input that reports progress through
//! a [`StepSink`]. Pacing and cancellation are injected through [`Runner`], so
//! the same run can animate in a terminal or finish instantly under test.
//!
//! # Organization
//!
//! - [`catalog`]: Algorithm identities, descriptions, complexities, listings
//! - [`listing`]: Static code listings indexed by step line markers
//! - [`pacing`]: Inter-step delay and the cancel flag
//! - [`runner`]: The [`Runner`] facade
//! - [`sink`]: The step-sink capability
//! - [`sortedness`]: The ascending-order predicate

pub mod catalog;
mod emitter;
pub mod listing;
pub mod pacing;
pub mod runner;
mod search;
pub mod sink;
mod sort;
pub mod sortedness;

pub use catalog::{SearchAlgorithm, SortAlgorithm};
pub use pacing::{CancelToken, NoPacing, Pacer, SleepPacer};
pub use runner::Runner;
pub use sink::StepSink;
pub use sortedness::{first_descent, is_sorted};
