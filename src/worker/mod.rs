//! Paced run execution.
//!
//! This module executes the runs requested by the state machine and feeds
//! their steps back into it.
//!
//! # Architecture
//!
//! - `messages`: Request, update and report types, all JSON-serializable
//! - `handler`: [`RunWorker`] and the [`drive`] loop

pub mod handler;
pub mod messages;

pub use handler::{drive, RunWorker};
pub use messages::{RunReport, RunRequest, RunResult, RunUpdate};
