//! Domain layer for Algoscope.
//!
//! This module contains the core data types shared by the runners, the
//! application state machine, and the presentation layer. Nothing here knows
//! about pacing, terminals, or configuration files.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`sequence`]: Bounded integer sequences, parsing, random generation
//! - [`step`]: Step events and run outcomes
//!
//! # Examples
//!
//! ```
//! use algoscope::domain::{Result, Sequence};
//!
//! fn read_input(text: &str) -> Result<Sequence> {
//!     Sequence::parse(text, 15)
//! }
//!
//! assert_eq!(read_input("5 3 8").unwrap().len(), 3);
//! ```

pub mod error;
pub mod sequence;
pub mod step;

pub use error::{AlgoscopeError, Result};
pub use sequence::{join_values, Sequence};
pub use step::{
    SearchOutcome, SearchStep, SearchStepKind, SortOutcome, SortStep, SortStepKind, VisitTrail,
};
