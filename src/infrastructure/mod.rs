//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where the configuration file lives and expands `~` in
//! user-supplied paths.

pub mod paths;

pub use paths::{config_file, expand_tilde};
