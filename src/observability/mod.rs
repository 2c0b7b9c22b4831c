//! Structured logging for the library and the CLI.
//!
//! Events go to stderr through a `tracing-subscriber` fmt layer, so frames
//! and JSON lines written to stdout stay clean.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"warn"`
//!
//! # Usage
//!
//! ```rust
//! use algoscope::observability::init_tracing;
//! use algoscope::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("visualizer initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup

mod init;

pub use init::init_tracing;
