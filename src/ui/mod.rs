//! Terminal rendering layer with component-based architecture.
//!
//! This module turns application state into ANSI-styled frames: a bar chart
//! of the current values, the algorithm's code listing with the current line
//! marked, the tail of the thought log, and a status footer.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Cursor positioning, truncation, bar scaling
//! - [`theme`]: Fixed palette and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{Bar, BarRole, CodeLine, EmptyState, FooterInfo, HeaderInfo, UIViewModel};
