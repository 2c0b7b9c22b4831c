//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point: compute the view
//! model, then lay it out with the component renderers.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! # Example
//!
//! ```rust
//! use algoscope::app::AppState;
//! use algoscope::app::state::Limits;
//! use algoscope::ui::render;
//!
//! let state = AppState::new(Limits::default(), 0);
//! let frame = render(&state, 40, 80);
//! assert!(frame.contains("Sorting Algorithm Visualizer"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;

/// Renders one frame of the active page.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// ANSI-styled text with absolute cursor positioning. The screen is not
/// cleared; callers decide how frames replace each other.
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let theme = Theme::default();

    let mut frame = String::new();
    if let Err(e) = components::render_visualizer(&mut frame, &viewmodel, &theme, cols, rows) {
        tracing::warn!(error = %e, "frame rendering failed");
    }
    frame
}
