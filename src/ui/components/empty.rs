//! Empty state component renderer.
//!
//! Shown in place of the bar chart when the active page has no values.

use std::fmt::{self, Write};

use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line empty state message starting at `row`.
///
/// # Layout
///
/// ```text
/// [padding] MESSAGE [padding]
/// [padding] subtitle [padding]
/// ```
///
/// The message uses `empty_state_fg`; the subtitle is dimmed.
///
/// # Example
///
/// ```rust
/// use algoscope::ui::components::render_empty_state;
/// use algoscope::ui::viewmodel::EmptyState;
/// use algoscope::ui::Theme;
///
/// let empty = EmptyState {
///     message: "No values to visualize".to_string(),
///     subtitle: "Enter up to 15 comma-separated numbers".to_string(),
/// };
/// let mut frame = String::new();
/// render_empty_state(&mut frame, 6, &empty, &Theme::default(), 80)?;
/// assert!(frame.contains("No values to visualize"));
/// # Ok::<(), std::fmt::Error>(())
/// ```
pub fn render_empty_state(
    out: &mut String,
    row: usize,
    empty: &EmptyState,
    theme: &Theme,
    cols: usize,
) -> Result<usize, fmt::Error> {
    position_cursor(out, row, 1)?;
    write!(
        out,
        "{}{}{}",
        Theme::fg(theme.empty_state_fg),
        centered(&empty.message, cols),
        Theme::reset()
    )?;

    position_cursor(out, row + 1, 1)?;
    write!(
        out,
        "{}{}{}{}",
        Theme::dim(),
        Theme::fg(theme.text_dim),
        centered(&empty.subtitle, cols),
        Theme::reset()
    )?;
    Ok(row + 2)
}
