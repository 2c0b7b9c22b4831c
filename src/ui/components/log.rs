//! Thought log component renderer.

use std::fmt::{self, Write};

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;

/// Renders log lines one per row starting at `row`, stopping before `limit`.
///
/// Lines starting with `Error:` use the error color. Long lines are
/// truncated, never wrapped.
///
/// # Returns
///
/// The next available row position
pub fn render_log(
    out: &mut String,
    row: usize,
    limit: usize,
    log: &[String],
    theme: &Theme,
    cols: usize,
) -> Result<usize, fmt::Error> {
    let mut current_row = row;
    for line in log {
        if current_row >= limit {
            break;
        }
        position_cursor(out, current_row, 1)?;
        let color = if line.starts_with("Error:") {
            theme.error_fg
        } else {
            theme.text_normal
        };
        write!(out, "{}{}{}", Theme::fg(color), truncate(line, cols), Theme::reset())?;
        current_row += 1;
    }
    Ok(current_row)
}
