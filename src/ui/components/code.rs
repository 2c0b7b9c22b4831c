//! Code listing component renderer.

use std::fmt::{self, Write};

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CodeLine;

/// Renders the listing one line per row, starting at `row`.
///
/// The current line is marked with `>` and drawn on a highlighted
/// background across the full width.
///
/// # Returns
///
/// The next available row position (row + number of lines)
pub fn render_code(
    out: &mut String,
    row: usize,
    code: &[CodeLine],
    theme: &Theme,
    cols: usize,
) -> Result<usize, fmt::Error> {
    let mut current_row = row;
    for (index, line) in code.iter().enumerate() {
        position_cursor(out, current_row, 1)?;
        let marker = if line.is_current { '>' } else { ' ' };
        let text = format!("{marker} {:>2}  {}", index + 1, line.text);
        let text = truncate(&text, cols);
        let padding = " ".repeat(cols.saturating_sub(text.chars().count()));

        if line.is_current {
            write!(
                out,
                "{}{}{}{text}{padding}",
                Theme::bold(),
                Theme::fg(theme.code_current_fg),
                Theme::bg(theme.code_current_bg)
            )?;
        } else {
            write!(out, "{}{text}{padding}", Theme::fg(theme.text_normal))?;
        }
        out.push_str(Theme::reset());
        current_row += 1;
    }
    Ok(current_row)
}
