//! Footer component renderer.

use std::fmt::{self, Write};

use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the status line at the specified row.
///
/// The status is centered and dimmed. Text wider than the terminal is
/// truncated so the row never wraps.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(
    out: &mut String,
    row: usize,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
) -> Result<usize, fmt::Error> {
    position_cursor(out, row, 1)?;
    write!(
        out,
        "{}{}{}",
        Theme::fg(theme.text_dim),
        centered(&footer.status, cols),
        Theme::reset()
    )?;
    Ok(row + 1)
}
