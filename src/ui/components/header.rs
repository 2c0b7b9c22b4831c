//! Header component renderer.
//!
//! Renders the page title and the algorithm summary, both centered.

use std::fmt::{self, Write};

use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at the specified row.
///
/// # Parameters
///
/// * `out` - Frame buffer
/// * `row` - Row of the title (1-indexed)
/// * `header` - Title and subtitle text
/// * `theme` - Active palette
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 2)
///
/// # Layout
///
/// ```text
/// [padding] TITLE [padding]
/// [padding] subtitle [padding]
/// ```
pub fn render_header(
    out: &mut String,
    row: usize,
    header: &HeaderInfo,
    theme: &Theme,
    cols: usize,
) -> Result<usize, fmt::Error> {
    position_cursor(out, row, 1)?;
    write!(
        out,
        "{}{}{}{}",
        Theme::bold(),
        Theme::fg(theme.header_fg),
        centered(&header.title, cols),
        Theme::reset()
    )?;

    position_cursor(out, row + 1, 1)?;
    write!(
        out,
        "{}{}{}",
        Theme::fg(theme.text_dim),
        centered(&header.subtitle, cols),
        Theme::reset()
    )?;
    Ok(row + 2)
}
