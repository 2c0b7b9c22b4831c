//! Composable UI component renderers.
//!
//! Each component writes one part of the frame at an absolute row and returns
//! the next free row, so the layout function reads top to bottom.
//!
//! # Components
//!
//! - [`header`]: Page title and algorithm summary
//! - [`bars`]: Bar chart with value labels
//! - [`code`]: Code listing with the current line marked
//! - [`log`]: Tail of the thought log
//! - [`footer`]: Run status
//! - [`empty`]: Empty state message in place of the bars

mod bars;
mod code;
mod empty;
mod footer;
mod header;
mod log;

pub use empty::render_empty_state;

use std::fmt::{self, Write};

use crate::app::state::BAR_ROWS;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use bars::render_bars;
use code::render_code;
use footer::render_footer;
use header::render_header;
use log::render_log;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> Result<usize, fmt::Error> {
    position_cursor(out, row, 1)?;
    write!(out, "{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset())?;
    Ok(row + 1)
}

/// Renders the full visualizer layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header - 2 lines]
/// [Border]
/// [Bars - BAR_ROWS lines, or the empty state]
/// [Value labels]
/// [Border]
/// [Code listing]
/// [Border]
/// [Log tail]
/// [Border]
/// [Footer]
/// ```
///
/// The footer sits on the last row; the log fills the space between the
/// listing and the footer border.
///
/// # Errors
///
/// Propagates formatter errors from `out`.
pub fn render_visualizer(
    out: &mut String,
    vm: &UIViewModel,
    theme: &Theme,
    cols: usize,
    rows: usize,
) -> fmt::Result {
    let mut current_row = 2;

    current_row = render_header(out, current_row, &vm.header, theme, cols)?;
    current_row = render_border(out, current_row, theme.border, cols)?;

    current_row = match &vm.empty_state {
        Some(empty) => {
            render_empty_state(out, current_row + BAR_ROWS / 2 - 1, empty, theme, cols)?;
            current_row + BAR_ROWS + 1
        }
        None => render_bars(out, current_row, &vm.bars, vm.scale_max, theme, cols)?,
    };

    current_row = render_border(out, current_row, theme.border, cols)?;
    current_row = render_code(out, current_row, &vm.code, theme, cols)?;
    current_row = render_border(out, current_row, theme.border, cols)?;

    let footer_row = rows.max(current_row + 2);
    let border_row = footer_row - 1;
    render_log(out, current_row, border_row, &vm.log, theme, cols)?;

    render_border(out, border_row, theme.border, cols)?;
    render_footer(out, footer_row, &vm.footer, theme, cols)?;
    Ok(())
}
