//! Bar chart component renderer.

use std::fmt::{self, Write};

use crate::app::state::BAR_ROWS;
use crate::ui::helpers::{bar_height, centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::Bar;

/// Widest slot a single bar may take, gap included.
const MAX_SLOT: usize = 6;

/// Renders the bar chart with value labels starting at `row`.
///
/// Each value gets a slot of equal width: a colored column followed by a
/// one-character gap. Heights are scaled so `scale_max` fills all
/// [`BAR_ROWS`] rows. Labels sit on the row below the chart.
///
/// # Returns
///
/// The next available row position (row + `BAR_ROWS` + 1)
pub fn render_bars(
    out: &mut String,
    row: usize,
    bars: &[Bar],
    scale_max: i64,
    theme: &Theme,
    cols: usize,
) -> Result<usize, fmt::Error> {
    let slot = slot_width(bars.len(), cols);
    let body = slot.saturating_sub(1).max(1);
    let heights: Vec<usize> = bars
        .iter()
        .map(|bar| bar_height(bar.value, scale_max))
        .collect();

    for level in 0..BAR_ROWS {
        let threshold = BAR_ROWS - level;
        position_cursor(out, row + level, 1)?;
        for (bar, &height) in bars.iter().zip(&heights) {
            if height >= threshold {
                write!(out, "{}{}", Theme::fg(theme.bar(bar.role)), "█".repeat(body))?;
            } else {
                out.push_str(&" ".repeat(body));
            }
            out.push_str(&" ".repeat(slot - body));
        }
        out.push_str(Theme::reset());
    }

    position_cursor(out, row + BAR_ROWS, 1)?;
    for bar in bars {
        write!(
            out,
            "{}{}",
            Theme::fg(theme.bar(bar.role)),
            centered(&bar.value.to_string(), slot)
        )?;
    }
    out.push_str(Theme::reset());

    Ok(row + BAR_ROWS + 1)
}

/// Width of one bar slot for `count` bars across `cols` columns.
fn slot_width(count: usize, cols: usize) -> usize {
    if count == 0 {
        return MAX_SLOT;
    }
    (cols / count).clamp(2, MAX_SLOT)
}
