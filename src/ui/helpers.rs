//! Shared rendering utilities.
//!
//! Text helpers count characters, not bytes, so multi-byte glyphs in the log
//! never split or misalign a row.

use std::fmt::{self, Write};

use crate::app::state::BAR_ROWS;

/// Positions the cursor at a specific row and column (both 1-indexed).
///
/// # Errors
///
/// Propagates formatter errors from `out`.
pub fn position_cursor(out: &mut String, row: usize, col: usize) -> fmt::Result {
    write!(out, "\u{1b}[{row};{col}H")
}

/// Cuts `text` to at most `width` characters.
#[must_use]
pub fn truncate(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

/// Pads `text` on both sides to `width` characters, truncating if needed.
///
/// When the padding cannot split evenly the extra space goes to the right.
///
/// # Example
///
/// ```rust
/// use algoscope::ui::helpers::centered;
///
/// assert_eq!(centered("ab", 5), " ab  ");
/// assert_eq!(centered("abcdef", 3), "abc");
/// ```
#[must_use]
pub fn centered(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let len = text.chars().count();
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Number of filled rows for a bar of `value` on a chart topped by `scale_max`.
///
/// Positive values always get at least one row; zero and negative values get
/// none. Values above `scale_max` are clamped to a full bar.
#[must_use]
pub fn bar_height(value: i64, scale_max: i64) -> usize {
    if value <= 0 || scale_max <= 0 {
        return 0;
    }
    let rows = i128::try_from(BAR_ROWS).unwrap_or(i128::MAX);
    let scaled = (i128::from(value) * rows + i128::from(scale_max) - 1) / i128::from(scale_max);
    usize::try_from(scaled).map_or(BAR_ROWS, |h| h.clamp(1, BAR_ROWS))
}
