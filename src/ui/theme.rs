//! Color palette and ANSI escape sequence generation.
//!
//! The palette is fixed: Catppuccin Mocha tones mapped onto the visualizer's
//! roles. Colors are hex strings converted to 24-bit escape sequences on use.
//!
//! # Example
//!
//! ```rust
//! use algoscope::ui::theme::Theme;
//!
//! let theme = Theme::default();
//! let styled = format!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert!(styled.ends_with("\u{1b}[0m"));
//! assert_eq!(Theme::fg(theme.bar_found), "\u{1b}[38;2;166;227;161m");
//! ```

use crate::ui::viewmodel::BarRole;

/// Colors for every UI element, as `#rrggbb` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub header_fg: &'static str,
    pub text_normal: &'static str,
    pub text_dim: &'static str,
    pub border: &'static str,

    pub bar_idle: &'static str,
    pub bar_primary: &'static str,
    pub bar_secondary: &'static str,
    pub bar_visited: &'static str,
    pub bar_found: &'static str,

    /// Marker and text of the current code line.
    pub code_current_fg: &'static str,
    /// Background of the current code line.
    pub code_current_bg: &'static str,

    pub empty_state_fg: &'static str,
    /// Log lines reporting an error.
    pub error_fg: &'static str,
}

impl Theme {
    pub const MOCHA: Self = Self {
        header_fg: "#cdd6f4",
        text_normal: "#cdd6f4",
        text_dim: "#6c7086",
        border: "#45475a",
        bar_idle: "#74c7ec",
        bar_primary: "#f9e2af",
        bar_secondary: "#89b4fa",
        bar_visited: "#cba6f7",
        bar_found: "#a6e3a1",
        code_current_fg: "#1e1e2e",
        code_current_bg: "#f9e2af",
        empty_state_fg: "#89b4fa",
        error_fg: "#f38ba8",
    };

    /// Color of a bar with the given role.
    #[must_use]
    pub const fn bar(&self, role: BarRole) -> &'static str {
        match role {
            BarRole::Idle => self.bar_idle,
            BarRole::Primary => self.bar_primary,
            BarRole::Secondary => self.bar_secondary,
            BarRole::Visited => self.bar_visited,
            BarRole::Found => self.bar_found,
        }
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips `#` prefix if present. Returns `(255, 255, 255)` (white) on
    /// parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::MOCHA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::hex_to_rgb("#12"), (255, 255, 255));
        assert_eq!(Theme::hex_to_rgb("zzzzzz"), (255, 255, 255));
        assert_eq!(Theme::hex_to_rgb("1e1e2e"), (30, 30, 46));
    }

    #[test]
    fn each_role_has_a_distinct_color() {
        let theme = Theme::default();
        let roles = [
            BarRole::Idle,
            BarRole::Primary,
            BarRole::Secondary,
            BarRole::Visited,
            BarRole::Found,
        ];
        for (i, a) in roles.iter().enumerate() {
            for b in &roles[i + 1..] {
                assert_ne!(theme.bar(*a), theme.bar(*b));
            }
        }
    }
}
