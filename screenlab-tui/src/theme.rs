//! Neon-on-charcoal style tokens for the screener TUI.
//!
//! # Color Palette
//! - **Accent**: electric cyan (focus, selected buckets, highlights)
//! - **Positive**: neon green (gains, positive relative force)
//! - **Negative**: hot pink (losses, negative relative force)
//! - **Warning**: neon orange (grabbed handle, warnings)
//! - **Neutral**: cool purple (secondary info)
//! - **Muted**: steel blue (inactive buckets, disabled text)

use ratatui::style::{Color, Modifier, Style};

const ACCENT: Color = Color::Rgb(0, 255, 255);
const POSITIVE: Color = Color::Rgb(0, 255, 128);
const NEGATIVE: Color = Color::Rgb(255, 20, 147);
const WARNING: Color = Color::Rgb(255, 140, 0);
const NEUTRAL: Color = Color::Rgb(147, 112, 219);
const MUTED: Color = Color::Rgb(100, 149, 237);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn panel_border(active: bool) -> Style {
    if active { accent() } else { muted() }
}

pub fn panel_title(active: bool) -> Style {
    if active { accent_bold() } else { muted() }
}

/// Histogram bucket style: emphasized inside the selection, dim outside.
pub fn bucket(active: bool) -> Style {
    if active { accent() } else { muted() }
}

/// Style for a signed percentage value (relative force).
pub fn signed(value: f64) -> Style {
    if value >= 0.0 { positive() } else { negative() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_styles_differ() {
        assert_ne!(bucket(true), bucket(false));
    }

    #[test]
    fn signed_style_follows_sign() {
        assert_eq!(signed(4.2), positive());
        assert_eq!(signed(-4.2), negative());
        assert_eq!(signed(0.0), positive());
    }
}
