//! Theme and Colors
//!
//! The clap palette: a warm button, burnt-orange polygon sparks and
//! gray circle sparks, matching the shipped control's effect colors.

use ratatui::style::Color;

/// Polygon burst particles - burnt orange.
pub const BURST_POLYGON: Color = Color::Rgb(211, 54, 0);

/// Circle burst particles - concrete gray.
pub const BURST_CIRCLE: Color = Color::Rgb(149, 165, 166);

/// Button border/icon before the first clap.
pub const BUTTON_IDLE: Color = Color::Rgb(189, 195, 199);

/// Button border/icon once clapped.
pub const BUTTON_PRESSED: Color = Color::Rgb(211, 54, 0);

/// The floating "+N" counter badge.
pub const COUNTER_BADGE: Color = Color::Rgb(82, 146, 247);

/// The community total line.
pub const TOTAL_TEXT: Color = Color::Rgb(149, 165, 166);

/// Dim hint text.
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);

/// Scale an RGB color toward black by an opacity factor, approximating
/// alpha compositing on a dark terminal background.
pub fn faded(color: Color, opacity: f32) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * opacity) as u8,
            (g as f32 * opacity) as u8,
            (b as f32 * opacity) as u8,
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faded_endpoints() {
        assert_eq!(faded(Color::Rgb(200, 100, 50), 1.0), Color::Rgb(200, 100, 50));
        assert_eq!(faded(Color::Rgb(200, 100, 50), 0.0), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_faded_clamps_opacity() {
        assert_eq!(faded(Color::Rgb(10, 10, 10), 2.0), Color::Rgb(10, 10, 10));
    }

    #[test]
    fn test_faded_passes_named_colors_through() {
        assert_eq!(faded(Color::Magenta, 0.5), Color::Magenta);
    }
}
