//! Color palette for the weather reporter.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! The palette is a dark theme: black background, soft white text and a
//! handful of accent colors reserved for temperature and UV severity.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Screen background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Neutral temperature band (24-26°).
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure blue. Cold temperatures (≤15°) and rain.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure red. "Very High" UV, error messages.
pub const RED: Rgb565 = Rgb565::RED;

/// Magenta. "Extreme" UV.
pub const MAGENTA: Rgb565 = Rgb565::MAGENTA;

// =============================================================================
// Theme Colors
// =============================================================================

/// Soft white for primary text (0xD69A), toned down from pure white.
pub const TEXT: Rgb565 = Rgb565::new(26, 52, 26);

/// Grey for labels and secondary text (0x8410).
pub const SUBTLE: Rgb565 = Rgb565::new(16, 32, 16);

/// Warm yellow (0xFE60). Sun rays, "Moderate" UV.
pub const SUN: Rgb565 = Rgb565::new(31, 51, 0);

/// Muted green (0x3666). "Low" UV, connected status.
pub const SUCCESS: Rgb565 = Rgb565::new(6, 51, 6);

/// Orange accent (0xFD20). Hot temperatures (≥40°), "High" UV, active dot.
pub const ACCENT: Rgb565 = Rgb565::new(31, 41, 0);

/// Cornsilk (0xFFDB). Clock and hour labels during daylight.
pub const DAYTIME: Rgb565 = Rgb565::new(31, 62, 27);

/// Grey moon (0x9CD3), slightly lighter than clouds.
pub const MOON: Rgb565 = Rgb565::new(19, 38, 19);

/// Very dark blue (0x0A1F) behind minutely rain bars.
pub const RAIN_BG: Rgb565 = Rgb565::new(1, 16, 31);

/// Darker grey (0x4208) for overcast skies.
pub const OVERCAST: Rgb565 = Rgb565::new(8, 16, 8);

/// Light grey (0x8C71) cloud highlight.
pub const CLOUD: Rgb565 = Rgb565::new(17, 35, 17);

/// Rain and humidity share pure blue.
pub const RAIN: Rgb565 = BLUE;

/// Build an Rgb565 color from 8-bit channels, dropping the low bits the
/// same way the panel driver's `color565` does.
#[inline]
pub const fn from_rgb888(
    r: u8,
    g: u8,
    b: u8,
) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::IntoStorage;

    use super::*;

    #[test]
    fn test_theme_colors_match_panel_values() {
        assert_eq!(TEXT.into_storage(), 0xD69A);
        assert_eq!(SUBTLE.into_storage(), 0x8410);
        assert_eq!(SUN.into_storage(), 0xFE60);
        assert_eq!(SUCCESS.into_storage(), 0x3666);
        assert_eq!(ACCENT.into_storage(), 0xFD20);
        assert_eq!(DAYTIME.into_storage(), 0xFFDB);
        assert_eq!(MOON.into_storage(), 0x9CD3);
        assert_eq!(RAIN_BG.into_storage(), 0x0A1F);
    }

    #[test]
    fn test_from_rgb888() {
        assert_eq!(from_rgb888(0, 0, 255), BLUE);
        assert_eq!(from_rgb888(255, 255, 255), WHITE);
        assert_eq!(from_rgb888(255, 164, 0), ACCENT);
    }
}
