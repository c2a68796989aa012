//! Temperature and UV severity colors.
//!
//! # Temperature Gradient
//!
//! ```text
//!  ≤15°      15°..24°          24°..26°     26°..40°            ≥40°
//!  BLUE  →  blue→white  →   WHITE   →  white→orange  →  ACCENT
//! ```
//!
//! The gradients are computed in 8-bit channels and quantized to Rgb565 at
//! the end, so each branch meets its neighbour exactly at the breakpoints.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{ACCENT, BLUE, MAGENTA, RAIN, RED, SUCCESS, SUN, TEXT, WHITE, from_rgb888};
use crate::thresholds::{
    RAIN_CHANCE_EMPHASIS,
    TEMP_COLD_MAX,
    TEMP_HOT_MIN,
    TEMP_NEUTRAL_MAX,
    TEMP_NEUTRAL_MIN,
    UV_EXTREME,
    UV_HIGH,
    UV_MODERATE,
    UV_VERY_HIGH,
};

/// Green channel of the hot accent in 8-bit space (0xFD20 → 41 << 2).
const HOT_GREEN_8: f32 = 164.0;

/// Color for a temperature in °C.
///
/// - `t ≤ 15`: cold blue
/// - `15 < t < 24`: red and green rise together from 0 to 255, blue pinned at 255
/// - `24 ≤ t ≤ 26`: neutral white
/// - `26 < t < 40`: red pinned at 255, green falls to the accent's green,
///   blue falls to 0
/// - `t ≥ 40`: hot accent orange
pub fn temp_color(t: f32) -> Rgb565 {
    if t <= TEMP_COLD_MAX {
        BLUE
    } else if t >= TEMP_HOT_MIN {
        ACCENT
    } else if (TEMP_NEUTRAL_MIN..=TEMP_NEUTRAL_MAX).contains(&t) {
        WHITE
    } else if t < TEMP_NEUTRAL_MIN {
        let ratio = ((t - TEMP_COLD_MAX) / (TEMP_NEUTRAL_MIN - TEMP_COLD_MAX)).clamp(0.0, 1.0);
        let rg = (ratio * 255.0) as u8;
        from_rgb888(rg, rg, 255)
    } else {
        let ratio = ((t - TEMP_NEUTRAL_MAX) / (TEMP_HOT_MIN - TEMP_NEUTRAL_MAX)).clamp(0.0, 1.0);
        let g = (255.0 - ratio * (255.0 - HOT_GREEN_8)) as u8;
        let b = (255.0 - ratio * 255.0) as u8;
        from_rgb888(255, g, b)
    }
}

/// Rain-chance text color: rain blue above 50 %, normal text otherwise.
#[inline]
pub fn rain_chance_color(pop: u8) -> Rgb565 { if pop > RAIN_CHANCE_EMPHASIS { RAIN } else { TEXT } }

// =============================================================================
// UV Index
// =============================================================================

/// UV index severity bucket. Lower bounds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum UvLevel {
    /// 0 ≤ uvi < 3
    Low,
    /// 3 ≤ uvi < 6
    Moderate,
    /// 6 ≤ uvi < 8
    High,
    /// 8 ≤ uvi < 11
    VeryHigh,
    /// uvi ≥ 11
    Extreme,
}

impl UvLevel {
    /// Bucket for a UV index value.
    pub fn from_index(uvi: f32) -> Self {
        if uvi < UV_MODERATE {
            Self::Low
        } else if uvi < UV_HIGH {
            Self::Moderate
        } else if uvi < UV_VERY_HIGH {
            Self::High
        } else if uvi < UV_EXTREME {
            Self::VeryHigh
        } else {
            Self::Extreme
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::Extreme => "Extreme",
        }
    }

    /// Display color.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Low => SUCCESS,
            Self::Moderate => SUN,
            Self::High => ACCENT,
            Self::VeryHigh => RED,
            Self::Extreme => MAGENTA,
        }
    }
}
