//! Centralized display thresholds.
//!
//! All thresholds are compile-time constants with ordering assertions, so a
//! misconfigured breakpoint fails the build instead of producing an odd
//! color band at runtime.

// =============================================================================
// Temperature Color Bands (°C)
// =============================================================================

/// At or below this temperature the color is pinned to cold blue.
pub const TEMP_COLD_MAX: f32 = 15.0;

/// Lower edge of the neutral (white) band.
pub const TEMP_NEUTRAL_MIN: f32 = 24.0;

/// Upper edge of the neutral (white) band.
pub const TEMP_NEUTRAL_MAX: f32 = 26.0;

/// At or above this temperature the color is pinned to the hot accent.
pub const TEMP_HOT_MIN: f32 = 40.0;

const _: () = assert!(TEMP_COLD_MAX < TEMP_NEUTRAL_MIN);
const _: () = assert!(TEMP_NEUTRAL_MIN < TEMP_NEUTRAL_MAX);
const _: () = assert!(TEMP_NEUTRAL_MAX < TEMP_HOT_MIN);

// =============================================================================
// UV Index Buckets (inclusive lower bounds)
// =============================================================================

/// "Moderate" starts here (below = "Low").
pub const UV_MODERATE: f32 = 3.0;

/// "High" starts here.
pub const UV_HIGH: f32 = 6.0;

/// "Very High" starts here.
pub const UV_VERY_HIGH: f32 = 8.0;

/// "Extreme" starts here.
pub const UV_EXTREME: f32 = 11.0;

const _: () = assert!(UV_MODERATE < UV_HIGH);
const _: () = assert!(UV_HIGH < UV_VERY_HIGH);
const _: () = assert!(UV_VERY_HIGH < UV_EXTREME);

// =============================================================================
// Forecast Emphasis
// =============================================================================

/// Today's rain chance above this percentage is drawn in rain blue.
pub const RAIN_CHANCE_EMPHASIS: u8 = 50;

/// Hourly-Extended needs at least this many hourly points (entries 8..=14).
pub const HOURLY_EXTENDED_MIN_POINTS: usize = 14;
