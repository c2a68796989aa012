//! Normalized weather model shared with every screen.
//!
//! There is exactly one [`WeatherSnapshot`] per process. It starts empty and
//! invalid, and the [`pipeline`](crate::pipeline) replaces it wholesale after
//! every successful fetch. Rendering code only ever sees `&WeatherSnapshot`.
//!
//! # Bounded Sequences
//!
//! Hourly and daily points live in `heapless::Vec`s whose capacity is the
//! display limit. The pipeline clamps provider arrays to that capacity, so
//! `len()` is the count of valid entries and nothing past it exists.

use heapless::{String, Vec};

// =============================================================================
// Capacities
// =============================================================================

/// Minutes of precipitation nowcast kept.
pub const MINUTELY_LEN: usize = 60;

/// Hourly points kept (the provider sends 48).
pub const HOURLY_CAPACITY: usize = 24;

/// Daily points kept.
pub const DAILY_CAPACITY: usize = 8;

/// Maximum bytes of the condition description ("Thunderstorm with heavy drizzle").
pub const CONDITION_LEN: usize = 48;

/// Maximum bytes of a daily summary sentence.
pub const SUMMARY_LEN: usize = 160;

// =============================================================================
// Model Types
// =============================================================================

/// Current conditions, copied from the provider in metric units.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentConditions {
    /// Air temperature, °C.
    pub temperature: f32,
    /// "Feels like" temperature, °C.
    pub apparent_temperature: f32,
    /// Relative humidity, %.
    pub humidity: i32,
    /// Wind speed, m/s.
    pub wind_speed: f32,
    /// Wind direction in degrees (meteorological, 0 = from north).
    pub wind_deg: i32,
    /// 16-point compass label derived from `wind_deg`.
    pub wind_dir: &'static str,
    /// Provider condition code (e.g. 800 = clear).
    pub weather_code: i32,
    /// Provider description with the first letter capitalized.
    pub condition: String<CONDITION_LEN>,
    /// UV index.
    pub uvi: f32,
    /// Visibility, meters.
    pub visibility: i32,
    /// Sea-level pressure, hPa.
    pub pressure: i32,
    /// Dew point, °C.
    pub dew_point: f32,
    /// Cloud cover, %.
    pub clouds: i32,
    /// Today's sunrise, Unix seconds.
    pub sunrise: i64,
    /// Today's sunset, Unix seconds.
    pub sunset: i64,
}

impl CurrentConditions {
    pub const fn new() -> Self {
        Self {
            temperature: 0.0,
            apparent_temperature: 0.0,
            humidity: 0,
            wind_speed: 0.0,
            wind_deg: 0,
            wind_dir: "N",
            weather_code: 0,
            condition: String::new(),
            uvi: 0.0,
            visibility: 0,
            pressure: 0,
            dew_point: 0.0,
            clouds: 0,
            sunrise: 0,
            sunset: 0,
        }
    }
}

impl Default for CurrentConditions {
    fn default() -> Self { Self::new() }
}

/// Next-hour precipitation nowcast.
#[derive(Clone, Debug, PartialEq)]
pub struct MinutelyPrecipitation {
    /// Precipitation per minute, mm. Entries the provider did not send are 0.
    pub values: [f32; MINUTELY_LEN],
    /// `false` when the provider omitted the array entirely. That means
    /// "unknown", not "dry".
    pub present: bool,
}

impl MinutelyPrecipitation {
    pub const fn new() -> Self {
        Self {
            values: [0.0; MINUTELY_LEN],
            present: false,
        }
    }
}

impl Default for MinutelyPrecipitation {
    fn default() -> Self { Self::new() }
}

/// One hourly forecast point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HourlyPoint {
    /// Temperature, °C.
    pub temperature: f32,
    /// Provider condition code.
    pub weather_code: i32,
    /// Local hour of day, 0-23.
    pub hour: u8,
}

/// One daily forecast point.
#[derive(Clone, Debug, PartialEq)]
pub struct DailyPoint {
    /// Overnight minimum, °C.
    pub temp_min: f32,
    /// Daytime maximum, °C.
    pub temp_max: f32,
    /// Provider condition code.
    pub weather_code: i32,
    /// Three-letter local weekday name ("Sun".."Sat").
    pub day_name: &'static str,
    /// Probability of precipitation, 0-100 %.
    pub pop: u8,
    /// Human-readable summary sentence (may be empty).
    pub summary: String<SUMMARY_LEN>,
}

/// Moon data, taken from the first daily entry only.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct MoonData {
    /// Moonrise, Unix seconds (0 when the moon does not rise that day).
    pub moonrise: i64,
    /// Moonset, Unix seconds (0 when the moon does not set that day).
    pub moonset: i64,
    /// Lunation fraction: 0 and 1 new moon, 0.5 full moon.
    pub phase: f32,
}

/// The complete normalized forecast.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub minutely: MinutelyPrecipitation,
    pub hourly: Vec<HourlyPoint, HOURLY_CAPACITY>,
    pub daily: Vec<DailyPoint, DAILY_CAPACITY>,
    pub moon: MoonData,
    /// When `false` every other field is stale and screens must show an
    /// error state instead of reading them.
    pub data_valid: bool,
}

impl WeatherSnapshot {
    /// The empty, invalid snapshot the process starts with.
    pub const fn new() -> Self {
        Self {
            current: CurrentConditions::new(),
            minutely: MinutelyPrecipitation::new(),
            hourly: Vec::new(),
            daily: Vec::new(),
            moon: MoonData {
                moonrise: 0,
                moonset: 0,
                phase: 0.0,
            },
            data_valid: false,
        }
    }

    /// Number of valid hourly points (≤ [`HOURLY_CAPACITY`]).
    #[inline]
    pub fn hourly_count(&self) -> usize { self.hourly.len() }

    /// Number of valid daily points (≤ [`DAILY_CAPACITY`]).
    #[inline]
    pub fn daily_count(&self) -> usize { self.daily.len() }

    /// Today's forecast, if the provider sent any daily data.
    #[inline]
    pub fn today(&self) -> Option<&DailyPoint> { self.daily.first() }
}

impl Default for WeatherSnapshot {
    fn default() -> Self { Self::new() }
}

/// Copy `text` into a bounded string, cutting at the last whole character
/// that fits.
pub fn bounded_text<const N: usize>(text: &str) -> String<N> {
    let mut out: String<N> = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snapshot_is_invalid_and_empty() {
        let s = WeatherSnapshot::new();
        assert!(!s.data_valid);
        assert_eq!(s.hourly_count(), 0);
        assert_eq!(s.daily_count(), 0);
        assert!(!s.minutely.present);
        assert!(s.today().is_none());
    }

    #[test]
    fn test_bounded_text_truncates_on_char_boundary() {
        let s: String<5> = bounded_text("héllo world");
        // 'é' is two bytes, so only "héll" fits in five
        assert_eq!(s.as_str(), "héll");
    }

    #[test]
    fn test_bounded_text_short_input() {
        let s: String<CONDITION_LEN> = bounded_text("clear sky");
        assert_eq!(s.as_str(), "clear sky");
    }
}
