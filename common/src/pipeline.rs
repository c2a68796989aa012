//! Forecast normalization: provider JSON → [`WeatherSnapshot`].
//!
//! The payload is the One Call 3.0 document in metric units. Parsing goes
//! through private `serde` mirror types first; the snapshot is only built
//! once the whole document has been accepted, so a malformed payload can
//! never leave a half-written snapshot behind.
//!
//! # Policies
//!
//! - `current` and `current.weather[0]` (code and description) are
//!   required. Everything else in `current` is copied verbatim.
//! - A forecast entry without a `weather` array gets condition code 0.
//! - `minutely`, `hourly` and `daily` are optional. Arrays longer than the
//!   snapshot capacity are clamped, shorter ones just give a smaller count.
//! - Hour-of-day and weekday come from each entry's `dt` in the local zone.
//! - `pop` is truncated, not rounded: 0.155 becomes 15 %.
//! - Moon data is read from `daily[0]` only; without daily data the previous
//!   snapshot's moon data carries over.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use log::{info, warn};
use serde::Deserialize;

use crate::derived::{WEEKDAY_SHORT, capitalize_first, compass};
use crate::local_time::LocalTime;
use crate::snapshot::{
    CONDITION_LEN,
    CurrentConditions,
    DAILY_CAPACITY,
    DailyPoint,
    HOURLY_CAPACITY,
    HourlyPoint,
    MINUTELY_LEN,
    MinutelyPrecipitation,
    MoonData,
    SUMMARY_LEN,
    WeatherSnapshot,
    bounded_text,
};
use crate::traits::FetchError;

// =============================================================================
// Errors
// =============================================================================

/// Why a refresh did not produce a new snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NormalizeError {
    /// The fetch itself failed.
    Transport(FetchError),
    /// The document is not valid JSON or is missing a required field.
    Parse,
}

impl fmt::Display for NormalizeError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "fetch failed: {e}"),
            Self::Parse => f.write_str("malformed forecast payload"),
        }
    }
}

impl core::error::Error for NormalizeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            Self::Parse => None,
        }
    }
}

impl From<FetchError> for NormalizeError {
    fn from(e: FetchError) -> Self { Self::Transport(e) }
}

// =============================================================================
// Provider Schema
// =============================================================================

#[derive(Deserialize)]
struct RawPayload {
    current: RawCurrent,
    minutely: Option<Vec<RawMinute>>,
    hourly: Option<Vec<RawHour>>,
    daily: Option<Vec<RawDay>>,
}

/// `current.weather[i]`: both fields required.
#[derive(Deserialize)]
struct RawCurrentCondition {
    id: f64,
    description: String,
}

/// `hourly[i].weather[j]` and `daily[i].weather[j]`: only the code is read.
#[derive(Deserialize)]
struct RawCondition {
    id: f64,
}

#[derive(Deserialize)]
struct RawCurrent {
    temp: f64,
    feels_like: f64,
    humidity: f64,
    wind_speed: f64,
    wind_deg: f64,
    weather: Vec<RawCurrentCondition>,
    sunrise: i64,
    sunset: i64,
    uvi: f64,
    visibility: f64,
    pressure: f64,
    dew_point: f64,
    clouds: f64,
}

#[derive(Deserialize)]
struct RawMinute {
    #[serde(default)]
    precipitation: f64,
}

#[derive(Deserialize)]
struct RawHour {
    dt: i64,
    temp: f64,
    #[serde(default)]
    weather: Vec<RawCondition>,
}

#[derive(Deserialize)]
struct RawTemp {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawDay {
    dt: i64,
    temp: RawTemp,
    #[serde(default)]
    weather: Vec<RawCondition>,
    #[serde(default)]
    pop: f64,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    moonrise: i64,
    #[serde(default)]
    moonset: i64,
    #[serde(default)]
    moon_phase: f64,
}

/// Condition code of a forecast entry; 0 (no icon) when the provider sent
/// no condition.
fn condition_code(weather: &[RawCondition]) -> i32 { weather.first().map_or(0, |w| w.id as i32) }

/// Probability of precipitation (0-1) as a truncated whole percent.
fn pop_percent(pop: f64) -> u8 { ((pop as f32 * 100.0) as i32).clamp(0, 100) as u8 }

// =============================================================================
// Normalization
// =============================================================================

/// Build a new snapshot from a raw payload.
///
/// `previous` is only consulted for the moon data carried over when the
/// payload has no daily entries.
pub fn normalize(
    payload: &str,
    zone: &impl LocalTime,
    previous: &WeatherSnapshot,
) -> Result<WeatherSnapshot, NormalizeError> {
    let raw: RawPayload = serde_json::from_str(payload).map_err(|e| {
        warn!("forecast payload rejected: {}", e);
        NormalizeError::Parse
    })?;

    let Some(condition) = raw.current.weather.first() else {
        warn!("forecast payload rejected: current.weather is empty");
        return Err(NormalizeError::Parse);
    };

    let c = &raw.current;
    let current = CurrentConditions {
        temperature: c.temp as f32,
        apparent_temperature: c.feels_like as f32,
        humidity: c.humidity as i32,
        wind_speed: c.wind_speed as f32,
        wind_deg: c.wind_deg as i32,
        wind_dir: compass(c.wind_deg as i32),
        weather_code: condition.id as i32,
        condition: capitalize_first::<CONDITION_LEN>(&condition.description),
        uvi: c.uvi as f32,
        visibility: c.visibility as i32,
        pressure: c.pressure as i32,
        dew_point: c.dew_point as f32,
        clouds: c.clouds as i32,
        sunrise: c.sunrise,
        sunset: c.sunset,
    };

    let mut minutely = MinutelyPrecipitation::new();
    if let Some(minutes) = &raw.minutely {
        minutely.present = true;
        for (slot, minute) in minutely.values.iter_mut().zip(minutes.iter().take(MINUTELY_LEN)) {
            *slot = minute.precipitation as f32;
        }
    }

    let mut snapshot = WeatherSnapshot {
        current,
        minutely,
        moon: previous.moon,
        data_valid: true,
        ..WeatherSnapshot::new()
    };

    if let Some(hours) = &raw.hourly {
        for hour in hours.iter().take(HOURLY_CAPACITY) {
            let point = HourlyPoint {
                temperature: hour.temp as f32,
                weather_code: condition_code(&hour.weather),
                hour: zone.breakdown(hour.dt).map_or(0, |t| t.hour),
            };
            if snapshot.hourly.push(point).is_err() {
                break;
            }
        }
    }

    if let Some(days) = &raw.daily {
        for day in days.iter().take(DAILY_CAPACITY) {
            let day_name = zone
                .breakdown(day.dt)
                .and_then(|t| WEEKDAY_SHORT.get(t.weekday as usize).copied())
                .unwrap_or("");
            let point = DailyPoint {
                temp_min: day.temp.min as f32,
                temp_max: day.temp.max as f32,
                weather_code: condition_code(&day.weather),
                day_name,
                pop: pop_percent(day.pop),
                summary: bounded_text::<SUMMARY_LEN>(&day.summary),
            };
            if snapshot.daily.push(point).is_err() {
                break;
            }
        }

        if let Some(today) = days.first() {
            snapshot.moon = MoonData {
                moonrise: today.moonrise,
                moonset: today.moonset,
                phase: today.moon_phase as f32,
            };
        }
    }

    Ok(snapshot)
}

/// Apply the outcome of one fetch to the live snapshot.
///
/// On success the snapshot is replaced wholesale. On any failure only
/// `data_valid` is cleared and every other field keeps its previous value.
pub fn apply_fetch(
    snapshot: &mut WeatherSnapshot,
    fetched: Result<String, FetchError>,
    zone: &impl LocalTime,
) -> Result<(), NormalizeError> {
    let result = fetched
        .map_err(NormalizeError::from)
        .and_then(|payload| normalize(&payload, zone, snapshot));

    match result {
        Ok(fresh) => {
            info!(
                "weather updated: {:.1}°C {}, {} hourly, {} daily",
                fresh.current.temperature,
                fresh.current.condition.as_str(),
                fresh.hourly_count(),
                fresh.daily_count()
            );
            *snapshot = fresh;
            Ok(())
        }
        Err(e) => {
            warn!("weather update failed: {}", e);
            snapshot.data_valid = false;
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use serde_json::{Value, json};

    use super::*;
    use crate::local_time::FixedZone;

    // 2024-01-01 00:00 UTC, a Monday
    const T0: i64 = 1_704_067_200;

    fn current() -> Value {
        json!({
            "temp": 22.5,
            "feels_like": 23.1,
            "humidity": 64,
            "wind_speed": 5.7,
            "wind_deg": 5,
            "weather": [{ "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }],
            "sunrise": T0 + 19 * 3600,
            "sunset": T0 + 32 * 3600,
            "uvi": 7.4,
            "visibility": 10000,
            "pressure": 1014,
            "dew_point": 15.3,
            "clouds": 0
        })
    }

    fn hours(n: usize) -> Value {
        Value::Array(
            (0..n)
                .map(|i| json!({ "dt": T0 + i as i64 * 3600, "temp": 20.0 + i as f64, "weather": [{ "id": 801 }] }))
                .collect(),
        )
    }

    fn days(n: usize) -> Value {
        Value::Array(
            (0..n)
                .map(|i| {
                    json!({
                        "dt": T0 + i as i64 * 86_400 + 12 * 3600,
                        "temp": { "min": 14.0, "max": 27.5, "day": 25.0 },
                        "weather": [{ "id": 500, "description": "light rain" }],
                        "pop": 0.155,
                        "summary": "Expect a day of partly cloudy with rain",
                        "moonrise": T0 + 1_000 + i as i64,
                        "moonset": T0 + 2_000 + i as i64,
                        "moon_phase": 0.25
                    })
                })
                .collect(),
        )
    }

    fn payload(
        hourly: Option<usize>,
        daily: Option<usize>,
    ) -> String {
        let mut doc = json!({ "lat": -26.8, "lon": 153.1, "current": current() });
        if let Some(n) = hourly {
            doc["hourly"] = hours(n);
        }
        if let Some(n) = daily {
            doc["daily"] = days(n);
        }
        doc.to_string()
    }

    #[test]
    fn test_current_conditions_end_to_end() {
        let s = normalize(&payload(None, None), &FixedZone::utc(), &WeatherSnapshot::new()).unwrap();
        assert!(s.data_valid);
        assert!((s.current.temperature - 22.5).abs() < f32::EPSILON);
        assert_eq!(s.current.wind_dir, "N");
        assert_eq!(s.current.condition.as_str(), "Clear sky");
        assert_eq!(s.current.weather_code, 800);
        assert_eq!(s.current.humidity, 64);
        assert_eq!(s.current.visibility, 10_000);
        assert_eq!(s.current.pressure, 1014);
        assert_eq!(s.current.sunrise, T0 + 19 * 3600);
    }

    #[test]
    fn test_optional_arrays_absent() {
        let s = normalize(&payload(None, None), &FixedZone::utc(), &WeatherSnapshot::new()).unwrap();
        assert!(!s.minutely.present);
        assert!(s.minutely.values.iter().all(|v| *v == 0.0));
        assert_eq!(s.hourly_count(), 0);
        assert_eq!(s.daily_count(), 0);
    }

    #[test]
    fn test_hourly_clamped_to_24() {
        let s = normalize(&payload(Some(40), None), &FixedZone::utc(), &WeatherSnapshot::new()).unwrap();
        assert_eq!(s.hourly_count(), 24);
        assert!((s.hourly[0].temperature - 20.0).abs() < f32::EPSILON);
        assert!((s.hourly[23].temperature - 43.0).abs() < f32::EPSILON);
        assert_eq!(s.hourly[23].weather_code, 801);
    }

    #[test]
    fn test_hourly_short_array() {
        let s = normalize(&payload(Some(5), None), &FixedZone::utc(), &WeatherSnapshot::new()).unwrap();
        assert_eq!(s.hourly_count(), 5);
    }

    #[test]
    fn test_hour_of_day_uses_local_zone() {
        let brisbane = FixedZone::east(10 * 3600).unwrap();
        let s = normalize(&payload(Some(3), None), &brisbane, &WeatherSnapshot::new()).unwrap();
        assert_eq!(s.hourly[0].hour, 10);
        assert_eq!(s.hourly[2].hour, 12);
    }

    #[test]
    fn test_daily_fields() {
        let s = normalize(&payload(None, Some(10)), &FixedZone::utc(), &WeatherSnapshot::new()).unwrap();
        assert_eq!(s.daily_count(), 8);
        let today = s.today().unwrap();
        assert_eq!(today.day_name, "Mon");
        assert_eq!(s.daily[1].day_name, "Tue");
        assert_eq!(s.daily[6].day_name, "Sun");
        // 0.155 * 100 truncates to 15
        assert_eq!(today.pop, 15);
        assert_eq!(today.weather_code, 500);
        assert_eq!(today.summary.as_str(), "Expect a day of partly cloudy with rain");
        assert_eq!(s.moon.moonrise, T0 + 1_000);
        assert_eq!(s.moon.moonset, T0 + 2_000);
    }

    #[test]
    fn test_pop_truncates() {
        assert_eq!(pop_percent(0.0), 0);
        assert_eq!(pop_percent(0.5), 50);
        assert_eq!(pop_percent(0.999), 99);
        assert_eq!(pop_percent(1.0), 100);
        assert_eq!(pop_percent(1.7), 100);
        assert_eq!(pop_percent(-0.2), 0);
    }

    #[test]
    fn test_empty_daily_keeps_previous_moon() {
        let mut previous = WeatherSnapshot::new();
        previous.moon = MoonData {
            moonrise: 111,
            moonset: 222,
            phase: 0.75,
        };
        let s = normalize(&payload(None, Some(0)), &FixedZone::utc(), &previous).unwrap();
        assert_eq!(s.daily_count(), 0);
        assert_eq!(s.moon, previous.moon);
    }

    #[test]
    fn test_minutely_partial_and_empty() {
        let mut doc: Value = serde_json::from_str(&payload(None, None)).unwrap();
        doc["minutely"] = json!([{ "dt": T0, "precipitation": 0.4 }, { "dt": T0 + 60, "precipitation": 1.2 }]);
        let s = normalize(&doc.to_string(), &FixedZone::utc(), &WeatherSnapshot::new()).unwrap();
        assert!(s.minutely.present);
        assert!((s.minutely.values[1] - 1.2).abs() < 1e-6);
        assert_eq!(s.minutely.values[2], 0.0);

        doc["minutely"] = json!([]);
        let s = normalize(&doc.to_string(), &FixedZone::utc(), &WeatherSnapshot::new()).unwrap();
        assert!(s.minutely.present);
    }

    #[test]
    fn test_missing_required_field_is_parse_error() {
        let mut doc: Value = serde_json::from_str(&payload(None, None)).unwrap();
        doc["current"].as_object_mut().unwrap().remove("uvi");
        let err = normalize(&doc.to_string(), &FixedZone::utc(), &WeatherSnapshot::new()).unwrap_err();
        assert_eq!(err, NormalizeError::Parse);
    }

    #[test]
    fn test_missing_current_description_is_parse_error() {
        let mut doc: Value = serde_json::from_str(&payload(None, None)).unwrap();
        doc["current"]["weather"] = json!([{ "id": 800 }]);
        let err = normalize(&doc.to_string(), &FixedZone::utc(), &WeatherSnapshot::new()).unwrap_err();
        assert_eq!(err, NormalizeError::Parse);
    }

    #[test]
    fn test_forecast_entry_without_weather_gets_code_zero() {
        let mut doc: Value = serde_json::from_str(&payload(Some(2), Some(2))).unwrap();
        doc["hourly"][1].as_object_mut().unwrap().remove("weather");
        doc["daily"][0].as_object_mut().unwrap().remove("weather");
        let s = normalize(&doc.to_string(), &FixedZone::utc(), &WeatherSnapshot::new()).unwrap();
        assert!(s.data_valid);
        assert_eq!(s.hourly_count(), 2);
        assert_eq!(s.hourly[0].weather_code, 801);
        assert_eq!(s.hourly[1].weather_code, 0);
        assert_eq!(s.daily[0].weather_code, 0);
        assert_eq!(s.daily[1].weather_code, 500);
    }

    #[test]
    fn test_empty_current_weather_is_parse_error() {
        let mut doc: Value = serde_json::from_str(&payload(None, None)).unwrap();
        doc["current"]["weather"] = json!([]);
        assert!(normalize(&doc.to_string(), &FixedZone::utc(), &WeatherSnapshot::new()).is_err());
    }

    #[test]
    fn test_apply_fetch_success_replaces_snapshot() {
        let mut live = WeatherSnapshot::new();
        apply_fetch(&mut live, Ok(payload(Some(48), Some(8))), &FixedZone::utc()).unwrap();
        assert!(live.data_valid);
        assert_eq!(live.hourly_count(), 24);
        assert_eq!(live.daily_count(), 8);
    }

    #[test]
    fn test_apply_fetch_failure_keeps_previous_data() {
        let zone = FixedZone::utc();
        let mut live = WeatherSnapshot::new();
        apply_fetch(&mut live, Ok(payload(Some(24), Some(8))), &zone).unwrap();
        let before = live.clone();

        let err = apply_fetch(&mut live, Err(FetchError::Status(500)), &zone).unwrap_err();
        assert_eq!(err, NormalizeError::Transport(FetchError::Status(500)));
        assert!(!live.data_valid);
        assert_eq!(WeatherSnapshot { data_valid: true, ..live.clone() }, before);

        let err = apply_fetch(&mut live, Ok("{\"current\": {\"temp\": 1".to_string()), &zone).unwrap_err();
        assert_eq!(err, NormalizeError::Parse);
        assert_eq!(WeatherSnapshot { data_valid: true, ..live }, before);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            NormalizeError::Transport(FetchError::Timeout).to_string(),
            "fetch failed: request timed out"
        );
        assert_eq!(NormalizeError::Parse.to_string(), "malformed forecast payload");
    }
}
