//! Daylight tests and sun-event selection.

use crate::config::CLOCK_SYNC_MIN_UNIX;
use crate::local_time::LocalTime;

/// Whether `now` falls between sunrise (inclusive) and sunset (exclusive).
///
/// A clock that has not been synchronized yet (anything before
/// [`CLOCK_SYNC_MIN_UNIX`]) counts as daytime.
pub fn is_daytime(
    now: i64,
    sunrise: i64,
    sunset: i64,
) -> bool {
    if now < CLOCK_SYNC_MIN_UNIX {
        return true;
    }
    sunrise <= now && now < sunset
}

/// Whether hour-of-day `hour` is a daylight column on the hourly screens.
///
/// Compares whole local hours, inclusive at both ends: with sunrise at 05:40
/// and sunset at 18:10, hours 5 through 18 are daylight.
pub fn hour_is_daylight(
    hour: u8,
    sunrise: i64,
    sunset: i64,
    zone: &impl LocalTime,
) -> bool {
    match (zone.breakdown(sunrise), zone.breakdown(sunset)) {
        (Some(rise), Some(set)) => rise.hour <= hour && hour <= set.hour,
        _ => true,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SunEventKind {
    Sunrise,
    Sunset,
}

impl SunEventKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sunrise => "Sunrise",
            Self::Sunset => "Sunset",
        }
    }
}

/// The sun event closest to "now".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SunEvent {
    pub kind: SunEventKind,
    /// Unix seconds of the event.
    pub at: i64,
}

/// Pick whichever of sunrise and sunset is nearer to `now` in absolute time.
///
/// The winner may already be in the past (an hour after sunset, sunset is
/// still nearer than tomorrow's sunrise). Ties go to sunrise.
pub fn nearest_sun_event(
    now: i64,
    sunrise: i64,
    sunset: i64,
) -> SunEvent {
    let to_rise = now.abs_diff(sunrise);
    let to_set = now.abs_diff(sunset);
    if to_rise <= to_set {
        SunEvent {
            kind: SunEventKind::Sunrise,
            at: sunrise,
        }
    } else {
        SunEvent {
            kind: SunEventKind::Sunset,
            at: sunset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_time::FixedZone;

    // 2024-01-01 00:00 UTC
    const DAY: i64 = 1_704_067_200;
    const SUNRISE: i64 = DAY + 5 * 3600 + 40 * 60;
    const SUNSET: i64 = DAY + 18 * 3600 + 10 * 60;

    #[test]
    fn test_daytime_window_half_open() {
        assert!(!is_daytime(SUNRISE - 1, SUNRISE, SUNSET));
        assert!(is_daytime(SUNRISE, SUNRISE, SUNSET));
        assert!(is_daytime(SUNSET - 1, SUNRISE, SUNSET));
        assert!(!is_daytime(SUNSET, SUNRISE, SUNSET));
    }

    #[test]
    fn test_unsynced_clock_defaults_to_day() {
        // A few seconds after boot with no time sync
        assert!(is_daytime(42, SUNRISE, SUNSET));
        assert!(is_daytime(CLOCK_SYNC_MIN_UNIX - 1, SUNRISE, SUNSET));
    }

    #[test]
    fn test_hour_is_daylight_inclusive() {
        let utc = FixedZone::utc();
        assert!(!hour_is_daylight(4, SUNRISE, SUNSET, &utc));
        assert!(hour_is_daylight(5, SUNRISE, SUNSET, &utc));
        assert!(hour_is_daylight(18, SUNRISE, SUNSET, &utc));
        assert!(!hour_is_daylight(19, SUNRISE, SUNSET, &utc));
    }

    #[test]
    fn test_nearest_event_can_be_in_the_past() {
        let an_hour_after_sunset = SUNSET + 3600;
        let ev = nearest_sun_event(an_hour_after_sunset, SUNRISE, SUNSET);
        assert_eq!(ev.kind, SunEventKind::Sunset);
        assert_eq!(ev.at, SUNSET);
        assert_eq!(ev.kind.label(), "Sunset");
    }

    #[test]
    fn test_nearest_event_morning() {
        let ev = nearest_sun_event(SUNRISE - 600, SUNRISE, SUNSET);
        assert_eq!(ev.kind, SunEventKind::Sunrise);
    }

    #[test]
    fn test_nearest_event_tie_prefers_sunrise() {
        let midpoint = (SUNRISE + SUNSET) / 2;
        assert_eq!(nearest_sun_event(midpoint, SUNRISE, SUNSET).kind, SunEventKind::Sunrise);
    }
}
