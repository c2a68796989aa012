//! Wall-clock breakdown of Unix timestamps in the configured time zone.
//!
//! The appliance is configured with a fixed UTC offset when its clock is
//! synchronized (Queensland, for example, is UTC+10 with no DST), so a
//! [`chrono::FixedOffset`] is all the zone handling needed here.

use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};

/// Local calendar fields for one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalDateTime {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Day of week, 0 = Sunday.
    pub weekday: u8,
    /// Day of month, 1-31.
    pub day: u8,
    /// Month, 0 = January.
    pub month: u8,
    /// Calendar year.
    pub year: i32,
}

/// Converts absolute timestamps into local wall-clock fields.
pub trait LocalTime {
    /// Break `unix_secs` down in the local zone; `None` if out of range.
    fn breakdown(
        &self,
        unix_secs: i64,
    ) -> Option<LocalDateTime>;
}

/// A time zone with a fixed offset from UTC.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedZone {
    offset: FixedOffset,
}

impl FixedZone {
    /// Zone `offset_secs` east of UTC. Returns `None` outside ±24 h.
    pub fn east(offset_secs: i32) -> Option<Self> { FixedOffset::east_opt(offset_secs).map(|offset| Self { offset }) }

    /// UTC itself.
    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    /// Offset from UTC in seconds.
    pub fn offset_secs(&self) -> i32 { self.offset.local_minus_utc() }
}

impl LocalTime for FixedZone {
    fn breakdown(
        &self,
        unix_secs: i64,
    ) -> Option<LocalDateTime> {
        let utc = DateTime::from_timestamp(unix_secs, 0)?;
        let local = utc.with_timezone(&self.offset);
        Some(LocalDateTime {
            hour: local.hour() as u8,
            minute: local.minute() as u8,
            weekday: local.weekday().num_days_from_sunday() as u8,
            day: local.day() as u8,
            month: local.month0() as u8,
            year: local.year(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-01-01T00:00:00Z was a Monday
    const NEW_YEAR_2024: i64 = 1_704_067_200;

    #[test]
    fn test_utc_breakdown() {
        let t = FixedZone::utc().breakdown(NEW_YEAR_2024).unwrap();
        assert_eq!(t.hour, 0);
        assert_eq!(t.minute, 0);
        assert_eq!(t.weekday, 1);
        assert_eq!(t.day, 1);
        assert_eq!(t.month, 0);
        assert_eq!(t.year, 2024);
    }

    #[test]
    fn test_offset_shifts_hour() {
        let brisbane = FixedZone::east(10 * 3600).unwrap();
        let t = brisbane.breakdown(NEW_YEAR_2024 + 16 * 3600).unwrap();
        // 16:00 UTC is 02:00 the next day in UTC+10
        assert_eq!(t.hour, 2);
        assert_eq!(t.day, 2);
        assert_eq!(t.weekday, 2);
    }

    #[test]
    fn test_negative_offset_rolls_back_a_day() {
        let zone = FixedZone::east(-5 * 3600).unwrap();
        let t = zone.breakdown(NEW_YEAR_2024).unwrap();
        assert_eq!(t.hour, 19);
        assert_eq!(t.day, 31);
        assert_eq!(t.month, 11);
        assert_eq!(t.year, 2023);
        assert_eq!(t.weekday, 0);
    }

    #[test]
    fn test_out_of_range_offset_rejected() {
        assert!(FixedZone::east(25 * 3600).is_none());
        assert_eq!(FixedZone::east(3600).unwrap().offset_secs(), 3600);
    }
}
