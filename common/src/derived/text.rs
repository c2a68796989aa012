//! Display text helpers: weekday and month names, clock strings, labels.
//!
//! Every helper writes into a `heapless::String` sized for its worst case,
//! so none of them allocate.

use core::fmt::Write;

use heapless::String;
use micromath::F32;

use crate::local_time::LocalDateTime;

/// Three-letter weekday names, index 0 = Sunday.
pub const WEEKDAY_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Full weekday names, index 0 = Sunday.
pub const WEEKDAY_NAMES: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

/// Three-letter month names, index 0 = January.
pub const MONTH_NAMES: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Longest hour label ("12am").
pub const HOUR_LABEL_LEN: usize = 4;

/// Longest footer date ("Wednesday, 31st Sep").
pub const DATE_LINE_LEN: usize = 24;

/// English ordinal suffix for a day of month. 11, 12 and 13 are always "th".
pub const fn ordinal_suffix(day: u8) -> &'static str {
    if day >= 11 && day <= 13 {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Copy of `text` with its first character uppercased.
///
/// Nothing else is touched, an empty string stays empty, and applying it
/// twice gives the same result as applying it once.
pub fn capitalize_first<const N: usize>(text: &str) -> String<N> {
    let mut out: String<N> = String::new();
    let mut chars = text.chars();
    if let Some(first) = chars.next() {
        for upper in first.to_uppercase() {
            if out.push(upper).is_err() {
                return out;
            }
        }
    }
    for c in chars {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[inline]
const fn to_12_hour(hour: u8) -> (u8, &'static str) {
    let suffix = if hour < 12 { "am" } else { "pm" };
    let h = match hour {
        0 => 12,
        13.. => hour - 12,
        _ => hour,
    };
    (h, suffix)
}

/// 12-hour column label: 0 → "12am", 14 → "2pm".
pub fn hour_label(hour: u8) -> String<HOUR_LABEL_LEN> {
    let (h, suffix) = to_12_hour(hour);
    let mut out = String::new();
    let _ = write!(out, "{h}{suffix}");
    out
}

/// Header clock split around the colon so the colon can blink on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockParts {
    /// "2" in "2:05pm".
    pub hour: String<2>,
    /// "05pm" in "2:05pm".
    pub minutes: String<4>,
}

pub fn clock_parts(t: &LocalDateTime) -> ClockParts {
    let (h, suffix) = to_12_hour(t.hour);
    let mut hour = String::new();
    let mut minutes = String::new();
    let _ = write!(hour, "{h}");
    let _ = write!(minutes, "{:02}{suffix}", t.minute);
    ClockParts { hour, minutes }
}

/// Footer date: "Tuesday, 14th Oct".
pub fn date_line(t: &LocalDateTime) -> String<DATE_LINE_LEN> {
    let weekday = WEEKDAY_NAMES.get(t.weekday as usize).copied().unwrap_or("");
    let month = MONTH_NAMES.get(t.month as usize).copied().unwrap_or("");
    let mut out = String::new();
    let _ = write!(out, "{weekday}, {}{} {month}", t.day, ordinal_suffix(t.day));
    out
}

/// 24-hour "HH:MM", used for the last-updated stamp.
pub fn hhmm(t: &LocalDateTime) -> String<5> {
    let mut out = String::new();
    let _ = write!(out, "{:02}:{:02}", t.hour, t.minute);
    out
}

/// Temperature rounded to a whole degree for display.
#[inline]
pub fn display_temp(t: f32) -> i32 { F32(t).round().0 as i32 }

/// Visibility in kilometres with one decimal: 10000 → "10.0".
pub fn visibility_km(meters: i32) -> String<8> {
    let mut out = String::new();
    let _ = write!(out, "{:.1}", meters as f32 / 1000.0);
    out
}
