//! Derived-value functions: pure display attributes computed from the
//! snapshot at render time.
//!
//! Nothing here is stored in the model. Colors, labels and sun events are
//! recomputed by whichever screen needs them, so they can never drift out
//! of sync with the data they describe.

mod color;
mod compass;
mod icons;
mod sun;
mod text;

pub use color::{UvLevel, rain_chance_color, temp_color};
pub use compass::{COMPASS_POINTS, compass};
pub use icons::WeatherIcon;
pub use sun::{SunEvent, SunEventKind, hour_is_daylight, is_daytime, nearest_sun_event};
pub use text::{
    ClockParts,
    HOUR_LABEL_LEN,
    MONTH_NAMES,
    WEEKDAY_NAMES,
    WEEKDAY_SHORT,
    capitalize_first,
    clock_parts,
    date_line,
    display_temp,
    hour_label,
    hhmm,
    ordinal_suffix,
    visibility_km,
};
