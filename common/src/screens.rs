//! Screen identities and the two navigation cycles.
//!
//! # Cycles
//!
//! - [`Cycle::Weather`]: Hourly-Now → Hourly-Extended → Conditions → Daily
//! - [`Cycle::Settings`]: Settings → About → Icons demo → Shapes demo → Fonts demo
//!
//! Manual navigation wraps inside the active cycle. Autoplay walks a single
//! nine-screen loop through both cycles in declaration order.

use core::ops::Range;

use crate::snapshot::WeatherSnapshot;
use crate::thresholds::HOURLY_EXTENDED_MIN_POINTS;

/// Columns on an hourly screen.
pub const HOURLY_COLUMNS: usize = 7;

/// Day cells on the daily screen.
pub const DAILY_CELLS: usize = 4;

/// Which set of screens Left/Right moves through.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Cycle {
    #[default]
    Weather,
    Settings,
}

const WEATHER_SCREENS: [Screen; 4] = [Screen::HourlyNow, Screen::HourlyExtended, Screen::Conditions, Screen::Daily];

const SETTINGS_SCREENS: [Screen; 5] = [
    Screen::Settings,
    Screen::About,
    Screen::DemoIcons,
    Screen::DemoShapes,
    Screen::DemoFonts,
];

impl Cycle {
    /// Screens of this cycle in forward order.
    pub const fn screens(self) -> &'static [Screen] {
        match self {
            Self::Weather => &WEATHER_SCREENS,
            Self::Settings => &SETTINGS_SCREENS,
        }
    }

    /// Screen shown on entering the cycle.
    pub const fn first(self) -> Screen { self.screens()[0] }

    /// Number of indicator dots.
    pub const fn dot_count(self) -> usize { self.screens().len() }

    pub const fn from_settings_mode(settings_mode: bool) -> Self { if settings_mode { Self::Settings } else { Self::Weather } }
}

/// All screens.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Screen {
    /// Current temperature plus the next seven hours.
    #[default]
    HourlyNow,
    /// Hours eight to fourteen.
    HourlyExtended,
    /// UV, visibility, pressure, dew point, clouds, sun and moon.
    Conditions,
    /// Four-day outlook.
    Daily,
    Settings,
    About,
    DemoIcons,
    DemoShapes,
    DemoFonts,
}

/// Whether a screen can draw from the current snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Readiness {
    Ready,
    /// Draw this message instead of the screen body.
    NoData(&'static str),
}

impl Screen {
    /// The cycle this screen belongs to.
    pub const fn cycle(self) -> Cycle {
        match self {
            Self::HourlyNow | Self::HourlyExtended | Self::Conditions | Self::Daily => Cycle::Weather,
            Self::Settings | Self::About | Self::DemoIcons | Self::DemoShapes | Self::DemoFonts => Cycle::Settings,
        }
    }

    /// Position within its own cycle, for the indicator dots.
    pub fn index_in_cycle(self) -> usize { self.cycle().screens().iter().position(|s| *s == self).unwrap_or(0) }

    /// Next screen in `cycle`, wrapping. A screen outside `cycle` lands on
    /// the cycle's first screen.
    pub fn next_in(
        self,
        cycle: Cycle,
    ) -> Self {
        let screens = cycle.screens();
        match screens.iter().position(|s| *s == self) {
            Some(i) => screens[(i + 1) % screens.len()],
            None => cycle.first(),
        }
    }

    /// Previous screen in `cycle`, wrapping. A screen outside `cycle` lands
    /// on the cycle's first screen.
    pub fn prev_in(
        self,
        cycle: Cycle,
    ) -> Self {
        let screens = cycle.screens();
        match screens.iter().position(|s| *s == self) {
            Some(i) => screens[(i + screens.len() - 1) % screens.len()],
            None => cycle.first(),
        }
    }

    /// Next screen of the autoplay loop, crossing cycle boundaries.
    pub const fn autoplay_next(self) -> Self {
        match self {
            Self::HourlyNow => Self::HourlyExtended,
            Self::HourlyExtended => Self::Conditions,
            Self::Conditions => Self::Daily,
            Self::Daily => Self::Settings,
            Self::Settings => Self::About,
            Self::About => Self::DemoIcons,
            Self::DemoIcons => Self::DemoShapes,
            Self::DemoShapes => Self::DemoFonts,
            Self::DemoFonts => Self::HourlyNow,
        }
    }

    /// Screens with the location/clock header, redrawn on each colon blink.
    pub const fn shows_header(self) -> bool { matches!(self, Self::HourlyNow | Self::Conditions | Self::Daily) }

    pub const fn title(self) -> &'static str {
        match self {
            Self::HourlyNow => "Hourly",
            Self::HourlyExtended => "Hourly (8-14h)",
            Self::Conditions => "Conditions",
            Self::Daily => "Daily",
            Self::Settings => "Settings",
            Self::About => "About",
            Self::DemoIcons => "Weather Icons",
            Self::DemoShapes => "Shapes",
            Self::DemoFonts => "Fonts",
        }
    }

    /// Check the snapshot holds what this screen needs.
    pub fn readiness(
        self,
        snapshot: &WeatherSnapshot,
    ) -> Readiness {
        let valid = snapshot.data_valid;
        match self {
            Self::HourlyNow if !valid || snapshot.hourly_count() == 0 => Readiness::NoData("No Hourly Data!"),
            Self::HourlyExtended if !valid || snapshot.hourly_count() < HOURLY_EXTENDED_MIN_POINTS => {
                Readiness::NoData("No Hourly Data!")
            }
            Self::Conditions if !valid => Readiness::NoData("No Data!"),
            Self::Daily if !valid || snapshot.daily_count() == 0 => Readiness::NoData("No Daily Data!"),
            _ => Readiness::Ready,
        }
    }

    /// Hourly entries drawn as columns. Entry 0 is "now" and is shown
    /// large on Hourly-Now, so columns start at 1; Hourly-Extended starts
    /// at 8. Empty for every other screen. The range always lies within
    /// `0..hourly_count`.
    pub fn hourly_columns(
        self,
        hourly_count: usize,
    ) -> Range<usize> {
        let start = match self {
            Self::HourlyNow => 1,
            Self::HourlyExtended => 8,
            _ => return 0..0,
        }
        .min(hourly_count);
        let columns = hourly_count.saturating_sub(start).min(HOURLY_COLUMNS);
        start..start + columns
    }
}

/// Number of day cells drawn on the daily screen.
#[inline]
pub fn daily_cells(daily_count: usize) -> usize { daily_count.min(DAILY_CELLS) }

/// Label of a day cell: "Today" for the first, otherwise the weekday.
#[inline]
pub fn day_label(
    index: usize,
    day_name: &'static str,
) -> &'static str {
    if index == 0 { "Today" } else { day_name }
}
