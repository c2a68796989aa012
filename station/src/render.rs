//! Log-backed rendering collaborator.
//!
//! Every draw turns into a block of text lines, one per on-screen element.
//! Palette colors are printed as their raw Rgb565 storage value (`#FD20`) so
//! a log reader can check the same color decisions a panel driver would
//! make from the same snapshot.
//!
//! | call            | level   | output                          |
//! |-----------------|---------|---------------------------------|
//! | `draw_screen`   | `info`  | title, indicator, header, body  |
//! | `draw_header`   | `debug` | location and blinking clock     |
//! | `set_backlight` | `info`  | backlight state                 |

use std::fmt::Write;

use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};
use tracing::{debug, info};
use weather_reporter_common::colors::{ACCENT, DAYTIME, MOON, RAIN, SUBTLE, SUCCESS, SUN, TEXT};
use weather_reporter_common::derived::{
    UvLevel,
    WeatherIcon,
    clock_parts,
    date_line,
    display_temp,
    hhmm,
    hour_is_daylight,
    hour_label,
    is_daytime,
    nearest_sun_event,
    rain_chance_color,
    temp_color,
    visibility_km,
};
use weather_reporter_common::local_time::LocalTime;
use weather_reporter_common::screens::{Readiness, daily_cells, day_label};
use weather_reporter_common::traits::{RenderContext, Renderer};
use weather_reporter_common::{Cycle, Screen};

use crate::config::StationConfig;

/// Log target for every line this module emits.
pub const DISPLAY_TARGET: &str = "display";

// =============================================================================
// Static Station Details
// =============================================================================

/// The parts of the configuration shown on the settings screen.
#[derive(Clone, Debug, PartialEq)]
pub struct StationInfo {
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub update_interval_secs: u64,
}

impl StationInfo {
    pub fn from_config(config: &StationConfig) -> Self {
        Self {
            location_name: config.location_name.clone(),
            latitude: config.latitude,
            longitude: config.longitude,
            update_interval_secs: config.update_interval_secs,
        }
    }

    fn update_label(&self) -> String {
        let secs = self.update_interval_secs;
        match secs {
            60 => "Every minute".to_string(),
            s if s % 60 == 0 => format!("Every {} minutes", s / 60),
            s => format!("Every {s} seconds"),
        }
    }
}

// =============================================================================
// Line Builders
// =============================================================================

fn hex(color: Rgb565) -> String { format!("#{:04X}", color.into_storage()) }

/// Position dots for the active cycle: filled for the current screen.
pub fn indicator(screen: Screen) -> String {
    let current = screen.index_in_cycle();
    (0..screen.cycle().dot_count())
        .map(|i| if i == current { '●' } else { '○' })
        .collect()
}

/// Location on the left, clock on the right with the colon blanked on the
/// off phase. The clock is drawn in the daytime color between sunrise and
/// sunset. Without a local time only the location is shown.
pub fn header_line(
    ctx: &RenderContext<'_>,
    location: &str,
) -> String {
    let Some(local) = ctx.local else {
        return location.to_string();
    };
    let parts = clock_parts(&local);
    let colon = if ctx.colon_visible { ':' } else { ' ' };
    let current = &ctx.snapshot.current;
    let color = if is_daytime(ctx.unix_time, current.sunrise, current.sunset) { DAYTIME } else { SUBTLE };
    format!("{location} | {}{colon}{} {}", parts.hour, parts.minutes, hex(color))
}

fn hourly_columns(
    ctx: &RenderContext<'_>,
    zone: &impl LocalTime,
    lines: &mut Vec<String>,
) {
    let snapshot = ctx.snapshot;
    let current = &snapshot.current;
    for point in &snapshot.hourly[ctx.screen.hourly_columns(snapshot.hourly_count())] {
        let daylight = hour_is_daylight(point.hour, current.sunrise, current.sunset, zone);
        lines.push(format!(
            "{:>4} {:?} {}° {}",
            hour_label(point.hour).as_str(),
            WeatherIcon::from_code(point.weather_code, !daylight),
            display_temp(point.temperature),
            hex(temp_color(point.temperature)),
        ));
    }
}

fn hourly_now(
    ctx: &RenderContext<'_>,
    zone: &impl LocalTime,
    lines: &mut Vec<String>,
) {
    let snapshot = ctx.snapshot;
    let current = &snapshot.current;
    let night = !is_daytime(ctx.unix_time, current.sunrise, current.sunset);
    lines.push(format!(
        "Now {:?} {}° {} | {} | Feels {}°",
        WeatherIcon::from_code(current.weather_code, night),
        display_temp(current.temperature),
        hex(temp_color(current.temperature)),
        current.condition,
        display_temp(current.apparent_temperature),
    ));
    hourly_columns(ctx, zone, lines);

    if snapshot.minutely.present {
        let total: f32 = snapshot.minutely.values.iter().sum();
        let wet = snapshot.minutely.values.iter().filter(|mm| **mm > 0.0).count();
        lines.push(format!("Next hour {total:.1} mm ({wet} wet minutes)"));
    }
}

fn hourly_extended(
    ctx: &RenderContext<'_>,
    zone: &impl LocalTime,
    lines: &mut Vec<String>,
) {
    if let Some(today) = ctx.snapshot.today() {
        lines.push(format!("Rain Today {}% {}", today.pop, hex(rain_chance_color(today.pop))));
    }
    hourly_columns(ctx, zone, lines);
}

fn time_of(
    zone: &impl LocalTime,
    unix_secs: i64,
) -> String {
    // Zero means the provider left the event out (no moonrise today)
    if unix_secs == 0 {
        return "--:--".to_string();
    }
    zone.breakdown(unix_secs)
        .map_or_else(|| "--:--".to_string(), |t| hhmm(&t).as_str().to_string())
}

fn conditions(
    ctx: &RenderContext<'_>,
    zone: &impl LocalTime,
    lines: &mut Vec<String>,
) {
    let snapshot = ctx.snapshot;
    let c = &snapshot.current;
    let uv = UvLevel::from_index(c.uvi);

    lines.push(format!("UV Index {:.1} {} {}", c.uvi, uv.label(), hex(uv.color())));
    lines.push(format!("Visibility {} km", visibility_km(c.visibility)));
    lines.push(format!("Pressure {} hPa", c.pressure));
    lines.push(format!("Dew Point {}° {}", display_temp(c.dew_point), hex(temp_color(c.dew_point))));
    lines.push(format!("Cloud Cover {}%", c.clouds));
    lines.push(format!("Humidity {}%", c.humidity));
    lines.push(format!("Wind {:.1} m/s {} ({}°)", c.wind_speed, c.wind_dir, c.wind_deg));

    let event = nearest_sun_event(ctx.unix_time, c.sunrise, c.sunset);
    lines.push(format!("{} {} {}", event.kind.label(), time_of(zone, event.at), hex(SUN)));

    let moon = &snapshot.moon;
    lines.push(format!(
        "Moon {:.2} rise {} set {} {}",
        moon.phase,
        time_of(zone, moon.moonrise),
        time_of(zone, moon.moonset),
        hex(MOON),
    ));
}

fn daily(
    ctx: &RenderContext<'_>,
    lines: &mut Vec<String>,
) {
    let snapshot = ctx.snapshot;
    let cells = daily_cells(snapshot.daily_count());
    for (i, day) in snapshot.daily.iter().take(cells).enumerate() {
        lines.push(format!(
            "{:<5} {:?} {} / {} {} | Rain {}% {}",
            day_label(i, day.day_name),
            WeatherIcon::from_code(day.weather_code, false),
            display_temp(day.temp_max),
            display_temp(day.temp_min),
            hex(temp_color(day.temp_max)),
            day.pop,
            hex(rain_chance_color(day.pop)),
        ));
    }
    if let Some(today) = snapshot.today()
        && !today.summary.is_empty()
    {
        lines.push(today.summary.as_str().to_string());
    }
}

fn settings(
    ctx: &RenderContext<'_>,
    station: &StationInfo,
    lines: &mut Vec<String>,
) {
    let updated = if ctx.last_updated.is_empty() { "never" } else { ctx.last_updated };
    lines.push(format!("Location: {}", station.location_name));
    lines.push(format!("Lat/Lon: {}, {}", station.latitude, station.longitude));
    lines.push(format!("Update: {}", station.update_label()));
    lines.push(format!("Autoplay: {}", if ctx.auto_advance { "on" } else { "off" }));
    lines.push(format!("Updated: {updated}"));
}

fn about(lines: &mut Vec<String>) {
    lines.push(format!("Weather Reporter v{}", env!("CARGO_PKG_VERSION")));
    lines.push("Powered by OpenWeatherMap".to_string());
}

const DEMO_CODES: [(i32, bool); 11] = [
    (800, false),
    (800, true),
    (801, false),
    (801, true),
    (802, false),
    (804, false),
    (500, false),
    (211, false),
    (601, false),
    (741, false),
    (301, false),
];

fn demo_icons(lines: &mut Vec<String>) {
    let mut row = String::new();
    for (code, night) in DEMO_CODES {
        let _ = write!(row, "{code}{} {:?}  ", if night { "n" } else { "" }, WeatherIcon::from_code(code, night));
    }
    lines.push(row.trim_end().to_string());
}

fn demo_shapes(lines: &mut Vec<String>) {
    for (name, color) in [
        ("text", TEXT),
        ("subtle", SUBTLE),
        ("accent", ACCENT),
        ("success", SUCCESS),
        ("sun", SUN),
        ("rain", RAIN),
        ("moon", MOON),
    ] {
        lines.push(format!("{name:<8} {}", hex(color)));
    }
}

fn demo_fonts(lines: &mut Vec<String>) {
    let mut row = String::new();
    for t in [10.0_f32, 18.0, 25.0, 30.0, 35.0, 40.0] {
        let _ = write!(row, "{}° {}  ", display_temp(t), hex(temp_color(t)));
    }
    lines.push(row.trim_end().to_string());

    let labels: Vec<_> = [0u8, 6, 12, 18].iter().map(|h| hour_label(*h).as_str().to_string()).collect();
    lines.push(labels.join(" "));
}

/// Describe a full redraw of `ctx.screen`.
///
/// Screens whose data is missing render only their no-data message, the
/// way the panel shows an error card.
pub fn describe_screen(
    ctx: &RenderContext<'_>,
    zone: &impl LocalTime,
    station: &StationInfo,
) -> Vec<String> {
    let screen = ctx.screen;
    let mut lines = vec![format!("[{}] {}", screen.title(), indicator(screen))];

    if let Readiness::NoData(message) = screen.readiness(ctx.snapshot) {
        lines.push(message.to_string());
        return lines;
    }

    let weather = screen.cycle() == Cycle::Weather;
    if weather {
        lines.push(header_line(ctx, &station.location_name));
    }

    match screen {
        Screen::HourlyNow => hourly_now(ctx, zone, &mut lines),
        Screen::HourlyExtended => hourly_extended(ctx, zone, &mut lines),
        Screen::Conditions => conditions(ctx, zone, &mut lines),
        Screen::Daily => daily(ctx, &mut lines),
        Screen::Settings => settings(ctx, station, &mut lines),
        Screen::About => about(&mut lines),
        Screen::DemoIcons => demo_icons(&mut lines),
        Screen::DemoShapes => demo_shapes(&mut lines),
        Screen::DemoFonts => demo_fonts(&mut lines),
    }

    if weather && let Some(local) = ctx.local {
        lines.push(date_line(&local).as_str().to_string());
    }
    lines
}

// =============================================================================
// Renderer
// =============================================================================

/// [`Renderer`] that writes each frame to the log.
pub struct LogRenderer<Z> {
    zone: Z,
    station: StationInfo,
    frames: u64,
}

impl<Z: LocalTime> LogRenderer<Z> {
    pub fn new(
        zone: Z,
        station: StationInfo,
    ) -> Self {
        Self {
            zone,
            station,
            frames: 0,
        }
    }

    /// Full redraws so far.
    pub fn frames(&self) -> u64 { self.frames }
}

impl<Z: LocalTime> Renderer for LogRenderer<Z> {
    fn draw_screen(
        &mut self,
        ctx: &RenderContext<'_>,
    ) {
        self.frames += 1;
        for line in describe_screen(ctx, &self.zone, &self.station) {
            info!(target: DISPLAY_TARGET, "{line}");
        }
    }

    fn draw_header(
        &mut self,
        ctx: &RenderContext<'_>,
    ) {
        debug!(target: DISPLAY_TARGET, "{}", header_line(ctx, &self.station.location_name));
    }

    fn set_backlight(
        &mut self,
        on: bool,
    ) {
        info!(target: DISPLAY_TARGET, "backlight {}", if on { "on" } else { "off" });
    }
}
