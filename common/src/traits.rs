//! Collaborator seams of the control loop.
//!
//! The core never touches hardware or the network directly. A platform
//! binary supplies one implementation of each trait and hands them to the
//! [`Controller`](crate::controller::Controller).

use alloc::string::String;
use core::fmt;

use crate::input::ButtonSample;
use crate::local_time::LocalDateTime;
use crate::screens::Screen;
use crate::snapshot::WeatherSnapshot;

// =============================================================================
// Input and Time
// =============================================================================

/// Source of raw button levels.
pub trait InputSource {
    /// Sample all three buttons now.
    fn sample(&mut self) -> ButtonSample;
}

/// Monotonic loop clock plus the (possibly unsynchronized) wall clock.
pub trait Clock {
    /// Milliseconds since an arbitrary start point. Never goes backwards.
    fn now_ms(&self) -> u64;

    /// Seconds since the Unix epoch. Small values mean "not synced yet".
    fn unix_time(&self) -> i64;
}

// =============================================================================
// Weather Provider
// =============================================================================

/// Why a fetch produced no payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// Non-success HTTP status.
    Status(u16),
    /// No response within the configured timeout.
    Timeout,
    /// No connectivity or the connection dropped.
    Connection,
    /// Response body could not be read.
    Body,
}

impl fmt::Display for FetchError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "HTTP status {code}"),
            Self::Timeout => f.write_str("request timed out"),
            Self::Connection => f.write_str("connection failed"),
            Self::Body => f.write_str("failed to read response body"),
        }
    }
}

impl core::error::Error for FetchError {}

/// Blocking forecast fetch. Must return within a bounded timeout.
pub trait WeatherSource {
    /// Fetch the raw JSON document.
    fn fetch(&mut self) -> Result<String, FetchError>;
}

// =============================================================================
// Rendering
// =============================================================================

/// Everything a renderer may read for one draw.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    pub screen: Screen,
    pub settings_mode: bool,
    pub auto_advance: bool,
    pub snapshot: &'a WeatherSnapshot,
    /// Wall clock at draw time, Unix seconds.
    pub unix_time: i64,
    /// `unix_time` in local time; `None` until the clock is synced.
    pub local: Option<LocalDateTime>,
    /// Blink phase of the header clock colon.
    pub colon_visible: bool,
    /// "HH:MM" of the last refresh attempt (empty before the first).
    pub last_updated: &'a str,
}

/// Drawing collaborator.
pub trait Renderer {
    /// Draw the full screen `ctx.screen`.
    fn draw_screen(
        &mut self,
        ctx: &RenderContext<'_>,
    );

    /// Redraw only the header (location and clock).
    fn draw_header(
        &mut self,
        ctx: &RenderContext<'_>,
    );

    /// Switch the backlight/panel on or off.
    fn set_backlight(
        &mut self,
        on: bool,
    );
}
