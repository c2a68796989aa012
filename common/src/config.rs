//! Timing configuration for the control loop.
//!
//! All values are milliseconds on the monotonic loop clock unless noted.
//! The station binary may override the refresh, autoplay and pacing periods
//! from its config file; the input timings are fixed.

// =============================================================================
// Input Timing
// =============================================================================

/// Minimum spacing between two honored Left/Right edges.
/// Edges arriving inside the window are dropped, not queued.
pub const DEBOUNCE_DELAY_MS: u64 = 200;

/// Select hold duration at which a press becomes a long press.
pub const LONG_PRESS_MS: u64 = 800;

// =============================================================================
// Loop Timing
// =============================================================================

/// Autoplay period between screens when auto-advance is on.
pub const PAGE_SWITCH_INTERVAL_MS: u64 = 3_000;

/// Header clock colon blink period.
pub const COLON_FLASH_INTERVAL_MS: u64 = 500;

/// Weather refresh period (5 minutes).
pub const UPDATE_INTERVAL_MS: u64 = 300_000;

/// Pacing delay at the end of every loop iteration.
pub const LOOP_DELAY_MS: u64 = 50;

// =============================================================================
// Clock Sanity
// =============================================================================

/// Unix timestamps below this value (Sep 2001) mean the wall clock has not
/// been synchronized yet.
pub const CLOCK_SYNC_MIN_UNIX: i64 = 1_000_000_000;

const _: () = assert!(DEBOUNCE_DELAY_MS < LONG_PRESS_MS);
const _: () = assert!(COLON_FLASH_INTERVAL_MS < PAGE_SWITCH_INTERVAL_MS);

/// Loop periods that the station may override at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopTiming {
    /// Weather refresh period.
    pub update_interval_ms: u64,
    /// Autoplay period.
    pub page_switch_interval_ms: u64,
    /// Colon blink period.
    pub colon_flash_interval_ms: u64,
}

impl LoopTiming {
    /// Timing used by the appliance when nothing is configured.
    pub const fn new() -> Self {
        Self {
            update_interval_ms: UPDATE_INTERVAL_MS,
            page_switch_interval_ms: PAGE_SWITCH_INTERVAL_MS,
            colon_flash_interval_ms: COLON_FLASH_INTERVAL_MS,
        }
    }
}

impl Default for LoopTiming {
    fn default() -> Self { Self::new() }
}
