//! The cooperative control loop.
//!
//! [`Controller::step`] runs exactly one loop iteration:
//!
//! 1. sample the buttons and classify them into events
//! 2. feed the events to the navigation state machine
//! 3. autoplay tick
//! 4. redraw if anything visible changed
//! 5. weather refresh when due (blocking, bounded by the source's timeout)
//! 6. colon blink and header redraw
//!
//! The caller sleeps the pacing delay between steps. The first step always
//! performs the initial fetch.

use heapless::String;

use crate::config::{CLOCK_SYNC_MIN_UNIX, LoopTiming};
use crate::derived::hhmm;
use crate::input::{InputClassifier, InputEvent};
use crate::local_time::{LocalDateTime, LocalTime};
use crate::navigation::{NavOutcome, NavigationState};
use crate::pipeline::{NormalizeError, apply_fetch};
use crate::snapshot::WeatherSnapshot;
use crate::traits::{Clock, InputSource, RenderContext, Renderer, WeatherSource};

/// What happened during one [`Controller::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Navigation events applied.
    pub events: usize,
    /// Full screen redraws issued.
    pub redraws: u8,
    /// Outcome of the refresh, if one was due.
    pub refresh: Option<Result<(), NormalizeError>>,
}

/// Owns the application state and drives the collaborators.
pub struct Controller<I, C, W, Z, R> {
    input: I,
    clock: C,
    source: W,
    zone: Z,
    renderer: R,
    timing: LoopTiming,
    classifier: InputClassifier,
    nav: NavigationState,
    snapshot: WeatherSnapshot,
    last_updated: String<5>,
    last_refresh_ms: Option<u64>,
    colon_visible: bool,
    last_colon_ms: u64,
}

impl<I, C, W, Z, R> Controller<I, C, W, Z, R>
where
    I: InputSource,
    C: Clock,
    W: WeatherSource,
    Z: LocalTime,
    R: Renderer,
{
    pub fn new(
        input: I,
        clock: C,
        source: W,
        zone: Z,
        renderer: R,
    ) -> Self {
        Self {
            input,
            clock,
            source,
            zone,
            renderer,
            timing: LoopTiming::new(),
            classifier: InputClassifier::new(),
            nav: NavigationState::new(),
            snapshot: WeatherSnapshot::new(),
            last_updated: String::new(),
            last_refresh_ms: None,
            colon_visible: true,
            last_colon_ms: 0,
        }
    }

    /// Replace the default loop periods.
    pub fn with_timing(
        mut self,
        timing: LoopTiming,
    ) -> Self {
        self.timing = timing;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn snapshot(&self) -> &WeatherSnapshot { &self.snapshot }

    #[inline]
    pub fn navigation(&self) -> &NavigationState { &self.nav }

    /// "HH:MM" of the last refresh attempt, successful or not.
    #[inline]
    pub fn last_updated(&self) -> &str { self.last_updated.as_str() }

    #[inline]
    pub fn colon_visible(&self) -> bool { self.colon_visible }

    #[inline]
    pub fn renderer(&self) -> &R { &self.renderer }

    #[inline]
    pub fn input_mut(&mut self) -> &mut I { &mut self.input }

    #[inline]
    pub fn source_mut(&mut self) -> &mut W { &mut self.source }

    #[inline]
    pub fn clock_mut(&mut self) -> &mut C { &mut self.clock }

    /// Turn autoplay on or off; the autoplay timer restarts now.
    pub fn set_auto_advance(
        &mut self,
        enabled: bool,
    ) {
        let now = self.clock.now_ms();
        self.nav.set_auto_advance(enabled, now);
    }

    // =========================================================================
    // Loop
    // =========================================================================

    /// Run one loop iteration.
    pub fn step(&mut self) -> StepReport {
        let mut report = StepReport::default();
        let now = self.clock.now_ms();

        // Input, then navigation, then redraw decision
        let sample = self.input.sample();
        let mut outcome = NavOutcome::default();
        for event in self.classifier.poll(sample, now) {
            if matches!(event, InputEvent::SelectPressStart | InputEvent::SelectReleased) {
                continue;
            }
            report.events += 1;
            let step = self.nav.handle(event, now);
            if let Some(on) = step.display_power {
                self.renderer.set_backlight(on);
            }
            outcome.redraw |= step.redraw;
        }

        outcome.redraw |= self.nav.tick_auto_advance(now, self.timing.page_switch_interval_ms).redraw;

        if outcome.redraw && self.nav.display_on() {
            self.draw(false);
            report.redraws += 1;
        }

        // Refresh
        let due = self
            .last_refresh_ms
            .is_none_or(|last| now.saturating_sub(last) >= self.timing.update_interval_ms);
        if due {
            report.refresh = Some(self.refresh());
            if self.nav.display_on() {
                self.draw(false);
                report.redraws += 1;
            }
        }

        // Colon blink
        if self.nav.display_on() && now.saturating_sub(self.last_colon_ms) >= self.timing.colon_flash_interval_ms {
            self.colon_visible = !self.colon_visible;
            self.last_colon_ms = now;
            if self.nav.screen().shows_header() {
                self.draw(true);
            }
        }

        report
    }

    fn refresh(&mut self) -> Result<(), NormalizeError> {
        let fetched = self.source.fetch();
        let result = apply_fetch(&mut self.snapshot, fetched, &self.zone);

        if let Some(local) = self.local_now() {
            self.last_updated = hhmm(&local);
        }
        self.last_refresh_ms = Some(self.clock.now_ms());
        result
    }

    fn local_now(&self) -> Option<LocalDateTime> {
        let unix = self.clock.unix_time();
        if unix < CLOCK_SYNC_MIN_UNIX {
            return None;
        }
        self.zone.breakdown(unix)
    }

    fn draw(
        &mut self,
        header_only: bool,
    ) {
        let local = self.local_now();
        let ctx = RenderContext {
            screen: self.nav.screen(),
            settings_mode: self.nav.settings_mode(),
            auto_advance: self.nav.auto_advance(),
            snapshot: &self.snapshot,
            unix_time: self.clock.unix_time(),
            local,
            colon_visible: self.colon_visible,
            last_updated: self.last_updated.as_str(),
        };
        if header_only {
            self.renderer.draw_header(&ctx);
        } else {
            self.renderer.draw_screen(&ctx);
        }
    }
}
