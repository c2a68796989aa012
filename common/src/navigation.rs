//! Navigation state machine.
//!
//! Owns the current screen, the weather/settings mode flag, display power
//! and autoplay. Mutated only by classified [`InputEvent`]s and by the
//! autoplay tick.
//!
//! # Transitions
//!
//! | Display | Event          | Effect                                            |
//! |---------|----------------|---------------------------------------------------|
//! | off     | any press      | display on, weather mode, Hourly-Now              |
//! | on      | `Right`        | next screen in the active cycle (wraps)           |
//! | on      | `Left`         | previous screen in the active cycle (wraps)       |
//! | on      | `SelectShort`  | display off, navigation untouched                 |
//! | on      | `SelectLong`   | toggle settings mode, jump to that cycle's first  |
//! | either  | autoplay tick  | next screen of the nine-screen autoplay loop      |

use log::debug;

use crate::input::InputEvent;
use crate::screens::{Cycle, Screen};

/// What the caller has to do after a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavOutcome {
    /// The visible screen changed and must be drawn.
    pub redraw: bool,
    /// Backlight must be switched on (`Some(true)`) or off (`Some(false)`).
    pub display_power: Option<bool>,
}

impl NavOutcome {
    const NONE: Self = Self {
        redraw: false,
        display_power: None,
    };

    const REDRAW: Self = Self {
        redraw: true,
        display_power: None,
    };
}

/// Screen navigation and display state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    screen: Screen,
    settings_mode: bool,
    display_on: bool,
    auto_advance: bool,
    last_page_switch_ms: u64,
}

impl NavigationState {
    /// Weather cycle, first screen, display on, autoplay off.
    pub const fn new() -> Self {
        Self {
            screen: Screen::HourlyNow,
            settings_mode: false,
            display_on: true,
            auto_advance: false,
            last_page_switch_ms: 0,
        }
    }

    #[inline]
    pub fn screen(&self) -> Screen { self.screen }

    #[inline]
    pub fn settings_mode(&self) -> bool { self.settings_mode }

    #[inline]
    pub fn display_on(&self) -> bool { self.display_on }

    #[inline]
    pub fn auto_advance(&self) -> bool { self.auto_advance }

    /// The cycle Left/Right currently moves through.
    #[inline]
    pub fn cycle(&self) -> Cycle { Cycle::from_settings_mode(self.settings_mode) }

    /// Turn autoplay on or off. The autoplay timer restarts at `now_ms`.
    pub fn set_auto_advance(
        &mut self,
        enabled: bool,
        now_ms: u64,
    ) {
        self.auto_advance = enabled;
        self.last_page_switch_ms = now_ms;
        debug!("nav: auto-advance {}", if enabled { "on" } else { "off" });
    }

    /// Apply one input event.
    pub fn handle(
        &mut self,
        event: InputEvent,
        now_ms: u64,
    ) -> NavOutcome {
        match event {
            InputEvent::SelectPressStart | InputEvent::SelectReleased => NavOutcome::NONE,
            InputEvent::Left | InputEvent::Right | InputEvent::SelectShort | InputEvent::SelectLong
                if !self.display_on =>
            {
                self.wake()
            }
            InputEvent::SelectShort => {
                self.display_on = false;
                debug!("nav: display off");
                NavOutcome {
                    redraw: false,
                    display_power: Some(false),
                }
            }
            InputEvent::SelectLong => {
                self.settings_mode = !self.settings_mode;
                self.screen = self.cycle().first();
                debug!("nav: settings mode {} -> {:?}", self.settings_mode, self.screen);
                NavOutcome::REDRAW
            }
            InputEvent::Left => self.rotate(self.screen.prev_in(self.cycle()), now_ms),
            InputEvent::Right => self.rotate(self.screen.next_in(self.cycle()), now_ms),
        }
    }

    /// Advance autoplay if it is on and `interval_ms` has passed since the
    /// last page switch. Runs whether or not the display is on; a redraw is
    /// only requested while it is.
    pub fn tick_auto_advance(
        &mut self,
        now_ms: u64,
        interval_ms: u64,
    ) -> NavOutcome {
        if !self.auto_advance || now_ms.saturating_sub(self.last_page_switch_ms) < interval_ms {
            return NavOutcome::NONE;
        }

        self.screen = self.screen.autoplay_next();
        self.settings_mode = self.screen.cycle() == Cycle::Settings;
        self.last_page_switch_ms = now_ms;
        debug!("nav: autoplay -> {:?}", self.screen);

        NavOutcome {
            redraw: self.display_on,
            display_power: None,
        }
    }

    fn wake(&mut self) -> NavOutcome {
        self.display_on = true;
        self.settings_mode = false;
        self.screen = Cycle::Weather.first();
        debug!("nav: display on -> {:?}", self.screen);
        NavOutcome {
            redraw: true,
            display_power: Some(true),
        }
    }

    fn rotate(
        &mut self,
        target: Screen,
        now_ms: u64,
    ) -> NavOutcome {
        if target == self.screen {
            return NavOutcome::NONE;
        }
        debug!("nav: {:?} -> {:?}", self.screen, target);
        self.screen = target;
        self.last_page_switch_ms = now_ms;
        NavOutcome::REDRAW
    }
}

impl Default for NavigationState {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = NavigationState::new();
        assert_eq!(nav.screen(), Screen::HourlyNow);
        assert!(!nav.settings_mode());
        assert!(nav.display_on());
        assert!(!nav.auto_advance());
    }

    #[test]
    fn test_right_closes_weather_cycle() {
        let mut nav = NavigationState::new();
        let mut visited = std::vec![nav.screen()];
        for i in 1..=3 {
            let out = nav.handle(InputEvent::Right, i * 250);
            assert!(out.redraw);
            visited.push(nav.screen());
        }
        assert_eq!(
            visited,
            [Screen::HourlyNow, Screen::HourlyExtended, Screen::Conditions, Screen::Daily]
        );
        let _ = nav.handle(InputEvent::Right, 1_000);
        assert_eq!(nav.screen(), Screen::HourlyNow);
    }

    #[test]
    fn test_left_from_first_wraps_to_last() {
        let mut nav = NavigationState::new();
        let _ = nav.handle(InputEvent::Left, 100);
        assert_eq!(nav.screen(), Screen::Daily);
    }

    #[test]
    fn test_short_select_turns_display_off_without_moving() {
        let mut nav = NavigationState::new();
        let _ = nav.handle(InputEvent::Right, 0);
        let out = nav.handle(InputEvent::SelectShort, 500);
        assert_eq!(out.display_power, Some(false));
        assert!(!out.redraw);
        assert!(!nav.display_on());
        assert_eq!(nav.screen(), Screen::HourlyExtended);
    }

    #[test]
    fn test_any_press_wakes_to_weather_home() {
        for wake_event in [InputEvent::Left, InputEvent::Right, InputEvent::SelectShort, InputEvent::SelectLong] {
            let mut nav = NavigationState::new();
            let _ = nav.handle(InputEvent::SelectLong, 0);
            let _ = nav.handle(InputEvent::Right, 300);
            let _ = nav.handle(InputEvent::SelectShort, 600);
            assert!(!nav.display_on());

            let out = nav.handle(wake_event, 900);
            assert_eq!(out.display_power, Some(true));
            assert!(out.redraw);
            assert!(nav.display_on());
            assert!(!nav.settings_mode());
            assert_eq!(nav.screen(), Screen::HourlyNow);
        }
    }

    #[test]
    fn test_long_select_toggles_mode() {
        let mut nav = NavigationState::new();
        let _ = nav.handle(InputEvent::Right, 0);
        let out = nav.handle(InputEvent::SelectLong, 1_000);
        assert!(out.redraw);
        assert!(nav.settings_mode());
        assert_eq!(nav.screen(), Screen::Settings);

        let _ = nav.handle(InputEvent::Right, 1_500);
        assert_eq!(nav.screen(), Screen::About);

        let _ = nav.handle(InputEvent::SelectLong, 3_000);
        assert!(!nav.settings_mode());
        assert_eq!(nav.screen(), Screen::HourlyNow);
    }

    #[test]
    fn test_screen_stays_in_active_cycle() {
        let mut nav = NavigationState::new();
        let _ = nav.handle(InputEvent::SelectLong, 0);
        for i in 1..20 {
            let ev = if i % 3 == 0 { InputEvent::Left } else { InputEvent::Right };
            let _ = nav.handle(ev, i * 250);
            assert_eq!(nav.screen().cycle(), nav.cycle());
        }
    }

    #[test]
    fn test_press_bookkeeping_events_are_ignored() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.handle(InputEvent::SelectPressStart, 0), NavOutcome::default());
        assert_eq!(nav.handle(InputEvent::SelectReleased, 10), NavOutcome::default());
        assert_eq!(nav, NavigationState::new());
    }

    #[test]
    fn test_autoplay_off_does_nothing() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.tick_auto_advance(60_000, 3_000), NavOutcome::default());
        assert_eq!(nav.screen(), Screen::HourlyNow);
    }

    #[test]
    fn test_autoplay_walks_super_cycle() {
        let mut nav = NavigationState::new();
        nav.set_auto_advance(true, 0);
        assert!(!nav.tick_auto_advance(2_999, 3_000).redraw);

        let mut t = 3_000;
        for expected in [
            Screen::HourlyExtended,
            Screen::Conditions,
            Screen::Daily,
            Screen::Settings,
            Screen::About,
            Screen::DemoIcons,
            Screen::DemoShapes,
            Screen::DemoFonts,
            Screen::HourlyNow,
        ] {
            assert!(nav.tick_auto_advance(t, 3_000).redraw);
            assert_eq!(nav.screen(), expected);
            assert_eq!(nav.settings_mode(), expected.cycle() == Cycle::Settings);
            t += 3_000;
        }
    }

    #[test]
    fn test_autoplay_continues_with_display_off() {
        let mut nav = NavigationState::new();
        nav.set_auto_advance(true, 0);
        let _ = nav.handle(InputEvent::SelectShort, 10);
        let out = nav.tick_auto_advance(3_000, 3_000);
        assert!(!out.redraw);
        assert_eq!(nav.screen(), Screen::HourlyExtended);
    }

    #[test]
    fn test_manual_rotation_restarts_autoplay_timer() {
        let mut nav = NavigationState::new();
        nav.set_auto_advance(true, 0);
        let _ = nav.handle(InputEvent::Right, 2_500);
        assert!(!nav.tick_auto_advance(3_000, 3_000).redraw);
        assert!(nav.tick_auto_advance(5_500, 3_000).redraw);
        assert_eq!(nav.screen(), Screen::Conditions);
    }
}
