//! Debounced classification of raw button samples.
//!
//! The classifier is fed one [`ButtonSample`] per loop iteration together
//! with the monotonic millisecond clock, and returns the discrete events that
//! sample produced.
//!
//! # Left / Right
//!
//! Edge-triggered. A press edge is honored only if [`DEBOUNCE_DELAY_MS`] has
//! passed since the last honored Left/Right edge. Edges inside the window are
//! dropped, never queued. Left wins when both edges arrive in one sample.
//!
//! # Select
//!
//! ```text
//!   press ─┬─ held < 800 ms ── release ──▶ SelectShort
//!          └─ held ≥ 800 ms ──────────────▶ SelectLong (once), release is silent
//! ```
//!
//! A long press fires while the button is still down. If the loop was too
//! slow to see the button held past the threshold, the release itself fires
//! the long press instead, so a hold of 800 ms never degrades into a short
//! press.

use heapless::Vec;
use log::debug;

use crate::config::{DEBOUNCE_DELAY_MS, LONG_PRESS_MS};

/// Maximum events one sample can produce (a Left/Right edge, a Select
/// classification and the Select release).
pub const MAX_EVENTS_PER_SAMPLE: usize = 4;

/// Raw "is pressed" levels of the three buttons at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonSample {
    pub left: bool,
    pub right: bool,
    pub select: bool,
}

/// Discrete input events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Left,
    Right,
    /// Select released before the long-press threshold.
    SelectShort,
    /// Select went down; duration timing started.
    SelectPressStart,
    /// Select held past the long-press threshold. Fires once per press.
    SelectLong,
    /// Select fully released after a press of either kind.
    SelectReleased,
}

pub type InputEvents = Vec<InputEvent, MAX_EVENTS_PER_SAMPLE>;

/// Turns button samples into [`InputEvent`]s.
#[derive(Clone, Debug, Default)]
pub struct InputClassifier {
    left_was_down: bool,
    right_was_down: bool,
    last_nav_edge_ms: Option<u64>,
    select_press_start_ms: u64,
    select_held: bool,
    long_press_handled: bool,
}

impl InputClassifier {
    pub const fn new() -> Self {
        Self {
            left_was_down: false,
            right_was_down: false,
            last_nav_edge_ms: None,
            select_press_start_ms: 0,
            select_held: false,
            long_press_handled: false,
        }
    }

    /// Whether a Select press is currently being timed.
    #[inline]
    pub fn select_held(&self) -> bool { self.select_held }

    /// Classify one sample taken at `now_ms`.
    pub fn poll(
        &mut self,
        sample: ButtonSample,
        now_ms: u64,
    ) -> InputEvents {
        let mut events = InputEvents::new();

        if let Some(event) = self.poll_navigation(sample, now_ms) {
            let _ = events.push(event);
        }
        self.poll_select(sample.select, now_ms, &mut events);

        for event in &events {
            debug!("input: {:?} at {} ms", event, now_ms);
        }
        events
    }

    fn poll_navigation(
        &mut self,
        sample: ButtonSample,
        now_ms: u64,
    ) -> Option<InputEvent> {
        let left_edge = sample.left && !self.left_was_down;
        let right_edge = sample.right && !self.right_was_down;
        self.left_was_down = sample.left;
        self.right_was_down = sample.right;

        if !left_edge && !right_edge {
            return None;
        }

        if let Some(last) = self.last_nav_edge_ms
            && now_ms.saturating_sub(last) < DEBOUNCE_DELAY_MS
        {
            return None;
        }

        self.last_nav_edge_ms = Some(now_ms);
        Some(if left_edge { InputEvent::Left } else { InputEvent::Right })
    }

    fn poll_select(
        &mut self,
        pressed: bool,
        now_ms: u64,
        events: &mut InputEvents,
    ) {
        let elapsed = now_ms.saturating_sub(self.select_press_start_ms);

        if pressed {
            if !self.select_held && !self.long_press_handled {
                self.select_press_start_ms = now_ms;
                self.select_held = true;
                let _ = events.push(InputEvent::SelectPressStart);
            } else if self.select_held && elapsed >= LONG_PRESS_MS {
                self.select_held = false;
                self.long_press_handled = true;
                let _ = events.push(InputEvent::SelectLong);
            }
            return;
        }

        // Released
        if self.select_held {
            let event = if elapsed < LONG_PRESS_MS { InputEvent::SelectShort } else { InputEvent::SelectLong };
            let _ = events.push(event);
            let _ = events.push(InputEvent::SelectReleased);
        } else if self.long_press_handled {
            let _ = events.push(InputEvent::SelectReleased);
        }
        self.select_held = false;
        self.long_press_handled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE: ButtonSample = ButtonSample {
        left: false,
        right: false,
        select: false,
    };

    fn left() -> ButtonSample {
        ButtonSample { left: true, ..IDLE }
    }

    fn right() -> ButtonSample {
        ButtonSample { right: true, ..IDLE }
    }

    fn select() -> ButtonSample {
        ButtonSample { select: true, ..IDLE }
    }

    /// Hold Select from `start` for `duration` ms, sampling every `step` ms,
    /// then release. Returns every event seen.
    fn hold_select(
        c: &mut InputClassifier,
        start: u64,
        duration: u64,
        step: u64,
    ) -> std::vec::Vec<InputEvent> {
        let mut seen = std::vec::Vec::new();
        let mut t = start;
        while t < start + duration {
            seen.extend(c.poll(select(), t));
            t += step;
        }
        seen.extend(c.poll(IDLE, start + duration));
        seen
    }

    #[test]
    fn test_first_edge_is_honored() {
        let mut c = InputClassifier::new();
        assert_eq!(c.poll(right(), 0).as_slice(), &[InputEvent::Right]);
    }

    #[test]
    fn test_held_button_fires_once() {
        let mut c = InputClassifier::new();
        assert_eq!(c.poll(left(), 1_000).len(), 1);
        assert!(c.poll(left(), 1_300).is_empty());
        assert!(c.poll(left(), 2_000).is_empty());
    }

    #[test]
    fn test_edges_inside_debounce_window_are_dropped() {
        let mut c = InputClassifier::new();
        assert_eq!(c.poll(right(), 1_000).as_slice(), &[InputEvent::Right]);
        assert!(c.poll(IDLE, 1_050).is_empty());
        // Bounce 100 ms after the honored edge
        assert!(c.poll(right(), 1_100).is_empty());
        assert!(c.poll(IDLE, 1_150).is_empty());
        // Not queued: nothing appears once the window closes
        assert!(c.poll(IDLE, 1_250).is_empty());
        assert_eq!(c.poll(left(), 1_300).as_slice(), &[InputEvent::Left]);
    }

    #[test]
    fn test_debounce_window_is_200ms() {
        let mut c = InputClassifier::new();
        let _ = c.poll(right(), 1_000);
        let _ = c.poll(IDLE, 1_100);
        assert!(c.poll(right(), 1_199).is_empty());
        let _ = c.poll(IDLE, 1_199);
        assert_eq!(c.poll(right(), 1_200).as_slice(), &[InputEvent::Right]);
    }

    #[test]
    fn test_left_wins_simultaneous_edges() {
        let mut c = InputClassifier::new();
        let both = ButtonSample {
            left: true,
            right: true,
            select: false,
        };
        assert_eq!(c.poll(both, 500).as_slice(), &[InputEvent::Left]);
    }

    #[test]
    fn test_select_799ms_is_short() {
        let mut c = InputClassifier::new();
        let events = hold_select(&mut c, 10_000, 799, 50);
        assert_eq!(
            events,
            [InputEvent::SelectPressStart, InputEvent::SelectShort, InputEvent::SelectReleased]
        );
    }

    #[test]
    fn test_select_800ms_is_long_without_trailing_short() {
        let mut c = InputClassifier::new();
        // Sampled at 0, 50, ..., 750 then released at 800: the release itself
        // is the first sample past the threshold.
        let events = hold_select(&mut c, 10_000, 800, 50);
        assert_eq!(
            events,
            [InputEvent::SelectPressStart, InputEvent::SelectLong, InputEvent::SelectReleased]
        );
    }

    #[test]
    fn test_select_long_fires_while_held_exactly_once() {
        let mut c = InputClassifier::new();
        let events = hold_select(&mut c, 0, 3_000, 50);
        let longs = events.iter().filter(|e| **e == InputEvent::SelectLong).count();
        let shorts = events.iter().filter(|e| **e == InputEvent::SelectShort).count();
        assert_eq!(longs, 1);
        assert_eq!(shorts, 0);
        assert_eq!(events.last(), Some(&InputEvent::SelectReleased));
    }

    #[test]
    fn test_long_press_guard_resets_on_release() {
        let mut c = InputClassifier::new();
        let _ = hold_select(&mut c, 0, 1_000, 50);
        let events = hold_select(&mut c, 2_000, 300, 50);
        assert!(events.contains(&InputEvent::SelectShort));
    }

    #[test]
    fn test_select_does_not_consume_navigation_debounce() {
        let mut c = InputClassifier::new();
        let _ = c.poll(select(), 0);
        let events = c.poll(ButtonSample { right: true, select: true, left: false }, 50);
        assert_eq!(events.as_slice(), &[InputEvent::Right]);
        assert!(c.select_held());
    }

    #[test]
    fn test_idle_produces_nothing() {
        let mut c = InputClassifier::new();
        for t in (0..5_000).step_by(50) {
            assert!(c.poll(IDLE, t).is_empty());
        }
    }
}
