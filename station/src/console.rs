//! Console buttons: stdin commands replayed as button levels.
//!
//! A reader thread parses one command per line and sends it to the loop.
//! Each press is played back as a real down/up sequence with a fixed hold
//! time, so the classifier debounces and times it exactly like hardware.
//!
//! | command        | effect                          |
//! |----------------|---------------------------------|
//! | `l`            | Left press                      |
//! | `r`            | Right press                     |
//! | `s`            | short Select (display power)    |
//! | `S`, `hold`    | long Select (settings mode)     |
//! | `auto`         | toggle autoplay                 |
//! | `q`, `quit`    | exit                            |

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::{Duration, Instant};

use tracing::{info, warn};
use weather_reporter_common::ButtonSample;
use weather_reporter_common::config::{DEBOUNCE_DELAY_MS, LONG_PRESS_MS};
use weather_reporter_common::traits::InputSource;

/// Hold time for Left/Right and short Select.
const TAP_HOLD: Duration = Duration::from_millis(120);

/// Hold time for a long Select, comfortably past the threshold.
const LONG_HOLD: Duration = Duration::from_millis(LONG_PRESS_MS + 300);

/// Idle gap between queued presses so each one clears the debounce window.
const RELEASE_GAP: Duration = Duration::from_millis(DEBOUNCE_DELAY_MS + 50);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleCommand {
    Left,
    Right,
    Select,
    SelectHold,
    ToggleAuto,
    Help,
    Quit,
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "l" | "left" => Some(Self::Left),
            "r" | "right" => Some(Self::Right),
            "s" | "select" => Some(Self::Select),
            "S" | "hold" => Some(Self::SelectHold),
            "auto" => Some(Self::ToggleAuto),
            "help" | "?" => Some(Self::Help),
            "q" | "quit" => Some(Self::Quit),
            _ => None,
        }
    }

    /// Button level and hold time for press commands.
    fn press(self) -> Option<(ButtonSample, Duration)> {
        let idle = ButtonSample::default();
        match self {
            Self::Left => Some((ButtonSample { left: true, ..idle }, TAP_HOLD)),
            Self::Right => Some((ButtonSample { right: true, ..idle }, TAP_HOLD)),
            Self::Select => Some((ButtonSample { select: true, ..idle }, TAP_HOLD)),
            Self::SelectHold => Some((ButtonSample { select: true, ..idle }, LONG_HOLD)),
            Self::ToggleAuto | Self::Help | Self::Quit => None,
        }
    }
}

fn print_help() {
    info!("console: l/r = left/right, s = select, S|hold = long select, auto = autoplay, q = quit");
}

struct ActivePress {
    sample: ButtonSample,
    until: Instant,
}

/// [`InputSource`] fed by the console thread.
pub struct ConsoleInput {
    commands: Receiver<ConsoleCommand>,
    queue: VecDeque<(ButtonSample, Duration)>,
    active: Option<ActivePress>,
    idle_until: Instant,
    auto_toggles: usize,
    quit: bool,
}

impl ConsoleInput {
    /// Start the stdin reader thread.
    pub fn spawn() -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        std::thread::Builder::new().name("console".into()).spawn(move || {
            print_help();
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match ConsoleCommand::parse(&line) {
                    Some(cmd) => {
                        if tx.send(cmd).is_err() {
                            break;
                        }
                    }
                    None => warn!("console: unknown command {:?} (type 'help')", line.trim()),
                }
            }
        })?;
        Ok(Self::from_receiver(rx))
    }

    fn from_receiver(commands: Receiver<ConsoleCommand>) -> Self {
        Self {
            commands,
            queue: VecDeque::new(),
            active: None,
            idle_until: Instant::now(),
            auto_toggles: 0,
            quit: false,
        }
    }

    /// Number of `auto` commands received since the last call.
    pub fn take_auto_toggles(&mut self) -> usize { std::mem::take(&mut self.auto_toggles) }

    /// `q` was entered.
    pub fn quit_requested(&self) -> bool { self.quit }

    fn drain_commands(&mut self) {
        loop {
            match self.commands.try_recv() {
                Ok(ConsoleCommand::ToggleAuto) => self.auto_toggles += 1,
                Ok(ConsoleCommand::Quit) => self.quit = true,
                Ok(ConsoleCommand::Help) => print_help(),
                Ok(cmd) => {
                    if let Some(press) = cmd.press() {
                        self.queue.push_back(press);
                    }
                }
                // A closed stdin leaves the appliance running without buttons
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
    }

    fn level_at(
        &mut self,
        now: Instant,
    ) -> ButtonSample {
        if let Some(active) = &self.active {
            if now < active.until {
                return active.sample;
            }
            self.active = None;
            self.idle_until = now + RELEASE_GAP;
        }

        if now >= self.idle_until
            && let Some((sample, hold)) = self.queue.pop_front()
        {
            self.active = Some(ActivePress {
                sample,
                until: now + hold,
            });
            return sample;
        }

        ButtonSample::default()
    }
}

impl InputSource for ConsoleInput {
    fn sample(&mut self) -> ButtonSample {
        self.drain_commands();
        self.level_at(Instant::now())
    }
}
