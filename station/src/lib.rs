//! Host runner library for the weather reporter.
//!
//! Supplies the `std` collaborators the core controller drives: a TOML
//! configuration layer, the One Call HTTP fetcher, the system clock, console
//! buttons and a renderer that writes each frame to the log.
//!
//! # Testing
//!
//! ```bash
//! cargo test -p weather-reporter
//! ```

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

pub mod clock;
pub mod config;
pub mod console;
pub mod provider;
pub mod render;

pub use clock::SystemClock;
pub use config::StationConfig;
pub use console::ConsoleInput;
pub use provider::OneCallClient;
pub use render::{LogRenderer, StationInfo};
