//! Core logic for the weather reporter appliance.
//!
//! This crate contains everything that decides *what* the appliance shows,
//! independent of the display driver, network stack and button hardware:
//!
//! - [`input`]: Debounced classification of raw button samples into events
//! - [`navigation`]: Screen cycles, settings mode, display power, autoplay
//! - [`screens`]: Screen enumeration, cycle order and per-screen data needs
//! - [`snapshot`]: The normalized in-memory weather model
//! - [`pipeline`]: Provider payload → [`snapshot::WeatherSnapshot`]
//! - [`derived`]: Pure display attributes (colors, labels, sun events)
//! - [`colors`] / [`thresholds`]: Palette and breakpoints used by `derived`
//! - [`local_time`]: Wall-clock breakdown in the configured time zone
//! - [`traits`] / [`controller`]: Collaborator seams and the cooperative loop
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` + `alloc` so it can run on the device itself. Tests
//! run on the host with `std` enabled (via `cfg_attr`).

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

extern crate alloc;

pub mod colors;
pub mod config;
pub mod controller;
pub mod derived;
pub mod input;
pub mod local_time;
pub mod navigation;
pub mod pipeline;
pub mod screens;
pub mod snapshot;
pub mod thresholds;
pub mod traits;

// Re-export commonly used items
pub use controller::Controller;
pub use input::{ButtonSample, InputClassifier, InputEvent};
pub use navigation::NavigationState;
pub use screens::{Cycle, Screen};
pub use snapshot::WeatherSnapshot;
