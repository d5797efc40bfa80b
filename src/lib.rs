#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`CycleConfig`**: Validated green/yellow/red phase lengths and buzzer cadence
//! - **`ClockState`**: Converts a monotonic millisecond clock into one-second ticks of cycle time
//! - **`Phase`**: The active signal phase, always derived from elapsed cycle time
//! - **`BuzzerDirective`**: What the buzzer should do on a given poll
//! - **`DisplayValue`**: Countdown digit (or blank) for the seven-segment display
//! - **`TrafficController`**: Polls the clock, evaluates the engine and renders outputs
//! - **`Indicators`**, **`Buzzer`**, **`DigitDisplay`**: Traits to implement for your hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! The engine itself does no I/O. Every value it produces is a pure function of
//! the elapsed seconds in the cycle, so phase, countdown and buzzer can never
//! drift out of step with each other.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod time;
pub mod types;
pub mod config;
pub mod engine;
pub mod clock;
pub mod output;
pub mod lamp;
pub mod controller;

pub use clock::{ClockState, TICK_MILLIS};
pub use config::{CycleConfig, CycleConfigBuilder};
pub use controller::{SignalFrame, TrafficController};
pub use lamp::{LampIndicators, RgbLamp};
pub use output::{Buzzer, DigitDisplay, Indicators, SignalOutputs, SplitOutputs};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{BuzzCadence, BuzzerDirective, ConfigError, DisplayValue, Phase};

#[cfg(feature = "std")]
pub use time::{StdDuration, StdInstant, StdTimeSource};
