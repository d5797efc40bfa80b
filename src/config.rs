//! Validated cycle timing configuration.

use crate::types::{BuzzCadence, ConfigError, Phase};
use core::fmt::Write;
use heapless::String;

/// Default green phase length in seconds.
pub const DEFAULT_GREEN_SECONDS: u32 = 9;
/// Default yellow phase length in seconds.
pub const DEFAULT_YELLOW_SECONDS: u32 = 6;
/// Default red phase length in seconds.
pub const DEFAULT_RED_SECONDS: u32 = 9;

/// Capacity of the string returned by [`CycleConfig::summary`].
pub const SUMMARY_CAPACITY: usize = 96;

// Summary template with every value at u32 width.
const SUMMARY_WIDEST: usize = "green s, yellow s, red s, cycle s".len() + 4 * 10;
const _: () = assert!(SUMMARY_CAPACITY >= SUMMARY_WIDEST);

/// Immutable timing for one Green -> Yellow -> Red cycle.
///
/// Only obtainable through [`CycleConfigBuilder::build`] (or [`Default`]), so
/// every phase length is positive and `total_seconds` cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleConfig {
    green_seconds: u32,
    yellow_seconds: u32,
    red_seconds: u32,
    total_seconds: u32,
    buzz_cadence: BuzzCadence,
}

impl CycleConfig {
    /// Creates a new configuration builder seeded with the default timings.
    pub fn builder() -> CycleConfigBuilder {
        CycleConfigBuilder::new()
    }

    /// Creates a configuration with the given phase lengths and the default
    /// buzzer cadence.
    ///
    /// # Errors
    /// See [`CycleConfigBuilder::build`].
    pub fn new(green: u32, yellow: u32, red: u32) -> Result<Self, ConfigError> {
        Self::builder().green(green).yellow(yellow).red(red).build()
    }

    /// Green phase length in seconds.
    #[inline]
    pub fn green_seconds(&self) -> u32 {
        self.green_seconds
    }

    /// Yellow phase length in seconds.
    #[inline]
    pub fn yellow_seconds(&self) -> u32 {
        self.yellow_seconds
    }

    /// Red phase length in seconds.
    #[inline]
    pub fn red_seconds(&self) -> u32 {
        self.red_seconds
    }

    /// Length of one full cycle in seconds.
    #[inline]
    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    /// Yellow-phase beep pacing.
    #[inline]
    pub fn buzz_cadence(&self) -> BuzzCadence {
        self.buzz_cadence
    }

    /// Human-readable timing summary, suitable for a startup log line.
    pub fn summary(&self) -> String<SUMMARY_CAPACITY> {
        let mut out = String::new();
        // Cannot overflow, see SUMMARY_WIDEST.
        write!(
            out,
            "green {}s, yellow {}s, red {}s, cycle {}s",
            self.green_seconds, self.yellow_seconds, self.red_seconds, self.total_seconds
        )
        .ok();
        out
    }
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            green_seconds: DEFAULT_GREEN_SECONDS,
            yellow_seconds: DEFAULT_YELLOW_SECONDS,
            red_seconds: DEFAULT_RED_SECONDS,
            total_seconds: DEFAULT_GREEN_SECONDS + DEFAULT_YELLOW_SECONDS + DEFAULT_RED_SECONDS,
            buzz_cadence: BuzzCadence::default(),
        }
    }
}

/// Builder for constructing validated cycle configurations.
#[derive(Debug, Clone, Copy)]
pub struct CycleConfigBuilder {
    green_seconds: u32,
    yellow_seconds: u32,
    red_seconds: u32,
    buzz_cadence: BuzzCadence,
}

impl CycleConfigBuilder {
    /// Creates a builder with the default timings (9s / 6s / 9s, beep every 100 polls).
    pub fn new() -> Self {
        Self {
            green_seconds: DEFAULT_GREEN_SECONDS,
            yellow_seconds: DEFAULT_YELLOW_SECONDS,
            red_seconds: DEFAULT_RED_SECONDS,
            buzz_cadence: BuzzCadence::default(),
        }
    }

    /// Sets the green phase length in seconds.
    pub fn green(mut self, seconds: u32) -> Self {
        self.green_seconds = seconds;
        self
    }

    /// Sets the yellow phase length in seconds.
    pub fn yellow(mut self, seconds: u32) -> Self {
        self.yellow_seconds = seconds;
        self
    }

    /// Sets the red phase length in seconds.
    pub fn red(mut self, seconds: u32) -> Self {
        self.red_seconds = seconds;
        self
    }

    /// Sets the yellow-phase beep pacing.
    ///
    /// Default is `BuzzCadence::Polls(100)`.
    pub fn buzz_cadence(mut self, cadence: BuzzCadence) -> Self {
        self.buzz_cadence = cadence;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `ZeroPhaseLength` - A phase was given zero seconds
    /// * `ZeroBuzzInterval` - The buzzer cadence interval is zero
    /// * `CycleTooLong` - The phase lengths sum past `u32::MAX`
    pub fn build(self) -> Result<CycleConfig, ConfigError> {
        let lengths = [self.green_seconds, self.yellow_seconds, self.red_seconds];
        for (phase, length) in Phase::ALL.into_iter().zip(lengths) {
            if length == 0 {
                return Err(ConfigError::ZeroPhaseLength(phase));
            }
        }

        let interval = match self.buzz_cadence {
            BuzzCadence::Polls(n) | BuzzCadence::Millis(n) => n,
        };
        if interval == 0 {
            return Err(ConfigError::ZeroBuzzInterval);
        }

        let total_seconds = self
            .green_seconds
            .checked_add(self.yellow_seconds)
            .and_then(|sum| sum.checked_add(self.red_seconds))
            .ok_or(ConfigError::CycleTooLong)?;

        Ok(CycleConfig {
            green_seconds: self.green_seconds,
            yellow_seconds: self.yellow_seconds,
            red_seconds: self.red_seconds,
            total_seconds,
            buzz_cadence: self.buzz_cadence,
        })
    }
}

impl Default for CycleConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_builder_defaults() {
        assert_eq!(CycleConfig::default(), CycleConfig::builder().build().unwrap());
        assert_eq!(CycleConfig::default().total_seconds(), 24);
    }

    #[test]
    fn rejects_first_zero_length_phase() {
        assert_eq!(
            CycleConfig::new(0, 0, 9),
            Err(ConfigError::ZeroPhaseLength(Phase::Green))
        );
        assert_eq!(
            CycleConfig::new(9, 6, 0),
            Err(ConfigError::ZeroPhaseLength(Phase::Red))
        );
    }

    #[test]
    fn summary_lists_all_phases_and_total() {
        let config = CycleConfig::new(9, 6, 9).unwrap();
        assert_eq!(
            config.summary().as_str(),
            "green 9s, yellow 6s, red 9s, cycle 24s"
        );
    }

    #[test]
    fn summary_fits_widest_values() {
        let config = CycleConfig::new(u32::MAX - 2, 1, 1).unwrap();
        assert!(config.summary().ends_with("cycle 4294967295s"));

        let third = u32::MAX / 3;
        let config = CycleConfig::new(third, third, third).unwrap();
        let summary = config.summary();
        assert_eq!(
            summary.as_str(),
            "green 1431655765s, yellow 1431655765s, red 1431655765s, cycle 4294967295s"
        );
        assert!(summary.len() <= SUMMARY_WIDEST);
    }
}
