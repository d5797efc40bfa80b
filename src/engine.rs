//! Phase engine: pure functions from elapsed seconds in the cycle to phase,
//! countdown and buzzer directive.
//!
//! Nothing here holds state. All mutable timing lives in
//! [`ClockState`](crate::clock::ClockState); these functions are evaluated
//! against it on every poll.

use crate::config::CycleConfig;
use crate::types::{BuzzerDirective, DisplayValue, Phase};

impl CycleConfig {
    /// Returns the phase active at `elapsed` seconds into the cycle.
    ///
    /// Each phase owns the half-open interval `[start, start + length)`, so a
    /// boundary second belongs to the phase that begins there.
    #[inline]
    pub fn phase(&self, elapsed: u32) -> Phase {
        if elapsed < self.green_seconds() {
            Phase::Green
        } else if elapsed < self.green_seconds() + self.yellow_seconds() {
            Phase::Yellow
        } else {
            Phase::Red
        }
    }

    /// Seconds into the cycle at which `phase` begins.
    #[inline]
    pub fn phase_start(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Green => 0,
            Phase::Yellow => self.green_seconds(),
            Phase::Red => self.green_seconds() + self.yellow_seconds(),
        }
    }

    /// Length of `phase` in seconds.
    #[inline]
    pub fn phase_length(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Green => self.green_seconds(),
            Phase::Yellow => self.yellow_seconds(),
            Phase::Red => self.red_seconds(),
        }
    }

    /// Seconds until the next phase boundary, in `1..=phase_length`.
    ///
    /// `elapsed` is expected to be in `0..total_seconds`; the accumulator
    /// guarantees this.
    #[inline]
    pub fn remaining(&self, elapsed: u32) -> u32 {
        let phase = self.phase(elapsed);
        let boundary = self.phase_start(phase) + self.phase_length(phase);
        boundary.saturating_sub(elapsed)
    }

    /// Countdown value for the digit display at `elapsed`.
    #[inline]
    pub fn display_value(&self, elapsed: u32) -> DisplayValue {
        DisplayValue::from_remaining(self.remaining(elapsed))
    }

    /// Computes the buzzer directive for one poll and the next subcounter value.
    ///
    /// * Green: `(Off, 0)`
    /// * Red: `(On, buzz_subcounter)` unchanged
    /// * Yellow: the subcounter advances by one; on reaching `buzz_interval`
    ///   the result is `(Toggle, 0)`, otherwise `(Hold, buzz_subcounter + 1)`
    pub fn buzzer_directive(
        &self,
        elapsed: u32,
        buzz_subcounter: u32,
        buzz_interval: u32,
    ) -> (BuzzerDirective, u32) {
        match self.phase(elapsed) {
            Phase::Green => (BuzzerDirective::Off, 0),
            Phase::Red => (BuzzerDirective::On, buzz_subcounter),
            Phase::Yellow => {
                let next = buzz_subcounter.saturating_add(1);
                if next >= buzz_interval {
                    (BuzzerDirective::Toggle, 0)
                } else {
                    (BuzzerDirective::Hold, next)
                }
            }
        }
    }
}
