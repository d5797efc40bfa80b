//! Core value types shared by the engine, the controller and output drivers.

/// One of the three signal phases.
///
/// Phases are never stored; they are always recomputed from the elapsed
/// seconds in the cycle, so phase and countdown cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Traffic may proceed. Buzzer silent.
    Green,

    /// Phase is about to end. Buzzer beeps.
    Yellow,

    /// Traffic must stop. Buzzer sounds continuously.
    Red,
}

impl Phase {
    /// All phases in cycle order.
    pub const ALL: [Phase; 3] = [Phase::Green, Phase::Yellow, Phase::Red];

    /// Returns the phase that follows this one in the cycle.
    #[inline]
    pub fn next(self) -> Phase {
        match self {
            Phase::Green => Phase::Yellow,
            Phase::Yellow => Phase::Red,
            Phase::Red => Phase::Green,
        }
    }
}

impl core::fmt::Display for Phase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Phase::Green => write!(f, "green"),
            Phase::Yellow => write!(f, "yellow"),
            Phase::Red => write!(f, "red"),
        }
    }
}

/// What the output layer should do with the buzzer on this poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuzzerDirective {
    /// Drive the buzzer off.
    Off,

    /// Drive the buzzer on.
    On,

    /// Flip the buzzer's current state. Only emitted during yellow.
    Toggle,

    /// Leave the buzzer as it is. Only emitted during yellow.
    Hold,
}

impl BuzzerDirective {
    /// Resolves the directive against the buzzer's current state.
    #[inline]
    pub fn resolve(self, currently_on: bool) -> bool {
        match self {
            BuzzerDirective::Off => false,
            BuzzerDirective::On => true,
            BuzzerDirective::Toggle => !currently_on,
            BuzzerDirective::Hold => currently_on,
        }
    }
}

/// Value shown on the single-digit display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayValue {
    /// A decimal digit in `0..=9`.
    Digit(u8),

    /// All segments off.
    Blank,
}

impl DisplayValue {
    /// Converts a countdown value to something a single digit can show.
    ///
    /// Values above 9 have no segment pattern and render as [`DisplayValue::Blank`].
    #[inline]
    pub fn from_remaining(remaining: u32) -> Self {
        match u8::try_from(remaining) {
            Ok(digit) if digit <= 9 => DisplayValue::Digit(digit),
            _ => DisplayValue::Blank,
        }
    }

    /// Returns the digit, or `None` when blank.
    #[inline]
    pub fn digit(self) -> Option<u8> {
        match self {
            DisplayValue::Digit(d) => Some(d),
            DisplayValue::Blank => None,
        }
    }
}

/// How the yellow-phase beep is paced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuzzCadence {
    /// Toggle every `n` polls of the control loop.
    ///
    /// Beep frequency therefore depends on how fast the loop is polled:
    /// changing the loop's yield duration changes the audible pattern.
    Polls(u32),

    /// Toggle every `n` milliseconds of yellow, independent of polling rate.
    Millis(u32),
}

impl Default for BuzzCadence {
    fn default() -> Self {
        BuzzCadence::Polls(100)
    }
}

/// Cycle configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A phase was given a length of zero seconds.
    ZeroPhaseLength(Phase),

    /// The buzzer cadence interval is zero.
    ZeroBuzzInterval,

    /// The summed cycle length does not fit in a `u32`.
    CycleTooLong,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroPhaseLength(phase) => {
                write!(f, "{} phase must last at least one second", phase)
            }
            ConfigError::ZeroBuzzInterval => {
                write!(f, "buzz interval must be positive")
            }
            ConfigError::CycleTooLong => {
                write!(f, "total cycle length overflows")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_cycle_in_order() {
        assert_eq!(Phase::Green.next(), Phase::Yellow);
        assert_eq!(Phase::Yellow.next(), Phase::Red);
        assert_eq!(Phase::Red.next(), Phase::Green);
    }

    #[test]
    fn directive_resolves_against_current_state() {
        assert!(!BuzzerDirective::Off.resolve(true));
        assert!(BuzzerDirective::On.resolve(false));
        assert!(BuzzerDirective::Toggle.resolve(false));
        assert!(!BuzzerDirective::Toggle.resolve(true));
        assert!(BuzzerDirective::Hold.resolve(true));
        assert!(!BuzzerDirective::Hold.resolve(false));
    }

    #[test]
    fn display_blanks_values_without_a_digit() {
        assert_eq!(DisplayValue::from_remaining(0), DisplayValue::Digit(0));
        assert_eq!(DisplayValue::from_remaining(9), DisplayValue::Digit(9));
        assert_eq!(DisplayValue::from_remaining(10), DisplayValue::Blank);
        assert_eq!(DisplayValue::from_remaining(u32::MAX), DisplayValue::Blank);
        assert_eq!(DisplayValue::Blank.digit(), None);
    }
}
