//! Time abstraction traits for platform-agnostic timing.
//!
//! The controller only ever asks "how many milliseconds since that instant?",
//! so any free-running monotonic clock can drive it: a SysTick counter, an
//! embassy `Instant`, or `std::time::Instant` on a host.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
///
/// Implementations backed by a wrapping hardware counter should compute
/// `duration_since` with wrapping arithmetic so the accumulator keeps working
/// across counter rollover.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

#[cfg(feature = "std")]
pub use self::host::{StdDuration, StdInstant, StdTimeSource};

#[cfg(feature = "std")]
mod host {
    use super::{TimeDuration, TimeInstant, TimeSource};

    /// Newtype wrapper for `std::time::Duration`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub struct StdDuration(pub std::time::Duration);

    impl TimeDuration for StdDuration {
        fn as_millis(&self) -> u64 {
            u64::try_from(self.0.as_millis()).unwrap_or(u64::MAX)
        }
    }

    /// Newtype wrapper for `std::time::Instant`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub struct StdInstant(pub std::time::Instant);

    impl TimeInstant for StdInstant {
        type Duration = StdDuration;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            StdDuration(self.0.saturating_duration_since(earlier.0))
        }
    }

    /// Monotonic time source backed by the host clock.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct StdTimeSource;

    impl StdTimeSource {
        /// Creates a new host time source.
        pub fn new() -> Self {
            Self
        }
    }

    impl TimeSource<StdInstant> for StdTimeSource {
        fn now(&self) -> StdInstant {
            StdInstant(std::time::Instant::now())
        }
    }

}
