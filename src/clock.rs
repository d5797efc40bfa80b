//! Tick accumulator: turns a free-running millisecond clock into one-second
//! ticks of cycle time.

use crate::config::CycleConfig;
use crate::time::{TimeDuration, TimeInstant};
use crate::types::{BuzzCadence, BuzzerDirective, Phase};

/// Milliseconds that must pass before a tick is credited.
pub const TICK_MILLIS: u64 = 1000;

/// Mutable timing state of the signal.
///
/// Owned by whoever drives the cycle (normally a
/// [`TrafficController`](crate::controller::TrafficController)). Fields are
/// only changed through [`ClockState::advance`] and
/// [`ClockState::step_buzzer`], which keep the invariants
/// `elapsed_seconds < total_seconds` and `buzz_subcounter < buzz_interval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockState<I: TimeInstant> {
    elapsed_seconds: u32,
    last_tick: I,
    buzz_subcounter: u32,
    buzz_anchor: Option<I>,
}

impl<I: TimeInstant> ClockState<I> {
    /// Starts a fresh cycle at `now`.
    pub fn new(now: I) -> Self {
        Self {
            elapsed_seconds: 0,
            last_tick: now,
            buzz_subcounter: 0,
            buzz_anchor: None,
        }
    }

    /// Seconds elapsed in the current cycle.
    #[inline]
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    /// Instant at which the last tick was credited (or the start instant).
    #[inline]
    pub fn last_tick(&self) -> I {
        self.last_tick
    }

    /// Polls counted since the last yellow-phase toggle.
    #[inline]
    pub fn buzz_subcounter(&self) -> u32 {
        self.buzz_subcounter
    }

    /// Credits at most one second of cycle time.
    ///
    /// If at least [`TICK_MILLIS`] have passed since the last tick, elapsed
    /// time advances by exactly one second, the tick instant moves to `now`
    /// and the cycle wraps to zero (clearing the buzzer subcounter) once it
    /// reaches `total_seconds`. Returns `true` in that case.
    ///
    /// A gap of several seconds still credits a single second. Under sustained
    /// stalls the cycle therefore falls behind wall-clock time and stays behind.
    pub fn advance(&mut self, now: I, config: &CycleConfig) -> bool {
        if now.duration_since(self.last_tick).as_millis() < TICK_MILLIS {
            return false;
        }

        self.elapsed_seconds += 1;
        self.last_tick = now;

        if self.elapsed_seconds >= config.total_seconds() {
            self.elapsed_seconds = 0;
            self.buzz_subcounter = 0;
        }

        true
    }

    /// Milliseconds until [`advance`](Self::advance) would credit the next tick.
    ///
    /// Zero means a tick is already due.
    pub fn millis_until_tick(&self, now: I) -> u64 {
        TICK_MILLIS.saturating_sub(now.duration_since(self.last_tick).as_millis())
    }

    /// Evaluates the buzzer for this poll and commits the new cadence state.
    ///
    /// With [`BuzzCadence::Polls`] this is the engine's
    /// [`buzzer_directive`](CycleConfig::buzzer_directive). With
    /// [`BuzzCadence::Millis`] yellow toggles whenever the interval has passed
    /// since the last toggle, measured from the first yellow poll.
    pub fn step_buzzer(&mut self, now: I, config: &CycleConfig) -> BuzzerDirective {
        match config.buzz_cadence() {
            BuzzCadence::Polls(interval) => {
                let (directive, subcounter) =
                    config.buzzer_directive(self.elapsed_seconds, self.buzz_subcounter, interval);
                self.buzz_subcounter = subcounter;
                directive
            }
            BuzzCadence::Millis(period) => match config.phase(self.elapsed_seconds) {
                Phase::Green => {
                    self.buzz_anchor = None;
                    BuzzerDirective::Off
                }
                Phase::Red => {
                    self.buzz_anchor = None;
                    BuzzerDirective::On
                }
                Phase::Yellow => match self.buzz_anchor {
                    None => {
                        self.buzz_anchor = Some(now);
                        BuzzerDirective::Hold
                    }
                    Some(anchor) if now.duration_since(anchor).as_millis() >= u64::from(period) => {
                        self.buzz_anchor = Some(now);
                        BuzzerDirective::Toggle
                    }
                    Some(_) => BuzzerDirective::Hold,
                },
            },
        }
    }
}
