//! Traffic signal controller with cooperative polling and guaranteed shutdown.
//!
//! Provides [`TrafficController`], which owns the cycle clock and the output
//! drivers, evaluates the phase engine on every poll and renders the result.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::clock::ClockState;
use crate::config::CycleConfig;
use crate::output::SignalOutputs;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{BuzzerDirective, DisplayValue, Phase};

/// Snapshot of what the controller rendered on one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalFrame {
    /// Whether this poll credited a one-second tick.
    pub ticked: bool,
    /// Seconds elapsed in the current cycle.
    pub elapsed_seconds: u32,
    /// Active phase.
    pub phase: Phase,
    /// Seconds until the next phase boundary.
    pub remaining: u32,
    /// Value sent to the digit display.
    pub display: DisplayValue,
    /// Buzzer directive evaluated for this poll.
    pub buzzer: BuzzerDirective,
    /// Buzzer state after the directive was applied.
    pub buzzer_on: bool,
}

/// Drives a three-phase traffic signal from a monotonic time source.
///
/// Each call to [`poll`](Self::poll) is one iteration of the control loop:
/// credit at most one second, derive phase, countdown and buzzer directive,
/// then write every output. [`run`](Self::run) wraps this in a loop that stops
/// on a flag. Outputs are blanked by [`shutdown`](Self::shutdown), which also
/// runs when the controller is dropped.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `O` - Output driver implementation type
pub struct TrafficController<'t, I: TimeInstant, T: TimeSource<I>, O: SignalOutputs> {
    outputs: O,
    time_source: &'t T,
    config: CycleConfig,
    clock: ClockState<I>,
    frame: SignalFrame,
    shut_down: bool,
}

impl<'t, I: TimeInstant, T: TimeSource<I>, O: SignalOutputs> TrafficController<'t, I, T, O> {
    /// Creates a controller at the start of a green phase.
    ///
    /// Nothing is written to the outputs until the first poll.
    pub fn new(config: CycleConfig, outputs: O, time_source: &'t T) -> Self {
        let clock = ClockState::new(time_source.now());

        let frame = SignalFrame {
            ticked: false,
            elapsed_seconds: 0,
            phase: config.phase(0),
            remaining: config.remaining(0),
            display: config.display_value(0),
            buzzer: BuzzerDirective::Off,
            buzzer_on: outputs.is_buzzer_on(),
        };

        #[cfg(feature = "defmt")]
        {
            defmt::info!("signal timing: {=str}", config.summary().as_str());
            defmt::info!("phase {} for {=u32}s", frame.phase, frame.remaining);
        }

        Self {
            outputs,
            time_source,
            config,
            clock,
            frame,
            shut_down: false,
        }
    }

    /// Runs one control loop iteration and returns what was rendered.
    ///
    /// Never blocks. After [`shutdown`](Self::shutdown) this is a no-op that
    /// returns the last rendered frame.
    pub fn poll(&mut self) -> SignalFrame {
        if self.shut_down {
            return self.frame;
        }

        let now = self.time_source.now();
        let ticked = self.clock.advance(now, &self.config);
        let elapsed = self.clock.elapsed_seconds();
        let phase = self.config.phase(elapsed);
        let remaining = self.config.remaining(elapsed);
        let display = DisplayValue::from_remaining(remaining);
        let buzzer = self.clock.step_buzzer(now, &self.config);

        #[cfg(feature = "defmt")]
        if ticked {
            defmt::debug!("tick {=u32}", elapsed);
            if phase != self.frame.phase {
                defmt::info!("phase {} for {=u32}s", phase, remaining);
            }
        }

        for lamp in Phase::ALL {
            self.outputs.set_indicator(lamp, lamp == phase);
        }

        let buzzer_on = buzzer.resolve(self.outputs.is_buzzer_on());
        if buzzer != BuzzerDirective::Hold {
            self.outputs.set_buzzer(buzzer_on);
        }

        self.outputs.show_digit(display);

        self.frame = SignalFrame {
            ticked,
            elapsed_seconds: elapsed,
            phase,
            remaining,
            display,
            buzzer,
            buzzer_on,
        };
        self.frame
    }

    /// Polls until `stop` is set, then shuts the outputs down.
    ///
    /// `pause` is called after every poll and should yield briefly (a short
    /// fixed sleep or wait-for-interrupt). It bounds CPU use only; timing comes
    /// from the time source, not from how long `pause` takes.
    pub fn run<F: FnMut()>(&mut self, stop: &AtomicBool, mut pause: F) {
        while !stop.load(Ordering::Acquire) {
            self.poll();
            pause();
        }

        self.shutdown();
    }

    /// Turns every indicator off, silences the buzzer and blanks the display.
    ///
    /// Issued in that order. Once all of them return, later calls do nothing.
    /// If a driver panics part way through, the controller is not marked shut
    /// down, so the drop guard issues the full sequence again while unwinding.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }

        for lamp in Phase::ALL {
            self.outputs.set_indicator(lamp, false);
        }
        self.outputs.set_buzzer(false);
        self.outputs.show_digit(DisplayValue::Blank);

        self.frame.display = DisplayValue::Blank;
        self.frame.buzzer = BuzzerDirective::Off;
        self.frame.buzzer_on = false;
        self.shut_down = true;

        #[cfg(feature = "defmt")]
        defmt::info!("signal stopped");
    }

    /// Returns true once [`shutdown`](Self::shutdown) has run.
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Returns the frame rendered by the last poll.
    pub fn frame(&self) -> SignalFrame {
        self.frame
    }

    /// Returns the active phase.
    pub fn phase(&self) -> Phase {
        self.config.phase(self.clock.elapsed_seconds())
    }

    /// Returns the seconds until the next phase boundary.
    pub fn remaining(&self) -> u32 {
        self.config.remaining(self.clock.elapsed_seconds())
    }

    /// Returns the milliseconds until the next tick is due.
    pub fn millis_until_tick(&self) -> u64 {
        self.clock.millis_until_tick(self.time_source.now())
    }

    /// Returns the cycle clock.
    pub fn clock(&self) -> &ClockState<I> {
        &self.clock
    }

    /// Returns the cycle configuration.
    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    /// Returns the output drivers.
    pub fn outputs(&self) -> &O {
        &self.outputs
    }
}

impl<I: TimeInstant, T: TimeSource<I>, O: SignalOutputs> Drop for TrafficController<'_, I, T, O> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
