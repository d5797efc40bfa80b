//! Shared test infrastructure for traffic-sequencer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use heapless::Deque;
use traffic_sequencer::{
    Buzzer, DigitDisplay, DisplayValue, Indicators, Phase, TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

/// Mock 32-bit instant that wraps like a free-running hardware counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrappingInstant(pub u32);

impl TimeInstant for WrappingInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.wrapping_sub(earlier.0) as u64)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Outputs
// ============================================================================

/// One driver call, as seen by the mock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Indicator(Phase, bool),
    Buzzer(bool),
    Digit(DisplayValue),
}

const CALL_LOG: usize = 64;

/// Mock outputs that track current state and keep the most recent calls
pub struct MockOutputs {
    lamps: [bool; 3],
    buzzer: bool,
    display: Option<DisplayValue>,
    calls: Deque<Call, CALL_LOG>,
}

impl MockOutputs {
    pub fn new() -> Self {
        Self {
            lamps: [false; 3],
            buzzer: false,
            display: None,
            calls: Deque::new(),
        }
    }

    fn record(&mut self, call: Call) {
        if self.calls.is_full() {
            self.calls.pop_front();
        }
        let _ = self.calls.push_back(call);
    }

    pub fn lamp(&self, which: Phase) -> bool {
        self.lamps[which as usize]
    }

    /// Phases whose lamp is currently on
    pub fn lit_count(&self) -> usize {
        self.lamps.iter().filter(|on| **on).count()
    }

    pub fn buzzer(&self) -> bool {
        self.buzzer
    }

    pub fn display(&self) -> Option<DisplayValue> {
        self.display
    }

    /// The last `n` calls, oldest first
    pub fn last_calls(&self, n: usize) -> heapless::Vec<Call, CALL_LOG> {
        let skip = self.calls.len().saturating_sub(n);
        self.calls.iter().skip(skip).copied().collect()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Indicators for MockOutputs {
    fn set_indicator(&mut self, which: Phase, on: bool) {
        self.lamps[which as usize] = on;
        self.record(Call::Indicator(which, on));
    }
}

impl Buzzer for MockOutputs {
    fn set_buzzer(&mut self, on: bool) {
        self.buzzer = on;
        self.record(Call::Buzzer(on));
    }

    fn is_buzzer_on(&self) -> bool {
        self.buzzer
    }
}

impl DigitDisplay for MockOutputs {
    fn show_digit(&mut self, value: DisplayValue) {
        self.display = Some(value);
        self.record(Call::Digit(value));
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// The exact tail every shutdown must leave in the call log
pub const SHUTDOWN_CALLS: [Call; 5] = [
    Call::Indicator(Phase::Green, false),
    Call::Indicator(Phase::Yellow, false),
    Call::Indicator(Phase::Red, false),
    Call::Buzzer(false),
    Call::Digit(DisplayValue::Blank),
];
