//! Output driver traits.
//!
//! Implement these for your hardware (GPIO, shift registers, PWM, a terminal
//! renderer, ...). Driver methods cannot fail: handle hardware errors inside
//! the implementation. The controller never lets a driver call affect cycle
//! timing, and shutdown always issues every blanking call.

use crate::types::{DisplayValue, Phase};

/// The three signal lamps.
pub trait Indicators {
    /// Switches the lamp for `which` on or off.
    fn set_indicator(&mut self, which: Phase, on: bool);
}

/// The audible signal.
pub trait Buzzer {
    /// Switches the buzzer on or off.
    fn set_buzzer(&mut self, on: bool);

    /// Returns whether the buzzer is currently on.
    ///
    /// Needed to resolve [`BuzzerDirective::Toggle`](crate::BuzzerDirective::Toggle).
    fn is_buzzer_on(&self) -> bool;
}

/// Single-digit countdown display.
///
/// Segment encoding is the implementation's concern; the controller only
/// passes digits `0..=9` or [`DisplayValue::Blank`].
pub trait DigitDisplay {
    /// Shows `value`.
    fn show_digit(&mut self, value: DisplayValue);
}

/// Everything a [`TrafficController`](crate::TrafficController) drives.
///
/// Blanket-implemented for any type implementing all three driver traits.
pub trait SignalOutputs: Indicators + Buzzer + DigitDisplay {}

impl<T: Indicators + Buzzer + DigitDisplay> SignalOutputs for T {}

impl<T: Indicators + ?Sized> Indicators for &mut T {
    #[inline]
    fn set_indicator(&mut self, which: Phase, on: bool) {
        T::set_indicator(self, which, on);
    }
}

impl<T: Buzzer + ?Sized> Buzzer for &mut T {
    #[inline]
    fn set_buzzer(&mut self, on: bool) {
        T::set_buzzer(self, on);
    }

    #[inline]
    fn is_buzzer_on(&self) -> bool {
        T::is_buzzer_on(self)
    }
}

impl<T: DigitDisplay + ?Sized> DigitDisplay for &mut T {
    #[inline]
    fn show_digit(&mut self, value: DisplayValue) {
        T::show_digit(self, value);
    }
}

/// Combines three independent drivers into one [`SignalOutputs`].
#[derive(Debug)]
pub struct SplitOutputs<L, B, D> {
    /// Lamp driver.
    pub indicators: L,
    /// Buzzer driver.
    pub buzzer: B,
    /// Display driver.
    pub display: D,
}

impl<L, B, D> SplitOutputs<L, B, D> {
    /// Creates a combined driver.
    pub fn new(indicators: L, buzzer: B, display: D) -> Self {
        Self {
            indicators,
            buzzer,
            display,
        }
    }

    /// Splits back into the individual drivers.
    pub fn into_parts(self) -> (L, B, D) {
        (self.indicators, self.buzzer, self.display)
    }
}

impl<L: Indicators, B, D> Indicators for SplitOutputs<L, B, D> {
    #[inline]
    fn set_indicator(&mut self, which: Phase, on: bool) {
        self.indicators.set_indicator(which, on);
    }
}

impl<L, B: Buzzer, D> Buzzer for SplitOutputs<L, B, D> {
    #[inline]
    fn set_buzzer(&mut self, on: bool) {
        self.buzzer.set_buzzer(on);
    }

    #[inline]
    fn is_buzzer_on(&self) -> bool {
        self.buzzer.is_buzzer_on()
    }
}

impl<L, B, D: DigitDisplay> DigitDisplay for SplitOutputs<L, B, D> {
    #[inline]
    fn show_digit(&mut self, value: DisplayValue) {
        self.display.show_digit(value);
    }
}
