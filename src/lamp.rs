//! Single RGB lamp signal head.
//!
//! Renders the three indicators as colours on one RGB LED, for boards that
//! have an RGB LED instead of three discrete lamps.

use crate::output::Indicators;
use crate::types::Phase;
use palette::Srgb;

/// Lamp off.
pub const COLOR_OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);
/// Green signal colour.
pub const COLOR_GREEN: Srgb = Srgb::new(0.0, 1.0, 0.0);
/// Amber signal colour.
pub const COLOR_YELLOW: Srgb = Srgb::new(1.0, 0.75, 0.0);
/// Red signal colour.
pub const COLOR_RED: Srgb = Srgb::new(1.0, 0.0, 0.0);

impl Phase {
    /// Signal colour for this phase.
    #[inline]
    pub fn color(self) -> Srgb {
        match self {
            Phase::Green => COLOR_GREEN,
            Phase::Yellow => COLOR_YELLOW,
            Phase::Red => COLOR_RED,
        }
    }
}

/// Trait for abstracting RGB LED hardware.
pub trait RgbLamp {
    /// Sets the LED to the specified RGB color.
    ///
    /// Color components are in the range 0.0-1.0. Implementations should
    /// convert these to their hardware's native format (e.g., PWM duty cycles,
    /// 8-bit RGB values). Handle any hardware errors internally - this method
    /// cannot fail.
    fn set_color(&mut self, color: Srgb);
}

/// [`Indicators`] implementation that shows the lit phase's colour on one lamp.
///
/// Tracks which phase is lit so that switching a phase off only darkens the
/// lamp when that phase is the one being shown. The lamp is written only when
/// its colour actually changes.
pub struct LampIndicators<L: RgbLamp> {
    lamp: L,
    lit: Option<Phase>,
}

impl<L: RgbLamp> LampIndicators<L> {
    /// Wraps `lamp` and turns it off.
    pub fn new(mut lamp: L) -> Self {
        lamp.set_color(COLOR_OFF);
        Self { lamp, lit: None }
    }

    /// Phase currently shown, if any.
    pub fn lit(&self) -> Option<Phase> {
        self.lit
    }

    /// Colour currently shown.
    pub fn current_color(&self) -> Srgb {
        self.lit.map_or(COLOR_OFF, Phase::color)
    }

    /// Releases the wrapped lamp.
    pub fn into_inner(self) -> L {
        self.lamp
    }
}

impl<L: RgbLamp> Indicators for LampIndicators<L> {
    fn set_indicator(&mut self, which: Phase, on: bool) {
        let next = match (on, self.lit) {
            (true, _) => Some(which),
            (false, Some(lit)) if lit == which => None,
            (false, lit) => lit,
        };

        if next != self.lit {
            self.lit = next;
            self.lamp.set_color(self.current_color());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    struct MockLamp {
        color_history: Vec<Srgb, 16>,
    }

    impl RgbLamp for MockLamp {
        fn set_color(&mut self, color: Srgb) {
            let _ = self.color_history.push(color);
        }
    }

    fn lamp() -> LampIndicators<MockLamp> {
        LampIndicators::new(MockLamp {
            color_history: Vec::new(),
        })
    }

    #[test]
    fn new_turns_lamp_off() {
        let indicators = lamp();
        assert_eq!(indicators.lit(), None);
        assert_eq!(indicators.into_inner().color_history.as_slice(), &[COLOR_OFF]);
    }

    #[test]
    fn switching_other_phase_off_keeps_lit_color() {
        let mut indicators = lamp();
        indicators.set_indicator(Phase::Red, true);
        indicators.set_indicator(Phase::Green, false);
        indicators.set_indicator(Phase::Yellow, false);

        assert_eq!(indicators.lit(), Some(Phase::Red));
        assert_eq!(
            indicators.into_inner().color_history.as_slice(),
            &[COLOR_OFF, COLOR_RED]
        );
    }

    #[test]
    fn switching_lit_phase_off_darkens_lamp() {
        let mut indicators = lamp();
        indicators.set_indicator(Phase::Yellow, true);
        indicators.set_indicator(Phase::Yellow, false);

        assert_eq!(indicators.current_color(), COLOR_OFF);
        assert_eq!(
            indicators.into_inner().color_history.as_slice(),
            &[COLOR_OFF, COLOR_YELLOW, COLOR_OFF]
        );
    }
}
