//! Blocking RGB status indicator.
//!
//! Provides [`RgbIndicator`], which owns an LED and a delay provider and
//! animates the LED around the color wheel. Every animation blocks the caller
//! for its whole duration; there is no background work and no cancellation.

use crate::color::Color;
use crate::command::IndicatorAction;
use crate::led::{AnalogRgbLed, RgbLed};
use crate::types::{Channels, WheelTiming};
use crate::walk::{PulseBudget, WheelWalk};
use embedded_hal::delay::DelayNs;
use palette::Srgb;

/// Order in which [`RgbIndicator::self_test`] shows the lit colors.
pub const SELF_TEST_ORDER: [Color; 7] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Cyan,
    Color::Magenta,
    Color::White,
];

/// A single RGB indicator LED and the color it currently shows.
///
/// The current color changes only through the methods of this type, so it
/// always matches what was last written to the hardware.
///
/// # Type Parameters
/// * `L` - LED implementation type
/// * `D` - Blocking delay provider
pub struct RgbIndicator<L: RgbLed, D: DelayNs> {
    led: L,
    delay: D,
    timing: WheelTiming,
    current_color: Color,
}

impl<L: RgbLed, D: DelayNs> RgbIndicator<L, D> {
    /// Creates an indicator with default timing and the LED turned off.
    pub fn new(led: L, delay: D) -> Self {
        Self::with_timing(led, delay, WheelTiming::default())
    }

    /// Creates an indicator with custom timing and the LED turned off.
    pub fn with_timing(mut led: L, delay: D, timing: WheelTiming) -> Self {
        led.set_channels(Channels::OFF);

        Self {
            led,
            delay,
            timing,
            current_color: Color::None,
        }
    }

    /// Handles an indicator action by dispatching to the appropriate method.
    pub fn handle_action(&mut self, action: IndicatorAction) {
        match action {
            IndicatorAction::Set(color) => self.apply_color(color),
            IndicatorAction::Off => self.off(),
            IndicatorAction::Traverse { from, to } => self.traverse(from, to),
            IndicatorAction::TraverseTo(target) => self.traverse_to(target),
            IndicatorAction::Pulse(total_ms) => self.pulse_cycle(total_ms),
            IndicatorAction::SelfTest => self.self_test(),
        }
    }

    /// Shows `color` immediately, without animation.
    pub fn apply_color(&mut self, color: Color) {
        #[cfg(feature = "defmt")]
        defmt::trace!("indicator: apply {}", color);

        self.led.set_channels(color.channels());
        self.current_color = color;
    }

    /// Turns all channels off.
    pub fn off(&mut self) {
        self.apply_color(Color::None);
    }

    /// Animates from `start` to `target` along the wheel.
    ///
    /// `start` is shown immediately, then each following color after a pause of
    /// `step_delay_ms`. Ends as soon as `target` is shown. When `start` equals
    /// `target` the color is applied once and nothing else happens. See
    /// [`WheelWalk`] for the white and `None` rules.
    pub fn traverse(&mut self, start: Color, target: Color) {
        #[cfg(feature = "defmt")]
        defmt::debug!("indicator: traverse {} -> {}", start, target);

        for (index, color) in WheelWalk::new(start, target).enumerate() {
            if index > 0 {
                self.delay.delay_ms(self.timing.step_delay_ms);
            }
            self.apply_color(color);
        }
    }

    /// Animates from the current color to `target`.
    pub fn traverse_to(&mut self, target: Color) {
        self.traverse(self.current_color, target);
    }

    /// Cycles once around the wheel within `total_ms`, then restores the current color.
    ///
    /// Applies seven successive wheel steps, each followed by an equal share of
    /// `total_ms`, then pauses for whatever the integer division left over.
    /// The pauses always add up to exactly `total_ms`.
    pub fn pulse_cycle(&mut self, total_ms: u32) {
        let saved = self.current_color;
        let budget = PulseBudget::split(total_ms);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "indicator: pulse {}ms from {} ({}ms per step, {}ms remainder)",
            total_ms,
            saved,
            budget.per_step_ms,
            budget.remainder_ms
        );

        for _ in 0..PulseBudget::STEPS {
            let next = self.current_color.next();
            self.apply_color(next);
            self.delay.delay_ms(budget.per_step_ms);
        }
        self.delay.delay_ms(budget.remainder_ms);

        self.apply_color(saved);
    }

    /// Shows every lit color in turn, then pulses once.
    ///
    /// Each color of [`SELF_TEST_ORDER`] is held for `self_test_hold_ms`, and the
    /// closing pulse lasts `self_test_hold_ms` as well. Ends on white.
    pub fn self_test(&mut self) {
        let hold_ms = self.timing.self_test_hold_ms;
        for color in SELF_TEST_ORDER {
            self.apply_color(color);
            self.delay.delay_ms(hold_ms);
        }
        self.pulse_cycle(hold_ms);
    }

    /// Returns the color currently shown.
    pub fn current_color(&self) -> Color {
        self.current_color
    }

    /// Returns the animation timing.
    pub fn timing(&self) -> WheelTiming {
        self.timing
    }

    /// Replaces the animation timing.
    pub fn set_timing(&mut self, timing: WheelTiming) {
        self.timing = timing;
    }

    /// Whether the LED can show analog channel levels.
    pub fn is_pwm_capable(&self) -> bool {
        self.led.pwm_capable()
    }

    /// Returns a reference to the LED.
    pub fn led(&self) -> &L {
        &self.led
    }

    /// Returns a reference to the delay provider.
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Releases the LED and delay provider.
    pub fn release(self) -> (L, D) {
        (self.led, self.delay)
    }
}

impl<L: AnalogRgbLed, D: DelayNs> RgbIndicator<L, D> {
    /// Sets raw channel levels.
    ///
    /// The current color becomes the discrete color made of every non-zero
    /// channel, so wheel animations continue from the nearest wheel position.
    pub fn set_rgb(&mut self, levels: Srgb<u8>) {
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "indicator: levels r={} g={} b={}",
            levels.red,
            levels.green,
            levels.blue
        );

        self.led.set_levels(levels);
        self.current_color = Color::from_levels(levels);
    }
}
