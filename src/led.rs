//! Hardware abstraction for three-channel indicator LEDs.
//!
//! [`RgbLed`] is the only interface the indicator needs. Two adapters over
//! `embedded-hal` are provided: [`DigitalRgbLed`] for LEDs on plain GPIO outputs
//! and [`PwmRgbLed`] for LEDs on PWM channels, which additionally implements
//! [`AnalogRgbLed`] for arbitrary channel levels.

use crate::types::{Channels, OnLevel};
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use palette::Srgb;

/// Trait for abstracting RGB LED hardware.
///
/// Implementations translate logical channel states into pin writes, taking
/// the wiring polarity into account. Handle any hardware errors internally -
/// this method cannot fail.
pub trait RgbLed {
    /// Switches each channel on or off.
    fn set_channels(&mut self, channels: Channels);

    /// Whether the hardware can also show arbitrary channel levels.
    fn pwm_capable(&self) -> bool {
        false
    }
}

/// LED hardware capable of continuous channel levels.
pub trait AnalogRgbLed: RgbLed {
    /// Sets each channel to a level in `0..=255`, where 255 is fully on.
    fn set_levels(&mut self, levels: Srgb<u8>);
}

/// RGB LED on three digital output pins.
///
/// Pins must already be configured as outputs by the board HAL. All channels
/// are switched off on construction.
pub struct DigitalRgbLed<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    red: R,
    green: G,
    blue: B,
    on_level: OnLevel,
}

impl<R, G, B> DigitalRgbLed<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    /// Create a new digital RGB LED
    ///
    /// # Arguments
    /// * `red` - output pin driving the red channel
    /// * `green` - output pin driving the green channel
    /// * `blue` - output pin driving the blue channel
    /// * `on_level` - pin level that lights a channel
    pub fn new(red: R, green: G, blue: B, on_level: OnLevel) -> Self {
        let mut led = Self {
            red,
            green,
            blue,
            on_level,
        };
        led.set_channels(Channels::OFF);
        led
    }

    /// Shorthand for a common-anode LED (channels on when low).
    pub fn common_anode(red: R, green: G, blue: B) -> Self {
        Self::new(red, green, blue, OnLevel::COMMON_ANODE)
    }

    /// Shorthand for a common-cathode LED (channels on when high).
    pub fn common_cathode(red: R, green: G, blue: B) -> Self {
        Self::new(red, green, blue, OnLevel::COMMON_CATHODE)
    }

    pub fn on_level(&self) -> OnLevel {
        self.on_level
    }

    /// Releases the pins.
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }

    fn write<P: OutputPin>(pin: &mut P, high: bool) {
        let _ = pin.set_state(high.into());
    }
}

impl<R, G, B> RgbLed for DigitalRgbLed<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    fn set_channels(&mut self, channels: Channels) {
        let on_level = self.on_level;
        Self::write(&mut self.red, on_level.pin_level(channels.red));
        Self::write(&mut self.green, on_level.pin_level(channels.green));
        Self::write(&mut self.blue, on_level.pin_level(channels.blue));
    }
}

/// RGB LED on three PWM channels.
///
/// Handles common anode inversion automatically. All channels are switched
/// off on construction.
pub struct PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    red: R,
    green: G,
    blue: B,
    on_level: OnLevel,
}

impl<R, G, B> PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    /// Create a new PWM RGB LED
    ///
    /// # Arguments
    /// * `red` - PWM channel for red LED
    /// * `green` - PWM channel for green LED
    /// * `blue` - PWM channel for blue LED
    /// * `on_level` - `OnLevel::Low` for common anode (inverted duty), `OnLevel::High` for common cathode
    pub fn new(red: R, green: G, blue: B, on_level: OnLevel) -> Self {
        let mut led = Self {
            red,
            green,
            blue,
            on_level,
        };
        led.set_channels(Channels::OFF);
        led
    }

    pub fn on_level(&self) -> OnLevel {
        self.on_level
    }

    /// Releases the PWM channels.
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }

    /// Converts an 8-bit level into the fraction of the period the pin is high.
    fn duty_numerator(on_level: OnLevel, level: u8) -> u16 {
        match on_level {
            OnLevel::High => level as u16,
            OnLevel::Low => (u8::MAX - level) as u16,
        }
    }

    fn write_level<P: SetDutyCycle>(pin: &mut P, on_level: OnLevel, level: u8) {
        let numerator = Self::duty_numerator(on_level, level);
        let _ = pin.set_duty_cycle_fraction(numerator, u8::MAX as u16);
    }
}

impl<R, G, B> RgbLed for PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn set_channels(&mut self, channels: Channels) {
        let full = |on: bool| if on { u8::MAX } else { 0 };
        self.set_levels(Srgb::new(
            full(channels.red),
            full(channels.green),
            full(channels.blue),
        ));
    }

    fn pwm_capable(&self) -> bool {
        true
    }
}

impl<R, G, B> AnalogRgbLed for PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn set_levels(&mut self, levels: Srgb<u8>) {
        let on_level = self.on_level;
        Self::write_level(&mut self.red, on_level, levels.red);
        Self::write_level(&mut self.green, on_level, levels.green);
        Self::write_level(&mut self.blue, on_level, levels.blue);
    }
}
