//! Shared test infrastructure for rgb-indicator integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType as DigitalErrorType, OutputPin};
use embedded_hal::pwm::{ErrorType as PwmErrorType, SetDutyCycle};
use rgb_indicator::{Channels, Color, RgbIndicator, RgbLed};

// ============================================================================
// Mock LED
// ============================================================================

/// Mock LED that records every applied color
pub struct MockLed {
    history: heapless::Vec<Color, 64>,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            history: heapless::Vec::new(),
        }
    }

    /// All colors written, including the initial switch-off
    pub fn history(&self) -> &[Color] {
        &self.history
    }

    /// Colors written after construction
    pub fn applied(&self) -> &[Color] {
        &self.history[1..]
    }
}

impl RgbLed for MockLed {
    fn set_channels(&mut self, channels: Channels) {
        let _ = self.history.push(Color::from_channels(channels));
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Mock delay that records each requested pause in milliseconds
pub struct MockDelay {
    pauses: heapless::Vec<u32, 64>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self {
            pauses: heapless::Vec::new(),
        }
    }

    pub fn pauses(&self) -> &[u32] {
        &self.pauses
    }

    pub fn total_ms(&self) -> u64 {
        self.pauses.iter().map(|&ms| ms as u64).sum()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        let _ = self.pauses.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        let _ = self.pauses.push(ms);
    }
}

pub fn mock_indicator() -> RgbIndicator<MockLed, MockDelay> {
    RgbIndicator::new(MockLed::new(), MockDelay::new())
}

// ============================================================================
// Mock Pins
// ============================================================================

/// Mock output pin remembering its level and write count
#[derive(Debug, Default)]
pub struct MockPin {
    pub high: Option<bool>,
    pub writes: u32,
}

impl DigitalErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = Some(false);
        self.writes += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = Some(true);
        self.writes += 1;
        Ok(())
    }
}

/// Mock PWM channel with a 0-1000 duty range
#[derive(Debug, Default)]
pub struct MockPwm {
    pub duty: u16,
}

impl MockPwm {
    pub const MAX_DUTY: u16 = 1000;
}

impl PwmErrorType for MockPwm {
    type Error = Infallible;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        Self::MAX_DUTY
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty = duty;
        Ok(())
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub const ALL_COLORS: [Color; 8] = [
    Color::None,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];
