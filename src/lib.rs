#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Color`**: One of eight discrete colors, an additive bitmask over red, green and blue
//! - **`WHEEL`**: The fixed animation order `RED -> MAGENTA -> BLUE -> CYAN -> GREEN -> YELLOW`
//! - **`WheelWalk`**: The colors a traversal visits, computed without touching hardware
//! - **`PulseBudget`**: How a pulse duration is split into equal step pauses plus a remainder
//! - **`RgbIndicator`**: Drives one LED through discrete colors, traversals and pulses
//! - **`RgbLed`**: Trait to implement for your LED hardware
//! - **`DigitalRgbLed`** / **`PwmRgbLed`**: Ready-made `embedded-hal` adapters
//! - **`OnLevel`**: Wiring polarity (common anode or common cathode)
//! - **`IndicatorAction`**: Commands that can be sent to control indicators
//!
//! Animations block on an `embedded_hal::delay::DelayNs` provider owned by the
//! indicator.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod color;
pub mod command;
pub mod indicator;
pub mod led;
pub mod types;
pub mod walk;

pub use color::{Color, LIT_COLOR_COUNT, WHEEL};
pub use command::{IndicatorAction, IndicatorCommand};
pub use indicator::{RgbIndicator, SELF_TEST_ORDER};
pub use led::{AnalogRgbLed, DigitalRgbLed, PwmRgbLed, RgbLed};
pub use types::{Channels, ColorError, OnLevel, WheelTiming};
pub use walk::{PulseBudget, WALK_CAPACITY, WheelWalk};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_shorthands() {
        assert_eq!(OnLevel::COMMON_ANODE, OnLevel::Low);
        assert_eq!(OnLevel::COMMON_CATHODE, OnLevel::High);
        assert!(OnLevel::Low.pin_level(false));
        assert!(!OnLevel::Low.pin_level(true));
        assert!(OnLevel::High.pin_level(true));
    }
}
