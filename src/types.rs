//! Core types shared by the color model, LED adapters and the indicator.

/// Logic level that energizes an LED channel.
///
/// Determined by wiring: a common-cathode LED lights a channel when its pin is
/// driven high, a common-anode LED when its pin is driven low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OnLevel {
    /// Channel is on when the pin is high (common cathode).
    High,

    /// Channel is on when the pin is low (common anode).
    Low,
}

impl OnLevel {
    /// Polarity of a common-anode LED.
    pub const COMMON_ANODE: Self = OnLevel::Low;

    /// Polarity of a common-cathode LED.
    pub const COMMON_CATHODE: Self = OnLevel::High;

    /// Returns the pin level (`true` = high) that puts a channel into the
    /// requested logical state.
    #[inline]
    pub fn pin_level(self, on: bool) -> bool {
        match self {
            OnLevel::High => on,
            OnLevel::Low => !on,
        }
    }
}

/// Per-channel on/off pattern of a discrete color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channels {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl Channels {
    /// All channels off.
    pub const OFF: Self = Channels::new(false, false, false);

    #[inline]
    pub const fn new(red: bool, green: bool, blue: bool) -> Self {
        Self { red, green, blue }
    }
}

/// Timing of the blocking animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WheelTiming {
    /// Pause between successive colors of a traversal.
    pub step_delay_ms: u32,

    /// How long the self test holds each color, also the length of its closing pulse.
    pub self_test_hold_ms: u32,
}

impl WheelTiming {
    /// Default pause between traversal steps, about two seconds per full rotation.
    pub const DEFAULT_STEP_DELAY_MS: u32 = 334;

    /// Default hold time for each color of the self test.
    pub const DEFAULT_SELF_TEST_HOLD_MS: u32 = 2000;

    pub const fn new() -> Self {
        Self {
            step_delay_ms: Self::DEFAULT_STEP_DELAY_MS,
            self_test_hold_ms: Self::DEFAULT_SELF_TEST_HOLD_MS,
        }
    }

    /// Sets the pause between traversal steps.
    pub const fn step_delay_ms(mut self, millis: u32) -> Self {
        self.step_delay_ms = millis;
        self
    }

    /// Sets the self test hold time.
    pub const fn self_test_hold_ms(mut self, millis: u32) -> Self {
        self.self_test_hold_ms = millis;
        self
    }
}

impl Default for WheelTiming {
    fn default() -> Self {
        Self::new()
    }
}

/// Color conversion errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorError {
    /// Bit pattern outside the eight recognized colors.
    OutOfRange(u8),
}

impl core::fmt::Display for ColorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ColorError::OutOfRange(bits) => {
                write!(
                    f,
                    "color bits {:#04x} are outside the recognized set (0x00-0x07)",
                    bits
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ColorError {}
