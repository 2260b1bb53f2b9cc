//! Discrete color model.
//!
//! Colors are an additive bitmask over three primaries: red (`0b001`), green
//! (`0b010`) and blue (`0b100`). Secondaries and white are unions of those bits,
//! giving a closed set of eight values.
//!
//! The color wheel visits the six primary and secondary colors in an order
//! where each step flips exactly one channel:
//!
//! ```text
//! RED -> MAGENTA -> BLUE -> CYAN -> GREEN -> YELLOW -> RED
//! ```
//!
//! White is not on the wheel. Its successor is yellow, and traversals that end
//! on white reach it by substituting it for yellow.

use crate::types::{Channels, ColorError};
use palette::Srgb;

const RED_BIT: u8 = 0b001;
const GREEN_BIT: u8 = 0b010;
const BLUE_BIT: u8 = 0b100;

/// One of the eight discrete indicator colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Color {
    /// All channels off.
    #[default]
    None = 0,
    Red = RED_BIT,
    Green = GREEN_BIT,
    Yellow = RED_BIT | GREEN_BIT,
    Blue = BLUE_BIT,
    Magenta = RED_BIT | BLUE_BIT,
    Cyan = GREEN_BIT | BLUE_BIT,
    White = RED_BIT | GREEN_BIT | BLUE_BIT,
}

/// The six wheel colors in traversal order, starting at red.
pub const WHEEL: [Color; 6] = [
    Color::Red,
    Color::Magenta,
    Color::Blue,
    Color::Cyan,
    Color::Green,
    Color::Yellow,
];

/// Number of lit colors: the wheel plus white.
pub const LIT_COLOR_COUNT: u32 = 7;

impl Color {
    /// Returns the raw bitmask.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Converts a bitmask, returning `None` for bits outside `0b111`.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Color::None),
            1 => Some(Color::Red),
            2 => Some(Color::Green),
            3 => Some(Color::Yellow),
            4 => Some(Color::Blue),
            5 => Some(Color::Magenta),
            6 => Some(Color::Cyan),
            7 => Some(Color::White),
            _ => None,
        }
    }

    /// Converts a bitmask, clamping anything outside the recognized set to white.
    pub const fn from_bits_clamped(bits: u8) -> Self {
        match Self::from_bits(bits) {
            Some(color) => color,
            None => Color::White,
        }
    }

    /// Builds the color whose lit channels match `channels`.
    pub const fn from_channels(channels: Channels) -> Self {
        let mut bits = 0;
        if channels.red {
            bits |= RED_BIT;
        }
        if channels.green {
            bits |= GREEN_BIT;
        }
        if channels.blue {
            bits |= BLUE_BIT;
        }
        Self::from_bits_clamped(bits)
    }

    /// Nearest discrete color for analog levels: every non-zero channel counts as lit.
    pub fn from_levels(levels: Srgb<u8>) -> Self {
        Self::from_channels(Channels::new(
            levels.red > 0,
            levels.green > 0,
            levels.blue > 0,
        ))
    }

    /// Decomposes the color into per-channel on/off states.
    #[inline]
    pub const fn channels(self) -> Channels {
        let bits = self.bits();
        Channels::new(
            bits & RED_BIT != 0,
            bits & GREEN_BIT != 0,
            bits & BLUE_BIT != 0,
        )
    }

    /// Returns the next color on the wheel.
    ///
    /// White leads to yellow and `None` enters the wheel at red, so every
    /// color has exactly one successor.
    pub const fn next(self) -> Self {
        match self {
            Color::Red => Color::Magenta,
            Color::Magenta => Color::Blue,
            Color::Blue => Color::Cyan,
            Color::Cyan => Color::Green,
            Color::Green => Color::Yellow,
            Color::Yellow => Color::Red,
            Color::White => Color::Yellow,
            Color::None => Color::Red,
        }
    }

    /// Whether this color is one of the six wheel colors.
    pub const fn is_on_wheel(self) -> bool {
        !matches!(self, Color::None | Color::White)
    }

    /// Full-scale 8-bit channel levels.
    pub const fn levels(self) -> Srgb<u8> {
        let channels = self.channels();
        Srgb::new(
            if channels.red { u8::MAX } else { 0 },
            if channels.green { u8::MAX } else { 0 },
            if channels.blue { u8::MAX } else { 0 },
        )
    }
}

/// Decomposes `color` into per-channel on/off states.
#[inline]
pub const fn decompose(color: Color) -> Channels {
    color.channels()
}

/// Returns the color following `color` on the wheel.
#[inline]
pub const fn next(color: Color) -> Color {
    color.next()
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color.bits()
    }
}

impl TryFrom<u8> for Color {
    type Error = ColorError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Color::from_bits(bits).ok_or(ColorError::OutOfRange(bits))
    }
}

impl From<Channels> for Color {
    fn from(channels: Channels) -> Self {
        Color::from_channels(channels)
    }
}

impl From<Color> for Channels {
    fn from(color: Color) -> Self {
        color.channels()
    }
}

impl From<Color> for Srgb {
    fn from(color: Color) -> Self {
        let channels = color.channels();
        Srgb::new(
            if channels.red { 1.0 } else { 0.0 },
            if channels.green { 1.0 } else { 0.0 },
            if channels.blue { 1.0 } else { 0.0 },
        )
    }
}
