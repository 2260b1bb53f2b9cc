//! Color sequences produced by wheel animations.
//!
//! These are pure computations: [`WheelWalk`] yields the colors a traversal
//! applies and [`PulseBudget`] splits a pulse duration into per-step pauses.
//! [`RgbIndicator`](crate::RgbIndicator) drives the LED from them.

use crate::color::{Color, LIT_COLOR_COUNT};
use heapless::Vec;

/// Longest possible traversal, counting the start color.
pub const WALK_CAPACITY: usize = 7;

/// Iterator over the colors applied when moving from one color to another.
///
/// The first item is always the start color. Each following item is the next
/// color on the wheel, and the walk ends with the item equal to the target.
///
/// - A target of white is reached by substituting white for yellow.
/// - A start of white leaves through yellow.
/// - A target of `None` is off the wheel and is applied directly after the start.
#[derive(Debug, Clone)]
pub struct WheelWalk {
    current: Color,
    target: Color,
    started: bool,
    finished: bool,
}

impl WheelWalk {
    pub fn new(start: Color, target: Color) -> Self {
        Self {
            current: start,
            target,
            started: false,
            finished: false,
        }
    }

    /// Color of the step after `color` when heading for this walk's target.
    fn step_from(&self, color: Color) -> Color {
        if self.target == Color::None {
            return Color::None;
        }

        match color.next() {
            Color::Yellow if self.target == Color::White => Color::White,
            next => next,
        }
    }
}

impl Iterator for WheelWalk {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        if self.finished {
            return None;
        }

        let color = if self.started {
            self.step_from(self.current)
        } else {
            self.started = true;
            self.current
        };

        self.current = color;
        self.finished = color == self.target;
        Some(color)
    }
}

impl core::iter::FusedIterator for WheelWalk {}

/// Returns every color a traversal from `start` to `target` applies, in order.
pub fn plan(start: Color, target: Color) -> Vec<Color, WALK_CAPACITY> {
    WheelWalk::new(start, target).collect()
}

/// Split of a pulse duration into equal step pauses plus a remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseBudget {
    /// Pause after each of the pulse steps.
    pub per_step_ms: u32,

    /// Extra pause absorbing the truncation of the division.
    pub remainder_ms: u32,
}

impl PulseBudget {
    /// Number of steps in a pulse.
    pub const STEPS: u32 = LIT_COLOR_COUNT;

    /// Splits `total_ms` so that `per_step_ms * STEPS + remainder_ms == total_ms`.
    pub const fn split(total_ms: u32) -> Self {
        let per_step_ms = total_ms / Self::STEPS;
        Self {
            per_step_ms,
            remainder_ms: total_ms - per_step_ms * Self::STEPS,
        }
    }

    /// Sum of all pauses.
    pub const fn total_ms(&self) -> u32 {
        self.per_step_ms * Self::STEPS + self.remainder_ms
    }
}
