//! Command-based control for indicators.

use crate::color::Color;

/// Actions for controlling an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorAction {
    /// Show a color immediately.
    Set(Color),
    /// Turn all channels off.
    Off,
    /// Animate from one color to another.
    Traverse { from: Color, to: Color },
    /// Animate from the current color to another.
    TraverseTo(Color),
    /// Cycle the wheel once within the given milliseconds, keeping the current color.
    Pulse(u32),
    /// Show every color, then pulse.
    SelfTest,
}

/// Command targeting a specific indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorCommand<Id> {
    pub led_id: Id,
    pub action: IndicatorAction,
}

impl<Id> IndicatorCommand<Id> {
    /// Creates command.
    pub fn new(led_id: Id, action: IndicatorAction) -> Self {
        Self { led_id, action }
    }
}
