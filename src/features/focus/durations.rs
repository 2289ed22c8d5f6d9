//! Bounded duration adjusters.

use serde::{Deserialize, Serialize};

/// Focus length bounds, in minutes.
pub const FOCUS_MIN: u32 = 5;
pub const FOCUS_MAX: u32 = 60;
pub const FOCUS_STEP: u32 = 5;
pub const FOCUS_DEFAULT: u32 = 25;

/// Break length bounds, in minutes.
pub const BREAK_MIN: u32 = 1;
pub const BREAK_MAX: u32 = 15;
pub const BREAK_STEP: u32 = 1;
pub const BREAK_DEFAULT: u32 = 5;

/// A minute count that can only move in fixed steps inside `[min, max]`.
///
/// Stepping past either bound clamps to it; stepping while already on the
/// bound leaves the value unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundedMinutes {
    value: u32,
    min: u32,
    max: u32,
    step: u32,
}

impl BoundedMinutes {
    /// Create an adjuster; `value` is clamped into range.
    #[must_use]
    pub fn new(value: u32, min: u32, max: u32, step: u32) -> Self {
        Self {
            value: value.clamp(min, max),
            min,
            max,
            step,
        }
    }

    /// Focus duration adjuster (5-60, step 5).
    #[must_use]
    pub fn focus(value: u32) -> Self {
        Self::new(value, FOCUS_MIN, FOCUS_MAX, FOCUS_STEP)
    }

    /// Break duration adjuster (1-15, step 1).
    #[must_use]
    pub fn break_(value: u32) -> Self {
        Self::new(value, BREAK_MIN, BREAK_MAX, BREAK_STEP)
    }

    /// Current value in minutes.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.value
    }

    /// Replace the value, clamping into range.
    pub fn set(&mut self, value: u32) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Step up. Returns true if the value changed.
    pub fn increase(&mut self) -> bool {
        let before = self.value;
        self.value = self.value.saturating_add(self.step).min(self.max);
        self.value != before
    }

    /// Step down. Returns true if the value changed.
    pub fn decrease(&mut self) -> bool {
        let before = self.value;
        self.value = self.value.saturating_sub(self.step).max(self.min);
        self.value != before
    }

    /// Whether `value` lies inside this adjuster's bounds.
    #[must_use]
    pub const fn accepts(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Inclusive bounds.
    #[must_use]
    pub const fn bounds(&self) -> (u32, u32) {
        (self.min, self.max)
    }
}
