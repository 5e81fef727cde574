//! Interval arithmetic for ray parameter ranges.
//!
//! Provides the range of acceptable hit times while the nearest hit is being
//! resolved, and the closed ranges barycentric coordinates must fall in.

/// Interval between `min` and `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f32,
    /// Maximum value of the interval
    pub max: f32,
}

impl Interval {
    /// Hit times in front of the ray origin, with nothing hit yet.
    pub const FORWARD: Interval = Interval {
        min: 0.0,
        max: f32::INFINITY,
    };

    /// The closed unit interval [0, 1].
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    /// Create a new interval with given min and max values
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Check if the interval contains the given value (inclusive bounds)
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Check if a hit time is acceptable: at least `min` and strictly below `max`.
    ///
    /// The strict upper bound means a candidate only replaces the current
    /// nearest hit when it is closer. NaN is never accepted.
    pub fn accepts(&self, t: f32) -> bool {
        self.min <= t && t < self.max
    }

    /// Same interval, with the upper bound pulled in to `max`.
    pub fn closer_than(&self, max: f32) -> Self {
        Self::new(self.min, max)
    }
}
