//! Core types with newtype pattern for type safety.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Comparison tolerance for time values, in seconds (one microsecond).
///
/// Region intersection tests compare millisecond-converted values; strict
/// equality there is fragile at sub-millisecond boundaries, so every
/// time-equality check in the engine goes through this tolerance instead.
pub const TIME_EPSILON_SECS: f64 = 1e-6;

/// Time code in seconds (f64 precision).
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct TimeCode(pub f64);

impl TimeCode {
    pub const ZERO: Self = Self(0.0);

    pub fn from_secs(secs: f64) -> Self {
        Self(secs)
    }

    pub fn from_millis(millis: f64) -> Self {
        Self(millis / 1000.0)
    }

    pub fn as_secs(self) -> f64 {
        self.0
    }

    pub fn as_millis(self) -> f64 {
        self.0 * 1000.0
    }

    /// Equality within [`TIME_EPSILON_SECS`].
    pub fn approx_eq(self, other: Self) -> bool {
        (self.0 - other.0).abs() <= TIME_EPSILON_SECS
    }
}

impl Add for TimeCode {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for TimeCode {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_secs = self.0;
        let hours = (total_secs / 3600.0) as u32;
        let mins = ((total_secs % 3600.0) / 60.0) as u32;
        let secs = total_secs % 60.0;
        write!(f, "{hours:02}:{mins:02}:{secs:06.3}")
    }
}

/// A position in normalized frame space.
///
/// Both coordinates are nominally in `[0, 1]`. `y = 0` is the bottom of the
/// frame and `y = 1` the top — inverted relative to pixel space, where y
/// grows downward.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormPoint {
    pub x: f64,
    pub y: f64,
}

impl NormPoint {
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for NormPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

/// A 2-D offset in pixel units.
///
/// Produced by converting a pair of normalized positions; applied to motion
/// bounds in pixel space, where `dy` has already had the Y-axis inversion
/// baked in.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixelDelta {
    pub dx: f64,
    pub dy: f64,
}

impl PixelDelta {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// A position in pixel space (y grows downward from the frame's top edge).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translated(self, delta: PixelDelta) -> Self {
        Self {
            x: self.x + delta.dx,
            y: self.y + delta.dy,
        }
    }
}

/// Video/image resolution — the project canvas in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const HD: Self = Self {
        width: 1920,
        height: 1080,
    };
    pub const UHD: Self = Self {
        width: 3840,
        height: 2160,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timecode_millis_roundtrip() {
        let tc = TimeCode::from_millis(3250.0);
        assert!((tc.as_secs() - 3.25).abs() < 1e-12);
        assert!((tc.as_millis() - 3250.0).abs() < 1e-9);
    }

    #[test]
    fn timecode_arithmetic_stays_in_seconds() {
        let a = TimeCode::from_secs(5.0);
        let b = TimeCode::from_secs(2.0);
        assert!(((a - b).as_secs() - 3.0).abs() < 1e-12);
        assert!(((a + b).as_secs() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn timecode_approx_eq_tolerance() {
        let a = TimeCode::from_secs(1.0);
        assert!(a.approx_eq(TimeCode::from_secs(1.0 + 1e-7)));
        assert!(!a.approx_eq(TimeCode::from_secs(1.001)));
    }

    #[test]
    fn timecode_display() {
        let tc = TimeCode::from_secs(3661.5);
        assert_eq!(tc.to_string(), "01:01:01.500");
    }

    #[test]
    fn pixel_point_translation() {
        let p = PixelPoint::new(10.0, 20.0);
        let moved = p.translated(PixelDelta::new(5.0, -3.0));
        assert_eq!(moved, PixelPoint::new(15.0, 17.0));
    }

    #[test]
    fn resolution_display() {
        assert_eq!(Resolution::HD.to_string(), "1920x1080");
    }
}
