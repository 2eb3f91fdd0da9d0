//! Angles and rotation in the clockwise-positive (screen-space) convention.
//!
//! - `angle()` is `atan2(-y, x)`: turning from +X toward -Y is positive.
//! - `rotate(θ)` turns by `θ` in the same sense, so
//!   `other.rotated(v.angle_from(other))` points along `v`.

use super::Vec2;
use std::f64::consts::{PI, TAU};

/// Fold an angle difference in `(-2π, 2π)` back into `[-π, π]`.
///
/// Exactly `-π` is kept as-is, which puts the branch cut where `angle()` puts
/// it for vectors along -X.
#[inline]
pub(crate) fn wrap_angle(a: f64) -> f64 {
    if a > PI {
        a - TAU
    } else if a < -PI {
        a + TAU
    } else {
        a
    }
}

impl Vec2 {
    /// Angle to the positive X axis in radians, clockwise-positive.
    ///
    /// Along -X (with `y == 0.0`) this returns `-π`. The zero vector
    /// returns `0.0` (or `-0.0`), following `atan2`.
    #[inline]
    pub fn angle(self) -> f64 {
        (-self.y).atan2(self.x)
    }

    /// Signed angle by which `other` must be rotated to point along `self`.
    #[inline]
    pub fn angle_from(self, other: Vec2) -> f64 {
        wrap_angle(self.angle() - other.angle())
    }

    /// Rotated by `radians`, clockwise-positive.
    #[inline]
    pub fn rotated(self, radians: f64) -> Vec2 {
        let (sin, cos) = radians.sin_cos();
        Vec2::new(
            self.x * cos + self.y * sin,
            -self.x * sin + self.y * cos,
        )
    }

    #[inline]
    pub fn rotate(&mut self, radians: f64) {
        *self = self.rotated(radians);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_angle_folds_into_range() {
        assert_eq!(wrap_angle(0.25), 0.25);
        assert!((wrap_angle(1.5 * PI) + 0.5 * PI).abs() < 1e-12);
        assert!((wrap_angle(-1.5 * PI) - 0.5 * PI).abs() < 1e-12);
        assert_eq!(wrap_angle(-PI), -PI);
        assert_eq!(wrap_angle(PI), PI);
    }
}
