//! Tolerance defaults (absolute, scale-agnostic).
//!
//! Policy
//! - Comparisons always take an explicit epsilon; these constants are the
//!   defaults used by `Vec2::approx_eq` and by the test suites. Callers working
//!   at very large or very small scales should pass their own.

/// Coordinate-wise tolerance for vector equality.
pub const EQ_EPS: f64 = 1e-10;
/// Tolerance for comparing angles in radians.
pub const ANGLE_EPS: f64 = 1e-10;
