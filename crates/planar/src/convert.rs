//! Conversions between `Vec2` and tuples, arrays and nalgebra types.

use crate::Vec2;
use nalgebra::{Point2, Vector2};

impl From<(f64, f64)> for Vec2 {
    #[inline]
    fn from(p: (f64, f64)) -> Self {
        Vec2::from_pair(p)
    }
}

impl From<Vec2> for (f64, f64) {
    #[inline]
    fn from(v: Vec2) -> Self {
        (v.x, v.y)
    }
}

impl From<[f64; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Vec2::new(x, y)
    }
}

impl From<Vec2> for [f64; 2] {
    #[inline]
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

impl From<Vector2<f64>> for Vec2 {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec2> for Vector2<f64> {
    #[inline]
    fn from(v: Vec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

/// Position vector of the point (its displacement from the origin).
impl From<Point2<f64>> for Vec2 {
    #[inline]
    fn from(p: Point2<f64>) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<Vec2> for Point2<f64> {
    #[inline]
    fn from(v: Vec2) -> Self {
        Point2::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{point, vector};

    #[test]
    fn nalgebra_roundtrip_preserves_coordinates() {
        let v = Vec2::new(1.5, -2.25);
        let n: Vector2<f64> = v.into();
        assert_eq!(n, vector![1.5, -2.25]);
        assert_eq!(Vec2::from(n), v);
        let p: Point2<f64> = v.into();
        assert_eq!(p, point![1.5, -2.25]);
        assert_eq!(Vec2::from(p), v);
    }

    #[test]
    fn tuple_and_array() {
        let f = || (1.0, 2.0);
        assert_eq!(Vec2::from(f()), Vec2::new(1.0, 2.0));
        let t: (f64, f64) = Vec2::new(3.0, 4.0).into();
        assert_eq!(t, (3.0, 4.0));
        assert_eq!(Vec2::from([5.0, -6.0]), Vec2::new(5.0, -6.0));
        let a: [f64; 2] = Vec2::new(5.0, -6.0).into();
        assert_eq!(a, [5.0, -6.0]);
    }
}
