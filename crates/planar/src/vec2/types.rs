use crate::cfg::EQ_EPS;
use std::ops::{AddAssign, DivAssign, MulAssign, Neg, SubAssign};

/// Point or displacement in the plane.
///
/// Invariants:
/// - Plain value, no shared state; copies are independent.
/// - Coordinates are expected finite. Nothing is enforced; non-finite inputs
///   propagate per IEEE 754.
/// - `==` compares coordinates exactly. Use `equals` for derived values.
///
/// No `Add`/`Sub`/`Mul`/`Div` impls: `v.add(w)` must resolve to the in-place
/// form, and `Add::add(self, ..)` would be picked first by method lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// The zero vector (no displacement, undefined direction).
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Vector from explicit coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build from an `(x, y)` pair, e.g. the result of a function returning
    /// two scalars.
    #[inline]
    pub fn from_pair((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }

    /// True iff both coordinate differences are within `epsilon`.
    #[inline]
    pub fn equals(self, other: Vec2, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }

    /// `equals` with the default tolerance `cfg::EQ_EPS`.
    #[inline]
    pub fn approx_eq(self, other: Vec2) -> bool {
        self.equals(other, EQ_EPS)
    }

    /// Exactly the zero vector (either sign of zero).
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    // ---- magnitude ----

    /// Euclidean norm. Computed with `hypot`, so it neither overflows for
    /// large nor underflows for tiny finite coordinates.
    #[inline]
    pub fn len(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Squared norm; cheaper than `len` for comparisons.
    #[inline]
    pub fn len2(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Distance to `other`; equals `self.minus(other).len()`.
    #[inline]
    pub fn dist(self, other: Vec2) -> f64 {
        self.minus(other).len()
    }

    /// Squared distance to `other`; equals `self.minus(other).len2()`.
    #[inline]
    pub fn dist2(self, other: Vec2) -> f64 {
        self.minus(other).len2()
    }

    // ---- length setting ----

    /// Same direction, length `|target|`; a negative target flips the
    /// direction. The zero vector stays zero for every target.
    #[inline]
    pub fn with_len(self, target: f64) -> Vec2 {
        let len = self.len();
        if len == 0.0 {
            return Vec2::ZERO;
        }
        self.divided_by(len).times(target)
    }

    /// In-place `with_len`.
    #[inline]
    pub fn set_len(&mut self, target: f64) {
        *self = self.with_len(target);
    }

    /// Unit vector in the same direction; zero stays zero.
    #[inline]
    pub fn normalized(self) -> Vec2 {
        self.with_len(1.0)
    }

    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    // ---- arithmetic ----

    #[inline]
    pub fn plus(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }

    /// In-place `plus`.
    #[inline]
    pub fn add(&mut self, other: Vec2) {
        *self = self.plus(other);
    }

    #[inline]
    pub fn minus(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    pub fn sub(&mut self, other: Vec2) {
        *self = self.minus(other);
    }

    #[inline]
    pub fn times(self, n: f64) -> Vec2 {
        Vec2::new(self.x * n, self.y * n)
    }

    /// In-place `times`.
    #[inline]
    pub fn mul(&mut self, n: f64) {
        *self = self.times(n);
    }

    /// Componentwise division. `n == 0` is not special-cased: the result is
    /// ±inf or NaN per IEEE 754.
    #[inline]
    pub fn divided_by(self, n: f64) -> Vec2 {
        Vec2::new(self.x / n, self.y / n)
    }

    #[inline]
    pub fn div(&mut self, n: f64) {
        *self = self.divided_by(n);
    }

    // ---- dot / projection ----

    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Orthogonal projection onto the line through the origin and `onto`.
    ///
    /// The result depends only on the direction of `onto`, not its length.
    /// Projecting onto the zero vector yields the zero vector.
    #[inline]
    pub fn projected(self, onto: Vec2) -> Vec2 {
        let unit = onto.normalized();
        unit.times(self.dot(unit))
    }

    #[inline]
    pub fn project(&mut self, onto: Vec2) {
        *self = self.projected(onto);
    }

    // ---- limiting ----

    /// Clamp the length to at most `max_len`, keeping the direction. Shorter
    /// vectors are returned unchanged.
    #[inline]
    pub fn limited(self, max_len: f64) -> Vec2 {
        if self.len() > max_len {
            self.with_len(max_len)
        } else {
            self
        }
    }

    #[inline]
    pub fn limit(&mut self, max_len: f64) {
        *self = self.limited(max_len);
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        Vec2::add(self, rhs);
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        Vec2::sub(self, rhs);
    }
}

impl MulAssign<f64> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        Vec2::mul(self, rhs);
    }
}

impl DivAssign<f64> for Vec2 {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        Vec2::div(self, rhs);
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Self::Output {
        Vec2::new(-self.x, -self.y)
    }
}
