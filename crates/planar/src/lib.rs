//! Minimal 2D Euclidean vector arithmetic.
//!
//! Conventions
//! - Angles are screen-space: positive angles turn clockwise, i.e. from +X
//!   toward -Y. `angle`, `angle_from` and `rotate` all share this sign.
//! - Floating-point comparisons of derived values go through
//!   `Vec2::equals(other, eps)`; `==` is exact, bitwise-style equality.
//! - The zero vector is a valid value. Direction-dependent operations map it
//!   to itself instead of producing NaN.
//!
//! Code cross-refs: `Vec2`, `rand::rand_vec`, `cfg::EQ_EPS`

pub mod cfg;
mod convert;
pub mod rand;
pub mod vec2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::rand::{rand_vec, rand_vec_thread, ReplayToken, UnitCircle};
pub use vec2::Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{ANGLE_EPS, EQ_EPS};
    pub use crate::rand::{rand_vec, rand_vec_thread, ReplayToken, UnitCircle};
    pub use crate::vec2::Vec2;
}
