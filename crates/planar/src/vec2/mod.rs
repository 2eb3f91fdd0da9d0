//! 2D value vector `Vec2` and its operation set.
//!
//! Purpose
//! - A plain `Copy` value `{ x, y }` with the usual magnitude, arithmetic,
//!   projection and rotation operations for geometry and physics code.
//!
//! Mutating vs. pure
//! - Most operations come in pairs: an in-place form taking `&mut self`
//!   (`set_len`, `add`, `rotate`, ...) and a pure form returning a new value
//!   (`with_len`, `plus`, `rotated`, ...). The in-place form always assigns the
//!   result of the pure form, so the two cannot drift apart.
//!
//! Degenerate inputs
//! - Zero vector: `with_len`, `normalized`, `projected` (onto zero) and
//!   `limited` return the zero vector.
//! - Division by zero is not trapped; results follow IEEE 754 (±inf / NaN).
//!
//! Code cross-refs: `types::Vec2`, `angle` (angle/rotation impls)

mod angle;
mod types;

pub use types::Vec2;
