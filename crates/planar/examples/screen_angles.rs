//! Print angles and rotations in the clockwise-positive (screen) convention.
//!
//! Usage:
//!   cargo run -p planar --example screen_angles
//!   cargo run -p planar --example screen_angles -- 30
//!
//! The optional argument is a rotation step in degrees (default 45).

use planar::Vec2;

/// Steps needed to cover one full turn, or `None` for a zero or non-finite step.
fn steps_per_turn(step_deg: f64) -> Option<usize> {
    if step_deg == 0.0 || !step_deg.is_finite() {
        return None;
    }
    Some((360.0 / step_deg.abs()).ceil() as usize)
}

fn main() {
    let step_deg: f64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(45.0);
    let Some(turns) = steps_per_turn(step_deg) else {
        eprintln!("usage: screen_angles [step_degrees], step must be finite and non-zero");
        return;
    };
    let step = step_deg.to_radians();
    let mut v = Vec2::new(1.0, 0.0);
    println!("{:>6} {:>9} {:>9} {:>9}", "step", "x", "y", "angle°");
    for k in 0..=turns {
        println!(
            "{:>6} {:>9.4} {:>9.4} {:>9.2}",
            k,
            v.x,
            v.y,
            v.angle().to_degrees()
        );
        v.rotate(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_cover_a_full_turn() {
        assert_eq!(steps_per_turn(45.0), Some(8));
        assert_eq!(steps_per_turn(-90.0), Some(4));
        assert_eq!(steps_per_turn(0.5), Some(720));
        assert_eq!(steps_per_turn(0.25), Some(1440));
        assert_eq!(steps_per_turn(7.0), Some(52));
        assert_eq!(steps_per_turn(0.0), None);
        assert_eq!(steps_per_turn(f64::NAN), None);
        assert_eq!(steps_per_turn(f64::INFINITY), None);
    }
}
