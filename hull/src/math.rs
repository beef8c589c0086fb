pub use bevy_math::{Quat as Quatf, Vec3 as Vec3f};

// Basis: standard RHS with +Z forward (bow), +Y up, +X right (starboard)
pub const BODY_FWD: Vec3f = Vec3f::new(0.0, 0.0, 1.0);
pub const BODY_RIGHT: Vec3f = Vec3f::new(1.0, 0.0, 0.0);
pub const BODY_UP: Vec3f = Vec3f::new(0.0, 1.0, 0.0);

/// Below this magnitude a length, speed or denominator counts as zero.
pub const EPSILON: f32 = 1e-6;

/// Returns `value` when it is finite, otherwise `fallback`.
#[inline]
pub fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}

/// Divides, falling back when the denominator is effectively zero.
#[inline]
pub fn safe_div(num: f32, den: f32, fallback: f32) -> f32 {
    if den.abs() < EPSILON { fallback } else { finite_or(num / den, fallback) }
}

#[inline]
pub fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_div_guards_zero_denominator() {
        assert_eq!(safe_div(1.0, 0.0, 7.0), 7.0);
        assert_eq!(safe_div(1.0, 1e-9, 7.0), 7.0);
        assert!((safe_div(3.0, 2.0, 0.0) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn sign_of_zero_is_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-2.0), -1.0);
        assert_eq!(sign(0.1), 1.0);
    }
}
