use glam::Vec3;

use crate::constants::FULL_TURN_DEGREES;
use crate::types::Color;

/// Linear interpolation `a*(1-t) + b*t`.
///
/// Written in the two-product form so that `t == 0.0` returns `a` and
/// `t == 1.0` returns `b` bit-exactly. `t` is not clamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Per-channel `lerp` on RGB colors.
#[inline]
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let a = Vec3::from_array(a);
    let b = Vec3::from_array(b);
    (a * (1.0 - t) + b * t).to_array()
}

/// Wrap an angle in degrees into [0, 360).
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(FULL_TURN_DEGREES);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= FULL_TURN_DEGREES {
        0.0
    } else {
        wrapped
    }
}
