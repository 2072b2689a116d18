/// Name of the scene light treated as the sun.
pub const SUN_LIGHT_NAME: &str = "Directional Light";

/// Upper bound of the ambient (skybox lighting) intensity multiplier.
pub const AMBIENT_INTENSITY_MAX: f32 = 8.0;

/// Upper bound of the reflection intensity multiplier.
pub const REFLECTION_INTENSITY_MAX: f32 = 1.0;

/// Default ambient intensity multiplier for a fresh preset.
pub const DEFAULT_AMBIENT_INTENSITY: f32 = 1.0;

/// Default reflection intensity multiplier for a fresh preset.
pub const DEFAULT_REFLECTION_INTENSITY: f32 = 1.0;

/// Skybox material float holding the overlay cross-fade weight.
/// 0.0 = base faces only, 1.0 = overlay faces only.
pub const BLEND_PROPERTY: &str = "_Blend";

/// Skybox material float holding the rotation angle in degrees.
pub const ROTATION_PROPERTY: &str = "_Rotation";

/// Overlay weight the skybox rests at when no blend is running.
pub const BLEND_REST: f32 = 0.0;

/// Overlay weight reached at the end of a blend.
pub const BLEND_FULL: f32 = 1.0;

/// Degrees in a full skybox turn. Rotation wraps here.
pub const FULL_TURN_DEGREES: f32 = 360.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_within_ranges() {
        assert!((0.0..=AMBIENT_INTENSITY_MAX).contains(&DEFAULT_AMBIENT_INTENSITY));
        assert!((0.0..=REFLECTION_INTENSITY_MAX).contains(&DEFAULT_REFLECTION_INTENSITY));
        assert!(BLEND_REST < BLEND_FULL);
    }
}
