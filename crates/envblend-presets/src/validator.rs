use envblend_core::constants::{AMBIENT_INTENSITY_MAX, REFLECTION_INTENSITY_MAX};
use envblend_core::preset::EnvironmentPreset;
use envblend_core::types::Color;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Preset has an empty name")]
    EmptyName,
    #[error("Preset '{name}' ambient intensity {value} is outside 0..={max}")]
    AmbientOutOfRange { name: String, value: f32, max: f32 },
    #[error("Preset '{name}' reflection intensity {value} is outside 0..={max}")]
    ReflectionOutOfRange { name: String, value: f32, max: f32 },
    #[error("Preset '{name}' sun intensity {value} is negative")]
    NegativeSunIntensity { name: String, value: f32 },
    #[error("Preset '{name}' fog start {start} is negative or beyond fog end {end}")]
    InvalidFogRange { name: String, start: f32, end: f32 },
    #[error("Preset '{name}' {field} color channel {value} is outside 0..=1")]
    ColorOutOfRange {
        name: String,
        field: &'static str,
        value: f32,
    },
    #[error("Preset '{name}' has no texture for skybox slot {slot}")]
    MissingFace { name: String, slot: &'static str },
}

/// Check a preset against its authoring ranges. Reports every problem,
/// not just the first.
pub fn validate_preset(preset: &EnvironmentPreset) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let name = &preset.name;

    if name.is_empty() {
        errors.push(ValidationError::EmptyName);
    }

    if !(0.0..=AMBIENT_INTENSITY_MAX).contains(&preset.ambient_intensity) {
        errors.push(ValidationError::AmbientOutOfRange {
            name: name.clone(),
            value: preset.ambient_intensity,
            max: AMBIENT_INTENSITY_MAX,
        });
    }
    if !(0.0..=REFLECTION_INTENSITY_MAX).contains(&preset.reflection_intensity) {
        errors.push(ValidationError::ReflectionOutOfRange {
            name: name.clone(),
            value: preset.reflection_intensity,
            max: REFLECTION_INTENSITY_MAX,
        });
    }

    if let Some(fog) = &preset.fog {
        if !(fog.start >= 0.0 && fog.start <= fog.end) {
            errors.push(ValidationError::InvalidFogRange {
                name: name.clone(),
                start: fog.start,
                end: fog.end,
            });
        }
        check_color(&mut errors, name, "fog", fog.color);
    }

    if let Some(sun) = &preset.sun {
        if !(sun.intensity >= 0.0) {
            errors.push(ValidationError::NegativeSunIntensity {
                name: name.clone(),
                value: sun.intensity,
            });
        }
        if let Some(color) = sun.color {
            check_color(&mut errors, name, "sun", color);
        }
    }

    for (face, texture) in preset.skybox.iter() {
        if texture.is_empty() {
            errors.push(ValidationError::MissingFace {
                name: name.clone(),
                slot: face.base_slot(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_color(errors: &mut Vec<ValidationError>, name: &str, field: &'static str, color: Color) {
    if let Some(&value) = color.iter().find(|c| !(0.0..=1.0).contains(*c)) {
        errors.push(ValidationError::ColorOutOfRange {
            name: name.to_string(),
            field,
            value,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envblend_core::preset::{FogPreset, SkyboxFaces, SunPreset};
    use envblend_core::types::TextureId;

    fn valid() -> EnvironmentPreset {
        EnvironmentPreset::new("Day", SkyboxFaces::with_prefix("day"))
            .with_fog(FogPreset {
                color: [0.7, 0.8, 0.9],
                start: 10.0,
                end: 250.0,
            })
            .with_sun(SunPreset {
                intensity: 1.2,
                color: Some([1.0, 0.95, 0.85]),
            })
    }

    #[test]
    fn test_valid_preset_passes() {
        assert!(validate_preset(&valid()).is_ok());
    }

    #[test]
    fn test_out_of_range_multipliers() {
        let preset = valid().with_intensities(9.0, 1.5);
        let errors = validate_preset(&preset).expect_err("should fail");
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ValidationError::AmbientOutOfRange { .. }));
        assert!(matches!(errors[1], ValidationError::ReflectionOutOfRange { .. }));
    }

    #[test]
    fn test_inverted_fog_range() {
        let mut preset = valid();
        preset.fog = Some(FogPreset {
            color: [0.5, 0.5, 0.5],
            start: 300.0,
            end: 100.0,
        });
        let errors = validate_preset(&preset).expect_err("should fail");
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidFogRange { .. })));
    }

    #[test]
    fn test_sun_checks() {
        let mut preset = valid();
        preset.sun = Some(SunPreset {
            intensity: -1.0,
            color: Some([1.5, 0.0, 0.0]),
        });
        let errors = validate_preset(&preset).expect_err("should fail");
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::NegativeSunIntensity { .. })));
        assert!(errors.iter().any(
            |e| matches!(e, ValidationError::ColorOutOfRange { field, .. } if *field == "sun")
        ));
    }

    #[test]
    fn test_temperature_sun_without_color_is_valid() {
        let mut preset = valid();
        preset.sun = Some(SunPreset {
            intensity: 2.0,
            color: None,
        });
        assert!(validate_preset(&preset).is_ok());
    }

    #[test]
    fn test_missing_face_and_name() {
        let mut preset = valid();
        preset.name.clear();
        preset.skybox.down = TextureId::default();
        let errors = validate_preset(&preset).expect_err("should fail");
        assert!(errors.contains(&ValidationError::EmptyName));
        assert!(errors.contains(&ValidationError::MissingFace {
            name: String::new(),
            slot: "_DownTex",
        }));
    }
}
