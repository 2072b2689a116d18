use envblend_core::host::{EnvironmentHost, SceneLight, SkyboxMaterial};
use envblend_core::preset::{EnvironmentPreset, FogPreset, SkyboxFaces, SunPreset};
use envblend_core::types::{Face, FogMode};

use crate::error::{CaptureError, SceneWarning};

/// A preset captured from live host state, with the parts that were skipped.
#[derive(Debug, Clone)]
pub struct CaptureReport {
    pub preset: EnvironmentPreset,
    pub warnings: Vec<SceneWarning>,
}

/// Snapshot the host's current environment into a new preset named `name`.
///
/// - Ambient and reflection intensity are always read, clamped to range.
/// - Fog is read only in linear fog mode.
/// - The sun is the light named `sun_light_name`; its color is read only
///   when it is not driven by a color temperature.
/// - All six skybox faces must be readable, otherwise the capture fails
///   and no preset is returned.
pub fn load_current_settings<H: EnvironmentHost>(
    host: &H,
    name: &str,
    sun_light_name: &str,
) -> Result<CaptureReport, CaptureError> {
    let mut warnings = Vec::new();

    let skybox = read_faces(host).inspect_err(|e| log::error!("{e}"))?;

    let mut preset = EnvironmentPreset::new(name, skybox).with_intensities(
        host.ambient_intensity(),
        host.reflection_intensity(),
    );
    preset.clamp_ranges();

    if host.fog_mode() == FogMode::Linear {
        preset.fog = Some(FogPreset {
            color: host.fog_color(),
            start: host.fog_start(),
            end: host.fog_end(),
        });
    } else {
        warnings.push(SceneWarning::FogNotLinear);
    }

    match host.find_light(sun_light_name) {
        None => warnings.push(SceneWarning::LightNotFound(sun_light_name.to_string())),
        Some(light) => {
            let color = if light.uses_color_temperature() {
                warnings.push(SceneWarning::ColorTemperature(sun_light_name.to_string()));
                None
            } else {
                Some(light.color())
            };
            preset.sun = Some(SunPreset {
                intensity: light.intensity(),
                color,
            });
        }
    }

    for warning in &warnings {
        log::warn!("Capturing preset '{}': {}", name, warning);
    }
    log::info!("Preset '{}' captured from scene", name);

    Ok(CaptureReport { preset, warnings })
}

fn read_faces<H: EnvironmentHost>(host: &H) -> Result<SkyboxFaces, CaptureError> {
    let material = host.skybox().ok_or(CaptureError::MissingSkybox)?;
    let mut faces = SkyboxFaces::default();
    for face in Face::ALL {
        let slot = face.base_slot();
        *faces.get_mut(face) = material
            .texture(slot)
            .ok_or(CaptureError::MissingTexture { slot })?;
    }
    Ok(faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use envblend_core::constants::SUN_LIGHT_NAME;
    use envblend_core::memory::{MemoryHost, MemoryLight, MemorySkybox};
    use envblend_core::types::TextureId;

    fn scene() -> MemoryHost {
        let mut host = MemoryHost::new()
            .with_skybox(MemorySkybox::with_faces(&SkyboxFaces::with_prefix("day")))
            .with_light(
                SUN_LIGHT_NAME,
                MemoryLight {
                    color: [1.0, 0.9, 0.8],
                    intensity: 1.4,
                    use_color_temperature: false,
                },
            );
        host.ambient_intensity = 1.2;
        host.reflection_intensity = 0.6;
        host.fog_color = [0.6, 0.7, 0.8];
        host.fog_start = 15.0;
        host.fog_end = 220.0;
        host
    }

    #[test]
    fn test_capture_full_scene() {
        let report = load_current_settings(&scene(), "Day", SUN_LIGHT_NAME).expect("capture");
        assert!(report.warnings.is_empty());

        let preset = report.preset;
        assert_eq!(preset.name, "Day");
        assert_eq!(preset.ambient_intensity, 1.2);
        assert_eq!(preset.reflection_intensity, 0.6);
        assert_eq!(preset.skybox, SkyboxFaces::with_prefix("day"));
        assert_eq!(
            preset.fog,
            Some(FogPreset {
                color: [0.6, 0.7, 0.8],
                start: 15.0,
                end: 220.0,
            })
        );
        assert_eq!(
            preset.sun,
            Some(SunPreset {
                intensity: 1.4,
                color: Some([1.0, 0.9, 0.8]),
            })
        );
    }

    #[test]
    fn test_non_linear_fog_skipped_with_warning() {
        let mut host = scene();
        host.fog_mode = FogMode::ExponentialSquared;

        let report = load_current_settings(&host, "Haze", SUN_LIGHT_NAME).expect("capture");
        assert_eq!(report.warnings, vec![SceneWarning::FogNotLinear]);
        assert!(report.preset.fog.is_none());
        assert!(report.preset.sun.is_some());
        assert_eq!(report.preset.ambient_intensity, 1.2);
        assert_eq!(report.preset.skybox, SkyboxFaces::with_prefix("day"));
    }

    #[test]
    fn test_color_temperature_light_skips_color() {
        let mut host = scene();
        if let Some(light) = host.lights.get_mut(SUN_LIGHT_NAME) {
            light.use_color_temperature = true;
        }

        let report = load_current_settings(&host, "Warm", SUN_LIGHT_NAME).expect("capture");
        assert_eq!(
            report.warnings,
            vec![SceneWarning::ColorTemperature(SUN_LIGHT_NAME.to_string())]
        );
        let sun = report.preset.sun.expect("sun captured");
        assert_eq!(sun.intensity, 1.4);
        assert!(sun.color.is_none());
    }

    #[test]
    fn test_missing_light_skips_sun() {
        let report = load_current_settings(&scene(), "Day", "Moon").expect("capture");
        assert_eq!(
            report.warnings,
            vec![SceneWarning::LightNotFound("Moon".to_string())]
        );
        assert!(report.preset.sun.is_none());
        assert!(report.preset.fog.is_some());
    }

    #[test]
    fn test_missing_skybox_fails() {
        let mut host = scene();
        host.skybox = None;
        let result = load_current_settings(&host, "Day", SUN_LIGHT_NAME);
        assert!(matches!(result, Err(CaptureError::MissingSkybox)));
    }

    #[test]
    fn test_missing_face_slot_fails_whole_capture() {
        let mut host = scene();
        if let Some(skybox) = host.skybox.as_mut() {
            skybox.textures.remove("_LeftTex");
        }
        let result = load_current_settings(&host, "Day", SUN_LIGHT_NAME);
        assert!(matches!(
            result,
            Err(CaptureError::MissingTexture { slot: "_LeftTex" })
        ));
    }

    #[test]
    fn test_empty_face_slot_fails() {
        let mut host = scene();
        if let Some(skybox) = host.skybox.as_mut() {
            skybox.set_texture("_DownTex", TextureId::default());
        }
        assert!(load_current_settings(&host, "Day", SUN_LIGHT_NAME).is_err());
    }

    #[test]
    fn test_capture_clamps_multipliers() {
        let mut host = scene();
        host.ambient_intensity = 11.0;
        host.reflection_intensity = 2.0;
        let report = load_current_settings(&host, "Bright", SUN_LIGHT_NAME).expect("capture");
        assert_eq!(report.preset.ambient_intensity, 8.0);
        assert_eq!(report.preset.reflection_intensity, 1.0);
    }
}
