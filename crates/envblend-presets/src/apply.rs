use envblend_core::constants::{BLEND_PROPERTY, BLEND_REST};
use envblend_core::host::{EnvironmentHost, SceneLight, SkyboxMaterial};
use envblend_core::preset::EnvironmentPreset;

use crate::error::SceneWarning;

/// Write `preset` straight into the host, with no blending.
///
/// Fog and sun are written only when the preset carries them. A missing
/// sun light or skybox material is skipped with a warning; everything else
/// is still applied. Returns the skipped parts.
pub fn apply_to_scene<H: EnvironmentHost>(
    host: &mut H,
    preset: &EnvironmentPreset,
    sun_light_name: &str,
) -> Vec<SceneWarning> {
    let mut warnings = Vec::new();

    host.set_ambient_intensity(preset.ambient_intensity);
    host.set_reflection_intensity(preset.reflection_intensity);

    if let Some(fog) = &preset.fog {
        host.set_fog_color(fog.color);
        host.set_fog_start(fog.start);
        host.set_fog_end(fog.end);
    }

    if let Some(sun) = &preset.sun {
        match host.find_light_mut(sun_light_name) {
            None => warnings.push(SceneWarning::LightNotFound(sun_light_name.to_string())),
            Some(light) => {
                light.set_intensity(sun.intensity);
                if let Some(color) = sun.color {
                    if light.uses_color_temperature() {
                        warnings.push(SceneWarning::ColorTemperature(sun_light_name.to_string()));
                    } else {
                        light.set_color(color);
                    }
                }
            }
        }
    }

    match host.skybox_mut() {
        None => warnings.push(SceneWarning::MissingSkybox),
        Some(material) => {
            for (face, texture) in preset.skybox.iter() {
                material.set_texture(face.base_slot(), texture.clone());
            }
            material.set_float(BLEND_PROPERTY, BLEND_REST);
        }
    }

    for warning in &warnings {
        log::warn!("Applying preset '{}': {}", preset.name, warning);
    }

    warnings
}
