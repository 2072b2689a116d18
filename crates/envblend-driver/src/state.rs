use envblend_core::constants::{BLEND_FULL, BLEND_PROPERTY, BLEND_REST};
use envblend_core::host::{EnvironmentHost, SceneLight, SkyboxMaterial};
use envblend_core::math::{lerp, lerp_color};
use envblend_core::preset::EnvironmentPreset;
use envblend_core::types::Color;

/// Sun light values that take part in a blend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunState {
    pub color: Color,
    pub intensity: f32,
}

/// Every interpolated parameter of the host environment at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentState {
    pub ambient_intensity: f32,
    pub reflection_intensity: f32,
    pub fog_color: Color,
    pub fog_start: f32,
    pub fog_end: f32,
    /// None when the scene has no sun light.
    pub sun: Option<SunState>,
    /// Skybox overlay cross-fade weight.
    pub sky_blend: f32,
}

impl EnvironmentState {
    /// Read the live values from the host.
    pub fn read<H: EnvironmentHost>(host: &H, sun_light_name: &str) -> Self {
        let sun = host.find_light(sun_light_name).map(|light| SunState {
            color: light.color(),
            intensity: light.intensity(),
        });
        let sky_blend = host
            .skybox()
            .and_then(|m| m.float(BLEND_PROPERTY))
            .unwrap_or(BLEND_REST);

        Self {
            ambient_intensity: host.ambient_intensity(),
            reflection_intensity: host.reflection_intensity(),
            fog_color: host.fog_color(),
            fog_start: host.fog_start(),
            fog_end: host.fog_end(),
            sun,
            sky_blend,
        }
    }

    /// The state reached by blending from `self` to `preset`. Parts the
    /// preset does not carry keep their current values, and the overlay
    /// weight ends fully on the incoming faces.
    pub fn toward(&self, preset: &EnvironmentPreset) -> Self {
        let mut target = *self;
        target.ambient_intensity = preset.ambient_intensity;
        target.reflection_intensity = preset.reflection_intensity;

        if let Some(fog) = &preset.fog {
            target.fog_color = fog.color;
            target.fog_start = fog.start;
            target.fog_end = fog.end;
        }

        if let (Some(current), Some(sun)) = (self.sun, &preset.sun) {
            target.sun = Some(SunState {
                color: sun.color.unwrap_or(current.color),
                intensity: sun.intensity,
            });
        }

        target.sky_blend = BLEND_FULL;
        target
    }

    /// Interpolate every field: `self*(1-t) + other*t`.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let sun = match (self.sun, other.sun) {
            (Some(a), Some(b)) => Some(SunState {
                color: lerp_color(a.color, b.color, t),
                intensity: lerp(a.intensity, b.intensity, t),
            }),
            (a, b) => b.or(a),
        };

        Self {
            ambient_intensity: lerp(self.ambient_intensity, other.ambient_intensity, t),
            reflection_intensity: lerp(self.reflection_intensity, other.reflection_intensity, t),
            fog_color: lerp_color(self.fog_color, other.fog_color, t),
            fog_start: lerp(self.fog_start, other.fog_start, t),
            fog_end: lerp(self.fog_end, other.fog_end, t),
            sun,
            sky_blend: lerp(self.sky_blend, other.sky_blend, t),
        }
    }

    /// Write these values into the host. A missing sun light or skybox
    /// material is skipped.
    pub fn write<H: EnvironmentHost>(&self, host: &mut H, sun_light_name: &str) {
        host.set_ambient_intensity(self.ambient_intensity);
        host.set_reflection_intensity(self.reflection_intensity);
        host.set_fog_color(self.fog_color);
        host.set_fog_start(self.fog_start);
        host.set_fog_end(self.fog_end);

        if let Some(sun) = &self.sun {
            if let Some(light) = host.find_light_mut(sun_light_name) {
                light.set_intensity(sun.intensity);
                if !light.uses_color_temperature() {
                    light.set_color(sun.color);
                }
            }
        }

        if let Some(material) = host.skybox_mut() {
            material.set_float(BLEND_PROPERTY, self.sky_blend);
        }
    }
}
