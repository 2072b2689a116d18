use std::collections::HashMap;

use crate::constants::{BLEND_PROPERTY, BLEND_REST, ROTATION_PROPERTY};
use crate::host::{EnvironmentHost, RenderSettings, SceneLight, SkyboxMaterial};
use crate::preset::SkyboxFaces;
use crate::types::{Color, FogMode, TextureId};

/// In-memory skybox material.
#[derive(Debug, Clone, Default)]
pub struct MemorySkybox {
    pub textures: HashMap<String, TextureId>,
    pub floats: HashMap<String, f32>,
}

impl MemorySkybox {
    /// A six-sided skybox material showing `faces`, with the blend weight
    /// and rotation properties present and at rest.
    pub fn with_faces(faces: &SkyboxFaces) -> Self {
        let mut skybox = Self::default();
        for (face, texture) in faces.iter() {
            skybox.set_texture(face.base_slot(), texture.clone());
        }
        skybox.set_float(BLEND_PROPERTY, BLEND_REST);
        skybox.set_float(ROTATION_PROPERTY, 0.0);
        skybox
    }
}

impl SkyboxMaterial for MemorySkybox {
    fn texture(&self, slot: &str) -> Option<TextureId> {
        self.textures.get(slot).filter(|t| !t.is_empty()).cloned()
    }

    fn set_texture(&mut self, slot: &str, texture: TextureId) {
        self.textures.insert(slot.to_string(), texture);
    }

    fn float(&self, name: &str) -> Option<f32> {
        self.floats.get(name).copied()
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.floats.insert(name.to_string(), value);
    }
}

/// In-memory scene light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryLight {
    pub color: Color,
    pub intensity: f32,
    pub use_color_temperature: bool,
}

impl Default for MemoryLight {
    fn default() -> Self {
        Self {
            color: [1.0, 0.96, 0.84],
            intensity: 1.0,
            use_color_temperature: false,
        }
    }
}

impl SceneLight for MemoryLight {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn intensity(&self) -> f32 {
        self.intensity
    }

    fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }

    fn uses_color_temperature(&self) -> bool {
        self.use_color_temperature
    }
}

/// Host rendering state held in plain fields. Backs the tests and the
/// demo binary; engine bindings implement the host traits themselves.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    pub ambient_intensity: f32,
    pub reflection_intensity: f32,
    pub fog_mode: FogMode,
    pub fog_color: Color,
    pub fog_start: f32,
    pub fog_end: f32,
    pub skybox: Option<MemorySkybox>,
    pub lights: HashMap<String, MemoryLight>,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self {
            ambient_intensity: 1.0,
            reflection_intensity: 1.0,
            fog_mode: FogMode::Linear,
            fog_color: [0.5, 0.5, 0.5],
            fog_start: 0.0,
            fog_end: 300.0,
            skybox: None,
            lights: HashMap::new(),
        }
    }
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skybox(mut self, skybox: MemorySkybox) -> Self {
        self.skybox = Some(skybox);
        self
    }

    pub fn with_light(mut self, name: &str, light: MemoryLight) -> Self {
        self.lights.insert(name.to_string(), light);
        self
    }

    /// Current overlay blend weight, if the skybox has the property.
    pub fn sky_blend(&self) -> Option<f32> {
        self.skybox.as_ref().and_then(|s| s.float(BLEND_PROPERTY))
    }

    /// Current skybox rotation, if the skybox has the property.
    pub fn sky_rotation(&self) -> Option<f32> {
        self.skybox.as_ref().and_then(|s| s.float(ROTATION_PROPERTY))
    }
}

impl RenderSettings for MemoryHost {
    type Skybox = MemorySkybox;

    fn ambient_intensity(&self) -> f32 {
        self.ambient_intensity
    }

    fn set_ambient_intensity(&mut self, value: f32) {
        self.ambient_intensity = value;
    }

    fn reflection_intensity(&self) -> f32 {
        self.reflection_intensity
    }

    fn set_reflection_intensity(&mut self, value: f32) {
        self.reflection_intensity = value;
    }

    fn fog_mode(&self) -> FogMode {
        self.fog_mode
    }

    fn fog_color(&self) -> Color {
        self.fog_color
    }

    fn set_fog_color(&mut self, color: Color) {
        self.fog_color = color;
    }

    fn fog_start(&self) -> f32 {
        self.fog_start
    }

    fn set_fog_start(&mut self, distance: f32) {
        self.fog_start = distance;
    }

    fn fog_end(&self) -> f32 {
        self.fog_end
    }

    fn set_fog_end(&mut self, distance: f32) {
        self.fog_end = distance;
    }

    fn skybox(&self) -> Option<&MemorySkybox> {
        self.skybox.as_ref()
    }

    fn skybox_mut(&mut self) -> Option<&mut MemorySkybox> {
        self.skybox.as_mut()
    }
}

impl EnvironmentHost for MemoryHost {
    type Light = MemoryLight;

    fn find_light(&self, name: &str) -> Option<&MemoryLight> {
        self.lights.get(name)
    }

    fn find_light_mut(&mut self, name: &str) -> Option<&mut MemoryLight> {
        self.lights.get_mut(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Face;

    #[test]
    fn test_with_faces_fills_base_slots() {
        let skybox = MemorySkybox::with_faces(&SkyboxFaces::with_prefix("day"));
        for face in Face::ALL {
            assert!(skybox.texture(face.base_slot()).is_some());
            assert!(skybox.texture(face.overlay_slot()).is_none());
        }
        assert_eq!(skybox.float(BLEND_PROPERTY), Some(BLEND_REST));
    }

    #[test]
    fn test_empty_texture_reads_as_missing() {
        let mut skybox = MemorySkybox::default();
        skybox.set_texture("_FrontTex", TextureId::default());
        assert!(skybox.texture("_FrontTex").is_none());
    }

    #[test]
    fn test_find_light_by_name() {
        let mut host = MemoryHost::new().with_light("Sun", MemoryLight::default());
        assert!(host.find_light("Sun").is_some());
        assert!(host.find_light("Moon").is_none());

        if let Some(light) = host.find_light_mut("Sun") {
            light.set_intensity(3.0);
        }
        assert_eq!(host.find_light("Sun").map(|l| l.intensity()), Some(3.0));
    }
}
