//! Ports to the host engine's rendering state.
//!
//! Everything the blend driver, capture and apply code touch goes through
//! these traits. An engine binding implements them over its own global
//! render settings, skybox material and scene lights; `MemoryHost` is a
//! plain in-memory implementation.

use crate::types::{Color, FogMode, TextureId};

/// A skybox material with named texture slots and named float properties.
pub trait SkyboxMaterial {
    /// Texture bound to `slot`, or None if the slot is missing or empty.
    fn texture(&self, slot: &str) -> Option<TextureId>;
    fn set_texture(&mut self, slot: &str, texture: TextureId);
    /// Float property `name`, or None if the material has no such property.
    fn float(&self, name: &str) -> Option<f32>;
    fn set_float(&mut self, name: &str, value: f32);
}

/// A light in the host scene.
pub trait SceneLight {
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);
    fn intensity(&self) -> f32;
    fn set_intensity(&mut self, intensity: f32);
    /// True when the color is derived from a color-temperature model.
    /// The stored color is then not meaningful to read or write.
    fn uses_color_temperature(&self) -> bool;
}

/// Global lighting, fog and skybox state.
pub trait RenderSettings {
    type Skybox: SkyboxMaterial;

    fn ambient_intensity(&self) -> f32;
    fn set_ambient_intensity(&mut self, value: f32);

    fn reflection_intensity(&self) -> f32;
    fn set_reflection_intensity(&mut self, value: f32);

    fn fog_mode(&self) -> FogMode;
    fn fog_color(&self) -> Color;
    fn set_fog_color(&mut self, color: Color);
    fn fog_start(&self) -> f32;
    fn set_fog_start(&mut self, distance: f32);
    fn fog_end(&self) -> f32;
    fn set_fog_end(&mut self, distance: f32);

    /// The active skybox material, if one is assigned.
    fn skybox(&self) -> Option<&Self::Skybox>;
    fn skybox_mut(&mut self) -> Option<&mut Self::Skybox>;
}

/// Render settings plus access to scene lights by name.
pub trait EnvironmentHost: RenderSettings {
    type Light: SceneLight;

    fn find_light(&self, name: &str) -> Option<&Self::Light>;
    fn find_light_mut(&mut self, name: &str) -> Option<&mut Self::Light>;
}
