use serde::{Deserialize, Serialize};

use crate::constants::{
    AMBIENT_INTENSITY_MAX, DEFAULT_AMBIENT_INTENSITY, DEFAULT_REFLECTION_INTENSITY,
    REFLECTION_INTENSITY_MAX,
};
use crate::types::{Color, Face, TextureId};

/// The six textures of a cube-mapped skybox.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SkyboxFaces {
    /// +Z
    pub front: TextureId,
    /// -Z
    pub back: TextureId,
    /// +X
    pub left: TextureId,
    /// -X
    pub right: TextureId,
    /// +Y
    pub up: TextureId,
    /// -Y
    pub down: TextureId,
}

impl SkyboxFaces {
    /// Build a face set whose handles are `<prefix>_<face>`, e.g. `day_front`.
    pub fn with_prefix(prefix: &str) -> Self {
        let name = |face: &str| TextureId(format!("{prefix}_{face}"));
        Self {
            front: name("front"),
            back: name("back"),
            left: name("left"),
            right: name("right"),
            up: name("up"),
            down: name("down"),
        }
    }

    pub fn get(&self, face: Face) -> &TextureId {
        match face {
            Face::Front => &self.front,
            Face::Back => &self.back,
            Face::Left => &self.left,
            Face::Right => &self.right,
            Face::Up => &self.up,
            Face::Down => &self.down,
        }
    }

    pub fn get_mut(&mut self, face: Face) -> &mut TextureId {
        match face {
            Face::Front => &mut self.front,
            Face::Back => &mut self.back,
            Face::Left => &mut self.left,
            Face::Right => &mut self.right,
            Face::Up => &mut self.up,
            Face::Down => &mut self.down,
        }
    }

    /// Faces in `Face::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &TextureId)> {
        Face::ALL.into_iter().map(move |face| (face, self.get(face)))
    }
}

/// Linear fog settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FogPreset {
    pub color: Color,
    /// Distance at which fog begins.
    pub start: f32,
    /// Distance at which fog is fully opaque.
    pub end: f32,
}

/// Directional light ("sun") settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunPreset {
    pub intensity: f32,
    /// None when the light's color comes from a color-temperature model;
    /// the light's color is then left alone.
    #[serde(default)]
    pub color: Option<Color>,
}

/// A named bundle of environment rendering parameters.
///
/// `fog` and `sun` are optional: a preset captured from a scene without
/// linear fog, or without a sun light, leaves those parts of the host
/// untouched when it is blended in or applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentPreset {
    /// Lookup key in the preset registry.
    pub name: String,
    pub skybox: SkyboxFaces,
    #[serde(default)]
    pub fog: Option<FogPreset>,
    #[serde(default)]
    pub sun: Option<SunPreset>,
    /// Brightness of skybox lighting in the scene (0.0–8.0).
    #[serde(default = "default_ambient_intensity")]
    pub ambient_intensity: f32,
    /// How much the skybox affects reflections (0.0–1.0).
    #[serde(default = "default_reflection_intensity")]
    pub reflection_intensity: f32,
}

fn default_ambient_intensity() -> f32 {
    DEFAULT_AMBIENT_INTENSITY
}

fn default_reflection_intensity() -> f32 {
    DEFAULT_REFLECTION_INTENSITY
}

impl EnvironmentPreset {
    /// Create a preset with default intensities and no fog or sun settings.
    pub fn new(name: impl Into<String>, skybox: SkyboxFaces) -> Self {
        Self {
            name: name.into(),
            skybox,
            fog: None,
            sun: None,
            ambient_intensity: DEFAULT_AMBIENT_INTENSITY,
            reflection_intensity: DEFAULT_REFLECTION_INTENSITY,
        }
    }

    pub fn with_fog(mut self, fog: FogPreset) -> Self {
        self.fog = Some(fog);
        self
    }

    pub fn with_sun(mut self, sun: SunPreset) -> Self {
        self.sun = Some(sun);
        self
    }

    pub fn with_intensities(mut self, ambient: f32, reflection: f32) -> Self {
        self.ambient_intensity = ambient;
        self.reflection_intensity = reflection;
        self
    }

    /// Clamp the intensity multipliers into their authoring ranges.
    pub fn clamp_ranges(&mut self) {
        self.ambient_intensity = self.ambient_intensity.clamp(0.0, AMBIENT_INTENSITY_MAX);
        self.reflection_intensity = self
            .reflection_intensity
            .clamp(0.0, REFLECTION_INTENSITY_MAX);
    }
}
