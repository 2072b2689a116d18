use serde::{Deserialize, Serialize};

/// Linear RGB color (0.0–1.0 per channel).
pub type Color = [f32; 3];

/// Handle naming a texture owned by the host engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextureId(pub String);

impl TextureId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for TextureId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Fog falloff model reported by the host. Only `Linear` fog has the
/// start/end distances a preset stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FogMode {
    #[default]
    Linear,
    Exponential,
    ExponentialSquared,
}

/// One face of a six-sided skybox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// +Z
    Front,
    /// -Z
    Back,
    /// +X
    Left,
    /// -X
    Right,
    /// +Y
    Up,
    /// -Y
    Down,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Up,
        Face::Down,
    ];

    /// Material slot holding the face currently shown.
    pub fn base_slot(self) -> &'static str {
        match self {
            Face::Front => "_FrontTex",
            Face::Back => "_BackTex",
            Face::Left => "_LeftTex",
            Face::Right => "_RightTex",
            Face::Up => "_UpTex",
            Face::Down => "_DownTex",
        }
    }

    /// Material slot holding the face being faded in.
    pub fn overlay_slot(self) -> &'static str {
        match self {
            Face::Front => "_FrontTex2",
            Face::Back => "_BackTex2",
            Face::Left => "_LeftTex2",
            Face::Right => "_RightTex2",
            Face::Up => "_UpTex2",
            Face::Down => "_DownTex2",
        }
    }
}
