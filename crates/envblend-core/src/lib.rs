pub mod constants;
pub mod host;
pub mod math;
pub mod memory;
pub mod preset;
pub mod types;

pub use host::{EnvironmentHost, RenderSettings, SceneLight, SkyboxMaterial};
pub use memory::{MemoryHost, MemoryLight, MemorySkybox};
pub use preset::{EnvironmentPreset, FogPreset, SkyboxFaces, SunPreset};
pub use types::{Color, Face, FogMode, TextureId};
