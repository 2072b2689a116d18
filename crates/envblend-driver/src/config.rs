use std::path::{Path, PathBuf};

use envblend_core::constants::SUN_LIGHT_NAME;
use envblend_presets::loader::{load_preset_file, LoadError};
use envblend_presets::registry::PresetRegistry;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read manager config {path}: {reason}")]
    ReadError { path: String, reason: String },
    #[error("Failed to parse manager config RON: {0}")]
    ParseError(String),
}

/// Settings for an `EnvironmentManager`, usually loaded from `manager.ron`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Skybox spin in degrees per second.
    pub skybox_rotation_speed: f32,
    /// Name of the scene light blended as the sun.
    pub sun_light_name: String,
    /// Preset files registered at startup. Relative paths resolve against
    /// the directory passed to `preload_registry`.
    pub preload: Vec<PathBuf>,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            skybox_rotation_speed: 0.0,
            sun_light_name: SUN_LIGHT_NAME.to_string(),
            preload: Vec::new(),
        }
    }
}

impl ManagerConfig {
    pub fn from_ron_str(ron_str: &str) -> Result<Self, ConfigError> {
        let options = ron::Options::default();
        options
            .from_str(ron_str)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_ron_str(&contents)
    }

    /// Load every preload file into a fresh registry.
    pub fn preload_registry(&self, base_dir: &Path) -> Result<PresetRegistry, LoadError> {
        let mut registry = PresetRegistry::new();
        for path in &self.preload {
            let preset = load_preset_file(&base_dir.join(path))?;
            let name = preset.name.clone();
            registry.register(name, preset);
        }
        log::info!("Preloaded {} environment presets", registry.len());
        Ok(registry)
    }
}
