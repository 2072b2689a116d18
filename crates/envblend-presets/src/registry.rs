use std::collections::HashMap;
use std::sync::Arc;

use envblend_core::preset::EnvironmentPreset;

use crate::error::PresetError;

/// Presets available for blending, keyed by name.
///
/// Filled once at startup from the preload list. Registering a name that
/// already exists replaces the old entry. There is no removal.
#[derive(Debug, Clone, Default)]
pub struct PresetRegistry {
    presets: HashMap<String, Arc<EnvironmentPreset>>,
}

impl PresetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry keyed by each preset's own name.
    pub fn from_presets(presets: impl IntoIterator<Item = EnvironmentPreset>) -> Self {
        let mut registry = Self::new();
        for preset in presets {
            let name = preset.name.clone();
            registry.register(name, preset);
        }
        registry
    }

    /// Store `preset` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, preset: EnvironmentPreset) {
        let name = name.into();
        if self.presets.insert(name.clone(), Arc::new(preset)).is_some() {
            log::debug!("Preset '{}' replaced an earlier registration", name);
        }
    }

    pub fn lookup(&self, name: &str) -> Result<Arc<EnvironmentPreset>, PresetError> {
        self.presets
            .get(name)
            .cloned()
            .ok_or_else(|| PresetError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
