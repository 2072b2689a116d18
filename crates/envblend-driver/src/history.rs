use std::sync::Arc;

use envblend_core::preset::EnvironmentPreset;

/// The last two presets blended toward, as a two-slot ring.
///
/// Pushing moves the current preset into the previous slot; whatever was
/// there before falls out.
#[derive(Debug, Clone, Default)]
pub struct PresetHistory {
    slots: [Option<Arc<EnvironmentPreset>>; 2],
    /// Index of the slot holding the current preset.
    head: usize,
}

impl PresetHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, preset: Arc<EnvironmentPreset>) {
        self.head = (self.head + 1) % self.slots.len();
        self.slots[self.head] = Some(preset);
    }

    pub fn current(&self) -> Option<&Arc<EnvironmentPreset>> {
        self.slots[self.head].as_ref()
    }

    /// The preset active immediately before the current one. None until
    /// two presets have been pushed.
    pub fn previous(&self) -> Option<&Arc<EnvironmentPreset>> {
        let prev = (self.head + self.slots.len() - 1) % self.slots.len();
        self.slots[prev].as_ref()
    }
}
