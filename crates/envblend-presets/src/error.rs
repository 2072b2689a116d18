/// Errors from preset registry lookups.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("no environment preset named '{0}'")]
    NotFound(String),
}

/// Errors that abort a scene capture. No partial preset is produced.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("preset cannot be captured: no skybox material is assigned to the render settings")]
    MissingSkybox,

    #[error("preset cannot be captured: skybox material has no texture in slot {slot}")]
    MissingTexture { slot: &'static str },
}

/// A collaborator that was skipped while capturing or applying a preset.
/// The rest of the operation still goes through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneWarning {
    /// Fog was skipped because the host fog mode is not linear.
    #[error("fog skipped: fog mode is not linear")]
    FogNotLinear,
    /// No light with this name exists in the scene.
    #[error("sun skipped: cannot find light \"{0}\" in scene")]
    LightNotFound(String),
    /// The light's color comes from a color-temperature model.
    #[error("sun color skipped: light \"{0}\" uses color temperature")]
    ColorTemperature(String),
    /// No skybox material is assigned.
    #[error("skybox skipped: no skybox material assigned")]
    MissingSkybox,
}
