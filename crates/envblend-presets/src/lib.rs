pub mod apply;
pub mod capture;
pub mod error;
pub mod loader;
pub mod registry;
pub mod validator;

pub use apply::apply_to_scene;
pub use capture::{load_current_settings, CaptureReport};
pub use error::{CaptureError, PresetError, SceneWarning};
pub use loader::{load_preset_from_str, load_presets, save_preset_to_string, LoadError};
pub use registry::PresetRegistry;
pub use validator::{validate_preset, ValidationError};
