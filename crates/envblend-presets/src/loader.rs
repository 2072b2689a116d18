use std::path::Path;

use envblend_core::preset::EnvironmentPreset;
use thiserror::Error;

use crate::validator::{validate_preset, ValidationError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read preset file {path}: {reason}")]
    ReadError { path: String, reason: String },
    #[error("Failed to parse preset RON: {0}")]
    PresetParseError(String),
    #[error("Failed to serialize preset '{name}': {reason}")]
    SerializeError { name: String, reason: String },
    #[error("Preset '{name}' failed validation: {}", format_errors(.errors))]
    Invalid {
        name: String,
        errors: Vec<ValidationError>,
    },
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse and validate a single preset from a RON string.
pub fn load_preset_from_str(ron_str: &str) -> Result<EnvironmentPreset, LoadError> {
    let options = ron::Options::default();
    let preset: EnvironmentPreset = options
        .from_str(ron_str)
        .map_err(|e| LoadError::PresetParseError(e.to_string()))?;
    validate_preset(&preset).map_err(|errors| LoadError::Invalid {
        name: preset.name.clone(),
        errors,
    })?;
    Ok(preset)
}

/// Parse every source. Fails on the first invalid one.
pub fn load_presets(sources: &[&str]) -> Result<Vec<EnvironmentPreset>, LoadError> {
    sources.iter().map(|s| load_preset_from_str(s)).collect()
}

/// Read and parse a preset file.
pub fn load_preset_file(path: &Path) -> Result<EnvironmentPreset, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|e| LoadError::ReadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let preset = load_preset_from_str(&contents)?;
    log::debug!("Loaded preset '{}' from {}", preset.name, path.display());
    Ok(preset)
}

/// Serialize a preset as pretty RON, the format `load_preset_from_str` reads.
pub fn save_preset_to_string(preset: &EnvironmentPreset) -> Result<String, LoadError> {
    ron::ser::to_string_pretty(preset, ron::ser::PrettyConfig::default()).map_err(|e| {
        LoadError::SerializeError {
            name: preset.name.clone(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use envblend_core::preset::{FogPreset, SkyboxFaces, SunPreset};

    const NIGHT: &str = r#"(
        name: "Night",
        skybox: (
            front: "night_front",
            back: "night_back",
            left: "night_left",
            right: "night_right",
            up: "night_up",
            down: "night_down",
        ),
        fog: Some((color: (0.05, 0.05, 0.12), start: 5.0, end: 120.0)),
        sun: Some((intensity: 0.15, color: Some((0.6, 0.7, 1.0)))),
        ambient_intensity: 0.3,
        reflection_intensity: 0.2,
    )"#;

    #[test]
    fn test_load_single_preset() {
        let preset = load_preset_from_str(NIGHT).expect("should parse");
        assert_eq!(preset.name, "Night");
        assert_eq!(preset.skybox.up.as_str(), "night_up");
        let fog = preset.fog.expect("fog present");
        assert_eq!(fog.end, 120.0);
        let sun = preset.sun.expect("sun present");
        assert_eq!(sun.color, Some([0.6, 0.7, 1.0]));
        assert_eq!(preset.ambient_intensity, 0.3);
    }

    #[test]
    fn test_load_invalid_ron() {
        let result = load_preset_from_str("not valid ron {{{");
        assert!(matches!(result, Err(LoadError::PresetParseError(_))));
    }

    #[test]
    fn test_load_rejects_out_of_range() {
        let source = NIGHT.replace("ambient_intensity: 0.3", "ambient_intensity: 12.0");
        match load_preset_from_str(&source) {
            Err(LoadError::Invalid { name, errors }) => {
                assert_eq!(name, "Night");
                assert_eq!(errors.len(), 1);
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_load_presets_multiple() {
        let day = NIGHT.replace("\"Night\"", "\"Day\"");
        let presets = load_presets(&[NIGHT, &day]).expect("should parse");
        assert_eq!(presets.len(), 2);
        assert_eq!(presets[1].name, "Day");
    }

    #[test]
    fn test_saved_preset_loads_back() {
        let preset = EnvironmentPreset::new("Mid", SkyboxFaces::with_prefix("mid"))
            .with_fog(FogPreset {
                color: [0.8, 0.6, 0.4],
                start: 20.0,
                end: 200.0,
            })
            .with_sun(SunPreset {
                intensity: 0.8,
                color: None,
            })
            .with_intensities(0.7, 0.5);
        let ron = save_preset_to_string(&preset).expect("serialize");
        let loaded = load_preset_from_str(&ron).expect("should parse");
        assert_eq!(loaded, preset);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_preset_file(Path::new("/nonexistent/dusk.ron")).expect_err("should fail");
        assert!(err.to_string().contains("dusk.ron"));
    }
}
