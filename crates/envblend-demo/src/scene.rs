use envblend_core::memory::{MemoryHost, MemoryLight, MemorySkybox};
use envblend_core::preset::SkyboxFaces;
use envblend_core::types::FogMode;

/// A daylight scene to start the demo from: linear fog, one sun light and
/// a six-sided skybox.
pub fn demo_host(sun_light_name: &str) -> MemoryHost {
    let mut host = MemoryHost::new()
        .with_skybox(MemorySkybox::with_faces(&SkyboxFaces::with_prefix("sky/start")))
        .with_light(
            sun_light_name,
            MemoryLight {
                color: [1.0, 0.95, 0.85],
                intensity: 1.1,
                use_color_temperature: false,
            },
        );
    host.fog_mode = FogMode::Linear;
    host.fog_color = [0.7, 0.75, 0.8];
    host.fog_start = 25.0;
    host.fog_end = 350.0;
    host
}

#[cfg(test)]
mod tests {
    use super::*;
    use envblend_presets::capture::load_current_settings;

    #[test]
    fn test_demo_host_captures_cleanly() {
        let host = demo_host("Sun");
        let report = load_current_settings(&host, "Start", "Sun").expect("capture");
        assert!(report.warnings.is_empty());
    }
}
