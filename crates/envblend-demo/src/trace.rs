use std::path::Path;

use envblend_core::host::{EnvironmentHost, SceneLight};
use envblend_driver::manager::EnvironmentManager;

/// Environment values observed at one frame of a demo run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TraceFrame {
    pub frame: u32,
    pub time: f32,
    pub preset: Option<String>,
    pub progress: Option<f32>,
    pub ambient_intensity: f32,
    pub reflection_intensity: f32,
    pub fog_end: f32,
    pub sun_intensity: Option<f32>,
    pub rotation: f32,
}

impl TraceFrame {
    pub fn observe<H: EnvironmentHost>(
        manager: &EnvironmentManager<H>,
        sun_light_name: &str,
        frame: u32,
        time: f32,
    ) -> Self {
        let host = manager.host();
        Self {
            frame,
            time,
            preset: manager.current_preset().map(|p| p.name.clone()),
            progress: manager.progress(),
            ambient_intensity: host.ambient_intensity(),
            reflection_intensity: host.reflection_intensity(),
            fog_end: host.fog_end(),
            sun_intensity: host.find_light(sun_light_name).map(|l| l.intensity()),
            rotation: manager.rotation_angle(),
        }
    }
}

/// Sampled frames from a whole demo run.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Trace {
    pub frames: Vec<TraceFrame>,
}

/// Save a trace as pretty JSON, creating parent directories.
pub fn save_trace(path: &Path, trace: &Trace) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(trace).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Format a trace as a markdown table.
pub fn format_markdown(trace: &Trace) -> String {
    let mut out = String::new();
    out.push_str("| Frame | Time (s) | Preset | Progress | Ambient | Reflection | Fog end | Sun | Rotation |\n");
    out.push_str("|-------|----------|--------|----------|---------|------------|---------|-----|----------|\n");

    for f in &trace.frames {
        let progress = f
            .progress
            .map(|p| format!("{:.0}%", p * 100.0))
            .unwrap_or_else(|| "-".to_string());
        let sun = f
            .sun_intensity
            .map(|s| format!("{:.2}", s))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "| {} | {:.2} | {} | {} | {:.2} | {:.2} | {:.1} | {} | {:.1} |\n",
            f.frame,
            f.time,
            f.preset.as_deref().unwrap_or("-"),
            progress,
            f.ambient_intensity,
            f.reflection_intensity,
            f.fog_end,
            sun,
            f.rotation,
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(n: u32, preset: Option<&str>, progress: Option<f32>) -> TraceFrame {
        TraceFrame {
            frame: n,
            time: n as f32 / 60.0,
            preset: preset.map(str::to_string),
            progress,
            ambient_intensity: 1.0,
            reflection_intensity: 0.5,
            fog_end: 300.0,
            sun_intensity: None,
            rotation: 12.0,
        }
    }

    #[test]
    fn test_markdown_has_row_per_frame() {
        let trace = Trace {
            frames: vec![frame(0, None, None), frame(60, Some("Mid"), Some(0.2))],
        };
        let md = format_markdown(&trace);
        assert_eq!(md.lines().count(), 4);
        assert!(md.contains("| Mid | 20% |"));
        assert!(md.contains("| 0 | 0.00 | - | - |"));
    }

    #[test]
    fn test_trace_json_round_trip() {
        let trace = Trace {
            frames: vec![frame(30, Some("Night"), Some(0.5))],
        };
        let json = serde_json::to_string(&trace).expect("serialize");
        let back: Trace = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.frames, trace.frames);
    }
}
