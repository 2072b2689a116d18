use std::sync::Arc;

use envblend_core::preset::EnvironmentPreset;

use crate::state::EnvironmentState;

/// One time-based interpolation from a start snapshot toward a preset.
///
/// Progress is the elapsed fraction of `duration`, kept in [0, 1]. A
/// duration that is zero, negative or not finite completes on creation.
#[derive(Debug, Clone)]
pub struct BlendSession {
    preset: Arc<EnvironmentPreset>,
    start: EnvironmentState,
    target: EnvironmentState,
    duration: f32,
    progress: f32,
}

impl BlendSession {
    pub fn new(start: EnvironmentState, preset: Arc<EnvironmentPreset>, duration: f32) -> Self {
        let target = start.toward(&preset);
        let progress = if is_instant(duration) { 1.0 } else { 0.0 };
        Self {
            preset,
            start,
            target,
            duration,
            progress,
        }
    }

    /// Move forward by `delta_time` seconds and return the state to show.
    /// A frame-time spike that overshoots the end lands exactly on it.
    pub fn advance(&mut self, delta_time: f32) -> EnvironmentState {
        if is_instant(self.duration) {
            self.progress = 1.0;
        } else if delta_time > 0.0 {
            self.progress = (self.progress + delta_time / self.duration).min(1.0);
        }
        self.current()
    }

    /// State at an arbitrary progress, clamped to [0, 1].
    pub fn sample(&self, progress: f32) -> EnvironmentState {
        let t = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        self.start.lerp(&self.target, t)
    }

    pub fn current(&self) -> EnvironmentState {
        self.sample(self.progress)
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn preset(&self) -> &Arc<EnvironmentPreset> {
        &self.preset
    }

    pub fn start(&self) -> &EnvironmentState {
        &self.start
    }

    pub fn target(&self) -> &EnvironmentState {
        &self.target
    }
}

fn is_instant(duration: f32) -> bool {
    !(duration.is_finite() && duration > 0.0)
}
