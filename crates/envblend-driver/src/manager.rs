use std::sync::Arc;

use envblend_core::constants::{BLEND_PROPERTY, BLEND_REST, ROTATION_PROPERTY};
use envblend_core::host::{EnvironmentHost, SkyboxMaterial};
use envblend_core::preset::EnvironmentPreset;
use envblend_presets::apply::apply_to_scene;
use envblend_presets::capture::{load_current_settings, CaptureReport};
use envblend_presets::error::{CaptureError, PresetError, SceneWarning};
use envblend_presets::registry::PresetRegistry;

use crate::config::ManagerConfig;
use crate::history::PresetHistory;
use crate::rotation::SkyboxRotation;
use crate::session::BlendSession;
use crate::state::EnvironmentState;

/// Name given to the preset captured from the scene at construction.
pub const INITIAL_PRESET_NAME: &str = "Initial";

/// Blends the host environment between registered presets.
///
/// Owns the host adapter and the registry. Call `tick` once per frame with
/// the frame's elapsed seconds. At most one blend runs at a time: starting
/// a new one drops the old one and continues from whatever the host shows
/// at that moment.
pub struct EnvironmentManager<H: EnvironmentHost> {
    host: H,
    registry: PresetRegistry,
    sun_light_name: String,
    history: PresetHistory,
    rotation: SkyboxRotation,
    session: Option<BlendSession>,
    /// Scene state captured at construction, if the capture succeeded.
    initial: Option<Arc<EnvironmentPreset>>,
}

impl<H: EnvironmentHost> EnvironmentManager<H> {
    /// Take over `host`, picking up its current skybox rotation and
    /// capturing its current environment as the initial preset.
    pub fn new(host: H, registry: PresetRegistry, config: &ManagerConfig) -> Self {
        let start_angle = host
            .skybox()
            .and_then(|m| m.float(ROTATION_PROPERTY))
            .unwrap_or(0.0);
        let rotation = SkyboxRotation::new(start_angle, config.skybox_rotation_speed);

        let initial =
            match load_current_settings(&host, INITIAL_PRESET_NAME, &config.sun_light_name) {
                Ok(report) => Some(Arc::new(report.preset)),
                Err(e) => {
                    log::error!("Initial scene environment not captured: {}", e);
                    None
                }
            };

        log::info!(
            "Environment manager ready: {} presets, skybox rotation {}°/s",
            registry.len(),
            config.skybox_rotation_speed
        );

        Self {
            host,
            registry,
            sun_light_name: config.sun_light_name.clone(),
            history: PresetHistory::new(),
            rotation,
            session: None,
            initial,
        }
    }

    /// Start blending toward the registered preset `name`. An unknown name
    /// changes nothing.
    pub fn blend_to_named(&mut self, name: &str, duration: f32) -> Result<(), PresetError> {
        let preset = self.registry.lookup(name)?;
        self.blend_to(preset, duration);
        Ok(())
    }

    /// Start blending toward `preset` over `duration` seconds, replacing any
    /// blend in progress. A duration of zero or less applies the preset
    /// immediately.
    pub fn blend_to(&mut self, preset: Arc<EnvironmentPreset>, duration: f32) {
        if let Some(old) = self.session.take() {
            log::debug!(
                "Blend toward '{}' cancelled at {:.0}%",
                old.preset().name,
                old.progress() * 100.0
            );
        }

        self.history.push(Arc::clone(&preset));

        let start = EnvironmentState::read(&self.host, &self.sun_light_name);
        if start.sun.is_none() && preset.sun.is_some() {
            log::warn!(
                "Blending '{}': {}",
                preset.name,
                SceneWarning::LightNotFound(self.sun_light_name.clone())
            );
        }

        match self.host.skybox_mut() {
            Some(material) => {
                for (face, texture) in preset.skybox.iter() {
                    material.set_texture(face.overlay_slot(), texture.clone());
                }
            }
            None => log::warn!("Blending '{}': {}", preset.name, SceneWarning::MissingSkybox),
        }

        log::debug!("Blending toward '{}' over {}s", preset.name, duration);
        let session = BlendSession::new(start, preset, duration);
        if session.is_complete() {
            self.finish(session);
        } else {
            self.session = Some(session);
        }
    }

    /// Blend back toward the preset that was active before the current one.
    /// Returns false when fewer than two presets have been blended in.
    pub fn invert_to_previous(&mut self, duration: f32) -> bool {
        match self.history.previous() {
            Some(previous) => {
                let previous = Arc::clone(previous);
                self.blend_to(previous, duration);
                true
            }
            None => {
                log::warn!("No previous environment preset to invert to");
                false
            }
        }
    }

    /// Advance one frame: spin the skybox and step the running blend.
    pub fn tick(&mut self, delta_time: f32) {
        let angle = self.rotation.advance(delta_time);
        if let Some(material) = self.host.skybox_mut() {
            material.set_float(ROTATION_PROPERTY, angle);
        }

        let complete = match self.session.as_mut() {
            Some(session) => {
                let state = session.advance(delta_time);
                state.write(&mut self.host, &self.sun_light_name);
                session.is_complete()
            }
            None => false,
        };

        if complete {
            if let Some(session) = self.session.take() {
                self.finish(session);
            }
        }
    }

    /// Pin the host to the session's target and move the incoming faces
    /// into the base slots.
    fn finish(&mut self, session: BlendSession) {
        session
            .target()
            .write(&mut self.host, &self.sun_light_name);

        if let Some(material) = self.host.skybox_mut() {
            for (face, texture) in session.preset().skybox.iter() {
                material.set_texture(face.base_slot(), texture.clone());
            }
            material.set_float(BLEND_PROPERTY, BLEND_REST);
        }

        log::info!("Environment blended to '{}'", session.preset().name);
    }

    /// Capture the host's current environment as a new preset.
    pub fn load_current_settings(&self, name: &str) -> Result<CaptureReport, CaptureError> {
        load_current_settings(&self.host, name, &self.sun_light_name)
    }

    /// Write `preset` straight into the host. Any running blend is dropped
    /// so the next tick does not overwrite it; the history is unchanged.
    pub fn apply_to_scene(&mut self, preset: &EnvironmentPreset) -> Vec<SceneWarning> {
        if self.session.take().is_some() {
            log::debug!("Blend dropped by direct apply of '{}'", preset.name);
        }
        apply_to_scene(&mut self.host, preset, &self.sun_light_name)
    }

    pub fn is_blending(&self) -> bool {
        self.session.is_some()
    }

    /// Progress of the running blend, or None when idle.
    pub fn progress(&self) -> Option<f32> {
        self.session.as_ref().map(BlendSession::progress)
    }

    pub fn current_preset(&self) -> Option<&Arc<EnvironmentPreset>> {
        self.history.current()
    }

    pub fn previous_preset(&self) -> Option<&Arc<EnvironmentPreset>> {
        self.history.previous()
    }

    pub fn initial_preset(&self) -> Option<&Arc<EnvironmentPreset>> {
        self.initial.as_ref()
    }

    pub fn rotation_angle(&self) -> f32 {
        self.rotation.angle()
    }

    pub fn set_rotation_speed(&mut self, speed: f32) {
        self.rotation.set_speed(speed);
    }

    pub fn registry(&self) -> &PresetRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut PresetRegistry {
        &mut self.registry
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Give the host back, dropping any running blend.
    pub fn into_host(self) -> H {
        self.host
    }
}
