pub mod config;
pub mod history;
pub mod manager;
pub mod rotation;
pub mod session;
pub mod state;

pub use config::{ConfigError, ManagerConfig};
pub use history::PresetHistory;
pub use manager::EnvironmentManager;
pub use rotation::SkyboxRotation;
pub use session::BlendSession;
pub use state::{EnvironmentState, SunState};
