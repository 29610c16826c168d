//! Simulation and host configuration
//!
//! Physical constants used to live on each simulation instance. They are
//! passed in at construction instead so scenarios can be parameterized.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::renderer::{Color, colors};

/// Errors from loading or validating settings
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

/// Parameters of a falling magnet simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagnetConfig {
    /// Downward acceleration (simulated units/s²)
    pub gravity: f32,
    /// Simulated seconds per real second
    pub time_scale: f32,
    /// Eddy-current damping coefficient inside the copper pipe
    pub braking: f32,

    pub background: Color,
    pub magnet_color: Color,
    pub pvc_color: Color,
    pub copper_color: Color,
    /// Copper color at the pipe centerline (cylindrical shading)
    pub copper_inner_color: Color,
}

impl Default for MagnetConfig {
    fn default() -> Self {
        Self {
            gravity: consts::GRAVITY,
            time_scale: consts::TIME_SCALE,
            braking: consts::COPPER_BRAKING,

            background: colors::BACKGROUND,
            magnet_color: colors::MAGNET,
            pvc_color: colors::PVC,
            copper_color: colors::COPPER,
            copper_inner_color: colors::COPPER_INNER,
        }
    }
}

impl MagnetConfig {
    /// Steady fall speed inside the copper pipe, where braking cancels gravity
    pub fn terminal_velocity(&self) -> Option<f32> {
        (self.braking > 0.0).then(|| self.gravity / self.braking)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("gravity", self.gravity),
            ("time_scale", self.time_scale),
            ("braking", self.braking),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.time_scale == 0.0 {
            return Err(ConfigError::Invalid("time_scale must be positive".into()));
        }
        Ok(())
    }
}

/// Frame loop options for [`crate::SimulationHost`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Window clear color, painted before any simulation renders
    pub clear_color: Color,
    /// Upper bound on a frame's delta time (seconds). `None` disables clamping.
    pub max_frame_dt: Option<f32>,
    /// Fixed update step (seconds). `None` updates once per frame with the frame delta.
    pub fixed_step: Option<f32>,
    /// Maximum fixed steps per frame
    pub max_substeps: u32,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            clear_color: colors::CLEAR,
            max_frame_dt: Some(consts::MAX_FRAME_DT),
            fixed_step: None,
            max_substeps: consts::MAX_SUBSTEPS,
        }
    }
}

impl HostConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(max) = self.max_frame_dt {
            if !max.is_finite() || max <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "max_frame_dt must be positive, got {max}"
                )));
            }
        }
        if let Some(step) = self.fixed_step {
            if !step.is_finite() || step <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "fixed_step must be positive, got {step}"
                )));
            }
            if self.max_substeps == 0 {
                return Err(ConfigError::Invalid(
                    "max_substeps must be at least 1 with a fixed step".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Top-level settings for the native driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: u32,
    pub window_height: u32,
    /// Number of side-by-side simulations
    pub simulations: usize,
    /// Frames to run in headless mode
    pub frames: u32,
    pub host: HostConfig,
    pub magnet: MagnetConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: consts::WINDOW_WIDTH,
            window_height: consts::WINDOW_HEIGHT,
            simulations: 2,
            frames: 600,
            host: HostConfig::default(),
            magnet: MagnetConfig::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulations == 0 {
            return Err(ConfigError::Invalid("at least one simulation is required".into()));
        }
        self.host.validate()?;
        self.magnet.validate()
    }

    pub fn window_size(&self) -> glam::Vec2 {
        glam::Vec2::new(self.window_width as f32, self.window_height as f32)
    }
}
