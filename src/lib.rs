//! Eddy Pipes - side-by-side magnet drop simulations
//!
//! A magnet falls alternately through a PVC pipe and a copper pipe. In the
//! copper pipe eddy currents brake it toward a constant terminal speed.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (components, lifecycle, magnet physics)
//! - `host`: Viewport assignment and the update-then-render frame loop
//! - `renderer`: Host rendering surface trait plus recording/tessellating surfaces
//! - `config`: Physical constants and frame loop settings

pub mod config;
pub mod host;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, HostConfig, MagnetConfig, Settings};
pub use host::{FrameStats, HostError, SimulationHost};
pub use sim::{Component, MagnetSimulation, PipeSlot, Simulation, Viewport};

/// Default constants
pub mod consts {
    /// Downward acceleration (simulated units/s²)
    pub const GRAVITY: f32 = 9.81;
    /// Simulated seconds per real second
    pub const TIME_SCALE: f32 = 20.0;
    /// Eddy-current damping coefficient in the copper pipe
    pub const COPPER_BRAKING: f32 = 0.8;

    /// Largest frame delta the host will simulate (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Maximum fixed substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    pub const WINDOW_WIDTH: u32 = 1200;
    pub const WINDOW_HEIGHT: u32 = 800;
}
