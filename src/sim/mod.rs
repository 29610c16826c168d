//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure:
//! - Time only advances through `update(dt)`
//! - No platform dependencies, drawing goes through [`crate::renderer::Surface`]
//! - No simulation reads another's state

pub mod component;
pub mod magnet;
pub mod simulation;

pub use component::{Component, overlaps};
pub use magnet::{MagnetSimulation, PipeSlot};
pub use simulation::{Clock, Lifecycle, Phase, Simulate, Simulation, Viewport};
