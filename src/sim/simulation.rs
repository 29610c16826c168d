//! Simulation lifecycle
//!
//! Every simulation goes `Uninitialized -> Reset -> Running`:
//! - `reset` derives geometry from the viewport size
//! - `start` records the time origin
//! - `update` advances physics, `render` only draws
//!
//! The set of simulations is closed; [`Simulation`] dispatches by `match`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::magnet::MagnetSimulation;
use crate::config::MagnetConfig;
use crate::renderer::Surface;

/// Sub-rectangle of the window owned by one simulation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    /// Top-left corner in window pixels
    pub position: Vec2,
    pub size: Vec2,
}

impl Viewport {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
    }
}

/// Lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Constructed, geometry not derived yet
    #[default]
    Uninitialized,
    /// Geometry derived, waiting for `start`
    Reset,
    /// Accepting updates
    Running,
}

/// Elapsed time since `start`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Clock {
    /// Real (host) seconds
    pub real: f64,
    /// Simulated seconds (real time multiplied by the time scale)
    pub simulated: f64,
    /// Number of updates applied
    pub ticks: u64,
}

impl Clock {
    pub fn advance(&mut self, real_dt: f32, sim_dt: f32) {
        self.real += real_dt as f64;
        self.simulated += sim_dt as f64;
        self.ticks += 1;
    }
}

/// State shared by every simulation variant
#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    pub viewport: Viewport,
    pub phase: Phase,
    pub clock: Clock,
    misuse_reported: bool,
}

impl Lifecycle {
    pub fn mark_reset(&mut self) {
        self.phase = Phase::Reset;
        self.clock = Clock::default();
        self.misuse_reported = false;
    }

    /// Enter `Running`. Returns false (and stays put) if `reset` never ran.
    pub fn start(&mut self, name: &str) -> bool {
        match self.phase {
            Phase::Reset => {
                self.phase = Phase::Running;
                self.clock = Clock::default();
                true
            }
            Phase::Running => {
                log::warn!("{name}: start called while already running, ignoring");
                false
            }
            Phase::Uninitialized => {
                log::warn!("{name}: start called before reset, ignoring");
                false
            }
        }
    }

    /// True when an update may proceed. Misuse is reported once.
    pub fn accepts_update(&mut self, name: &str) -> bool {
        if self.phase == Phase::Running {
            return true;
        }
        if !self.misuse_reported {
            log::warn!("{name}: update called in {:?} phase, ignoring", self.phase);
            self.misuse_reported = true;
        }
        false
    }
}

/// Lifecycle the host drives, in the order `assign_viewport`, `reset`,
/// `start`, then `update`/`render` every frame
pub trait Simulate {
    fn assign_viewport(&mut self, position: Vec2, size: Vec2);
    fn viewport(&self) -> Viewport;
    fn reset(&mut self);
    fn start(&mut self);
    fn update(&mut self, dt: f32);
    fn render(&self, surface: &mut dyn Surface);
}

/// All simulation variants the host can run
#[derive(Debug, Clone)]
pub enum Simulation {
    Magnet(MagnetSimulation),
}

impl Simulation {
    /// A falling magnet simulation
    pub fn magnet(config: MagnetConfig) -> Self {
        Simulation::Magnet(MagnetSimulation::new(config))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Simulation::Magnet(_) => "magnet",
        }
    }

    fn lifecycle(&self) -> &Lifecycle {
        match self {
            Simulation::Magnet(sim) => sim.lifecycle(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.lifecycle().viewport
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle().phase
    }

    pub fn clock(&self) -> &Clock {
        &self.lifecycle().clock
    }

    /// Assign the window region. Must be followed by `reset`.
    pub fn assign_viewport(&mut self, position: Vec2, size: Vec2) {
        match self {
            Simulation::Magnet(sim) => sim.assign_viewport(position, size),
        }
    }

    pub fn reset(&mut self) {
        match self {
            Simulation::Magnet(sim) => sim.reset(),
        }
    }

    pub fn start(&mut self) {
        match self {
            Simulation::Magnet(sim) => sim.start(),
        }
    }

    pub fn update(&mut self, dt: f32) {
        match self {
            Simulation::Magnet(sim) => sim.update(dt),
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Simulation::Magnet(sim) => sim.render(surface),
        }
    }

    pub fn as_magnet(&self) -> Option<&MagnetSimulation> {
        match self {
            Simulation::Magnet(sim) => Some(sim),
        }
    }
}

impl Simulate for Simulation {
    fn assign_viewport(&mut self, position: Vec2, size: Vec2) {
        Simulation::assign_viewport(self, position, size);
    }

    fn viewport(&self) -> Viewport {
        Simulation::viewport(self)
    }

    fn reset(&mut self) {
        Simulation::reset(self);
    }

    fn start(&mut self) {
        Simulation::start(self);
    }

    fn update(&mut self, dt: f32) {
        Simulation::update(self, dt);
    }

    fn render(&self, surface: &mut dyn Surface) {
        Simulation::render(self, surface);
    }
}

impl From<MagnetSimulation> for Simulation {
    fn from(sim: MagnetSimulation) -> Self {
        Simulation::Magnet(sim)
    }
}
