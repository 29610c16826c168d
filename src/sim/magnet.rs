//! Falling magnet through PVC and copper pipes
//!
//! The magnet drops through one pipe, reappears above the other once it
//! leaves the bottom of the viewport, and repeats. Inside the copper pipe
//! eddy currents oppose the motion with a force proportional to speed, so the
//! fall settles toward `gravity / braking`. PVC is not conductive and the
//! magnet falls freely.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::component::Component;
use super::simulation::{Lifecycle, Phase};
use crate::config::MagnetConfig;
use crate::renderer::Surface;

/// Which pipe the magnet is currently falling through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PipeSlot {
    #[default]
    Pvc,
    Copper,
}

impl PipeSlot {
    pub const ALL: [PipeSlot; 2] = [PipeSlot::Pvc, PipeSlot::Copper];

    /// Index into per-pipe tables
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PipeSlot::Pvc => 0,
            PipeSlot::Copper => 1,
        }
    }

    /// Transition taken when the magnet reaches the bottom
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            PipeSlot::Pvc => PipeSlot::Copper,
            PipeSlot::Copper => PipeSlot::Pvc,
        }
    }

    pub const fn is_conductive(self) -> bool {
        matches!(self, PipeSlot::Copper)
    }
}

#[derive(Debug, Clone)]
pub struct MagnetSimulation {
    config: MagnetConfig,
    lifecycle: Lifecycle,

    pipe_pvc: Component,
    pipe_copper: Component,
    magnet: Component,

    /// Downward speed (simulated units/s)
    magnet_speed: f32,
    /// Rest position above each pipe, indexed by `PipeSlot::index`
    start_positions: [Vec2; 2],
    active_pipe: PipeSlot,
    /// Pipe swaps since the last reset
    swaps: u64,
}

impl MagnetSimulation {
    pub fn new(config: MagnetConfig) -> Self {
        Self {
            pipe_pvc: Component::new(config.pvc_color),
            pipe_copper: Component::shaded(config.copper_color, config.copper_inner_color),
            magnet: Component::new(config.magnet_color),
            config,
            lifecycle: Lifecycle::default(),
            magnet_speed: 0.0,
            start_positions: [Vec2::ZERO; 2],
            active_pipe: PipeSlot::Pvc,
            swaps: 0,
        }
    }

    pub fn config(&self) -> &MagnetConfig {
        &self.config
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.phase
    }

    pub fn magnet(&self) -> &Component {
        &self.magnet
    }

    pub fn pipe(&self, slot: PipeSlot) -> &Component {
        match slot {
            PipeSlot::Pvc => &self.pipe_pvc,
            PipeSlot::Copper => &self.pipe_copper,
        }
    }

    pub fn magnet_speed(&self) -> f32 {
        self.magnet_speed
    }

    pub fn active_pipe(&self) -> PipeSlot {
        self.active_pipe
    }

    pub fn start_position(&self, slot: PipeSlot) -> Vec2 {
        self.start_positions[slot.index()]
    }

    pub fn swap_count(&self) -> u64 {
        self.swaps
    }

    pub fn assign_viewport(&mut self, position: Vec2, size: Vec2) {
        self.lifecycle.viewport.position = position;
        self.lifecycle.viewport.size = size;
    }

    /// Derive all geometry from the viewport size
    ///
    /// With `h` the viewport height and `x = h / 10`:
    /// - pipes are `1.5x` by `h / 2`, centered at a quarter and three
    ///   quarters of the width, `0.7h` down
    /// - the magnet is `x` by `x / 3`, centered above the PVC pipe at `0.05h`
    pub fn reset(&mut self) {
        let view = self.lifecycle.viewport.size;
        let x = view.y / 10.0;

        let pipe_size = Vec2::new(1.5 * x, 0.5 * view.y);
        self.pipe_pvc
            .place_centered(Vec2::new(view.x / 4.0, 0.7 * view.y), pipe_size);
        self.pipe_copper
            .place_centered(Vec2::new(3.0 * view.x / 4.0, 0.7 * view.y), pipe_size);

        let magnet_center = Vec2::new(self.pipe_pvc.center().x, 0.05 * view.y);
        self.magnet
            .place_centered(magnet_center, Vec2::new(x, x / 3.0));

        let pipe_offset = self.pipe_copper.position.x - self.pipe_pvc.position.x;
        self.start_positions = [
            self.magnet.position,
            self.magnet.position + Vec2::X * pipe_offset,
        ];

        self.magnet_speed = 0.0;
        self.active_pipe = PipeSlot::Pvc;
        self.swaps = 0;
        self.lifecycle.mark_reset();

        log::info!(
            "Magnet simulation reset: viewport {}x{}, pipes {}x{}",
            view.x,
            view.y,
            pipe_size.x,
            pipe_size.y
        );
    }

    pub fn start(&mut self) {
        self.lifecycle.start("magnet");
    }

    /// Current downward acceleration
    ///
    /// Braking engages whenever the magnet's box touches the copper pipe's box.
    pub fn acceleration(&self) -> f32 {
        let mut acc = self.config.gravity;
        if self.magnet.overlaps(&self.pipe_copper) {
            acc -= self.config.braking * self.magnet_speed;
        }
        acc
    }

    /// Advance by `dt` real seconds
    ///
    /// `dt` is not clamped here. A large step can carry the magnet past the
    /// copper pipe or the bottom edge without the braking or swap seeing it.
    pub fn update(&mut self, dt: f32) {
        if !self.lifecycle.accepts_update("magnet") {
            return;
        }

        let sim_dt = dt * self.config.time_scale;
        self.lifecycle.clock.advance(dt, sim_dt);

        let acc = self.acceleration();
        self.magnet_speed += sim_dt * acc;
        self.magnet.position.y += sim_dt * self.magnet_speed;

        if self.magnet.position.y >= self.lifecycle.viewport.size.y {
            self.change_magnet_pipe();
        }
    }

    /// Stop the magnet and move it above the other pipe
    pub fn change_magnet_pipe(&mut self) {
        self.magnet_speed = 0.0;
        self.active_pipe = self.active_pipe.other();
        self.magnet.position = self.start_positions[self.active_pipe.index()];
        self.swaps += 1;

        log::debug!(
            "Magnet moved to {:?} pipe after {:.2}s simulated ({} swaps)",
            self.active_pipe,
            self.lifecycle.clock.simulated,
            self.swaps
        );
    }

    /// Paint background, PVC pipe, copper pipe, then magnet
    pub fn render(&self, surface: &mut dyn Surface) {
        let viewport = self.lifecycle.viewport;
        surface.fill_rect(viewport.position, viewport.size, self.config.background);

        self.pipe_pvc.draw(surface, viewport.position);
        self.pipe_copper.draw(surface, viewport.position);
        self.magnet.draw(surface, viewport.position);
    }
}
