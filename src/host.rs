//! Simulation host
//!
//! Owns the simulations, hands each its window region, and drives the
//! frame: every update first, then every render, both in collection order.

use glam::Vec2;

use crate::config::HostConfig;
use crate::renderer::Surface;
use crate::sim::{Simulate, Simulation};

/// Errors from index-addressed host operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    NoSuchSimulation { index: usize, len: usize },
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostError::NoSuchSimulation { index, len } => {
                write!(f, "no simulation at index {index} (host has {len})")
            }
        }
    }
}

impl std::error::Error for HostError {}

/// What a frame did
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    /// Updates applied to each simulation
    pub steps: u32,
    /// Delta time actually simulated (seconds)
    pub dt: f32,
    /// Whether the incoming delta was clamped
    pub clamped: bool,
}

/// Drives any [`Simulate`] implementor; [`Simulation`] by default
#[derive(Debug, Clone)]
pub struct SimulationHost<S = Simulation> {
    config: HostConfig,
    simulations: Vec<S>,
    /// Leftover time for fixed stepping
    accumulator: f32,
}

impl SimulationHost {
    pub fn new(config: HostConfig) -> Self {
        Self::with_config(config)
    }
}

impl<S: Simulate> SimulationHost<S> {
    pub fn with_config(config: HostConfig) -> Self {
        Self {
            config,
            simulations: Vec::new(),
            accumulator: 0.0,
        }
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Add a simulation, returning its index
    pub fn push(&mut self, simulation: impl Into<S>) -> usize {
        self.simulations.push(simulation.into());
        self.simulations.len() - 1
    }

    pub fn len(&self) -> usize {
        self.simulations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.simulations.is_empty()
    }

    pub fn simulations(&self) -> &[S] {
        &self.simulations
    }

    pub fn get(&self, index: usize) -> Option<&S> {
        self.simulations.get(index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut S, HostError> {
        let len = self.simulations.len();
        self.simulations
            .get_mut(index)
            .ok_or(HostError::NoSuchSimulation { index, len })
    }

    /// Assign a window region to one simulation
    ///
    /// Regions are not checked for overlap.
    pub fn assign_viewport(
        &mut self,
        index: usize,
        position: Vec2,
        size: Vec2,
    ) -> Result<(), HostError> {
        let simulation = self.get_mut(index)?;
        simulation.assign_viewport(position, size);
        if simulation.viewport().is_degenerate() {
            log::warn!("Simulation {index} assigned an empty viewport");
        }
        log::info!(
            "Simulation {index} viewport at ({}, {}) size {}x{}",
            position.x,
            position.y,
            size.x,
            size.y
        );
        Ok(())
    }

    /// Give every simulation an equal-width column of the window
    pub fn split_horizontally(&mut self, window_size: Vec2) {
        if self.simulations.is_empty() {
            return;
        }
        let width = window_size.x / self.simulations.len() as f32;
        let size = Vec2::new(width, window_size.y);
        for (index, simulation) in self.simulations.iter_mut().enumerate() {
            simulation.assign_viewport(Vec2::new(index as f32 * width, 0.0), size);
        }
        log::info!(
            "Split {}x{} window into {} columns",
            window_size.x,
            window_size.y,
            self.simulations.len()
        );
    }

    /// Reset then start every simulation
    pub fn begin(&mut self) {
        for simulation in &mut self.simulations {
            simulation.reset();
            simulation.start();
        }
        self.accumulator = 0.0;
    }

    /// Window size changed: re-split and restart
    pub fn resize(&mut self, window_size: Vec2) {
        self.split_horizontally(window_size);
        self.begin();
    }

    /// Clear the surface and draw every simulation without advancing time
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear(self.config.clear_color);
        for simulation in &self.simulations {
            simulation.render(surface);
        }
    }

    /// Run one frame against `surface`: all updates, then [`Self::render`]
    pub fn frame(&mut self, dt: f32, surface: &mut dyn Surface) -> FrameStats {
        let mut stats = FrameStats::default();

        let mut dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        if let Some(max) = self.config.max_frame_dt {
            if dt > max {
                log::warn!("Frame delta {dt:.3}s clamped to {max:.3}s");
                dt = max;
                stats.clamped = true;
            }
        }

        // Update cycle
        match self.config.fixed_step {
            None => {
                for simulation in &mut self.simulations {
                    simulation.update(dt);
                }
                stats.steps = 1;
                stats.dt = dt;
            }
            Some(step) => {
                self.accumulator += dt;
                while self.accumulator >= step && stats.steps < self.config.max_substeps {
                    for simulation in &mut self.simulations {
                        simulation.update(step);
                    }
                    self.accumulator -= step;
                    stats.steps += 1;
                }
                // Drop time we could not catch up on
                if stats.steps == self.config.max_substeps {
                    self.accumulator = self.accumulator.min(step);
                }
                stats.dt = stats.steps as f32 * step;
            }
        }

        self.render(surface);

        log::trace!("Frame: {} steps, {:.4}s", stats.steps, stats.dt);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MagnetConfig;
    use crate::renderer::{CommandList, DrawCommand};
    use crate::sim::{Phase, PipeSlot, Viewport};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn two_up() -> SimulationHost {
        let mut host = SimulationHost::new(HostConfig::default());
        host.push(Simulation::magnet(MagnetConfig::default()));
        host.push(Simulation::magnet(MagnetConfig::default()));
        host.split_horizontally(Vec2::new(1200.0, 800.0));
        host.begin();
        host
    }

    #[test]
    fn test_split_gives_equal_columns() {
        let host = two_up();
        let left = host.get(0).unwrap().viewport();
        let right = host.get(1).unwrap().viewport();
        assert_eq!(left.position, Vec2::ZERO);
        assert_eq!(right.position, Vec2::new(600.0, 0.0));
        assert_eq!(left.size, Vec2::new(600.0, 800.0));
        assert_eq!(right.size, left.size);
        assert!(host.simulations().iter().all(|s| s.phase() == Phase::Running));
    }

    #[test]
    fn test_assign_viewport_unknown_index() {
        let mut host = two_up();
        let err = host
            .assign_viewport(5, Vec2::ZERO, Vec2::ONE)
            .unwrap_err();
        assert_eq!(err, HostError::NoSuchSimulation { index: 5, len: 2 });
        assert!(host.assign_viewport(1, Vec2::ZERO, Vec2::ONE).is_ok());
    }

    #[test]
    fn test_frame_clears_then_renders_in_order() {
        let mut host = two_up();
        let mut list = CommandList::new(Vec2::new(1200.0, 800.0));
        let stats = host.frame(1.0 / 60.0, &mut list);

        assert_eq!(stats.steps, 1);
        assert!(!stats.clamped);
        assert!(matches!(list.commands[0], DrawCommand::Clear { .. }));
        // Clear + 5 commands per simulation
        assert_eq!(list.len(), 11);
        assert_eq!(list.commands[1].origin(), Some(Vec2::ZERO));
        assert_eq!(list.commands[6].origin(), Some(Vec2::new(600.0, 0.0)));
    }

    /// Logs lifecycle calls into a shared journal
    struct Journaled {
        id: usize,
        viewport: Viewport,
        journal: Rc<RefCell<Vec<(usize, &'static str)>>>,
    }

    impl Simulate for Journaled {
        fn assign_viewport(&mut self, position: Vec2, size: Vec2) {
            self.viewport = Viewport::new(position, size);
        }

        fn viewport(&self) -> Viewport {
            self.viewport
        }

        fn reset(&mut self) {}

        fn start(&mut self) {}

        fn update(&mut self, _dt: f32) {
            self.journal.borrow_mut().push((self.id, "update"));
        }

        fn render(&self, surface: &mut dyn Surface) {
            self.journal.borrow_mut().push((self.id, "render"));
            surface.fill_rect(self.viewport.position, self.viewport.size, [1.0; 4]);
        }
    }

    #[test]
    fn test_all_updates_happen_before_render() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let mut host = SimulationHost::<Journaled>::with_config(HostConfig::default());
        for id in 0..3 {
            host.push(Journaled {
                id,
                viewport: Viewport::default(),
                journal: Rc::clone(&journal),
            });
        }
        host.split_horizontally(Vec2::new(900.0, 300.0));
        host.begin();

        let mut list = CommandList::new(Vec2::new(900.0, 300.0));
        host.frame(1.0 / 60.0, &mut list);

        assert_eq!(
            *journal.borrow(),
            vec![
                (0, "update"),
                (1, "update"),
                (2, "update"),
                (0, "render"),
                (1, "render"),
                (2, "render"),
            ]
        );
        assert_eq!(list.commands[2].origin(), Some(Vec2::new(300.0, 0.0)));
    }

    #[test]
    fn test_fixed_steps_all_finish_before_render() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let config = HostConfig {
            fixed_step: Some(0.01),
            ..Default::default()
        };
        let mut host = SimulationHost::<Journaled>::with_config(config);
        for id in 0..2 {
            host.push(Journaled {
                id,
                viewport: Viewport::default(),
                journal: Rc::clone(&journal),
            });
        }

        let mut list = CommandList::default();
        let stats = host.frame(0.025, &mut list);
        assert_eq!(stats.steps, 2);

        let journal = journal.borrow();
        let first_render = journal.iter().position(|&(_, call)| call == "render").unwrap();
        assert_eq!(first_render, 4);
        assert!(journal[first_render..].iter().all(|&(_, call)| call == "render"));
    }

    #[test]
    fn test_render_pass_repeats_last_frame() {
        let mut host = two_up();
        let mut framed = CommandList::new(Vec2::new(1200.0, 800.0));
        host.frame(0.05, &mut framed);

        let mut redrawn = CommandList::new(Vec2::new(1200.0, 800.0));
        host.render(&mut redrawn);

        assert!(matches!(redrawn.commands[0], DrawCommand::Clear { .. }));
        assert_eq!(redrawn.commands, framed.commands);
        assert_eq!(host.get(0).unwrap().clock().ticks, 1);
    }

    #[test]
    fn test_large_delta_is_clamped() {
        let mut host = two_up();
        let mut list = CommandList::default();
        let stats = host.frame(3.0, &mut list);
        assert!(stats.clamped);
        assert_eq!(stats.dt, 0.1);

        let stats = host.frame(f32::NAN, &mut list);
        assert_eq!(stats.dt, 0.0);
        let stats = host.frame(-1.0, &mut list);
        assert_eq!(stats.dt, 0.0);
    }

    #[test]
    fn test_fixed_step_substeps() {
        let config = HostConfig {
            fixed_step: Some(0.01),
            max_substeps: 4,
            ..Default::default()
        };
        let mut host = SimulationHost::new(config);
        host.push(Simulation::magnet(MagnetConfig::default()));
        host.split_horizontally(Vec2::new(600.0, 800.0));
        host.begin();

        let mut list = CommandList::default();
        let stats = host.frame(0.025, &mut list);
        assert_eq!(stats.steps, 2);

        // Carried 0.005 plus 0.1 would be 10 steps; capped at 4
        let stats = host.frame(0.1, &mut list);
        assert_eq!(stats.steps, 4);
        assert_eq!(host.get(0).unwrap().clock().ticks, 6);
    }

    #[test]
    fn test_resize_restarts_simulations() {
        let mut host = two_up();
        let mut list = CommandList::default();
        for _ in 0..40 {
            host.frame(0.05, &mut list);
        }
        assert!(host.get(0).unwrap().as_magnet().unwrap().swap_count() > 0);

        host.resize(Vec2::new(1600.0, 900.0));
        let sim = host.get(1).unwrap();
        assert_eq!(sim.viewport().position, Vec2::new(800.0, 0.0));
        assert_eq!(sim.phase(), Phase::Running);
        let magnet = sim.as_magnet().unwrap();
        assert_eq!(magnet.active_pipe(), PipeSlot::Pvc);
        assert_eq!(magnet.swap_count(), 0);
    }
}
