//! Build and run a fully-initialized particle simulation
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! `Simulation` containing:
//! - numerical parameters (`Parameters`) and the color `Palette`
//! - viewport size and pointer position fed in by the frame driver
//! - system state (`System` with the seeded particles)
//! - the random source used for seeding
//!
//! The simulation is inserted into Bevy as a `Resource` and driven by the
//! visualization systems, or ticked directly by the headless runner.

use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::configuration::config::ScenarioConfig;
use crate::simulation::canvas::Canvas;
use crate::simulation::errors::SimError;
use crate::simulation::geometry::distance;
use crate::simulation::params::{Palette, Parameters};
use crate::simulation::particle::{update, TickContext};
use crate::simulation::states::{ColorToken, NVec2, Particle, Pointer, System, Viewport};

/// Bevy resource owning every piece of mutable simulation state
///
/// Lifecycle: construct once, `seed()` to (re)populate, `tick()` once per
/// frame. Host events arrive through `set_pointer`, `resize` and `reset`.
#[derive(Resource)]
pub struct Simulation {
    pub parameters: Parameters,
    pub palette: Palette,
    pub viewport: Viewport,
    pub pointer: Pointer,
    pub system: System,
    rng: StdRng,
}

impl Simulation {
    /// Validate the configuration and set up an empty simulation.
    /// The pointer starts at the viewport center.
    pub fn new(parameters: Parameters, palette: Palette, viewport: Viewport) -> Result<Self, SimError> {
        parameters.validate()?;
        palette.validate()?;
        check_viewport(&viewport, parameters.radius)?;

        let rng = match parameters.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            pointer: Pointer(viewport.center()),
            parameters,
            palette,
            viewport,
            system: System::default(),
            rng,
        })
    }

    /// Map a loaded scenario into a seeded simulation
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let ScenarioConfig { viewport, parameters, palette } = cfg;

        // Parameters (runtime) from ParametersConfig
        let parameters = Parameters {
            particle_count: parameters.particle_count,
            radius: parameters.radius,
            mass: parameters.mass,
            initial_speed: parameters.initial_speed,
            proximity_radius: parameters.proximity_radius,
            opacity_step: parameters.opacity_step,
            max_opacity: parameters.max_opacity,
            max_placement_attempts: parameters.max_placement_attempts,
            seed: parameters.seed,
        };

        let viewport = Viewport::new(viewport.width, viewport.height);
        let palette = Palette { colors: palette };

        let mut sim = Self::new(parameters, palette, viewport)?;
        sim.seed()?;

        info!(
            particles = sim.system.particles.len(),
            width = viewport.width,
            height = viewport.height,
            "scenario built"
        );
        Ok(sim)
    }

    /// Replace the particle collection with a fresh non-overlapping one
    ///
    /// Positions come from bounded rejection sampling: each slot gets
    /// `max_placement_attempts` draws. On failure the previous collection
    /// is kept.
    pub fn seed(&mut self) -> Result<(), SimError> {
        check_viewport(&self.viewport, self.parameters.radius)?;

        let count = self.parameters.particle_count;
        let contact = 2.0 * self.parameters.radius;
        let mut placed: Vec<Particle> = Vec::with_capacity(count);
        let mut total_attempts = 0usize;

        for index in 0..count {
            let mut attempts = 0;
            let x = loop {
                if attempts == self.parameters.max_placement_attempts {
                    return Err(SimError::SeedingFailed { index, attempts });
                }
                attempts += 1;

                let candidate = self.random_position();
                if placed.iter().all(|p| distance(&candidate, &p.x) >= contact) {
                    break candidate;
                }
            };
            total_attempts += attempts;

            let v = self.random_velocity();
            let color = self.random_color();
            placed.push(Particle::new(x, v, self.parameters.mass, color));
        }

        debug!(count, total_attempts, "placement finished");

        self.system = System {
            particles: placed,
            tick: 0,
        };
        Ok(())
    }

    /// Reseed on user request (the frontend's click)
    pub fn reset(&mut self) -> Result<(), SimError> {
        self.seed()?;
        info!(particles = self.system.particles.len(), "simulation reset");
        Ok(())
    }

    /// Advance every particle one tick, in collection order, drawing each
    /// one onto `canvas` before it moves
    pub fn tick<C: Canvas>(&mut self, canvas: &mut C) {
        let ctx = self.context();
        canvas.clear(ctx.viewport.width, ctx.viewport.height);

        let particles = &mut self.system.particles;
        for i in 0..particles.len() {
            update(particles, i, &ctx, canvas);
        }
        self.system.tick += 1;
    }

    /// Snapshot of the read-only state a particle update needs
    pub fn context(&self) -> TickContext {
        TickContext {
            viewport: self.viewport,
            pointer: self.pointer,
            radius: self.parameters.radius,
            proximity_radius: self.parameters.proximity_radius,
            opacity_step: self.parameters.opacity_step,
            max_opacity: self.parameters.max_opacity,
        }
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Pointer(NVec2::new(x, y));
    }

    /// Track a new viewport size. Existing particles stay where they are.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.system.particles
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.system.particles.iter().map(Particle::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.system.particles.iter().map(Particle::kinetic_energy).sum()
    }

    fn random_position(&mut self) -> NVec2 {
        let r = self.parameters.radius;
        let Viewport { width, height } = self.viewport;
        NVec2::new(
            self.rng.gen_range(r..=width - r),
            self.rng.gen_range(r..=height - r),
        )
    }

    fn random_velocity(&mut self) -> NVec2 {
        let s = self.parameters.initial_speed;
        NVec2::new(
            self.rng.gen_range(-s..=s) as f64,
            self.rng.gen_range(-s..=s) as f64,
        )
    }

    fn random_color(&mut self) -> ColorToken {
        ColorToken(self.rng.gen_range(0..self.palette.len()))
    }
}

/// A viewport must hold at least one particle on each axis
fn check_viewport(viewport: &Viewport, radius: f64) -> Result<(), SimError> {
    let Viewport { width, height } = *viewport;
    if !(width.is_finite() && height.is_finite()) {
        return Err(SimError::InvalidConfig(format!("viewport must be finite, got {width}x{height}")));
    }
    let diameter = 2.0 * radius;
    if width < diameter || height < diameter {
        return Err(SimError::InvalidConfig(format!(
            "viewport {width}x{height} cannot hold a particle of radius {radius}"
        )));
    }
    Ok(())
}
