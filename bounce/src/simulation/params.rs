//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - particle count, shared radius and seeded mass,
//! - initial speed range,
//! - pointer highlight constants,
//! - seeding attempt cap and optional random seed
//!
//! `Palette` holds the color names particles are tinted with

use super::errors::SimError;

pub const DEFAULT_PARTICLE_COUNT: usize = 300;
pub const DEFAULT_RADIUS: f64 = 15.0;
pub const DEFAULT_MASS: f64 = 1.0;
pub const DEFAULT_INITIAL_SPEED: i32 = 1;
pub const DEFAULT_PROXIMITY_RADIUS: f64 = 100.0;
pub const DEFAULT_OPACITY_STEP: f64 = 0.02;
pub const DEFAULT_MAX_OPACITY: f64 = 0.3;
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub particle_count: usize, // particles per seed
    pub radius: f64, // shared by every particle
    pub mass: f64, // given to every seeded particle
    pub initial_speed: i32, // velocity components drawn from -s..=s
    pub proximity_radius: f64, // pointer highlight reach
    pub opacity_step: f64, // highlight change per tick
    pub max_opacity: f64, // highlight ceiling
    pub max_placement_attempts: usize, // position draws per particle before giving up
    pub seed: Option<u64>, // deterministic seed, entropy when None
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            radius: DEFAULT_RADIUS,
            mass: DEFAULT_MASS,
            initial_speed: DEFAULT_INITIAL_SPEED,
            proximity_radius: DEFAULT_PROXIMITY_RADIUS,
            opacity_step: DEFAULT_OPACITY_STEP,
            max_opacity: DEFAULT_MAX_OPACITY,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
            seed: None,
        }
    }
}

impl Parameters {
    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SimError::InvalidConfig(format!("radius must be positive, got {}", self.radius)));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(SimError::InvalidConfig(format!("mass must be positive, got {}", self.mass)));
        }
        if self.initial_speed < 0 {
            return Err(SimError::InvalidConfig(format!(
                "initial_speed must not be negative, got {}",
                self.initial_speed
            )));
        }
        if !(self.proximity_radius.is_finite() && self.proximity_radius >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "proximity_radius must not be negative, got {}",
                self.proximity_radius
            )));
        }
        if !(self.opacity_step.is_finite() && self.opacity_step > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "opacity_step must be positive, got {}",
                self.opacity_step
            )));
        }
        if !(self.max_opacity.is_finite() && (0.0..=1.0).contains(&self.max_opacity)) {
            return Err(SimError::InvalidConfig(format!(
                "max_opacity must lie in [0, 1], got {}",
                self.max_opacity
            )));
        }
        if self.max_placement_attempts == 0 {
            return Err(SimError::InvalidConfig("max_placement_attempts must be at least 1".into()));
        }
        Ok(())
    }
}

/// Ordered color names, referenced by index from each particle
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub colors: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: ["blue", "purple", "red", "darkorange", "cyan", "hotpink"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl Palette {
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.is_empty() {
            return Err(SimError::InvalidConfig("palette must contain at least one color".into()));
        }
        Ok(())
    }
}
