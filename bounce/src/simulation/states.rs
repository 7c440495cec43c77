//! Core state types for the particle simulation.
//!
//! Defines the 2D particle and the small value types the engine passes
//! around:
//! - `Particle` using `NVec2` for position and velocity
//! - `ColorToken` an index into the scenario palette
//! - `Viewport` / `Pointer` the host-supplied surroundings
//!
//! Positions are in viewport coordinates: origin top-left, y grows downward.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Opaque color reference, resolved against the palette by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorToken(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: NVec2, // position
    pub v: NVec2, // velocity, units per tick
    pub m: f64, // mass
    pub color: ColorToken, // palette entry
    pub opacity: f64, // pointer highlight, 0 when idle
}

impl Particle {
    /// Particle at rest-state opacity with the given kinematics
    pub fn new(x: NVec2, v: NVec2, m: f64, color: ColorToken) -> Self {
        Self {
            x,
            v,
            m,
            color,
            opacity: 0.0,
        }
    }

    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

/// Drawable area size, in the same units as particle positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> NVec2 {
        NVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Last known pointer position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer(pub NVec2);

#[derive(Debug, Clone, Default)]
pub struct System {
    pub particles: Vec<Particle>, // insertion order, stable within a tick
    pub tick: u64, // ticks since the last seed
}
