pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Particle, ColorToken, NVec2, Pointer, System, Viewport};
pub use simulation::geometry::{distance, rotate};
pub use simulation::collision::resolve_collision;
pub use simulation::particle::{update, TickContext};
pub use simulation::canvas::{Canvas, Circle, DrawOp, FrameRecorder, NullCanvas};
pub use simulation::params::{Palette, Parameters};
pub use simulation::errors::SimError;
pub use simulation::scenario::Simulation;

pub use configuration::config::{ConfigError, ParametersConfig, ScenarioConfig, ViewportConfig};

pub use visualization::bounce_vis2d::run_2d;

pub use benchmark::benchmark::bench_tick;
