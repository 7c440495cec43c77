//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ViewportConfig`]   – initial drawable area (window size)
//! - [`ParametersConfig`] – particle count, radius, mass and highlight tuning
//! - `palette`            – color names particles are tinted with
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field is optional; missing ones fall back to the defaults of
//! [`crate::simulation::params`].
//!
//! # YAML format
//! ```yaml
//! viewport:
//!   width: 1280.0
//!   height: 720.0
//!
//! parameters:
//!   particle_count: 300     # particles per (re)seed
//!   radius: 15.0            # shared particle radius
//!   mass: 1.0               # mass of every seeded particle
//!   initial_speed: 1        # velocity components drawn from -1..=1
//!   proximity_radius: 100.0 # pointer highlight reach
//!   opacity_step: 0.02
//!   max_opacity: 0.3
//!   max_placement_attempts: 10000
//!   seed: 42                # optional, entropy when absent
//!
//! palette: [blue, purple, red, darkorange, cyan, hotpink]
//! ```
//!
//! Palette entries are either one of the names above or `#rrggbb`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::simulation::params::{
    DEFAULT_INITIAL_SPEED, DEFAULT_MASS, DEFAULT_MAX_OPACITY, DEFAULT_MAX_PLACEMENT_ATTEMPTS,
    DEFAULT_OPACITY_STEP, DEFAULT_PARTICLE_COUNT, DEFAULT_PROXIMITY_RADIUS, DEFAULT_RADIUS,
    Palette,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse scenario: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("unknown palette color `{0}`")]
    UnknownColor(String),
}

/// Initial viewport size
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f64,  // horizontal extent in viewport units (pixels in the viewer)
    pub height: f64, // vertical extent
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub particle_count: usize,
    pub radius: f64,
    pub mass: f64,
    pub initial_speed: i32,
    pub proximity_radius: f64,
    pub opacity_step: f64,
    pub max_opacity: f64,
    pub max_placement_attempts: usize,
    pub seed: Option<u64>,
}

impl Default for ParametersConfig {
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

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub viewport: ViewportConfig, // Starting window size
    #[serde(default)]
    pub parameters: ParametersConfig, // Simulation parameters
    #[serde(default = "default_palette")]
    pub palette: Vec<String>, // Color names, picked uniformly per particle
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            parameters: ParametersConfig::default(),
            palette: default_palette(),
        }
    }
}

impl ScenarioConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        cfg.check_palette()?;
        Ok(cfg)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Self::from_reader(s.as_bytes())
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn check_palette(&self) -> Result<(), ConfigError> {
        for name in &self.palette {
            parse_color(name)?;
        }
        Ok(())
    }
}

fn default_palette() -> Vec<String> {
    Palette::default().colors
}

/// Resolve a palette entry to straight sRGB bytes
pub fn parse_color(name: &str) -> Result<[u8; 3], ConfigError> {
    let named = match name.to_ascii_lowercase().as_str() {
        "blue" => Some([0x00, 0x00, 0xff]),
        "purple" => Some([0x80, 0x00, 0x80]),
        "red" => Some([0xff, 0x00, 0x00]),
        "darkorange" => Some([0xff, 0x8c, 0x00]),
        "cyan" => Some([0x00, 0xff, 0xff]),
        "hotpink" => Some([0xff, 0x69, 0xb4]),
        "white" => Some([0xff, 0xff, 0xff]),
        _ => None,
    };
    if let Some(rgb) = named {
        return Ok(rgb);
    }

    let hex = name
        .strip_prefix('#')
        .filter(|h| h.len() == 6 && h.is_ascii())
        .ok_or_else(|| ConfigError::UnknownColor(name.to_string()))?;

    let mut rgb = [0u8; 3];
    for (i, byte) in rgb.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16)
            .map_err(|_| ConfigError::UnknownColor(name.to_string()))?;
    }
    Ok(rgb)
}
