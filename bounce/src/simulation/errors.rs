//! Failure modes of the engine
//!
//! Only configuration and seeding can fail; a tick never does.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("could not place particle {index} without overlap after {attempts} attempts")]
    SeedingFailed { index: usize, attempts: usize },
}
