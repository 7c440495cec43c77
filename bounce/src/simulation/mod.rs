pub mod states;
pub mod params;
pub mod errors;
pub mod geometry;
pub mod collision;
pub mod canvas;
pub mod particle;
pub mod scenario;
