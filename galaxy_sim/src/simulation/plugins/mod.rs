// galaxy_sim/src/simulation/plugins/mod.rs

pub mod camera;
pub mod panel;
pub mod points;
pub mod world;
