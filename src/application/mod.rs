mod config;
mod simulation;

pub use config::{DEFAULT_DENSITY, DEFAULT_GENERATIONS, Seed, SimulationConfig};
pub use simulation::Simulation;
