// Domain layer - Core business logic
pub mod domain;

// Application layer - Configuration and the run loop
pub mod application;

// Infrastructure layer - Text output
pub mod rendering;

// Re-exports for convenience
pub use domain::{Cell, Grid, LifeError, Pattern, Result, presets};
pub use application::{Seed, Simulation, SimulationConfig};
