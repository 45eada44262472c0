mod cell;
mod error;
mod grid;
mod patterns;

pub use cell::Cell;
pub use error::{LifeError, Result};
pub use grid::{DEFAULT_SIZE, Grid, MAX_SIZE, MIN_GLIDER_SIZE};
pub use patterns::{Pattern, presets};
