use super::config::{Seed, SimulationConfig};
use crate::domain::{Grid, LifeError, Result, presets};
use crate::rendering;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;

/// Simulation drives a grid through successive generations.
/// This is the application layer that coordinates domain logic and output.
pub struct Simulation {
    grid: Grid,
    generation: u64,
}

impl Simulation {
    /// Wrap an already seeded grid
    pub fn new(grid: Grid) -> Self {
        Self { grid, generation: 0 }
    }

    /// Build the initial grid described by `config`
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;

        let mut grid = Grid::new(config.size);
        match &config.seed {
            Seed::Pattern(name) => {
                let pattern = presets::find(name)?;
                if pattern.name == presets::glider().name {
                    grid.seed_glider()?;
                } else {
                    let (row, col) = pattern.centered_origin(config.size).ok_or(
                        LifeError::GridTooSmall {
                            size: config.size,
                            required: pattern.width.max(pattern.height),
                        },
                    )?;
                    pattern.place_on(&mut grid, row, col)?;
                }
                log::info!(
                    "Seeded {}x{} grid with {} ({} live cells)",
                    config.size,
                    config.size,
                    pattern.name,
                    grid.live_count()
                );
            }
            Seed::Random { seed, density } => {
                grid.randomize(&mut StdRng::seed_from_u64(*seed), *density);
                log::info!(
                    "Seeded {}x{} grid randomly (seed={seed}, density={density}, {} live cells)",
                    config.size,
                    config.size,
                    grid.live_count()
                );
            }
        }

        Ok(Self::new(grid))
    }

    /// Current generation
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of transitions applied so far
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance the grid by one generation
    pub fn step(&mut self) -> &Grid {
        self.grid.next_generation();
        self.generation += 1;
        log::trace!(
            "Generation {} computed, {} live cells",
            self.generation,
            self.grid.live_count()
        );
        &self.grid
    }

    /// Print and advance `generations` times, labelling from 1.
    /// The state is printed before each advance, so the seed is
    /// "Generation 1". Zero or negative counts print nothing.
    pub fn run<W: Write>(&mut self, generations: i64, out: &mut W) -> Result<()> {
        let count = u64::try_from(generations).unwrap_or(0);
        log::debug!("Running {count} generations");

        for index in 1..=count {
            rendering::render_generation(index, &self.grid, out)?;
            self.step();
        }
        out.flush()?;
        Ok(())
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Grid::default())
    }
}
