//! Console Game of Life: seeds a grid and prints each generation.

use clap::Parser;
use glider_life::application::{DEFAULT_DENSITY, DEFAULT_GENERATIONS};
use glider_life::domain::DEFAULT_SIZE;
use glider_life::{Seed, Simulation, SimulationConfig, presets};
use std::io::{self, BufWriter};

#[derive(Parser)]
#[command(name = "glider_life")]
#[command(version)]
#[command(about = "Conway's Game of Life on a bounded square grid")]
struct Cli {
    /// Number of generations to print (zero or negative prints nothing)
    #[arg(short, long, default_value_t = DEFAULT_GENERATIONS, allow_negative_numbers = true)]
    generations: i64,

    /// Side length of the square grid
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Preset placed at the center of the grid
    #[arg(short, long, default_value = "glider")]
    pattern: String,

    /// Start from a random soup with this seed instead of a pattern
    #[arg(long)]
    random_seed: Option<u64>,

    /// Share of live cells in a random soup
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    density: f64,

    /// List available patterns and exit
    #[arg(long)]
    list_patterns: bool,
}

impl Cli {
    fn config(&self) -> SimulationConfig {
        let seed = match self.random_seed {
            Some(seed) => Seed::Random {
                seed,
                density: self.density,
            },
            None => Seed::Pattern(self.pattern.clone()),
        };
        SimulationConfig {
            size: self.size,
            generations: self.generations,
            seed,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so the printed grids stay clean
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.list_patterns {
        for pattern in presets::all_patterns() {
            println!("{:<12} {}", pattern.name, pattern.description);
        }
        return Ok(());
    }

    let config = cli.config();
    let mut simulation = Simulation::from_config(&config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    simulation.run(config.generations, &mut out)?;

    log::info!("Finished after {} generations", simulation.generation());
    Ok(())
}
