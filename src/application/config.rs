use crate::domain::{DEFAULT_SIZE, LifeError, MAX_SIZE, Result, presets};

/// Generations printed when no count is given
pub const DEFAULT_GENERATIONS: i64 = 10;

/// Share of live cells in a random soup
pub const DEFAULT_DENSITY: f64 = 0.3;

/// How the initial generation is populated
#[derive(Clone, Debug, PartialEq)]
pub enum Seed {
    /// A named preset, centered on the grid
    Pattern(String),
    /// Reproducible random soup
    Random { seed: u64, density: f64 },
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Pattern("glider".to_string())
    }
}

/// Everything needed to build and run a simulation
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub size: usize,
    pub generations: i64,
    pub seed: Seed,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            generations: DEFAULT_GENERATIONS,
            seed: Seed::default(),
        }
    }
}

impl SimulationConfig {
    /// Check that the size is at most [`MAX_SIZE`] and that the seed can be
    /// applied to a grid of this size.
    /// Generation counts are never rejected; non-positive ones run nothing.
    pub fn validate(&self) -> Result<()> {
        if self.size > MAX_SIZE {
            return Err(LifeError::InvalidParameter {
                parameter: "size",
                value: self.size.to_string(),
                reason: format!("must be at most {MAX_SIZE}"),
            });
        }

        match &self.seed {
            Seed::Pattern(name) => {
                let pattern = presets::find(name)?;
                let required = pattern.width.max(pattern.height);
                if self.size < required {
                    return Err(LifeError::GridTooSmall {
                        size: self.size,
                        required,
                    });
                }
            }
            Seed::Random { density, .. } => {
                if !(0.0..=1.0).contains(density) {
                    return Err(LifeError::InvalidParameter {
                        parameter: "density",
                        value: density.to_string(),
                        reason: "must be between 0 and 1".to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.size, 25);
        assert_eq!(config.seed, Seed::Pattern("glider".to_string()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_generations_are_valid() {
        let config = SimulationConfig {
            generations: -4,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_pattern_must_fit() {
        let config = SimulationConfig {
            size: 3,
            seed: Seed::Pattern("beacon".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LifeError::GridTooSmall { size: 3, required: 4 })
        ));
    }

    #[test]
    fn test_unknown_pattern() {
        let config = SimulationConfig {
            seed: Seed::Pattern("gun".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(LifeError::UnknownPattern { .. })));
    }

    #[test]
    fn test_density_range() {
        let config = SimulationConfig {
            seed: Seed::Random { seed: 1, density: 1.5 },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LifeError::InvalidParameter { parameter: "density", .. })
        ));
    }

    #[test]
    fn test_size_upper_bound() {
        let at_limit = SimulationConfig {
            size: MAX_SIZE,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());

        for size in [MAX_SIZE + 1, 100_000, 1 << 32, usize::MAX] {
            let config = SimulationConfig {
                size,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(LifeError::InvalidParameter { parameter: "size", .. })
            ));
        }
    }
}
