use super::{Cell, Grid, LifeError, Result};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative (row, col) of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(row, _)| *row).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, col)| *col).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Top-left position that centers the pattern on a grid of `size`,
    /// or None if it does not fit
    pub fn centered_origin(&self, size: usize) -> Option<(usize, usize)> {
        (self.width <= size && self.height <= size)
            .then(|| ((size - self.height) / 2, (size - self.width) / 2))
    }

    /// Place pattern on grid with its top-left corner at (row, col).
    /// Nothing is written unless the whole pattern fits.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) -> Result<()> {
        let size = grid.size();
        if row + self.height > size || col + self.width > size {
            return Err(LifeError::PatternOutOfBounds {
                pattern: self.name,
                row,
                col,
                size,
            });
        }
        for (dr, dc) in &self.cells {
            grid.set(row + dr, col + dc, Cell::Alive);
        }
        Ok(())
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1), (0, 2),
            ]
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ]
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ]
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ]
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ]
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            block(),
            r_pentomino(),
        ]
    }

    /// Look up a preset by name, ignoring case
    pub fn find(name: &str) -> Result<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| LifeError::UnknownPattern { name: name.to_string() })
    }
}
