use super::{Cell, LifeError, Result, presets};
use rand::Rng;
use std::fmt;

/// Side length of the default grid
pub const DEFAULT_SIZE: usize = 25;

/// Smallest grid that can hold a centred glider
pub const MIN_GLIDER_SIZE: usize = 3;

/// Largest side length accepted from configuration (16M cells)
pub const MAX_SIZE: usize = 4096;

/// Grid manages the square cellular automaton matrix.
/// Cells are addressed as (row, col) and stored row-major.
/// Neighbors past the edge are not counted; there is no wraparound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    ///
    /// Allocates `size * size` cells up front; callers taking sizes from
    /// user input should check them against [`MAX_SIZE`] first.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
        }
    }

    /// Create a grid with a glider placed around its center
    pub fn with_glider(size: usize) -> Result<Self> {
        let mut grid = Self::new(size);
        grid.seed_glider()?;
        Ok(grid)
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.size && col < self.size).then(|| self.cells[self.index(row, col)])
    }

    /// True if the cell exists and is alive
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Set cell at position; out of range coordinates are ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.size && col < self.size {
            let idx = self.index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Current state in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks panics on zero
        self.cells.chunks(self.size.max(1))
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.size, idx % self.size, cell))
    }

    /// Number of live cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Positions of all live cells, row-major
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    /// Place the glider so its middle row sits on (size/2, size/2).
    ///
    /// Live cells end up at (cy-1, cx), (cy, cx+1) and the full row cy+1
    /// from cx-1 to cx+1. Grids smaller than 3x3 are rejected untouched.
    pub fn seed_glider(&mut self) -> Result<()> {
        if self.size < MIN_GLIDER_SIZE {
            return Err(LifeError::GridTooSmall {
                size: self.size,
                required: MIN_GLIDER_SIZE,
            });
        }
        self.place_glider();
        Ok(())
    }

    // Caller guarantees size >= MIN_GLIDER_SIZE, so every cell lands in bounds
    fn place_glider(&mut self) {
        let origin = self.size / 2 - 1;
        for (row, col) in presets::glider().cells {
            self.set(origin + row, origin + col, Cell::Alive);
        }
    }

    /// Count live neighbors in the Moore neighborhood.
    /// Offsets that land outside the grid are skipped.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(|(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.get(r, c)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Pure functional evolution - returns the next generation,
    /// every cell computed from this unchanged snapshot
    pub fn evolve(&self) -> Self {
        let cells = self
            .iter_cells()
            .map(|(row, col, current)| current.evolve(self.count_live_neighbors(row, col)))
            .collect();

        Self {
            size: self.size,
            cells,
        }
    }

    /// Advance one generation in place and return the new state
    pub fn next_generation(&mut self) -> &[Cell] {
        *self = self.evolve();
        &self.cells
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Fill the grid with a random soup; each cell is alive with
    /// probability `density`, clamped to [0, 1] (NaN counts as 0)
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
    }
}

impl Default for Grid {
    /// 25x25 grid seeded with a glider
    fn default() -> Self {
        let mut grid = Self::new(DEFAULT_SIZE);
        grid.place_glider();
        grid
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
