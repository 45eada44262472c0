//! Plain text output of grids, one symbol per cell.

use crate::domain::Grid;
use std::io::{self, Write};

/// Write the grid as `size` lines of `X` (alive) and `.` (dead)
pub fn render_grid<W: Write>(grid: &Grid, out: &mut W) -> io::Result<()> {
    let mut line = String::with_capacity(grid.size() + 1);
    for row in grid.rows() {
        line.clear();
        line.extend(row.iter().map(|cell| cell.symbol()));
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Write one labelled generation: header, grid, blank line
pub fn render_generation<W: Write>(index: u64, grid: &Grid, out: &mut W) -> io::Result<()> {
    writeln!(out, "Generation {index}:")?;
    render_grid(grid, out)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    #[test]
    fn test_render_grid_matches_display() {
        let mut grid = Grid::new(4);
        grid.set(0, 3, Cell::Alive);
        grid.set(2, 1, Cell::Alive);

        let mut out = Vec::new();
        render_grid(&grid, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "...X\n....\n.X..\n....\n");
        assert_eq!(text, grid.to_string());
    }

    #[test]
    fn test_render_generation_layout() {
        let grid = Grid::with_glider(3).unwrap();
        let mut out = Vec::new();
        render_generation(7, &grid, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Generation 7:\n.X.\n..X\nXXX\n\n"
        );
    }
}
