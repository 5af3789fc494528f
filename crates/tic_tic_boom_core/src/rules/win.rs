//! Win detection.

use super::super::types::{Cell, Coord, Grid, Symbol};
use tracing::instrument;

/// Three cells that win when held by one symbol.
pub type Line = [Coord; 3];

/// Every winning line in evaluation order: rows, columns, main diagonal,
/// anti-diagonal.
pub const LINES: [Line; 8] = [
    // Rows
    [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)],
    [Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)],
    [Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)],
    // Columns
    [Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)],
    [Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)],
    [Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)],
    // Diagonals
    [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
    [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
];

/// Returns the first line fully held by `symbol`.
#[instrument(level = "trace", skip(grid))]
pub fn winning_line(grid: &Grid, symbol: Symbol) -> Option<Line> {
    let held = Cell::Occupied(symbol);
    LINES
        .into_iter()
        .find(|line| line.iter().all(|c| grid[c.row()][c.col()] == held))
}

/// Returns true if `symbol` holds all three cells of any line.
#[instrument(level = "trace", skip(grid))]
pub fn check_winner(grid: &Grid, symbol: Symbol) -> bool {
    winning_line(grid, symbol).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(symbol: Symbol, cells: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::default();
        for &(row, col) in cells {
            grid[row][col] = Cell::Occupied(symbol);
        }
        grid
    }

    #[test]
    fn test_no_winner_empty_grid() {
        let grid = Grid::default();
        assert!(!check_winner(&grid, Symbol::O));
        assert!(!check_winner(&grid, Symbol::X));
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let cells: Vec<_> = line.iter().map(|c| (c.row(), c.col())).collect();
            let grid = grid_with(Symbol::X, &cells);
            assert!(check_winner(&grid, Symbol::X), "line {line:?}");
            assert!(!check_winner(&grid, Symbol::O));
            assert_eq!(winning_line(&grid, Symbol::X), Some(line));
        }
    }

    #[test]
    fn test_incomplete_line_does_not_win() {
        let grid = grid_with(Symbol::O, &[(0, 0), (0, 1), (1, 2)]);
        assert!(!check_winner(&grid, Symbol::O));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut grid = grid_with(Symbol::O, &[(0, 0), (0, 1)]);
        grid[0][2] = Cell::Occupied(Symbol::X);
        assert!(!check_winner(&grid, Symbol::O));
        assert!(!check_winner(&grid, Symbol::X));
    }

    #[test]
    fn test_rows_found_before_diagonals() {
        // Row 0 and the main diagonal both belong to O; the row comes first.
        let grid = grid_with(Symbol::O, &[(0, 0), (0, 1), (0, 2), (1, 1), (2, 2)]);
        assert_eq!(winning_line(&grid, Symbol::O), Some(LINES[0]));
    }
}
