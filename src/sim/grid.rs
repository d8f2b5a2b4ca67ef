//! Maze grid: static wall layout plus mutable pellet state
//!
//! Coordinates are in tile units; a cell's center sits at `(x + 0.5, y + 0.5)`.
//! The grid is owned by the simulation state and mutated in place as pellets
//! are consumed; kinematics and the chase policy only read it.

use serde::{Deserialize, Serialize};

/// One maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Pellet,
    Empty,
}

/// Default maze layout, 13 rows x 24 cols.
/// 0 = wall, 1 = pellet, 2 = empty (adversary spawn pocket).
const DEFAULT_LAYOUT: [[u8; 24]; 13] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0],
    [0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 2, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

/// Rectangular tile map with fixed dimensions for the lifetime of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build the default maze
    pub fn default_maze() -> Self {
        let rows: Vec<&[u8]> = DEFAULT_LAYOUT.iter().map(|r| r.as_slice()).collect();
        Self::from_layout(&rows)
    }

    /// Build a grid from numeric rows (0 = wall, 1 = pellet, anything else = empty).
    /// All rows must share the same width.
    pub fn from_layout(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty(), "grid needs at least one row");
        let cols = rows[0].len();
        let cells = rows
            .iter()
            .flat_map(|row| {
                assert_eq!(row.len(), cols, "ragged grid layout");
                row.iter().map(|v| match *v {
                    0 => Cell::Wall,
                    1 => Cell::Pellet,
                    _ => Cell::Empty,
                })
            })
            .collect();
        Self {
            rows: rows.len(),
            cols,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at integer indices, or None when out of bounds
    pub fn cell(&self, cx: usize, cy: usize) -> Option<Cell> {
        if cx >= self.cols || cy >= self.rows {
            return None;
        }
        Some(self.cells[cy * self.cols + cx])
    }

    /// True iff the cell containing the point `(x, y)` exists and is not a
    /// wall. Each coordinate is floored to find the cell; out-of-bounds is
    /// always false (no wraparound).
    pub fn can_occupy(&self, x: f32, y: f32) -> bool {
        let cx = x.floor();
        let cy = y.floor();
        if cx < 0.0 || cy < 0.0 {
            return false;
        }
        match self.cell(cx as usize, cy as usize) {
            Some(cell) => cell != Cell::Wall,
            None => false,
        }
    }

    /// Consume the pellet in the given cell. Returns true when the cell held
    /// a pellet (now empty); anything else is a no-op.
    pub fn consume_pellet_at(&mut self, cx: usize, cy: usize) -> bool {
        if self.cell(cx, cy) == Some(Cell::Pellet) {
            self.cells[cy * self.cols + cx] = Cell::Empty;
            return true;
        }
        false
    }

    /// Full scan for remaining pellets. Called once per grid
    /// (re)initialization to seed the running counter, not on every step.
    pub fn count_pellets(&self) -> u32 {
        self.cells.iter().filter(|c| **c == Cell::Pellet).count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_maze_shape() {
        let grid = Grid::default_maze();
        assert_eq!(grid.rows(), 13);
        assert_eq!(grid.cols(), 24);
        // Border is solid wall
        for x in 0..grid.cols() {
            assert_eq!(grid.cell(x, 0), Some(Cell::Wall));
            assert_eq!(grid.cell(x, grid.rows() - 1), Some(Cell::Wall));
        }
        // Adversary spawn pocket is empty, not pellet
        assert_eq!(grid.cell(12, 10), Some(Cell::Empty));
    }

    #[test]
    fn test_can_occupy_floors_coordinates() {
        let grid = Grid::default_maze();
        // Anywhere inside cell (1, 1) is the same cell
        assert!(grid.can_occupy(1.01, 1.99));
        assert!(grid.can_occupy(1.5, 1.5));
        // Cell (0, 0) is a wall
        assert!(!grid.can_occupy(0.5, 0.5));
    }

    #[test]
    fn test_can_occupy_out_of_bounds() {
        let grid = Grid::default_maze();
        assert!(!grid.can_occupy(-0.1, 1.5));
        assert!(!grid.can_occupy(1.5, -2.0));
        assert!(!grid.can_occupy(24.5, 1.5));
        assert!(!grid.can_occupy(1.5, 13.5));
    }

    #[test]
    fn test_consume_pellet() {
        let mut grid = Grid::default_maze();
        let before = grid.count_pellets();

        assert_eq!(grid.cell(1, 1), Some(Cell::Pellet));
        assert!(grid.consume_pellet_at(1, 1));
        assert_eq!(grid.cell(1, 1), Some(Cell::Empty));
        assert_eq!(grid.count_pellets(), before - 1);

        // Second consume is a no-op
        assert!(!grid.consume_pellet_at(1, 1));
        assert_eq!(grid.count_pellets(), before - 1);

        // Walls and out-of-bounds cells are no-ops too
        assert!(!grid.consume_pellet_at(0, 0));
        assert!(!grid.consume_pellet_at(99, 99));
    }

    #[test]
    fn test_from_layout_small() {
        let grid = Grid::from_layout(&[&[0, 0, 0], &[0, 1, 0], &[0, 0, 0]]);
        assert_eq!(grid.count_pellets(), 1);
        assert!(grid.can_occupy(1.5, 1.5));
        assert!(!grid.can_occupy(0.5, 1.5));
    }
}
