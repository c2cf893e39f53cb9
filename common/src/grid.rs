use serde::{Deserialize, Serialize};

/// A single grid square. Signed so that a head which has left the grid
/// can still be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position { x, y }
    }
}

/// The play-field bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: u16,
    pub height: u16,
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Self {
        Grid { width, height }
    }

    pub fn is_in_bounds(&self, cell: Position) -> bool {
        cell.x >= 0 && cell.x < self.width as i32 && cell.y >= 0 && cell.y < self.height as i32
    }

    /// Every cell of the grid, column by column.
    pub fn all_cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.width as i32)
            .flat_map(move |x| (0..self.height as i32).map(move |y| Position { x, y }))
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bounds() {
        let grid = Grid::new(5, 4);
        assert!(grid.is_in_bounds(Position::new(0, 0)));
        assert!(grid.is_in_bounds(Position::new(4, 3)));
        assert!(!grid.is_in_bounds(Position::new(5, 3)));
        assert!(!grid.is_in_bounds(Position::new(4, 4)));
        assert!(!grid.is_in_bounds(Position::new(-1, 0)));
        assert!(!grid.is_in_bounds(Position::new(0, -1)));
    }

    #[test]
    fn test_all_cells_covers_grid_once() {
        let grid = Grid::new(7, 3);
        let cells: Vec<Position> = grid.all_cells().collect();
        assert_eq!(cells.len(), grid.cell_count());

        let unique: HashSet<Position> = cells.iter().copied().collect();
        assert_eq!(unique.len(), 21);
        assert!(cells.iter().all(|c| grid.is_in_bounds(*c)));
    }
}
