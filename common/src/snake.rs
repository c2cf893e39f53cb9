use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step for this direction. Rows grow downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }
}

/// The snake body, head first.
///
/// The body always holds at least two cells. Bounds are not checked here;
/// leaving the grid is detected by the game state after each move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    body: VecDeque<Position>,
    grow_pending: bool,
}

impl Snake {
    /// A two-cell snake with its tail directly left of `head`.
    pub fn new(head: Position) -> Self {
        Snake {
            body: VecDeque::from([head, head.offset(-1, 0)]),
            grow_pending: false,
        }
    }

    /// Builds a snake from explicit cells, head first. Returns `None` for
    /// bodies shorter than two cells.
    pub fn from_cells(cells: impl IntoIterator<Item = Position>) -> Option<Self> {
        let body: VecDeque<Position> = cells.into_iter().collect();
        if body.len() < 2 {
            return None;
        }
        Some(Snake {
            body,
            grow_pending: false,
        })
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Never below two; a snake has no empty state.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn grow_pending(&self) -> bool {
        self.grow_pending
    }

    pub fn cells(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    pub fn contains(&self, cell: &Position) -> bool {
        self.body.contains(cell)
    }

    /// Advances one cell. The tail is dropped unless a growth is pending,
    /// in which case the pending flag is consumed instead.
    pub fn move_towards(&mut self, direction: Direction) {
        let (dx, dy) = direction.delta();
        let new_head = self.head().offset(dx, dy);
        self.body.push_front(new_head);

        if self.grow_pending {
            self.grow_pending = false;
        } else {
            self.body.pop_back();
        }
    }

    /// True if the head overlaps any other body cell. Must be called after
    /// `move_towards` so a tail cell vacated this tick does not count.
    pub fn check_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|cell| *cell == head)
    }

    /// Marks the snake to grow on its next move if the head sits on `food`.
    pub fn eat(&mut self, food: Position) -> bool {
        if self.head() == food {
            self.grow_pending = true;
            true
        } else {
            false
        }
    }
}
