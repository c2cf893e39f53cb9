use serde::{Deserialize, Serialize};

use crate::{Direction, GamePhase, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentKind {
    Head,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub cell: Position,
    pub kind: SegmentKind,
}

/// Everything a render surface needs to draw one tick. Built from the game
/// state without mutating it; cells outside the grid are left for the
/// surface to clip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRequest {
    pub width: u16,
    pub height: u16,
    /// Snake cells, head first.
    pub segments: Vec<Segment>,
    pub food: Option<Position>,
    pub phase: GamePhase,
    /// Direction applied on the last tick, used to orient the head.
    pub direction: Direction,
    pub score: u32,
    pub tick: u32,
}

impl DrawRequest {
    /// True once the game has ended and the terminal screen should show.
    pub fn is_terminal(&self) -> bool {
        self.phase != GamePhase::Running
    }

    pub fn head(&self) -> Option<&Segment> {
        self.segments.first()
    }
}
