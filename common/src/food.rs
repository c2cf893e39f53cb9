use std::collections::HashSet;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::{GameError, Grid, Position, Result};

/// The single piece of food on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    cell: Position,
}

impl Food {
    pub fn at(cell: Position) -> Self {
        Food { cell }
    }

    pub fn cell(&self) -> Position {
        self.cell
    }

    /// Picks a cell uniformly at random among the grid cells not listed in
    /// `occupied`. Fails with `NoFreeCell` when the snake covers the board.
    pub fn generate<'a, R>(
        grid: &Grid,
        occupied: impl IntoIterator<Item = &'a Position>,
        rng: &mut R,
    ) -> Result<Food>
    where
        R: Rng + ?Sized,
    {
        let occupied: HashSet<&Position> = occupied.into_iter().collect();
        let free: Vec<Position> = grid
            .all_cells()
            .filter(|cell| !occupied.contains(cell))
            .collect();

        let cell = *free.choose(rng).ok_or(GameError::NoFreeCell)?;
        debug!("food spawned at ({}, {}), {} free cells", cell.x, cell.y, free.len());
        Ok(Food { cell })
    }
}
