use std::ops::RangeInclusive;

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    Direction, Food, GameError, Grid, INITIAL_DIRECTION, Position, Result, SPAWN_MARGIN, Snake,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    GameOver,
    /// The snake covers the whole board and no food can be placed.
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    OutOfBounds,
    SelfCollision,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Tick,
    Turn { direction: Direction },
    Restart,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum GameEvent {
    SnakeTurned { direction: Direction },
    SnakeMoved { head: Position },
    FoodEaten { position: Position },
    FoodSpawned { position: Position },
    SnakeDied { cause: DeathCause },
    BoardFull,
    Restarted,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GameState {
    pub tick: u32,
    pub grid: Grid,
    pub phase: GamePhase,
    pub snake: Snake,
    /// `None` only once the board is full.
    pub food: Option<Food>,
    /// Direction the next tick will apply.
    pub direction: Direction,
    /// Direction applied on the most recent tick.
    pub last_direction: Direction,
    pub score: u32,
}

impl GameState {
    /// A fresh game with a randomly placed snake and food.
    pub fn new<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Result<Self> {
        let (snake, food) = spawn(&grid, rng)?;
        Ok(GameState {
            tick: 0,
            grid,
            phase: GamePhase::Running,
            snake,
            food: Some(food),
            direction: INITIAL_DIRECTION,
            last_direction: INITIAL_DIRECTION,
            score: 0,
        })
    }

    /// A running game from an explicit layout. `direction` counts as the
    /// last applied direction.
    pub fn from_layout(grid: Grid, snake: Snake, direction: Direction, food: Position) -> Self {
        GameState {
            tick: 0,
            grid,
            phase: GamePhase::Running,
            snake,
            food: Some(Food::at(food)),
            direction,
            last_direction: direction,
            score: 0,
        }
    }

    pub fn current_tick(&self) -> u32 {
        self.tick
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn exec_command<R: Rng + ?Sized>(
        &mut self,
        command: GameCommand,
        rng: &mut R,
    ) -> Result<Vec<GameEvent>> {
        let mut out: Vec<GameEvent> = Vec::new();

        match command {
            GameCommand::Tick => {
                if self.is_running() {
                    self.step(rng, &mut out)?;
                }
            }

            GameCommand::Turn { direction } => {
                // Reversals are checked against the applied direction, not
                // against whatever was queued earlier in the same window.
                // Repeating the pending direction is a no-op and emits nothing.
                if self.is_running()
                    && !direction.is_opposite(&self.last_direction)
                    && direction != self.direction
                {
                    self.direction = direction;
                    out.push(GameEvent::SnakeTurned { direction });
                }
            }

            GameCommand::Restart => {
                if !self.is_running() {
                    self.restart(rng, &mut out)?;
                }
            }
        }

        Ok(out)
    }

    fn step<R: Rng + ?Sized>(&mut self, rng: &mut R, out: &mut Vec<GameEvent>) -> Result<()> {
        self.tick += 1;
        self.last_direction = self.direction;
        self.snake.move_towards(self.direction);

        let head = self.snake.head();
        out.push(GameEvent::SnakeMoved { head });

        if let Some(food) = self.food {
            if self.snake.eat(food.cell()) {
                self.score += 1;
                out.push(GameEvent::FoodEaten { position: food.cell() });

                match Food::generate(&self.grid, self.snake.cells(), rng) {
                    Ok(food) => {
                        self.food = Some(food);
                        out.push(GameEvent::FoodSpawned { position: food.cell() });
                    }
                    Err(GameError::NoFreeCell) => {
                        info!("board full after {} ticks, score {}", self.tick, self.score);
                        self.food = None;
                        self.phase = GamePhase::Won;
                        out.push(GameEvent::BoardFull);
                        return Ok(());
                    }
                    Err(err) => return Err(err),
                }
            }
        }

        let cause = if !self.grid.is_in_bounds(head) {
            Some(DeathCause::OutOfBounds)
        } else if self.snake.check_self_collision() {
            Some(DeathCause::SelfCollision)
        } else {
            None
        };

        if let Some(cause) = cause {
            info!(
                "snake died ({:?}) at ({}, {}) on tick {}, score {}",
                cause, head.x, head.y, self.tick, self.score
            );
            self.phase = GamePhase::GameOver;
            out.push(GameEvent::SnakeDied { cause });
        }

        Ok(())
    }

    fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R, out: &mut Vec<GameEvent>) -> Result<()> {
        let (snake, food) = spawn(&self.grid, rng)?;
        debug!(
            "restarting with head at ({}, {})",
            snake.head().x,
            snake.head().y
        );

        self.snake = snake;
        self.food = Some(food);
        self.direction = INITIAL_DIRECTION;
        self.last_direction = INITIAL_DIRECTION;
        self.phase = GamePhase::Running;
        self.score = 0;

        out.push(GameEvent::Restarted);
        out.push(GameEvent::FoodSpawned { position: food.cell() });
        Ok(())
    }
}

fn spawn<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Result<(Snake, Food)> {
    let (xs, ys) = spawn_ranges(grid);
    let head = Position::new(rng.gen_range(xs), rng.gen_range(ys));
    let snake = Snake::new(head);
    let food = Food::generate(grid, snake.cells(), rng)?;
    Ok((snake, food))
}

/// Head placement window: a margin from the left/right walls and the upper
/// third of the board, so the snake has room to move down. Grids too small
/// for that fall back to any cell that keeps the tail on the board.
fn spawn_ranges(grid: &Grid) -> (RangeInclusive<i32>, RangeInclusive<i32>) {
    let width = grid.width as i32;
    let height = grid.height as i32;

    let xs = if SPAWN_MARGIN <= width - SPAWN_MARGIN {
        SPAWN_MARGIN..=width - SPAWN_MARGIN
    } else {
        1..=width - 1
    };
    let ys = if SPAWN_MARGIN <= height / 3 {
        SPAWN_MARGIN..=height / 3
    } else {
        0..=height - 1
    };

    (xs, ys)
}
