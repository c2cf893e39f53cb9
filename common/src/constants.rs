use crate::Direction;

/// Default play-field width in cells
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default play-field height in cells
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Largest accepted play-field width in cells
pub const MAX_GRID_WIDTH: u16 = 256;

/// Largest accepted play-field height in cells
pub const MAX_GRID_HEIGHT: u16 = 256;

/// Default tick interval in milliseconds (4 ticks per second)
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 250;

/// Direction a fresh snake starts moving in
pub const INITIAL_DIRECTION: Direction = Direction::Down;

/// Smallest column/row the initial head may be placed on
pub const SPAWN_MARGIN: i32 = 3;

/// Number of recent game events kept for display
pub const EVENT_LOG_CAPACITY: usize = 12;
