//! Core model of a classic single-player Snake game: grid, snake, food and
//! the fixed-tick game loop. Rendering, input and timing live with the
//! caller; this crate only mutates state and describes what to draw.

mod config;
mod constants;
mod error;
mod food;
mod frame;
mod game_engine;
mod game_state;
mod grid;
mod snake;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use food::*;
pub use frame::*;
pub use game_engine::*;
pub use game_state::*;
pub use grid::*;
pub use snake::*;
