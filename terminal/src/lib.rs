pub mod app;
pub mod clock;
pub mod input;
pub mod render;
pub mod views;
