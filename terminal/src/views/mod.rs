pub mod game_view;

pub use game_view::GameView;
