use std::time::{Duration, Instant};

use common::{Direction, GameEngine, GamePhase, GameState, Grid, Position, Snake};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::TestBackend, Terminal};
use terminal::app::{App, AppCommand};
use terminal::render::types::CharDimensions;
use terminal::render::{RenderStyle, StyleRenderer};

const TICK: Duration = Duration::from_millis(250);

/// 20x10 board with the snake two steps from the right wall.
fn app_near_wall(start: Instant) -> App {
    let snake = Snake::from_cells([Position::new(18, 5), Position::new(17, 5)]).unwrap();
    let state = GameState::from_layout(Grid::new(20, 10), snake, Direction::Right, Position::new(0, 0));
    let engine = GameEngine::from_state(state, StdRng::seed_from_u64(7));
    let renderer = StyleRenderer::new(RenderStyle::Blocks, CharDimensions::new(2, 1));
    App::with_engine(engine, renderer, start)
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_ticks_only_when_due() {
    let start = Instant::now();
    let mut app = app_near_wall(start);

    assert!(!app.update(start).unwrap());
    assert!(!app.update(start + TICK / 2).unwrap());
    assert_eq!(app.engine().current_tick(), 0);

    assert!(app.update(start + TICK).unwrap());
    assert_eq!(app.engine().current_tick(), 1);
    assert_eq!(app.engine().state().snake.head(), Position::new(19, 5));
    assert_eq!(app.time_until_tick(start + TICK), TICK);
}

#[test]
fn test_game_over_screen_and_restart() {
    let start = Instant::now();
    let mut app = app_near_wall(start);
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

    terminal.draw(|f| app.render(f)).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("Score: 0"));
    assert!(text.contains("Running"));
    assert!(!text.contains("GAME OVER"));

    app.update(start + TICK).unwrap();
    app.update(start + TICK * 2).unwrap();
    assert_eq!(app.engine().phase(), GamePhase::GameOver);

    terminal.draw(|f| app.render(f)).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("Final score: 0"));
    assert!(text.contains("Press the space bar to start again"));
    assert!(text.contains("Events ("));

    assert_eq!(app.handle_input(press(KeyCode::Char(' '))).unwrap(), None);
    assert!(app.engine().restart_pending());
    // Nothing changes until the next tick boundary
    assert_eq!(app.engine().phase(), GamePhase::GameOver);

    app.update(start + TICK * 3).unwrap();
    assert_eq!(app.engine().phase(), GamePhase::Running);
    assert_eq!(app.engine().state().snake.len(), 2);

    terminal.draw(|f| app.render(f)).unwrap();
    let text = screen_text(&terminal);
    assert!(!text.contains("GAME OVER"));
    assert!(text.contains("Running"));
}

#[test]
fn test_narrow_terminal_hides_event_log() {
    let start = Instant::now();
    let app = app_near_wall(start);
    let mut terminal = Terminal::new(TestBackend::new(50, 20)).unwrap();

    terminal.draw(|f| app.render(f)).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("Score: 0"));
    assert!(!text.contains("Events ("));
}

#[test]
fn test_quit_and_steering_keys() {
    let start = Instant::now();
    let mut app = app_near_wall(start);

    assert_eq!(app.handle_input(press(KeyCode::Char('q'))).unwrap(), Some(AppCommand::Quit));
    assert_eq!(app.handle_input(press(KeyCode::Esc)).unwrap(), Some(AppCommand::Quit));

    // Reversal is ignored, a perpendicular turn is buffered
    app.handle_input(press(KeyCode::Left)).unwrap();
    assert_eq!(app.engine().state().direction, Direction::Right);
    app.handle_input(press(KeyCode::Up)).unwrap();
    assert_eq!(app.engine().state().direction, Direction::Up);

    app.update(start + TICK).unwrap();
    assert_eq!(app.engine().state().snake.head(), Position::new(18, 4));
}

/// 3x1 board where the growing snake's next step fills the last free cell.
fn app_one_step_from_win(start: Instant) -> App {
    let mut snake = Snake::from_cells([Position::new(1, 0), Position::new(0, 0)]).unwrap();
    assert!(snake.eat(Position::new(1, 0)));
    let state = GameState::from_layout(Grid::new(3, 1), snake, Direction::Right, Position::new(2, 0));
    let engine = GameEngine::from_state(state, StdRng::seed_from_u64(11));
    let renderer = StyleRenderer::new(RenderStyle::Sprites, CharDimensions::new(2, 1));
    App::with_engine(engine, renderer, start)
}

#[test]
fn test_board_cleared_screen_and_restart() {
    let start = Instant::now();
    let mut app = app_one_step_from_win(start);
    let mut terminal = Terminal::new(TestBackend::new(43, 20)).unwrap();

    app.update(start + TICK).unwrap();
    assert_eq!(app.engine().phase(), GamePhase::Won);
    assert!(app.engine().state().food.is_none());

    terminal.draw(|f| app.render(f)).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("BOARD CLEARED"));
    assert!(text.contains("Press the space bar to start again"));
    assert!(!text.contains("GAME OVER"));

    app.handle_input(press(KeyCode::Char(' '))).unwrap();
    assert!(app.engine().restart_pending());
    app.update(start + TICK * 2).unwrap();

    let state = app.engine().state();
    assert_eq!(state.phase, GamePhase::Running);
    assert_eq!(state.score, 0);
    assert_eq!(state.snake.len(), 2);
    let food = state.food.unwrap().cell();
    assert!(!state.snake.contains(&food));

    terminal.draw(|f| app.render(f)).unwrap();
    let text = screen_text(&terminal);
    assert!(!text.contains("BOARD CLEARED"));
    assert!(text.contains("Running"));
}

#[test]
fn test_oversized_board_renders_without_overflow() {
    let start = Instant::now();
    let snake = Snake::from_cells([Position::new(5, 1), Position::new(4, 1)]).unwrap();
    let state = GameState::from_layout(Grid::new(32760, 3), snake, Direction::Right, Position::new(0, 0));
    let engine = GameEngine::from_state(state, StdRng::seed_from_u64(3));
    let renderer = StyleRenderer::new(RenderStyle::Blocks, CharDimensions::new(2, 1));
    let app = App::with_engine(engine, renderer, start);

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("Score: 0"));
    assert!(!text.contains("Events ("));
}
