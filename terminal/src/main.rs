use anyhow::{Context, Result};
use clap::Parser;
use common::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICK_INTERVAL_MS, GameConfig};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;
use tracing::info;

use terminal::app::{App, AppCommand};
use terminal::render::types::CharDimensions;
use terminal::render::RenderStyle;

#[derive(Parser, Debug)]
#[command(name = "snake-terminal", about = "Classic Snake in the terminal")]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Milliseconds between ticks
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Seed for snake and food placement
    #[arg(long)]
    seed: Option<u64>,

    /// How the arena is drawn
    #[arg(long, value_enum, default_value_t = RenderStyle::Blocks)]
    style: RenderStyle,

    /// Terminal columns per grid cell
    #[arg(long, default_value_t = 2)]
    cell_width: usize,

    /// Write logs to this file (the screen belongs to the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = GameConfig {
        width: args.width,
        height: args.height,
        tick_interval_ms: args.tick_ms,
        seed: args.seed,
    };
    let char_dims = CharDimensions::new(args.cell_width.max(1), 1);
    let mut app = App::new(&config, args.style, char_dims, Instant::now())?;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        eprintln!("Error: {:?}", err);
    }
    info!(
        "Exiting after {} ticks, score {}",
        app.engine().current_tick(),
        app.engine().state().score
    );

    res
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {:?}", path))?;
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// Waits for input until the next tick is due, then mutates and redraws.
/// One tick at most per pass; a stalled loop does not replay missed ticks.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    terminal.draw(|f| app.render(f)).context("Failed to draw frame")?;

    loop {
        if app.update(Instant::now())? {
            terminal.draw(|f| app.render(f)).context("Failed to draw frame")?;
        }

        let timeout = app.time_until_tick(Instant::now());
        if event::poll(timeout).context("Failed to poll terminal events")? {
            match event::read().context("Failed to read terminal event")? {
                Event::Key(key) => {
                    if let Some(AppCommand::Quit) = app.handle_input(key)? {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => {
                    terminal.draw(|f| app.render(f)).context("Failed to draw frame")?;
                }
                _ => {}
            }
        }
    }
}
