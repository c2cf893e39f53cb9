use anyhow::{Context, Result};
use common::{GameConfig, GameEngine, GameEvent, InputEvent};
use crossterm::event::KeyEvent;
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::Frame;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::clock::TickClock;
use crate::input::map_key;
use crate::render::types::CharDimensions;
use crate::render::{RenderStyle, StyleRenderer};
use crate::views::GameView;

#[derive(Debug, PartialEq, Eq)]
pub enum AppCommand {
    Quit,
}

/// One game session: the engine, its tick clock and the view that draws it.
pub struct App<R: Rng = StdRng> {
    engine: GameEngine<R>,
    clock: TickClock,
    view: GameView<StyleRenderer>,
}

impl App<StdRng> {
    pub fn new(
        config: &GameConfig,
        style: RenderStyle,
        char_dims: CharDimensions,
        now: Instant,
    ) -> Result<Self> {
        let engine = GameEngine::new(config).context("Failed to start game")?;
        info!(
            "Starting {}x{} game, tick every {:?}, {:?} style",
            config.width,
            config.height,
            config.tick_interval(),
            style
        );
        Ok(Self::with_engine(engine, StyleRenderer::new(style, char_dims), now))
    }
}

impl<R: Rng> App<R> {
    pub fn with_engine(engine: GameEngine<R>, renderer: StyleRenderer, now: Instant) -> Self {
        let clock = TickClock::new(engine.tick_duration(), now);
        Self {
            engine,
            clock,
            view: GameView::new(renderer),
        }
    }

    /// Forwards a key to the engine. Quit is handed back to the run loop.
    pub fn handle_input(&mut self, key: KeyEvent) -> Result<Option<AppCommand>> {
        match map_key(key) {
            Some(InputEvent::Quit) => Ok(Some(AppCommand::Quit)),
            Some(input) => {
                debug!(?input, "input");
                self.engine.handle_input(input)?;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Advances the game if a tick is due. Returns whether it did, i.e.
    /// whether a redraw is needed.
    pub fn update(&mut self, now: Instant) -> Result<bool> {
        if !self.clock.is_due(now) {
            return Ok(false);
        }
        self.clock.advance(now);

        let events = self.engine.tick()?;
        for event in &events {
            log_event(event);
        }
        Ok(true)
    }

    pub fn time_until_tick(&self, now: Instant) -> Duration {
        self.clock.time_until_tick(now)
    }

    /// Pure read of the current state.
    pub fn render(&self, frame: &mut Frame) {
        let request = self.engine.draw_request();
        self.view.render(frame, &request, self.engine.recent_events());
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::SnakeDied { cause } => info!(?cause, "Snake died"),
        GameEvent::BoardFull => info!("Board cleared"),
        GameEvent::Restarted => info!("Game restarted"),
        _ => {}
    }

    match serde_json::to_string(event) {
        Ok(json) => debug!(event = %json, "game event"),
        Err(err) => warn!("Failed to serialize event {:?}: {}", event, err),
    }
}
