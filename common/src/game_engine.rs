use std::collections::VecDeque;
use std::time::Duration;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{
    DEFAULT_TICK_INTERVAL_MS, Direction, DrawRequest, EVENT_LOG_CAPACITY, GameCommand,
    GameConfig, GameEvent, GamePhase, GameState, Result, Segment, SegmentKind,
};

/// Discrete inputs the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    Restart,
    Quit,
}

/// Drives a single game: buffers input between ticks and advances the state
/// exactly once per tick.
pub struct GameEngine<R: Rng = StdRng> {
    state: GameState,
    rng: R,
    tick_duration: Duration,
    restart_requested: bool,
    event_log: VecDeque<GameEvent>,
}

impl GameEngine<StdRng> {
    /// Builds an engine from a config, seeding the RNG from `config.seed`
    /// or from system entropy.
    pub fn new(config: &GameConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: &GameConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let state = GameState::new(config.grid(), &mut rng)?;
        let mut engine = Self::from_state(state, rng);
        engine.tick_duration = config.tick_interval();
        Ok(engine)
    }

    /// Wraps an existing state, e.g. a hand-built layout.
    pub fn from_state(state: GameState, rng: R) -> Self {
        GameEngine {
            state,
            rng,
            tick_duration: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            restart_requested: false,
            event_log: VecDeque::with_capacity(EVENT_LOG_CAPACITY),
        }
    }

    /// Records an input received between ticks. Turns take effect on the
    /// next tick; a restart is resolved at the next tick boundary. `Quit`
    /// is left to the caller.
    pub fn handle_input(&mut self, input: InputEvent) -> Result<()> {
        match input {
            InputEvent::Turn(direction) => {
                let events = self
                    .state
                    .exec_command(GameCommand::Turn { direction }, &mut self.rng)?;
                self.record(events);
            }
            InputEvent::Restart => {
                if !self.state.is_running() {
                    self.restart_requested = true;
                }
            }
            InputEvent::Quit => {}
        }
        Ok(())
    }

    /// Runs one tick. A pending restart replaces the move for this tick.
    pub fn tick(&mut self) -> Result<Vec<GameEvent>> {
        let command = if std::mem::take(&mut self.restart_requested) {
            GameCommand::Restart
        } else {
            GameCommand::Tick
        };

        let events = self.state.exec_command(command, &mut self.rng)?;
        self.record(events.clone());
        Ok(events)
    }

    /// Snapshot for the render surface.
    pub fn draw_request(&self) -> DrawRequest {
        let segments = self
            .state
            .snake
            .cells()
            .enumerate()
            .map(|(i, cell)| Segment {
                cell: *cell,
                kind: if i == 0 { SegmentKind::Head } else { SegmentKind::Body },
            })
            .collect();

        DrawRequest {
            width: self.state.grid.width,
            height: self.state.grid.height,
            segments,
            food: self.state.food.map(|food| food.cell()),
            phase: self.state.phase,
            direction: self.state.last_direction,
            score: self.state.score,
            tick: self.state.tick,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn current_tick(&self) -> u32 {
        self.state.current_tick()
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    pub fn restart_pending(&self) -> bool {
        self.restart_requested
    }

    /// Most recent events, oldest first.
    pub fn recent_events(&self) -> impl Iterator<Item = &GameEvent> {
        self.event_log.iter()
    }

    fn record(&mut self, events: Vec<GameEvent>) {
        for event in events {
            debug!("tick {}: {:?}", self.state.tick, event);
            if self.event_log.len() == EVENT_LOG_CAPACITY {
                self.event_log.pop_front();
            }
            self.event_log.push_back(event);
        }
    }
}
