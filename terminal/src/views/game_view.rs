use crate::render::arena::ArenaRenderer;
use crate::render::traits::GameObjectRenderer;
use crate::render::types::RenderConfig;
use common::{DrawRequest, GameEvent, GamePhase};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum LayoutMode {
    SingleColumn, // Narrow screens: no event log
    TwoColumn,    // Wide screens: event log beside the arena
}

impl LayoutMode {
    fn from_dimensions(width: u16, arena_width: u16) -> Self {
        const MIN_EVENT_LOG_WIDTH: u16 = 36;

        if width >= arena_width.saturating_add(MIN_EVENT_LOG_WIDTH) {
            LayoutMode::TwoColumn
        } else {
            LayoutMode::SingleColumn
        }
    }
}

/// Draws one tick of the game: header, arena, optional event log and the
/// game-over overlay. Holds no game state of its own.
pub struct GameView<R: GameObjectRenderer> {
    arena_renderer: ArenaRenderer<R>,
    config: RenderConfig,
}

impl<R: GameObjectRenderer> GameView<R> {
    pub fn new(renderer: R) -> Self {
        let config = RenderConfig {
            chars_per_point: renderer.char_dimensions(),
        };
        Self {
            arena_renderer: ArenaRenderer::new(renderer),
            config,
        }
    }

    pub fn render<'e>(
        &self,
        frame: &mut Frame,
        request: &DrawRequest,
        events: impl Iterator<Item = &'e GameEvent>,
    ) {
        let (arena_width, _) = self.arena_size(request);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Arena (+ event log)
                Constraint::Length(3), // Controls help
            ])
            .split(frame.area());

        frame.render_widget(self.render_header(request), rows[0]);

        match LayoutMode::from_dimensions(rows[1].width, arena_width) {
            LayoutMode::SingleColumn => self.render_arena(frame, rows[1], request),
            LayoutMode::TwoColumn => {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Length(arena_width.saturating_add(2)), Constraint::Min(20)])
                    .split(rows[1]);
                self.render_arena(frame, columns[0], request);
                self.render_event_log(frame, columns[1], events);
            }
        }

        frame.render_widget(self.render_controls(request), rows[2]);
    }

    /// Arena size in terminal cells, borders included. Saturates at
    /// `u16::MAX`; the arena is clipped to the frame anyway.
    fn arena_size(&self, request: &DrawRequest) -> (u16, u16) {
        let dims = self.config.chars_per_point;
        let width = (request.width as usize)
            .saturating_mul(dims.horizontal)
            .saturating_add(2);
        let height = (request.height as usize)
            .saturating_mul(dims.vertical)
            .saturating_add(2);
        (
            u16::try_from(width).unwrap_or(u16::MAX),
            u16::try_from(height).unwrap_or(u16::MAX),
        )
    }

    fn render_header(&self, request: &DrawRequest) -> Paragraph {
        let (status, color) = match request.phase {
            GamePhase::Running => ("Running", Color::Green),
            GamePhase::GameOver => ("Game over", Color::Red),
            GamePhase::Won => ("Board cleared", Color::Yellow),
        };

        let line = Line::from(vec![
            Span::styled(
                format!("Score: {}", request.score),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" | Length: {} | Tick: {} | ", request.segments.len(), request.tick)),
            Span::styled(status, Style::default().fg(color)),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Snake"))
    }

    fn render_arena(&self, frame: &mut Frame, area: Rect, request: &DrawRequest) {
        let (width, height) = self.arena_size(request);
        let arena_area = centered(area, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(arena_area);
        frame.render_widget(block, arena_area);

        let char_grid = self.arena_renderer.render(request, &self.config);
        let lines: Vec<Line> = char_grid
            .into_styled_lines()
            .into_iter()
            .map(|(chars, styles)| {
                Line::from(
                    chars
                        .into_iter()
                        .zip(styles)
                        .map(|(ch, style)| Span::styled(ch.to_string(), style))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);

        // Centered on the whole region so the text fits over small boards.
        if request.is_terminal() {
            self.render_overlay(frame, area, request);
        }
    }

    fn render_overlay(&self, frame: &mut Frame, area: Rect, request: &DrawRequest) {
        let (title, color) = match request.phase {
            GamePhase::Won => ("BOARD CLEARED", Color::Yellow),
            _ => ("GAME OVER", Color::Red),
        };

        let lines = vec![
            Line::from(Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Final score: {}", request.score)),
            Line::from(Span::styled(
                "Press the space bar to start again",
                Style::default().fg(Color::Gray),
            )),
        ];

        let popup = centered(area, area.width.min(38), 5);
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            popup,
        );
    }

    fn render_event_log<'e>(
        &self,
        frame: &mut Frame,
        area: Rect,
        events: impl Iterator<Item = &'e GameEvent>,
    ) {
        let events: Vec<&GameEvent> = events.collect();
        let max_width = area.width.saturating_sub(2) as usize;

        // Newest first, one JSON line per event.
        let lines: Vec<Line> = events
            .iter()
            .rev()
            .map(|event| {
                let mut json = serde_json::to_string(event)
                    .unwrap_or_else(|_| "Failed to serialize event".to_string());
                if json.chars().count() > max_width {
                    json = json.chars().take(max_width).collect();
                }
                Line::from(json)
            })
            .collect();

        let event_log = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!("Events ({})", events.len()))
                    .borders(Borders::ALL),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(event_log, area);
    }

    fn render_controls(&self, request: &DrawRequest) -> Paragraph {
        let text = if request.is_terminal() {
            "Space/r: Restart | q/Esc: Quit"
        } else {
            "Arrows/WASD: Steer | q/Esc: Quit"
        };

        Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
