use common::{Direction, SegmentKind};
use ratatui::style::{Color, Modifier, Style};
use super::traits::GameObjectRenderer;
use super::types::{CharPattern, CharDimensions};

/// Glyph "sprites": the head points where the snake is going, body links
/// are beads and the food is an apple. Wider cells are padded with blanks.
pub struct SpriteRenderer {
    char_dims: CharDimensions,
}

impl SpriteRenderer {
    pub fn new(char_dims: CharDimensions) -> Self {
        Self { char_dims }
    }

    fn sprite(&self, glyph: char, style: Style) -> CharPattern {
        let mut pattern = CharPattern::empty(self.char_dims);
        if let Some(first) = pattern.chars.first_mut().and_then(|row| row.first_mut()) {
            *first = glyph;
        }
        pattern.styled(style)
    }
}

pub fn head_glyph(direction: Direction) -> char {
    match direction {
        Direction::Up => '▲',
        Direction::Down => '▼',
        Direction::Left => '◀',
        Direction::Right => '▶',
    }
}

impl GameObjectRenderer for SpriteRenderer {
    fn char_dimensions(&self) -> CharDimensions {
        self.char_dims
    }

    fn render_snake_segment(&self, kind: SegmentKind, direction: Direction) -> CharPattern {
        match kind {
            SegmentKind::Head => self.sprite(
                head_glyph(direction),
                Style::default().fg(Color::LightGreen).add_modifier(Modifier::BOLD),
            ),
            SegmentKind::Body => self.sprite('●', Style::default().fg(Color::Green)),
        }
    }

    fn render_food(&self) -> CharPattern {
        self.sprite('♥', Style::default().fg(Color::LightRed))
    }

    fn render_empty(&self) -> CharPattern {
        CharPattern::empty(self.char_dims)
    }
}
