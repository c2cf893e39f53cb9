use common::{Direction, SegmentKind};
use ratatui::style::{Color, Modifier, Style};
use super::traits::GameObjectRenderer;
use super::types::{CharPattern, CharDimensions};

/// Plain filled rectangles: every cell is a solid block, the head in a
/// brighter shade than the body.
pub struct BlockRenderer {
    char_dims: CharDimensions,
}

impl BlockRenderer {
    pub fn new(char_dims: CharDimensions) -> Self {
        Self { char_dims }
    }
}

impl GameObjectRenderer for BlockRenderer {
    fn char_dimensions(&self) -> CharDimensions {
        self.char_dims
    }

    fn render_snake_segment(&self, kind: SegmentKind, _direction: Direction) -> CharPattern {
        match kind {
            SegmentKind::Head => CharPattern::single('█', self.char_dims)
                .styled(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            SegmentKind::Body => CharPattern::single('▓', self.char_dims)
                .styled(Style::default().fg(Color::Gray)),
        }
    }

    fn render_food(&self) -> CharPattern {
        CharPattern::single('■', self.char_dims).styled(Style::default().fg(Color::Red))
    }

    fn render_empty(&self) -> CharPattern {
        // A faint dot in the corner of each cell stands in for grid lines.
        let mut pattern = CharPattern::empty(self.char_dims);
        if let Some(first) = pattern.chars.first_mut().and_then(|row| row.first_mut()) {
            *first = '·';
        }
        pattern.styled(Style::default().fg(Color::DarkGray))
    }
}
