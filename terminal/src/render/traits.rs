use common::{Direction, SegmentKind};
use super::types::{CharPattern, CharDimensions};

/// A visual style for the arena. Each implementation decides how one grid
/// cell of a given kind looks; `ArenaRenderer` places the patterns.
pub trait GameObjectRenderer {
    fn char_dimensions(&self) -> CharDimensions;

    fn render_snake_segment(&self, kind: SegmentKind, direction: Direction) -> CharPattern;

    fn render_food(&self) -> CharPattern;

    fn render_empty(&self) -> CharPattern;
}
