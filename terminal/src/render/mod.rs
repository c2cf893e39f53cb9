pub mod arena;
pub mod block_renderer;
pub mod sprite_renderer;
pub mod traits;
pub mod types;

use clap::ValueEnum;
use common::{Direction, SegmentKind};

use block_renderer::BlockRenderer;
use sprite_renderer::SpriteRenderer;
use traits::GameObjectRenderer;
use types::{CharDimensions, CharPattern};

/// The two looks the arena can be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderStyle {
    /// Solid rectangles
    Blocks,
    /// Direction-aware glyphs
    Sprites,
}

/// Renderer picked at startup from a `RenderStyle`.
pub enum StyleRenderer {
    Blocks(BlockRenderer),
    Sprites(SpriteRenderer),
}

impl StyleRenderer {
    pub fn new(style: RenderStyle, char_dims: CharDimensions) -> Self {
        match style {
            RenderStyle::Blocks => StyleRenderer::Blocks(BlockRenderer::new(char_dims)),
            RenderStyle::Sprites => StyleRenderer::Sprites(SpriteRenderer::new(char_dims)),
        }
    }

    fn inner(&self) -> &dyn GameObjectRenderer {
        match self {
            StyleRenderer::Blocks(renderer) => renderer,
            StyleRenderer::Sprites(renderer) => renderer,
        }
    }
}

impl GameObjectRenderer for StyleRenderer {
    fn char_dimensions(&self) -> CharDimensions {
        self.inner().char_dimensions()
    }

    fn render_snake_segment(&self, kind: SegmentKind, direction: Direction) -> CharPattern {
        self.inner().render_snake_segment(kind, direction)
    }

    fn render_food(&self) -> CharPattern {
        self.inner().render_food()
    }

    fn render_empty(&self) -> CharPattern {
        self.inner().render_empty()
    }
}
