use super::traits::GameObjectRenderer;
use super::types::{CharGrid, RenderConfig};
use common::{DrawRequest, Position};

pub struct ArenaRenderer<R: GameObjectRenderer> {
    renderer: R,
}

impl<R: GameObjectRenderer> ArenaRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn render(&self, request: &DrawRequest, config: &RenderConfig) -> CharGrid {
        let mut grid = CharGrid::new(
            request.width as usize,
            request.height as usize,
            config.chars_per_point,
        );
        let in_bounds = |pos: &Position| {
            pos.x >= 0
                && pos.x < request.width as i32
                && pos.y >= 0
                && pos.y < request.height as i32
        };

        let empty = self.renderer.render_empty();
        for y in 0..request.height as usize {
            for x in 0..request.width as usize {
                grid.set_logical_point(x, y, &empty);
            }
        }

        if let Some(food) = request.food.filter(|food| in_bounds(food)) {
            let pattern = self.renderer.render_food();
            grid.set_logical_point(food.x as usize, food.y as usize, &pattern);
        }

        // Tail first so the head is drawn last and stays on top. A head
        // that has left the board is clipped.
        for segment in request.segments.iter().rev() {
            if in_bounds(&segment.cell) {
                let pattern = self
                    .renderer
                    .render_snake_segment(segment.kind, request.direction);
                grid.set_logical_point(segment.cell.x as usize, segment.cell.y as usize, &pattern);
            }
        }

        grid
    }
}
