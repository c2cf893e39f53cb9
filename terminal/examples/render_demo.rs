use common::{Direction, DrawRequest, GamePhase, Position, Segment, SegmentKind};
use terminal::render::{
    arena::ArenaRenderer,
    traits::GameObjectRenderer,
    types::{CharDimensions, RenderConfig},
    RenderStyle, StyleRenderer,
};

fn main() {
    // An L-shaped snake heading up, with food ahead of it
    let cells = [(5, 4), (5, 5), (5, 6), (5, 7), (4, 7), (3, 7)];
    let request = DrawRequest {
        width: 20,
        height: 10,
        segments: cells
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Segment {
                cell: Position::new(x, y),
                kind: if i == 0 { SegmentKind::Head } else { SegmentKind::Body },
            })
            .collect(),
        food: Some(Position::new(5, 1)),
        phase: GamePhase::Running,
        direction: Direction::Up,
        score: 4,
        tick: 12,
    };

    for style in [RenderStyle::Blocks, RenderStyle::Sprites] {
        println!("=== {:?}, 1x1 ===", style);
        render_with(&request, StyleRenderer::new(style, CharDimensions::new(1, 1)));

        println!("\n=== {:?}, 2x1 ===", style);
        render_with(&request, StyleRenderer::new(style, CharDimensions::new(2, 1)));
        println!();
    }
}

fn render_with<R: GameObjectRenderer>(request: &DrawRequest, renderer: R) {
    let config = RenderConfig {
        chars_per_point: renderer.char_dimensions(),
    };
    let char_grid = ArenaRenderer::new(renderer).render(request, &config);
    let width = char_grid.physical_width();

    println!("┌{}┐", "─".repeat(width));
    for line in char_grid.into_lines() {
        println!("│{}│", line.into_iter().collect::<String>());
    }
    println!("└{}┘", "─".repeat(width));
}
