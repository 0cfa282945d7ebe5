//! What the window shows before the painter publishes anything.

use crate::core::canvas::figure::Figure;
use crate::core::canvas::paint::paint;
use crate::core::canvas::state::CanvasState;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Green background with one figure at the centre, framed by a white border.
///
/// Returns `None` for a collapsed window.
pub fn default_scene(width: u32, height: u32) -> Option<PixelBuffer> {
    let rect = PixelRect::from_size(width, height).ok()?;

    let mut state = CanvasState::new();
    state.fill_background(Colour::GREEN);
    state.add_figure(Figure::at(0.5, 0.5));

    let mut scene = PixelBuffer::new(rect);
    paint(&state, &mut scene);
    draw_border(&mut scene, Colour::WHITE);

    Some(scene)
}

fn draw_border(surface: &mut PixelBuffer, colour: Colour) {
    let rect = surface.pixel_rect();
    let top_left = rect.top_left();
    let bottom_right = rect.bottom_right();
    let right = bottom_right.x + 1;
    let bottom = bottom_right.y + 1;

    let edges = [
        ((top_left.x, top_left.y), (right, top_left.y + 1)),
        ((top_left.x, bottom_right.y), (right, bottom)),
        ((top_left.x, top_left.y), (top_left.x + 1, bottom)),
        ((bottom_right.x, top_left.y), (right, bottom)),
    ];

    for ((min_x, min_y), (max_x, max_y)) in edges {
        surface.fill(
            Point { x: min_x, y: min_y },
            Point { x: max_x, y: max_y },
            colour,
        );
    }
}
