use crate::core::canvas::figure::Figure;
use crate::core::canvas::state::CanvasState;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;

pub const BACKGROUND_RECT_COLOUR: Colour = Colour::BLACK;
pub const FIGURE_COLOUR: Colour = Colour::YELLOW;

/// Repaints `surface` from scratch so that it shows exactly `state`.
///
/// Layers, bottom to top: background colour, background rectangle, figures in
/// insertion order.
pub fn paint(state: &CanvasState, surface: &mut PixelBuffer) {
    let width = surface.width();
    let height = surface.height();

    surface.fill_all(state.background());

    if let Some(rect) = state.background_rect() {
        surface.fill(
            rect.min.to_pixel(width, height),
            rect.max.to_pixel(width, height),
            BACKGROUND_RECT_COLOUR,
        );
    }

    for figure in state.figures() {
        paint_figure(figure, surface);
    }
}

fn paint_figure(figure: &Figure, surface: &mut PixelBuffer) {
    let width = surface.width();
    let height = surface.height();
    let centre = figure.anchor.to_pixel(width, height);

    let bar_half_width = scale(width, 1, 4);
    let stem_half_width = scale(width, 67, 800);
    let arm_height = scale(height, 1, 4);

    // Anchors far off-surface saturate in `to_pixel`, so corners must not overflow.
    surface.fill(
        Point {
            x: centre.x.saturating_sub(bar_half_width),
            y: centre.y.saturating_sub(arm_height),
        },
        Point {
            x: centre.x.saturating_add(bar_half_width),
            y: centre.y,
        },
        FIGURE_COLOUR,
    );
    surface.fill(
        Point {
            x: centre.x.saturating_sub(stem_half_width),
            y: centre.y,
        },
        Point {
            x: centre.x.saturating_add(stem_half_width),
            y: centre.y.saturating_add(arm_height),
        },
        FIGURE_COLOUR,
    );
}

fn scale(extent: u32, numerator: i64, denominator: i64) -> i32 {
    (i64::from(extent) * numerator / denominator) as i32
}
