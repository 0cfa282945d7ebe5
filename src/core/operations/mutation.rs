use crate::core::canvas::figure::{Figure, NormalizedPoint, NormalizedRect};
use crate::core::canvas::state::CanvasState;
use crate::core::data::colour::Colour;

/// A scene edit. Mutations never make a frame ready on their own.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Mutation {
    Fill(Colour),
    BackgroundRect(NormalizedRect),
    Figure(NormalizedPoint),
    Move(NormalizedPoint),
    Reset,
}

impl Mutation {
    pub fn apply(&self, state: &mut CanvasState) {
        match *self {
            Self::Fill(colour) => state.fill_background(colour),
            Self::BackgroundRect(rect) => state.set_background_rect(rect),
            Self::Figure(anchor) => state.add_figure(Figure { anchor }),
            Self::Move(to) => state.move_figures(to),
            Self::Reset => state.reset(),
        }
    }
}
