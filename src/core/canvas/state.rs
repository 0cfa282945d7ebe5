use crate::core::canvas::figure::{Figure, NormalizedPoint, NormalizedRect};
use crate::core::data::colour::Colour;

/// Everything the next frame should show.
///
/// Owned by the event loop thread and lent to each operation by `&mut`; producers
/// never see it.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasState {
    background: Colour,
    background_rect: Option<NormalizedRect>,
    figures: Vec<Figure>,
}

impl CanvasState {
    pub const DEFAULT_BACKGROUND: Colour = Colour::BLACK;

    #[must_use]
    pub fn new() -> Self {
        Self {
            background: Self::DEFAULT_BACKGROUND,
            background_rect: None,
            figures: Vec::new(),
        }
    }

    #[must_use]
    pub fn background(&self) -> Colour {
        self.background
    }

    #[must_use]
    pub fn background_rect(&self) -> Option<NormalizedRect> {
        self.background_rect
    }

    #[must_use]
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn fill_background(&mut self, colour: Colour) {
        self.background = colour;
    }

    /// Replaces the background rectangle; there is never more than one.
    pub fn set_background_rect(&mut self, rect: NormalizedRect) {
        self.background_rect = Some(rect);
    }

    pub fn add_figure(&mut self, figure: Figure) {
        self.figures.push(figure);
    }

    /// Puts every figure's anchor at `to`. This is an absolute move shared by all
    /// figures, not a per-figure offset.
    pub fn move_figures(&mut self, to: NormalizedPoint) {
        for figure in &mut self.figures {
            figure.anchor = to;
        }
    }

    pub fn reset(&mut self) {
        self.background = Self::DEFAULT_BACKGROUND;
        self.background_rect = None;
        self.figures.clear();
    }
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::new()
    }
}
