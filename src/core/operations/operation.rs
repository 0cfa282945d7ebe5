use std::fmt;

use crate::core::canvas::figure::{NormalizedPoint, NormalizedRect};
use crate::core::canvas::paint::paint;
use crate::core::canvas::state::CanvasState;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::operations::mutation::Mutation;

/// Extension point for verbs the built-in variants do not cover.
///
/// Returns `true` when the frame should be published after this call. Must not
/// block.
pub trait CanvasOperation: Send {
    fn apply(&self, state: &mut CanvasState, surface: &mut PixelBuffer) -> bool;
}

impl<F> CanvasOperation for F
where
    F: Fn(&mut CanvasState, &mut PixelBuffer) -> bool + Send,
{
    #[inline]
    fn apply(&self, state: &mut CanvasState, surface: &mut PixelBuffer) -> bool {
        self(state, surface)
    }
}

/// A unit of work for the event loop.
pub enum Operation {
    /// Edits the scene and repaints the surface. Never ready.
    Mutate(Mutation),
    /// Touches nothing. Always ready.
    Update,
    /// Applies every element in order; ready if any element was.
    List(Vec<Operation>),
    Custom(Box<dyn CanvasOperation>),
}

impl Operation {
    /// Applies the operation and reports whether the surface is ready to publish.
    pub fn apply(&self, state: &mut CanvasState, surface: &mut PixelBuffer) -> bool {
        match self {
            Self::Mutate(mutation) => {
                mutation.apply(state);
                paint(state, surface);
                false
            }
            Self::Update => true,
            // Every element runs even after one reports ready.
            Self::List(operations) => operations
                .iter()
                .fold(false, |ready, operation| operation.apply(state, surface) | ready),
            Self::Custom(operation) => operation.apply(state, surface),
        }
    }

    pub fn custom(operation: impl CanvasOperation + 'static) -> Self {
        Self::Custom(Box::new(operation))
    }

    #[must_use]
    pub fn fill(colour: Colour) -> Self {
        Self::Mutate(Mutation::Fill(colour))
    }

    #[must_use]
    pub fn white_fill() -> Self {
        Self::fill(Colour::WHITE)
    }

    #[must_use]
    pub fn green_fill() -> Self {
        Self::fill(Colour::GREEN)
    }

    #[must_use]
    pub fn background_rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::Mutate(Mutation::BackgroundRect(NormalizedRect::new(x1, y1, x2, y2)))
    }

    #[must_use]
    pub fn figure(x: f64, y: f64) -> Self {
        Self::Mutate(Mutation::Figure(NormalizedPoint::new(x, y)))
    }

    #[must_use]
    pub fn move_to(x: f64, y: f64) -> Self {
        Self::Mutate(Mutation::Move(NormalizedPoint::new(x, y)))
    }

    #[must_use]
    pub fn reset() -> Self {
        Self::Mutate(Mutation::Reset)
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mutate(mutation) => f.debug_tuple("Mutate").field(mutation).finish(),
            Self::Update => f.write_str("Update"),
            Self::List(operations) => f.debug_tuple("List").field(operations).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<Mutation> for Operation {
    fn from(mutation: Mutation) -> Self {
        Self::Mutate(mutation)
    }
}

impl From<Vec<Operation>> for Operation {
    fn from(operations: Vec<Operation>) -> Self {
        Self::List(operations)
    }
}
