//! Scene description owned by the event loop and the pixel painting derived from it.

pub mod figure;
pub mod paint;
pub mod state;

pub use figure::{Figure, NormalizedPoint, NormalizedRect};
pub use paint::paint;
pub use state::CanvasState;
