//! Asynchronous drawing pipeline.
//!
//! Producers post [`Operation`]s (built directly or parsed from the text command
//! language) to an [`EventLoop`]. A single worker thread applies them to the
//! canvas state, and every operation that reports "ready" publishes the current
//! surface to a [`FrameSink`].

mod controllers;
mod core;
mod input;
pub mod logging;
mod presenters;
mod storage;

pub use controllers::painter::{
    CommandQueue, EventLoop, Frame, FrameBuffers, FrameSink, PainterConfig,
};
pub use crate::core::canvas::{CanvasState, Figure, NormalizedPoint, NormalizedRect, paint};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::operations::{CanvasOperation, Mutation, Operation};
pub use input::script::{Command, ParseError, parse, parse_line, parse_str};
pub use presenters::file::ppm::PpmFrameSink;
pub use storage::write_ppm::{write_ppm, write_ppm_to};

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
