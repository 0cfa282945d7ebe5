//! Command queue and frame-production pipeline.
//!
//! Producers post [`Operation`](crate::core::operations::Operation)s from any
//! thread. A single worker thread owns the canvas state and both surfaces, applies
//! operations in FIFO order and hands finished frames to a [`FrameSink`].
//!
//! # Architecture
//!
//! - **Input**: `EventLoop::post` / `EventLoop::stop_and_wait`
//! - **Output**: `FrameSink` trait receiving published frames
//! - **Core**: canvas state and painting from `core/`

mod buffers;
mod completion;
pub mod data;
mod event_loop;
pub mod ports;
mod queue;

pub use buffers::FrameBuffers;
pub use data::frame::Frame;
pub use data::painter_config::PainterConfig;
pub use event_loop::EventLoop;
pub use ports::frame_sink::FrameSink;
pub use queue::CommandQueue;
