use crate::controllers::painter::data::frame::Frame;

/// Receives every published frame, on the event loop thread.
///
/// The surface is only borrowed for the duration of the call and must not be
/// assumed to be the same allocation on the next call. Copy what you keep.
pub trait FrameSink: Send + Sync {
    fn publish(&self, frame: &Frame<'_>);
}
