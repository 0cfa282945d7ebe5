//! Port definitions between the event loop and whatever displays its frames.

pub mod frame_sink;
