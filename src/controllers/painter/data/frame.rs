use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// 1-based count of frames published by this loop.
    pub generation: u64,
    pub surface: &'a PixelBuffer,
}
