use std::mem;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;

/// The two surfaces of the double buffer.
///
/// `next` is the one being drawn; `prev` is the one last handed to the sink.
#[derive(Debug)]
pub struct FrameBuffers {
    next: PixelBuffer,
    prev: PixelBuffer,
}

impl FrameBuffers {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            next: PixelBuffer::new(pixel_rect),
            prev: PixelBuffer::new(pixel_rect),
        }
    }

    #[must_use]
    pub fn next(&self) -> &PixelBuffer {
        &self.next
    }

    pub fn next_mut(&mut self) -> &mut PixelBuffer {
        &mut self.next
    }

    #[must_use]
    pub fn prev(&self) -> &PixelBuffer {
        &self.prev
    }

    /// Makes the just-published surface `prev` and the older one `next`.
    ///
    /// The new `next` still holds a frame from two publishes ago; the caller must
    /// repaint it before drawing on it.
    pub fn swap(&mut self) {
        mem::swap(&mut self.next, &mut self.prev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    #[test]
    fn swap_exchanges_roles() {
        let mut buffers = FrameBuffers::new(PixelRect::from_size(2, 2).unwrap());
        buffers.next_mut().fill_all(Colour::WHITE);

        buffers.swap();

        assert!(buffers.prev().buffer().iter().all(|&b| b == 255));
        assert!(buffers.next().buffer().iter().all(|&b| b == 0));

        buffers.swap();

        assert!(buffers.next().buffer().iter().all(|&b| b == 255));
    }

    #[test]
    fn swap_keeps_allocations() {
        let mut buffers = FrameBuffers::new(PixelRect::from_size(4, 4).unwrap());
        let next_ptr = buffers.next().buffer().as_ptr();

        buffers.swap();

        assert_eq!(buffers.prev().buffer().as_ptr(), next_ptr);
    }
}
