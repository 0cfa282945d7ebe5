use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use rayon::prelude::*;
use thiserror::Error;

/// Fills covering at least this many pixels are split across rayon workers by row.
const PARALLEL_FILL_PIXELS: u64 = 64 * 1024;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    (pixel_rect.size() * 3) as usize
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error(
        "pixel at x:{}, y:{} outside of PixelRect bounds top:{}, left:{}, bottom:{}, right:{}",
        .pixel.x,
        .pixel.y,
        .pixel_rect.top_left().y,
        .pixel_rect.top_left().x,
        .pixel_rect.bottom_right().y,
        .pixel_rect.bottom_right().x
    )]
    PixelOutsideBounds { pixel: Point, pixel_rect: PixelRect },
    #[error("pixel rect size {pixel_rect_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// An RGB drawing surface, three bytes per pixel in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        let total_bytes = pixel_rect_to_buffer_size(pixel_rect);

        Self {
            pixel_rect,
            buffer: vec![0; total_bytes],
        }
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let buffer_size = pixel_rect_to_buffer_size(pixel_rect);

        if buffer_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: buffer_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index..index + 3].copy_from_slice(&colour.to_array());

        Ok(())
    }

    pub fn fill_all(&mut self, colour: Colour) {
        self.fill_rect(self.pixel_rect, colour);
    }

    /// Fills the half-open region `[min, max)`, clipped to the buffer bounds.
    pub fn fill(&mut self, min: Point, max: Point, colour: Colour) {
        if let Some(rect) = self.pixel_rect.clip(min, max) {
            self.fill_rect(rect, colour);
        }
    }

    fn fill_rect(&mut self, rect: PixelRect, colour: Colour) {
        let origin = self.pixel_rect.top_left();
        let stride = self.pixel_rect.width() as usize * 3;

        let x0 = (rect.top_left().x - origin.x) as usize * 3;
        let x1 = (rect.bottom_right().x - origin.x + 1) as usize * 3;
        let y0 = (rect.top_left().y - origin.y) as usize;
        let y1 = (rect.bottom_right().y - origin.y + 1) as usize;

        let rgb = colour.to_array();
        let fill_row = move |row: &mut [u8]| {
            for pixel in row[x0..x1].chunks_exact_mut(3) {
                pixel.copy_from_slice(&rgb);
            }
        };

        let rows = &mut self.buffer[y0 * stride..y1 * stride];

        if rect.size() >= PARALLEL_FILL_PIXELS {
            rows.par_chunks_exact_mut(stride).for_each(fill_row);
        } else {
            rows.chunks_exact_mut(stride).for_each(fill_row);
        }
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        let relative_x = (pixel.x - self.pixel_rect.top_left().x) as usize;
        let relative_y = (pixel.y - self.pixel_rect.top_left().y) as usize;

        Ok((relative_y * self.pixel_rect.width() as usize + relative_x) * 3)
    }
}
