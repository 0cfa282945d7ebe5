//! Copies an RGB surface into an RGBA framebuffer of any size.

use crate::core::data::pixel_buffer::PixelBuffer;

/// Nearest-neighbour scales `src` into `dst`, a `dst_width` x `dst_height` RGBA
/// buffer. Alpha is always opaque.
///
/// # Panics
/// Panics if `dst` is not exactly `dst_width * dst_height * 4` bytes long.
pub fn blit_scaled(src: &PixelBuffer, dst: &mut [u8], dst_width: u32, dst_height: u32) {
    let expected_len = dst_width as usize * dst_height as usize * 4;
    assert_eq!(
        dst.len(),
        expected_len,
        "dst length {} does not match {}x{} RGBA",
        dst.len(),
        dst_width,
        dst_height
    );

    if dst_width == 0 || dst_height == 0 {
        return;
    }

    let src_width = src.width() as usize;
    let src_height = src.height() as usize;
    let src_data = src.buffer();

    for (y, dst_row) in dst.chunks_exact_mut(dst_width as usize * 4).enumerate() {
        let src_y = y * src_height / dst_height as usize;
        let src_row = &src_data[src_y * src_width * 3..(src_y + 1) * src_width * 3];

        for (x, dst_pixel) in dst_row.chunks_exact_mut(4).enumerate() {
            let src_x = x * src_width / dst_width as usize;
            dst_pixel[..3].copy_from_slice(&src_row[src_x * 3..src_x * 3 + 3]);
            dst_pixel[3] = 255;
        }
    }
}
