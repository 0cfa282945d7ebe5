use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes `surface` as a binary (P6) PPM image.
pub fn write_ppm_to(surface: &PixelBuffer, mut out: impl Write) -> io::Result<()> {
    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", surface.width(), surface.height())?;
    writeln!(out, "255")?;
    out.write_all(surface.buffer())?;
    out.flush()
}

pub fn write_ppm(surface: &PixelBuffer, filepath: impl AsRef<Path>) -> io::Result<()> {
    let file = File::create(filepath)?;
    write_ppm_to(surface, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_rect::PixelRect;

    #[test]
    fn writes_header_then_raw_rgb() {
        let mut surface = PixelBuffer::new(PixelRect::from_size(2, 1).unwrap());
        surface.fill_all(Colour::GREEN);
        let mut out = Vec::new();

        write_ppm_to(&surface, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[0, 255, 0, 0, 255, 0]);
        assert_eq!(out, expected);
    }
}
