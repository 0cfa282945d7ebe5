use crate::core::data::pixel_rect::{PixelRect, PixelRectError};

const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PainterConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl PainterConfig {
    pub fn surface_rect(&self) -> Result<PixelRect, PixelRectError> {
        PixelRect::from_size(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_surface_is_800_square() {
        let rect = PainterConfig::default().surface_rect().unwrap();

        assert_eq!((rect.width(), rect.height()), (800, 800));
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        let config = PainterConfig {
            width: 0,
            height: 10,
        };

        assert!(config.surface_rect().is_err());
    }
}
