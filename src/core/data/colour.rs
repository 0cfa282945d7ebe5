/// An opaque 8-bit RGB colour, laid out the way `PixelBuffer` stores pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self { r: 0xff, g: 0xff, b: 0xff };
    pub const GREEN: Self = Self { r: 0, g: 0xff, b: 0 };
    pub const YELLOW: Self = Self { r: 0xff, g: 0xff, b: 0 };

    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}
