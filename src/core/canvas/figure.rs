use crate::core::data::point::Point;

/// A point expressed as fractions of the surface extent.
///
/// Values outside `0..=1` are accepted and simply land off-surface.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Scales to pixels, truncating toward zero.
    #[must_use]
    pub fn to_pixel(self, width: u32, height: u32) -> Point {
        Point {
            x: (self.x * f64::from(width)) as i32,
            y: (self.y * f64::from(height)) as i32,
        }
    }
}

/// Background rectangle spanning `(x1, y1)` to `(x2, y2)` in surface fractions.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct NormalizedRect {
    pub min: NormalizedPoint,
    pub max: NormalizedPoint,
}

impl NormalizedRect {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            min: NormalizedPoint::new(x1, y1),
            max: NormalizedPoint::new(x2, y2),
        }
    }
}

/// A "T" shaped figure. Its anchor sits where the bar meets the stem.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Figure {
    pub anchor: NormalizedPoint,
}

impl Figure {
    #[must_use]
    pub const fn at(x: f64, y: f64) -> Self {
        Self {
            anchor: NormalizedPoint::new(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_pixel_scales_by_surface_extent() {
        let point = NormalizedPoint::new(0.25, 0.5);

        assert_eq!(point.to_pixel(800, 600), Point { x: 200, y: 300 });
    }

    #[test]
    fn to_pixel_truncates_toward_zero() {
        assert_eq!(
            NormalizedPoint::new(0.999, -0.001).to_pixel(10, 10),
            Point { x: 9, y: 0 }
        );
    }
}
