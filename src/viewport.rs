//! Mapping between device pixels and model space.
//!
//! Only input and output layers use this; the editor itself works in model space.

use crate::bezier::Point;

/// A window of `width` by `height` pixels showing the square
/// `[-extent, extent] x [-extent, extent]` of model space.
///
/// Pixel coordinates start at the top left corner with y pointing down,
/// model coordinates have y pointing up.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
    /// Half width of the visible model space
    pub extent: f64,
}

impl Viewport {
    /// Creates a viewport of the given pixel size.
    pub fn new(width: f64, height: f64, extent: f64) -> Viewport {
        Viewport {
            width,
            height,
            extent,
        }
    }

    /// Converts a pixel position into model coordinates.
    pub fn to_model(self, x: f64, y: f64) -> Point {
        let ndc_x = 2.0 * x / self.width - 1.0;
        let ndc_y = 1.0 - 2.0 * y / self.height;
        Point::new(ndc_x * self.extent, ndc_y * self.extent)
    }

    /// Converts model coordinates back into a pixel position.
    pub fn to_device(self, point: &Point) -> (f64, f64) {
        let ndc_x = point.x / self.extent;
        let ndc_y = point.y / self.extent;
        (
            (ndc_x + 1.0) * self.width / 2.0,
            (1.0 - ndc_y) * self.height / 2.0,
        )
    }
}
