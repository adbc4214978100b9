use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// One detected shape candidate: the minimum-area oriented rectangle fitted
/// around a contour by the external vision stage.
///
/// `angle` is in degrees, following the fitting routine's convention. The
/// fitting routine is free to swap which axis it reports as `width` vs
/// `height` for a near-90°-rotated rectangle; consumers that care use
/// [`OrientedRegion::aspect_ratio`] together with its reciprocal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrientedRegion {
    /// Center in pixel coordinates.
    pub center: Point2<f32>,
    pub width: f32,
    pub height: f32,
    /// Rotation in degrees.
    pub angle: f32,
}

impl OrientedRegion {
    pub fn new(cx: f32, cy: f32, width: f32, height: f32, angle: f32) -> Self {
        Self {
            center: Point2::new(cx, cy),
            width,
            height,
            angle,
        }
    }

    /// Bounding-rectangle area in square pixels.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Height over width, as reported by the fitting routine.
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.height / self.width
    }

    /// The longer of the two sides, independent of reported orientation.
    #[inline]
    pub fn long_side(&self) -> f32 {
        self.width.max(self.height)
    }

    /// The four corners of the rotated rectangle, in the fitting routine's
    /// order (bottom-left first, counter-clockwise for a positive angle).
    pub fn corner_points(&self) -> [Point2<f32>; 4] {
        let rad = self.angle.to_radians();
        let a = rad.sin() * 0.5;
        let b = rad.cos() * 0.5;
        let (cx, cy) = (self.center.x, self.center.y);

        let p0 = Point2::new(
            cx - a * self.height - b * self.width,
            cy + b * self.height - a * self.width,
        );
        let p1 = Point2::new(
            cx + a * self.height - b * self.width,
            cy - b * self.height - a * self.width,
        );
        let p2 = Point2::new(2.0 * cx - p0.x, 2.0 * cy - p0.y);
        let p3 = Point2::new(2.0 * cx - p1.x, 2.0 * cy - p1.y);
        [p0, p1, p2, p3]
    }
}
