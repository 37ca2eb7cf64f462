//! Mapping between the 2D editing surface (pixels) and model space (mm).

use shared::Point2D;

/// Display pixels per model unit
pub const DEFAULT_SCALE: f64 = 50.0;

/// Screen <-> model transform for an editing surface of `width` x `height` pixels.
///
/// The model origin sits at the centre of the surface, so the axis of
/// revolution is the surface's vertical centre line. Model `+y` points up,
/// display `+y` points down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    width: f64,
    height: f64,
    scale: f64,
}

impl CoordinateTransform {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_scale(width, height, DEFAULT_SCALE)
    }

    pub fn with_scale(width: f64, height: f64, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Display-space origin (centre of the surface)
    pub fn origin(&self) -> [f64; 2] {
        [self.width / 2.0, self.height / 2.0]
    }

    /// Model point -> display pixel
    pub fn to_display(&self, p: &Point2D) -> [f64; 2] {
        let [ox, oy] = self.origin();
        [ox + p.x * self.scale, oy - p.y * self.scale]
    }

    /// Display pixel -> model point
    pub fn to_model(&self, display: [f64; 2]) -> Point2D {
        let [ox, oy] = self.origin();
        Point2D::new(
            (display[0] - ox) / self.scale,
            (oy - display[1]) / self.scale,
        )
    }

    /// Clamp a display position into the surface bounds
    pub fn clamp_to_surface(&self, display: [f64; 2]) -> [f64; 2] {
        [
            display[0].clamp(0.0, self.width),
            display[1].clamp(0.0, self.height),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_origin_maps_to_centre() {
        let t = CoordinateTransform::new(400.0, 300.0);
        assert_eq!(t.to_display(&Point2D::new(0.0, 0.0)), [200.0, 150.0]);
    }

    #[test]
    fn test_vertical_axis_inverted() {
        let t = CoordinateTransform::new(400.0, 400.0);
        let up = t.to_display(&Point2D::new(0.0, 1.0));
        assert_eq!(up, [200.0, 150.0]);
        let right = t.to_display(&Point2D::new(1.0, 0.0));
        assert_eq!(right, [250.0, 200.0]);
    }

    #[test]
    fn test_round_trip() {
        let t = CoordinateTransform::new(400.0, 400.0);
        let samples = [
            Point2D::new(0.5, 2.0),
            Point2D::new(1.5, -1.0),
            Point2D::new(0.0, 0.0),
            Point2D::new(3.25, -3.9),
            Point2D::new(123.456, 0.001),
        ];
        for p in samples {
            let back = t.to_model(t.to_display(&p));
            assert!((back.x - p.x).abs() < EPS, "x mismatch for {p:?}");
            assert!((back.y - p.y).abs() < EPS, "y mismatch for {p:?}");
        }
    }

    #[test]
    fn test_clamp_to_surface() {
        let t = CoordinateTransform::new(400.0, 300.0);
        assert_eq!(t.clamp_to_surface([-20.0, 500.0]), [0.0, 300.0]);
        assert_eq!(t.clamp_to_surface([120.0, 80.0]), [120.0, 80.0]);
    }
}
