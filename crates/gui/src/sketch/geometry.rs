//! Hit-testing and nearest-segment search on the profile polyline (kurbo)

use kurbo::{Line as KLine, ParamCurveNearest, Point};
use shared::Point2D;

use super::transform::CoordinateTransform;

/// Pick radius around a profile point, in display pixels
pub const HIT_RADIUS_PX: f64 = 6.0;

/// Convert a profile point to kurbo Point
pub fn to_point(p: &Point2D) -> Point {
    Point::new(p.x, p.y)
}

/// Index of the first point (in profile order) whose display position lies
/// within `HIT_RADIUS_PX` of `cursor`.
///
/// Overlapping points resolve to the earliest one, not the closest.
pub fn hit_test(
    points: &[Point2D],
    transform: &CoordinateTransform,
    cursor: [f64; 2],
) -> Option<usize> {
    let cursor = Point::new(cursor[0], cursor[1]);
    points.iter().position(|p| {
        let [px, py] = transform.to_display(p);
        (Point::new(px, py) - cursor).hypot() <= HIT_RADIUS_PX
    })
}

/// Distance from `p` to the segment `a`-`b`, projection clamped to the endpoints
pub fn point_segment_distance(p: &Point2D, a: &Point2D, b: &Point2D) -> f64 {
    let line = KLine::new(to_point(a), to_point(b));
    let target = to_point(p);
    // Zero-length segment: kurbo's projection divides by the squared length
    if (line.p1 - line.p0).hypot2() == 0.0 {
        return (target - line.p0).hypot();
    }
    line.nearest(target, 1e-9).distance_sq.sqrt()
}

/// Index at which a new point near `p` should be inserted.
///
/// Finds the segment `(points[i], points[i + 1])` closest to `p` and returns
/// `i + 1`; the first segment wins ties. With fewer than two segments the
/// point goes to the end of the list.
pub fn insertion_index(points: &[Point2D], p: &Point2D) -> usize {
    if points.len() < 3 {
        return points.len();
    }

    let mut best_index = points.len();
    let mut best_dist = f64::INFINITY;
    for (i, seg) in points.windows(2).enumerate() {
        let dist = point_segment_distance(p, &seg[0], &seg[1]);
        if dist < best_dist {
            best_dist = dist;
            best_index = i + 1;
        }
    }
    best_index
}
