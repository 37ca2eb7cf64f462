//! Closed revolution profile from the open, user-edited polyline

use shared::{Point2D, MIN_PROFILE_POINTS};

use super::BuildError;

/// Smallest radius fed to the lathe; a true zero radius collapses a ring
/// into duplicate vertices.
pub const MIN_RADIUS: f64 = 0.01;

/// Close the profile against the axis and clamp radii.
///
/// A cap point `(0, y)` is added before the first point and after the last
/// point when that end sits off the axis (`x > 0`). Every radius is then
/// raised to at least [`MIN_RADIUS`]. The input is never modified.
pub fn build_revolution_profile(points: &[Point2D]) -> Result<Vec<Point2D>, BuildError> {
    if points.len() < MIN_PROFILE_POINTS {
        return Err(BuildError::DegenerateProfile(points.len()));
    }

    let first = points[0];
    let last = points[points.len() - 1];

    let mut closed = Vec::with_capacity(points.len() + 2);
    if first.x > 0.0 {
        closed.push(Point2D::new(0.0, first.y));
    }
    closed.extend_from_slice(points);
    if last.x > 0.0 {
        closed.push(Point2D::new(0.0, last.y));
    }

    for p in &mut closed {
        p.x = p.x.max(MIN_RADIUS);
    }
    Ok(closed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<Point2D> {
        raw.iter().map(|&(x, y)| Point2D::new(x, y)).collect()
    }

    #[test]
    fn test_caps_added_when_ends_off_axis() {
        let profile = pts(&[(0.5, 2.0), (1.5, 1.0), (1.5, -1.0), (0.5, -2.0)]);
        let closed = build_revolution_profile(&profile).unwrap();
        assert_eq!(
            closed,
            pts(&[
                (MIN_RADIUS, 2.0),
                (0.5, 2.0),
                (1.5, 1.0),
                (1.5, -1.0),
                (0.5, -2.0),
                (MIN_RADIUS, -2.0),
            ])
        );
    }

    #[test]
    fn test_no_caps_when_ends_on_axis() {
        let profile = pts(&[(0.0, 3.0), (1.0, 3.0), (1.0, -3.0), (0.0, -3.0)]);
        let closed = build_revolution_profile(&profile).unwrap();
        assert_eq!(
            closed,
            pts(&[(MIN_RADIUS, 3.0), (1.0, 3.0), (1.0, -3.0), (MIN_RADIUS, -3.0)])
        );
    }

    #[test]
    fn test_only_one_cap() {
        let profile = pts(&[(0.0, 1.0), (1.0, 0.0), (2.0, -1.0)]);
        let closed = build_revolution_profile(&profile).unwrap();
        assert_eq!(closed.len(), 4);
        assert_eq!(closed[3], Point2D::new(MIN_RADIUS, -1.0));
    }

    #[test]
    fn test_interior_zero_radius_clamped() {
        let profile = pts(&[(0.0, 1.0), (0.0, 0.0), (0.0, -1.0)]);
        let closed = build_revolution_profile(&profile).unwrap();
        assert!(closed.iter().all(|p| p.x == MIN_RADIUS));
    }

    #[test]
    fn test_source_untouched_and_idempotent() {
        let profile = pts(&[(0.5, 2.0), (0.0, 0.0), (0.5, -2.0)]);
        let copy = profile.clone();
        let a = build_revolution_profile(&profile).unwrap();
        let b = build_revolution_profile(&profile).unwrap();
        assert_eq!(a, b);
        assert_eq!(profile, copy);
    }

    #[test]
    fn test_degenerate_profile() {
        assert_eq!(
            build_revolution_profile(&pts(&[(1.0, 1.0)])),
            Err(BuildError::DegenerateProfile(1))
        );
        assert_eq!(build_revolution_profile(&[]), Err(BuildError::DegenerateProfile(0)));
    }
}
