//! Factory functions for creating test profiles.
//!
//! Provides convenient helpers to construct profiles, exchange-format JSON
//! and snapshots used in tests and by the scripting interface.

use shared::{DisplayPrefs, Point2D, ProfileSnapshot};

/// Build a profile from `(x, y)` pairs.
pub fn profile(raw: &[(f64, f64)]) -> Vec<Point2D> {
    raw.iter().map(|&(x, y)| Point2D::new(x, y)).collect()
}

/// The four-point starting profile.
pub fn default_profile() -> Vec<Point2D> {
    shared::default_profile()
}

/// Straight wall of `radius`, from `height / 2` down to `-height / 2`.
/// Both ends sit off the axis, so closure adds two caps.
pub fn cylinder_profile(radius: f64, height: f64) -> Vec<Point2D> {
    let h = height * 0.5;
    profile(&[(radius, h), (radius, -h)])
}

/// Cone with its apex on the axis at the top: closure adds only the bottom cap.
pub fn cone_profile(radius: f64, height: f64) -> Vec<Point2D> {
    let h = height * 0.5;
    profile(&[(0.0, h), (radius, -h)])
}

/// Profile already closed against the axis at both ends (no caps needed).
pub fn closed_profile() -> Vec<Point2D> {
    profile(&[(0.0, 3.0), (1.0, 3.0), (1.0, -3.0), (0.0, -3.0)])
}

/// Vase-like silhouette with a neck.
pub fn vase_profile() -> Vec<Point2D> {
    profile(&[
        (0.6, 3.0),
        (0.8, 2.6),
        (0.5, 2.0),
        (1.2, 1.0),
        (1.8, 0.0),
        (1.6, -1.5),
        (1.0, -2.5),
        (0.8, -3.0),
    ])
}

/// Profile containing a zero-length segment (two identical neighbours).
pub fn duplicate_point_profile() -> Vec<Point2D> {
    profile(&[(1.0, 1.0), (1.0, 1.0), (1.0, -1.0)])
}

/// Exchange-format JSON for `points`.
pub fn profile_json(points: &[Point2D]) -> String {
    shared::profile_to_json(points).unwrap_or_default()
}

/// Snapshot with both display flags on.
pub fn snapshot(points: Vec<Point2D>) -> ProfileSnapshot {
    ProfileSnapshot {
        points,
        prefs: DisplayPrefs::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_sizes() {
        assert_eq!(default_profile().len(), 4);
        assert_eq!(cylinder_profile(1.0, 2.0), profile(&[(1.0, 1.0), (1.0, -1.0)]));
        assert_eq!(cone_profile(1.0, 2.0)[0], Point2D::new(0.0, 1.0));
        assert_eq!(vase_profile().len(), 8);
    }

    #[test]
    fn test_profile_json_parses_back() {
        let json = profile_json(&vase_profile());
        assert_eq!(shared::parse_profile_json(&json).unwrap(), vase_profile());
    }
}
