//! Solid of revolution building: profile closure, lathe meshing, caching.

mod cache;
mod lathe;
mod revolution;

pub use cache::MeshCache;
pub use lathe::{lathe_mesh, LATHE_SEGMENTS};
pub use revolution::{build_revolution_profile, MIN_RADIUS};

use shared::Point2D;
use thiserror::Error;

use crate::viewport::mesh::MeshData;

/// Failure to turn a profile into a solid. The previous mesh stays on screen.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("profile with {0} points cannot be revolved")]
    DegenerateProfile(usize),

    #[error("lathe needs at least 3 segments, got {0}")]
    InvalidSegments(u32),
}

/// Build the displayable solid for an open, user-edited profile
pub fn build_solid(points: &[Point2D], color: [f32; 3]) -> Result<MeshData, BuildError> {
    let closed = build_revolution_profile(points)?;
    lathe_mesh(&closed, LATHE_SEGMENTS, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::MeshValidator;

    const COLOR: [f32; 3] = [0.6, 0.6, 0.65];

    #[test]
    fn test_build_default_profile() {
        let mesh = build_solid(&shared::default_profile(), COLOR).unwrap();
        let v = MeshValidator::new(&mesh);
        assert!(v.validate_all().is_empty());
        // 6 closed points -> 5 bands
        assert_eq!(v.triangle_count(), 5 * LATHE_SEGMENTS as usize * 2);
        assert!(v.has_dimensions([3.0, 4.0, 3.0], 0.01));
    }

    #[test]
    fn test_build_two_point_profile() {
        let mesh = build_solid(&[Point2D::new(1.0, 1.0), Point2D::new(2.0, -1.0)], COLOR).unwrap();
        assert!(MeshValidator::new(&mesh).validate_all().is_empty());
    }

    #[test]
    fn test_build_degenerate_profile() {
        assert_eq!(
            build_solid(&[Point2D::new(1.0, 1.0)], COLOR).unwrap_err(),
            BuildError::DegenerateProfile(1)
        );
    }

    #[test]
    fn test_build_flat_on_axis_profile() {
        // Every point on the axis: all bands collapse onto the MIN_RADIUS tube
        let mesh = build_solid(&[Point2D::new(0.0, 1.0), Point2D::new(0.0, -1.0)], COLOR).unwrap();
        assert!(MeshValidator::new(&mesh).validate_all().is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BuildError::DegenerateProfile(1).to_string(),
            "profile with 1 points cannot be revolved"
        );
        assert_eq!(
            BuildError::InvalidSegments(2).to_string(),
            "lathe needs at least 3 segments, got 2"
        );
    }
}
