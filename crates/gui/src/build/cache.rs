//! Lathe mesh cache management

use shared::Point2D;
use tracing::{debug, warn};

use super::{build_solid, BuildError};
use crate::viewport::mesh::{Aabb, MeshData};

/// Cached solid mesh, rebuilt when the profile version or mesh color changes.
///
/// A failed rebuild keeps the previous mesh; the error is kept for the
/// status bar until the next successful build.
pub struct MeshCache {
    mesh: Option<MeshData>,
    aabb: Option<Aabb>,
    last_error: Option<BuildError>,
    version: u64,
    color: [f32; 3],
    rebuild_count: u64,
}

impl Default for MeshCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshCache {
    pub fn new() -> Self {
        Self {
            mesh: None,
            aabb: None,
            last_error: None,
            version: u64::MAX, // force first rebuild
            color: [0.0; 3],
            rebuild_count: 0,
        }
    }

    /// Check if cache is still valid
    pub fn is_valid(&self, profile_version: u64, color: [f32; 3]) -> bool {
        self.version == profile_version && self.color == color
    }

    /// Rebuild the solid from the profile snapshot
    pub fn rebuild(&mut self, points: &[Point2D], version: u64, color: [f32; 3]) {
        match build_solid(points, color) {
            Ok(mesh) => {
                debug!(
                    version,
                    vertices = mesh.vertex_count(),
                    triangles = mesh.indices.len() / 3,
                    "Rebuilt lathe mesh"
                );
                self.aabb = Some(Aabb::from_mesh(&mesh));
                self.mesh = Some(mesh);
                self.last_error = None;
            }
            Err(e) => {
                warn!(version, "Lathe rebuild failed, keeping previous mesh: {}", e);
                self.last_error = Some(e);
            }
        }
        self.version = version;
        self.color = color;
        self.rebuild_count += 1;
    }

    /// Rebuild only when the version or color moved on. Returns true if rebuilt.
    pub fn ensure(&mut self, points: &[Point2D], version: u64, color: [f32; 3]) -> bool {
        if self.is_valid(version, color) {
            return false;
        }
        self.rebuild(points, version, color);
        true
    }

    /// Forget the cached state so the next `ensure` rebuilds
    pub fn invalidate(&mut self) {
        self.version = u64::MAX;
    }

    pub fn mesh(&self) -> Option<&MeshData> {
        self.mesh.as_ref()
    }

    /// Clone the cached mesh (for passing into PaintCallback)
    pub fn mesh_clone(&self) -> Option<MeshData> {
        self.mesh.clone()
    }

    pub fn aabb(&self) -> Option<&Aabb> {
        self.aabb.as_ref()
    }

    /// Error from the most recent rebuild, if it failed
    pub fn last_error(&self) -> Option<&BuildError> {
        self.last_error.as_ref()
    }

    /// Rebuild counter
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLOR: [f32; 3] = [0.6, 0.6, 0.65];

    #[test]
    fn test_cache_forces_first_rebuild() {
        let cache = MeshCache::new();
        assert!(!cache.is_valid(0, COLOR));
        assert!(cache.mesh().is_none());
    }

    #[test]
    fn test_cache_valid_after_rebuild() {
        let mut cache = MeshCache::new();
        cache.rebuild(&shared::default_profile(), 1, COLOR);
        assert!(cache.is_valid(1, COLOR));
        assert!(!cache.is_valid(2, COLOR));
        assert!(!cache.is_valid(1, [1.0, 0.0, 0.0]));
        assert!(cache.mesh().is_some());
        assert!(cache.aabb().is_some());
    }

    #[test]
    fn test_ensure_skips_when_valid() {
        let mut cache = MeshCache::new();
        let profile = shared::default_profile();
        assert!(cache.ensure(&profile, 0, COLOR));
        assert!(!cache.ensure(&profile, 0, COLOR));
        assert_eq!(cache.rebuild_count(), 1);

        cache.invalidate();
        assert!(cache.ensure(&profile, 0, COLOR));
        assert_eq!(cache.rebuild_count(), 2);
    }

    #[test]
    fn test_failed_rebuild_keeps_previous_mesh() {
        let mut cache = MeshCache::new();
        cache.rebuild(&shared::default_profile(), 1, COLOR);
        let before = cache.mesh_clone().unwrap().vertices;

        cache.rebuild(&[Point2D::new(1.0, 0.0)], 2, COLOR);
        assert_eq!(cache.last_error(), Some(&BuildError::DegenerateProfile(1)));
        assert_eq!(cache.mesh().unwrap().vertices, before);

        cache.rebuild(&shared::default_profile(), 3, COLOR);
        assert!(cache.last_error().is_none());
    }
}
