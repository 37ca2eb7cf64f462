//! Headless test harness for programmatic profile editing.
//!
//! Drives the same `EditorState` and `MeshCache` the application uses,
//! without a window or GL context.

use shared::{ImportError, Point2D};

use crate::build::{build_revolution_profile, BuildError, MeshCache};
use crate::export::{build_stl, StlFormat};
use crate::state::editor::{DragState, EditorEvent, EditorState, Effects};
use crate::validation::MeshValidator;
use crate::viewport::mesh::MeshData;

/// Solid color used by headless builds
pub const HARNESS_MESH_COLOR: [f32; 3] = [0.67, 0.69, 0.73];

/// Headless test harness: editor state plus build cache
pub struct TestHarness {
    pub editor: EditorState,
    cache: MeshCache,
}

impl TestHarness {
    /// Create a harness seeded with the default profile.
    pub fn new() -> Self {
        Self {
            editor: EditorState::default(),
            cache: MeshCache::new(),
        }
    }

    /// Create a harness seeded with the given points
    pub fn with_profile(points: Vec<Point2D>) -> Result<Self, crate::state::ProfileError> {
        let mut h = Self::new();
        h.editor.profile.replace(points)?;
        Ok(h)
    }

    // ── Gestures (display coordinates) ────────────────────────

    pub fn handle(&mut self, event: EditorEvent) -> Effects {
        self.editor.handle(event)
    }

    pub fn press(&mut self, pos: [f64; 2]) -> Effects {
        self.handle(EditorEvent::PointerPressed(pos))
    }

    pub fn move_to(&mut self, pos: [f64; 2]) -> Effects {
        self.handle(EditorEvent::PointerMoved(pos))
    }

    pub fn release(&mut self) -> Effects {
        self.handle(EditorEvent::PointerReleased)
    }

    pub fn double_click(&mut self, pos: [f64; 2]) -> Effects {
        self.handle(EditorEvent::DoubleClicked(pos))
    }

    pub fn set_coordinates(&mut self, x: &str, y: &str) -> Effects {
        self.handle(EditorEvent::CoordinatesEntered {
            x: x.to_string(),
            y: y.to_string(),
        })
    }

    pub fn delete_selected(&mut self) -> Effects {
        self.handle(EditorEvent::DeleteSelected)
    }

    pub fn clear_selection(&mut self) -> Effects {
        self.handle(EditorEvent::ClearSelection)
    }

    // ── Gestures (model coordinates) ──────────────────────────

    /// Display position of a model point on the current surface
    pub fn display_of(&self, p: &Point2D) -> [f64; 2] {
        self.editor.transform().to_display(p)
    }

    /// Display position of profile point `index`
    pub fn display_of_point(&self, index: usize) -> Option<[f64; 2]> {
        self.editor
            .profile
            .point(index)
            .map(|p| self.display_of(p))
    }

    /// Press at a model position (inserts or grabs)
    pub fn press_model(&mut self, p: Point2D) -> Effects {
        let pos = self.display_of(&p);
        self.press(pos)
    }

    /// Full press-move-release gesture moving point `index` to `to`
    pub fn drag_point(&mut self, index: usize, to: Point2D) -> bool {
        let Some(from) = self.display_of_point(index) else {
            return false;
        };
        self.press(from);
        let grabbed = self.editor.drag() == DragState::Dragging(index);
        if grabbed {
            let target = self.display_of(&to);
            self.move_to(target);
        }
        self.release();
        grabbed
    }

    /// Double click on profile point `index`
    pub fn double_click_point(&mut self, index: usize) -> Effects {
        match self.display_of_point(index) {
            Some(pos) => self.double_click(pos),
            None => Effects::NONE,
        }
    }

    // ── Profile file operations ───────────────────────────────

    pub fn reset(&mut self) {
        self.editor.reset();
    }

    pub fn import_json(&mut self, json: &str) -> Result<(), ImportError> {
        self.editor.import_json(json)
    }

    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        self.editor.export_json()
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn points(&self) -> &[Point2D] {
        self.editor.profile.points()
    }

    pub fn point_count(&self) -> usize {
        self.editor.profile.len()
    }

    pub fn selected(&self) -> Option<usize> {
        self.editor.profile.selected()
    }

    pub fn version(&self) -> u64 {
        self.editor.profile.version()
    }

    // ── Build + inspection ────────────────────────────────────

    /// Closed revolution profile for the current points
    pub fn revolution_profile(&self) -> Result<Vec<Point2D>, BuildError> {
        build_revolution_profile(self.points())
    }

    /// Bring the solid up to date. Returns true if a rebuild ran.
    pub fn build(&mut self) -> bool {
        self.cache.ensure(
            self.editor.profile.points(),
            self.editor.profile.version(),
            HARNESS_MESH_COLOR,
        )
    }

    pub fn mesh(&self) -> Option<&MeshData> {
        self.cache.mesh()
    }

    /// Create a validator for the built mesh
    pub fn validate_mesh(&self) -> Option<MeshValidator<'_>> {
        self.cache.mesh().map(MeshValidator::new)
    }

    pub fn last_error(&self) -> Option<&BuildError> {
        self.cache.last_error()
    }

    pub fn rebuild_count(&self) -> u64 {
        self.cache.rebuild_count()
    }

    /// Build (if needed) and serialize the solid as STL
    pub fn export_stl(&mut self, format: StlFormat) -> Option<Vec<u8>> {
        self.build();
        self.mesh().map(|mesh| build_stl(mesh, format))
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_harness_default_profile() {
        let h = TestHarness::new();
        assert_eq!(h.point_count(), 4);
        assert_eq!(h.selected(), None);
        assert!(h.mesh().is_none());
    }

    #[test]
    fn test_with_profile_rejects_short() {
        assert!(TestHarness::with_profile(vec![Point2D::new(1.0, 1.0)]).is_err());
    }

    #[test]
    fn test_drag_point() {
        let mut h = TestHarness::new();
        assert!(h.drag_point(1, Point2D::new(2.0, 1.5)));
        let p = h.points()[1];
        assert!((p.x - 2.0).abs() < 1e-9 && (p.y - 1.5).abs() < 1e-9);
        assert_eq!(h.editor.drag(), DragState::Idle);
    }

    #[test]
    fn test_build_and_mesh() {
        let mut h = TestHarness::new();
        assert!(h.build());
        assert!(!h.build());
        let v = h.validate_mesh().unwrap();
        assert!(v.vertex_count() > 0);
        assert!(v.triangle_count() > 0);
    }

    #[test]
    fn test_export_stl_builds_latest() {
        let mut h = TestHarness::new();
        h.build();
        h.press_model(Point2D::new(1.6, 0.0));
        let stl = h.export_stl(StlFormat::Binary).unwrap();
        let tris = h.mesh().unwrap().triangle_count();
        assert_eq!(stl.len(), 84 + tris * 50);
        assert_eq!(h.rebuild_count(), 2);
    }
}
