//! Point-editing engine: gesture events applied to the profile store.
//!
//! Every gesture on the 2D surface becomes an [`EditorEvent`]; feeding it to
//! [`EditorState::handle`] mutates the store synchronously and reports what
//! the shell has to refresh. Dragging is an explicit [`DragState`], so a drag
//! ends exactly when a release event arrives, wherever the pointer is.

use shared::{DisplayPrefs, ImportError, Point2D, ProfileSnapshot};

use super::profile::{ProfileError, ProfileStore};
use crate::sketch::{hit_test, insertion_index, CoordinateTransform};

/// Default editing surface size in pixels (used until the UI reports its own)
pub const DEFAULT_SURFACE_SIZE: [f64; 2] = [400.0, 400.0];

/// Pointer drag state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Dragging the point at this index
    Dragging(usize),
}

/// A user gesture, in display coordinates of the editing surface
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Primary button pressed on the surface
    PointerPressed([f64; 2]),
    /// Pointer moved (may be outside the surface while dragging)
    PointerMoved([f64; 2]),
    /// Primary button released anywhere
    PointerReleased,
    /// Double click on the surface
    DoubleClicked([f64; 2]),
    /// Text committed in the coordinate fields of the selected point
    CoordinatesEntered { x: String, y: String },
    /// Delete key on the selected point
    DeleteSelected,
    /// Escape
    ClearSelection,
}

/// What the shell must refresh after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Effects {
    /// 2D canvas / panels changed
    pub redraw: bool,
    /// Profile geometry changed: rebuild the solid and snapshot
    pub rebuild: bool,
}

impl Effects {
    pub const NONE: Effects = Effects {
        redraw: false,
        rebuild: false,
    };
    pub const REDRAW: Effects = Effects {
        redraw: true,
        rebuild: false,
    };
    pub const REBUILD: Effects = Effects {
        redraw: true,
        rebuild: true,
    };
}

/// Editor state owned by the application shell (or a headless harness)
#[derive(Debug, Clone)]
pub struct EditorState {
    pub profile: ProfileStore,
    pub prefs: DisplayPrefs,
    drag: DragState,
    transform: CoordinateTransform,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            profile: ProfileStore::default(),
            prefs: DisplayPrefs::default(),
            drag: DragState::Idle,
            transform: CoordinateTransform::new(
                DEFAULT_SURFACE_SIZE[0],
                DEFAULT_SURFACE_SIZE[1],
            ),
        }
    }
}

impl EditorState {
    /// Restore from a snapshot (autosave)
    pub fn from_snapshot(snapshot: ProfileSnapshot) -> Result<Self, ProfileError> {
        Ok(Self {
            profile: ProfileStore::from_points(
                snapshot
                    .points
                    .into_iter()
                    .map(Point2D::with_non_negative_x)
                    .collect(),
            )?,
            prefs: snapshot.prefs,
            ..Self::default()
        })
    }

    /// Serializable snapshot of the profile and display flags
    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            points: self.profile.snapshot(),
            prefs: self.prefs,
        }
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }

    pub fn transform(&self) -> &CoordinateTransform {
        &self.transform
    }

    /// Update the editing surface size (pixels); keeps the default scale
    pub fn set_surface_size(&mut self, width: f64, height: f64) {
        if width != self.transform.width() || height != self.transform.height() {
            self.transform = CoordinateTransform::with_scale(width, height, self.transform.scale());
        }
    }

    /// Apply one gesture and report what needs refreshing
    pub fn handle(&mut self, event: EditorEvent) -> Effects {
        let effects = match event {
            EditorEvent::PointerPressed(pos) => self.press(pos),
            EditorEvent::PointerMoved(pos) => self.drag_to(pos),
            EditorEvent::PointerReleased => self.release(),
            EditorEvent::DoubleClicked(pos) => self.delete_at(pos),
            EditorEvent::CoordinatesEntered { x, y } => self.edit_selected(&x, &y),
            EditorEvent::DeleteSelected => self.delete_selected(),
            EditorEvent::ClearSelection => {
                self.drag = DragState::Idle;
                if self.profile.selected().is_some() {
                    self.profile.select(None);
                    Effects::REDRAW
                } else {
                    Effects::NONE
                }
            }
        };

        self.profile.validate_selection();
        if let DragState::Dragging(i) = self.drag {
            if i >= self.profile.len() {
                self.drag = DragState::Idle;
            }
        }
        effects
    }

    /// Reset to the default profile
    pub fn reset(&mut self) {
        self.drag = DragState::Idle;
        if let Err(e) = self.profile.replace(shared::default_profile()) {
            tracing::warn!("Profile reset refused: {e}");
            return;
        }
        tracing::info!("Profile reset to default");
    }

    /// Replace the profile from exchange-format JSON. Negative radii are
    /// clamped to the axis. On error the current profile is left untouched.
    pub fn import_json(&mut self, json: &str) -> Result<(), ImportError> {
        let points: Vec<Point2D> = shared::parse_profile_json(json)?
            .into_iter()
            .map(Point2D::with_non_negative_x)
            .collect();
        let count = points.len();
        self.profile
            .replace(points)
            .map_err(|_| ImportError::TooFewPoints(count))?;
        self.drag = DragState::Idle;
        tracing::info!("Imported profile with {count} points");
        Ok(())
    }

    /// Current profile in exchange-format JSON
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        shared::profile_to_json(self.profile.points())
    }

    // ── Gestures ──────────────────────────────────────────────

    fn press(&mut self, pos: [f64; 2]) -> Effects {
        if let Some(index) = hit_test(self.profile.points(), &self.transform, pos) {
            self.profile.select(Some(index));
            self.drag = DragState::Dragging(index);
            return Effects::REDRAW;
        }

        let point = self.transform.to_model(pos).with_non_negative_x();
        let index = insertion_index(self.profile.points(), &point);
        match self.profile.insert_point(index, point) {
            Ok(()) => {
                self.profile.select(Some(index));
                tracing::debug!("Inserted point {index} at ({:.3}, {:.3})", point.x, point.y);
                Effects::REBUILD
            }
            Err(e) => {
                tracing::warn!("Point insertion refused: {e}");
                Effects::NONE
            }
        }
    }

    fn drag_to(&mut self, pos: [f64; 2]) -> Effects {
        let DragState::Dragging(index) = self.drag else {
            return Effects::NONE;
        };
        let clamped = self.transform.clamp_to_surface(pos);
        let point = self.transform.to_model(clamped).with_non_negative_x();
        match self.profile.set_point(index, point) {
            Ok(()) => Effects::REBUILD,
            Err(_) => {
                self.drag = DragState::Idle;
                Effects::NONE
            }
        }
    }

    fn release(&mut self) -> Effects {
        self.drag = DragState::Idle;
        Effects::NONE
    }

    fn delete_at(&mut self, pos: [f64; 2]) -> Effects {
        match hit_test(self.profile.points(), &self.transform, pos) {
            Some(index) => self.delete_index(index),
            None => Effects::NONE,
        }
    }

    fn delete_selected(&mut self) -> Effects {
        match self.profile.selected() {
            Some(index) => self.delete_index(index),
            None => Effects::NONE,
        }
    }

    fn delete_index(&mut self, index: usize) -> Effects {
        match self.profile.remove_point(index) {
            Ok(_) => {
                self.profile.select(None);
                self.drag = DragState::Idle;
                Effects::REBUILD
            }
            Err(e) => {
                tracing::debug!("Delete of point {index} ignored: {e}");
                Effects::NONE
            }
        }
    }

    fn edit_selected(&mut self, x: &str, y: &str) -> Effects {
        let Some(index) = self.profile.selected() else {
            return Effects::NONE;
        };
        let (Some(x), Some(y)) = (parse_coordinate(x), parse_coordinate(y)) else {
            return Effects::NONE;
        };
        let point = Point2D::new(x, y).with_non_negative_x();
        match self.profile.set_point(index, point) {
            Ok(()) => Effects::REBUILD,
            Err(_) => Effects::NONE,
        }
    }
}

/// Parse a coordinate field; blank, malformed and non-finite input yield `None`
pub fn parse_coordinate(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> EditorState {
        EditorState::default()
    }

    fn display_of(state: &EditorState, index: usize) -> [f64; 2] {
        state.transform().to_display(&state.profile.points()[index])
    }

    #[test]
    fn test_press_on_point_starts_drag() {
        let mut s = editor();
        let pos = display_of(&s, 1);
        let fx = s.handle(EditorEvent::PointerPressed(pos));
        assert_eq!(fx, Effects::REDRAW);
        assert_eq!(s.drag(), DragState::Dragging(1));
        assert_eq!(s.profile.selected(), Some(1));
        assert_eq!(s.profile.version(), 0);
    }

    #[test]
    fn test_press_on_empty_space_inserts() {
        let mut s = editor();
        // Model (1.6, 0) is closest to the segment between points 1 and 2
        let pos = s.transform().to_display(&Point2D::new(1.6, 0.0));
        let fx = s.handle(EditorEvent::PointerPressed(pos));
        assert_eq!(fx, Effects::REBUILD);
        assert_eq!(s.profile.len(), 5);
        assert_eq!(s.profile.selected(), Some(2));
        assert_eq!(s.drag(), DragState::Idle);
        let p = s.profile.points()[2];
        assert!((p.x - 1.6).abs() < 1e-9 && p.y.abs() < 1e-9);
    }

    #[test]
    fn test_insert_left_of_axis_clamps_radius() {
        let mut s = editor();
        let pos = s.transform().to_display(&Point2D::new(-1.0, 0.0));
        s.handle(EditorEvent::PointerPressed(pos));
        let sel = s.profile.selected().unwrap();
        assert_eq!(s.profile.points()[sel].x, 0.0);
    }

    #[test]
    fn test_drag_updates_point_and_clamps() {
        let mut s = editor();
        let pos = display_of(&s, 0);
        s.handle(EditorEvent::PointerPressed(pos));

        let target = s.transform().to_display(&Point2D::new(2.0, 3.0));
        let fx = s.handle(EditorEvent::PointerMoved(target));
        assert_eq!(fx, Effects::REBUILD);
        let p = s.profile.points()[0];
        assert!((p.x - 2.0).abs() < 1e-9 && (p.y - 3.0).abs() < 1e-9);

        // Far left and above the surface: x clamps to 0, y to the top edge
        s.handle(EditorEvent::PointerMoved([-500.0, -500.0]));
        let p = s.profile.points()[0];
        assert_eq!(p.x, 0.0);
        assert!((p.y - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_move_without_drag_is_noop() {
        let mut s = editor();
        let fx = s.handle(EditorEvent::PointerMoved([10.0, 10.0]));
        assert_eq!(fx, Effects::NONE);
        assert_eq!(s.profile.version(), 0);
    }

    #[test]
    fn test_release_ends_drag() {
        let mut s = editor();
        let pos = display_of(&s, 2);
        s.handle(EditorEvent::PointerPressed(pos));
        s.handle(EditorEvent::PointerReleased);
        assert_eq!(s.drag(), DragState::Idle);

        let before = s.profile.snapshot();
        s.handle(EditorEvent::PointerMoved([0.0, 0.0]));
        assert_eq!(s.profile.snapshot(), before);
    }

    #[test]
    fn test_double_click_deletes_until_floor() {
        let mut s = editor();
        s.handle(EditorEvent::DoubleClicked(display_of(&s, 0)));
        assert_eq!(s.profile.len(), 3);
        s.handle(EditorEvent::DoubleClicked(display_of(&s, 0)));
        assert_eq!(s.profile.len(), 2);

        let fx = s.handle(EditorEvent::DoubleClicked(display_of(&s, 0)));
        assert_eq!(fx, Effects::NONE);
        assert_eq!(s.profile.len(), 2);
    }

    #[test]
    fn test_double_click_clears_selection() {
        let mut s = editor();
        s.profile.select(Some(3));
        s.handle(EditorEvent::DoubleClicked(display_of(&s, 1)));
        assert_eq!(s.profile.selected(), None);
    }

    #[test]
    fn test_double_click_on_empty_space_is_noop() {
        let mut s = editor();
        let fx = s.handle(EditorEvent::DoubleClicked([5.0, 5.0]));
        assert_eq!(fx, Effects::NONE);
        assert_eq!(s.profile.len(), 4);
    }

    #[test]
    fn test_coordinate_edit() {
        let mut s = editor();
        s.profile.select(Some(1));
        let fx = s.handle(EditorEvent::CoordinatesEntered {
            x: " -2.5 ".into(),
            y: "0.75".into(),
        });
        assert_eq!(fx, Effects::REBUILD);
        assert_eq!(s.profile.points()[1], Point2D::new(0.0, 0.75));
    }

    #[test]
    fn test_coordinate_edit_parse_failure_ignored() {
        let mut s = editor();
        s.profile.select(Some(1));
        let before = s.profile.snapshot();
        for (x, y) in [("abc", "1"), ("1", ""), ("NaN", "1"), ("1", "inf")] {
            let fx = s.handle(EditorEvent::CoordinatesEntered {
                x: x.into(),
                y: y.into(),
            });
            assert_eq!(fx, Effects::NONE);
        }
        assert_eq!(s.profile.snapshot(), before);
    }

    #[test]
    fn test_coordinate_edit_without_selection_ignored() {
        let mut s = editor();
        let fx = s.handle(EditorEvent::CoordinatesEntered {
            x: "1".into(),
            y: "1".into(),
        });
        assert_eq!(fx, Effects::NONE);
    }

    #[test]
    fn test_delete_selected_and_clear_selection() {
        let mut s = editor();
        s.profile.select(Some(2));
        assert_eq!(s.handle(EditorEvent::DeleteSelected), Effects::REBUILD);
        assert_eq!(s.profile.len(), 3);
        assert_eq!(s.profile.selected(), None);

        s.profile.select(Some(0));
        assert_eq!(s.handle(EditorEvent::ClearSelection), Effects::REDRAW);
        assert_eq!(s.profile.selected(), None);
    }

    #[test]
    fn test_import_rejected_keeps_profile() {
        let mut s = editor();
        let before = s.profile.snapshot();
        assert!(s.import_json(r#"[{"x":1,"y":"bad"}]"#).is_err());
        assert_eq!(s.profile.snapshot(), before);
    }

    #[test]
    fn test_import_and_export() {
        let mut s = editor();
        s.import_json(r#"[{"x":0,"y":3},{"x":1,"y":3},{"x":1,"y":-3}]"#)
            .unwrap();
        assert_eq!(s.profile.len(), 3);
        let json = s.export_json().unwrap();
        assert_eq!(shared::parse_profile_json(&json).unwrap(), s.profile.snapshot());
    }

    #[test]
    fn test_import_clamps_negative_radius() {
        let mut s = editor();
        s.import_json(r#"[{"x":-3,"y":1},{"x":1,"y":0},{"x":-0.5,"y":-1}]"#)
            .unwrap();
        assert_eq!(
            s.profile.snapshot(),
            vec![
                Point2D::new(0.0, 1.0),
                Point2D::new(1.0, 0.0),
                Point2D::new(0.0, -1.0),
            ]
        );
    }

    #[test]
    fn test_snapshot_restore_clamps_negative_radius() {
        let snapshot = ProfileSnapshot {
            points: vec![Point2D::new(-2.0, 1.0), Point2D::new(1.0, -1.0)],
            prefs: DisplayPrefs::default(),
        };
        let s = EditorState::from_snapshot(snapshot).unwrap();
        assert_eq!(s.profile.points()[0], Point2D::new(0.0, 1.0));
    }

    #[test]
    fn test_reset_after_edits() {
        let mut s = editor();
        s.handle(EditorEvent::PointerPressed([300.0, 200.0]));
        s.reset();
        assert_eq!(s.profile.snapshot(), shared::default_profile());
        assert_eq!(s.drag(), DragState::Idle);
        assert_eq!(s.profile.selected(), None);
    }

    #[test]
    fn test_surface_resize_keeps_scale() {
        let mut s = editor();
        s.set_surface_size(600.0, 300.0);
        assert_eq!(s.transform().scale(), crate::sketch::DEFAULT_SCALE);
        assert_eq!(s.transform().origin(), [300.0, 150.0]);
    }
}
