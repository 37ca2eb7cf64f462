//! Integration tests for profile editing gestures.
//!
//! Drives `TestHarness` through the same events the editing surface emits
//! and checks the profile store afterwards.

use lathe_gui_lib::fixtures::*;
use lathe_gui_lib::harness::TestHarness;
use lathe_gui_lib::state::{DragState, Effects};
use shared::Point2D;

#[test]
fn test_drag_moves_point_and_ends_on_release() {
    let mut h = TestHarness::new();
    assert!(h.drag_point(1, Point2D::new(2.0, 1.5)));

    assert_eq!(h.points()[1], Point2D::new(2.0, 1.5));
    assert_eq!(h.selected(), Some(1));
    assert_eq!(h.editor.drag(), DragState::Idle);
    assert_eq!(h.point_count(), 4);
}

#[test]
fn test_drag_across_axis_clamps_radius() {
    let mut h = TestHarness::new();
    assert!(h.drag_point(2, Point2D::new(-1.0, -0.5)));

    let p = h.points()[2];
    assert_eq!(p.x, 0.0);
    assert!((p.y + 0.5).abs() < 1e-9);
}

#[test]
fn test_drag_outside_surface_is_clamped_to_edge() {
    let mut h = TestHarness::new();
    let from = h.display_of_point(1).unwrap();
    h.press(from);
    h.move_to([10_000.0, -10_000.0]);

    // Right edge of a 400 px surface at 50 px/mm is x = 4, top edge y = 4
    let p = h.points()[1];
    assert!((p.x - 4.0).abs() < 1e-9);
    assert!((p.y - 4.0).abs() < 1e-9);
    assert!(h.editor.is_dragging());

    h.release();
    assert!(!h.editor.is_dragging());
}

#[test]
fn test_move_without_drag_is_ignored() {
    let mut h = TestHarness::new();
    let before = h.points().to_vec();
    assert_eq!(h.move_to([10.0, 10.0]), Effects::NONE);
    assert_eq!(h.points(), before.as_slice());
    assert_eq!(h.version(), 0);
}

#[test]
fn test_press_on_empty_space_inserts_into_nearest_segment() {
    let mut h = TestHarness::new();
    let fx = h.press_model(Point2D::new(2.0, 0.0));

    assert_eq!(fx, Effects::REBUILD);
    assert_eq!(h.point_count(), 5);
    // Nearest segment is (1.5, 1) -> (1.5, -1)
    assert_eq!(h.points()[2], Point2D::new(2.0, 0.0));
    assert_eq!(h.selected(), Some(2));
    assert!(!h.editor.is_dragging());
}

#[test]
fn test_insert_left_of_axis_lands_on_axis() {
    let mut h = TestHarness::new();
    h.press_model(Point2D::new(-1.0, 2.5));
    let index = h.selected().unwrap();
    assert_eq!(h.points()[index].x, 0.0);
}

#[test]
fn test_double_click_deletes_point() {
    let mut h = TestHarness::with_profile(vase_profile()).unwrap();
    let removed = h.points()[3];

    let fx = h.double_click_point(3);
    assert_eq!(fx, Effects::REBUILD);
    assert_eq!(h.point_count(), 7);
    assert!(!h.points().contains(&removed));
    assert_eq!(h.selected(), None);
}

#[test]
fn test_delete_refused_at_minimum_point_count() {
    let mut h = TestHarness::with_profile(cylinder_profile(1.0, 2.0)).unwrap();
    let version = h.version();

    assert_eq!(h.double_click_point(0), Effects::NONE);
    assert_eq!(h.point_count(), 2);
    assert_eq!(h.version(), version);
}

#[test]
fn test_delete_selected_and_escape() {
    let mut h = TestHarness::new();
    h.drag_point(0, Point2D::new(0.5, 2.0));
    assert_eq!(h.selected(), Some(0));

    assert_eq!(h.clear_selection(), Effects::REDRAW);
    assert_eq!(h.selected(), None);
    assert_eq!(h.delete_selected(), Effects::NONE);
    assert_eq!(h.point_count(), 4);

    let pos = h.display_of_point(3).unwrap();
    h.press(pos);
    h.release();
    assert_eq!(h.delete_selected(), Effects::REBUILD);
    assert_eq!(h.point_count(), 3);
}

#[test]
fn test_coordinate_entry_updates_selected_point() {
    let mut h = TestHarness::new();
    let pos = h.display_of_point(2).unwrap();
    h.press(pos);
    h.release();

    assert_eq!(h.set_coordinates(" 2.25 ", "-0.5"), Effects::REBUILD);
    assert_eq!(h.points()[2], Point2D::new(2.25, -0.5));

    // Negative radius is clamped to the axis
    h.set_coordinates("-3", "-0.5");
    assert_eq!(h.points()[2].x, 0.0);
}

#[test]
fn test_invalid_coordinate_entry_is_ignored() {
    let mut h = TestHarness::new();
    let pos = h.display_of_point(1).unwrap();
    h.press(pos);
    h.release();
    let version = h.version();

    for (x, y) in [("abc", "1"), ("1", ""), ("NaN", "1"), ("inf", "0")] {
        assert_eq!(h.set_coordinates(x, y), Effects::NONE, "({x}, {y})");
    }
    assert_eq!(h.version(), version);
    assert_eq!(h.points()[1], Point2D::new(1.5, 1.0));
}

#[test]
fn test_coordinate_entry_without_selection_is_ignored() {
    let mut h = TestHarness::new();
    assert_eq!(h.set_coordinates("1", "1"), Effects::NONE);
    assert_eq!(h.points(), default_profile().as_slice());
}

#[test]
fn test_reset_restores_default_profile() {
    let mut h = TestHarness::with_profile(vase_profile()).unwrap();
    h.reset();
    assert_eq!(h.points(), default_profile().as_slice());
    assert_eq!(h.selected(), None);
}

#[test]
fn test_import_replaces_profile() {
    let mut h = TestHarness::new();
    h.import_json(&profile_json(&vase_profile())).unwrap();
    assert_eq!(h.points(), vase_profile().as_slice());
}

#[test]
fn test_rejected_import_keeps_profile() {
    let mut h = TestHarness::new();
    let version = h.version();

    assert!(h.import_json(r#"[{"x": 1.0, "y": 1.0}]"#).is_err());
    assert!(h.import_json("not json").is_err());
    assert!(h.import_json(r#"[{"x": 1.0}, {"x": 2.0}]"#).is_err());

    assert_eq!(h.points(), default_profile().as_slice());
    assert_eq!(h.version(), version);
}

#[test]
fn test_export_then_import_in_fresh_harness() {
    let mut a = TestHarness::new();
    a.drag_point(1, Point2D::new(2.5, 0.5));
    let json = a.export_json().unwrap();

    let mut b = TestHarness::new();
    b.import_json(&json).unwrap();
    assert_eq!(a.points(), b.points());
}

/// Deterministic pseudo-random source (64-bit LCG)
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }

    /// Uniform in `[lo, hi)`
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (self.next() as f64 / (1u64 << 31) as f64) * (hi - lo)
    }
}

fn assert_profile_invariants(h: &TestHarness, step: usize) {
    let len = h.point_count();
    assert!(len >= 2, "step {step}: {len} points");
    if let Some(i) = h.selected() {
        assert!(i < len, "step {step}: selection {i} of {len}");
    }
    if let DragState::Dragging(i) = h.editor.drag() {
        assert!(i < len, "step {step}: dragging {i} of {len}");
    }
    for (i, p) in h.points().iter().enumerate() {
        assert!(p.x >= 0.0, "step {step}: point {i} has radius {}", p.x);
        assert!(p.x.is_finite() && p.y.is_finite(), "step {step}: point {i}");
    }
}

#[test]
fn test_random_gesture_sequences_keep_invariants() {
    for seed in 0..200u64 {
        let mut rng = Lcg(seed.wrapping_mul(0x9e37_79b9_7f4a_7c15) ^ 0xdead_beef);
        let mut h = TestHarness::new();

        for step in 0..300 {
            // Surface is 400 x 400; positions may fall outside it
            let pos = [rng.range(-60.0, 460.0), rng.range(-60.0, 460.0)];
            let target = rng.below(h.point_count() as u64) as usize;

            match rng.below(10) {
                0 | 1 => {
                    h.press(pos);
                }
                2 => {
                    if let Some(p) = h.display_of_point(target) {
                        h.press(p);
                    }
                }
                3 | 4 => {
                    h.move_to(pos);
                }
                5 => {
                    h.release();
                }
                6 => {
                    if let Some(p) = h.display_of_point(target) {
                        h.double_click(p);
                    } else {
                        h.double_click(pos);
                    }
                }
                7 => {
                    h.delete_selected();
                }
                8 => {
                    let x = format!("{:.3}", rng.range(-5.0, 5.0));
                    let y = match rng.below(4) {
                        0 => "bad".to_string(),
                        _ => format!("{:.3}", rng.range(-4.0, 4.0)),
                    };
                    h.set_coordinates(&x, &y);
                }
                _ => {
                    h.clear_selection();
                }
            }

            assert_profile_invariants(&h, step);
        }

        // Whatever the edits, the profile still revolves into a valid solid
        h.build();
        if let Some(v) = h.validate_mesh() {
            assert!(v.validate_all().is_empty(), "seed {seed}");
        }
    }
}
