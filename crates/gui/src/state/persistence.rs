//! Autosave/load functionality

use std::path::{Path, PathBuf};

use shared::ProfileSnapshot;
use tracing::{info, warn};

use super::editor::EditorState;

impl EditorState {
    /// Get autosave file path
    pub fn autosave_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "lathe", "lathe")
            .map(|dirs| dirs.data_dir().join("autosave.json"))
    }

    /// Save the profile snapshot to the autosave file
    pub fn autosave(&self) {
        if let Some(path) = Self::autosave_path() {
            if let Err(e) = self.save_snapshot_to(&path) {
                warn!("Autosave to {} failed: {}", path.display(), e);
            }
        }
    }

    /// Write the snapshot as JSON, creating parent directories
    pub fn save_snapshot_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = self.snapshot().to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Load the snapshot from the autosave file
    pub fn load_autosave() -> Option<ProfileSnapshot> {
        Self::load_snapshot_from(&Self::autosave_path()?)
    }

    /// Read a snapshot; missing or corrupt files yield `None`
    pub fn load_snapshot_from(path: &Path) -> Option<ProfileSnapshot> {
        let json = std::fs::read_to_string(path).ok()?;
        match ProfileSnapshot::from_json(&json) {
            Ok(snapshot) => {
                info!(points = snapshot.points.len(), "Restored autosaved profile");
                Some(snapshot)
            }
            Err(e) => {
                warn!("Ignoring corrupt autosave {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Editor seeded from the autosave, or the default profile
    pub fn restore_or_default() -> Self {
        Self::load_autosave()
            .and_then(|snapshot| Self::from_snapshot(snapshot).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Point2D;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("lathe-gui-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_snapshot_file_round_trip() {
        let path = temp_file("round_trip.json");
        let mut editor = EditorState::default();
        editor
            .profile
            .set_point(1, Point2D::new(2.25, 1.0))
            .unwrap();
        editor.prefs.show_grid = false;
        editor.save_snapshot_to(&path).unwrap();

        let snapshot = EditorState::load_snapshot_from(&path).unwrap();
        assert_eq!(snapshot.points, editor.profile.points());
        assert!(!snapshot.prefs.show_grid);
        assert!(snapshot.prefs.show_axes);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_autosave() {
        assert!(EditorState::load_snapshot_from(&temp_file("missing.json")).is_none());
    }

    #[test]
    fn test_corrupt_autosave() {
        let path = temp_file("corrupt.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{\"points\": [").unwrap();
        assert!(EditorState::load_snapshot_from(&path).is_none());

        std::fs::write(&path, r#"{"points":[{"x":1.0,"y":0.0}]}"#).unwrap();
        assert!(EditorState::load_snapshot_from(&path).is_none());
        let _ = std::fs::remove_file(&path);
    }
}
