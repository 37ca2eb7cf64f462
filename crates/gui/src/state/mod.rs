pub mod editor;
mod persistence;
pub mod profile;
pub mod settings;

pub use editor::{parse_coordinate, DragState, EditorEvent, EditorState, Effects};
pub use profile::{ProfileError, ProfileStore};
pub use settings::AppSettings;

use crate::build::MeshCache;

/// Panel visibility flags
pub struct PanelVisibility {
    pub properties: bool,
    pub status_bar: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            properties: true,
            status_bar: true,
        }
    }
}

/// Combined application state
pub struct AppState {
    pub editor: EditorState,
    pub mesh_cache: MeshCache,
    pub panels: PanelVisibility,
    pub settings: AppSettings,
    /// Show settings window
    pub show_settings_window: bool,
    /// Last user-facing message (import errors, export results)
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            editor: EditorState::restore_or_default(),
            mesh_cache: MeshCache::new(),
            panels: PanelVisibility::default(),
            settings: AppSettings::load(),
            show_settings_window: false,
            status_message: None,
        }
    }
}

impl AppState {
    /// Bring the cached solid up to date with the profile and mesh color
    pub fn refresh_mesh(&mut self) -> bool {
        self.mesh_cache.ensure(
            self.editor.profile.points(),
            self.editor.profile.version(),
            self.settings.viewport.mesh_color_f32(),
        )
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
