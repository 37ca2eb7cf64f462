//! Keyboard shortcut handling

use eframe::egui;

use crate::state::{AppState, EditorEvent, Effects};
use crate::viewport::ViewportPanel;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(
    ctx: &egui::Context,
    state: &mut AppState,
    viewport: &mut ViewportPanel,
) -> Effects {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return Effects::NONE;
    }

    let (delete, escape, frame) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::F) && !i.modifiers.command,
        )
    });

    let mut effects = Effects::NONE;
    if delete {
        effects = state.editor.handle(EditorEvent::DeleteSelected);
    }
    if escape {
        let fx = state.editor.handle(EditorEvent::ClearSelection);
        effects.redraw |= fx.redraw;
    }
    // F: frame the solid
    if frame {
        if let Some(aabb) = state.mesh_cache.aabb() {
            viewport.frame(aabb);
        }
    }
    effects
}
