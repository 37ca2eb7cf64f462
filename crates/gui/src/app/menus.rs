//! Application menu bar and settings window

use std::path::Path;

use eframe::egui;

use crate::export::{build_stl, StlFormat};
use crate::i18n::{lang, set_lang, t, Lang};
use crate::state::AppState;
use crate::viewport::ViewportPanel;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.file"), |ui| {
        if ui.button(t("menu.new")).clicked() {
            state.editor.reset();
            state.set_status(t("status.profile_reset"));
            ui.close_menu();
        }
        ui.separator();
        if ui.button(t("menu.import_profile")).clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title(t("menu.import_title"))
                .add_filter("JSON", &["json"])
                .pick_file()
            {
                import_profile(state, &path);
            }
        }
        if ui.button(t("menu.export_profile")).clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title(t("menu.export_profile_title"))
                .add_filter("JSON", &["json"])
                .set_file_name("profile.json")
                .save_file()
            {
                export_profile(state, &path);
            }
        }
        ui.separator();
        if ui.button(t("menu.export_stl")).clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title(t("menu.export_stl_title"))
                .add_filter("STL", &["stl"])
                .set_file_name("lathe.stl")
                .save_file()
            {
                export_stl(state, &path);
            }
        }
        ui.separator();
        if ui.button(t("menu.quit")).clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn import_profile(state: &mut AppState, path: &Path) {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Failed to read {}: {e}", path.display());
            state.set_status(format!("{}: {e}", t("status.read_failed")));
            return;
        }
    };
    match state.editor.import_json(&json) {
        Ok(()) => {
            tracing::info!("Imported profile from {}", path.display());
            state.set_status(t("status.imported"));
        }
        Err(e) => {
            tracing::warn!("Rejected profile {}: {e}", path.display());
            state.set_status(format!("{}: {e}", t("status.import_rejected")));
        }
    }
}

fn export_profile(state: &mut AppState, path: &Path) {
    let result = state
        .editor
        .export_json()
        .map_err(|e| e.to_string())
        .and_then(|json| std::fs::write(path, json).map_err(|e| e.to_string()));
    match result {
        Ok(()) => {
            tracing::info!("Exported profile to {}", path.display());
            state.set_status(t("status.exported"));
        }
        Err(e) => {
            tracing::error!("Failed to export profile: {e}");
            state.set_status(format!("{}: {e}", t("status.write_failed")));
        }
    }
}

fn export_stl(state: &mut AppState, path: &Path) {
    // Always serialize the solid of the current profile
    state.refresh_mesh();
    let format = state.settings.export.stl_format;
    let Some(bytes) = state.mesh_cache.mesh().map(|mesh| build_stl(mesh, format)) else {
        state.set_status(t("status.no_solid"));
        return;
    };
    match std::fs::write(path, &bytes) {
        Ok(()) => {
            tracing::info!("Exported STL ({} bytes) to {}", bytes.len(), path.display());
            state.set_status(t("status.exported"));
        }
        Err(e) => {
            tracing::error!("Failed to write STL: {e}");
            state.set_status(format!("{}: {e}", t("status.write_failed")));
        }
    }
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState, viewport: &mut ViewportPanel) {
    ui.menu_button(t("menu.view"), |ui| {
        ui.checkbox(&mut state.editor.prefs.show_grid, t("menu.show_grid"));
        ui.checkbox(&mut state.editor.prefs.show_axes, t("menu.show_axes"));
        ui.separator();
        ui.checkbox(&mut state.panels.properties, t("menu.properties"));
        ui.checkbox(&mut state.panels.status_bar, t("menu.status_bar"));
        ui.separator();
        if ui.button(t("menu.reset_camera")).clicked() {
            viewport.reset_camera();
            ui.close_menu();
        }
        if ui.button(t("menu.frame_solid")).clicked() {
            if let Some(aabb) = state.mesh_cache.aabb() {
                viewport.frame(aabb);
            }
            ui.close_menu();
        }
        ui.separator();
        ui.menu_button(t("menu.language"), |ui| {
            if ui.selectable_label(lang() == Lang::Ru, "Русский").clicked() {
                set_lang(Lang::Ru);
                ui.close_menu();
            }
            if ui.selectable_label(lang() == Lang::En, "English").clicked() {
                set_lang(Lang::En);
                ui.close_menu();
            }
        });
    });
}

/// Show the settings menu
pub fn settings_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.settings"), |ui| {
        if ui.button(t("menu.preferences")).clicked() {
            state.show_settings_window = true;
            ui.close_menu();
        }
    });
}

/// Show the settings window
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.show_settings_window;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(true)
        .default_width(380.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_grid_settings(ui, state);
                show_axes_settings(ui, state);
                show_viewport_settings(ui, state);
                show_export_settings(ui, state);
                show_ui_settings(ui, state);
                show_settings_buttons(ui, state);
            });
        });
    state.show_settings_window &= open;
}

fn show_grid_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.grid"));

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.grid.size)
                .speed(0.1)
                .range(0.1..=100.0)
                .suffix(" mm"),
        );
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_range"));
        ui.add(
            egui::DragValue::new(&mut state.settings.grid.range)
                .speed(1)
                .range(1..=50),
        );
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_opacity"));
        ui.add(egui::Slider::new(&mut state.settings.grid.opacity, 0.0..=1.0));
    });
    ui.add_space(10.0);
}

fn show_axes_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.axes"));

    ui.horizontal(|ui| {
        ui.label(t("settings.axes_length"));
        ui.add(
            egui::DragValue::new(&mut state.settings.axes.length)
                .speed(0.1)
                .range(0.1..=20.0),
        );
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.axes_thickness"));
        ui.add(
            egui::DragValue::new(&mut state.settings.axes.thickness)
                .speed(0.1)
                .range(0.5..=5.0),
        );
    });
    ui.add_space(10.0);
}

fn color_row(ui: &mut egui::Ui, label: &str, rgb: &mut [u8; 3]) {
    ui.horizontal(|ui| {
        ui.label(label);
        let mut color = egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
        if ui.color_edit_button_srgba(&mut color).changed() {
            *rgb = [color.r(), color.g(), color.b()];
        }
    });
}

fn show_viewport_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.viewport"));
    color_row(ui, t("settings.bg_color"), &mut state.settings.viewport.background_color);
    color_row(ui, t("settings.mesh_color"), &mut state.settings.viewport.mesh_color);
    ui.add_space(10.0);
}

fn show_export_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.export"));
    ui.horizontal(|ui| {
        ui.label(t("settings.stl_format"));
        let format = &mut state.settings.export.stl_format;
        ui.selectable_value(format, StlFormat::Binary, t("settings.stl_binary"));
        ui.selectable_value(format, StlFormat::Ascii, t("settings.stl_ascii"));
    });
    ui.add_space(10.0);
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.ui"));
    ui.horizontal(|ui| {
        ui.label(t("settings.font_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.ui.font_size)
                .speed(0.5)
                .range(8.0..=24.0)
                .suffix(" pt"),
        );
    });
    ui.add_space(10.0);
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button(t("settings.apply")).clicked() {
            state.settings.save();
        }
        if ui.button(t("settings.reset")).clicked() {
            state.settings = crate::state::AppSettings::default();
        }
        if ui.button(t("settings.close")).clicked() {
            state.show_settings_window = false;
        }
    });
}
