use egui::Ui;

use crate::i18n::t;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let profile = &state.editor.profile;
        ui.weak(format!("{}: {}", t("status.points"), profile.len()));

        ui.separator();

        match profile.selected_point() {
            Some(p) => {
                let index = profile.selected().unwrap_or_default();
                ui.label(format!(
                    "{} #{index}: ({:.3}, {:.3})",
                    t("status.selected"),
                    p.x,
                    p.y
                ));
            }
            None => {
                ui.weak(t("status.ready"));
            }
        }

        if state.editor.is_dragging() {
            ui.separator();
            ui.colored_label(egui::Color32::YELLOW, t("status.dragging"));
        }

        if let Some(err) = state.mesh_cache.last_error() {
            ui.separator();
            ui.colored_label(
                egui::Color32::from_rgb(255, 120, 100),
                format!("{}: {err}", t("status.build_failed")),
            );
        } else if let Some(msg) = &state.status_message {
            ui.separator();
            ui.weak(msg);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(concat!("lathe v", env!("CARGO_PKG_VERSION")));
        });
    });
}
