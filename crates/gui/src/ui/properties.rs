//! Properties panel: selected point coordinates, point list, solid info

use egui::Ui;

use crate::i18n::t;
use crate::state::{AppState, EditorEvent, Effects};

/// Text of the coordinate fields, kept in egui memory between frames
#[derive(Clone, Default)]
struct CoordDraft {
    index: Option<usize>,
    version: u64,
    x: String,
    y: String,
}

pub fn show(ui: &mut Ui, state: &mut AppState) -> Effects {
    ui.heading(t("prop.title"));
    ui.separator();

    let mut effects = show_selected_point(ui, state);

    ui.add_space(8.0);
    egui::CollapsingHeader::new(t("prop.points"))
        .id_salt("profile_points")
        .default_open(true)
        .show(ui, |ui| {
            if show_point_list(ui, state) {
                effects.redraw = true;
            }
        });

    ui.add_space(8.0);
    egui::CollapsingHeader::new(t("prop.solid"))
        .id_salt("solid_info")
        .default_open(true)
        .show(ui, |ui| show_solid_info(ui, state));

    effects
}

fn show_selected_point(ui: &mut Ui, state: &mut AppState) -> Effects {
    let profile = &state.editor.profile;
    let (Some(index), Some(point)) = (profile.selected(), profile.selected_point().copied()) else {
        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            ui.weak(t("prop.select_point"));
            ui.weak(t("prop.click_hint"));
        });
        return Effects::NONE;
    };
    let version = profile.version();

    let draft_id = ui.id().with("coord_draft");
    let mut draft: CoordDraft = ui.data_mut(|d| d.get_temp(draft_id)).unwrap_or_default();

    let mut commit = false;
    let mut editing = false;
    ui.strong(format!("{} #{index}", t("prop.point")));
    egui::Grid::new("point_coords")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            // Re-sync from the store unless the user is typing
            let resync = draft.index != Some(index) || draft.version != version;

            ui.label(format!("{} (X):", t("prop.radius")));
            let rx = ui.text_edit_singleline(&mut draft.x);
            ui.end_row();

            ui.label(format!("{} (Y):", t("prop.height")));
            let ry = ui.text_edit_singleline(&mut draft.y);
            ui.end_row();

            editing = rx.has_focus() || ry.has_focus();
            let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
            commit = (rx.lost_focus() || ry.lost_focus()) && enter;

            if resync && !editing {
                draft.index = Some(index);
                draft.version = version;
                draft.x = format!("{:.3}", point.x);
                draft.y = format!("{:.3}", point.y);
            }
        });

    if ui.button(t("prop.apply")).clicked() {
        commit = true;
    }

    let mut effects = Effects::NONE;
    if commit {
        effects = state.editor.handle(EditorEvent::CoordinatesEntered {
            x: draft.x.clone(),
            y: draft.y.clone(),
        });
        // Show the stored (possibly clamped) value, or revert rejected text
        draft.index = None;
    }

    ui.horizontal(|ui| {
        let can_delete = state.editor.profile.len() > shared::MIN_PROFILE_POINTS;
        if ui
            .add_enabled(can_delete, egui::Button::new(t("prop.delete_point")))
            .clicked()
        {
            let fx = state.editor.handle(EditorEvent::DeleteSelected);
            effects.redraw |= fx.redraw;
            effects.rebuild |= fx.rebuild;
        }
        if ui.button(t("prop.deselect")).clicked() {
            let fx = state.editor.handle(EditorEvent::ClearSelection);
            effects.redraw |= fx.redraw;
        }
    });

    ui.data_mut(|d| d.insert_temp(draft_id, draft));
    effects
}

/// Returns true if the selection changed
fn show_point_list(ui: &mut Ui, state: &mut AppState) -> bool {
    let selected = state.editor.profile.selected();
    let mut clicked = None;

    egui::ScrollArea::vertical()
        .id_salt("point_list")
        .max_height(220.0)
        .show(ui, |ui| {
            for (i, p) in state.editor.profile.points().iter().enumerate() {
                let label = format!("{i:>2}  ({:>7.3}, {:>7.3})", p.x, p.y);
                let text = egui::RichText::new(label).monospace();
                if ui.selectable_label(selected == Some(i), text).clicked() {
                    clicked = Some(i);
                }
            }
        });

    match clicked {
        Some(i) => state.editor.profile.select(Some(i)),
        None => false,
    }
}

fn show_solid_info(ui: &mut Ui, state: &AppState) {
    let Some(mesh) = state.mesh_cache.mesh() else {
        ui.weak(t("prop.no_solid"));
        return;
    };
    egui::Grid::new("solid_props")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label(format!("{}:", t("prop.triangles")));
            ui.label(format!("{}", mesh.triangle_count()));
            ui.end_row();

            if let Some(aabb) = state.mesh_cache.aabb() {
                let size = aabb.size();
                ui.label(format!("{}:", t("prop.diameter")));
                ui.label(format!("{:.3} mm", size.x.max(size.z)));
                ui.end_row();

                ui.label(format!("{}:", t("prop.length")));
                ui.label(format!("{:.3} mm", size.y));
                ui.end_row();
            }

            ui.label(format!("{}:", t("prop.rebuilds")));
            ui.label(format!("{}", state.mesh_cache.rebuild_count()));
            ui.end_row();
        });
}
