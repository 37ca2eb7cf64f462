//! 3D preview of the solid of revolution, rendered with OpenGL

mod camera;
mod gl_renderer;
pub use lathe_gui_lib::viewport::mesh;

use std::sync::{Arc, Mutex};

use egui::Ui;

use crate::i18n::t;
use crate::state::AppState;
use camera::TurntableCamera;
use gl_renderer::GlRenderer;
use mesh::Aabb;

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    camera: TurntableCamera,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
    /// Why the renderer could not be created (preview degraded)
    gl_error: Option<String>,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            camera: TurntableCamera::new(),
            gl_renderer: None,
            gl_error: None,
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        match GlRenderer::new(gl) {
            Ok(renderer) => {
                self.gl_renderer = Some(Arc::new(Mutex::new(renderer)));
                self.gl_error = None;
            }
            Err(e) => {
                tracing::error!("3D preview unavailable: {e}");
                self.gl_error = Some(e);
            }
        }
    }

    pub fn reset_camera(&mut self) {
        self.camera = TurntableCamera::new();
    }

    /// Aim the camera at the whole solid
    pub fn frame(&mut self, aabb: &Aabb) {
        self.camera.frame(aabb);
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        // ── Camera controls ─────────────────────────────
        if response.dragged_by(egui::PointerButton::Primary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            let delta = response.drag_delta();
            self.camera.rotate(delta.x * 0.5, delta.y * 0.5);
        }
        if response.dragged_by(egui::PointerButton::Secondary) {
            let delta = response.drag_delta();
            self.camera.pan(delta.y * 0.01);
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.camera.zoom(scroll * 0.01);
            }
        }
        if response.double_clicked() {
            if let Some(aabb) = state.mesh_cache.aabb() {
                self.camera.frame(aabb);
            }
        }

        // Solid must match the profile before it is handed to the GPU
        state.refresh_mesh();

        if !ui.is_rect_visible(rect) {
            return;
        }

        self.render_gl(ui, rect, state);
        self.draw_overlays(ui, rect, state);
    }

    fn render_gl(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let Some(gl_renderer) = &self.gl_renderer else {
            self.draw_degraded(ui, rect);
            return;
        };

        let renderer = gl_renderer.clone();
        let camera = self.camera;

        let mesh = state.mesh_cache.mesh_clone();
        let version = state.mesh_cache.rebuild_count();

        let grid_settings = state.settings.grid.clone();
        let axes_settings = state.settings.axes.clone();
        let grid_visible = state.editor.prefs.show_grid;
        let axes_visible = state.editor.prefs.show_axes;
        let bg_color = state.settings.viewport.background_color;

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();

                let clip = info.clip_rect_in_pixels();
                let viewport = [
                    clip.left_px as f32,
                    clip.from_bottom_px as f32,
                    clip.width_px as f32,
                    clip.height_px as f32,
                ];

                if let Ok(mut r) = renderer.lock() {
                    r.update_grid(gl, &grid_settings);
                    r.update_axes(gl, &axes_settings);
                    r.sync_solid(gl, mesh.as_ref(), version);

                    let params = gl_renderer::RenderParams {
                        viewport,
                        grid_visible,
                        axes_visible,
                        axes_thickness: axes_settings.thickness,
                        bg_color,
                    };
                    r.paint(gl, &camera, &params);
                }
            })),
        };

        ui.painter().add(callback);
    }

    fn draw_degraded(&self, ui: &Ui, rect: egui::Rect) {
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(20, 20, 24));
        let detail = self.gl_error.as_deref().unwrap_or_default();
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            format!("{}\n{detail}", t("viewport.unavailable")),
            egui::FontId::proportional(13.0),
            egui::Color32::from_rgb(200, 120, 100),
        );
    }

    fn draw_overlays(&self, ui: &Ui, rect: egui::Rect, state: &AppState) {
        let painter = ui.painter_at(rect);

        if state.editor.prefs.show_axes && self.gl_renderer.is_some() {
            self.draw_axis_labels(&painter, rect, state.settings.axes.length);
        }

        self.draw_camera_info(&painter, rect);

        let hint = match state.mesh_cache.last_error() {
            Some(_) => t("viewport.no_solid"),
            None => t("viewport.nav_hint"),
        };
        painter.text(
            egui::pos2(rect.center().x, rect.bottom() - 20.0),
            egui::Align2::CENTER_BOTTOM,
            hint,
            egui::FontId::proportional(11.0),
            egui::Color32::from_rgb(100, 100, 110),
        );
    }

    fn draw_axis_labels(&self, painter: &egui::Painter, rect: egui::Rect, length: f32) {
        let labels = [
            ([length, 0.0, 0.0], "X", egui::Color32::from_rgb(230, 80, 80)),
            ([0.0, length, 0.0], "Y", egui::Color32::from_rgb(80, 200, 80)),
            ([0.0, 0.0, length], "Z", egui::Color32::from_rgb(80, 120, 230)),
        ];
        for (pos, label, color) in labels {
            if let Some(screen) = self.camera.project(pos, rect) {
                if rect.contains(screen) {
                    painter.text(
                        screen,
                        egui::Align2::LEFT_BOTTOM,
                        label,
                        egui::FontId::proportional(12.0),
                        color,
                    );
                }
            }
        }
    }

    fn draw_camera_info(&self, painter: &egui::Painter, rect: egui::Rect) {
        let overlay_rect = egui::Rect::from_min_size(
            egui::pos2(rect.right() - 140.0, rect.top() + 4.0),
            egui::vec2(136.0, 44.0),
        );
        painter.rect_filled(
            overlay_rect,
            4.0,
            egui::Color32::from_rgba_premultiplied(0, 0, 0, 140),
        );
        painter.text(
            overlay_rect.min + egui::vec2(6.0, 4.0),
            egui::Align2::LEFT_TOP,
            format!(
                "Dist: {:.1}\nYaw: {:.0}  Pitch: {:.0}",
                self.camera.distance(),
                self.camera.yaw().to_degrees(),
                self.camera.pitch().to_degrees(),
            ),
            egui::FontId::monospace(10.0),
            egui::Color32::from_rgb(160, 160, 170),
        );
    }
}
