//! Main application module

mod keyboard;
mod menus;
pub mod styles;

use eframe::egui;
use shared::DisplayPrefs;

use crate::state::{AppState, Effects};
use crate::ui::{profile_canvas, properties, status_bar};
use crate::viewport::ViewportPanel;

/// Main application
pub struct LatheApp {
    state: AppState,
    viewport: ViewportPanel,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
    /// Profile version and display flags at the last autosave
    last_saved_version: u64,
    last_saved_prefs: DisplayPrefs,
}

impl LatheApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = AppState::default();

        // Apply initial styles with font size from settings
        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let mut viewport = ViewportPanel::new();

        // Initialize GL renderer if glow context is available
        match cc.gl.as_ref() {
            Some(gl) => viewport.init_gl(gl),
            None => tracing::warn!("No glow context, 3D preview disabled"),
        }

        let last_font_size = state.settings.ui.font_size;
        let last_saved_version = state.editor.profile.version();
        let last_saved_prefs = state.editor.prefs;

        Self {
            state,
            viewport,
            last_font_size,
            last_saved_version,
            last_saved_prefs,
        }
    }

    fn autosave_if_changed(&mut self) {
        let version = self.state.editor.profile.version();
        let prefs = self.state.editor.prefs;
        if version != self.last_saved_version || prefs != self.last_saved_prefs {
            self.state.editor.autosave();
            self.last_saved_version = version;
            self.last_saved_prefs = prefs;
        }
    }
}

impl eframe::App for LatheApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        let mut effects = keyboard::handle_keyboard(ctx, &mut self.state, &mut self.viewport);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &mut self.state);
                menus::view_menu(ui, &mut self.state, &mut self.viewport);
                menus::settings_menu(ui, &mut self.state);
            });
        });

        // ── Settings window ──────────────────────────────────
        menus::settings_window(ctx, &mut self.state);

        // ── Status bar ───────────────────────────────────────
        if self.state.panels.status_bar {
            egui::TopBottomPanel::bottom("status_bar")
                .exact_height(22.0)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style())
                        .inner_margin(egui::Margin::symmetric(8, 2)),
                )
                .show(ctx, |ui| {
                    status_bar::show(ui, &self.state);
                });
        }

        // ── Right panel: Properties ──────────────────────────
        if self.state.panels.properties {
            egui::SidePanel::right("properties")
                .default_width(260.0)
                .width_range(200.0..=420.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("props_scroll")
                        .show(ui, |ui| {
                            let fx = properties::show(ui, &mut self.state);
                            merge(&mut effects, fx);
                        });
                });
        }

        // ── Left panel: profile editing surface ──────────────
        egui::SidePanel::left("profile_canvas")
            .default_width(440.0)
            .width_range(240.0..=900.0)
            .resizable(true)
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let fx = profile_canvas::show(ui, &mut self.state.editor);
                merge(&mut effects, fx);
            });

        // ── Central panel: 3D preview ────────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state);
            });

        if effects.rebuild {
            self.state.refresh_mesh();
        }
        if effects.redraw {
            ctx.request_repaint();
        }

        self.autosave_if_changed();
    }

    fn on_exit(&mut self, _gl: Option<&glow::Context>) {
        self.state.editor.autosave();
        tracing::info!("Profile saved on exit");
    }
}

fn merge(into: &mut Effects, fx: Effects) {
    into.redraw |= fx.redraw;
    into.rebuild |= fx.rebuild;
}
