mod app;
pub mod i18n;
mod ui;
mod viewport;

// Re-export library modules so that `crate::build`, `crate::state`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use lathe_gui_lib::build;
pub use lathe_gui_lib::export;
pub use lathe_gui_lib::sketch;
pub use lathe_gui_lib::state;

use app::LatheApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lathe_gui=info,lathe_gui_lib=info".into()),
        )
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Lathe Profile Editor")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([720.0, 460.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "lathe-gui",
        native_options,
        Box::new(|cc| Ok(Box::new(LatheApp::new(cc)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}
