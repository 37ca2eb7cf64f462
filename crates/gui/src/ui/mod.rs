pub mod profile_canvas;
pub mod properties;
pub mod status_bar;
