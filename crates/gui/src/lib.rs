// Library crate: exposes testable modules for integration tests and the scripting interface.
// GUI-specific modules (app, ui, viewport rendering) remain in the binary crate.

pub mod build;
pub mod command;
pub mod export;
pub mod fixtures;
pub mod harness;
pub mod sketch;
pub mod state;
pub mod validation;

/// Subset of viewport types needed by build/export (MeshData, Aabb, grid/axes).
/// The full viewport (camera, renderer, GL) stays in the binary crate.
pub mod viewport {
    pub mod mesh;
}
