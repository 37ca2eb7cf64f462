//! JSON command protocol for scripted editing.
//!
//! Each command is one gesture or file operation applied to a
//! [`TestHarness`]; responses carry enough state for assertions.

use serde::{Deserialize, Serialize};
use shared::Point2D;

use crate::harness::TestHarness;

/// Coordinate space of pointer positions in a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordSpace {
    /// Pixels on the editing surface
    #[default]
    Display,
    /// Millimeters in profile space
    Model,
}

/// A command the scripting interface can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditorCommand {
    /// Primary button press (grab or insert)
    Press {
        x: f64,
        y: f64,
        #[serde(default)]
        space: CoordSpace,
    },
    /// Pointer move (drags the grabbed point)
    Move {
        x: f64,
        y: f64,
        #[serde(default)]
        space: CoordSpace,
    },
    /// Primary button release
    Release,
    /// Double click (delete the point under the cursor)
    DoubleClick {
        x: f64,
        y: f64,
        #[serde(default)]
        space: CoordSpace,
    },
    /// Text entered in the coordinate fields of the selected point
    SetCoordinates { x: String, y: String },
    /// Delete the selected point.
    DeleteSelected,
    /// Clear selection.
    ClearSelection,
    /// Restore the default profile.
    Reset,
    /// Replace the profile from exchange-format JSON.
    ImportProfile { json: String },
    /// Export the profile as exchange-format JSON.
    ExportProfile,
    /// Inspect the profile: points, selection, drag state.
    Inspect,
    /// Build the solid and report mesh statistics.
    Build,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

fn to_display(harness: &TestHarness, x: f64, y: f64, space: CoordSpace) -> [f64; 2] {
    match space {
        CoordSpace::Display => [x, y],
        CoordSpace::Model => harness.display_of(&Point2D::new(x, y)),
    }
}

fn effects_data(harness: &TestHarness, effects: crate::state::Effects) -> serde_json::Value {
    serde_json::json!({
        "redraw": effects.redraw,
        "rebuild": effects.rebuild,
        "point_count": harness.point_count(),
        "selected": harness.selected(),
    })
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: EditorCommand) -> CommandResponse {
    match cmd {
        EditorCommand::Press { x, y, space } => {
            let pos = to_display(harness, x, y, space);
            let fx = harness.press(pos);
            CommandResponse::ok_with_data(effects_data(harness, fx))
        }

        EditorCommand::Move { x, y, space } => {
            let pos = to_display(harness, x, y, space);
            let fx = harness.move_to(pos);
            CommandResponse::ok_with_data(effects_data(harness, fx))
        }

        EditorCommand::Release => {
            harness.release();
            CommandResponse::ok()
        }

        EditorCommand::DoubleClick { x, y, space } => {
            let pos = to_display(harness, x, y, space);
            let fx = harness.double_click(pos);
            CommandResponse::ok_with_data(effects_data(harness, fx))
        }

        EditorCommand::SetCoordinates { x, y } => {
            let fx = harness.set_coordinates(&x, &y);
            CommandResponse::ok_with_data(effects_data(harness, fx))
        }

        EditorCommand::DeleteSelected => {
            let fx = harness.delete_selected();
            CommandResponse::ok_with_data(effects_data(harness, fx))
        }

        EditorCommand::ClearSelection => {
            harness.clear_selection();
            CommandResponse::ok()
        }

        EditorCommand::Reset => {
            harness.reset();
            CommandResponse::ok()
        }

        EditorCommand::ImportProfile { json } => match harness.import_json(&json) {
            Ok(()) => CommandResponse::ok_with_data(serde_json::json!({
                "point_count": harness.point_count(),
            })),
            Err(e) => CommandResponse::err(format!("Import rejected: {e}")),
        },

        EditorCommand::ExportProfile => match harness.export_json() {
            Ok(json) => CommandResponse::ok_with_data(serde_json::json!({ "profile_json": json })),
            Err(e) => CommandResponse::err(format!("Export failed: {e}")),
        },

        EditorCommand::Inspect => {
            let points: Vec<serde_json::Value> = harness
                .points()
                .iter()
                .map(|p| serde_json::json!({ "x": p.x, "y": p.y }))
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "point_count": points.len(),
                "points": points,
                "selected": harness.selected(),
                "dragging": harness.editor.is_dragging(),
                "version": harness.version(),
            }))
        }

        EditorCommand::Build => {
            harness.build();
            if let Some(e) = harness.last_error() {
                return CommandResponse::err(e.to_string());
            }
            match harness.validate_mesh() {
                Some(v) => CommandResponse::ok_with_data(serde_json::json!({
                    "vertex_count": v.vertex_count(),
                    "triangle_count": v.triangle_count(),
                    "dimensions": v.dimensions(),
                    "errors": v.validate_all(),
                })),
                None => CommandResponse::err("No mesh built"),
            }
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: EditorCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<EditorCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}
