//! 2D editing surface: the half-silhouette drawn next to its axis of revolution

use egui::{Color32, Pos2, Rect, Sense, Stroke, Ui};

use shared::Point2D;

use crate::app::styles::palette;
use crate::i18n::t;
use crate::sketch::{hit_test, CoordinateTransform};
use crate::state::{EditorEvent, EditorState, Effects};

const POINT_RADIUS: f32 = 4.5;
const SELECTED_RADIUS: f32 = 6.0;

/// Show the editing surface and feed pointer gestures to the editor
pub fn show(ui: &mut Ui, editor: &mut EditorState) -> Effects {
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
    editor.set_surface_size(rect.width() as f64, rect.height() as f64);

    let effects = handle_pointer(ui, &response, rect, editor);

    if ui.is_rect_visible(rect) {
        paint(&ui.painter_at(rect), rect, editor);
    }
    effects
}

fn to_local(rect: Rect, pos: Pos2) -> [f64; 2] {
    [(pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64]
}

fn to_screen(rect: Rect, transform: &CoordinateTransform, p: &Point2D) -> Pos2 {
    let [x, y] = transform.to_display(p);
    Pos2::new(rect.min.x + x as f32, rect.min.y + y as f32)
}

fn merge(into: &mut Effects, fx: Effects) {
    into.redraw |= fx.redraw;
    into.rebuild |= fx.rebuild;
}

fn handle_pointer(
    ui: &Ui,
    response: &egui::Response,
    rect: Rect,
    editor: &mut EditorState,
) -> Effects {
    let (pressed, released, pos, moved) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.interact_pos(),
            i.pointer.delta() != egui::Vec2::ZERO,
        )
    });

    let mut effects = Effects::NONE;

    if pressed && response.hovered() {
        if let Some(pos) = pos {
            merge(&mut effects, editor.handle(EditorEvent::PointerPressed(to_local(rect, pos))));
        }
    }

    // Drag follows the pointer even outside the surface; the editor clamps it
    if editor.is_dragging() && moved {
        if let Some(pos) = ui.input(|i| i.pointer.latest_pos()) {
            merge(&mut effects, editor.handle(EditorEvent::PointerMoved(to_local(rect, pos))));
        }
    }

    if response.double_clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            merge(&mut effects, editor.handle(EditorEvent::DoubleClicked(to_local(rect, pos))));
        }
    }

    // Release ends the drag wherever it happens
    if released && editor.is_dragging() {
        merge(&mut effects, editor.handle(EditorEvent::PointerReleased));
    }

    if editor.is_dragging() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if let Some(hover) = response.hover_pos() {
        if hit_test(editor.profile.points(), editor.transform(), to_local(rect, hover)).is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }
    }

    effects
}

fn paint(painter: &egui::Painter, rect: Rect, editor: &EditorState) {
    painter.rect_filled(rect, 0.0, palette::CANVAS_BG);

    let transform = editor.transform();
    let origin = Pos2::new(
        rect.min.x + transform.origin()[0] as f32,
        rect.min.y + transform.origin()[1] as f32,
    );

    if editor.prefs.show_grid {
        draw_grid(painter, rect, origin, transform.scale() as f32);
    }
    if editor.prefs.show_axes {
        draw_axes(painter, rect, origin);
    }

    let points = editor.profile.points();
    let screen: Vec<Pos2> = points.iter().map(|p| to_screen(rect, transform, p)).collect();

    // Closing caps from the ends of the profile to the axis
    if let (Some(first), Some(last)) = (screen.first(), screen.last()) {
        let cap = Stroke::new(1.0, palette::CAP);
        for end in [*first, *last] {
            let on_axis = Pos2::new(origin.x, end.y);
            painter.extend(egui::Shape::dashed_line(&[end, on_axis], cap, 4.0, 3.0));
        }
    }

    if screen.len() >= 2 {
        painter.add(egui::Shape::line(
            screen.clone(),
            Stroke::new(2.0, palette::PROFILE),
        ));
    }

    let selected = editor.profile.selected();
    for (i, pos) in screen.iter().enumerate() {
        if selected == Some(i) {
            painter.circle(
                *pos,
                SELECTED_RADIUS,
                palette::POINT_SELECTED,
                Stroke::new(1.5, Color32::WHITE),
            );
        } else {
            painter.circle(*pos, POINT_RADIUS, palette::POINT, Stroke::NONE);
        }
    }

    if let (Some(i), Some(p)) = (selected, editor.profile.selected_point()) {
        painter.text(
            screen[i] + egui::vec2(10.0, -10.0),
            egui::Align2::LEFT_BOTTOM,
            format!("({:.2}, {:.2})", p.x, p.y),
            egui::FontId::monospace(11.0),
            palette::LABEL,
        );
    }

    painter.text(
        Pos2::new(rect.left() + 6.0, rect.bottom() - 6.0),
        egui::Align2::LEFT_BOTTOM,
        t("canvas.hint"),
        egui::FontId::proportional(11.0),
        palette::LABEL,
    );
}

/// One line per model unit, anchored at the model origin
fn draw_grid(painter: &egui::Painter, rect: Rect, origin: Pos2, step: f32) {
    if step < 4.0 {
        return;
    }
    let stroke = Stroke::new(1.0, palette::GRID);

    let first_x = origin.x - ((origin.x - rect.left()) / step).floor() * step;
    let mut x = first_x;
    while x <= rect.right() {
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        x += step;
    }

    let first_y = origin.y - ((origin.y - rect.top()) / step).floor() * step;
    let mut y = first_y;
    while y <= rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        y += step;
    }
}

fn draw_axes(painter: &egui::Painter, rect: Rect, origin: Pos2) {
    // Axis of revolution
    painter.line_segment(
        [Pos2::new(origin.x, rect.top()), Pos2::new(origin.x, rect.bottom())],
        Stroke::new(1.5, palette::AXIS),
    );
    painter.line_segment(
        [Pos2::new(rect.left(), origin.y), Pos2::new(rect.right(), origin.y)],
        Stroke::new(1.0, palette::AXIS.gamma_multiply(0.5)),
    );
    painter.text(
        Pos2::new(origin.x + 4.0, rect.top() + 4.0),
        egui::Align2::LEFT_TOP,
        t("canvas.axis"),
        egui::FontId::proportional(11.0),
        palette::AXIS,
    );
}
