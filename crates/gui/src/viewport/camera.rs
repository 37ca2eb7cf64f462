use glam::{Mat4, Vec3, Vec4};

use super::mesh::Aabb;

const FOV: f32 = std::f32::consts::FRAC_PI_4;
const PITCH_LIMIT: f32 = 1.5;
const MIN_DISTANCE: f32 = 0.5;
const MAX_DISTANCE: f32 = 100.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 200.0;

/// Turntable camera orbiting the lathe axis (world Y).
///
/// The look-at point always stays on the axis, so panning slides it up and
/// down the spindle and framing centers on the solid's height range.
#[derive(Debug, Clone, Copy)]
pub struct TurntableCamera {
    /// Rotation around the axis (radians)
    yaw: f32,
    /// Elevation above the XZ plane (radians)
    pitch: f32,
    distance: f32,
    /// Height of the look-at point on the axis
    height: f32,
}

impl TurntableCamera {
    pub fn new() -> Self {
        Self {
            yaw: 0.6,
            pitch: 0.4,
            distance: 10.0,
            height: 0.0,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Orbit by screen-space degrees
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw = (self.yaw + dx.to_radians()).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch + dy.to_radians()).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Slide the look-at point along the axis
    pub fn pan(&mut self, dy: f32) {
        self.height += dy * self.distance * 0.1;
    }

    /// Center on the solid and back off far enough to see all of it
    pub fn frame(&mut self, aabb: &Aabb) {
        self.height = aabb.center().y;
        let fit = aabb.radius() / (FOV * 0.5).sin();
        self.distance = fit.clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn target(&self) -> Vec3 {
        Vec3::new(0.0, self.height, 0.0)
    }

    /// Camera position in world space
    pub fn eye_position(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target() + self.distance * Vec3::new(cp * sy, sp, cp * cy)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye_position(), self.target(), Vec3::Y);
        Mat4::perspective_rh_gl(FOV, aspect, NEAR, FAR) * view
    }

    /// Project a 3D point to 2D screen coords (for overlay text)
    pub fn project(&self, point: [f32; 3], rect: egui::Rect) -> Option<egui::Pos2> {
        let aspect = rect.width() / rect.height();
        let p = self.view_projection(aspect) * Vec4::new(point[0], point[1], point[2], 1.0);
        if p.w <= 0.0 {
            return None;
        }
        let ndc = p.truncate() / p.w;
        Some(egui::pos2(
            rect.center().x + ndc.x * rect.width() * 0.5,
            rect.center().y - ndc.y * rect.height() * 0.5,
        ))
    }
}
