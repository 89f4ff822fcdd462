use glam::{Mat4, Vec3};

use crate::api::config::CameraConfig;
use crate::api::types::PointerButton;
use crate::math::{rotate_x, rotate_y, scale, translate, translate_vec};

/// Orbit-style 3D camera driven by pointer drags.
///
/// Pitch stays within [-90, 90] and distance never goes negative, whatever
/// sequence of drags is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Degrees about the vertical axis.
    pub yaw: f32,
    /// Degrees about X, clamped to [-90, 90].
    pub pitch: f32,
    /// Distance from the pivot, >= 0.
    pub distance: f32,
    pub pan: Vec3,
    pub zoom_scale: f32,
}

impl CameraState {
    pub const PITCH_LIMIT: f32 = 90.0;
    /// Degrees per pixel of left drag.
    pub const ROTATE_SPEED: f32 = 0.5;
    /// World units per pixel of middle drag.
    pub const PAN_SPEED: f32 = 0.01;
    /// Distance per pixel of right drag.
    pub const DOLLY_SPEED: f32 = 0.1;

    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            yaw: config.yaw_degrees,
            pitch: config
                .pitch_degrees
                .clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT),
            distance: config.distance.max(0.0),
            pan: Vec3::from_array(config.pan),
            zoom_scale: config.zoom_scale,
        }
    }

    /// `translate(0,0,-distance) ∘ rotX(pitch) ∘ rotY(yaw) ∘ translate(pan) ∘ scale(zoom)`
    pub fn view_transform(&self) -> Mat4 {
        translate(0.0, 0.0, -self.distance)
            * rotate_x(self.pitch)
            * rotate_y(self.yaw)
            * translate_vec(self.pan)
            * scale(self.zoom_scale)
    }

    /// Camera-relative (up, right) pan axes for the current orientation.
    pub fn pan_axes(&self) -> (Vec3, Vec3) {
        let (sin_t, cos_t) = self.yaw.to_radians().sin_cos();
        let (sin_p, cos_p) = self.pitch.to_radians().sin_cos();
        let up = Vec3::new(-sin_t * sin_p, -cos_p, cos_t * sin_p);
        let right = Vec3::new(cos_t, 0.0, sin_t);
        (up, right)
    }

    /// Apply one pointer-drag delta (pixels) for `button`.
    pub fn apply_drag(&mut self, button: PointerButton, dx: f32, dy: f32) {
        match button {
            PointerButton::Left => {
                self.yaw += dx * Self::ROTATE_SPEED;
                self.pitch = (self.pitch + dy * Self::ROTATE_SPEED)
                    .clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
            }
            PointerButton::Middle => {
                let (up, right) = self.pan_axes();
                self.pan += (right * dx + up * dy) * Self::PAN_SPEED;
            }
            PointerButton::Right => {
                self.distance = (self.distance + dy * Self::DOLLY_SPEED).max(0.0);
            }
        }
    }

    /// Idle spin about the vertical axis.
    pub fn apply_idle_rotation(&mut self, delta_secs: f32, degrees_per_sec: f32) {
        self.yaw += degrees_per_sec * delta_secs;
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}
