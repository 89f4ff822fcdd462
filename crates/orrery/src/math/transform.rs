//! 4×4 transform algebra.
//!
//! Column-vector convention: `a * b` applies `b` first, so a chain written
//! left to right (`tilt * orbit * place`) reads outermost frame first and
//! transforms object-space points right to left. All angles are degrees.

use glam::{Mat4, Vec3};

pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(x, y, z))
}

pub fn translate_vec(offset: Vec3) -> Mat4 {
    Mat4::from_translation(offset)
}

pub fn rotate_x(degrees: f32) -> Mat4 {
    Mat4::from_rotation_x(degrees.to_radians())
}

/// Rotation about the vertical axis.
pub fn rotate_y(degrees: f32) -> Mat4 {
    Mat4::from_rotation_y(degrees.to_radians())
}

pub fn rotate_z(degrees: f32) -> Mat4 {
    Mat4::from_rotation_z(degrees.to_radians())
}

pub fn scale(factor: f32) -> Mat4 {
    Mat4::from_scale(Vec3::splat(factor))
}

/// OpenGL-style perspective projection (clip z in [-1, 1]).
pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh_gl(fov_y_degrees.to_radians(), aspect, near, far)
}

/// OpenGL-style orthographic projection.
pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    Mat4::orthographic_rh_gl(left, right, bottom, top, near, far)
}

/// Where the transform sends the object-space origin.
pub fn origin_of(transform: &Mat4) -> Vec3 {
    transform.transform_point3(Vec3::ZERO)
}

/// Reduce an angle to [0, 360).
pub fn wrap_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}
