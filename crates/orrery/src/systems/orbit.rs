//! Circular-orbit body model: one body's transform at a given simulation time.
//!
//! Time is carried as f64 seconds and the orbit angle is reduced modulo 360
//! before it reaches f32 matrices, so long sessions keep full precision.

use glam::Mat4;

use crate::components::body::OrbitalBodySpec;
use crate::math::{rotate_x, rotate_y, rotate_z, scale, translate, wrap_degrees};

/// Orbit angle in degrees, in [0, 360), or `None` for a body that does not
/// revolve.
///
/// `orbit_rate` converts seconds of animation into simulated days.
pub fn orbit_angle_degrees(spec: &OrbitalBodySpec, elapsed: f64, orbit_rate: f64) -> Option<f64> {
    if !spec.is_orbiting() {
        return None;
    }
    let revolutions = spec.phase_offset + elapsed * orbit_rate / spec.period;
    Some(wrap_degrees(360.0 * revolutions))
}

/// Orientation of the body's orbital frame in its parent: inclination about
/// X, then tilt about Z.
pub fn frame_rotation(spec: &OrbitalBodySpec) -> Mat4 {
    rotate_x(spec.inclination) * rotate_z(spec.tilt)
}

/// Rotation about the vertical axis by the current orbit angle; identity
/// for a body that does not revolve.
pub fn orbit_rotation(spec: &OrbitalBodySpec, elapsed: f64, orbit_rate: f64) -> Mat4 {
    match orbit_angle_degrees(spec, elapsed, orbit_rate) {
        Some(angle) => rotate_y(angle as f32),
        None => Mat4::IDENTITY,
    }
}

/// Placement at the orbital distance along the frame's X axis.
pub fn placement(spec: &OrbitalBodySpec) -> Mat4 {
    translate(spec.distance, 0.0, 0.0)
}

/// Unscaled transform from the body's frame into its parent's frame.
/// This is the value children compose with.
pub fn local_transform(spec: &OrbitalBodySpec, elapsed: f64, orbit_rate: f64) -> Mat4 {
    frame_rotation(spec) * orbit_rotation(spec, elapsed, orbit_rate) * placement(spec)
}

/// Local transform with the radius scale appended, for mesh submission only.
pub fn render_transform(spec: &OrbitalBodySpec, elapsed: f64, orbit_rate: f64) -> Mat4 {
    local_transform(spec, elapsed, orbit_rate) * scale(spec.radius)
}
