//! Capabilities the engine consumes from its host.
//!
//! The engine never touches a graphics API. It hands a `Renderer` mesh
//! submissions, line strips and text once per frame, and reads time from a
//! `FrameClock`. Mesh generation, draw calls and text rasterization are the
//! implementor's business.
//!
//! `DrawBuffer` in `renderer::instance` is the implementation the web bridge
//! uses; a native backend would implement the same trait.

use glam::{Mat4, Vec2, Vec3};
use serde::Serialize;

use crate::components::material::Material;
use crate::renderer::mesh::MeshKey;
use crate::systems::lighting::PointLight;
use crate::systems::text::LabelStyle;
use crate::systems::trail::TrailPoint;

/// Per-frame state every submission in the frame shares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSetup {
    pub view: Mat4,
    pub projection: Mat4,
    pub light: PointLight,
    /// Viewport size in pixels.
    pub viewport: [u32; 2],
}

/// Rendering switches that travel with each mesh submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawStyle {
    pub wireframe: bool,
    pub normals: bool,
}

impl DrawStyle {
    /// Bit 0 wireframe, bit 1 normals.
    pub fn bits(&self) -> u32 {
        (self.wireframe as u32) | ((self.normals as u32) << 1)
    }
}

/// Where a text overlay is placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "space", rename_all = "lowercase")]
pub enum LabelAnchor {
    /// World-space point, projected by the renderer.
    World { x: f32, y: f32, z: f32 },
    /// Pixel position, origin bottom-left.
    Screen { x: f32, y: f32 },
}

impl LabelAnchor {
    pub fn world(p: Vec3) -> Self {
        LabelAnchor::World {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }

    pub fn screen(p: Vec2) -> Self {
        LabelAnchor::Screen { x: p.x, y: p.y }
    }
}

/// Renderer backend.
///
/// Calls arrive in a fixed order each frame: `begin_frame`, any number of
/// submissions, `end_frame`.
pub trait Renderer {
    /// Backend identifier (e.g., "draw-buffer", "webgl")
    fn backend(&self) -> &'static str;

    fn begin_frame(&mut self, setup: &FrameSetup);

    /// Draw the mesh identified by `mesh` with `transform` as its model
    /// matrix. Backends create (or re-create) mesh handles on demand.
    fn submit(&mut self, mesh: MeshKey, transform: &Mat4, material: &Material, style: DrawStyle);

    /// Draw a faded line strip. `frame` maps the points into world space.
    fn submit_line_strip(&mut self, frame: &Mat4, points: &[TrailPoint]);

    fn draw_label(&mut self, text: &str, anchor: LabelAnchor, style: LabelStyle);

    fn end_frame(&mut self);
}

/// Monotonic milliseconds since start.
pub trait FrameClock {
    fn now_ms(&self) -> f64;
}

/// Clock that only moves when told to.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManualClock {
    now_ms: f64,
}

impl ManualClock {
    pub fn new(now_ms: f64) -> Self {
        Self { now_ms }
    }

    pub fn set(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }

    pub fn advance(&mut self, ms: f64) {
        self.now_ms += ms;
    }
}

impl FrameClock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }
}
