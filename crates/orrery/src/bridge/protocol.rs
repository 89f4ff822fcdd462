/// Draw buffer wire layout.
/// Must stay in sync with the JS renderer.
///
/// All records are read straight out of wasm memory (all values f32 unless
/// noted):
/// ```text
/// [Uniforms: 56 floats]   view(16) projection(16) light(20) viewport(2) pad(2)
/// [Instances: n × 35]     transform(16) material(17) mesh_id(1) style(1)
/// [Trail vertices: n × 4] x, y, z, alpha (world space)
/// [Trail strips: n × 2]   start, count (u32)
/// ```
///
/// JS asks for `protocol_json()` once at init and checks the version.

use serde::Serialize;

use crate::components::material::Material;
use crate::renderer::instance::{DrawInstance, FrameUniforms};
use crate::systems::lighting::PointLight;
use crate::systems::trail::TrailPoint;

/// Protocol version reported to JS.
pub const PROTOCOL_VERSION: u32 = 1;

/// Floats per draw instance (fixed wire format).
pub const INSTANCE_FLOATS: usize = DrawInstance::FLOATS;

/// Field offsets inside a draw instance, in floats.
pub const INSTANCE_TRANSFORM_OFFSET: usize = 0;
pub const INSTANCE_MATERIAL_OFFSET: usize = 16;
pub const INSTANCE_MESH_ID_OFFSET: usize = INSTANCE_MATERIAL_OFFSET + Material::FLOATS;
pub const INSTANCE_STYLE_OFFSET: usize = INSTANCE_MESH_ID_OFFSET + 1;

/// Floats per trail vertex: x, y, z, alpha.
pub const TRAIL_VERTEX_FLOATS: usize = TrailPoint::FLOATS;

/// u32s per trail strip: start, count.
pub const TRAIL_STRIP_WORDS: usize = 2;

pub const UNIFORM_FLOATS: usize = FrameUniforms::FLOATS;
pub const UNIFORM_LIGHT_OFFSET: usize = 32;
pub const UNIFORM_VIEWPORT_OFFSET: usize = UNIFORM_LIGHT_OFFSET + PointLight::FLOATS;

/// Layout summary handed to JS as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtocolLayout {
    pub version: u32,
    pub instance_floats: usize,
    pub instance_material_offset: usize,
    pub instance_mesh_id_offset: usize,
    pub instance_style_offset: usize,
    pub trail_vertex_floats: usize,
    pub trail_strip_words: usize,
    pub uniform_floats: usize,
    pub uniform_light_offset: usize,
    pub uniform_viewport_offset: usize,
}

impl ProtocolLayout {
    pub fn current() -> Self {
        Self {
            version: PROTOCOL_VERSION,
            instance_floats: INSTANCE_FLOATS,
            instance_material_offset: INSTANCE_MATERIAL_OFFSET,
            instance_mesh_id_offset: INSTANCE_MESH_ID_OFFSET,
            instance_style_offset: INSTANCE_STYLE_OFFSET,
            trail_vertex_floats: TRAIL_VERTEX_FLOATS,
            trail_strip_words: TRAIL_STRIP_WORDS,
            uniform_floats: UNIFORM_FLOATS,
            uniform_light_offset: UNIFORM_LIGHT_OFFSET,
            uniform_viewport_offset: UNIFORM_VIEWPORT_OFFSET,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
