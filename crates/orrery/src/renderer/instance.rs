use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use serde::Serialize;

use crate::api::error::OrreryError;
use crate::components::material::Material;
use crate::renderer::mesh::{MeshCache, MeshKey};
use crate::renderer::traits::{DrawStyle, FrameSetup, LabelAnchor, Renderer};
use crate::systems::lighting::PointLight;
use crate::systems::text::LabelStyle;
use crate::systems::trail::TrailPoint;

/// One mesh draw as read by the JS renderer.
/// Wire format: 35 floats = 140 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct DrawInstance {
    /// Column-major model matrix.
    pub transform: [f32; 16],
    pub material: Material,
    /// Index into the mesh descriptor list.
    pub mesh_id: f32,
    /// `DrawStyle::bits()`.
    pub style: f32,
}

impl DrawInstance {
    pub const FLOATS: usize = 35;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Per-frame uniforms. Wire format: 56 floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct FrameUniforms {
    pub view: [f32; 16],
    pub projection: [f32; 16],
    pub light: PointLight,
    pub viewport: [f32; 2],
    pub _pad: [f32; 2],
}

impl FrameUniforms {
    pub const FLOATS: usize = 56;
}

/// What JS needs to generate the geometry behind a mesh id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeshDescriptor {
    pub id: u32,
    pub kind: &'static str,
    /// Torus tube radius relative to the major radius; 0 for spheres.
    pub tube_ratio: f32,
    pub slices: u32,
    pub stacks: u32,
}

impl MeshDescriptor {
    fn new(id: u32, key: &MeshKey) -> Self {
        Self {
            id,
            kind: key.shape.kind(),
            tube_ratio: key.shape.tube_ratio(),
            slices: key.tessellation.slices(),
            stacks: key.tessellation.stacks(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelRecord {
    pub text: String,
    pub anchor: LabelAnchor,
    pub style: LabelStyle,
}

/// Recording renderer: flattens a frame into plain buffers JS reads through
/// raw pointers into wasm memory.
///
/// Mesh ids are assigned on first use. Once `max_meshes` ids exist, a new
/// mesh takes over the id of the least recently used mesh that was not drawn
/// in the current frame, and [`DrawBuffer::mesh_revision`] moves on so JS
/// regenerates that geometry. Trail vertices are stored in world space; each strip is a
/// `[start, count]` pair into the vertex list.
pub struct DrawBuffer {
    pub instances: Vec<DrawInstance>,
    pub trail_vertices: Vec<TrailPoint>,
    pub trail_strips: Vec<[u32; 2]>,
    pub labels: Vec<LabelRecord>,
    pub uniforms: FrameUniforms,
    meshes: MeshCache<u32>,
    descriptors: Vec<MeshDescriptor>,
    /// Ids freed by eviction, reused before new ids are handed out.
    free_ids: Vec<u32>,
    max_meshes: usize,
    mesh_revision: u32,
    frame_counter: u32,
}

impl DrawBuffer {
    pub const DEFAULT_MAX_MESHES: usize = 64;

    pub fn new() -> Self {
        Self::with_mesh_limit(Self::DEFAULT_MAX_MESHES)
    }

    /// Buffer that keeps at most `max_meshes` meshes alive at once.
    pub fn with_mesh_limit(max_meshes: usize) -> Self {
        Self {
            instances: Vec::with_capacity(1024),
            trail_vertices: Vec::with_capacity(256),
            trail_strips: Vec::with_capacity(16),
            labels: Vec::with_capacity(32),
            uniforms: FrameUniforms::default(),
            meshes: MeshCache::new(),
            descriptors: Vec::new(),
            free_ids: Vec::new(),
            max_meshes,
            mesh_revision: 0,
            frame_counter: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.trail_vertices.clear();
        self.trail_strips.clear();
        self.labels.clear();
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for JS reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    pub fn trail_vertex_count(&self) -> u32 {
        self.trail_vertices.len() as u32
    }

    pub fn trail_vertices_ptr(&self) -> *const f32 {
        self.trail_vertices.as_ptr() as *const f32
    }

    pub fn trail_strip_count(&self) -> u32 {
        self.trail_strips.len() as u32
    }

    pub fn trail_strips_ptr(&self) -> *const u32 {
        self.trail_strips.as_ptr() as *const u32
    }

    pub fn uniforms_ptr(&self) -> *const f32 {
        &self.uniforms as *const FrameUniforms as *const f32
    }

    /// Number of mesh ids handed out so far.
    pub fn mesh_count(&self) -> u32 {
        self.descriptors.len() as u32
    }

    /// Bumped whenever a descriptor is added or an id is reassigned.
    /// JS rebuilds its geometry list when this changes.
    pub fn mesh_revision(&self) -> u32 {
        self.mesh_revision
    }

    pub fn meshes(&self) -> &[MeshDescriptor] {
        &self.descriptors
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    pub fn labels_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.labels)
    }

    pub fn meshes_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.descriptors)
    }
}

impl Default for DrawBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for DrawBuffer {
    fn backend(&self) -> &'static str {
        "draw-buffer"
    }

    fn begin_frame(&mut self, setup: &FrameSetup) {
        self.clear();
        self.meshes.next_frame();
        self.uniforms = FrameUniforms {
            view: setup.view.to_cols_array(),
            projection: setup.projection.to_cols_array(),
            light: setup.light,
            viewport: [setup.viewport[0] as f32, setup.viewport[1] as f32],
            _pad: [0.0; 2],
        };
    }

    fn submit(&mut self, mesh: MeshKey, transform: &Mat4, material: &Material, style: DrawStyle) {
        let max_meshes = self.max_meshes;
        if !self.meshes.contains(&mesh) && self.meshes.len() >= max_meshes {
            if let Some((_, id)) = self.meshes.evict_stale() {
                self.free_ids.push(id);
            }
        }
        let live = self.meshes.len();
        let descriptors = &mut self.descriptors;
        let free_ids = &mut self.free_ids;
        let revision = &mut self.mesh_revision;
        let resolved = self.meshes.resolve(mesh, |key| {
            let id = match free_ids.pop() {
                Some(id) => {
                    descriptors[id as usize] = MeshDescriptor::new(id, key);
                    id
                }
                None if live < max_meshes => {
                    let id = descriptors.len() as u32;
                    descriptors.push(MeshDescriptor::new(id, key));
                    id
                }
                None => {
                    return Err(OrreryError::MeshBuild {
                        key: *key,
                        reason: format!("all {max_meshes} mesh ids are in use this frame"),
                    })
                }
            };
            *revision = revision.wrapping_add(1);
            Ok(id)
        });
        let Some(&mesh_id) = resolved else {
            log::debug!("no mesh available for {mesh:?}; draw skipped");
            return;
        };
        self.instances.push(DrawInstance {
            transform: transform.to_cols_array(),
            material: *material,
            mesh_id: mesh_id as f32,
            style: style.bits() as f32,
        });
    }

    fn submit_line_strip(&mut self, frame: &Mat4, points: &[TrailPoint]) {
        if points.len() < 2 {
            return;
        }
        let start = self.trail_vertices.len() as u32;
        self.trail_vertices.extend(points.iter().map(|p| TrailPoint {
            position: frame.transform_point3(p.position),
            alpha: p.alpha,
        }));
        self.trail_strips.push([start, points.len() as u32]);
    }

    fn draw_label(&mut self, text: &str, anchor: LabelAnchor, style: LabelStyle) {
        self.labels.push(LabelRecord {
            text: text.to_owned(),
            anchor,
            style,
        });
    }

    fn end_frame(&mut self) {
        self.frame_counter = self.frame_counter.wrapping_add(1);
    }
}
