//! Scene composition: world and render transforms for every body.
//!
//! A body's world transform is its parent's world transform followed by its
//! own unscaled local transform. The radius scale only ever reaches the
//! render transform, so children orbit the parent's pivot at their own
//! distance regardless of the parent's size.

use glam::{Mat4, Vec3};

use crate::api::config::TrailConfig;
use crate::api::types::BodyId;
use crate::core::scene::BodyTree;
use crate::math::{origin_of, scale};
use crate::systems::orbit::local_transform;
use crate::systems::trail::{trail_points, TrailPoint};

/// Per-frame transforms of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposedBody {
    pub id: BodyId,
    /// World transform of the parent (identity for roots).
    pub parent_world: Mat4,
    /// Unscaled world transform; what children compose with.
    pub world: Mat4,
    /// `world ∘ scale(radius)`, for mesh submission only.
    pub render: Mat4,
}

/// Trail geometry for one orbiting body, in its parent's frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    pub body: BodyId,
    /// Parent world transform the points are expressed in.
    pub frame: Mat4,
    pub points: Vec<TrailPoint>,
}

#[derive(Debug, Clone, Copy)]
pub struct ComposeOptions<'a> {
    pub orbit_rate: f64,
    /// `None` when trails are switched off; the sampler is then never run.
    pub trails: Option<&'a TrailConfig>,
}

/// Everything the renderer needs about the bodies for one frame.
#[derive(Debug, Clone, Default)]
pub struct ComposedFrame {
    pub elapsed: f64,
    /// Indexed by `BodyId`.
    pub bodies: Vec<ComposedBody>,
    pub trails: Vec<Trail>,
}

impl ComposedFrame {
    pub fn get(&self, id: BodyId) -> Option<&ComposedBody> {
        self.bodies.get(id.index())
    }

    /// World position of the body's pivot.
    pub fn world_position(&self, id: BodyId) -> Option<Vec3> {
        self.get(id).map(|body| origin_of(&body.world))
    }
}

/// Compose every body in `tree` at `elapsed` seconds of simulation time.
pub fn compose_world_transforms(
    tree: &BodyTree,
    elapsed: f64,
    options: &ComposeOptions<'_>,
) -> ComposedFrame {
    let mut bodies: Vec<ComposedBody> = Vec::with_capacity(tree.len());
    let mut trails = Vec::new();

    // Storage order puts parents first, so the parent is already composed.
    for node in tree.iter() {
        let parent_world = node
            .parent
            .and_then(|p| bodies.get(p.index()))
            .map(|p| p.world)
            .unwrap_or(Mat4::IDENTITY);

        let world = parent_world * local_transform(&node.spec, elapsed, options.orbit_rate);
        let render = world * scale(node.spec.radius);
        bodies.push(ComposedBody {
            id: node.id,
            parent_world,
            world,
            render,
        });

        if let Some(trail_config) = options.trails {
            if node.spec.is_orbiting() {
                trails.push(Trail {
                    body: node.id,
                    frame: parent_world,
                    points: trail_points(&node.spec, elapsed, options.orbit_rate, trail_config)
                        .collect(),
                });
            }
        }
    }

    ComposedFrame {
        elapsed,
        bodies,
        trails,
    }
}
