//! Turns a composed frame into renderer submissions.
//!
//! Submission order: background stars, bodies with their rings, halos,
//! trails, then text. Halos are translucent and must follow every opaque
//! body so depth testing does not hide what is behind them.

use crate::api::config::TessellationConfig;
use crate::core::scene::BodyTree;
use crate::input::toggles::ToggleFlags;
use crate::math::scale;
use crate::renderer::mesh::MeshKey;
use crate::renderer::traits::{DrawStyle, FrameSetup, LabelAnchor, Renderer};
use crate::systems::compose::ComposedFrame;
use crate::systems::starfield::Starfield;
use crate::systems::text::{fps_text, help_anchor, help_lines, label_position, LabelStyle, FPS_ANCHOR};

/// Everything besides the renderer that a frame's draw needs.
pub struct RenderPass<'a> {
    pub tree: &'a BodyTree,
    pub frame: &'a ComposedFrame,
    pub starfield: &'a Starfield,
    pub toggles: ToggleFlags,
    /// Tessellation in effect this frame, including keyboard changes.
    pub tessellation: TessellationConfig,
    pub fps: f32,
}

impl RenderPass<'_> {
    fn style(&self) -> DrawStyle {
        DrawStyle {
            wireframe: self.toggles.wireframe,
            normals: self.toggles.normals,
        }
    }
}

pub fn render_frame<R: Renderer + ?Sized>(renderer: &mut R, setup: &FrameSetup, pass: &RenderPass<'_>) {
    renderer.begin_frame(setup);

    draw_starfield(renderer, pass);
    draw_bodies(renderer, pass);
    draw_halos(renderer, pass);
    if pass.toggles.trails {
        for trail in &pass.frame.trails {
            renderer.submit_line_strip(&trail.frame, &trail.points);
        }
    }
    draw_text(renderer, setup, pass);

    renderer.end_frame();
}

fn draw_starfield<R: Renderer + ?Sized>(renderer: &mut R, pass: &RenderPass<'_>) {
    let key = MeshKey::sphere(pass.tessellation.star);
    let material = Starfield::material();
    for star in &pass.starfield.stars {
        let transform = pass.starfield.transform(star);
        renderer.submit(key, &transform, &material, DrawStyle::default());
    }
}

fn draw_bodies<R: Renderer + ?Sized>(renderer: &mut R, pass: &RenderPass<'_>) {
    let sphere = MeshKey::sphere(pass.tessellation.body);
    let style = pass.style();
    for node in pass.tree.iter() {
        let Some(composed) = pass.frame.get(node.id) else {
            continue;
        };
        let spec = &node.spec;
        renderer.submit(sphere, &composed.render, &spec.material, style);

        if let Some(ring) = spec.ring.filter(|r| r.is_visible()) {
            // Unit-major torus stretched out to the ring radius in the
            // body's scaled frame.
            let transform = composed.render * scale(ring.ring_radius / spec.radius);
            let key = MeshKey::torus(ring.tube_ratio(), pass.tessellation.ring);
            renderer.submit(key, &transform, &ring.material, style);
        }
    }
}

fn draw_halos<R: Renderer + ?Sized>(renderer: &mut R, pass: &RenderPass<'_>) {
    let sphere = MeshKey::sphere(pass.tessellation.body);
    let style = pass.style();
    for node in pass.tree.iter() {
        let Some(composed) = pass.frame.get(node.id) else {
            continue;
        };
        for halo in &node.spec.halos {
            let transform = composed.world * scale(halo.radius_at(pass.frame.elapsed));
            renderer.submit(sphere, &transform, &halo.material, style);
        }
    }
}

fn draw_text<R: Renderer + ?Sized>(renderer: &mut R, setup: &FrameSetup, pass: &RenderPass<'_>) {
    if pass.toggles.labels {
        for node in pass.tree.iter() {
            let (Some(label), Some(composed)) = (node.spec.label.as_deref(), pass.frame.get(node.id)) else {
                continue;
            };
            let position = label_position(&composed.world, node.spec.radius);
            renderer.draw_label(label, LabelAnchor::world(position), LabelStyle::Body);
        }
    }

    let height = setup.viewport[1] as f32;
    for (i, line) in help_lines(pass.toggles.help).iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        renderer.draw_label(line, LabelAnchor::screen(help_anchor(i, height)), LabelStyle::Help);
    }

    if pass.toggles.animation {
        renderer.draw_label(&fps_text(pass.fps), LabelAnchor::screen(FPS_ANCHOR), LabelStyle::Fps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::{StarfieldConfig, TrailConfig};
    use crate::components::body::{HaloSpec, OrbitalBodySpec, RingSpec};
    use crate::components::material::Material;
    use crate::renderer::instance::DrawBuffer;
    use crate::renderer::mesh::Tessellation;
    use crate::systems::compose::{compose_world_transforms, ComposeOptions};
    use crate::systems::lighting::PointLight;
    use crate::systems::text::HELP_TEXT;
    use glam::Mat4;

    const RATE: f64 = 365.0 / 20.0;

    fn setup() -> FrameSetup {
        FrameSetup {
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            light: PointLight::default(),
            viewport: [800, 600],
        }
    }

    fn tree() -> BodyTree {
        let halo = Material::new([1.0, 0.77, 0.6, 0.1]);
        let sun = OrbitalBodySpec::new(0.8, Material::rgb(1.0, 0.6, 0.3))
            .with_label("Sun")
            .with_halo(HaloSpec::new(0.0, 1.1, 1.3, halo))
            .with_child(
                OrbitalBodySpec::new(0.6, Material::rgb(0.96, 0.95, 0.7))
                    .with_label("Saturn")
                    .with_orbit(14.0, 10759.0, 0.1)
                    .with_ring(RingSpec::new(0.9, 0.14, Material::new([0.97, 0.88, 0.81, 0.5]))),
            )
            .with_child(OrbitalBodySpec::new(0.1, Material::default()).with_orbit(2.0, 30.0, 0.0));
        BodyTree::from_roots([sun])
    }

    fn starfield(count: usize) -> Starfield {
        Starfield::generate(&StarfieldConfig {
            count,
            ..StarfieldConfig::default()
        })
    }

    fn run(toggles: ToggleFlags, stars: usize) -> DrawBuffer {
        let tree = tree();
        let trail = TrailConfig::default();
        let options = ComposeOptions {
            orbit_rate: RATE,
            trails: toggles.trails.then_some(&trail),
        };
        let frame = compose_world_transforms(&tree, 2.0, &options);
        let field = starfield(stars);
        let pass = RenderPass {
            tree: &tree,
            frame: &frame,
            starfield: &field,
            toggles,
            tessellation: TessellationConfig::default(),
            fps: 59.6,
        };
        let mut buf = DrawBuffer::new();
        render_frame(&mut buf, &setup(), &pass);
        buf
    }

    #[test]
    fn submits_stars_bodies_rings_then_halos() {
        let buf = run(ToggleFlags::default(), 5);
        // 5 stars, 3 bodies, 1 ring, 1 halo.
        assert_eq!(buf.instance_count(), 10);
        let last = buf.instances.last().unwrap();
        assert!(last.material.is_translucent());
        assert_eq!(last.material.diffuse[3], 0.1);
        // star, body sphere, torus
        assert_eq!(buf.mesh_count(), 3);
    }

    #[test]
    fn ring_spans_ring_radius_in_world_units() {
        let buf = run(ToggleFlags::default(), 0);
        let ring = buf
            .instances
            .iter()
            .find(|i| i.material.diffuse[3] == 0.5)
            .unwrap();
        let m = Mat4::from_cols_array(&ring.transform);
        let major = m.transform_vector3(glam::Vec3::X).length();
        assert!((major - 0.9).abs() < 1e-5, "major radius {major}");
        let torus = buf.meshes().iter().find(|d| d.kind == "torus").unwrap();
        assert!((torus.tube_ratio - 0.14 / 0.9).abs() < 1e-6);
        assert_eq!((torus.slices, torus.stacks), (45, 2));
    }

    #[test]
    fn trails_follow_toggle() {
        let on = run(ToggleFlags::default(), 0);
        assert_eq!(on.trail_strip_count(), 2);
        assert_eq!(on.trail_vertex_count(), 22);

        let off = run(
            ToggleFlags {
                trails: false,
                ..ToggleFlags::default()
            },
            0,
        );
        assert_eq!(off.trail_strip_count(), 0);
    }

    #[test]
    fn labels_only_for_labeled_bodies() {
        let buf = run(ToggleFlags::default(), 0);
        let body_labels: Vec<_> = buf
            .labels
            .iter()
            .filter(|l| l.style == LabelStyle::Body)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(body_labels, ["Sun", "Saturn"]);

        let hidden = run(
            ToggleFlags {
                labels: false,
                ..ToggleFlags::default()
            },
            0,
        );
        assert!(hidden.labels.iter().all(|l| l.style != LabelStyle::Body));
    }

    #[test]
    fn help_and_fps_overlays() {
        let buf = run(ToggleFlags::default(), 0);
        let help: Vec<_> = buf.labels.iter().filter(|l| l.style == LabelStyle::Help).collect();
        assert_eq!(help.len(), 1);
        assert_eq!(help[0].text, "Press F1 for help");
        assert_eq!(help[0].anchor, LabelAnchor::Screen { x: 5.0, y: 580.0 });
        let fps = buf.labels.iter().find(|l| l.style == LabelStyle::Fps).unwrap();
        assert_eq!(fps.text, "  60 FPS");

        let paused = run(
            ToggleFlags {
                animation: false,
                help: true,
                ..ToggleFlags::default()
            },
            0,
        );
        assert!(paused.labels.iter().all(|l| l.style != LabelStyle::Fps));
        let non_blank = HELP_TEXT.iter().filter(|l| !l.is_empty()).count();
        assert_eq!(
            paused.labels.iter().filter(|l| l.style == LabelStyle::Help).count(),
            non_blank
        );
    }

    #[test]
    fn wireframe_and_normals_travel_with_bodies_only() {
        let buf = run(
            ToggleFlags {
                wireframe: true,
                normals: true,
                ..ToggleFlags::default()
            },
            2,
        );
        assert_eq!(buf.instances[0].style, 0.0);
        assert_eq!(buf.instances[2].style, 3.0);
    }

    #[test]
    fn body_tessellation_change_uses_new_mesh() {
        let tree = tree();
        let frame = compose_world_transforms(
            &tree,
            0.0,
            &ComposeOptions {
                orbit_rate: RATE,
                trails: None,
            },
        );
        let field = starfield(0);
        let mut buf = DrawBuffer::new();
        let mut tessellation = TessellationConfig::default();
        for slices in [28, 12] {
            tessellation.body = Tessellation::new(slices, 24);
            let pass = RenderPass {
                tree: &tree,
                frame: &frame,
                starfield: &field,
                toggles: ToggleFlags::default(),
                tessellation,
                fps: 0.0,
            };
            render_frame(&mut buf, &setup(), &pass);
        }
        assert_eq!(buf.instances[0].mesh_id, 2.0);
        assert!(buf.meshes().iter().any(|d| d.kind == "sphere" && d.slices == 12));
    }
}
