//! Orbit trail sampling.
//!
//! A trail is re-derived from the current orbit angle every frame by stepping
//! backwards along the orbit, never recorded from past positions. Sampling the
//! same body at the same time always yields the same points.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::api::config::TrailConfig;
use crate::components::body::OrbitalBodySpec;
use crate::math::rotate_y;
use crate::systems::orbit::{frame_rotation, orbit_rotation, placement};

/// One trail vertex in the parent's frame, with its fade.
/// Wire format: x, y, z, alpha.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct TrailPoint {
    pub position: Vec3,
    /// 1.0 at the body, 0.0 at the oldest point.
    pub alpha: f32,
}

impl TrailPoint {
    pub const FLOATS: usize = 4;
}

/// Lazy, finite sequence of `segments + 1` trail points.
///
/// Cloning the sampler restarts nothing and shares nothing: each clone walks
/// the same points independently.
#[derive(Debug, Clone)]
pub struct TrailSampler {
    frame: Mat4,
    orbit_place: Mat4,
    segments: u32,
    arc_degrees: f32,
    next: u32,
}

impl TrailSampler {
    pub fn new(spec: &OrbitalBodySpec, elapsed: f64, orbit_rate: f64, trail: &TrailConfig) -> Self {
        Self {
            frame: frame_rotation(spec),
            orbit_place: orbit_rotation(spec, elapsed, orbit_rate) * placement(spec),
            segments: trail.segments.max(1),
            arc_degrees: trail.arc_degrees,
            next: 0,
        }
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }

    fn sample(&self, i: u32) -> TrailPoint {
        let fraction = i as f32 / self.segments as f32;
        let phase_back = fraction * self.arc_degrees;
        let path = rotate_y(-phase_back);
        let position = (self.frame * path * self.orbit_place).transform_point3(Vec3::ZERO);
        TrailPoint {
            position,
            alpha: 1.0 - fraction,
        }
    }
}

impl Iterator for TrailSampler {
    type Item = TrailPoint;

    fn next(&mut self) -> Option<TrailPoint> {
        if self.next > self.segments {
            return None;
        }
        let point = self.sample(self.next);
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.segments + 1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TrailSampler {}

/// Trail points for `spec` at `elapsed`, expressed in the parent's frame.
pub fn trail_points(
    spec: &OrbitalBodySpec,
    elapsed: f64,
    orbit_rate: f64,
    trail: &TrailConfig,
) -> TrailSampler {
    TrailSampler::new(spec, elapsed, orbit_rate, trail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::material::Material;
    use crate::math::origin_of;
    use crate::systems::orbit::local_transform;

    const RATE: f64 = 365.0 / 20.0;

    fn mars() -> OrbitalBodySpec {
        OrbitalBodySpec::new(0.4, Material::default())
            .with_orbit(9.0, 687.0, 0.3)
            .with_tilt(20.0)
    }

    #[test]
    fn yields_segments_plus_one_points() {
        let trail = TrailConfig::default();
        let sampler = trail_points(&mars(), 12.0, RATE, &trail);
        assert_eq!(sampler.len(), 11);
        assert_eq!(sampler.count(), 11);

        let longer = TrailConfig { segments: 32, ..trail };
        assert_eq!(trail_points(&mars(), 12.0, RATE, &longer).count(), 33);
    }

    #[test]
    fn alpha_fades_from_one_to_zero() {
        let points: Vec<_> = trail_points(&mars(), 5.0, RATE, &TrailConfig::default()).collect();
        assert_eq!(points.first().unwrap().alpha, 1.0);
        assert_eq!(points.last().unwrap().alpha, 0.0);
        for pair in points.windows(2) {
            assert!(pair[1].alpha < pair[0].alpha);
        }
    }

    #[test]
    fn first_point_is_the_body_position() {
        let spec = mars();
        let first = trail_points(&spec, 42.0, RATE, &TrailConfig::default()).next().unwrap();
        let body = origin_of(&local_transform(&spec, 42.0, RATE));
        assert!(first.position.abs_diff_eq(body, 1e-4), "{} vs {}", first.position, body);
    }

    #[test]
    fn points_stay_on_the_orbit_circle() {
        let spec = mars();
        for p in trail_points(&spec, 3.0, RATE, &TrailConfig::default()) {
            assert!((p.position.length() - 9.0).abs() < 1e-4);
        }
    }

    #[test]
    fn oldest_point_trails_by_the_arc() {
        // Untilted body at angle 0: the trail reaches back to -50°.
        let spec = OrbitalBodySpec::new(0.3, Material::default()).with_orbit(3.0, 88.0, 0.0);
        let last = trail_points(&spec, 0.0, RATE, &TrailConfig::default()).last().unwrap();
        let expected = rotate_y(-50.0).transform_point3(Vec3::new(3.0, 0.0, 0.0));
        assert!(last.position.abs_diff_eq(expected, 1e-4), "got {}", last.position);
    }

    #[test]
    fn sampling_is_deterministic_and_restartable() {
        let sampler = trail_points(&mars(), 77.7, RATE, &TrailConfig::default());
        let a: Vec<_> = sampler.clone().collect();
        let b: Vec<_> = sampler.collect();
        assert_eq!(a, b);
    }

    #[test]
    fn trail_point_is_4_floats() {
        assert_eq!(std::mem::size_of::<TrailPoint>(), TrailPoint::FLOATS * 4);
    }
}
