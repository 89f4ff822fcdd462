use orrery::{OrbitalBodySpec, Scenario};

use crate::bodies;

/// Sun, eight planets and Earth's moon under a 20-second Earth year.
pub struct SolarSystem;

impl SolarSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Scenario for SolarSystem {
    fn bodies(&self) -> Vec<OrbitalBodySpec> {
        vec![bodies::solar_system()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery::{compose_world_transforms, math::rotate_y, BodyTree, ComposeOptions};
    use glam::Vec3;

    fn tree() -> BodyTree {
        BodyTree::from_roots(SolarSystem::new().bodies())
    }

    fn options() -> ComposeOptions<'static> {
        ComposeOptions {
            orbit_rate: SolarSystem::new().config().orbit_rate,
            trails: None,
        }
    }

    #[test]
    fn tree_holds_sun_planets_and_moon() {
        assert_eq!(tree().len(), 10);
    }

    #[test]
    fn earth_starts_at_252_degrees() {
        let tree = tree();
        let frame = compose_world_transforms(&tree, 0.0, &options());
        let earth = tree.find_by_label("Earth").unwrap().id;
        let expected = rotate_y(252.0).transform_point3(Vec3::new(7.0, 0.0, 0.0));
        assert!(frame.world_position(earth).unwrap().abs_diff_eq(expected, 1e-4));
    }

    #[test]
    fn moon_stays_at_its_orbital_distance_from_earth() {
        let tree = tree();
        let earth = tree.find_by_label("Earth").unwrap().id;
        let moon = tree.find_by_label("Moon").unwrap().id;
        for t in [0.0, 3.3, 17.0, 120.0] {
            let frame = compose_world_transforms(&tree, t, &options());
            let d = frame.world_position(moon).unwrap() - frame.world_position(earth).unwrap();
            assert!((d.length() - bodies::MOON_DISTANCE).abs() < 1e-4, "t = {t}");
        }
    }
}
