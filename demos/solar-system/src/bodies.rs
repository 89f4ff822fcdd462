//! Body table for the solar system scene.
//!
//! Sizes and distances are picked for readability, not to scale. Periods
//! are in days and share the engine's single orbit rate.

use orrery::{HaloSpec, Material, OrbitalBodySpec, RingSpec};

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 0.8;
pub const SUN_COLOR: [f32; 4] = [1.0, 0.6, 0.3, 1.0];
pub const HALO_COLOR: [f32; 4] = [1.0, 0.77, 0.6, 0.1];
pub const HALO_GLOW: [f32; 4] = [1.0, 0.77, 0.6, 1.0];

/// (phase, min radius, max radius) for each corona shell, innermost first.
pub const SUN_HALOS: [(f32, f32, f32); 3] = [(0.0, 1.1, 1.3), (0.03, 1.3, 1.5), (0.07, 1.4, 1.7)];

// ── Planets ──────────────────────────────────────────────────────────

/// Static parameters for one planet.
pub struct Planet {
    pub name: &'static str,
    pub radius: f32,
    pub distance: f32,
    /// Axial tilt, degrees.
    pub tilt: f32,
    /// Orbital period, days.
    pub period: f64,
    /// Fraction of a revolution already done at t = 0.
    pub phase_offset: f64,
    pub color: [f32; 3],
}

pub const PLANETS: [Planet; 8] = [
    Planet { name: "Mercury", radius: 0.34, distance: 3.0, tilt: -10.0, period: 88.0, phase_offset: 0.0, color: [0.48, 0.25, 0.09] },
    Planet { name: "Venus", radius: 0.4, distance: 5.0, tilt: 30.0, period: 225.0, phase_offset: 0.5, color: [0.84, 0.67, 0.55] },
    Planet { name: "Earth", radius: 0.45, distance: 7.0, tilt: 0.0, period: 365.0, phase_offset: 0.7, color: [0.19, 0.78, 0.95] },
    Planet { name: "Mars", radius: 0.4, distance: 9.0, tilt: 20.0, period: 687.0, phase_offset: 0.3, color: [0.83, 0.24, 0.16] },
    Planet { name: "Jupiter", radius: 0.8, distance: 11.0, tilt: -20.0, period: 4333.0, phase_offset: 0.4, color: [0.6, 0.26, 0.12] },
    Planet { name: "Saturn", radius: 0.6, distance: 14.0, tilt: 15.0, period: 10759.0, phase_offset: 0.1, color: [0.96, 0.95, 0.7] },
    Planet { name: "Uranus", radius: 0.4, distance: 17.0, tilt: 20.0, period: 30687.0, phase_offset: 0.6, color: [0.46, 0.82, 0.7] },
    Planet { name: "Neptune", radius: 0.4, distance: 19.0, tilt: 0.0, period: 60190.0, phase_offset: 0.2, color: [0.0, 0.65, 0.88] },
];

pub const RING_COLOR: [f32; 4] = [0.97, 0.88, 0.81, 0.5];

/// (planet, ring radius, ring size).
pub const RINGS: [(&str, f32, f32); 2] = [("Saturn", 0.9, 0.14), ("Uranus", 0.7, 0.05)];

// ── Moon ─────────────────────────────────────────────────────────────

pub const MOON_RADIUS: f32 = 0.1;
pub const MOON_DISTANCE: f32 = 0.8;
pub const MOON_PERIOD: f64 = 27.0;
/// The moon orbits in a plane tipped upright relative to Earth's.
pub const MOON_INCLINATION: f32 = 90.0;
pub const MOON_COLOR: [f32; 3] = [0.9, 0.9, 0.9];

impl Planet {
    fn spec(&self) -> OrbitalBodySpec {
        let [r, g, b] = self.color;
        let mut spec = OrbitalBodySpec::new(self.radius, Material::rgb(r, g, b))
            .with_label(self.name)
            .with_orbit(self.distance, self.period, self.phase_offset)
            .with_tilt(self.tilt);
        if let Some(&(_, ring_radius, ring_size)) = RINGS.iter().find(|(name, ..)| *name == self.name) {
            spec = spec.with_ring(RingSpec::new(ring_radius, ring_size, Material::new(RING_COLOR)));
        }
        spec
    }
}

fn moon() -> OrbitalBodySpec {
    let [r, g, b] = MOON_COLOR;
    OrbitalBodySpec::new(MOON_RADIUS, Material::rgb(r, g, b))
        .with_label("Moon")
        .with_orbit(MOON_DISTANCE, MOON_PERIOD, 0.0)
        .with_inclination(MOON_INCLINATION)
}

fn sun() -> OrbitalBodySpec {
    let mut sun = OrbitalBodySpec::new(SUN_RADIUS, Material::new(SUN_COLOR).with_emission(SUN_COLOR))
        .with_label("Sun");
    let halo_material = Material::new(HALO_COLOR).with_emission(HALO_GLOW);
    for (phase, min, max) in SUN_HALOS {
        sun = sun.with_halo(HaloSpec::new(phase, min, max, halo_material));
    }
    sun
}

/// The full hierarchy: the sun at the root, planets around it, the moon
/// around Earth.
pub fn solar_system() -> OrbitalBodySpec {
    PLANETS.iter().fold(sun(), |sun, planet| {
        let mut spec = planet.spec();
        if planet.name == "Earth" {
            spec = spec.with_child(moon());
        }
        sun.with_child(spec)
    })
}
