use crate::components::material::Material;

/// Static description of one celestial body.
///
/// Built once at startup and never mutated while the scene runs. Children
/// are expressed in this body's unscaled local frame.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalBodySpec {
    /// Display name; `None` for unlabeled bodies.
    pub label: Option<String>,
    /// Mesh radius. Applied only to this body's own mesh.
    pub radius: f32,
    /// Distance from the parent's pivot; 0 for a stationary body.
    pub distance: f32,
    /// Axial tilt in degrees, about the parent's Z axis.
    pub tilt: f32,
    /// Rotation of the orbital plane about the parent's X axis, in degrees.
    pub inclination: f32,
    /// Orbital period in simulated days; 0 means the body does not revolve.
    pub period: f64,
    /// Fraction of a revolution completed at time zero, in [0, 1).
    pub phase_offset: f64,
    pub material: Material,
    pub ring: Option<RingSpec>,
    pub halos: Vec<HaloSpec>,
    pub children: Vec<OrbitalBodySpec>,
}

impl OrbitalBodySpec {
    /// A stationary, untilted body at its parent's pivot.
    pub fn new(radius: f32, material: Material) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        Self {
            label: None,
            radius,
            distance: 0.0,
            tilt: 0.0,
            inclination: 0.0,
            period: 0.0,
            phase_offset: 0.0,
            material,
            ring: None,
            halos: Vec::new(),
            children: Vec::new(),
        }
    }

    // -- Builder pattern --

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Circular orbit at `distance`, one revolution per `period` simulated
    /// days, starting `phase_offset` of a revolution in.
    pub fn with_orbit(mut self, distance: f32, period: f64, phase_offset: f64) -> Self {
        self.distance = distance;
        self.period = period;
        self.phase_offset = phase_offset.rem_euclid(1.0);
        self
    }

    /// Fixed placement without revolving.
    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_tilt(mut self, degrees: f32) -> Self {
        self.tilt = degrees;
        self
    }

    pub fn with_inclination(mut self, degrees: f32) -> Self {
        self.inclination = degrees;
        self
    }

    pub fn with_ring(mut self, ring: RingSpec) -> Self {
        self.ring = Some(ring);
        self
    }

    pub fn with_halo(mut self, halo: HaloSpec) -> Self {
        self.halos.push(halo);
        self
    }

    pub fn with_child(mut self, child: OrbitalBodySpec) -> Self {
        self.children.push(child);
        self
    }

    /// Whether the body revolves around its parent.
    pub fn is_orbiting(&self) -> bool {
        self.period != 0.0
    }
}

/// Flat ring around a body, drawn as a torus in the body's scaled frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    /// Distance from the body's center to the middle of the ring.
    pub ring_radius: f32,
    /// Thickness of the ring tube.
    pub ring_size: f32,
    pub material: Material,
}

impl RingSpec {
    pub fn new(ring_radius: f32, ring_size: f32, material: Material) -> Self {
        Self {
            ring_radius,
            ring_size,
            material,
        }
    }

    /// A ring with no thickness or no radius is not drawn.
    pub fn is_visible(&self) -> bool {
        self.ring_size > 0.0 && self.ring_radius > 0.0
    }

    /// Tube radius of a unit-major-radius torus with this ring's proportions.
    pub fn tube_ratio(&self) -> f32 {
        self.ring_size / self.ring_radius
    }
}

/// Translucent shell around a body whose radius pulses over time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HaloSpec {
    /// Phase of the pulse in radians.
    pub phase: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub material: Material,
}

impl HaloSpec {
    /// Angular frequency of the pulse: half a cycle per second.
    const PULSE_RATE: f64 = std::f64::consts::PI;

    pub fn new(phase: f32, min_radius: f32, max_radius: f32, material: Material) -> Self {
        Self {
            phase,
            min_radius,
            max_radius,
            material,
        }
    }

    /// Halo radius at `elapsed` seconds of simulation time.
    pub fn radius_at(&self, elapsed: f64) -> f32 {
        let wave = (Self::PULSE_RATE * elapsed + self.phase as f64).sin() as f32;
        let t = (wave + 1.0) * 0.5;
        self.min_radius + (self.max_radius - self.min_radius) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_orbit_and_wraps_phase() {
        let body = OrbitalBodySpec::new(0.45, Material::default())
            .with_label("Earth")
            .with_orbit(7.0, 365.0, 1.7);
        assert_eq!(body.label.as_deref(), Some("Earth"));
        assert!(body.is_orbiting());
        assert!((body.phase_offset - 0.7).abs() < 1e-12);
    }

    #[test]
    fn stationary_body_is_not_orbiting() {
        let sun = OrbitalBodySpec::new(0.8, Material::default());
        assert!(!sun.is_orbiting());
        assert_eq!(sun.distance, 0.0);
    }

    #[test]
    fn ring_visibility_and_ratio() {
        let ring = RingSpec::new(0.9, 0.14, Material::default());
        assert!(ring.is_visible());
        assert!((ring.tube_ratio() - 0.14 / 0.9).abs() < 1e-6);
        assert!(!RingSpec::new(0.9, 0.0, Material::default()).is_visible());
    }

    #[test]
    fn halo_radius_stays_within_bounds() {
        let halo = HaloSpec::new(0.03, 1.3, 1.5, Material::default());
        for step in 0..200 {
            let r = halo.radius_at(step as f64 * 0.05);
            assert!(r >= 1.3 - 1e-5 && r <= 1.5 + 1e-5, "radius {r}");
        }
    }

    #[test]
    fn halo_pulse_repeats_every_two_seconds() {
        let halo = HaloSpec::new(0.0, 1.1, 1.3, Material::default());
        assert!((halo.radius_at(0.25) - halo.radius_at(2.25)).abs() < 1e-5);
        // sin(0) = 0 sits halfway between the bounds.
        assert!((halo.radius_at(0.0) - 1.2).abs() < 1e-6);
    }
}
