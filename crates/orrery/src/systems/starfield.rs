use glam::Mat4;

use crate::api::config::StarfieldConfig;
use crate::components::material::Material;
use crate::math::{rotate_y, rotate_z, scale, translate};

/// One background star: a small sphere on a shell around the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub radius: f32,
    /// Degrees about the vertical axis.
    pub yaw: f32,
    /// Degrees about Z, lifting the star off the ecliptic.
    pub roll: f32,
}

/// Fixed set of stars, generated once at startup.
#[derive(Debug, Clone, Default)]
pub struct Starfield {
    pub stars: Vec<Star>,
    pub distance: f32,
}

/// Deterministic hash for star placement (no external rand crate).
pub fn star_hash(seed: u32) -> u32 {
    let mut n = seed;
    n = n.wrapping_mul(2654435761);
    n ^= n >> 16;
    n = n.wrapping_mul(2246822519);
    n ^= n >> 13;
    n
}

fn unit(h: u32) -> f32 {
    (h as f64 / u32::MAX as f64) as f32
}

impl Starfield {
    pub fn generate(config: &StarfieldConfig) -> Self {
        let salt = config.seed.wrapping_mul(0x9E37_79B9);
        let stars = (0..config.count as u32)
            .map(|i| {
                let h1 = star_hash(salt ^ i.wrapping_mul(7).wrapping_add(31));
                let h2 = star_hash(salt ^ i.wrapping_mul(13).wrapping_add(97));
                let h3 = star_hash(salt ^ i.wrapping_mul(19).wrapping_add(151));
                Star {
                    radius: config.min_radius + unit(h1) * (config.max_radius - config.min_radius),
                    yaw: unit(h2) * 360.0,
                    roll: unit(h3) * 360.0,
                }
            })
            .collect();
        Self {
            stars,
            distance: config.distance,
        }
    }

    /// Model transform of `star`, including its radius scale.
    pub fn transform(&self, star: &Star) -> Mat4 {
        rotate_y(star.yaw) * rotate_z(star.roll) * translate(self.distance, 0.0, 0.0) * scale(star.radius)
    }

    /// Stars are unlit white points.
    pub fn material() -> Material {
        Material::new([1.0; 4]).with_emission([1.0; 4])
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::origin_of;

    #[test]
    fn star_hash_deterministic() {
        assert_eq!(star_hash(42), star_hash(42));
        assert_ne!(star_hash(0), star_hash(1));
    }

    #[test]
    fn generate_is_deterministic_per_seed() {
        let config = StarfieldConfig::default();
        let a = Starfield::generate(&config);
        let b = Starfield::generate(&config);
        assert_eq!(a.stars, b.stars);
        assert_eq!(a.len(), 1000);

        let other = Starfield::generate(&StarfieldConfig { seed: 8, ..config });
        assert_ne!(a.stars, other.stars);
    }

    #[test]
    fn stars_respect_configured_ranges() {
        let field = Starfield::generate(&StarfieldConfig::default());
        for star in &field.stars {
            assert!(star.radius >= 0.2 - 1e-6 && star.radius <= 0.3 + 1e-6);
            assert!((0.0..=360.0).contains(&star.yaw));
            assert!((0.0..=360.0).contains(&star.roll));
        }
    }

    #[test]
    fn stars_sit_on_the_shell() {
        let field = Starfield::generate(&StarfieldConfig {
            count: 20,
            ..StarfieldConfig::default()
        });
        for star in &field.stars {
            let pos = origin_of(&field.transform(star));
            assert!((pos.length() - 200.0).abs() < 1e-2, "star at {pos}");
        }
    }

    #[test]
    fn zero_count_is_empty() {
        let field = Starfield::generate(&StarfieldConfig {
            count: 0,
            ..StarfieldConfig::default()
        });
        assert!(field.is_empty());
    }
}
