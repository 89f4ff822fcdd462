/// The scene's single point light, sitting at the sun.
///
/// `LightConfig` is the tunable description; `PointLight` is the flat form
/// handed to the renderer once per frame.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Distance falloff: `1 / (constant + linear·d + quadratic·d²)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Attenuation {
    /// No falloff.
    pub const NONE: Attenuation = Attenuation {
        constant: 1.0,
        linear: 0.0,
        quadratic: 0.0,
    };

    pub fn factor(&self, distance: f32) -> f32 {
        let denom = self.constant + self.linear * distance + self.quadratic * distance * distance;
        if denom > 0.0 {
            1.0 / denom
        } else {
            1.0
        }
    }
}

impl Default for Attenuation {
    fn default() -> Self {
        Self {
            constant: 4.0,
            linear: 1.0,
            quadratic: 0.25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    /// Base RGB color of the light.
    pub color: [f32; 3],
    /// Ambient term as a fraction of `color`.
    pub ambient_factor: f32,
    /// Specular term as a fraction of `color`.
    pub specular_factor: f32,
    pub attenuation: Attenuation,
    /// World-space position. The sun sits at the origin.
    pub position: [f32; 3],
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            color: [1.0, 0.95, 0.8],
            ambient_factor: 0.05,
            specular_factor: 0.7,
            attenuation: Attenuation::default(),
            position: [0.0; 3],
        }
    }
}

impl LightConfig {
    fn scaled(&self, factor: f32) -> [f32; 4] {
        [self.color[0] * factor, self.color[1] * factor, self.color[2] * factor, 1.0]
    }

    pub fn ambient(&self) -> [f32; 4] {
        self.scaled(self.ambient_factor)
    }

    pub fn diffuse(&self) -> [f32; 4] {
        self.scaled(1.0)
    }

    pub fn specular(&self) -> [f32; 4] {
        self.scaled(self.specular_factor)
    }

    pub fn to_point_light(&self) -> PointLight {
        PointLight {
            position: [self.position[0], self.position[1], self.position[2], 1.0],
            ambient: self.ambient(),
            diffuse: self.diffuse(),
            specular: self.specular(),
            attenuation: [
                self.attenuation.constant,
                self.attenuation.linear,
                self.attenuation.quadratic,
                0.0,
            ],
        }
    }
}

/// Point light as uploaded to the renderer.
///
/// Wire format (20 floats / 80 bytes):
/// `[pos xyzw, ambient rgba, diffuse rgba, specular rgba, atten c l q pad]`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct PointLight {
    pub position: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub attenuation: [f32; 4],
}

impl PointLight {
    pub const FLOATS: usize = 20;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_light_terms() {
        let light = LightConfig::default();
        let ambient = light.ambient();
        assert!((ambient[0] - 0.05).abs() < 1e-6);
        assert!((ambient[2] - 0.04).abs() < 1e-6);
        let specular = light.specular();
        assert!((specular[1] - 0.665).abs() < 1e-6);
        assert_eq!(light.diffuse(), [1.0, 0.95, 0.8, 1.0]);
    }

    #[test]
    fn attenuation_falls_off_with_distance() {
        let att = Attenuation::default();
        assert!((att.factor(0.0) - 0.25).abs() < 1e-6);
        // 4 + 2 + 0.25·4 = 7
        assert!((att.factor(2.0) - 1.0 / 7.0).abs() < 1e-6);
        assert_eq!(Attenuation::NONE.factor(100.0), 1.0);
    }

    #[test]
    fn point_light_is_20_floats() {
        assert_eq!(std::mem::size_of::<PointLight>(), PointLight::FLOATS * 4);
        let flat = LightConfig::default().to_point_light();
        assert_eq!(flat.position, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(flat.attenuation, [4.0, 1.0, 0.25, 0.0]);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let light: LightConfig =
            serde_json::from_str(r#"{ "ambient_factor": 0.1, "attenuation": { "linear": 0.0 } }"#).unwrap();
        assert_eq!(light.ambient_factor, 0.1);
        assert_eq!(light.specular_factor, 0.7);
        assert_eq!(light.attenuation.constant, 4.0);
        assert_eq!(light.attenuation.linear, 0.0);
    }
}
