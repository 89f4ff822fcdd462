use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Surface reflectance handed to the renderer with every mesh submission.
///
/// Wire format (17 floats): diffuse, ambient, specular, emission (RGBA each),
/// then shininess.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Material {
    pub diffuse: [f32; 4],
    pub ambient: [f32; 4],
    pub specular: [f32; 4],
    pub emission: [f32; 4],
    /// Phong specular exponent.
    pub shininess: f32,
}

impl Material {
    pub const FLOATS: usize = 17;

    /// Material lit like its diffuse color: ambient follows diffuse, specular
    /// reuses the diffuse RGB at half strength, no emission.
    pub fn new(diffuse: [f32; 4]) -> Self {
        Self {
            diffuse,
            ambient: diffuse,
            specular: [diffuse[0], diffuse[1], diffuse[2], 0.5],
            emission: [0.0, 0.0, 0.0, 1.0],
            shininess: 0.5,
        }
    }

    /// Opaque material from an RGB diffuse color.
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new([r, g, b, 1.0])
    }

    pub fn with_emission(mut self, emission: [f32; 4]) -> Self {
        self.emission = emission;
        self
    }

    pub fn with_specular(mut self, specular: [f32; 4]) -> Self {
        self.specular = specular;
        self
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    /// Whether this material needs blending.
    pub fn is_translucent(&self) -> bool {
        self.diffuse[3] < 1.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::rgb(0.6, 0.6, 0.8)
    }
}
