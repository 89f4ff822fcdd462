use serde::{Deserialize, Serialize};

use crate::api::error::OrreryError;
use crate::renderer::mesh::Tessellation;
use crate::systems::lighting::LightConfig;

/// Engine configuration, provided by the scenario.
/// Every field has a default, so a partial JSON document is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    /// Simulated days per second of animation time (default: 365 / 20).
    pub orbit_rate: f64,
    pub trail: TrailConfig,
    pub camera: CameraConfig,
    pub projection: ProjectionConfig,
    pub light: LightConfig,
    pub tessellation: TessellationConfig,
    pub starfield: StarfieldConfig,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            orbit_rate: 365.0 / 20.0,
            trail: TrailConfig::default(),
            camera: CameraConfig::default(),
            projection: ProjectionConfig::default(),
            light: LightConfig::default(),
            tessellation: TessellationConfig::default(),
            starfield: StarfieldConfig::default(),
        }
    }
}

impl OrreryConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, OrreryError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the numeric core cannot work with.
    pub fn validate(&self) -> Result<(), OrreryError> {
        if !self.orbit_rate.is_finite() || self.orbit_rate < 0.0 {
            return Err(invalid(format!("orbit_rate must be finite and >= 0, got {}", self.orbit_rate)));
        }
        if self.trail.segments == 0 {
            return Err(invalid("trail.segments must be at least 1".into()));
        }
        if !self.trail.arc_degrees.is_finite() {
            return Err(invalid("trail.arc_degrees must be finite".into()));
        }
        let p = &self.projection;
        if p.near <= 0.0 || p.far <= p.near {
            return Err(invalid(format!("projection range must satisfy 0 < near < far, got {}..{}", p.near, p.far)));
        }
        if p.fov_y_degrees <= 0.0 || p.fov_y_degrees >= 180.0 {
            return Err(invalid(format!("projection.fov_y_degrees out of range: {}", p.fov_y_degrees)));
        }
        let s = &self.starfield;
        if s.min_radius > s.max_radius {
            return Err(invalid("starfield.min_radius exceeds starfield.max_radius".into()));
        }
        if self.camera.distance < 0.0 {
            return Err(invalid("camera.distance must be >= 0".into()));
        }
        Ok(())
    }
}

fn invalid(message: String) -> OrreryError {
    OrreryError::InvalidConfig(message)
}

/// Orbit trail sampling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Number of line segments; the trail has `segments + 1` points.
    pub segments: u32,
    /// How far back along the orbit the trail reaches, in degrees.
    pub arc_degrees: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            segments: 10,
            arc_degrees: 50.0,
        }
    }
}

/// Initial camera placement and idle rotation speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub yaw_degrees: f32,
    pub pitch_degrees: f32,
    pub distance: f32,
    pub pan: [f32; 3],
    pub zoom_scale: f32,
    /// Yaw advance while idle, in degrees per second.
    pub auto_rotate_deg_per_sec: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            yaw_degrees: 0.0,
            pitch_degrees: 25.0,
            distance: 8.0,
            pan: [0.0; 3],
            zoom_scale: 1.0 / 5.0,
            auto_rotate_deg_per_sec: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    Perspective,
    Orthographic,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub mode: ProjectionMode,
    /// Vertical field of view (perspective only).
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Initial viewport size in pixels, replaced by the first resize event.
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            mode: ProjectionMode::Perspective,
            fov_y_degrees: 50.0,
            near: 0.1,
            far: 500.0,
            viewport_width: 800,
            viewport_height: 600,
        }
    }
}

/// Tessellation for each mesh family the scene submits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationConfig {
    pub body: Tessellation,
    pub ring: Tessellation,
    pub star: Tessellation,
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self {
            body: Tessellation::BODY_DEFAULT,
            ring: Tessellation::new(45, 2),
            star: Tessellation::new(4, 4),
        }
    }
}

/// Background star sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub count: usize,
    /// Distance of every star from the origin.
    pub distance: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub seed: u32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            distance: 200.0,
            min_radius: 0.2,
            max_radius: 0.3,
            seed: 7,
        }
    }
}
