use glam::Mat4;

use crate::api::config::{ProjectionConfig, ProjectionMode};
use crate::math::{orthographic, perspective};

/// Viewport size plus the projection built from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub config: ProjectionConfig,
    width: u32,
    height: u32,
}

impl Projection {
    pub fn new(config: ProjectionConfig) -> Self {
        Self {
            config,
            width: config.viewport_width.max(1),
            height: config.viewport_height.max(1),
        }
    }

    /// Track a new viewport size. Zero sizes (minimized windows) are
    /// treated as one pixel.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn matrix(&self) -> Mat4 {
        let aspect = self.aspect();
        let c = &self.config;
        match c.mode {
            ProjectionMode::Perspective => perspective(c.fov_y_degrees, aspect, c.near, c.far),
            ProjectionMode::Orthographic => orthographic(-aspect, aspect, -1.0, 1.0, c.near, c.far),
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(ProjectionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn resize_updates_aspect() {
        let mut p = Projection::default();
        assert!((p.aspect() - 4.0 / 3.0).abs() < 1e-6);
        p.resize(1920, 1080);
        assert!((p.aspect() - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn zero_height_does_not_divide_by_zero() {
        let mut p = Projection::default();
        p.resize(640, 0);
        assert!(p.aspect().is_finite());
        assert!(!p.matrix().is_nan());
    }

    #[test]
    fn orthographic_spans_aspect_by_one() {
        let mut config = ProjectionConfig::default();
        config.mode = ProjectionMode::Orthographic;
        let p = Projection::new(config);
        let corner = p.matrix().project_point3(Vec3::new(p.aspect(), 1.0, -1.0));
        assert!((corner.x - 1.0).abs() < 1e-5 && (corner.y - 1.0).abs() < 1e-5);
    }
}
