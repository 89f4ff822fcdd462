//! Text overlays: body labels, the help panel and the FPS readout.
//!
//! Screen positions are in pixels with the origin at the bottom-left
//! corner, y up.

use glam::{Mat4, Vec2, Vec3};
use serde::Serialize;

pub const HELP_PROMPT: &[&str] = &["Press F1 for help"];

pub const HELP_TEXT: &[&str] = &[
    "Rotate: left mouse drag",
    " Scale: right mouse drag up/down",
    "   Pan: middle mouse drag",
    "",
    "Toggle fullScreen: f",
    "Toggle labels: l",
    "Toggle trails: t",
    "Toggle rotate: r",
    "Toggle animation: space",
    "Toggle wireframe: w",
    "Toggle normals: n",
    "Slices/stacks: s, up/down",
    "Quit: escape",
];

/// Pixel distance between help lines.
pub const LINE_HEIGHT: f32 = 20.0;
pub const LEFT_MARGIN: f32 = 5.0;
pub const FPS_ANCHOR: Vec2 = Vec2::new(LEFT_MARGIN, 22.0);

/// How an overlay string should look. The renderer picks the colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    Body,
    Help,
    Fps,
}

impl LabelStyle {
    /// Foreground RGB.
    pub fn color(self) -> [f32; 3] {
        match self {
            LabelStyle::Body => [1.0, 0.0, 0.4],
            LabelStyle::Help => [0.0, 0.9, 0.0],
            LabelStyle::Fps => [0.9, 0.9, 0.0],
        }
    }
}

pub fn help_lines(show_help: bool) -> &'static [&'static str] {
    if show_help {
        HELP_TEXT
    } else {
        HELP_PROMPT
    }
}

/// Baseline of help line `index`, counted from the top of the viewport.
pub fn help_anchor(index: usize, viewport_height: f32) -> Vec2 {
    Vec2::new(LEFT_MARGIN, viewport_height - (index as f32 + 1.0) * LINE_HEIGHT)
}

pub fn fps_text(fps: f32) -> String {
    format!("{fps:4.0} FPS")
}

/// World position of a body label: the corner `(r, r, 0)` of the body's
/// unscaled frame, so the text clears the sphere.
pub fn label_position(world: &Mat4, radius: f32) -> Vec3 {
    world.transform_point3(Vec3::new(radius, radius, 0.0))
}
