/// Boolean switches flipped from the keyboard. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleFlags {
    pub labels: bool,
    pub trails: bool,
    pub auto_rotate: bool,
    pub animation: bool,
    pub help: bool,
    pub wireframe: bool,
    pub normals: bool,
    pub fullscreen: bool,
}

impl Default for ToggleFlags {
    fn default() -> Self {
        Self {
            labels: true,
            trails: true,
            auto_rotate: true,
            animation: true,
            help: false,
            wireframe: false,
            normals: false,
            fullscreen: false,
        }
    }
}

impl ToggleFlags {
    /// Bit 0 labels, 1 trails, 2 auto-rotate, 3 animation, 4 help,
    /// 5 wireframe, 6 normals, 7 fullscreen.
    pub fn bits(&self) -> u32 {
        [
            self.labels,
            self.trails,
            self.auto_rotate,
            self.animation,
            self.help,
            self.wireframe,
            self.normals,
            self.fullscreen,
        ]
        .iter()
        .enumerate()
        .fold(0, |acc, (i, on)| acc | ((*on as u32) << i))
    }
}

/// DOM `keyCode` values for the bound keys.
pub mod keys {
    pub const ENTER: u32 = 13;
    pub const ESCAPE: u32 = 27;
    pub const SPACE: u32 = 32;
    pub const UP: u32 = 38;
    pub const DOWN: u32 = 40;
    pub const F: u32 = 70;
    pub const L: u32 = 76;
    pub const N: u32 = 78;
    pub const Q: u32 = 81;
    pub const R: u32 = 82;
    pub const S: u32 = 83;
    pub const T: u32 = 84;
    pub const W: u32 = 87;
    pub const F1: u32 = 112;
}

/// What a key press asks the simulation to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    ToggleLabels,
    ToggleTrails,
    ToggleAutoRotate,
    ToggleAnimation,
    ToggleFullscreen,
    ToggleHelp,
    ToggleWireframe,
    ToggleNormals,
    /// Switch which tessellation count Up/Down edit.
    SwitchTessellationAxis,
    IncreaseTessellation,
    DecreaseTessellation,
}

impl KeyAction {
    /// Map a key press to an action. Enter only counts with Alt held.
    pub fn from_key(key_code: u32, alt: bool) -> Option<Self> {
        use keys::*;
        let action = match key_code {
            ESCAPE | Q => KeyAction::Quit,
            L => KeyAction::ToggleLabels,
            T => KeyAction::ToggleTrails,
            R => KeyAction::ToggleAutoRotate,
            SPACE => KeyAction::ToggleAnimation,
            F => KeyAction::ToggleFullscreen,
            ENTER if alt => KeyAction::ToggleFullscreen,
            F1 => KeyAction::ToggleHelp,
            W => KeyAction::ToggleWireframe,
            N => KeyAction::ToggleNormals,
            S => KeyAction::SwitchTessellationAxis,
            UP => KeyAction::IncreaseTessellation,
            DOWN => KeyAction::DecreaseTessellation,
            _ => return None,
        };
        Some(action)
    }
}
