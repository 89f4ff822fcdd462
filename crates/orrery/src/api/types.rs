/// Index of a body inside a [`BodyTree`](crate::core::scene::BodyTree).
///
/// Ids are handed out in insertion order, so a parent's id is always
/// smaller than any of its descendants' ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl BodyId {
    /// Position of this body in the tree's flat storage.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Pointer buttons the camera rig reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

impl PointerButton {
    pub const COUNT: usize = 3;

    /// Map a DOM `MouseEvent.button` value (0 = left, 1 = middle, 2 = right).
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::Left),
            1 => Some(Self::Middle),
            2 => Some(Self::Right),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
        }
    }
}
