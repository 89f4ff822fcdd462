pub mod compose;
pub mod lighting;
pub mod orbit;
pub mod render;
pub mod starfield;
pub mod text;
pub mod trail;
