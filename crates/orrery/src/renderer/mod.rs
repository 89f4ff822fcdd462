pub mod camera;
pub mod instance;
pub mod mesh;
pub mod projection;
pub mod traits;

// Re-export key types for convenient access
pub use traits::{DrawStyle, FrameClock, FrameSetup, LabelAnchor, ManualClock, Renderer};
