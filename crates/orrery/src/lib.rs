pub mod api;
pub mod bridge;
pub mod components;
pub mod core;
pub mod input;
pub mod math;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{
    CameraConfig, OrreryConfig, ProjectionConfig, ProjectionMode, StarfieldConfig,
    TessellationConfig, TrailConfig,
};
pub use api::error::OrreryError;
pub use api::scenario::Scenario;
pub use api::types::{BodyId, PointerButton};
pub use bridge::protocol::ProtocolLayout;
pub use components::body::{HaloSpec, OrbitalBodySpec, RingSpec};
pub use components::material::Material;
pub use core::context::SimulationContext;
pub use core::fps::FrameRateCounter;
pub use core::scene::{BodyNode, BodyTree};
pub use core::time::SimulationClock;
pub use input::pointer::PointerTracker;
pub use input::queue::{InputEvent, InputQueue};
pub use input::toggles::{KeyAction, ToggleFlags};
pub use renderer::camera::CameraState;
pub use renderer::instance::{DrawBuffer, DrawInstance, FrameUniforms};
pub use renderer::mesh::{MeshCache, MeshKey, MeshShape, Tessellation, TessellationAxis};
pub use renderer::projection::Projection;
pub use renderer::traits::{DrawStyle, FrameClock, FrameSetup, LabelAnchor, ManualClock, Renderer};
pub use systems::compose::{compose_world_transforms, ComposeOptions, ComposedBody, ComposedFrame, Trail};
pub use systems::lighting::{Attenuation, LightConfig, PointLight};
pub use systems::orbit::{local_transform, orbit_angle_degrees, render_transform};
pub use systems::render::{render_frame, RenderPass};
pub use systems::starfield::{Star, Starfield};
pub use systems::text::LabelStyle;
pub use systems::trail::{trail_points, TrailPoint, TrailSampler};
