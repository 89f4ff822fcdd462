use crate::api::config::{OrreryConfig, TessellationConfig};
use crate::core::fps::FrameRateCounter;
use crate::core::scene::BodyTree;
use crate::core::time::SimulationClock;
use crate::input::pointer::PointerTracker;
use crate::input::queue::{InputEvent, InputQueue};
use crate::input::toggles::{KeyAction, ToggleFlags};
use crate::renderer::camera::CameraState;
use crate::renderer::mesh::{Tessellation, TessellationAxis};
use crate::renderer::projection::Projection;
use crate::renderer::traits::{FrameSetup, Renderer};
use crate::systems::compose::{compose_world_transforms, ComposeOptions, ComposedFrame};
use crate::systems::render::{render_frame, RenderPass};
use crate::systems::starfield::Starfield;

/// All mutable simulation state, threaded explicitly through each frame.
///
/// Input is applied only in [`SimulationContext::apply_input`], before the
/// clock advances, so every transform in a frame sees the same camera,
/// toggles and time. The clock is the only owner of the animation switch;
/// [`SimulationContext::toggles`] reports it from there.
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub config: OrreryConfig,
    clock: SimulationClock,
    pub camera: CameraState,
    pub projection: Projection,
    toggles: ToggleFlags,
    pub pointer: PointerTracker,
    pub fps: FrameRateCounter,
    /// Current body sphere tessellation, edited with Up/Down.
    pub body_tessellation: Tessellation,
    pub tessellation_axis: TessellationAxis,
    quit_requested: bool,
}

impl SimulationContext {
    /// Fresh state at wall-clock time `now` (seconds).
    pub fn new(config: OrreryConfig, now: f64) -> Self {
        Self {
            clock: SimulationClock::new(now),
            camera: CameraState::from_config(&config.camera),
            projection: Projection::new(config.projection),
            toggles: ToggleFlags::default(),
            pointer: PointerTracker::new(),
            fps: FrameRateCounter::new(now),
            body_tessellation: config.tessellation.body,
            tessellation_axis: TessellationAxis::Slices,
            quit_requested: false,
            config,
        }
    }

    /// Drain and apply every queued event.
    pub fn apply_input(&mut self, queue: &mut InputQueue, now: f64) {
        for event in queue.drain() {
            self.handle_event(event, now);
        }
    }

    pub fn handle_event(&mut self, event: InputEvent, now: f64) {
        match event {
            InputEvent::PointerDown { button, x, y } => self.pointer.press(button, x, y),
            InputEvent::PointerUp { button, x, y } => self.pointer.release(button, x, y),
            InputEvent::PointerMove { x, y } => {
                if let Some(delta) = self.pointer.motion(x, y) {
                    for button in self.pointer.held_buttons() {
                        self.camera.apply_drag(button, delta.x, delta.y);
                    }
                }
            }
            InputEvent::KeyDown { key_code, alt } => {
                if let Some(action) = KeyAction::from_key(key_code, alt) {
                    self.apply_key(action, now);
                }
            }
            InputEvent::Resize { width, height } => {
                self.projection.resize(width, height);
                log::debug!("viewport resized to {width}x{height}");
            }
        }
    }

    pub fn apply_key(&mut self, action: KeyAction, now: f64) {
        let flags = &mut self.toggles;
        match action {
            KeyAction::Quit => {
                log::info!("quit requested");
                self.quit_requested = true;
            }
            KeyAction::ToggleLabels => flags.labels = !flags.labels,
            KeyAction::ToggleTrails => flags.trails = !flags.trails,
            KeyAction::ToggleAutoRotate => flags.auto_rotate = !flags.auto_rotate,
            KeyAction::ToggleAnimation => {
                let enabled = !self.clock.animation_enabled();
                self.clock.set_animation(enabled, now);
                if enabled {
                    self.fps.reset(now);
                }
            }
            KeyAction::ToggleFullscreen => flags.fullscreen = !flags.fullscreen,
            KeyAction::ToggleHelp => flags.help = !flags.help,
            KeyAction::ToggleWireframe => flags.wireframe = !flags.wireframe,
            KeyAction::ToggleNormals => flags.normals = !flags.normals,
            KeyAction::SwitchTessellationAxis => {
                self.tessellation_axis = self.tessellation_axis.toggled();
            }
            KeyAction::IncreaseTessellation => self.adjust_tessellation(1),
            KeyAction::DecreaseTessellation => self.adjust_tessellation(-1),
        }
        log::debug!("{action:?} -> toggles {:#010b}", self.toggles().bits());
    }

    fn adjust_tessellation(&mut self, delta: i32) {
        self.body_tessellation = self.body_tessellation.adjust(self.tessellation_axis, delta);
        log::info!(
            "slices: {} stacks: {}",
            self.body_tessellation.slices(),
            self.body_tessellation.stacks()
        );
    }

    /// Advance the clock to `now`, spin the idle camera and count the frame.
    /// Returns the frame delta in seconds.
    pub fn advance(&mut self, now: f64) -> f64 {
        let delta = self.clock.tick(now);
        if self.clock.animation_enabled() && self.toggles.auto_rotate {
            self.camera
                .apply_idle_rotation(delta as f32, self.config.camera.auto_rotate_deg_per_sec);
        }
        self.fps.record_frame(now);
        delta
    }

    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Current switches, with `animation` taken from the clock.
    pub fn toggles(&self) -> ToggleFlags {
        ToggleFlags {
            animation: self.clock.animation_enabled(),
            ..self.toggles
        }
    }

    pub fn orbit_rate(&self) -> f64 {
        self.config.orbit_rate
    }

    /// World and render transforms for every body at the current time.
    /// Trails are sampled only while they are switched on.
    pub fn compose(&self, tree: &BodyTree) -> ComposedFrame {
        let options = ComposeOptions {
            orbit_rate: self.config.orbit_rate,
            trails: self.toggles.trails.then_some(&self.config.trail),
        };
        compose_world_transforms(tree, self.clock.elapsed(), &options)
    }

    pub fn tessellation(&self) -> TessellationConfig {
        TessellationConfig {
            body: self.body_tessellation,
            ..self.config.tessellation
        }
    }

    pub fn frame_setup(&self) -> FrameSetup {
        FrameSetup {
            view: self.camera.view_transform(),
            projection: self.projection.matrix(),
            light: self.config.light.to_point_light(),
            viewport: [self.projection.width(), self.projection.height()],
        }
    }

    pub fn render<R: Renderer + ?Sized>(
        &self,
        tree: &BodyTree,
        frame: &ComposedFrame,
        starfield: &Starfield,
        renderer: &mut R,
    ) {
        let pass = RenderPass {
            tree,
            frame,
            starfield,
            toggles: self.toggles(),
            tessellation: self.tessellation(),
            fps: self.fps.fps(),
        };
        render_frame(renderer, &self.frame_setup(), &pass);
    }

    /// One complete frame: input, clock, composition, submission.
    pub fn step<R: Renderer + ?Sized>(
        &mut self,
        queue: &mut InputQueue,
        now: f64,
        tree: &BodyTree,
        starfield: &Starfield,
        renderer: &mut R,
    ) -> ComposedFrame {
        self.apply_input(queue, now);
        self.advance(now);
        let frame = self.compose(tree);
        self.render(tree, &frame, starfield, renderer);
        frame
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}
