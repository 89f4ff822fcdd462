use orrery::{
    BodyTree, DrawBuffer, FrameClock, InputEvent, InputQueue, OrreryConfig, ProtocolLayout,
    Scenario, SimulationContext, Starfield,
};

/// Generic scenario runner that wires up the frame loop.
///
/// Each concrete scenario (e.g., `solar-system`) creates a `thread_local!`
/// OrreryRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
pub struct OrreryRunner<S: Scenario, C: FrameClock> {
    scenario: S,
    clock: C,
    ctx: SimulationContext,
    tree: BodyTree,
    starfield: Starfield,
    input: InputQueue,
    draw: DrawBuffer,
    initialized: bool,
    /// Labels of the last frame, serialized for JS.
    labels_json: String,
    /// Mesh descriptors, re-serialized only when the mesh revision moves.
    meshes_json: String,
    meshes_revision: Option<u32>,
}

impl<S: Scenario, C: FrameClock> OrreryRunner<S, C> {
    pub fn new(scenario: S, clock: C) -> Self {
        let ctx = SimulationContext::new(scenario.config(), seconds(&clock));
        Self {
            scenario,
            clock,
            ctx,
            tree: BodyTree::new(),
            starfield: Starfield::default(),
            input: InputQueue::new(),
            draw: DrawBuffer::new(),
            initialized: false,
            labels_json: String::from("[]"),
            meshes_json: String::from("[]"),
            meshes_revision: None,
        }
    }

    /// Replace the config from JSON, restarting the simulation state.
    /// Invalid JSON is logged and the current config kept.
    pub fn load_config(&mut self, json: &str) {
        match OrreryConfig::from_json(json) {
            Ok(config) => {
                self.ctx = SimulationContext::new(config, seconds(&self.clock));
                if self.initialized {
                    self.starfield = Starfield::generate(&self.ctx.config.starfield);
                }
            }
            Err(err) => log::warn!("{err}; keeping current config"),
        }
    }

    /// Build the body tree and starfield. Call once after construction.
    pub fn init(&mut self) {
        self.tree = BodyTree::from_roots(self.scenario.bodies());
        self.starfield = Starfield::generate(&self.ctx.config.starfield);
        self.ctx = SimulationContext::new(self.ctx.config.clone(), seconds(&self.clock));
        self.initialized = true;
        log::info!(
            "scene ready: {} bodies, {} stars",
            self.tree.len(),
            self.starfield.len()
        );
    }

    /// Queue an input event for the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame at the clock's current time.
    pub fn tick(&mut self) {
        if !self.initialized {
            return;
        }
        let now = seconds(&self.clock);
        self.ctx
            .step(&mut self.input, now, &self.tree, &self.starfield, &mut self.draw);

        self.labels_json = self.draw.labels_json().unwrap_or_else(|err| {
            log::warn!("failed to serialize labels: {err}");
            String::from("[]")
        });
        let revision = self.draw.mesh_revision();
        if self.meshes_revision != Some(revision) {
            match self.draw.meshes_json() {
                Ok(json) => {
                    self.meshes_json = json;
                    self.meshes_revision = Some(revision);
                }
                Err(err) => log::warn!("failed to serialize meshes: {err}"),
            }
        }
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn context(&self) -> &SimulationContext {
        &self.ctx
    }

    pub fn tree(&self) -> &BodyTree {
        &self.tree
    }

    pub fn draw_buffer(&self) -> &DrawBuffer {
        &self.draw
    }

    // ---- Pointer accessors for wasm memory reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.draw.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.draw.instance_count()
    }

    pub fn trail_vertices_ptr(&self) -> *const f32 {
        self.draw.trail_vertices_ptr()
    }

    pub fn trail_vertex_count(&self) -> u32 {
        self.draw.trail_vertex_count()
    }

    pub fn trail_strips_ptr(&self) -> *const u32 {
        self.draw.trail_strips_ptr()
    }

    pub fn trail_strip_count(&self) -> u32 {
        self.draw.trail_strip_count()
    }

    pub fn uniforms_ptr(&self) -> *const f32 {
        self.draw.uniforms_ptr()
    }

    pub fn mesh_count(&self) -> u32 {
        self.draw.mesh_count()
    }

    pub fn mesh_revision(&self) -> u32 {
        self.draw.mesh_revision()
    }

    pub fn meshes_json(&self) -> &str {
        &self.meshes_json
    }

    pub fn labels_json(&self) -> &str {
        &self.labels_json
    }

    pub fn protocol_json(&self) -> String {
        ProtocolLayout::current().to_json().unwrap_or_else(|err| {
            log::warn!("failed to serialize protocol layout: {err}");
            String::new()
        })
    }

    pub fn toggle_bits(&self) -> u32 {
        self.ctx.toggles().bits()
    }

    pub fn elapsed(&self) -> f64 {
        self.ctx.elapsed()
    }

    pub fn quit_requested(&self) -> bool {
        self.ctx.quit_requested()
    }
}

fn seconds<C: FrameClock>(clock: &C) -> f64 {
    clock.now_ms() / 1000.0
}
