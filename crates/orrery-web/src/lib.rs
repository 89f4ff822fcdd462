pub mod runner;

pub use runner::OrreryRunner;

use orrery::FrameClock;

/// Browser frame clock: milliseconds since this clock was created.
///
/// Reads `performance.now()`, which is monotonic. Falls back to
/// `Date.now()` where no window is available.
pub struct JsClock {
    performance: Option<web_sys::Performance>,
    origin_ms: f64,
}

impl JsClock {
    pub fn new() -> Self {
        let performance = web_sys::window().and_then(|window| window.performance());
        let origin_ms = raw_now(performance.as_ref());
        Self {
            performance,
            origin_ms,
        }
    }
}

fn raw_now(performance: Option<&web_sys::Performance>) -> f64 {
    match performance {
        Some(performance) => performance.now(),
        None => js_sys::Date::now(),
    }
}

impl Default for JsClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for JsClock {
    fn now_ms(&self) -> f64 {
        (raw_now(self.performance.as_ref()) - self.origin_ms).max(0.0)
    }
}

/// Generate all `#[wasm_bindgen]` exports for a scenario.
///
/// This macro generates:
/// - `thread_local!` storage for the OrreryRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (init, tick, input handlers, draw-buffer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod scenario;
/// use scenario::MySystem;
///
/// orrery_web::export_orrery!(MySystem, "my-system");
/// ```
///
/// # Arguments
///
/// - `$scenario_type`: A type implementing `orrery::Scenario` with a `new()` constructor
/// - `$name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_orrery {
    ($scenario_type:ty, $name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<$crate::OrreryRunner<$scenario_type, $crate::JsClock>> =
                RefCell::new($crate::OrreryRunner::new(<$scenario_type>::new(), $crate::JsClock::new()));
        }

        fn with_runner<R>(
            f: impl FnOnce(&mut $crate::OrreryRunner<$scenario_type, $crate::JsClock>) -> R,
        ) -> R {
            RUNNER.with(|cell| f(&mut cell.borrow_mut()))
        }

        fn push_pointer(
            button: u32,
            make: impl FnOnce(orrery::PointerButton) -> orrery::InputEvent,
        ) {
            match orrery::PointerButton::from_index(button) {
                Some(button) => with_runner(|r| r.push_input(make(button))),
                None => log::debug!("ignoring pointer button {}", button),
            }
        }

        #[wasm_bindgen]
        pub fn orrery_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            with_runner(|r| r.init());
            log::info!("{}: initialized", $name);
        }

        /// Replace the scenario config. Simulation state restarts.
        #[wasm_bindgen]
        pub fn orrery_load_config(json: &str) {
            with_runner(|r| r.load_config(json));
        }

        #[wasm_bindgen]
        pub fn orrery_tick() {
            with_runner(|r| r.tick());
        }

        #[wasm_bindgen]
        pub fn orrery_pointer_down(button: u32, x: f32, y: f32) {
            push_pointer(button, |button| orrery::InputEvent::PointerDown { button, x, y });
        }

        #[wasm_bindgen]
        pub fn orrery_pointer_up(button: u32, x: f32, y: f32) {
            push_pointer(button, |button| orrery::InputEvent::PointerUp { button, x, y });
        }

        #[wasm_bindgen]
        pub fn orrery_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(orrery::InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn orrery_key_down(key_code: u32, alt: bool) {
            with_runner(|r| r.push_input(orrery::InputEvent::KeyDown { key_code, alt }));
        }

        #[wasm_bindgen]
        pub fn orrery_resize(width: u32, height: u32) {
            with_runner(|r| r.push_input(orrery::InputEvent::Resize { width, height }));
        }

        // ---- Draw buffer accessors ----

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_trail_vertices_ptr() -> *const f32 {
            with_runner(|r| r.trail_vertices_ptr())
        }

        #[wasm_bindgen]
        pub fn get_trail_vertex_count() -> u32 {
            with_runner(|r| r.trail_vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_trail_strips_ptr() -> *const u32 {
            with_runner(|r| r.trail_strips_ptr())
        }

        #[wasm_bindgen]
        pub fn get_trail_strip_count() -> u32 {
            with_runner(|r| r.trail_strip_count())
        }

        #[wasm_bindgen]
        pub fn get_uniforms_ptr() -> *const f32 {
            with_runner(|r| r.uniforms_ptr())
        }

        #[wasm_bindgen]
        pub fn get_mesh_count() -> u32 {
            with_runner(|r| r.mesh_count())
        }

        #[wasm_bindgen]
        pub fn get_mesh_revision() -> u32 {
            with_runner(|r| r.mesh_revision())
        }

        #[wasm_bindgen]
        pub fn get_meshes_json() -> String {
            with_runner(|r| r.meshes_json().to_owned())
        }

        #[wasm_bindgen]
        pub fn get_labels_json() -> String {
            with_runner(|r| r.labels_json().to_owned())
        }

        #[wasm_bindgen]
        pub fn get_protocol_json() -> String {
            with_runner(|r| r.protocol_json())
        }

        // ---- State accessors ----

        #[wasm_bindgen]
        pub fn get_toggle_bits() -> u32 {
            with_runner(|r| r.toggle_bits())
        }

        #[wasm_bindgen]
        pub fn get_elapsed() -> f64 {
            with_runner(|r| r.elapsed())
        }

        #[wasm_bindgen]
        pub fn get_quit_requested() -> bool {
            with_runner(|r| r.quit_requested())
        }
    };
}
