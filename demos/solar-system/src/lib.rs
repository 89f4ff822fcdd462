use wasm_bindgen::prelude::*;

mod bodies;
mod scenario;
use scenario::SolarSystem;

orrery_web::export_orrery!(SolarSystem, "solar-system");
