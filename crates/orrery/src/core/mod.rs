pub mod context;
pub mod fps;
pub mod scene;
pub mod time;
