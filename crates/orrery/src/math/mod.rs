pub mod transform;

pub use transform::{
    origin_of, orthographic, perspective, rotate_x, rotate_y, rotate_z, scale, translate,
    translate_vec, wrap_degrees,
};
