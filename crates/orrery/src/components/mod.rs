pub mod body;
pub mod material;
