pub mod render;
pub mod vector;
