pub mod locations;
pub mod render;
pub mod selection;
