pub mod mime;
pub mod resources;
