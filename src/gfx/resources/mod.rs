// src/gfx/resources/mod.rs
//! GPU resource management
//!
//! Uniform layouts, bind groups and textures for the three binding slots:
//! globals (0), object transform (1) and material (2).

pub mod global_bindings;
pub mod material;
pub mod object_bindings;
pub mod texture_resource;

// Re-export main types
pub use global_bindings::{update_global_ubo, GlobalBindings, GlobalUBO};
pub use material::{Material, MaterialBindings};
pub use object_bindings::{ObjectBindings, ObjectUniform};
pub use texture_resource::{TexturePixels, TextureResource};
