//! # Scene Module
//!
//! The room is a fixed list of [`SceneItem`]s: a mesh, where it sits, which
//! program draws it and which texture it samples. Order in the list is the
//! draw order.
//!
//! - [`Scene`] - camera, lights, textures and the draw list
//! - [`SceneItem`] - one draw with its GPU resources
//! - [`Vertex3D`] - interleaved position, normal and texture coordinate

pub mod object;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use object::{DrawObject, Placement, ProgramKind, SceneItem, TextureSlot};
pub use scene::Scene;
pub use vertex::Vertex3D;
