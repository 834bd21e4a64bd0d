//! Core rendering functionality
//!
//! Pipeline setup and the per-frame pass over the scene.

pub mod pipeline_manager;
pub mod render_engine;

// Re-export main types
pub use pipeline_manager::{PipelineConfig, PipelineManager, PipelineStats};
pub use render_engine::{RenderEngine, SurfaceErrorAction};
