//! # Graphics Module
//!
//! Everything needed to put the tea room on screen.
//!
//! - **Camera** ([`camera`]) - fly camera, input controller and projection
//! - **Geometry** ([`geometry`]) - the baked vertex tables
//! - **Lighting** ([`lighting`]) - the two point lights and Phong terms
//! - **Rendering** ([`rendering`]) - device, pipelines and the frame pass
//! - **Resources** ([`resources`]) - uniforms, bind groups and textures
//! - **Scene** ([`scene`]) - the fixed draw list
//!
//! The [`RenderEngine`] is normally created by [`crate::app::TearoomApp`]
//! once a window exists:
//!
//! ```no_run
//! use tearoom::{app::TearoomApp, config::AppConfig};
//!
//! TearoomApp::new(AppConfig::default())?.run()?;
//! # Ok::<(), tearoom::error::TearoomError>(())
//! ```

pub mod camera;
pub mod geometry;
pub mod lighting;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::fly_camera::FlyCamera;
pub use rendering::render_engine::RenderEngine;
