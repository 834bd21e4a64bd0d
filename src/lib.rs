//! Tea Room
//!
//! A small fixed scene rendered with wgpu: a table set with a teacup and
//! saucer on a carpet, lit by a lamp and a window, explored with a fly camera.

pub mod app;
pub mod config;
pub mod error;
pub mod gfx;
pub mod logging;
pub mod time;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::TearoomApp;
pub use config::AppConfig;
pub use error::{Result, TearoomError};
