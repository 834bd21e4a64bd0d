//! Error types shared across the crate

use std::path::PathBuf;

/// Errors raised while bringing up the window, the GPU or scene resources
#[derive(Debug, thiserror::Error)]
pub enum TearoomError {
    #[error("failed to create event loop")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window")]
    CreateWindow(#[from] winit::error::OsError),

    #[error("failed to create wgpu surface")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("failed to find a suitable GPU adapter")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create wgpu device/queue")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats for this adapter")]
    NoSurfaceFormat,

    #[error("failed to load texture {}", path.display())]
    TextureLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("not implemented to handle image with {channels} channels ({})", path.display())]
    UnsupportedChannels { path: PathBuf, channels: u8 },

    #[error("pipeline setup failed: {0}")]
    Pipeline(String),
}

pub type Result<T> = std::result::Result<T, TearoomError>;
