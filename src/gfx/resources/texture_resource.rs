//! Texture resource management for wgpu
//!
//! Depth buffers and the image-backed surface textures of the room.

use std::path::Path;

use crate::error::{Result, TearoomError};

/// Decoded, vertically flipped RGBA8 pixels ready for upload
#[derive(Debug, Clone, PartialEq)]
pub struct TexturePixels {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TexturePixels {
    /// Decodes an image file for use as a surface texture
    ///
    /// Only three and four channel images are accepted. Rows are flipped so
    /// that v = 0 addresses the bottom of the image, as the baked texture
    /// coordinates expect.
    pub fn load(path: &Path) -> Result<Self> {
        let image = image::open(path).map_err(|source| TearoomError::TextureLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let channels = image.color().channel_count();
        if channels != 3 && channels != 4 {
            return Err(TearoomError::UnsupportedChannels {
                path: path.to_path_buf(),
                channels,
            });
        }

        let rgba = image.flipv().into_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }

    /// 2x2 magenta/black checker bound when a texture is missing
    pub fn fallback() -> Self {
        const MAGENTA: [u8; 4] = [255, 0, 255, 255];
        const BLACK: [u8; 4] = [0, 0, 0, 255];
        Self {
            width: 2,
            height: 2,
            rgba: [MAGENTA, BLACK, BLACK, MAGENTA].concat(),
        }
    }
}

/// GPU texture resource containing texture, view, and sampler
pub struct TextureResource {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl TextureResource {
    /// Standard depth buffer format used throughout the renderer
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Texel format of surface textures. Not sRGB: texels are lit as stored.
    pub const COLOR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

    /// Creates a depth texture matching the surface configuration
    pub fn create_depth_texture(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        label: &str,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: config.width.max(1),
            height: config.height.max(1),
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        // Never sampled; kept so every TextureResource has the same shape.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(&format!("{} Sampler", label)),
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }

    /// Uploads decoded pixels with repeat addressing and linear filtering
    pub fn create_from_pixels(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        pixels: &TexturePixels,
        label: &str,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: pixels.width,
            height: pixels.height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::COLOR_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &pixels.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * pixels.width),
                rows_per_image: Some(pixels.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(&format!("{} Sampler", label)),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }

    /// Loads `path`, or binds the fallback checker if that fails
    ///
    /// A missing texture is never fatal; the failure is logged and the
    /// scene keeps rendering.
    pub fn load_or_fallback(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &Path,
        label: &str,
    ) -> Self {
        let pixels = match TexturePixels::load(path) {
            Ok(pixels) => {
                log::debug!(
                    "loaded texture {} ({}x{})",
                    path.display(),
                    pixels.width,
                    pixels.height
                );
                pixels
            }
            Err(err) => {
                log::error!("Failed to load texture {}: {}", path.display(), err);
                TexturePixels::fallback()
            }
        };
        Self::create_from_pixels(device, queue, &pixels, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tearoom-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_fallback_is_opaque_checker() {
        let fallback = TexturePixels::fallback();
        assert_eq!((fallback.width, fallback.height), (2, 2));
        assert_eq!(fallback.rgba.len(), 16);
        assert!(fallback.rgba.chunks(4).all(|px| px[3] == 255));
        assert_eq!(&fallback.rgba[0..4], &fallback.rgba[12..16]);
    }

    #[test]
    fn test_missing_file_reports_texture_load() {
        let err = TexturePixels::load(Path::new("definitely/not/here.jpg")).unwrap_err();
        assert!(matches!(err, TearoomError::TextureLoad { .. }));
        assert!(err.to_string().contains("definitely/not/here.jpg"));
    }

    #[test]
    fn test_rgb_image_is_flipped_and_expanded() {
        let path = temp_path("flip.png");
        let mut img = image::RgbImage::new(1, 2);
        img.put_pixel(0, 0, image::Rgb([255, 0, 0])); // top row
        img.put_pixel(0, 1, image::Rgb([0, 0, 255])); // bottom row
        img.save(&path).unwrap();

        let pixels = TexturePixels::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!((pixels.width, pixels.height), (1, 2));
        // First uploaded row is the bottom of the source image.
        assert_eq!(&pixels.rgba[0..4], &[0, 0, 255, 255]);
        assert_eq!(&pixels.rgba[4..8], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_single_channel_image_is_rejected() {
        let path = temp_path("gray.png");
        image::GrayImage::new(2, 2).save(&path).unwrap();

        let err = TexturePixels::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, TearoomError::UnsupportedChannels { channels: 1, .. }));
    }
}
