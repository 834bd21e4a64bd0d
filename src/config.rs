//! Application configuration
//!
//! Defaults reproduce the classic 800x600 window; a handful of environment
//! variables can override them without recompiling.

use std::path::PathBuf;

pub const ENV_TEXTURE_DIR: &str = "TEAROOM_TEXTURE_DIR";
pub const ENV_WIDTH: &str = "TEAROOM_WIDTH";
pub const ENV_HEIGHT: &str = "TEAROOM_HEIGHT";
pub const ENV_VSYNC: &str = "TEAROOM_VSYNC";

/// Window, surface and asset settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Directory holding the surface textures (brickwall, carpet, darkwood...)
    pub texture_dir: PathBuf,
    pub vsync: bool,
    pub clear_color: wgpu::Color,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Final Project".to_string(),
            width: 800,
            height: 600,
            texture_dir: PathBuf::from("resources/textures"),
            vsync: true,
            clear_color: wgpu::Color::BLACK,
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with any `TEAROOM_*` environment variables
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup
    ///
    /// Values that fail to parse are reported and ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_TEXTURE_DIR) {
            self.texture_dir = PathBuf::from(dir);
        }
        if let Some(width) = parse_var(&lookup, ENV_WIDTH, parse_dimension) {
            self.width = width;
        }
        if let Some(height) = parse_var(&lookup, ENV_HEIGHT, parse_dimension) {
            self.height = height;
        }
        if let Some(vsync) = parse_var(&lookup, ENV_VSYNC, parse_flag) {
            self.vsync = vsync;
        }
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_owned();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    pub fn with_texture_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.texture_dir = dir.into();
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn with_clear_color(mut self, color: wgpu::Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, parse: fn(&str) -> Option<T>) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        log::warn!("ignoring {}={:?}: not a valid value", key, raw);
    }
    parsed
}

fn parse_dimension(value: &str) -> Option<u32> {
    value.parse::<u32>().ok().filter(|v| *v > 0)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_classic_window() {
        let config = AppConfig::default();
        assert_eq!(config.title, "Final Project");
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.texture_dir, PathBuf::from("resources/textures"));
        assert_eq!(config.clear_color, wgpu::Color::BLACK);
        assert_eq!(config.present_mode(), wgpu::PresentMode::AutoVsync);
    }

    #[test]
    fn test_overrides_apply_valid_values() {
        let config = AppConfig::default().with_overrides(lookup_from(&[
            (ENV_TEXTURE_DIR, "/tmp/tex"),
            (ENV_WIDTH, "1024"),
            (ENV_HEIGHT, "768"),
            (ENV_VSYNC, "off"),
        ]));
        assert_eq!(config.texture_dir, PathBuf::from("/tmp/tex"));
        assert_eq!((config.width, config.height), (1024, 768));
        assert!(!config.vsync);
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let config = AppConfig::default().with_overrides(lookup_from(&[
            (ENV_WIDTH, "0"),
            (ENV_HEIGHT, "tall"),
            (ENV_VSYNC, "maybe"),
        ]));
        assert_eq!((config.width, config.height), (800, 600));
        assert!(config.vsync);
    }

    #[test]
    fn test_with_size_rejects_zero() {
        let config = AppConfig::default().with_size(0, 0);
        assert_eq!((config.width, config.height), (1, 1));
    }
}
