//! WGPU-based rendering engine for the tea room
//!
//! Owns the surface, device and queue, the shared bind group layouts and
//! the two pipelines. A frame is a single pass over the scene's draw list.

use std::{ops::Range, path::Path, sync::Arc};
use wgpu::{SurfaceError, TextureFormat};

use crate::{
    config::AppConfig,
    error::{Result, TearoomError},
    gfx::{
        resources::{
            global_bindings::{update_global_ubo, GlobalBindings, GlobalUBO},
            material::MaterialBindings,
            object_bindings::ObjectBindings,
            texture_resource::TextureResource,
        },
        scene::{
            object::{DrawObject, SceneItem},
            scene::Scene,
        },
    },
};

use super::pipeline_manager::{PipelineConfig, PipelineManager};

/// High-level response after a surface error
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame
    Reconfigured,
    /// Transient error; skip the current frame
    SkipFrame,
    /// Out of memory; the application should exit
    Fatal,
}

/// Core rendering engine managing GPU resources and draw calls
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    clear_color: wgpu::Color,
    pub pipeline_manager: PipelineManager,
    global_ubo: GlobalUBO,
    global_bindings: GlobalBindings,
    object_bindings: ObjectBindings,
    material_bindings: MaterialBindings,
}

impl RenderEngine {
    /// Creates a new render engine for the given window
    ///
    /// Brings up wgpu, configures the surface and depth buffer, then builds
    /// the Phong and Lamp pipelines.
    ///
    /// # Arguments
    /// * `window` - Window surface target for rendering
    /// * `width` - Initial surface width in pixels
    /// * `height` - Initial surface height in pixels
    /// * `app_config` - Present mode and clear color
    ///
    /// # Errors
    /// Fails when no adapter or device is available, or a pipeline does not validate.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
        app_config: &AppConfig,
    ) -> Result<RenderEngine> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let info = adapter.get_info();
        log::info!(
            "using adapter {} ({:?}, {:?})",
            info.name,
            info.backend,
            info.device_type
        );

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;
        let device = Arc::new(device);
        let queue = Arc::new(queue);

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = choose_surface_format(&surface_capabilities.formats)
            .ok_or(TearoomError::NoSurfaceFormat)?;
        let alpha_mode = surface_capabilities
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: app_config.present_mode(),
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::debug!(
            "surface configured: {}x{} {:?} {:?}",
            config.width,
            config.height,
            format,
            config.present_mode
        );

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        let global_ubo = GlobalUBO::new(&device);
        let global_bindings = GlobalBindings::new(&device, &global_ubo);
        let object_bindings = ObjectBindings::new(&device);
        let material_bindings = MaterialBindings::new(&device);

        let mut pipeline_manager = PipelineManager::new(device.clone());
        pipeline_manager.load_shader("phong", include_str!("phong.wgsl"))?;
        pipeline_manager.load_shader("lamp", include_str!("lamp.wgsl"))?;

        pipeline_manager.register_pipeline(
            "Phong",
            PipelineConfig::default()
                .with_label("Phong Pipeline")
                .with_shader("phong")
                .with_bind_group_layouts(vec![
                    global_bindings.bind_group_layout().clone(),
                    object_bindings.bind_group_layout().clone(),
                    material_bindings.bind_group_layout().clone(),
                ])
                .with_color_format(format)
                .with_depth_format(TextureResource::DEPTH_FORMAT),
        );
        pipeline_manager.register_pipeline(
            "Lamp",
            PipelineConfig::default()
                .with_label("Lamp Pipeline")
                .with_shader("lamp")
                .with_bind_group_layouts(vec![
                    global_bindings.bind_group_layout().clone(),
                    object_bindings.bind_group_layout().clone(),
                ])
                .with_color_format(format)
                .with_depth_format(TextureResource::DEPTH_FORMAT),
        );
        pipeline_manager.create_all_pipelines()?;

        let stats = pipeline_manager.get_stats();
        log::info!(
            "{} pipelines from {} shaders ready",
            stats.total_pipelines,
            stats.loaded_shaders
        );

        Ok(RenderEngine {
            surface,
            device,
            queue,
            config,
            depth_texture,
            clear_color: app_config.clear_color,
            pipeline_manager,
            global_ubo,
            global_bindings,
            object_bindings,
            material_bindings,
        })
    }

    /// Loads the scene's textures from `texture_dir` and uploads every item
    pub fn prepare_scene(&self, scene: &mut Scene, texture_dir: &Path) {
        scene.init_gpu_resources(
            &self.device,
            &self.queue,
            &self.object_bindings,
            &self.material_bindings,
            texture_dir,
        );
    }

    /// Draws one frame of the scene
    ///
    /// Camera and lights are uploaded first, then the color and depth
    /// targets are cleared and the draw list is walked in order. The pipeline
    /// is only rebound when consecutive items use different programs.
    pub fn render_frame(&mut self, scene: &Scene) -> std::result::Result<(), SurfaceErrorAction> {
        update_global_ubo(
            &mut self.global_ubo,
            &self.queue,
            &scene.camera_manager.uniform,
            &scene.lights,
        );

        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(err) => {
                log::warn!("failed to acquire surface texture: {}", err);
                return Err(self.handle_surface_error(err));
            }
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Room Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            for (pipeline_name, range) in draw_batches(&scene.items) {
                let Some(pipeline) = self.pipeline_manager.get_pipeline(pipeline_name) else {
                    log::warn!("pipeline '{}' missing, skipping {} draws", pipeline_name, range.len());
                    continue;
                };
                render_pass.set_pipeline(pipeline);
                render_pass.set_bind_group(0, self.global_bindings.bind_group(), &[]);

                for item in &scene.items[range] {
                    render_pass.draw_item(item);
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }

    /// Converts a `SurfaceError` into a higher-level action
    pub fn handle_surface_error(&mut self, err: SurfaceError) -> SurfaceErrorAction {
        let action = classify_surface_error(&err);
        if action == SurfaceErrorAction::Reconfigured {
            self.surface.configure(&self.device, &self.config);
        }
        action
    }

    /// Reconfigures the surface and depth buffer; zero sizes are ignored
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);

        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
    }
}

/// Prefers a linear (non-sRGB) format; textures are sampled as stored
fn choose_surface_format(formats: &[TextureFormat]) -> Option<TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first().copied())
}

fn classify_surface_error(err: &SurfaceError) -> SurfaceErrorAction {
    match err {
        SurfaceError::Lost | SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        SurfaceError::Timeout | SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

/// Splits the draw list into runs that share a pipeline
fn draw_batches(items: &[SceneItem]) -> Vec<(&'static str, Range<usize>)> {
    let mut batches: Vec<(&'static str, Range<usize>)> = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let name = item.program.pipeline_name();
        match batches.last_mut() {
            Some((current, range)) if *current == name => range.end = index + 1,
            _ => batches.push((name, index..index + 1)),
        }
    }
    batches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{
        camera::{
            camera_controller::CameraController, camera_utils::CameraManager,
            fly_camera::FlyCamera,
        },
        resources::{
            global_bindings::GlobalUBOContent, material::MaterialUniform,
            object_bindings::ObjectUniform,
        },
    };

    /// Parses and validates a shader, returning the byte size of each named struct
    fn shader_struct_sizes(source: &str, names: &[&str]) -> Vec<u32> {
        let module = naga::front::wgsl::parse_str(source).unwrap();
        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        )
        .validate(&module)
        .unwrap();

        let mut layouter = naga::proc::Layouter::default();
        layouter.update(module.to_ctx()).unwrap();

        names
            .iter()
            .map(|name| {
                let (handle, _) = module
                    .types
                    .iter()
                    .find(|(_, ty)| ty.name.as_deref() == Some(*name))
                    .unwrap_or_else(|| panic!("struct {} not declared", name));
                layouter[handle].size
            })
            .collect()
    }

    #[test]
    fn test_shader_uniforms_match_rust_layouts() {
        let globals = std::mem::size_of::<GlobalUBOContent>() as u32;
        let transform = std::mem::size_of::<ObjectUniform>() as u32;
        let material = std::mem::size_of::<MaterialUniform>() as u32;

        assert_eq!(
            shader_struct_sizes(
                include_str!("phong.wgsl"),
                &["Globals", "ObjectTransform", "Material"]
            ),
            vec![globals, transform, material]
        );
        assert_eq!(
            shader_struct_sizes(include_str!("lamp.wgsl"), &["Globals", "ObjectTransform"]),
            vec![globals, transform]
        );
    }

    #[test]
    fn test_room_needs_two_pipeline_switches() {
        let camera = CameraManager::new(FlyCamera::default(), CameraController::new(), 800, 600);
        let scene = Scene::room(camera);
        let batches = draw_batches(&scene.items);
        assert_eq!(batches, vec![("Phong", 0..5), ("Lamp", 5..7)]);
    }

    #[test]
    fn test_empty_draw_list_has_no_batches() {
        assert!(draw_batches(&[]).is_empty());
    }

    #[test]
    fn test_surface_error_actions() {
        assert_eq!(
            classify_surface_error(&SurfaceError::Lost),
            SurfaceErrorAction::Reconfigured
        );
        assert_eq!(
            classify_surface_error(&SurfaceError::Outdated),
            SurfaceErrorAction::Reconfigured
        );
        assert_eq!(
            classify_surface_error(&SurfaceError::OutOfMemory),
            SurfaceErrorAction::Fatal
        );
        assert_eq!(
            classify_surface_error(&SurfaceError::Timeout),
            SurfaceErrorAction::SkipFrame
        );
    }

    #[test]
    fn test_prefers_linear_surface_format() {
        let formats = [TextureFormat::Bgra8UnormSrgb, TextureFormat::Bgra8Unorm];
        assert_eq!(choose_surface_format(&formats), Some(TextureFormat::Bgra8Unorm));

        let srgb_only = [TextureFormat::Rgba8UnormSrgb];
        assert_eq!(
            choose_surface_format(&srgb_only),
            Some(TextureFormat::Rgba8UnormSrgb)
        );
        assert_eq!(choose_surface_format(&[]), None);
    }
}
