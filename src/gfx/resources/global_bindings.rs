//! Global uniform bindings for camera and lighting data
//!
//! Everything here is shared by every draw in a frame and bound to slot 0
//! in both pipelines. It is written once per frame, before the pass starts.

use crate::{
    gfx::{camera::camera_utils::CameraUniform, lighting::LightRig},
    wgpu_utils::{
        binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
        binding_types,
        uniform_buffer::UniformBuffer,
    },
};

/// Flat grey passed through to the shaders alongside the lights
pub const OBJECT_COLOR: [f32; 3] = [0.5, 0.5, 0.5];
/// Texture coordinate multiplier, identity for every surface in the room
pub const UV_SCALE: [f32; 2] = [1.0, 1.0];

/// Global uniform buffer content structure
///
/// MUST match the `Globals` struct in `phong.wgsl` and `lamp.wgsl` exactly.
/// Every vec3 is widened to vec4 to satisfy uniform 16 byte alignment.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUBOContent {
    view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
    view_position: [f32; 4],
    key_light_position: [f32; 4],
    key_light_color: [f32; 4],
    fill_light_position: [f32; 4],
    fill_light_color: [f32; 4],
    object_color: [f32; 4],
    uv_scale: [f32; 4],
}
// Total: 64 + 64 + 7 * 16 = 240 bytes

impl GlobalUBOContent {
    pub fn new(camera: &CameraUniform, lights: &LightRig) -> Self {
        let point = |p: cgmath::Point3<f32>| [p.x, p.y, p.z, 1.0];
        let color = |c: cgmath::Vector3<f32>| [c.x, c.y, c.z, 1.0];

        Self {
            view: camera.view,
            projection: camera.projection,
            view_position: camera.view_position,
            key_light_position: point(lights.key.position),
            key_light_color: color(lights.key.color),
            fill_light_position: point(lights.fill.position),
            fill_light_color: color(lights.fill.color),
            object_color: [OBJECT_COLOR[0], OBJECT_COLOR[1], OBJECT_COLOR[2], 1.0],
            uv_scale: [UV_SCALE[0], UV_SCALE[1], 0.0, 0.0],
        }
    }
}

/// Type alias for the global uniform buffer
pub type GlobalUBO = UniformBuffer<GlobalUBOContent>;

/// Uploads this frame's camera and light data
///
/// Returns whether the buffer actually changed; a still camera costs nothing.
pub fn update_global_ubo(
    ubo: &mut GlobalUBO,
    queue: &wgpu::Queue,
    camera: &CameraUniform,
    lights: &LightRig,
) -> bool {
    ubo.update_content(queue, GlobalUBOContent::new(camera, lights))
}

/// Bind group layout and bind group for global uniforms
pub struct GlobalBindings {
    bind_group_layout: BindGroupLayoutWithDesc,
    bind_group: wgpu::BindGroup,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device, ubo: &GlobalUBO) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_rendering(binding_types::uniform())
            .create(device, "Globals Bind Group Layout");

        let bind_group = BindGroupBuilder::new(&bind_group_layout)
            .resource(ubo.binding_resource())
            .create(device, "Globals Bind Group");

        GlobalBindings {
            bind_group_layout,
            bind_group,
        }
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_size_is_uniform_aligned() {
        assert_eq!(std::mem::size_of::<GlobalUBOContent>(), 240);
        assert_eq!(std::mem::size_of::<GlobalUBOContent>() % 16, 0);
    }

    #[test]
    fn test_content_carries_key_and_fill_slots() {
        let camera = CameraUniform::default();
        let content = GlobalUBOContent::new(&camera, &LightRig::room());
        assert_eq!(content.key_light_position, [0.0, 0.5, 20.0, 1.0]);
        assert_eq!(content.key_light_color, [0.8, 0.2, 0.2, 1.0]);
        assert_eq!(content.fill_light_position, [0.0, 0.5, 0.0, 1.0]);
        assert_eq!(content.fill_light_color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(content.object_color, [0.5, 0.5, 0.5, 1.0]);
        assert_eq!(content.uv_scale, [1.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_content_copies_camera_matrices() {
        let mut camera = CameraUniform::default();
        camera.view[3] = [1.0, 2.0, 3.0, 1.0];
        camera.projection[0][0] = 2.0;
        camera.view_position = [4.0, 5.0, 6.0, 1.0];
        let content = GlobalUBOContent::new(&camera, &LightRig::room());
        assert_eq!(content.view, camera.view);
        assert_eq!(content.projection, camera.projection);
        assert_eq!(content.view_position, [4.0, 5.0, 6.0, 1.0]);
    }
}
