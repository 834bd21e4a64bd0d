//! Per-object transform uniforms (bind group 1)

use cgmath::{Matrix, Matrix4, SquareMatrix};

use crate::{
    gfx::camera::camera_utils::convert_matrix4_to_array,
    wgpu_utils::{
        binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
        binding_types,
        uniform_buffer::UniformBuffer,
    },
};

/// Model matrix plus the matrix that carries normals into world space
///
/// MUST match `ObjectTransform` in the shaders.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
}

impl ObjectUniform {
    pub fn from_model(model: Matrix4<f32>) -> Self {
        Self {
            model: convert_matrix4_to_array(model),
            normal_matrix: convert_matrix4_to_array(normal_matrix(model)),
        }
    }
}

/// `transpose(inverse(model))`; identity when the model is singular
pub fn normal_matrix(model: Matrix4<f32>) -> Matrix4<f32> {
    model
        .invert()
        .map(|inverse| inverse.transpose())
        .unwrap_or_else(Matrix4::identity)
}

pub type ObjectUBO = UniformBuffer<ObjectUniform>;

/// Shared layout for every object's transform bind group
pub struct ObjectBindings {
    bind_group_layout: BindGroupLayoutWithDesc,
}

impl ObjectBindings {
    pub fn new(device: &wgpu::Device) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_vertex(binding_types::uniform())
            .create(device, "Object Transform Bind Group Layout");

        ObjectBindings { bind_group_layout }
    }

    pub fn create_bind_group(&self, device: &wgpu::Device, ubo: &ObjectUBO, label: &str) -> wgpu::BindGroup {
        BindGroupBuilder::new(&self.bind_group_layout)
            .resource(ubo.binding_resource())
            .create(device, label)
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Vector3, Vector4};

    #[test]
    fn test_uniform_size() {
        assert_eq!(std::mem::size_of::<ObjectUniform>(), 128);
    }

    #[test]
    fn test_normal_matrix_ignores_translation() {
        let model = Matrix4::from_translation(Vector3::new(3.0, -2.0, 7.0));
        let n = normal_matrix(model) * Vector4::new(0.0, 1.0, 0.0, 0.0);
        assert!((n.truncate() - Vector3::unit_y()).magnitude() < 1e-6);
    }

    #[test]
    fn test_normal_matrix_keeps_direction_under_uniform_scale() {
        let model = Matrix4::from_translation(Vector3::new(0.0, -0.5, 0.0)) * Matrix4::from_scale(0.5);
        let n = (normal_matrix(model) * Vector4::new(1.0, 1.0, 0.0, 0.0)).truncate();
        assert!((n.normalize() - Vector3::new(1.0, 1.0, 0.0).normalize()).magnitude() < 1e-6);
    }

    #[test]
    fn test_singular_model_falls_back_to_identity() {
        let model = Matrix4::from_scale(0.0);
        assert_eq!(normal_matrix(model), Matrix4::identity());
    }
}
