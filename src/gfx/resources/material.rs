//! Surface materials: lighting profile, texture and sampler (bind group 2)
//!
//! One material exists per Phong draw. Textures are shared between
//! materials; only the small profile uniform is per draw.

use wgpu::Device;

use crate::{
    gfx::{lighting::LightingProfile, resources::texture_resource::TextureResource},
    wgpu_utils::{
        binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
        binding_types,
        uniform_buffer::UniformBuffer,
    },
};

/// GPU uniform data for materials
///
/// Each light slot packs `[ambient_strength, specular_intensity, highlight_size, 0]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub key_terms: [f32; 4],
    pub fill_terms: [f32; 4],
}

impl From<&LightingProfile> for MaterialUniform {
    fn from(profile: &LightingProfile) -> Self {
        let pack = |t: &crate::gfx::lighting::LightTerms| {
            [t.ambient_strength, t.specular_intensity, t.highlight_size, 0.0]
        };
        Self {
            key_terms: pack(&profile.key),
            fill_terms: pack(&profile.fill),
        }
    }
}

pub type MaterialUBO = UniformBuffer<MaterialUniform>;

/// Shared layout for material bind groups
pub struct MaterialBindings {
    bind_group_layout: BindGroupLayoutWithDesc,
}

impl MaterialBindings {
    pub fn new(device: &Device) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_fragment(binding_types::uniform())
            .next_binding_fragment(binding_types::texture_2d())
            .next_binding_fragment(binding_types::sampler(wgpu::SamplerBindingType::Filtering))
            .create(device, "Material Bind Group Layout");

        MaterialBindings { bind_group_layout }
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }
}

/// A surface's GPU state: profile uniform plus the bind group tying it to a texture
pub struct Material {
    _ubo: MaterialUBO,
    bind_group: wgpu::BindGroup,
}

impl Material {
    pub fn new(
        device: &Device,
        bindings: &MaterialBindings,
        name: &str,
        profile: LightingProfile,
        texture: &TextureResource,
    ) -> Self {
        let ubo = MaterialUBO::new_with_data(device, &MaterialUniform::from(&profile));
        let bind_group = BindGroupBuilder::new(&bindings.bind_group_layout)
            .resource(ubo.binding_resource())
            .texture(&texture.view)
            .sampler(&texture.sampler)
            .create(device, &format!("{} Material Bind Group", name));

        Self {
            _ubo: ubo,
            bind_group,
        }
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_packs_both_light_slots() {
        let u = MaterialUniform::from(&LightingProfile::CERAMIC);
        assert_eq!(u.key_terms, [0.5, 1.0, 16.0, 0.0]);
        assert_eq!(u.fill_terms, [1.0, 5.0, 16.0, 0.0]);
        assert_eq!(std::mem::size_of::<MaterialUniform>(), 32);
    }
}
