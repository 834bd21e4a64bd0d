use cgmath::{Matrix4, Vector3};
use wgpu::util::DeviceExt;

use crate::gfx::{
    geometry::{GeometryData, MeshKind},
    lighting::LightingProfile,
    resources::{
        material::{Material, MaterialBindings},
        object_bindings::{ObjectBindings, ObjectUBO, ObjectUniform},
        texture_resource::TextureResource,
    },
};

/// Where an item sits in the room: translation then uniform scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vector3<f32>,
    pub scale: f32,
}

impl Placement {
    pub fn new(position: Vector3<f32>, scale: f32) -> Self {
        Self { position, scale }
    }

    /// `translate(position) * scale(scale)`
    pub fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position) * Matrix4::from_scale(self.scale)
    }
}

/// Which shader program draws an item
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgramKind {
    /// Textured, lit by the key and fill lights with the given constants
    Phong(LightingProfile),
    /// Unlit solid white marker
    Lamp,
}

impl ProgramKind {
    /// Name of the pipeline registered for this program
    pub fn pipeline_name(&self) -> &'static str {
        match self {
            ProgramKind::Phong(_) => "Phong",
            ProgramKind::Lamp => "Lamp",
        }
    }
}

/// Surface textures, one per image file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextureSlot {
    Floor,
    Carpet,
    Wood,
    Ceramic,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 4] = [
        TextureSlot::Floor,
        TextureSlot::Carpet,
        TextureSlot::Wood,
        TextureSlot::Ceramic,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            TextureSlot::Floor => "brickwall.jpg",
            TextureSlot::Carpet => "carpet.jpg",
            TextureSlot::Wood => "darkwood.jpg",
            TextureSlot::Ceramic => "abstract-texture.jpg",
        }
    }
}

/// Vertex buffer for one baked mesh. Drawn non-indexed.
pub struct Mesh {
    pub kind: MeshKind,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl Mesh {
    pub fn new(device: &wgpu::Device, kind: MeshKind) -> Self {
        let geometry = GeometryData::from_kind(kind);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", kind.label())),
            contents: bytemuck::cast_slice(&geometry.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            kind,
            vertex_buffer,
            vertex_count: geometry.vertex_count() as u32,
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

// GPU resources owned by a single draw
pub struct ObjectGpuResources {
    pub mesh: Mesh,
    _transform_ubo: ObjectUBO,
    pub transform_bind_group: wgpu::BindGroup,
    /// Present for Phong items only
    pub material: Option<Material>,
}

/// One entry of the fixed draw list
pub struct SceneItem {
    pub name: &'static str,
    pub mesh: MeshKind,
    pub placement: Placement,
    pub program: ProgramKind,
    pub texture: Option<TextureSlot>,
    pub gpu_resources: Option<ObjectGpuResources>,
}

impl SceneItem {
    pub fn new(
        name: &'static str,
        mesh: MeshKind,
        placement: Placement,
        program: ProgramKind,
        texture: Option<TextureSlot>,
    ) -> Self {
        Self {
            name,
            mesh,
            placement,
            program,
            texture,
            gpu_resources: None,
        }
    }

    pub fn uniform(&self) -> ObjectUniform {
        ObjectUniform::from_model(self.placement.model_matrix())
    }

    /// Number of vertices this item draws, always its own mesh's count
    pub fn vertex_count(&self) -> u32 {
        self.mesh.vertex_table().len() as u32
    }

    /// Creates the vertex buffer, transform uniform and (for Phong items) the material
    ///
    /// Placements never change, so the transform is written once here.
    pub fn init_gpu_resources(
        &mut self,
        device: &wgpu::Device,
        object_bindings: &ObjectBindings,
        material_bindings: &MaterialBindings,
        texture: Option<&TextureResource>,
    ) {
        let mesh = Mesh::new(device, self.mesh);
        let transform_ubo = ObjectUBO::new_with_data(device, &self.uniform());
        let transform_bind_group = object_bindings.create_bind_group(
            device,
            &transform_ubo,
            &format!("{} Transform Bind Group", self.name),
        );

        let material = match (self.program, texture) {
            (ProgramKind::Phong(profile), Some(texture)) => Some(Material::new(
                device,
                material_bindings,
                self.name,
                profile,
                texture,
            )),
            (ProgramKind::Phong(_), None) => {
                log::warn!("'{}' uses the Phong program but has no texture", self.name);
                None
            }
            (ProgramKind::Lamp, _) => None,
        };

        self.gpu_resources = Some(ObjectGpuResources {
            mesh,
            _transform_ubo: transform_ubo,
            transform_bind_group,
            material,
        });
    }
}

pub trait DrawObject<'a> {
    fn draw_mesh(&mut self, mesh: &'a Mesh);
    fn draw_item(&mut self, item: &'a SceneItem);
}

impl<'a, 'b> DrawObject<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_mesh(&mut self, mesh: &'b Mesh) {
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.draw(0..mesh.vertex_count, 0..1);
    }

    /// Binds the item's transform (and material, for Phong) then draws it.
    /// Skips items that were never uploaded.
    fn draw_item(&mut self, item: &'b SceneItem) {
        let Some(resources) = &item.gpu_resources else {
            return;
        };

        self.set_bind_group(1, &resources.transform_bind_group, &[]);
        if let ProgramKind::Phong(_) = item.program {
            let Some(material) = &resources.material else {
                return;
            };
            self.set_bind_group(2, material.bind_group(), &[]);
        }
        self.draw_mesh(&resources.mesh);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Vector4};

    #[test]
    fn test_model_matrix_scales_then_translates() {
        let placement = Placement::new(Vector3::new(0.0, -0.5, 0.0), 0.5);
        let p = placement.model_matrix() * Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert!((p.truncate() - Vector3::new(0.5, 0.0, 0.5)).magnitude() < 1e-6);
    }

    #[test]
    fn test_pipeline_names() {
        assert_eq!(ProgramKind::Phong(LightingProfile::STANDARD).pipeline_name(), "Phong");
        assert_eq!(ProgramKind::Lamp.pipeline_name(), "Lamp");
    }

    #[test]
    fn test_texture_files() {
        assert_eq!(TextureSlot::Floor.file_name(), "brickwall.jpg");
        assert_eq!(TextureSlot::Carpet.file_name(), "carpet.jpg");
        assert_eq!(TextureSlot::Wood.file_name(), "darkwood.jpg");
        assert_eq!(TextureSlot::Ceramic.file_name(), "abstract-texture.jpg");
    }

    #[test]
    fn test_item_draws_its_own_vertex_count() {
        let saucer = SceneItem::new(
            "saucer",
            MeshKind::Saucer,
            Placement::new(Vector3::new(0.0, -0.5, 0.0), 0.5),
            ProgramKind::Phong(LightingProfile::CERAMIC),
            Some(TextureSlot::Ceramic),
        );
        assert_eq!(saucer.vertex_count(), 72);
        assert!(saucer.gpu_resources.is_none());
    }
}
