use std::{collections::BTreeMap, path::Path};

use cgmath::{EuclideanSpace, Vector3};

use crate::gfx::{
    camera::camera_utils::CameraManager,
    geometry::MeshKind,
    lighting::{LightRig, LightingProfile, PointLight},
    resources::{
        material::MaterialBindings, object_bindings::ObjectBindings,
        texture_resource::TextureResource,
    },
};

use super::object::{Placement, ProgramKind, SceneItem, TextureSlot};

/// The room: camera, lights, textures and the fixed draw list
///
/// Items are drawn in `items` order every frame; nothing is added or
/// removed after construction.
pub struct Scene {
    pub camera_manager: CameraManager,
    pub lights: LightRig,
    pub items: Vec<SceneItem>,
    textures: BTreeMap<TextureSlot, TextureResource>,
}

impl Scene {
    /// Builds the tea table scene
    pub fn room(camera_manager: CameraManager) -> Self {
        let table = Placement::new(Vector3::new(0.0, 0.0, 0.0), 2.0);
        let carpet = Placement::new(Vector3::new(0.0, 0.1, 0.0), 2.0);
        let china = Placement::new(Vector3::new(0.0, -0.5, 0.0), 0.5);
        let marker_scale = table.scale;

        let standard = ProgramKind::Phong(LightingProfile::STANDARD);
        let ceramic = ProgramKind::Phong(LightingProfile::CERAMIC);

        let marker_at = |light: PointLight| Placement::new(light.position.to_vec(), marker_scale);

        let items = vec![
            SceneItem::new("floor", MeshKind::FloorPlane, table, standard, Some(TextureSlot::Floor)),
            SceneItem::new("carpet", MeshKind::Carpet, carpet, standard, Some(TextureSlot::Carpet)),
            SceneItem::new("table", MeshKind::Table, table, standard, Some(TextureSlot::Wood)),
            SceneItem::new("teacup", MeshKind::Teacup, china, ceramic, Some(TextureSlot::Ceramic)),
            SceneItem::new("saucer", MeshKind::Saucer, china, ceramic, Some(TextureSlot::Ceramic)),
            SceneItem::new(
                "window marker",
                MeshKind::Window,
                marker_at(PointLight::window()),
                ProgramKind::Lamp,
                None,
            ),
            SceneItem::new(
                "lamp marker",
                MeshKind::Window,
                marker_at(PointLight::lamp()),
                ProgramKind::Lamp,
                None,
            ),
        ];

        Self {
            camera_manager,
            lights: LightRig::room(),
            items,
            textures: BTreeMap::new(),
        }
    }

    /// Per-frame update: applies input and refreshes camera matrices
    pub fn update(&mut self, dt: f32) {
        self.camera_manager.update(dt);
    }

    /// Texture slots referenced by the draw list, without duplicates
    pub fn texture_slots(&self) -> Vec<TextureSlot> {
        let mut slots: Vec<TextureSlot> = self.items.iter().filter_map(|i| i.texture).collect();
        slots.sort();
        slots.dedup();
        slots
    }

    /// Loads textures from `texture_dir` and uploads every item
    pub fn init_gpu_resources(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        object_bindings: &ObjectBindings,
        material_bindings: &MaterialBindings,
        texture_dir: &Path,
    ) {
        for slot in self.texture_slots() {
            let path = texture_dir.join(slot.file_name());
            let texture =
                TextureResource::load_or_fallback(device, queue, &path, slot.file_name());
            self.textures.insert(slot, texture);
        }

        for item in self.items.iter_mut() {
            let texture = item.texture.and_then(|slot| self.textures.get(&slot));
            item.init_gpu_resources(device, object_bindings, material_bindings, texture);
        }

        log::info!(
            "scene ready: {} draws, {} textures",
            self.items.len(),
            self.textures.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::camera::{camera_controller::CameraController, fly_camera::FlyCamera};

    fn room() -> Scene {
        let camera = CameraManager::new(FlyCamera::default(), CameraController::new(), 800, 600);
        Scene::room(camera)
    }

    #[test]
    fn test_draw_order_is_fixed() {
        let scene = room();
        let meshes: Vec<MeshKind> = scene.items.iter().map(|i| i.mesh).collect();
        assert_eq!(
            meshes,
            vec![
                MeshKind::FloorPlane,
                MeshKind::Carpet,
                MeshKind::Table,
                MeshKind::Teacup,
                MeshKind::Saucer,
                MeshKind::Window,
                MeshKind::Window,
            ]
        );
    }

    #[test]
    fn test_placements() {
        let scene = room();
        let placements: Vec<(Vector3<f32>, f32)> = scene
            .items
            .iter()
            .map(|i| (i.placement.position, i.placement.scale))
            .collect();
        assert_eq!(
            placements,
            vec![
                (Vector3::new(0.0, 0.0, 0.0), 2.0),
                (Vector3::new(0.0, 0.1, 0.0), 2.0),
                (Vector3::new(0.0, 0.0, 0.0), 2.0),
                (Vector3::new(0.0, -0.5, 0.0), 0.5),
                (Vector3::new(0.0, -0.5, 0.0), 0.5),
                (Vector3::new(0.0, 0.5, 0.0), 2.0),
                (Vector3::new(0.0, 0.5, 20.0), 2.0),
            ]
        );
    }

    #[test]
    fn test_programs_and_textures_pair_up() {
        let scene = room();
        for item in &scene.items {
            match item.program {
                ProgramKind::Phong(_) => assert!(item.texture.is_some(), "{}", item.name),
                ProgramKind::Lamp => assert!(item.texture.is_none(), "{}", item.name),
            }
        }
        let china: Vec<&SceneItem> = scene
            .items
            .iter()
            .filter(|i| matches!(i.mesh, MeshKind::Teacup | MeshKind::Saucer))
            .collect();
        assert!(china
            .iter()
            .all(|i| i.program == ProgramKind::Phong(LightingProfile::CERAMIC)));
        assert!(china.iter().all(|i| i.texture == Some(TextureSlot::Ceramic)));
    }

    #[test]
    fn test_surfaces_use_expected_textures() {
        let scene = room();
        let textures: Vec<Option<TextureSlot>> = scene.items.iter().map(|i| i.texture).collect();
        assert_eq!(
            textures,
            vec![
                Some(TextureSlot::Floor),
                Some(TextureSlot::Carpet),
                Some(TextureSlot::Wood),
                Some(TextureSlot::Ceramic),
                Some(TextureSlot::Ceramic),
                None,
                None,
            ]
        );
        assert_eq!(scene.texture_slots(), TextureSlot::ALL.to_vec());
    }

    #[test]
    fn test_saucer_draws_its_own_vertices() {
        let scene = room();
        let counts: Vec<u32> = scene.items.iter().map(|i| i.vertex_count()).collect();
        assert_eq!(counts, vec![6, 6, 132, 201, 72, 6, 6]);
    }

    #[test]
    fn test_markers_sit_on_the_lights() {
        let scene = room();
        let markers: Vec<Vector3<f32>> = scene
            .items
            .iter()
            .filter(|i| i.program == ProgramKind::Lamp)
            .map(|i| i.placement.position)
            .collect();
        assert!(markers.contains(&scene.lights.key.position.to_vec()));
        assert!(markers.contains(&scene.lights.fill.position.to_vec()));
    }
}
