//! # Room Geometry
//!
//! Every mesh in the scene is a literal, non-indexed triangle list baked
//! into [`room_meshes`]. This module names those tables and turns them into
//! GPU-ready vertex data.
//!
//! ```rust
//! use tearoom::gfx::geometry::{GeometryData, MeshKind};
//!
//! let table = GeometryData::from_kind(MeshKind::Table);
//! assert_eq!(table.vertex_count(), 132);
//! ```

pub mod room_meshes;

use crate::gfx::scene::vertex::Vertex3D;

/// The six baked meshes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Table,
    FloorPlane,
    Carpet,
    Window,
    Teacup,
    Saucer,
}

impl MeshKind {
    pub const ALL: [MeshKind; 6] = [
        MeshKind::Table,
        MeshKind::FloorPlane,
        MeshKind::Carpet,
        MeshKind::Window,
        MeshKind::Teacup,
        MeshKind::Saucer,
    ];

    /// Interleaved `[px, py, pz, nx, ny, nz, u, v]` rows for this mesh
    pub fn vertex_table(self) -> &'static [[f32; 8]] {
        match self {
            MeshKind::Table => &room_meshes::TABLE,
            MeshKind::FloorPlane => &room_meshes::FLOOR_PLANE,
            MeshKind::Carpet => &room_meshes::CARPET,
            MeshKind::Window => &room_meshes::WINDOW,
            MeshKind::Teacup => &room_meshes::TEACUP,
            MeshKind::Saucer => &room_meshes::SAUCER,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MeshKind::Table => "table",
            MeshKind::FloorPlane => "floor plane",
            MeshKind::Carpet => "carpet",
            MeshKind::Window => "window",
            MeshKind::Teacup => "teacup",
            MeshKind::Saucer => "saucer",
        }
    }
}

/// Geometry data ready for GPU upload
#[derive(Debug, Clone, Default)]
pub struct GeometryData {
    pub vertices: Vec<Vertex3D>,
}

impl GeometryData {
    /// Converts interleaved rows into vertices, preserving draw order
    pub fn from_rows(rows: &[[f32; 8]]) -> Self {
        Self {
            vertices: rows.iter().map(Vertex3D::from_row).collect(),
        }
    }

    pub fn from_kind(kind: MeshKind) -> Self {
        Self::from_rows(kind.vertex_table())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_counts_match_baked_tables() {
        let expected = [
            (MeshKind::Table, 132),
            (MeshKind::FloorPlane, 6),
            (MeshKind::Carpet, 6),
            (MeshKind::Window, 6),
            (MeshKind::Teacup, 201),
            (MeshKind::Saucer, 72),
        ];
        for (kind, count) in expected {
            assert_eq!(
                GeometryData::from_kind(kind).vertex_count(),
                count,
                "{}",
                kind.label()
            );
        }
    }

    #[test]
    fn test_every_mesh_is_a_whole_triangle_list() {
        for kind in MeshKind::ALL {
            let data = GeometryData::from_kind(kind);
            assert_eq!(data.vertex_count() % 3, 0, "{}", kind.label());
            assert_eq!(data.triangle_count() * 3, data.vertex_count());
        }
    }

    #[test]
    fn test_normals_are_unit_or_zero_length() {
        for kind in MeshKind::ALL {
            for v in GeometryData::from_kind(kind).vertices {
                let len = (v.normal[0].powi(2) + v.normal[1].powi(2) + v.normal[2].powi(2)).sqrt();
                assert!(
                    (len - 1.0).abs() < 0.05 || len < 1e-6,
                    "{} has normal {:?}",
                    kind.label(),
                    v.normal
                );
            }
        }
    }

    #[test]
    fn test_floor_plane_is_flat() {
        let floor = GeometryData::from_kind(MeshKind::FloorPlane);
        let y = floor.vertices[0].position[1];
        assert!(floor.vertices.iter().all(|v| v.position[1] == y));
    }
}
