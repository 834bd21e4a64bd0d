//! # Vertex Data Structures
//!
//! GPU-compatible vertex format shared by every mesh in the room.

/// A 3D vertex with position, normal and texture coordinate.
///
/// # Memory Layout
///
/// `#[repr(C)]` keeps the fields tightly packed in declaration order, giving
/// a 32 byte stride that matches the interleaved literal tables in
/// [`crate::gfx::geometry::room_meshes`].
///
/// # Examples
///
/// ```no_run
/// use tearoom::gfx::scene::vertex::Vertex3D;
///
/// let vertex = Vertex3D {
///     position: [0.0, 1.0, 0.0],
///     normal: [0.0, 1.0, 0.0],
///     tex_coords: [0.5, 0.5],
/// };
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// Normal vector [nx, ny, nz] for lighting calculations
    pub normal: [f32; 3],
    /// Texture coordinates [u, v]
    pub tex_coords: [f32; 2],
}

impl Vertex3D {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    /// Builds a vertex from one interleaved `[px, py, pz, nx, ny, nz, u, v]` row
    pub fn from_row(row: &[f32; 8]) -> Self {
        Self {
            position: [row[0], row[1], row[2]],
            normal: [row[3], row[4], row[5]],
            tex_coords: [row[6], row[7]],
        }
    }

    /// Returns the vertex buffer layout for wgpu rendering.
    ///
    /// - Attribute 0: Position (Float32x3)
    /// - Attribute 1: Normal (Float32x3)
    /// - Attribute 2: Texture coordinate (Float32x2)
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex3D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_stride_is_eight_floats() {
        assert_eq!(std::mem::size_of::<Vertex3D>(), 32);
        assert_eq!(Vertex3D::desc().array_stride, 32);
    }

    #[test]
    fn test_attribute_offsets() {
        let layout = Vertex3D::desc();
        let offsets: Vec<u64> = layout.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 24]);
        assert_eq!(layout.attributes[2].format, wgpu::VertexFormat::Float32x2);
    }

    #[test]
    fn test_from_row_splits_fields() {
        let v = Vertex3D::from_row(&[1.0, 2.0, 3.0, 0.0, 1.0, 0.0, 0.25, 0.75]);
        assert_eq!(v.position, [1.0, 2.0, 3.0]);
        assert_eq!(v.normal, [0.0, 1.0, 0.0]);
        assert_eq!(v.tex_coords, [0.25, 0.75]);
    }
}
