//! Triangle geometry attached to scene nodes.

use crate::MeshError;
use glam::{DMat4, DVec3, Vec3};

/// How the vertex buffer is grouped into triangles.
///
/// Decided once when the geometry is built, so triangle loops never inspect
/// buffer shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum TriangleLayout {
    /// Index triplets into a shared vertex buffer.
    Indexed(Vec<[u32; 3]>),
    /// Every three consecutive vertices form a triangle.
    Flat,
}

/// Vertex positions plus their triangle layout, in node-local space.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshGeometry {
    positions: Vec<Vec3>,
    layout: TriangleLayout,
}

impl MeshGeometry {
    /// Build indexed geometry, validating every index against `positions`.
    pub fn indexed(positions: Vec<Vec3>, indices: &[u32]) -> Result<Self, MeshError> {
        if indices.len() % 3 != 0 {
            return Err(MeshError::RaggedIndexBuffer { len: indices.len() });
        }
        let vertex_count = positions.len();
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }

        let triangles = indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
            .collect();
        Ok(Self {
            positions,
            layout: TriangleLayout::Indexed(triangles),
        })
    }

    /// Build a flat triangle list.
    pub fn flat(positions: Vec<Vec3>) -> Result<Self, MeshError> {
        if positions.len() % 3 != 0 {
            return Err(MeshError::RaggedVertexBuffer {
                len: positions.len(),
            });
        }
        Ok(Self {
            positions,
            layout: TriangleLayout::Flat,
        })
    }

    /// Build from raw loader buffers: indexed when an index buffer exists.
    pub fn from_buffers(positions: Vec<Vec3>, indices: Option<&[u32]>) -> Result<Self, MeshError> {
        match indices {
            Some(indices) => Self::indexed(positions, indices),
            None => Self::flat(positions),
        }
    }

    /// Vertex positions in node-local space.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Triangle layout resolved at construction.
    pub fn layout(&self) -> &TriangleLayout {
        &self.layout
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        match &self.layout {
            TriangleLayout::Indexed(triangles) => triangles.len(),
            TriangleLayout::Flat => self.positions.len() / 3,
        }
    }

    /// Vertex positions transformed by `world`, in f64.
    pub fn world_positions(&self, world: &DMat4) -> Vec<DVec3> {
        self.positions
            .iter()
            .map(|p| world.transform_point3(p.as_dvec3()))
            .collect()
    }

    /// Visit every triangle using the local positions.
    pub fn for_each_triangle<F>(&self, f: F)
    where
        F: FnMut(Vec3, Vec3, Vec3),
    {
        self.for_each_triangle_in(&self.positions, f);
    }

    /// Visit every triangle, reading corners from `vertices` instead of the
    /// local positions.
    ///
    /// `vertices` must be parallel to [`positions`](Self::positions), e.g. the
    /// output of [`world_positions`](Self::world_positions).
    pub fn for_each_triangle_in<T, F>(&self, vertices: &[T], mut f: F)
    where
        T: Copy,
        F: FnMut(T, T, T),
    {
        debug_assert_eq!(vertices.len(), self.positions.len());
        match &self.layout {
            TriangleLayout::Indexed(triangles) => {
                for &[a, b, c] in triangles {
                    f(vertices[a as usize], vertices[b as usize], vertices[c as usize]);
                }
            }
            TriangleLayout::Flat => {
                for tri in vertices.chunks_exact(3) {
                    f(tri[0], tri[1], tri[2]);
                }
            }
        }
    }
}
