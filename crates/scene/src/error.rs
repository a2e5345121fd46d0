use thiserror::Error;

/// Errors raised while building mesh geometry from raw buffers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// Index buffer does not describe whole triangles.
    #[error("index buffer length {len} is not a multiple of 3")]
    RaggedIndexBuffer {
        /// Number of indices supplied.
        len: usize,
    },
    /// An index points past the end of the vertex buffer.
    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// Offending index value.
        index: u32,
        /// Size of the vertex buffer.
        vertex_count: usize,
    },
    /// Flat triangle list whose vertex count is not a multiple of 3.
    #[error("flat triangle list has {len} vertices, not a multiple of 3")]
    RaggedVertexBuffer {
        /// Number of vertices supplied.
        len: usize,
    },
}
