#![warn(missing_docs)]
//! Host scene graph: node hierarchy, validated triangle geometry and the
//! ray/triangle primitive used for picking.

mod error;
mod geometry;
mod node;
mod raycast;

pub use error::MeshError;
pub use geometry::{MeshGeometry, TriangleLayout};
pub use node::SceneNode;
pub use raycast::{intersect_triangle, RayHit};
