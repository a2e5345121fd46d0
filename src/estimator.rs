//! Bounding-box and enclosed-volume estimates for the loaded model.
//!
//! The mesh volume sums signed tetrahedra formed by the origin and each
//! world-space triangle (divergence theorem). It is exact for closed,
//! consistently wound meshes and meaningless for open ones. All
//! accumulation happens in f64.

use glam::DVec3;
use meshprobe_core::BoundingBox;
use meshprobe_scene::SceneNode;
use tracing::debug;

/// Extents of the world-space axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxMetrics {
    /// The box itself.
    pub bounds: BoundingBox,
    /// Extent along X.
    pub width: f64,
    /// Extent along Y.
    pub height: f64,
    /// Extent along Z.
    pub depth: f64,
    /// `width * height * depth`.
    pub volume: f64,
}

impl From<BoundingBox> for BoxMetrics {
    fn from(bounds: BoundingBox) -> Self {
        let size = bounds.size();
        Self {
            bounds,
            width: size.x,
            height: size.y,
            depth: size.z,
            volume: bounds.volume(),
        }
    }
}

/// Both estimates for one model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeResult {
    /// Bounding-box extents and volume.
    pub bounding_box: BoxMetrics,
    /// Enclosed mesh volume (absolute).
    pub mesh_volume: f64,
}

/// Signed volume of the tetrahedron `(origin, p1, p2, p3)`.
pub fn signed_tetrahedron(p1: DVec3, p2: DVec3, p3: DVec3) -> f64 {
    p1.dot(p2.cross(p3)) / 6.0
}

/// World-space bounding box over every vertex, or `None` without vertices.
pub fn bounding_box(content: &SceneNode) -> Option<BoxMetrics> {
    content.world_bounds().map(BoxMetrics::from)
}

/// Signed enclosed volume; positive for outward (counter-clockwise) winding.
///
/// `None` when no node in the hierarchy carries geometry.
pub fn signed_mesh_volume(content: &SceneNode) -> Option<f64> {
    let mut signed = 0.0;
    let mut any_geometry = false;
    content.walk(&mut |node, world| {
        let Some(geometry) = &node.geometry else {
            return;
        };
        any_geometry = true;
        let vertices = geometry.world_positions(world);
        geometry.for_each_triangle_in(&vertices, |p1, p2, p3| {
            signed += signed_tetrahedron(p1, p2, p3);
        });
    });
    any_geometry.then_some(signed)
}

/// Absolute enclosed volume, independent of winding.
pub fn mesh_volume(content: &SceneNode) -> Option<f64> {
    signed_mesh_volume(content).map(f64::abs)
}

/// Both estimates, or `None` when there is no model or it has no vertices.
pub fn estimate(content: Option<&SceneNode>) -> Option<VolumeResult> {
    let content = content?;
    let bounding_box = bounding_box(content)?;
    let mesh_volume = mesh_volume(content)?;
    debug!(
        width = bounding_box.width,
        height = bounding_box.height,
        depth = bounding_box.depth,
        bbox_volume = bounding_box.volume,
        mesh_volume,
        "volume estimate"
    );
    Some(VolumeResult {
        bounding_box,
        mesh_volume,
    })
}
