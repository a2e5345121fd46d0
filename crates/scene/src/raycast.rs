//! Ray/mesh intersection over the scene hierarchy.

use crate::SceneNode;
use glam::Vec3;
use meshprobe_core::{BoundingBox, Ray};
use tracing::trace;

/// A ray/surface intersection.
#[derive(Debug, Clone, Copy)]
pub struct RayHit<'a> {
    /// World-space hit position.
    pub point: Vec3,
    /// Distance from the ray origin along the ray.
    pub distance: f32,
    /// Node whose geometry was hit.
    pub node: &'a SceneNode,
}

/// Möller–Trumbore ray/triangle test (both faces).
///
/// Returns the distance along `ray` to the hit, if any.
pub fn intersect_triangle(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
    // Relative to the edge lengths so tiny triangles are still hit.
    const EPSILON: f32 = 1e-7;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);

    // Ray parallel to triangle (or degenerate triangle)
    if !a.is_finite() || a.abs() <= EPSILON * edge1.length() * edge2.length() {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    (t >= 0.0).then_some(t)
}

impl SceneNode {
    /// Every intersection of `ray` with geometry in this hierarchy, unordered.
    ///
    /// Nodes whose world bounds the ray misses are skipped without testing
    /// their triangles.
    pub fn raycast(&self, ray: &Ray) -> Vec<RayHit<'_>> {
        let mut hits = Vec::new();
        self.walk(&mut |node, world| {
            let Some(geometry) = &node.geometry else {
                return;
            };
            let world_positions = geometry.world_positions(world);
            let Some(bounds) = BoundingBox::from_points(world_positions.iter().copied()) else {
                return;
            };
            if bounds.ray_intersection(ray).is_none() {
                trace!(node = %node.name, "ray misses node bounds");
                return;
            }

            let vertices: Vec<Vec3> = world_positions.iter().map(|p| p.as_vec3()).collect();
            geometry.for_each_triangle_in(&vertices, |a, b, c| {
                if let Some(distance) = intersect_triangle(ray, a, b, c) {
                    hits.push(RayHit {
                        point: ray.point_at(distance),
                        distance,
                        node,
                    });
                }
            });
        });
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MeshGeometry;
    use glam::Mat4;

    fn facing_triangle() -> (Vec3, Vec3, Vec3) {
        (
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn hits_front_and_back_faces() {
        let (a, b, c) = facing_triangle();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::NEG_Z);
        assert!((intersect_triangle(&ray, a, b, c).unwrap() - 3.0).abs() < 1e-5);
        // Reversed winding is still hit
        assert!(intersect_triangle(&ray, a, c, b).is_some());
    }

    #[test]
    fn misses_outside_and_behind() {
        let (a, b, c) = facing_triangle();
        let outside = Ray::new(Vec3::new(5.0, 0.0, 3.0), Vec3::NEG_Z);
        assert!(intersect_triangle(&outside, a, b, c).is_none());

        let behind = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Z);
        assert!(intersect_triangle(&behind, a, b, c).is_none());
    }

    #[test]
    fn parallel_ray_misses() {
        let (a, b, c) = facing_triangle();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::X);
        assert!(intersect_triangle(&ray, a, b, c).is_none());
    }

    #[test]
    fn raycast_reports_hits_in_world_space() {
        let (a, b, c) = facing_triangle();
        let root = SceneNode::new("root").with_child(
            SceneNode::new("tri")
                .with_transform(Mat4::from_translation(Vec3::new(0.0, 0.0, -2.0)))
                .with_geometry(MeshGeometry::flat(vec![a, b, c]).unwrap()),
        );

        let hits = root.raycast(&Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::NEG_Z));
        assert_eq!(hits.len(), 1);
        assert!((hits[0].distance - 5.0).abs() < 1e-5);
        assert!(hits[0].point.distance(Vec3::new(0.0, 0.0, -2.0)) < 1e-5);
        assert_eq!(hits[0].node.name, "tri");
    }

    #[test]
    fn raycast_skips_nodes_off_the_ray() {
        let (a, b, c) = facing_triangle();
        let root = SceneNode::new("tri").with_geometry(MeshGeometry::flat(vec![a, b, c]).unwrap());
        let hits = root.raycast(&Ray::new(Vec3::new(10.0, 0.0, 3.0), Vec3::NEG_Z));
        assert!(hits.is_empty());
    }

    #[test]
    fn hits_sub_millimetre_triangles() {
        let s = 0.0001;
        let (a, b, c) = (
            Vec3::new(-s, -s, 0.0),
            Vec3::new(s, -s, 0.0),
            Vec3::new(0.0, s, 0.0),
        );
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.005), Vec3::NEG_Z);
        let t = intersect_triangle(&ray, a, b, c).unwrap();
        assert!((t - 0.005).abs() < 1e-7);

        let root = SceneNode::new("speck").with_geometry(MeshGeometry::flat(vec![a, b, c]).unwrap());
        assert_eq!(root.raycast(&ray).len(), 1);
    }

    #[test]
    fn raycast_keeps_hits_on_the_bounds_face() {
        // Bounds start at x = 0 and the ray runs along that plane.
        let tri = MeshGeometry::flat(vec![Vec3::ZERO, Vec3::X, Vec3::Y]).unwrap();
        let root = SceneNode::new("corner").with_geometry(tri);
        let hits = root.raycast(&Ray::new(Vec3::new(0.0, 0.5, 3.0), Vec3::NEG_Z));
        assert_eq!(hits.len(), 1);
        assert!((hits[0].distance - 3.0).abs() < 1e-5);
    }
}
