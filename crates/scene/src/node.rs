//! Scene hierarchy with cumulative world transforms.

use crate::MeshGeometry;
use glam::{DMat4, Mat4};
use meshprobe_core::{widen, BoundingBox};

/// A node in the host scene graph.
///
/// Transforms compose parent-first; world matrices are accumulated in f64
/// during traversal.
#[derive(Debug, Clone, Default)]
pub struct SceneNode {
    /// Node name (diagnostics only).
    pub name: String,
    /// Transform relative to the parent node.
    pub transform: Mat4,
    /// Triangle geometry carried by this node, if any.
    pub geometry: Option<MeshGeometry>,
    /// Child nodes.
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Create an empty node with an identity transform.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder: set the local transform.
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    /// Builder: attach geometry.
    pub fn with_geometry(mut self, geometry: MeshGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Builder: append a child.
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child node.
    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Depth-first, parent-before-children traversal passing each node's
    /// world transform.
    pub fn walk<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a SceneNode, &DMat4),
    {
        self.walk_from(&DMat4::IDENTITY, visit);
    }

    fn walk_from<'a, F>(&'a self, parent: &DMat4, visit: &mut F)
    where
        F: FnMut(&'a SceneNode, &DMat4),
    {
        let world = *parent * widen(&self.transform);
        visit(self, &world);
        for child in &self.children {
            child.walk_from(&world, visit);
        }
    }

    /// Whether any node in the hierarchy carries geometry.
    pub fn has_geometry(&self) -> bool {
        self.geometry.is_some() || self.children.iter().any(SceneNode::has_geometry)
    }

    /// Number of nodes in the hierarchy, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SceneNode::node_count).sum::<usize>()
    }

    /// Total triangles across the hierarchy.
    pub fn triangle_count(&self) -> usize {
        let own = self.geometry.as_ref().map_or(0, MeshGeometry::triangle_count);
        own + self.children.iter().map(SceneNode::triangle_count).sum::<usize>()
    }

    /// World-space bounding box over every vertex, or `None` when the
    /// hierarchy has no vertices. Recomputed on every call.
    pub fn world_bounds(&self) -> Option<BoundingBox> {
        let mut bounds: Option<BoundingBox> = None;
        self.walk(&mut |node, world| {
            let Some(geometry) = &node.geometry else {
                return;
            };
            for &position in geometry.positions() {
                let point = world.transform_point3(position.as_dvec3());
                match bounds.as_mut() {
                    Some(bounds) => bounds.extend(point),
                    None => bounds = Some(BoundingBox::from_point(point)),
                }
            }
        });
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DVec3, Vec3};

    fn triangle() -> MeshGeometry {
        MeshGeometry::flat(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn walk_composes_parent_transforms() {
        let root = SceneNode::new("root")
            .with_transform(Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0)))
            .with_child(
                SceneNode::new("child")
                    .with_transform(Mat4::from_scale(Vec3::splat(2.0)))
                    .with_geometry(triangle()),
            );

        let mut seen = Vec::new();
        root.walk(&mut |node, world| {
            seen.push((node.name.clone(), world.transform_point3(DVec3::X)));
        });

        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], ("root".to_string(), DVec3::new(2.0, 0.0, 0.0)));
        assert_eq!(seen[1], ("child".to_string(), DVec3::new(3.0, 0.0, 0.0)));
    }

    #[test]
    fn world_bounds_follow_transforms() {
        let root = SceneNode::new("root").with_child(
            SceneNode::new("mesh")
                .with_transform(Mat4::from_translation(Vec3::new(0.0, 0.0, 5.0)))
                .with_geometry(triangle()),
        );

        let bounds = root.world_bounds().unwrap();
        assert_eq!(bounds.min, DVec3::new(0.0, 0.0, 5.0));
        assert_eq!(bounds.max, DVec3::new(1.0, 1.0, 5.0));
    }

    #[test]
    fn empty_hierarchy_has_no_bounds() {
        let root = SceneNode::new("root").with_child(SceneNode::new("group"));
        assert!(root.world_bounds().is_none());
        assert!(!root.has_geometry());
        assert_eq!(root.node_count(), 2);
        assert_eq!(root.triangle_count(), 0);
    }

    #[test]
    fn counts_cover_nested_nodes() {
        let root = SceneNode::new("root")
            .with_geometry(triangle())
            .with_child(SceneNode::new("a").with_geometry(triangle()));
        assert!(root.has_geometry());
        assert_eq!(root.triangle_count(), 2);
    }
}
