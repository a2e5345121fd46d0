//! Reference meshes with known volumes.

use anyhow::Result;
use glam::{Mat4, Vec3};
use meshprobe_scene::{MeshGeometry, SceneNode};

/// Corners of the axis-aligned unit cube centered on the origin.
pub const UNIT_CUBE_CORNERS: [Vec3; 8] = [
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
];

/// Outward-facing (counter-clockwise) triangles of the unit cube.
pub const UNIT_CUBE_INDICES: [u32; 36] = [
    0, 3, 2, 0, 2, 1, // -z
    4, 5, 6, 4, 6, 7, // +z
    0, 1, 5, 0, 5, 4, // -y
    3, 7, 6, 3, 6, 2, // +y
    0, 4, 7, 0, 7, 3, // -x
    1, 2, 6, 1, 6, 5, // +x
];

/// Unit cube as an indexed mesh: 8 vertices, 12 triangles.
pub fn unit_cube_indexed() -> Result<MeshGeometry> {
    Ok(MeshGeometry::indexed(
        UNIT_CUBE_CORNERS.to_vec(),
        &UNIT_CUBE_INDICES,
    )?)
}

/// Unit cube with inward-facing winding.
pub fn unit_cube_reversed() -> Result<MeshGeometry> {
    let reversed: Vec<u32> = UNIT_CUBE_INDICES
        .chunks_exact(3)
        .flat_map(|tri| [tri[0], tri[2], tri[1]])
        .collect();
    Ok(MeshGeometry::indexed(UNIT_CUBE_CORNERS.to_vec(), &reversed)?)
}

/// Unit cube as a flat triangle soup: 36 vertices, no index buffer.
pub fn unit_cube_flat() -> Result<MeshGeometry> {
    let positions = UNIT_CUBE_INDICES
        .iter()
        .map(|&index| UNIT_CUBE_CORNERS[index as usize])
        .collect();
    Ok(MeshGeometry::flat(positions)?)
}

/// Right-corner tetrahedron spanning the three unit axes (volume 1/6).
pub fn corner_tetrahedron() -> Result<MeshGeometry> {
    let positions = vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z];
    let indices = [0, 2, 1, 0, 1, 3, 0, 3, 2, 1, 2, 3];
    Ok(MeshGeometry::indexed(positions, &indices)?)
}

/// Scene root holding a single unit cube node.
pub fn unit_cube_scene() -> Result<SceneNode> {
    Ok(SceneNode::new("root").with_child(SceneNode::new("cube").with_geometry(unit_cube_indexed()?)))
}

/// Unit cube node placed with `transform`.
pub fn cube_node(name: &str, transform: Mat4) -> Result<SceneNode> {
    Ok(SceneNode::new(name)
        .with_transform(transform)
        .with_geometry(unit_cube_indexed()?))
}

/// Scene root with no geometry anywhere in the hierarchy.
pub fn empty_scene() -> SceneNode {
    SceneNode::new("root").with_child(SceneNode::new("group"))
}
