//! Screen-space picking against the loaded model.

use glam::Vec3;
use meshprobe_camera::{Camera, Viewport};
use meshprobe_core::Ray;
use meshprobe_scene::SceneNode;
use tracing::{debug, trace};

/// Pointer button that produced a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left / main button. The only button that picks.
    Primary,
    /// Right button.
    Secondary,
    /// Middle button or wheel press.
    Auxiliary,
}

/// A click on the rendering surface in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Horizontal client coordinate in pixels.
    pub client_x: f32,
    /// Vertical client coordinate in pixels (grows downward).
    pub client_y: f32,
    /// Button that was pressed.
    pub button: PointerButton,
}

impl PointerEvent {
    /// Primary-button click at the given client position.
    pub fn primary(client_x: f32, client_y: f32) -> Self {
        Self {
            client_x,
            client_y,
            button: PointerButton::Primary,
        }
    }
}

/// World ray under the pointer.
pub fn pointer_ray(event: &PointerEvent, viewport: &Viewport, camera: &Camera) -> Ray {
    let ndc = viewport.to_ndc(event.client_x, event.client_y);
    camera.ray_through(ndc)
}

/// Nearest surface point under a primary click, or `None` when nothing is hit.
pub fn pick(
    event: &PointerEvent,
    viewport: &Viewport,
    camera: &Camera,
    content: Option<&SceneNode>,
) -> Option<Vec3> {
    if event.button != PointerButton::Primary {
        trace!(button = ?event.button, "ignoring non-primary click");
        return None;
    }
    let content = content?;

    let ray = pointer_ray(event, viewport, camera);
    let nearest = content
        .raycast(&ray)
        .into_iter()
        .min_by(|a, b| a.distance.total_cmp(&b.distance))?;

    debug!(
        node = %nearest.node.name,
        distance = nearest.distance,
        point = ?nearest.point,
        "picked surface point"
    );
    Some(nearest.point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;
    use meshprobe_scene::MeshGeometry;

    fn quad(z: f32) -> MeshGeometry {
        let positions = vec![
            Vec3::new(-1.0, -1.0, z),
            Vec3::new(1.0, -1.0, z),
            Vec3::new(1.0, 1.0, z),
            Vec3::new(-1.0, 1.0, z),
        ];
        MeshGeometry::indexed(positions, &[0, 1, 2, 0, 2, 3]).unwrap()
    }

    fn setup() -> (Camera, Viewport) {
        let camera = Camera::looking_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let viewport = Viewport::new(400.0, 400.0);
        (camera, viewport)
    }

    #[test]
    fn pick_returns_nearest_hit() {
        let (camera, viewport) = setup();
        let scene = SceneNode::new("root")
            .with_child(SceneNode::new("back").with_geometry(quad(-1.0)))
            .with_child(SceneNode::new("front").with_geometry(quad(1.0)));

        let point = pick(&PointerEvent::primary(200.0, 200.0), &viewport, &camera, Some(&scene))
            .unwrap();
        assert!((point - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-4);
    }

    #[test]
    fn pick_honors_node_transform() {
        let (camera, viewport) = setup();
        let scene = SceneNode::new("moved")
            .with_transform(Mat4::from_translation(Vec3::new(0.0, 0.0, 2.0)))
            .with_geometry(quad(0.0));

        let point = pick(&PointerEvent::primary(200.0, 200.0), &viewport, &camera, Some(&scene))
            .unwrap();
        assert!((point.z - 2.0).abs() < 1e-4);
    }

    #[test]
    fn pick_ignores_other_buttons() {
        let (camera, viewport) = setup();
        let scene = SceneNode::new("quad").with_geometry(quad(0.0));
        let event = PointerEvent {
            button: PointerButton::Secondary,
            ..PointerEvent::primary(200.0, 200.0)
        };
        assert!(pick(&event, &viewport, &camera, Some(&scene)).is_none());
    }

    #[test]
    fn pick_misses_and_empty_content() {
        let (camera, viewport) = setup();
        let scene = SceneNode::new("quad").with_geometry(quad(0.0));

        // Top-left corner looks past the quad.
        assert!(pick(&PointerEvent::primary(0.0, 0.0), &viewport, &camera, Some(&scene)).is_none());
        assert!(pick(&PointerEvent::primary(200.0, 200.0), &viewport, &camera, None).is_none());
    }

    #[test]
    fn pick_hits_sub_millimetre_quad() {
        let s = 0.00008;
        let positions = vec![
            Vec3::new(-s, -s, 0.0),
            Vec3::new(s, -s, 0.0),
            Vec3::new(s, s, 0.0),
            Vec3::new(-s, s, 0.0),
        ];
        let quad = MeshGeometry::indexed(positions, &[0, 1, 2, 0, 2, 3]).unwrap();
        let scene = SceneNode::new("speck").with_geometry(quad);
        let camera = Camera::looking_at(Vec3::new(0.0, 0.0, 0.005), Vec3::ZERO);
        let viewport = Viewport::new(400.0, 400.0);

        let point = pick(&PointerEvent::primary(201.0, 199.0), &viewport, &camera, Some(&scene))
            .unwrap();
        assert!(point.z.abs() < 1e-7);
    }
}
