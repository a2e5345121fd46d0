//! Viewer state and the borrowed host bundle handed to tools.

use meshprobe_camera::{Camera, OrbitControls, Viewport};
use meshprobe_overlay::{Overlay, RenderLoop};
use meshprobe_scene::SceneNode;
use tracing::{debug, info};

/// Pointer cursor shown over the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    /// Platform default pointer.
    #[default]
    Default,
    /// Crosshair shown while picking points.
    Crosshair,
}

/// Rendering surface: its rectangle on the page and its cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Client-space rectangle.
    pub viewport: Viewport,
    /// Current cursor.
    pub cursor: CursorStyle,
}

impl Surface {
    /// Surface with the default cursor.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            cursor: CursorStyle::Default,
        }
    }
}

/// Everything a tool may touch during one call.
///
/// Built fresh per call from a [`Viewer`]; tools keep none of these borrows.
pub struct Host<'a> {
    /// Loaded model, if any.
    pub content: Option<&'a SceneNode>,
    /// Active camera.
    pub camera: &'a Camera,
    /// Camera input gates.
    pub controls: &'a mut OrbitControls,
    /// Rendering surface.
    pub surface: &'a mut Surface,
    /// Artifact container.
    pub overlay: &'a mut Overlay,
    /// Per-frame observer registry.
    pub render_loop: &'a mut RenderLoop,
}

/// Owns the scene, camera and overlay state a tool operates on.
#[derive(Debug)]
pub struct Viewer {
    /// Loaded model.
    content: Option<SceneNode>,
    /// Camera; move it freely between frames.
    pub camera: Camera,
    /// Camera input gates.
    pub controls: OrbitControls,
    /// Rendering surface.
    pub surface: Surface,
    overlay: Overlay,
    render_loop: RenderLoop,
}

impl Viewer {
    /// Empty viewer over a surface of the given size.
    pub fn new(width: f32, height: f32) -> Self {
        let viewport = Viewport::new(width, height);
        let mut camera = Camera::default();
        camera.aspect = viewport.aspect();
        Self {
            content: None,
            camera,
            controls: OrbitControls::default(),
            surface: Surface::new(viewport),
            overlay: Overlay::new(),
            render_loop: RenderLoop::new(),
        }
    }

    /// Borrow every collaborator for one tool call.
    pub fn host(&mut self) -> Host<'_> {
        Host {
            content: self.content.as_ref(),
            camera: &self.camera,
            controls: &mut self.controls,
            surface: &mut self.surface,
            overlay: &mut self.overlay,
            render_loop: &mut self.render_loop,
        }
    }

    /// Replace the loaded model.
    pub fn set_content(&mut self, content: SceneNode) {
        info!(
            name = %content.name,
            nodes = content.node_count(),
            triangles = content.triangle_count(),
            "content loaded"
        );
        self.content = Some(content);
    }

    /// Unload the model, returning it.
    pub fn clear_content(&mut self) -> Option<SceneNode> {
        let previous = self.content.take();
        if previous.is_some() {
            info!("content cleared");
        }
        previous
    }

    /// Loaded model, if any.
    pub fn content(&self) -> Option<&SceneNode> {
        self.content.as_ref()
    }

    /// Artifacts currently on screen.
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Frame observer registry.
    pub fn render_loop(&self) -> &RenderLoop {
        &self.render_loop
    }

    /// Resize the surface and keep the camera aspect in step.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.surface.viewport.width = width;
        self.surface.viewport.height = height;
        self.camera.set_aspect(width, height);
        debug!(width, height, "surface resized");
    }

    /// Draw one frame; returns the frame number.
    pub fn render_frame(&mut self) -> u64 {
        self.render_loop
            .run_frame(&self.camera, self.surface.viewport, &mut self.overlay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_camera_aspect() {
        let mut viewer = Viewer::new(800.0, 600.0);
        assert!((viewer.camera.aspect - 800.0 / 600.0).abs() < 1e-6);

        viewer.resize(1000.0, 500.0);
        assert_eq!(viewer.surface.viewport.width, 1000.0);
        assert!((viewer.camera.aspect - 2.0).abs() < 1e-6);
    }

    #[test]
    fn resize_keeps_fractional_aspect() {
        let mut viewer = Viewer::new(100.0, 100.0);
        viewer.resize(640.5, 480.25);
        assert_eq!(viewer.camera.aspect, viewer.surface.viewport.aspect());

        viewer.resize(640.0, 0.0);
        assert_eq!(viewer.camera.aspect, 640.5 / 480.25);
    }

    #[test]
    fn content_round_trip() {
        let mut viewer = Viewer::new(100.0, 100.0);
        assert!(viewer.content().is_none());
        assert!(viewer.host().content.is_none());

        viewer.set_content(SceneNode::new("model"));
        assert_eq!(viewer.content().map(|c| c.name.as_str()), Some("model"));
        assert!(viewer.host().content.is_some());

        assert!(viewer.clear_content().is_some());
        assert!(viewer.clear_content().is_none());
    }

    #[test]
    fn render_frame_counts_frames() {
        let mut viewer = Viewer::new(100.0, 100.0);
        assert_eq!(viewer.render_frame(), 1);
        assert_eq!(viewer.render_frame(), 2);
        assert_eq!(viewer.render_loop().frame_count(), 2);
    }
}
