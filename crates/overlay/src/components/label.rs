//! Screen Label Component - Text pinned to the projection of a world point

use glam::{Vec2, Vec3};
use meshprobe_camera::{Camera, Viewport};

/// Text drawn in screen space at the current projection of a world anchor.
///
/// The screen position goes stale whenever the camera moves; call
/// [`place`](Self::place) once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenLabel {
    text: String,

    /// World-space point the label follows
    pub anchor: Vec3,

    /// Last computed position in surface pixels (None until placed)
    screen_position: Option<Vec2>,
}

impl ScreenLabel {
    /// Create a label anchored at `anchor`
    pub fn new(anchor: Vec3, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            anchor,
            screen_position: None,
        }
    }

    /// Get the label text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Last placed position in surface pixels
    pub fn screen_position(&self) -> Option<Vec2> {
        self.screen_position
    }

    /// Project the anchor through `camera` and store its pixel position.
    pub fn place(&mut self, camera: &Camera, viewport: &Viewport) -> Vec2 {
        let ndc = camera.project(self.anchor);
        let pixels = viewport.ndc_to_pixels(ndc.truncate());
        self.screen_position = Some(pixels);
        pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_creation() {
        let label = ScreenLabel::new(Vec3::new(0.0, 1.0, 0.0), "12.50 cm");
        assert_eq!(label.text(), "12.50 cm");
        assert!(label.screen_position().is_none());
    }

    #[test]
    fn test_label_place_centered_anchor() {
        let camera = Camera::looking_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let viewport = Viewport::new(800.0, 600.0);
        let mut label = ScreenLabel::new(Vec3::ZERO, "x");

        let pixels = label.place(&camera, &viewport);
        assert!((pixels - Vec2::new(400.0, 300.0)).length() < 1e-2);
        assert_eq!(label.screen_position(), Some(pixels));
    }
}
