//! Rendering-surface rectangle and its NDC mapping.

use glam::Vec2;

/// Bounding rectangle of the rendering surface in client (page) pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Left edge in client pixels.
    pub left: f32,
    /// Top edge in client pixels.
    pub top: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Viewport anchored at the client origin.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    /// Builder: offset the surface within the client area.
    pub fn with_origin(mut self, left: f32, top: f32) -> Self {
        self.left = left;
        self.top = top;
        self
    }

    /// Width divided by height.
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Convert client coordinates to normalized device coordinates.
    ///
    /// Y is flipped: the top edge maps to +1, the bottom edge to -1.
    pub fn to_ndc(&self, client_x: f32, client_y: f32) -> Vec2 {
        Vec2::new(
            ((client_x - self.left) / self.width) * 2.0 - 1.0,
            -((client_y - self.top) / self.height) * 2.0 + 1.0,
        )
    }

    /// Convert NDC to pixel coordinates relative to the surface's top-left.
    pub fn ndc_to_pixels(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) / 2.0 * self.width,
            (1.0 - ndc.y) / 2.0 * self.height,
        )
    }

    /// Convert NDC to client coordinates (surface offset included).
    pub fn ndc_to_client(&self, ndc: Vec2) -> Vec2 {
        self.ndc_to_pixels(ndc) + Vec2::new(self.left, self.top)
    }
}
