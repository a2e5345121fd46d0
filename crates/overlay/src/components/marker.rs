//! Marker Component - Sphere glyph at a picked point

use super::DepthMode;
use glam::Vec3;

/// A small sphere marking a point in world space
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// World position of the sphere center
    pub position: Vec3,

    /// Sphere radius in world units
    pub radius: f32,

    /// Color tint (RGBA)
    pub color: [f32; 4],

    /// Tessellation segments (both latitude and longitude)
    pub segments: u32,

    /// Depth testing mode
    pub depth_mode: DepthMode,

    /// Draw order among overlay artifacts (higher draws later)
    pub render_order: i32,
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            radius: 1.0,
            color: [1.0, 1.0, 1.0, 1.0],
            segments: 16,
            depth_mode: DepthMode::Normal,
            render_order: 0,
        }
    }
}

impl Marker {
    /// Create a marker at the given position
    pub fn new(position: Vec3, radius: f32) -> Self {
        Self {
            position,
            radius,
            ..Default::default()
        }
    }

    /// Builder: Set color
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Builder: Set tessellation
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    /// Builder: Set depth mode
    pub fn with_depth_mode(mut self, mode: DepthMode) -> Self {
        self.depth_mode = mode;
        self
    }

    /// Builder: Set render order
    pub fn with_render_order(mut self, order: i32) -> Self {
        self.render_order = order;
        self
    }
}
