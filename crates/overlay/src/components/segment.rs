//! Segment Component - Straight line between two world points

use super::DepthMode;
use glam::Vec3;

/// A line segment in world space
#[derive(Debug, Clone, PartialEq)]
pub struct Segment3D {
    /// First endpoint
    pub start: Vec3,
    /// Second endpoint
    pub end: Vec3,
    /// Line color (RGBA)
    pub color: [f32; 4],
    /// Depth testing mode
    pub depth_mode: DepthMode,
    /// Draw order among overlay artifacts
    pub render_order: i32,
}

impl Segment3D {
    /// Create a segment between two points
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self {
            start,
            end,
            color: [1.0, 1.0, 1.0, 1.0],
            depth_mode: DepthMode::Normal,
            render_order: 0,
        }
    }

    /// Builder: Set color
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
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
