//! Overlay Components
//!
//! Artifact types that can be placed in an [`Overlay`](crate::Overlay).

pub mod label;
pub mod marker;
pub mod panel;
pub mod segment;

pub use label::ScreenLabel;
pub use marker::Marker;
pub use panel::{Panel, PanelRow, PanelSection};
pub use segment::Segment3D;

/// Depth testing policy for world-space artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthMode {
    /// Normal depth testing (artifact can be occluded)
    #[default]
    Normal,
    /// Always render on top of scene geometry
    AlwaysOnTop,
}
