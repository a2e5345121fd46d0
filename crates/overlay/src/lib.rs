//! Transient visual artifacts drawn over the mesh viewer.
//!
//! This crate holds the artifacts analysis tools put on screen and the hook
//! they use to follow the camera:
//!
//! - **Markers**: small spheres at picked points, drawn on top of geometry
//! - **Segments**: lines between picked points
//! - **Labels**: screen-space text anchored to a world point
//! - **Panels**: static titled tables of values
//! - **Render loop**: per-frame observers registered and removed explicitly
//!
//! Artifacts live in an [`Overlay`] and are addressed by the
//! [`ArtifactHandle`] returned when they are added; whoever holds the handle
//! owns the artifact and is responsible for removing it.
//!
//! # Example
//!
//! ```rust
//! use meshprobe_overlay::{DepthMode, Marker, Overlay};
//! use glam::Vec3;
//!
//! let mut overlay = Overlay::new();
//! let handle = overlay.add_marker(
//!     Marker::new(Vec3::ZERO, 0.01).with_depth_mode(DepthMode::AlwaysOnTop),
//! );
//! assert_eq!(overlay.len(), 1);
//! overlay.remove(handle);
//! assert!(overlay.is_empty());
//! ```

pub mod components;
pub mod frame;
pub mod manager;

// Re-export commonly used types
pub use components::{
    DepthMode, Marker, Panel, PanelRow, PanelSection, ScreenLabel, Segment3D,
};
pub use frame::{FrameContext, FrameObserver, ObserverId, RenderLoop};
pub use manager::{Artifact, ArtifactHandle, Overlay};
