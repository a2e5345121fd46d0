#![warn(missing_docs)]
//! Core primitives shared across the workspace.

mod geometry;
pub mod units;

// Re-export commonly used types
pub use geometry::{widen, BoundingBox, Ray};
pub use units::{format_distance, format_length, format_volume};
