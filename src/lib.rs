#![warn(missing_docs)]
//! Interactive distance and volume analysis for triangulated meshes.
//!
//! Two tools run on top of a [`Viewer`]:
//!
//! - [`MeasureTool`] picks two surface points under the pointer and shows
//!   markers, a connecting line and a distance label that follows the camera.
//! - [`VolumeTool`] shows the model's bounding-box extents and its enclosed
//!   mesh volume in a panel.
//!
//! Tools receive a [`Host`] per call and keep no borrow of the viewer
//! between calls. A [`Workbench`] wires both tools to one viewer the way a
//! toolbar would.

pub mod config;
pub mod estimator;
pub mod measure_tool;
pub mod picker;
pub mod session;
pub mod tool;
pub mod viewer;
pub mod volume_tool;
pub mod workbench;

pub use config::{MeasureStyle, ProbeConfig, VolumeStyle};
pub use estimator::{bounding_box, estimate, mesh_volume, BoxMetrics, VolumeResult};
pub use measure_tool::MeasureTool;
pub use picker::{pick, PointerButton, PointerEvent};
pub use session::{Measurement, MeasurementSession, Transition};
pub use tool::Tool;
pub use viewer::{CursorStyle, Host, Surface, Viewer};
pub use volume_tool::{build_panel, VolumeTool};
pub use workbench::Workbench;

pub use meshprobe_core::{format_distance, format_length, format_volume};
