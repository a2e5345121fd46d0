#![warn(missing_docs)]
//! Shared fixtures for meshprobe tests: reference meshes, screen helpers,
//! text snapshots and tracing setup.

mod fixtures;
mod snapshot;

use glam::{Vec2, Vec3};
use meshprobe_camera::{Camera, Viewport};
use tracing_subscriber::EnvFilter;

pub use fixtures::*;
pub use snapshot::*;

/// Client coordinates at which `world` appears on the surface.
///
/// Feeding the result back through the picker reproduces a ray that passes
/// through `world`.
pub fn client_point_of(world: Vec3, camera: &Camera, viewport: &Viewport) -> Vec2 {
    let ndc = camera.project(world).truncate();
    viewport.ndc_to_client(ndc)
}

/// Install a test subscriber honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
