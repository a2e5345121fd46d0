//! Orbit-style camera input gates.

use crate::Camera;

/// Which camera gestures the host currently honors.
///
/// Tools flip these flags while they own pointer input; the host consults
/// them before applying a gesture to the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitControls {
    /// Drag-to-rotate enabled.
    pub enable_rotate: bool,
    /// Drag-to-pan enabled.
    pub enable_pan: bool,
    /// Wheel-to-zoom enabled.
    pub enable_zoom: bool,
    /// Radians of rotation per pixel of drag.
    pub rotate_speed: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            enable_rotate: true,
            enable_pan: true,
            enable_zoom: true,
            rotate_speed: 0.005,
        }
    }
}

impl OrbitControls {
    /// Apply a rotation drag. Returns `false` when rotation is disabled.
    pub fn rotate(&self, camera: &mut Camera, dx: f32, dy: f32) -> bool {
        if !self.enable_rotate {
            return false;
        }
        camera.rotate(dx * self.rotate_speed, -dy * self.rotate_speed);
        true
    }

    /// Apply a pan in camera-local units. Returns `false` when panning is disabled.
    pub fn pan(&self, camera: &mut Camera, right: f32, up: f32) -> bool {
        if !self.enable_pan {
            return false;
        }
        camera.move_right(right);
        camera.move_up(up);
        true
    }

    /// Dolly along the view axis. Returns `false` when zoom is disabled.
    pub fn zoom(&self, camera: &mut Camera, distance: f32) -> bool {
        if !self.enable_zoom {
            return false;
        }
        camera.move_forward(distance);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_rotation_leaves_camera_untouched() {
        let controls = OrbitControls {
            enable_rotate: false,
            ..Default::default()
        };
        let mut camera = Camera::default();
        let before = (camera.yaw, camera.pitch);

        assert!(!controls.rotate(&mut camera, 40.0, 10.0));
        assert_eq!((camera.yaw, camera.pitch), before);
    }

    #[test]
    fn pan_and_zoom_move_camera() {
        let controls = OrbitControls::default();
        let mut camera = Camera::default();
        let start = camera.position;

        assert!(controls.pan(&mut camera, 1.0, 0.0));
        assert!((camera.position.x - (start.x + 1.0)).abs() < 1e-5);

        assert!(controls.zoom(&mut camera, 2.0));
        assert!((camera.position.z - (start.z - 2.0)).abs() < 1e-5);
    }
}
