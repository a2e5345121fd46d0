#![warn(missing_docs)]
//! Viewer camera, orbit-control input flags and surface viewport mapping.

mod controls;
mod viewport;

pub use controls::OrbitControls;
pub use viewport::Viewport;

use glam::{Mat4, Vec2, Vec3};
use meshprobe_core::Ray;

const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Perspective camera with position, orientation, and projection.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Horizontal rotation in radians (around Y axis).
    pub yaw: f32,
    /// Vertical rotation in radians (around local X axis).
    pub pitch: f32,

    /// Field of view in radians.
    pub fov: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            yaw: -std::f32::consts::FRAC_PI_2,
            pitch: 0.0,
            fov: std::f32::consts::FRAC_PI_4, // 45 degrees
            aspect: 16.0 / 9.0,
            near: 0.01,
            far: 1000.0,
        }
    }
}

impl Camera {
    /// Create a new camera with the given position.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Place the camera at `position` facing `target`.
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let mut camera = Self::new(position);
        camera.look_at(target);
        camera
    }

    /// Re-orient the camera so it faces `target`.
    pub fn look_at(&mut self, target: Vec3) {
        let direction = (target - self.position).normalize_or_zero();
        if direction == Vec3::ZERO {
            return;
        }
        self.yaw = direction.z.atan2(direction.x);
        self.pitch = direction.y.asin().clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Get the forward direction vector (where camera is looking).
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Get the right direction vector (camera's local X axis).
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Get the up direction vector (camera's local Y axis).
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    /// Compute the view matrix (world space -> camera space).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    /// Compute the projection matrix (camera space -> clip space).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Compute the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world-space point to normalized device coordinates.
    ///
    /// `x` and `y` are in [-1, 1] for points inside the frustum; `z` is depth.
    pub fn project(&self, world: Vec3) -> Vec3 {
        self.view_projection_matrix().project_point3(world)
    }

    /// Map normalized device coordinates back to world space.
    pub fn unproject(&self, ndc: Vec3) -> Vec3 {
        self.view_projection_matrix().inverse().project_point3(ndc)
    }

    /// Build the world-space ray from the eye through an NDC point.
    pub fn ray_through(&self, ndc: Vec2) -> Ray {
        let target = self.unproject(ndc.extend(0.5));
        Ray::new(self.position, target - self.position)
    }

    /// Move the camera along its forward axis (negative moves back).
    pub fn move_forward(&mut self, distance: f32) {
        let forward = self.forward();
        self.position += forward * distance;
    }

    /// Move the camera along its right axis (negative moves left).
    pub fn move_right(&mut self, distance: f32) {
        let right = self.right();
        self.position += right * distance;
    }

    /// Move the camera along its local up axis.
    pub fn move_up(&mut self, distance: f32) {
        let up = self.up();
        self.position += up * distance;
    }

    /// Rotate the camera (add to yaw and pitch).
    ///
    /// # Arguments
    /// * `delta_yaw` - Horizontal rotation delta in radians
    /// * `delta_pitch` - Vertical rotation delta in radians
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch += delta_pitch;

        // Clamp pitch to avoid gimbal lock
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);

        // Normalize yaw to [0, 2π]
        self.yaw = self.yaw.rem_euclid(std::f32::consts::TAU);
    }

    /// Update the aspect ratio (call when the surface resizes).
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect = width / height;
        }
    }
}
