//! 3D orbit camera producing the view and projection matrices

use armature_core::math::{mat4_look_at, mat4_mul, mat4_perspective, Mat4};
use armature_core::Vec3;

/// An orbit camera: position derived from yaw/pitch/distance around a target.
///
/// Right-handed, Y-up; all angles in radians.
pub struct Camera {
    /// Camera position (derived from the orbit parameters)
    pub position: Vec3,
    /// Target point the camera looks at
    pub target: Vec3,
    /// Up vector
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance from target
    pub distance: f32,
    /// Horizontal angle in radians
    pub yaw: f32,
    /// Vertical angle in radians
    pub pitch: f32,
}

impl Default for Camera {
    fn default() -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::UP,
            fov: std::f32::consts::FRAC_PI_4,
            near: 0.1,
            far: 100.0,
            aspect: 16.0 / 9.0,
            distance: 5.0,
            yaw: 0.0,
            pitch: 0.0,
        };
        camera.update_orbit();
        camera
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update position from the orbit parameters
    pub fn update_orbit(&mut self) {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();

        self.position = Vec3::new(self.target.x + x, self.target.y + y, self.target.z + z);
    }

    /// Orbit horizontally (rotate around target)
    pub fn orbit_horizontal(&mut self, delta: f32) {
        self.yaw += delta;
        self.update_orbit();
    }

    /// Orbit vertically (tilt up/down)
    pub fn orbit_vertical(&mut self, delta: f32) {
        self.pitch += delta;
        // Clamp short of straight up/down to keep the view basis stable
        self.pitch = self.pitch.clamp(-1.56, 1.56);
        self.update_orbit();
    }

    /// Zoom in/out
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance - delta).clamp(1.0, 100.0);
        self.update_orbit();
    }

    pub fn view_matrix(&self) -> Mat4 {
        mat4_look_at(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        mat4_perspective(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        mat4_mul(&self.projection_matrix(), &self.view_matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armature_core::math::mat4_transform_point;

    #[test]
    fn default_camera_sits_on_positive_z() {
        let camera = Camera::default();
        assert!((camera.position.z - 5.0).abs() < 1e-5);
        assert!(camera.position.x.abs() < 1e-5);
        assert!(camera.position.y.abs() < 1e-5);
    }

    #[test]
    fn orbit_keeps_distance_to_target() {
        let mut camera = Camera::default();
        camera.orbit_horizontal(1.3);
        camera.orbit_vertical(0.7);
        let d = (camera.position - camera.target).length();
        assert!((d - camera.distance).abs() < 1e-4);
    }

    #[test]
    fn target_projects_to_view_center() {
        let mut camera = Camera::default();
        camera.target = Vec3::new(2.0, 1.0, -3.0);
        camera.update_orbit();

        let view = camera.view_matrix();
        let p = mat4_transform_point(&view, camera.target.to_array());
        assert!(p[0].abs() < 1e-4);
        assert!(p[1].abs() < 1e-4);
        assert!((p[2] + camera.distance).abs() < 1e-4);
    }
}
