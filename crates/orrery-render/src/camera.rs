//! Perspective camera with pointer-ray unprojection and damped orbit
//! navigation around the scene center.

use glam::{Mat3, Mat4, Quat, Vec3};

use orrery_scene::Ray;

use crate::pipeline::CameraUniform;

/// A camera that generates view and projection matrices for rendering.
#[derive(Debug, Clone)]
pub struct Camera {
    /// World-space position.
    pub position: Vec3,
    /// Rotation as a unit quaternion.
    pub rotation: Quat,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height.
    pub aspect_ratio: f32,
    /// Near clip plane distance (always positive).
    pub near: f32,
    /// Far clip plane distance (always positive, > near).
    pub far: f32,
}

impl Camera {
    /// Compute the view matrix (inverse of the camera transform).
    pub fn view_matrix(&self) -> Mat4 {
        let rotation_matrix = Mat4::from_quat(self.rotation);
        let translation_matrix = Mat4::from_translation(self.position);
        (translation_matrix * rotation_matrix).inverse()
    }

    /// Compute the projection matrix with reverse-Z (near maps to z=1, far
    /// to z=0), which is why near/far are swapped here.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect_ratio, self.far, self.near)
    }

    /// Compute the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// The forward direction vector (-Z in camera space).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// The up direction vector (+Y in camera space).
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// The right direction vector (+X in camera space).
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Update the aspect ratio after a resize.
    pub fn set_aspect_ratio(&mut self, width: f32, height: f32) {
        self.aspect_ratio = width / height.max(1.0);
    }

    /// Unproject normalized device coordinates into a world-space ray.
    ///
    /// Built from the camera basis directly, so it stays valid regardless of
    /// the reverse-Z projection convention.
    pub fn screen_ray(&self, ndc_x: f32, ndc_y: f32) -> Ray {
        let half_height = (self.fov_y * 0.5).tan();
        let half_width = half_height * self.aspect_ratio;
        let direction = (self.forward()
            + self.right() * (ndc_x * half_width)
            + self.up() * (ndc_y * half_height))
            .normalize();
        Ray {
            origin: self.position,
            direction,
        }
    }

    /// Convert the camera to a uniform suitable for GPU upload.
    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection_matrix().to_cols_array_2d(),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 5.0, 15.0),
            rotation: Quat::IDENTITY,
            fov_y: 75.0_f32.to_radians(),
            aspect_ratio: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Damped orbit navigation: drag to orbit the scene center, wheel to zoom.
#[derive(Debug, Clone)]
pub struct OrbitNavigator {
    /// Point the camera orbits and looks at.
    pub target: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
    goal_yaw: f32,
    goal_pitch: f32,
    goal_distance: f32,
}

impl OrbitNavigator {
    /// Radians of orbit per pixel of drag.
    const DRAG_SENSITIVITY: f32 = 0.005;
    /// Zoom factor per scroll line.
    const ZOOM_FACTOR: f32 = 0.9;
    /// Exponential damping rate (higher = snappier).
    const DAMPING: f32 = 10.0;
    const MIN_DISTANCE: f32 = 2.0;
    const MAX_DISTANCE: f32 = 80.0;
    const MAX_PITCH: f32 = 1.5;

    /// Creates a navigator at the given distance, looking slightly down.
    pub fn new(target: Vec3, distance: f32) -> Self {
        let pitch = 0.3;
        Self {
            target,
            yaw: 0.0,
            pitch,
            distance,
            goal_yaw: 0.0,
            goal_pitch: pitch,
            goal_distance: distance,
        }
    }

    /// Feed a pointer drag delta in pixels.
    pub fn on_drag(&mut self, dx: f32, dy: f32) {
        self.goal_yaw -= dx * Self::DRAG_SENSITIVITY;
        self.goal_pitch = (self.goal_pitch + dy * Self::DRAG_SENSITIVITY)
            .clamp(-Self::MAX_PITCH, Self::MAX_PITCH);
    }

    /// Feed a scroll-wheel delta in lines (positive = zoom in).
    pub fn on_scroll(&mut self, lines: f32) {
        self.goal_distance = (self.goal_distance * Self::ZOOM_FACTOR.powf(lines))
            .clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
    }

    /// Advance the damped motion and write position/rotation into `camera`.
    pub fn update(&mut self, dt: f32, camera: &mut Camera) {
        let blend = 1.0 - (-Self::DAMPING * dt).exp();
        self.yaw += (self.goal_yaw - self.yaw) * blend;
        self.pitch += (self.goal_pitch - self.pitch) * blend;
        self.distance += (self.goal_distance - self.distance) * blend;

        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        camera.position = self.target
            + Vec3::new(
                self.distance * cos_pitch * sin_yaw,
                self.distance * sin_pitch,
                self.distance * cos_pitch * cos_yaw,
            );

        let forward = (self.target - camera.position).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward).normalize();
        camera.rotation = Quat::from_mat3(&Mat3::from_cols(right, up, -forward));
    }

    /// Current camera distance from the target.
    pub fn distance(&self) -> f32 {
        self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_camera_looks_down_neg_z() {
        let camera = Camera {
            rotation: Quat::IDENTITY,
            ..Camera::default()
        };
        let forward = camera.forward();
        assert!(forward.x.abs() < 1e-6);
        assert!(forward.y.abs() < 1e-6);
        assert!((forward.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_aspect_ratio_update() {
        let mut camera = Camera::default();
        camera.set_aspect_ratio(1920.0, 1080.0);
        assert!((camera.aspect_ratio - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_view_matrix_inverse_is_camera_transform() {
        let camera = Camera {
            position: Vec3::new(10.0, 20.0, 30.0),
            rotation: Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            ..Camera::default()
        };
        let inv_view = camera.view_matrix().inverse();
        let reconstructed = inv_view.col(3).truncate();
        assert!((reconstructed - camera.position).length() < 1e-4);
    }

    #[test]
    fn test_center_ray_is_camera_forward() {
        let camera = Camera::default();
        let ray = camera.screen_ray(0.0, 0.0);
        assert_eq!(ray.origin, camera.position);
        assert!((ray.direction - camera.forward()).length() < 1e-6);
    }

    #[test]
    fn test_right_edge_ray_leans_right() {
        let camera = Camera::default();
        let ray = camera.screen_ray(1.0, 0.0);
        assert!(ray.direction.dot(camera.right()) > 0.0);
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_top_edge_ray_leans_up() {
        let camera = Camera::default();
        let ray = camera.screen_ray(0.0, 1.0);
        assert!(ray.direction.dot(camera.up()) > 0.0);
    }

    #[test]
    fn test_navigator_converges_toward_goal() {
        let mut nav = OrbitNavigator::new(Vec3::ZERO, 15.0);
        let mut camera = Camera::default();
        nav.on_drag(200.0, 0.0);
        for _ in 0..300 {
            nav.update(1.0 / 60.0, &mut camera);
        }
        assert!((nav.yaw - nav.goal_yaw).abs() < 1e-3);
    }

    #[test]
    fn test_navigator_always_looks_at_target() {
        let mut nav = OrbitNavigator::new(Vec3::ZERO, 15.0);
        let mut camera = Camera::default();
        nav.on_drag(57.0, -23.0);
        nav.on_scroll(2.0);
        for _ in 0..60 {
            nav.update(1.0 / 60.0, &mut camera);
        }
        let to_target = (nav.target - camera.position).normalize();
        assert!(
            camera.forward().dot(to_target) > 0.999,
            "camera drifted off target"
        );
    }

    #[test]
    fn test_zoom_clamps_to_bounds() {
        let mut nav = OrbitNavigator::new(Vec3::ZERO, 15.0);
        nav.on_scroll(1000.0);
        assert!(nav.goal_distance >= OrbitNavigator::MIN_DISTANCE);
        nav.on_scroll(-1000.0);
        assert!(nav.goal_distance <= OrbitNavigator::MAX_DISTANCE);
    }

    #[test]
    fn test_pitch_clamps_short_of_the_poles() {
        let mut nav = OrbitNavigator::new(Vec3::ZERO, 15.0);
        nav.on_drag(0.0, 1e6);
        assert!(nav.goal_pitch <= OrbitNavigator::MAX_PITCH);
    }
}
