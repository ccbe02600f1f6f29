/// Camera and projection utilities
use nalgebra::{Matrix4, Point3, Vector3};

use crate::config::SceneConfig;

/// Fixed camera looking at the cube
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    /// Vertical field of view in radians
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_config(&SceneConfig::default(), width, height)
    }

    pub fn from_config(config: &SceneConfig, width: u32, height: u32) -> Self {
        Self {
            eye: config.eye,
            target: config.target,
            up: config.up,
            fov: config.fov(),
            aspect: width as f32 / height as f32,
            near: config.near,
            far: config.far,
        }
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.eye, &self.target, &self.up)
    }

    /// Create the perspective projection matrix, GL clip conventions
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_creation() {
        let camera = Camera::new(800, 600);
        assert!((camera.aspect - 800.0 / 600.0).abs() < 1e-6);
        assert_eq!(camera.eye, Point3::new(3.0, 3.0, 3.0));
        assert_eq!(camera.near, 1.0);
        assert_eq!(camera.far, 100.0);
    }

    #[test]
    fn test_projection_aspect_term() {
        let projection = Camera::new(800, 600).projection_matrix();
        let f = 1.0 / (std::f32::consts::FRAC_PI_8).tan();
        assert!((projection[(1, 1)] - f).abs() < 1e-5);
        // x scale is y scale divided by the aspect ratio
        let aspect = projection[(1, 1)] / projection[(0, 0)];
        assert!((aspect - 800.0 / 600.0).abs() < 1e-5);
    }

    #[test]
    fn test_projection_depth_range() {
        let projection = Camera::default().projection_matrix();
        let near = projection.transform_point(&Point3::new(0.0, 0.0, -1.0));
        let far = projection.transform_point(&Point3::new(0.0, 0.0, -100.0));
        assert!((near.z + 1.0).abs() < 1e-5);
        assert!((far.z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_view_matrix_centers_target() {
        let camera = Camera::default();
        let view = camera.view_matrix();

        // The target lands on the negative view axis at the eye distance
        let target = view.transform_point(&camera.target);
        let distance = (camera.eye - camera.target).norm();
        assert!(target.x.abs() < 1e-5);
        assert!(target.y.abs() < 1e-5);
        assert!((target.z + distance).abs() < 1e-5);

        // And the eye sits at the origin
        let eye = view.transform_point(&camera.eye);
        assert!(eye.coords.norm() < 1e-5);
    }
}
