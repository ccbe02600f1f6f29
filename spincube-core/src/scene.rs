/// Write-once scene state computed by the initializer
use nalgebra::Matrix4;
use thiserror::Error;

use crate::animation::FrameUpdate;
use crate::config::SceneConfig;
use crate::geometry::{ColoredMesh, MeshError};
use crate::projection::Camera;

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("canvas has zero size ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },

    #[error("invalid mesh: {0}")]
    Mesh(#[from] MeshError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthFunc {
    LessOrEqual,
}

/// Everything fixed for the lifetime of the session, plus the latest model matrix.
///
/// Projection and view have no setters; the only way to change them is to
/// build a new `Scene`.
#[derive(Debug, Clone)]
pub struct Scene {
    mesh: ColoredMesh<'static>,
    camera: Camera,
    projection: Matrix4<f32>,
    view: Matrix4<f32>,
    model: Matrix4<f32>,
    viewport: Viewport,
    clear_color: [f32; 4],
    clear_depth: f32,
    depth_func: DepthFunc,
}

impl Scene {
    pub fn new(config: &SceneConfig, width: u32, height: u32) -> Result<Self, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::EmptySurface { width, height });
        }

        let mesh = ColoredMesh::cube();
        mesh.validate()?;

        let camera = Camera::from_config(config, width, height);
        log::debug!(
            "scene {}x{}: fov {} near {} far {}",
            width,
            height,
            config.fov_degrees,
            camera.near,
            camera.far
        );

        Ok(Self {
            mesh,
            projection: camera.projection_matrix(),
            view: camera.view_matrix(),
            camera,
            model: Matrix4::identity(),
            viewport: Viewport {
                x: 0,
                y: 0,
                width: width as i32,
                height: height as i32,
            },
            clear_color: config.clear_color,
            clear_depth: config.clear_depth,
            depth_func: DepthFunc::LessOrEqual,
        })
    }

    pub fn mesh(&self) -> &ColoredMesh<'static> {
        &self.mesh
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn projection(&self) -> &Matrix4<f32> {
        &self.projection
    }

    pub fn view(&self) -> &Matrix4<f32> {
        &self.view
    }

    pub fn model(&self) -> &Matrix4<f32> {
        &self.model
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    pub fn clear_depth(&self) -> f32 {
        self.clear_depth
    }

    pub fn depth_func(&self) -> DepthFunc {
        self.depth_func
    }

    /// Record the model matrix of a frame
    pub fn apply(&mut self, update: &FrameUpdate) {
        self.model = update.model;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Animator;

    #[test]
    fn test_initial_state_800x600() {
        let scene = Scene::new(&SceneConfig::default(), 800, 600).unwrap();
        assert_eq!(
            scene.viewport(),
            Viewport {
                x: 0,
                y: 0,
                width: 800,
                height: 600
            }
        );
        assert!((scene.camera().aspect - 800.0 / 600.0).abs() < 1e-6);
        assert_eq!(*scene.model(), Matrix4::identity());
        assert_eq!(scene.clear_color(), [0.5, 0.5, 0.5, 1.0]);
        assert_eq!(scene.clear_depth(), 1.0);
        assert_eq!(scene.depth_func(), DepthFunc::LessOrEqual);
        assert_eq!(scene.mesh().index_count(), 36);
    }

    #[test]
    fn test_rejects_empty_surface() {
        let err = Scene::new(&SceneConfig::default(), 0, 600).unwrap_err();
        assert_eq!(
            err,
            SceneError::EmptySurface {
                width: 0,
                height: 600
            }
        );
    }

    #[test]
    fn test_projection_and_view_survive_frames() {
        let mut scene = Scene::new(&SceneConfig::default(), 1024, 768).unwrap();
        let projection = *scene.projection();
        let view = *scene.view();

        let mut animator = Animator::default();
        for i in 0..240 {
            let update = animator.tick(i as f64 * 16.6);
            scene.apply(&update);
        }

        assert_eq!(*scene.projection(), projection);
        assert_eq!(*scene.view(), view);
        assert!((*scene.model() - Matrix4::identity()).norm() > 1e-3);
    }
}
