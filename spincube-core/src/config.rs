/// Scene configuration with the fixed defaults of the spinning cube
use nalgebra::{Point3, Vector3};

use crate::animation::FirstFrame;
use crate::transform::AxisRates;

/// Everything the initializer and frame updater need that is not geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// DOM id of the canvas element to draw into
    pub canvas_id: String,
    /// Context names tried in order until one succeeds
    pub context_names: Vec<String>,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub clear_color: [f32; 4],
    pub clear_depth: f32,
    /// Elapsed milliseconds that add one unit to the rotation angle
    pub millis_per_radian: f64,
    pub axis_rates: AxisRates,
    pub first_frame: FirstFrame,
}

impl SceneConfig {
    pub fn with_canvas_id(mut self, canvas_id: impl Into<String>) -> Self {
        self.canvas_id = canvas_id.into();
        self
    }

    pub fn with_first_frame(mut self, first_frame: FirstFrame) -> Self {
        self.first_frame = first_frame;
        self
    }

    pub fn with_axis_rates(mut self, axis_rates: AxisRates) -> Self {
        self.axis_rates = axis_rates;
        self
    }

    pub fn with_millis_per_radian(mut self, millis_per_radian: f64) -> Self {
        self.millis_per_radian = millis_per_radian;
        self
    }

    /// Field of view in radians
    pub fn fov(&self) -> f32 {
        self.fov_degrees.to_radians()
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_id: "glcanvas".to_string(),
            context_names: vec!["webgl".to_string(), "experimental-webgl".to_string()],
            fov_degrees: 45.0,
            near: 1.0,
            far: 100.0,
            eye: Point3::new(3.0, 3.0, 3.0),
            target: Point3::origin(),
            up: Vector3::y(),
            clear_color: [0.5, 0.5, 0.5, 1.0],
            clear_depth: 1.0,
            millis_per_radian: 500.0,
            axis_rates: AxisRates::default(),
            first_frame: FirstFrame::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = SceneConfig::default();
        assert_eq!(config.context_names, vec!["webgl", "experimental-webgl"]);
        assert!((config.fov() - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
        assert_eq!(config.near, 1.0);
        assert_eq!(config.far, 100.0);
        assert_eq!(config.millis_per_radian, 500.0);
        assert_eq!(config.clear_color[3], 1.0);
    }

    #[test]
    fn test_builder_overrides() {
        let config = SceneConfig::default()
            .with_canvas_id("other")
            .with_first_frame(FirstFrame::SeedBaseline)
            .with_millis_per_radian(1000.0)
            .with_axis_rates(AxisRates::new(1.0, 0.0, 0.0));
        assert_eq!(config.canvas_id, "other");
        assert_eq!(config.axis_rates, AxisRates::new(1.0, 0.0, 0.0));
        assert_eq!(config.first_frame, FirstFrame::SeedBaseline);
        assert_eq!(config.millis_per_radian, 1000.0);
    }
}
