/// Frame-to-frame animation state: turns a display-refresh timestamp into
/// everything a backend needs to draw one frame
use nalgebra::Matrix4;

use crate::config::SceneConfig;
use crate::geometry::CUBE_INDICES;
use crate::transform::{AxisRates, Transform};

/// How the very first timestamp is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FirstFrame {
    /// Measure the first delta from t = 0, so the cube jumps ahead by the
    /// time the page spent loading.
    #[default]
    ZeroBaseline,
    /// Only record the first timestamp; rotation starts on the second tick.
    SeedBaseline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Triangles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexType {
    UnsignedShort,
}

/// One indexed draw over the bound index buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub primitive: Primitive,
    pub count: i32,
    pub index_type: IndexType,
    /// Byte offset into the index buffer
    pub offset: i32,
    pub depth_test: bool,
    pub clear_color: bool,
    pub clear_depth: bool,
}

impl DrawCall {
    /// Full-cube draw: every index as triangles after clearing color and depth
    pub fn cube() -> Self {
        Self {
            primitive: Primitive::Triangles,
            count: CUBE_INDICES.len() as i32,
            index_type: IndexType::UnsignedShort,
            offset: 0,
            depth_test: true,
            clear_color: true,
            clear_depth: true,
        }
    }
}

/// Output of a single tick
#[derive(Debug, Clone, PartialEq)]
pub struct FrameUpdate {
    pub angle: f64,
    pub model: Matrix4<f32>,
    pub draw: DrawCall,
}

#[derive(Debug, Clone)]
pub struct Animator {
    angle: f64,
    last_timestamp: Option<f64>,
    millis_per_radian: f64,
    rates: AxisRates,
    first_frame: FirstFrame,
}

impl Animator {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            angle: 0.0,
            last_timestamp: None,
            millis_per_radian: config.millis_per_radian,
            rates: config.axis_rates,
            first_frame: config.first_frame,
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_timestamp
    }

    /// Advance the rotation angle to `timestamp` (milliseconds) and return it
    pub fn advance(&mut self, timestamp: f64) -> f64 {
        let baseline = match (self.last_timestamp, self.first_frame) {
            (Some(last), _) => last,
            (None, FirstFrame::ZeroBaseline) => 0.0,
            (None, FirstFrame::SeedBaseline) => timestamp,
        };
        self.last_timestamp = Some(timestamp);

        let mut delta = timestamp - baseline;
        if delta < 0.0 {
            log::warn!(
                "timestamp went backwards ({} -> {}), holding rotation",
                baseline,
                timestamp
            );
            delta = 0.0;
        }

        self.angle += delta / self.millis_per_radian;
        self.angle
    }

    /// Model matrix for the current angle
    pub fn model_matrix(&self) -> Matrix4<f32> {
        Transform::tumble_matrix(self.angle as f32, &self.rates)
    }

    pub fn tick(&mut self, timestamp: f64) -> FrameUpdate {
        let angle = self.advance(timestamp);
        log::trace!("tick at {:.3}ms, angle {:.4}", timestamp, angle);

        FrameUpdate {
            angle,
            model: self.model_matrix(),
            draw: DrawCall::cube(),
        }
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(&SceneConfig::default())
    }
}
