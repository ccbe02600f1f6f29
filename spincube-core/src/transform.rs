/// Model transforms for the tumbling cube
use nalgebra::{Matrix4, Unit, Vector3};

/// Angular rate multipliers applied to the shared rotation angle, per axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRates {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AxisRates {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Default for AxisRates {
    fn default() -> Self {
        Self::new(0.5, 0.3, 0.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn unit(self) -> Unit<Vector3<f32>> {
        match self {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        }
    }
}

/// Transform builder for the cube's model matrix
pub struct Transform;

impl Transform {
    /// Homogeneous rotation about a single principal axis (right-handed, radians)
    pub fn axis_rotation(axis: Axis, angle: f32) -> Matrix4<f32> {
        Matrix4::from_axis_angle(&axis.unit(), angle)
    }

    /// Model matrix for a given accumulated angle.
    ///
    /// Multiplied as `Rx * Ry * Rz`, so Z is applied to the vertex first.
    pub fn tumble_matrix(angle: f32, rates: &AxisRates) -> Matrix4<f32> {
        let rx = Self::axis_rotation(Axis::X, rates.x * angle);
        let ry = Self::axis_rotation(Axis::Y, rates.y * angle);
        let rz = Self::axis_rotation(Axis::Z, rates.z * angle);

        rx * ry * rz
    }
}
