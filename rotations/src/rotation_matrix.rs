use super::*;
use axes::Axis;
use euler_angles::EulerAngles;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// A struct representing a 3x3 rotation matrix.
///
/// The columns are the axes of the rotated frame expressed in the reference frame,
/// so `rotate` maps a vector within a frame and `transform` re-expresses it in the rotated frame.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationMatrix(pub Matrix3<f64>);

impl RotationMatrix {
    /// Rotation by `angle` radians about a cardinal axis, right hand rule.
    pub fn about_axis(axis: Axis, angle: f64) -> Self {
        if !axis.is_positive() {
            return Self::about_axis(-axis, -angle);
        }
        let (s, c) = angle.sin_cos();
        Self(match axis {
            Axis::Xp | Axis::Xn => Matrix3::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c),
            Axis::Yp | Axis::Yn => Matrix3::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c),
            Axis::Zp | Axis::Zn => Matrix3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0),
        })
    }

    pub fn get_value(&self) -> Matrix3<f64> {
        self.0
    }
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self(Matrix3::identity())
    }
}

impl From<Matrix3<f64>> for RotationMatrix {
    fn from(value: Matrix3<f64>) -> Self {
        Self(value)
    }
}

impl From<EulerAngles> for RotationMatrix {
    /// Converts ZYX `EulerAngles` into a `RotationMatrix`.
    ///
    /// # Arguments
    ///
    /// * `euler_angles` - The euler_angles to be converted.
    ///
    /// # Returns
    ///
    /// A new `RotationMatrix` representing the rotation defined by the euler angles.
    fn from(euler_angles: EulerAngles) -> RotationMatrix {
        let rotz = RotationMatrix::about_axis(Axis::Zp, euler_angles.phi);
        let roty = RotationMatrix::about_axis(Axis::Yp, euler_angles.theta);
        let rotx = RotationMatrix::about_axis(Axis::Xp, euler_angles.psi);
        rotz * roty * rotx
    }
}

impl RotationTrait for RotationMatrix {
    /// Rotates a vector by the rotation matrix.
    fn rotate(&self, v: Vector3<f64>) -> Vector3<f64> {
        self.0 * v
    }

    /// Transforms a vector by the transpose of the rotation matrix.
    fn transform(&self, v: Vector3<f64>) -> Vector3<f64> {
        self.0.transpose() * v
    }

    fn inv(&self) -> Self {
        RotationMatrix::from(self.0.transpose())
    }

    fn identity() -> Self {
        Self(Matrix3::identity())
    }
}

impl Mul<RotationMatrix> for RotationMatrix {
    type Output = RotationMatrix;

    /// Multiplies two rotation matrices.
    ///
    /// # Arguments
    ///
    /// * `rhs` - The right-hand side rotation matrix.
    ///
    /// # Returns
    ///
    /// A new `RotationMatrix` representing the product of the two rotation matrices.
    fn mul(self, rhs: RotationMatrix) -> RotationMatrix {
        RotationMatrix::from(self.0 * rhs.0)
    }
}
