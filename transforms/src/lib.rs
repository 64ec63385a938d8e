use nalgebra::Vector3;
use rotations::{rotation_matrix::RotationMatrix, RotationTrait};
use serde::{Deserialize, Serialize};
use std::ops::Mul;

pub mod prelude {
    pub use crate::Transform;
    pub use rotations::prelude::*;
}

/// Pose of a frame B relative to a reference frame A.
///
/// We use the terminology B_from_A, so a transform named `b_from_a` maps coordinates in A
/// to coordinates in B, and transforms compose like matrices: `c_from_a = c_from_b * b_from_a`.
/// `rotation` holds the axes of B expressed in A, `translation` is the origin of B expressed in A.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub rotation: RotationMatrix,
    pub translation: Vector3<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn new(rotation: RotationMatrix, translation: Vector3<f64>) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    pub fn identity() -> Self {
        Self::new(RotationMatrix::identity(), Vector3::zeros())
    }

    pub fn from_rotation(rotation: RotationMatrix) -> Self {
        Self::new(rotation, Vector3::zeros())
    }

    pub fn from_translation(translation: Vector3<f64>) -> Self {
        Self::new(RotationMatrix::identity(), translation)
    }

    pub fn inv(&self) -> Self {
        let rotation = self.rotation.inv();
        let translation = -rotation.rotate(self.translation);
        Self::new(rotation, translation)
    }

    /// Coordinates in B of a point given in A.
    pub fn transform_point(&self, point: Vector3<f64>) -> Vector3<f64> {
        self.rotation.transform(point - self.translation)
    }

    /// Coordinates in A of a point given in B.
    pub fn inv_transform_point(&self, point: Vector3<f64>) -> Vector3<f64> {
        self.translation + self.rotation.rotate(point)
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;

    /// `self` is C_from_B and `rhs` is B_from_A, the result is C_from_A.
    fn mul(self, rhs: Transform) -> Transform {
        let rotation = rhs.rotation * self.rotation;
        let translation = rhs.translation + rhs.rotation.rotate(self.translation);
        Transform::new(rotation, translation)
    }
}
