pub mod axes;
pub mod euler_angles;
pub mod rotation_matrix;

use nalgebra::Vector3;

pub mod prelude {
    pub use crate::axes::*;
    pub use crate::euler_angles::*;
    pub use crate::rotation_matrix::*;
    pub use crate::RotationTrait;
}

/// Trait defining rotation and transformation operations.
pub trait RotationTrait {
    /// Rotates a vector by the rotation.
    ///
    /// # Arguments
    ///
    /// * `v` - The vector to be rotated.
    ///
    /// # Returns
    ///
    /// The rotated vector, expressed in the same frame as `v`.
    fn rotate(&self, v: Vector3<f64>) -> Vector3<f64>;

    /// Transforms a vector by the rotation.
    ///
    /// If the rotation describes the orientation of frame B in frame A, this
    /// takes the coordinates of `v` in A and returns its coordinates in B.
    ///
    /// # Arguments
    ///
    /// * `v` - The vector to be transformed.
    ///
    /// # Returns
    ///
    /// The transformed vector.
    fn transform(&self, v: Vector3<f64>) -> Vector3<f64>;

    fn inv(&self) -> Self;

    fn identity() -> Self;
}
