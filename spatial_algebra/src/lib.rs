use mass_properties::MassProperties;
use nalgebra::{Matrix3, Matrix6, Vector3, Vector6};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};
use transforms::Transform;

/// Plucker coordinates, angular part first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpatialVector {
    pub rotation: Vector3<f64>,
    pub translation: Vector3<f64>,
}

impl SpatialVector {
    pub fn new(rotation: Vector3<f64>, translation: Vector3<f64>) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    pub fn zeros() -> Self {
        Self::new(Vector3::zeros(), Vector3::zeros())
    }

    pub fn vector(&self) -> Vector6<f64> {
        Vector6::new(
            self.rotation[0],
            self.rotation[1],
            self.rotation[2],
            self.translation[0],
            self.translation[1],
            self.translation[2],
        )
    }

    ///Featherstone 2.34
    pub fn cross_force(self, rhs: SpatialVector) -> SpatialVector {
        let new_rotation =
            self.rotation.cross(&rhs.rotation) + self.translation.cross(&rhs.translation);
        let new_translation = self.rotation.cross(&rhs.translation);
        SpatialVector::new(new_rotation, new_translation)
    }

    /// Featherstone 2.33
    pub fn cross_motion(self, rhs: SpatialVector) -> SpatialVector {
        let new_rotation = self.rotation.cross(&rhs.rotation);
        let new_translation =
            self.rotation.cross(&rhs.translation) + self.translation.cross(&rhs.rotation);
        SpatialVector::new(new_rotation, new_translation)
    }

    pub fn dot(&self, rhs: &SpatialVector) -> f64 {
        self.rotation.dot(&rhs.rotation) + self.translation.dot(&rhs.translation)
    }
}

impl From<Vector6<f64>> for SpatialVector {
    fn from(v: Vector6<f64>) -> SpatialVector {
        let rotation = Vector3::new(v[0], v[1], v[2]);
        let translation = Vector3::new(v[3], v[4], v[5]);
        SpatialVector::new(rotation, translation)
    }
}

impl Add<SpatialVector> for SpatialVector {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.rotation + rhs.rotation,
            self.translation + rhs.translation,
        )
    }
}

impl Sub<SpatialVector> for SpatialVector {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.rotation - rhs.rotation,
            self.translation - rhs.translation,
        )
    }
}

impl Neg for SpatialVector {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.rotation, -self.translation)
    }
}

impl Mul<f64> for SpatialVector {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.rotation * rhs, self.translation * rhs)
    }
}

/// Velocities, accelerations and joint motion subspaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionVector(pub SpatialVector);

impl MotionVector {
    pub fn new(rotation: Vector3<f64>, translation: Vector3<f64>) -> Self {
        Self(SpatialVector::new(rotation, translation))
    }

    pub fn zeros() -> Self {
        Self(SpatialVector::zeros())
    }

    pub fn rotation(&self) -> Vector3<f64> {
        self.0.rotation
    }

    pub fn translation(&self) -> Vector3<f64> {
        self.0.translation
    }

    pub fn vector(&self) -> Vector6<f64> {
        self.0.vector()
    }

    pub fn cross_motion(self, rhs: MotionVector) -> MotionVector {
        MotionVector(self.0.cross_motion(rhs.0))
    }

    pub fn cross_force(self, rhs: ForceVector) -> ForceVector {
        ForceVector(self.0.cross_force(rhs.0))
    }

    /// Power of a force acting through this motion.
    pub fn dot(&self, force: &ForceVector) -> f64 {
        self.0.dot(&force.0)
    }
}

impl From<Vector6<f64>> for MotionVector {
    fn from(v: Vector6<f64>) -> Self {
        Self(SpatialVector::from(v))
    }
}

impl Add<MotionVector> for MotionVector {
    type Output = MotionVector;
    #[inline]
    fn add(self, rhs: MotionVector) -> MotionVector {
        MotionVector(self.0 + rhs.0)
    }
}

impl Sub<MotionVector> for MotionVector {
    type Output = MotionVector;
    #[inline]
    fn sub(self, rhs: MotionVector) -> MotionVector {
        MotionVector(self.0 - rhs.0)
    }
}

impl Neg for MotionVector {
    type Output = MotionVector;
    #[inline]
    fn neg(self) -> MotionVector {
        MotionVector(-self.0)
    }
}

impl Mul<f64> for MotionVector {
    type Output = MotionVector;
    #[inline]
    fn mul(self, rhs: f64) -> MotionVector {
        MotionVector(self.0 * rhs)
    }
}

/// Forces, momenta and articulated bias forces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ForceVector(pub SpatialVector);

impl ForceVector {
    pub fn new(rotation: Vector3<f64>, translation: Vector3<f64>) -> Self {
        Self(SpatialVector::new(rotation, translation))
    }

    pub fn zeros() -> Self {
        Self(SpatialVector::zeros())
    }

    pub fn rotation(&self) -> Vector3<f64> {
        self.0.rotation
    }

    pub fn translation(&self) -> Vector3<f64> {
        self.0.translation
    }

    pub fn vector(&self) -> Vector6<f64> {
        self.0.vector()
    }

    pub fn dot(&self, motion: &MotionVector) -> f64 {
        self.0.dot(&motion.0)
    }
}

impl From<Vector6<f64>> for ForceVector {
    fn from(v: Vector6<f64>) -> Self {
        Self(SpatialVector::from(v))
    }
}

impl Add<ForceVector> for ForceVector {
    type Output = ForceVector;
    #[inline]
    fn add(self, rhs: ForceVector) -> ForceVector {
        ForceVector(self.0 + rhs.0)
    }
}

impl AddAssign<ForceVector> for ForceVector {
    #[inline]
    fn add_assign(&mut self, rhs: ForceVector) {
        *self = *self + rhs;
    }
}

impl Sub<ForceVector> for ForceVector {
    type Output = ForceVector;
    #[inline]
    fn sub(self, rhs: ForceVector) -> ForceVector {
        ForceVector(self.0 - rhs.0)
    }
}

impl Neg for ForceVector {
    type Output = ForceVector;
    #[inline]
    fn neg(self) -> ForceVector {
        ForceVector(-self.0)
    }
}

impl Mul<f64> for ForceVector {
    type Output = ForceVector;
    #[inline]
    fn mul(self, rhs: f64) -> ForceVector {
        ForceVector(self.0 * rhs)
    }
}

// we only need this as wrapper on Transform, other wise we cant impl Mul<Motion> for Transform since it's not in this crate :(
/// Plucker transform built from a B_from_A `Transform`, maps spatial quantities in A to B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpatialTransform(pub Transform);

impl SpatialTransform {
    pub fn identity() -> Self {
        Self(Transform::identity())
    }

    #[inline]
    pub fn inv(&self) -> SpatialTransform {
        SpatialTransform::from(self.0.inv())
    }

    /// The 6x6 motion transform, Featherstone 2.24.
    pub fn matrix(&self) -> Matrix6<f64> {
        let e = self.0.rotation.get_value().transpose();
        let r_skew = self.0.translation.cross_matrix();
        let mut m = Matrix6::zeros();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&e);
        m.fixed_view_mut::<3, 3>(3, 0).copy_from(&(-e * r_skew));
        m.fixed_view_mut::<3, 3>(3, 3).copy_from(&e);
        m
    }
}

impl From<Transform> for SpatialTransform {
    #[inline]
    fn from(value: Transform) -> Self {
        Self(value)
    }
}

impl Mul<MotionVector> for SpatialTransform {
    type Output = MotionVector;
    fn mul(self, motion: MotionVector) -> MotionVector {
        let e = self.0.rotation.get_value().transpose();
        let r = self.0.translation;

        let rotation = e * motion.0.rotation;
        let translation = e * (motion.0.translation - r.cross(&motion.0.rotation));
        MotionVector::new(rotation, translation)
    }
}

impl Mul<ForceVector> for SpatialTransform {
    type Output = ForceVector;
    fn mul(self, force: ForceVector) -> ForceVector {
        let e = self.0.rotation.get_value().transpose();
        let r = self.0.translation;

        let rotation = e * (force.0.rotation - r.cross(&force.0.translation));
        let translation = e * force.0.translation;
        ForceVector::new(rotation, translation)
    }
}

impl Mul<SpatialInertia> for SpatialTransform {
    type Output = SpatialInertia;
    /// Re-expresses an inertia given in A in frame B.
    fn mul(self, inertia: SpatialInertia) -> SpatialInertia {
        let m = self.inv().matrix();
        SpatialInertia(m.transpose() * inertia.0 * m)
    }
}

impl Mul<SpatialTransform> for SpatialTransform {
    type Output = SpatialTransform;
    #[inline]
    fn mul(self, rhs: SpatialTransform) -> SpatialTransform {
        SpatialTransform::from(self.0 * rhs.0)
    }
}

/// Rigid body or articulated body inertia about a frame origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpatialInertia(pub Matrix6<f64>);

impl Default for SpatialInertia {
    fn default() -> Self {
        Self::zeros()
    }
}

impl SpatialInertia {
    pub fn zeros() -> Self {
        Self(Matrix6::zeros())
    }

    pub fn matrix(&self) -> Matrix6<f64> {
        self.0
    }

    pub fn mass(&self) -> f64 {
        self.0[(5, 5)]
    }
}

impl From<MassProperties> for SpatialInertia {
    /// Featherstone 2.63
    fn from(mp: MassProperties) -> SpatialInertia {
        let mass = mp.mass;
        let cx = mp.center_of_mass.vector().cross_matrix();
        let cxt = cx.transpose();

        let quad11 = mp.inertia_about_origin();
        let quad12 = cx * mass;
        let quad21 = cxt * mass;
        let quad22 = Matrix3::identity() * mass;

        let mut m = Matrix6::zeros();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&quad11);
        m.fixed_view_mut::<3, 3>(0, 3).copy_from(&quad12);
        m.fixed_view_mut::<3, 3>(3, 0).copy_from(&quad21);
        m.fixed_view_mut::<3, 3>(3, 3).copy_from(&quad22);
        SpatialInertia(m)
    }
}

impl From<Matrix6<f64>> for SpatialInertia {
    fn from(m: Matrix6<f64>) -> Self {
        Self(m)
    }
}

impl Mul<MotionVector> for SpatialInertia {
    type Output = ForceVector;
    fn mul(self, motion: MotionVector) -> ForceVector {
        ForceVector::from(self.0 * motion.vector())
    }
}

impl Add<SpatialInertia> for SpatialInertia {
    type Output = SpatialInertia;
    #[inline]
    fn add(self, rhs: SpatialInertia) -> SpatialInertia {
        SpatialInertia(self.0 + rhs.0)
    }
}

impl AddAssign<SpatialInertia> for SpatialInertia {
    #[inline]
    fn add_assign(&mut self, rhs: SpatialInertia) {
        self.0 += rhs.0;
    }
}

impl Sub<SpatialInertia> for SpatialInertia {
    type Output = SpatialInertia;
    #[inline]
    fn sub(self, rhs: SpatialInertia) -> SpatialInertia {
        SpatialInertia(self.0 - rhs.0)
    }
}
