use crate::{model::Model, MultibodyErrors};
use spatial_algebra::{ForceVector, MotionVector, SpatialInertia, SpatialTransform};

/// Working state written by every algorithm, indexed by body id like the `Model` arrays.
///
/// Build one cache per thread and pass it by `&mut`, the model itself can be shared.
#[derive(Clone, Debug)]
pub struct ModelCache {
    /// body i from parent
    pub x_lambda: Vec<SpatialTransform>,
    /// body i from world
    pub x_base: Vec<SpatialTransform>,
    pub s: Vec<MotionVector>,
    pub v: Vec<MotionVector>,
    pub a: Vec<MotionVector>,
    pub c: Vec<MotionVector>,
    pub inertia_articulated: Vec<SpatialInertia>,
    /// articulated bias force, pA
    pub p_big_a: Vec<ForceVector>,
    pub big_u: Vec<ForceVector>,
    pub big_d: Vec<f64>,
    pub lil_u: Vec<f64>,
    pub q_ddot: Vec<f64>,
    /// rnea body forces
    pub f: Vec<ForceVector>,
}

impl ModelCache {
    pub fn new(model: &Model) -> Result<Self, MultibodyErrors> {
        model.ensure_initialized()?;
        let n = model.n_bodies() + 1;
        Ok(Self {
            x_lambda: vec![SpatialTransform::identity(); n],
            x_base: vec![SpatialTransform::identity(); n],
            s: vec![MotionVector::zeros(); n],
            v: vec![MotionVector::zeros(); n],
            a: vec![MotionVector::zeros(); n],
            c: vec![MotionVector::zeros(); n],
            inertia_articulated: vec![SpatialInertia::zeros(); n],
            p_big_a: vec![ForceVector::zeros(); n],
            big_u: vec![ForceVector::zeros(); n],
            big_d: vec![0.0; n],
            lil_u: vec![0.0; n],
            q_ddot: vec![0.0; n],
            f: vec![ForceVector::zeros(); n],
        })
    }

    /// Number of bodies including the base.
    pub fn len(&self) -> usize {
        self.x_base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_base.is_empty()
    }

    /// Rejects a stale model or a cache built for a different model.
    pub(crate) fn check(&self, model: &Model) -> Result<(), MultibodyErrors> {
        model.ensure_initialized()?;
        let expected = model.n_bodies() + 1;
        if self.len() != expected {
            return Err(MultibodyErrors::CacheSizeMismatch {
                expected,
                found: self.len(),
            });
        }
        Ok(())
    }
}
