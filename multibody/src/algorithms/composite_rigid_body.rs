use super::{check_state, outward_kinematics};
use crate::{cache::ModelCache, model::Model, MultibodyErrors};
use nalgebra::{DMatrix, DVector};
use spatial_algebra::{MotionVector, SpatialTransform};
use tracing::trace;

/// Joint space inertia matrix H(q) of a fixed base model.
pub fn composite_rigid_body(
    model: &Model,
    cache: &mut ModelCache,
    q: &DVector<f64>,
) -> Result<DMatrix<f64>, MultibodyErrors> {
    cache.check(model)?;
    let n = model.n_bodies();
    check_state("q", q, n)?;
    trace!(bodies = n, "composite rigid body");

    outward_kinematics(
        model,
        cache,
        q,
        &DVector::zeros(n),
        SpatialTransform::identity(),
        MotionVector::zeros(),
    )?;

    // composite inertias, children always have larger ids than their parents
    for i in 1..cache.len() {
        cache.inertia_articulated[i] = model.bodies[i].spatial_inertia();
    }
    for i in (1..cache.len()).rev() {
        let parent = model.parents[i];
        if parent != 0 {
            let ic = cache.x_lambda[i].inv() * cache.inertia_articulated[i];
            cache.inertia_articulated[parent] += ic;
        }
    }

    let mut h = DMatrix::zeros(n, n);
    for i in 1..cache.len() {
        let mut f = cache.inertia_articulated[i] * cache.s[i];
        h[(i - 1, i - 1)] = cache.s[i].dot(&f);

        let mut j = i;
        while model.parents[j] != 0 {
            f = cache.x_lambda[j].inv() * f;
            j = model.parents[j];
            h[(i - 1, j - 1)] = cache.s[j].dot(&f);
            h[(j - 1, i - 1)] = h[(i - 1, j - 1)];
        }
    }
    Ok(h)
}
