use super::{check_state, gravity_force, outward_kinematics};
use crate::{cache::ModelCache, model::Model, MultibodyErrors};
use nalgebra::DVector;
use spatial_algebra::{MotionVector, SpatialTransform};
use tracing::trace;

/// Joint torques that produce `q_ddot` for a fixed base model.
pub fn inverse_dynamics(
    model: &Model,
    cache: &mut ModelCache,
    q: &DVector<f64>,
    q_dot: &DVector<f64>,
    q_ddot: &DVector<f64>,
) -> Result<DVector<f64>, MultibodyErrors> {
    cache.check(model)?;
    let n = model.n_bodies();
    check_state("q", q, n)?;
    check_state("q_dot", q_dot, n)?;
    check_state("q_ddot", q_ddot, n)?;
    trace!(bodies = n, "inverse dynamics");

    outward_kinematics(
        model,
        cache,
        q,
        q_dot,
        SpatialTransform::identity(),
        MotionVector::zeros(),
    )?;

    cache.a[0] = MotionVector::zeros();
    for i in 1..cache.len() {
        let inertia = model.bodies[i].spatial_inertia();
        let v = cache.v[i];
        cache.q_ddot[i] = q_ddot[i - 1];
        cache.a[i] = cache.x_lambda[i] * cache.a[model.parents[i]]
            + cache.s[i] * q_ddot[i - 1]
            + cache.c[i];
        cache.f[i] =
            inertia * cache.a[i] + v.cross_force(inertia * v) - gravity_force(model, cache, i);
    }

    let mut tau = DVector::zeros(n);
    for i in (1..cache.len()).rev() {
        tau[i - 1] = cache.s[i].dot(&cache.f[i]);
        let parent = model.parents[i];
        if parent != 0 {
            let f = cache.x_lambda[i].inv() * cache.f[i];
            cache.f[parent] += f;
        }
    }
    Ok(tau)
}
