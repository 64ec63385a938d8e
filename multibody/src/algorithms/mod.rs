pub mod articulated_body_algorithm;
pub mod composite_rigid_body;
pub mod jcalc;
pub mod recursive_newton_euler;

use crate::{cache::ModelCache, model::Model, MultibodyErrors};
use jcalc::{jcalc, JointKinematics};
use nalgebra::{DVector, Vector3};
use spatial_algebra::{ForceVector, MotionVector, SpatialTransform};

pub(crate) fn check_state(
    name: &'static str,
    state: &DVector<f64>,
    expected: usize,
) -> Result<(), MultibodyErrors> {
    if state.len() != expected {
        return Err(MultibodyErrors::StateLength {
            name,
            expected,
            found: state.len(),
        });
    }
    Ok(())
}

/// Gravity wrench on a body, in body coordinates.
pub(crate) fn gravity_force(model: &Model, cache: &ModelCache, body_id: usize) -> ForceVector {
    let a_g = MotionVector::new(Vector3::zeros(), model.gravity);
    model.bodies[body_id].spatial_inertia() * (cache.x_base[body_id] * a_g)
}

/// Outward kinematics pass shared by every algorithm: X_lambda, X_base, S, v and c of each body.
/// `x_base` and `v_base` seed the base, body 0.
pub(crate) fn outward_kinematics(
    model: &Model,
    cache: &mut ModelCache,
    q: &DVector<f64>,
    q_dot: &DVector<f64>,
    x_base: SpatialTransform,
    v_base: MotionVector,
) -> Result<(), MultibodyErrors> {
    cache.x_base[0] = x_base;
    cache.v[0] = v_base;
    cache.c[0] = MotionVector::zeros();

    for i in 1..cache.len() {
        let JointKinematics { xj, s, vj, cj } = jcalc(model, i, q[i - 1], q_dot[i - 1])?;
        let parent = model.parents[i];

        let x_lambda = xj * model.joint_frames[i];
        cache.x_lambda[i] = x_lambda;
        cache.x_base[i] = x_lambda * cache.x_base[parent];
        cache.s[i] = s;
        cache.v[i] = x_lambda * cache.v[parent] + vj;
        cache.c[i] = cache.v[i].cross_motion(vj) + cj;
    }
    Ok(())
}
