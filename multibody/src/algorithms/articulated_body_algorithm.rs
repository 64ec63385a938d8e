use super::{check_state, gravity_force, outward_kinematics};
use crate::{cache::ModelCache, model::Model, MultibodyErrors};
use nalgebra::DVector;
use spatial_algebra::{ForceVector, MotionVector, SpatialInertia, SpatialTransform};
use tracing::{trace, warn};

/// Joint accelerations of a fixed base model.
///
/// `q`, `q_dot` and `tau` hold one entry per movable body, entry k belongs to body k + 1.
/// A floating base body, if any, is ignored and the base is held at the world origin.
pub fn forward_dynamics(
    model: &Model,
    cache: &mut ModelCache,
    q: &DVector<f64>,
    q_dot: &DVector<f64>,
    tau: &DVector<f64>,
) -> Result<DVector<f64>, MultibodyErrors> {
    check_inputs(model, cache, q, q_dot, tau)?;
    trace!(bodies = model.n_bodies(), "forward dynamics");

    outward_kinematics(
        model,
        cache,
        q,
        q_dot,
        SpatialTransform::identity(),
        MotionVector::zeros(),
    )?;
    aba_first_pass(model, cache);
    aba_second_pass(model, cache, tau, false)?;
    aba_third_pass(model, cache, MotionVector::zeros());
    Ok(joint_accelerations(cache))
}

/// Base and joint accelerations of a model whose base is free to move.
///
/// `x_b` is base from world, `v_b` the base velocity and `f_b` the external force on the base,
/// both in base coordinates. The returned base acceleration is in base coordinates.
/// Without a floating body the base motion is prescribed: its acceleration is zero and the
/// result matches [`forward_dynamics`] for an identity `x_b` and zero `v_b`.
#[allow(clippy::too_many_arguments)]
pub fn forward_dynamics_floating_base(
    model: &Model,
    cache: &mut ModelCache,
    q: &DVector<f64>,
    q_dot: &DVector<f64>,
    tau: &DVector<f64>,
    x_b: SpatialTransform,
    v_b: MotionVector,
    f_b: ForceVector,
) -> Result<(MotionVector, DVector<f64>), MultibodyErrors> {
    check_inputs(model, cache, q, q_dot, tau)?;
    let floating = model.is_floating();
    trace!(bodies = model.n_bodies(), floating, "forward dynamics floating base");

    outward_kinematics(model, cache, q, q_dot, x_b, v_b)?;
    aba_first_pass(model, cache);
    if floating {
        let inertia = model.bodies[0].spatial_inertia();
        cache.inertia_articulated[0] = inertia;
        cache.p_big_a[0] = v_b.cross_force(inertia * v_b) - gravity_force(model, cache, 0) - f_b;
    }
    aba_second_pass(model, cache, tau, floating)?;

    let a_b = if floating {
        let cholesky = cache.inertia_articulated[0]
            .matrix()
            .cholesky()
            .ok_or_else(|| {
                warn!("base articulated inertia is not positive definite");
                MultibodyErrors::SingularBaseInertia
            })?;
        -MotionVector::from(cholesky.solve(&cache.p_big_a[0].vector()))
    } else {
        MotionVector::zeros()
    };

    aba_third_pass(model, cache, a_b);
    Ok((a_b, joint_accelerations(cache)))
}

fn check_inputs(
    model: &Model,
    cache: &ModelCache,
    q: &DVector<f64>,
    q_dot: &DVector<f64>,
    tau: &DVector<f64>,
) -> Result<(), MultibodyErrors> {
    cache.check(model)?;
    let n = model.n_bodies();
    check_state("q", q, n)?;
    check_state("q_dot", q_dot, n)?;
    check_state("tau", tau, n)
}

fn aba_first_pass(model: &Model, cache: &mut ModelCache) {
    for i in 1..cache.len() {
        let inertia = model.bodies[i].spatial_inertia();
        let v = cache.v[i];
        cache.inertia_articulated[i] = inertia;
        cache.p_big_a[i] = v.cross_force(inertia * v) - gravity_force(model, cache, i);
    }
}

/// Inward pass, folds each body into its parent. Body 0 only receives when `fold_into_base`.
fn aba_second_pass(
    model: &Model,
    cache: &mut ModelCache,
    tau: &DVector<f64>,
    fold_into_base: bool,
) -> Result<(), MultibodyErrors> {
    for i in (1..cache.len()).rev() {
        let inertia_articulated = cache.inertia_articulated[i];
        let ia_c = inertia_articulated * cache.c[i];

        let (i_lil_a, p_lil_a) = if model.joints[i].is_fixed() {
            // rigidly attached, the parent carries the whole body
            cache.big_u[i] = ForceVector::zeros();
            cache.big_d[i] = 0.0;
            cache.lil_u[i] = 0.0;
            (inertia_articulated, cache.p_big_a[i] + ia_c)
        } else {
            let s = cache.s[i];
            let big_u = inertia_articulated * s;
            let big_d = s.dot(&big_u);
            if big_d.abs() <= model.singular_tolerance {
                warn!(body_id = i, d = big_d, "singular joint inertia");
                return Err(MultibodyErrors::SingularJointInertia {
                    body_id: i,
                    d: big_d,
                });
            }
            let lil_u = tau[i - 1] - s.dot(&cache.p_big_a[i]) - s.dot(&ia_c);
            cache.big_u[i] = big_u;
            cache.big_d[i] = big_d;
            cache.lil_u[i] = lil_u;

            let u = big_u.vector();
            let i_lil_a =
                SpatialInertia(inertia_articulated.matrix() - u * u.transpose() / big_d);
            (i_lil_a, cache.p_big_a[i] + ia_c + big_u * (lil_u / big_d))
        };

        let parent = model.parents[i];
        if parent != 0 || fold_into_base {
            let parent_from_body = cache.x_lambda[i].inv();
            cache.inertia_articulated[parent] += parent_from_body * i_lil_a;
            cache.p_big_a[parent] += parent_from_body * p_lil_a;
        }
    }
    Ok(())
}

fn aba_third_pass(model: &Model, cache: &mut ModelCache, a_base: MotionVector) {
    cache.a[0] = a_base;
    for i in 1..cache.len() {
        let a_prime = cache.x_lambda[i] * cache.a[model.parents[i]];
        if model.joints[i].is_fixed() {
            cache.q_ddot[i] = 0.0;
            cache.a[i] = a_prime + cache.c[i];
        } else {
            cache.q_ddot[i] = (cache.lil_u[i] - cache.big_u[i].dot(&a_prime)) / cache.big_d[i];
            cache.a[i] = a_prime + cache.c[i] + cache.s[i] * cache.q_ddot[i];
        }
    }
}

fn joint_accelerations(cache: &ModelCache) -> DVector<f64> {
    DVector::from_iterator(cache.len() - 1, cache.q_ddot[1..].iter().copied())
}
