use crate::{
    algorithms::{check_state, outward_kinematics},
    cache::ModelCache,
    model::Model,
    MultibodyErrors,
};
use nalgebra::{DVector, Vector3};
use rotations::RotationTrait;
use spatial_algebra::{MotionVector, SpatialTransform};

/// Outward pass without dynamics: transforms, velocities and accelerations of every body.
///
/// The base sits at `Model::base_transform` for floating base models and at the world origin
/// otherwise, at rest in both cases.
pub fn update_kinematics(
    model: &Model,
    cache: &mut ModelCache,
    q: &DVector<f64>,
    q_dot: &DVector<f64>,
    q_ddot: &DVector<f64>,
) -> Result<(), MultibodyErrors> {
    cache.check(model)?;
    let n = model.n_bodies();
    check_state("q", q, n)?;
    check_state("q_dot", q_dot, n)?;
    check_state("q_ddot", q_ddot, n)?;

    let x_base = if model.is_floating() {
        SpatialTransform(model.base_transform())
    } else {
        SpatialTransform::identity()
    };
    outward_kinematics(model, cache, q, q_dot, x_base, MotionVector::zeros())?;

    cache.a[0] = MotionVector::zeros();
    for i in 1..cache.len() {
        cache.q_ddot[i] = q_ddot[i - 1];
        cache.a[i] = cache.x_lambda[i] * cache.a[model.parents[i]]
            + cache.c[i]
            + cache.s[i] * q_ddot[i - 1];
    }
    Ok(())
}

fn check_body(model: &Model, body_id: usize) -> Result<(), MultibodyErrors> {
    if body_id == 0 || body_id > model.n_bodies() {
        return Err(MultibodyErrors::BodyNotFound(body_id));
    }
    Ok(())
}

/// Velocity in world coordinates of a point fixed on a body, `point` in body coordinates.
pub fn calc_point_velocity(
    model: &Model,
    cache: &mut ModelCache,
    q: &DVector<f64>,
    q_dot: &DVector<f64>,
    body_id: usize,
    point: Vector3<f64>,
) -> Result<Vector3<f64>, MultibodyErrors> {
    check_body(model, body_id)?;
    update_kinematics(model, cache, q, q_dot, &DVector::zeros(q.len()))?;

    let v = cache.v[body_id];
    let v_point = v.translation() + v.rotation().cross(&point);
    Ok(cache.x_base[body_id].0.rotation.rotate(v_point))
}

/// Acceleration in world coordinates of a point fixed on a body, `point` in body coordinates.
pub fn calc_point_acceleration(
    model: &Model,
    cache: &mut ModelCache,
    q: &DVector<f64>,
    q_dot: &DVector<f64>,
    q_ddot: &DVector<f64>,
    body_id: usize,
    point: Vector3<f64>,
) -> Result<Vector3<f64>, MultibodyErrors> {
    check_body(model, body_id)?;
    update_kinematics(model, cache, q, q_dot, q_ddot)?;

    // spatial to classical: add omega x velocity of the point
    let v = cache.v[body_id];
    let a = cache.a[body_id];
    let omega = v.rotation();
    let v_point = v.translation() + omega.cross(&point);
    let a_point = a.translation() + a.rotation().cross(&point) + omega.cross(&v_point);
    Ok(cache.x_base[body_id].0.rotation.rotate(a_point))
}

/// Position in world coordinates of a point given in body coordinates.
pub fn calc_body_to_base_coordinates(
    model: &Model,
    cache: &mut ModelCache,
    q: &DVector<f64>,
    body_id: usize,
    point: Vector3<f64>,
) -> Result<Vector3<f64>, MultibodyErrors> {
    check_body(model, body_id)?;
    let zero = DVector::zeros(q.len());
    update_kinematics(model, cache, q, &zero, &zero)?;
    Ok(cache.x_base[body_id].0.inv_transform_point(point))
}

/// Position in body coordinates of a point given in world coordinates.
pub fn calc_base_to_body_coordinates(
    model: &Model,
    cache: &mut ModelCache,
    q: &DVector<f64>,
    body_id: usize,
    point: Vector3<f64>,
) -> Result<Vector3<f64>, MultibodyErrors> {
    check_body(model, body_id)?;
    let zero = DVector::zeros(q.len());
    update_kinematics(model, cache, q, &zero, &zero)?;
    Ok(cache.x_base[body_id].0.transform_point(point))
}
