use crate::{cache::ModelCache, kinematics::update_kinematics, model::Model, MultibodyErrors};
use nalgebra::DVector;

/// Sum of 1/2 v' I v over the movable bodies.
pub fn kinetic_energy(
    model: &Model,
    cache: &mut ModelCache,
    q: &DVector<f64>,
    q_dot: &DVector<f64>,
) -> Result<f64, MultibodyErrors> {
    update_kinematics(model, cache, q, q_dot, &DVector::zeros(q.len()))?;
    Ok((1..cache.len())
        .map(|i| {
            let v = cache.v[i];
            0.5 * v.dot(&(model.bodies[i].spatial_inertia() * v))
        })
        .sum())
}

/// Gravitational potential of the movable bodies, zero at the world origin.
pub fn potential_energy(
    model: &Model,
    cache: &mut ModelCache,
    q: &DVector<f64>,
) -> Result<f64, MultibodyErrors> {
    let zero = DVector::zeros(q.len());
    update_kinematics(model, cache, q, &zero, &zero)?;
    Ok((1..cache.len())
        .map(|i| {
            let body = &model.bodies[i];
            let com = cache.x_base[i].0.inv_transform_point(body.center_of_mass());
            -body.mass() * model.gravity.dot(&com)
        })
        .sum())
}
