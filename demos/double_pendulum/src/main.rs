use multibody::prelude::*;
use nalgebra::{DVector, Vector3};
use rotations::prelude::*;
use std::error::Error;
use tracing::info;
use transforms::Transform;

const DT: f64 = 1e-3;
const STOP: f64 = 20.0;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    // settings can be overridden with a ron file, e.g. (gravity: (0.0, 0.0, -1.62))
    let settings = match std::env::args().nth(1) {
        Some(path) => ModelSettings::from_ron(&std::fs::read_to_string(path)?)?,
        None => ModelSettings {
            gravity: [0.0, 0.0, -9.8],
            ..Default::default()
        },
    };

    // 1 m links hanging along -z from a hinge at their top
    let link = Body::new(1.0, Vector3::new(0.0, 0.0, -0.5), Vector3::new(1.0, 1.0, 1.0))?;
    let hinge = Joint::revolute(Axis::Xp)?;
    let bottom = Transform::from_translation(Vector3::new(0.0, 0.0, -1.0));

    let mut model = Model::new().with_settings(&settings);
    let b1 = model.add_body(0, Transform::identity(), hinge, link)?;
    let b2 = model.add_body(b1, bottom, hinge, link)?;
    model.add_contact(b2, Vector3::new(0.0, 0.0, -1.0))?;
    model.init()?;

    let mut cache = ModelCache::new(&model)?;
    let mut q = DVector::from_row_slice(&[1.0, 0.0]);
    let mut q_dot = DVector::from_row_slice(&[0.0, 0.1]);
    let tau = DVector::zeros(model.n_bodies());

    let e0 = total_energy(&model, &mut cache, &q, &q_dot)?;
    info!(energy = e0, "starting simulation");

    let steps = (STOP / DT).round() as usize;
    for step in 1..=steps {
        (q, q_dot) = rk4(&model, &mut cache, &q, &q_dot, &tau)?;

        if step % 1000 == 0 {
            let contact = model.contact(0)?;
            let tip = calc_body_to_base_coordinates(
                &model,
                &mut cache,
                &q,
                contact.body_id,
                contact.point,
            )?;
            let energy = total_energy(&model, &mut cache, &q, &q_dot)?;
            info!(
                t = step as f64 * DT,
                q1 = q[0],
                q2 = q[1],
                tip_y = tip[1],
                tip_z = tip[2],
                energy,
                drift = energy - e0,
                "state"
            );
        }
    }
    Ok(())
}

fn total_energy(
    model: &Model,
    cache: &mut ModelCache,
    q: &DVector<f64>,
    q_dot: &DVector<f64>,
) -> Result<f64, MultibodyErrors> {
    Ok(kinetic_energy(model, cache, q, q_dot)? + potential_energy(model, cache, q)?)
}

fn rk4(
    model: &Model,
    cache: &mut ModelCache,
    q: &DVector<f64>,
    q_dot: &DVector<f64>,
    tau: &DVector<f64>,
) -> Result<(DVector<f64>, DVector<f64>), MultibodyErrors> {
    let half = DT / 2.0;
    let k1_q = q_dot.clone();
    let k1_v = forward_dynamics(model, cache, q, q_dot, tau)?;
    let k2_q = q_dot + &k1_v * half;
    let k2_v = forward_dynamics(model, cache, &(q + &k1_q * half), &k2_q, tau)?;
    let k3_q = q_dot + &k2_v * half;
    let k3_v = forward_dynamics(model, cache, &(q + &k2_q * half), &k3_q, tau)?;
    let k4_q = q_dot + &k3_v * DT;
    let k4_v = forward_dynamics(model, cache, &(q + &k3_q * DT), &k4_q, tau)?;

    let q_next = q + (k1_q + k2_q * 2.0 + k3_q * 2.0 + k4_q) * (DT / 6.0);
    let q_dot_next = q_dot + (k1_v + k2_v * 2.0 + k3_v * 2.0 + k4_v) * (DT / 6.0);
    Ok((q_next, q_dot_next))
}
