use crate::{body::Body, joint::Joint, model::Model};
use nalgebra::{DVector, Vector3};
use rotations::prelude::*;
use transforms::Transform;

/// m = 1, com 1 along x, unit principal inertia, hinged about z at the base origin.
pub fn pendulum() -> Model {
    let mut model = Model::new();
    let body = Body::new(1.0, Vector3::new(1.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0)).unwrap();
    model
        .add_body(0, Transform::identity(), Joint::revolute(Axis::Zp).unwrap(), body)
        .unwrap();
    model.init().unwrap();
    model
}

pub fn double_pendulum() -> Model {
    let mut model = Model::new();
    let link = Body::new(1.0, Vector3::new(0.5, 0.0, 0.0), Vector3::new(0.1, 0.1, 0.1)).unwrap();
    let joint = Joint::revolute(Axis::Zp).unwrap();
    let b1 = model
        .add_body(0, Transform::identity(), joint, link)
        .unwrap();
    model
        .add_body(
            b1,
            Transform::from_translation(Vector3::new(1.0, 0.0, 0.0)),
            joint,
            link,
        )
        .unwrap();
    model.init().unwrap();
    model
}

/// Five bodies over three levels, mixed axes, one fixed joint and rotated joint frames.
pub fn branched_tree() -> Model {
    let mut model = Model::new();
    let link = |m: f64, x: f64, y: f64, z: f64| {
        Body::new(m, Vector3::new(x, y, z), Vector3::new(0.2, 0.3, 0.25)).unwrap()
    };
    let b1 = model
        .add_body(
            0,
            Transform::identity(),
            Joint::revolute(Axis::Zp).unwrap(),
            link(2.0, 0.5, 0.0, 0.0),
        )
        .unwrap();
    let b2 = model
        .add_body(
            b1,
            Transform::new(
                RotationMatrix::about_axis(Axis::Xp, 0.4),
                Vector3::new(1.0, 0.0, 0.0),
            ),
            Joint::revolute(Axis::Yp).unwrap(),
            link(1.0, 0.0, 0.4, 0.1),
        )
        .unwrap();
    let b3 = model
        .add_body(
            b1,
            Transform::new(
                RotationMatrix::from(EulerAngles::new(0.3, -0.2, 0.1)),
                Vector3::new(0.0, 1.0, 0.5),
            ),
            Joint::revolute(Axis::Xp).unwrap(),
            link(1.5, 0.3, 0.0, -0.2),
        )
        .unwrap();
    model
        .add_body(
            b2,
            Transform::from_translation(Vector3::new(0.0, 0.8, 0.0)),
            Joint::fixed(),
            link(0.5, 0.1, 0.1, 0.1),
        )
        .unwrap();
    model
        .add_body(
            b3,
            Transform::from_translation(Vector3::new(0.6, 0.0, 0.0)),
            Joint::revolute(Axis::Zp).unwrap(),
            link(0.8, 0.2, -0.1, 0.0),
        )
        .unwrap();
    model.init().unwrap();
    model
}

pub fn state(values: &[f64]) -> DVector<f64> {
    DVector::from_row_slice(values)
}
