use crate::{joint::JointErrors, joint::JointType, model::Model, MultibodyErrors};
use rotations::prelude::*;
use spatial_algebra::{MotionVector, SpatialTransform};
use transforms::Transform;

/// Joint transform, motion subspace, joint velocity and rhenomic acceleration of one joint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointKinematics {
    /// joint frame after motion from joint frame at rest
    pub xj: SpatialTransform,
    pub s: MotionVector,
    pub vj: MotionVector,
    pub cj: MotionVector,
}

pub fn jcalc(
    model: &Model,
    joint_id: usize,
    q: f64,
    q_dot: f64,
) -> Result<JointKinematics, MultibodyErrors> {
    let joint = model.joint(joint_id)?;
    match (joint.joint_type(), joint.axis()) {
        (JointType::Revolute, Some(axis)) => {
            let s = joint.motion_subspace();
            Ok(JointKinematics {
                xj: SpatialTransform(Transform::from_rotation(RotationMatrix::about_axis(
                    axis, q,
                ))),
                s,
                vj: s * q_dot,
                cj: MotionVector::zeros(),
            })
        }
        (JointType::Fixed, _) => Ok(JointKinematics {
            xj: SpatialTransform::identity(),
            s: MotionVector::zeros(),
            vj: MotionVector::zeros(),
            cj: MotionVector::zeros(),
        }),
        (joint_type, _) => Err(JointErrors::UnsupportedJointType(joint_type).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{body::Body, joint::Joint};
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector3;
    use std::f64::consts::FRAC_PI_2;
    const TOL: f64 = 1e-12;

    fn model() -> Model {
        let mut model = Model::new();
        let body = Body::new(1.0, Vector3::zeros(), Vector3::new(1.0, 1.0, 1.0)).unwrap();
        model
            .add_body(0, Transform::identity(), Joint::revolute(Axis::Yp).unwrap(), body)
            .unwrap();
        model
            .add_body(1, Transform::identity(), Joint::fixed(), body)
            .unwrap();
        model
    }

    #[test]
    fn test_jcalc_revolute() {
        let model = model();
        let k = jcalc(&model, 1, FRAC_PI_2, 3.0).unwrap();
        assert_eq!(k.s.rotation(), Vector3::new(0.0, 1.0, 0.0));
        assert_abs_diff_eq!(k.vj.rotation(), Vector3::new(0.0, 3.0, 0.0), epsilon = TOL);
        assert_eq!(k.cj, MotionVector::zeros());
        // after a quarter turn about y the parent z axis is the joint frame -x axis
        let z = MotionVector::new(Vector3::new(0.0, 0.0, 1.0), Vector3::zeros());
        assert_abs_diff_eq!(
            (k.xj * z).rotation(),
            Vector3::new(-1.0, 0.0, 0.0),
            epsilon = TOL
        );
    }

    #[test]
    fn test_jcalc_fixed() {
        let model = model();
        let k = jcalc(&model, 2, 0.7, 2.0).unwrap();
        assert_eq!(k.xj, SpatialTransform::identity());
        assert_eq!(k.s, MotionVector::zeros());
        assert_eq!(k.vj, MotionVector::zeros());
    }

    #[test]
    fn test_jcalc_errors() {
        let model = model();
        assert!(matches!(
            jcalc(&model, 0, 0.0, 0.0),
            Err(MultibodyErrors::Joint(JointErrors::UnsupportedJointType(
                JointType::Undefined
            )))
        ));
        assert!(matches!(
            jcalc(&model, 3, 0.0, 0.0),
            Err(MultibodyErrors::JointNotFound(3))
        ));
    }
}
