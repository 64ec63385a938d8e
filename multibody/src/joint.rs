use nalgebra::Vector3;
use rotations::axes::Axis;
use serde::{Deserialize, Serialize};
use spatial_algebra::MotionVector;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum JointErrors {
    #[error("revolute axis [{0}, {1}, {2}] must be one of the unit x, y or z axes")]
    NonCardinalAxis(f64, f64, f64),
    #[error("joint type {0:?} is not supported")]
    UnsupportedJointType(JointType),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JointType {
    #[default]
    Undefined,
    Fixed,
    Revolute,
}

/// Connection between a body and its parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    joint_type: JointType,
    axis: Option<Axis>,
}

impl Joint {
    /// Revolute axes must be exactly (1,0,0), (0,1,0) or (0,0,1). The axis of a fixed joint is ignored.
    pub fn new(joint_type: JointType, axis: Vector3<f64>) -> Result<Self, JointErrors> {
        match joint_type {
            JointType::Revolute => {
                let axis = Axis::try_from(axis)
                    .ok()
                    .filter(Axis::is_positive)
                    .ok_or(JointErrors::NonCardinalAxis(axis[0], axis[1], axis[2]))?;
                Ok(Self {
                    joint_type,
                    axis: Some(axis),
                })
            }
            JointType::Fixed => Ok(Self::fixed()),
            JointType::Undefined => Err(JointErrors::UnsupportedJointType(joint_type)),
        }
    }

    pub fn revolute(axis: Axis) -> Result<Self, JointErrors> {
        Self::new(JointType::Revolute, axis.vector())
    }

    pub fn fixed() -> Self {
        Self {
            joint_type: JointType::Fixed,
            axis: None,
        }
    }

    pub fn joint_type(&self) -> JointType {
        self.joint_type
    }

    pub fn is_fixed(&self) -> bool {
        self.joint_type == JointType::Fixed
    }

    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    /// The motion subspace, zero for anything that does not rotate.
    pub fn motion_subspace(&self) -> MotionVector {
        match self.axis {
            Some(axis) => MotionVector::new(axis.vector(), Vector3::zeros()),
            None => MotionVector::zeros(),
        }
    }
}
