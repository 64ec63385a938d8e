use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::ops::Neg;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum AxisErrors {
    #[error("vector [{0}, {1}, {2}] is not a unit cardinal axis")]
    NotCardinal(f64, f64, f64),
}

/// Signed cardinal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Xp,
    Xn,
    Yp,
    Yn,
    Zp,
    Zn,
}

impl Axis {
    pub fn vector(&self) -> Vector3<f64> {
        match self {
            Axis::Xp => Vector3::new(1.0, 0.0, 0.0),
            Axis::Xn => Vector3::new(-1.0, 0.0, 0.0),
            Axis::Yp => Vector3::new(0.0, 1.0, 0.0),
            Axis::Yn => Vector3::new(0.0, -1.0, 0.0),
            Axis::Zp => Vector3::new(0.0, 0.0, 1.0),
            Axis::Zn => Vector3::new(0.0, 0.0, -1.0),
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, Axis::Xp | Axis::Yp | Axis::Zp)
    }
}

impl TryFrom<Vector3<f64>> for Axis {
    type Error = AxisErrors;

    /// Only exact signed unit vectors are accepted, no normalization is done.
    fn try_from(v: Vector3<f64>) -> Result<Self, Self::Error> {
        let axes = [Axis::Xp, Axis::Xn, Axis::Yp, Axis::Yn, Axis::Zp, Axis::Zn];
        axes.into_iter()
            .find(|axis| axis.vector() == v)
            .ok_or(AxisErrors::NotCardinal(v[0], v[1], v[2]))
    }
}

impl Neg for Axis {
    type Output = Self;
    fn neg(self) -> Self {
        match self {
            Axis::Xp => Axis::Xn,
            Axis::Xn => Axis::Xp,
            Axis::Yp => Axis::Yn,
            Axis::Yn => Axis::Yp,
            Axis::Zp => Axis::Zn,
            Axis::Zn => Axis::Zp,
        }
    }
}
