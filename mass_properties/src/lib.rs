use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MassPropertiesErrors {
    #[error("Ixx cant be less than zero")]
    IxxLessThanZero,
    #[error("Iyy cant be less than zero")]
    IyyLessThanZero,
    #[error("Izz cant be less than zero")]
    IzzLessThanZero,
    #[error("mass cannot be less than or equal to zero")]
    MassLessThanOrEqualToZero,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CenterOfMass {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CenterOfMass {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl From<Vector3<f64>> for CenterOfMass {
    fn from(v: Vector3<f64>) -> CenterOfMass {
        CenterOfMass::new(v[0], v[1], v[2])
    }
}

/// Rotational inertia about the center of mass, in the body frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Inertia {
    pub ixx: f64,
    pub ixy: f64,
    pub ixz: f64,
    pub iyy: f64,
    pub iyz: f64,
    pub izz: f64,
}

impl Inertia {
    pub fn new(
        ixx: f64,
        iyy: f64,
        izz: f64,
        ixy: f64,
        ixz: f64,
        iyz: f64,
    ) -> Result<Self, MassPropertiesErrors> {
        // zero is allowed so point masses can be modeled
        if ixx < 0.0 {
            return Err(MassPropertiesErrors::IxxLessThanZero);
        }
        if iyy < 0.0 {
            return Err(MassPropertiesErrors::IyyLessThanZero);
        }
        if izz < 0.0 {
            return Err(MassPropertiesErrors::IzzLessThanZero);
        }
        Ok(Self {
            ixx,
            iyy,
            izz,
            ixy,
            ixz,
            iyz,
        })
    }

    /// Inertia with only principal moments, e.g. built from the radii of gyration of a body.
    pub fn principal(ixx: f64, iyy: f64, izz: f64) -> Result<Self, MassPropertiesErrors> {
        Self::new(ixx, iyy, izz, 0.0, 0.0, 0.0)
    }

    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.ixx, self.ixy, self.ixz, self.ixy, self.iyy, self.iyz, self.ixz, self.iyz,
            self.izz,
        )
    }
}

/// Represents the mass properties of an object
/// Mass, Center of Mass, Inertia
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassProperties {
    pub center_of_mass: CenterOfMass,
    pub mass: f64,
    pub inertia: Inertia,
}

impl Default for MassProperties {
    fn default() -> Self {
        Self {
            center_of_mass: CenterOfMass::default(),
            mass: 1.0,
            inertia: Inertia {
                ixx: 1.0,
                iyy: 1.0,
                izz: 1.0,
                ..Default::default()
            },
        }
    }
}

impl MassProperties {
    pub fn new(
        mass: f64,
        center_of_mass: CenterOfMass,
        inertia: Inertia,
    ) -> Result<Self, MassPropertiesErrors> {
        if mass <= 0.0 {
            return Err(MassPropertiesErrors::MassLessThanOrEqualToZero);
        }
        Ok(MassProperties {
            mass,
            center_of_mass,
            inertia,
        })
    }

    /// Rotational inertia about the body origin (parallel axis theorem).
    pub fn inertia_about_origin(&self) -> Matrix3<f64> {
        let c = self.center_of_mass.vector();
        let cx = c.cross_matrix();
        self.inertia.matrix() + cx * cx.transpose() * self.mass
    }
}
