use mass_properties::{CenterOfMass, Inertia, MassProperties, MassPropertiesErrors};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use spatial_algebra::SpatialInertia;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BodyErrors {
    #[error("{0}")]
    MassProperties(#[from] MassPropertiesErrors),
}

/// A single rigid link.
///
/// The spatial inertia about the body origin is derived once from the mass properties.
/// Fields are private so the two can never disagree, build a new `Body` to change either.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MassProperties", into = "MassProperties")]
pub struct Body {
    mass_properties: MassProperties,
    spatial_inertia: SpatialInertia,
}

impl Body {
    /// `gyration_radii` are the principal moments of inertia about the center of mass.
    pub fn new(
        mass: f64,
        center_of_mass: Vector3<f64>,
        gyration_radii: Vector3<f64>,
    ) -> Result<Self, BodyErrors> {
        let inertia = Inertia::principal(gyration_radii[0], gyration_radii[1], gyration_radii[2])?;
        let mass_properties = MassProperties::new(mass, CenterOfMass::from(center_of_mass), inertia)?;
        Ok(Self::from_validated(mass_properties))
    }

    fn from_validated(mass_properties: MassProperties) -> Self {
        Self {
            mass_properties,
            spatial_inertia: SpatialInertia::from(mass_properties),
        }
    }

    pub fn mass(&self) -> f64 {
        self.mass_properties.mass
    }

    pub fn center_of_mass(&self) -> Vector3<f64> {
        self.mass_properties.center_of_mass.vector()
    }

    pub fn mass_properties(&self) -> &MassProperties {
        &self.mass_properties
    }

    pub fn spatial_inertia(&self) -> SpatialInertia {
        self.spatial_inertia
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::from_validated(MassProperties::default())
    }
}

impl TryFrom<MassProperties> for Body {
    type Error = BodyErrors;

    fn try_from(mp: MassProperties) -> Result<Self, Self::Error> {
        let inertia = Inertia::new(
            mp.inertia.ixx,
            mp.inertia.iyy,
            mp.inertia.izz,
            mp.inertia.ixy,
            mp.inertia.ixz,
            mp.inertia.iyz,
        )?;
        let mass_properties = MassProperties::new(mp.mass, mp.center_of_mass, inertia)?;
        Ok(Self::from_validated(mass_properties))
    }
}

impl From<Body> for MassProperties {
    fn from(body: Body) -> Self {
        body.mass_properties
    }
}
