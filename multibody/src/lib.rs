pub mod algorithms;
pub mod body;
pub mod cache;
pub mod contact;
pub mod energy;
pub mod joint;
pub mod kinematics;
pub mod model;
pub mod settings;

#[cfg(test)]
mod test_models;

use body::BodyErrors;
use joint::JointErrors;
use thiserror::Error;

pub mod prelude {
    pub use crate::algorithms::{
        articulated_body_algorithm::{forward_dynamics, forward_dynamics_floating_base},
        composite_rigid_body::composite_rigid_body,
        jcalc::{jcalc, JointKinematics},
        recursive_newton_euler::inverse_dynamics,
    };
    pub use crate::body::Body;
    pub use crate::cache::ModelCache;
    pub use crate::contact::Contact;
    pub use crate::energy::{kinetic_energy, potential_energy};
    pub use crate::joint::{Joint, JointType};
    pub use crate::kinematics::{
        calc_base_to_body_coordinates, calc_body_to_base_coordinates, calc_point_acceleration,
        calc_point_velocity, update_kinematics,
    };
    pub use crate::model::Model;
    pub use crate::settings::ModelSettings;
    pub use crate::MultibodyErrors;
}

#[derive(Debug, Error)]
pub enum MultibodyErrors {
    #[error("{0}")]
    Body(#[from] BodyErrors),
    #[error("could not find body '{0}' in the model")]
    BodyNotFound(usize),
    #[error("model has {expected} bodies but the cache was built for {found}")]
    CacheSizeMismatch { expected: usize, found: usize },
    #[error("could not find contact '{0}' in the model")]
    ContactNotFound(usize),
    #[error("{0}")]
    Joint(#[from] JointErrors),
    #[error("could not find joint '{0}' in the model")]
    JointNotFound(usize),
    #[error("model topology changed since the last call to init")]
    ModelNotInitialized,
    #[error("{0}")]
    Settings(#[from] ron::error::SpannedError),
    #[error("base articulated inertia is not positive definite")]
    SingularBaseInertia,
    #[error("joint of body '{body_id}' has effective inertia {d} along its axis")]
    SingularJointInertia { body_id: usize, d: f64 },
    #[error("'{name}' has length {found}, expected {expected}")]
    StateLength {
        name: &'static str,
        expected: usize,
        found: usize,
    },
}
