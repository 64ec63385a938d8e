use crate::{
    body::Body,
    contact::Contact,
    joint::{Joint, JointErrors, JointType},
    settings::ModelSettings,
    MultibodyErrors,
};
use nalgebra::Vector3;
use rotations::prelude::*;
use spatial_algebra::SpatialTransform;
use tracing::debug;
use transforms::Transform;

/// Description of a kinematic tree.
///
/// Bodies are stored in parallel arrays indexed by body id. Id 0 is the base, movable bodies
/// start at 1 and a parent always has a smaller id than its children. Joint `i` connects body `i`
/// to `parents[i]`, the entry at index 0 is a placeholder.
///
/// The model is never mutated by the algorithms, all working state lives in a
/// [`ModelCache`](crate::cache::ModelCache).
#[derive(Debug, Clone)]
pub struct Model {
    pub(crate) parents: Vec<usize>,
    pub(crate) bodies: Vec<Body>,
    pub(crate) joints: Vec<Joint>,
    /// X_T, joint frame from parent frame
    pub(crate) joint_frames: Vec<SpatialTransform>,
    pub(crate) contacts: Vec<Contact>,
    pub(crate) floating_base: bool,
    /// only used for floating base models
    pub base_translation: Vector3<f64>,
    /// only used for floating base models
    pub base_rotation: EulerAngles,
    pub gravity: Vector3<f64>,
    pub singular_tolerance: f64,
    initialized: Option<usize>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    pub fn new() -> Self {
        let settings = ModelSettings::default();
        Self {
            parents: vec![0],
            bodies: vec![Body::default()],
            joints: vec![Joint::default()],
            joint_frames: vec![SpatialTransform::identity()],
            contacts: Vec::new(),
            floating_base: false,
            base_translation: Vector3::zeros(),
            base_rotation: EulerAngles::default(),
            gravity: settings.gravity(),
            singular_tolerance: settings.singular_tolerance,
            initialized: None,
        }
    }

    pub fn with_settings(mut self, settings: &ModelSettings) -> Self {
        self.gravity = settings.gravity();
        self.singular_tolerance = settings.singular_tolerance;
        self
    }

    /// Attaches `body` to `parent_id` and returns the id of the new body.
    ///
    /// `joint_frame` is the pose of the joint frame in the parent body frame.
    pub fn add_body(
        &mut self,
        parent_id: usize,
        joint_frame: Transform,
        joint: Joint,
        body: Body,
    ) -> Result<usize, MultibodyErrors> {
        if parent_id >= self.bodies.len() {
            return Err(MultibodyErrors::BodyNotFound(parent_id));
        }
        if joint.joint_type() == JointType::Undefined {
            return Err(JointErrors::UnsupportedJointType(joint.joint_type()).into());
        }

        self.parents.push(parent_id);
        self.bodies.push(body);
        self.joints.push(joint);
        self.joint_frames.push(SpatialTransform::from(joint_frame));

        let id = self.bodies.len() - 1;
        debug!(
            body_id = id,
            parent_id,
            joint_type = ?joint.joint_type(),
            "added body"
        );
        Ok(id)
    }

    /// Makes the base a free 6 dof body with the given inertia.
    pub fn set_floating_body(&mut self, body: Body) {
        self.bodies[0] = body;
        self.floating_base = true;
        debug!(mass = body.mass(), "set floating base body");
    }

    /// Returns the id of the new contact.
    pub fn add_contact(
        &mut self,
        body_id: usize,
        point: Vector3<f64>,
    ) -> Result<usize, MultibodyErrors> {
        if body_id >= self.bodies.len() {
            return Err(MultibodyErrors::BodyNotFound(body_id));
        }
        self.contacts.push(Contact::new(body_id, point));
        let id = self.contacts.len() - 1;
        debug!(contact_id = id, body_id, "added contact");
        Ok(id)
    }

    /// Must be called after the last topology change and before building a cache.
    pub fn init(&mut self) -> Result<(), MultibodyErrors> {
        for (id, &parent) in self.parents.iter().enumerate().skip(1) {
            if parent >= id {
                return Err(MultibodyErrors::BodyNotFound(parent));
            }
        }
        self.initialized = Some(self.bodies.len());
        debug!(
            bodies = self.n_bodies(),
            contacts = self.contacts.len(),
            floating_base = self.floating_base,
            "initialized model"
        );
        Ok(())
    }

    pub(crate) fn ensure_initialized(&self) -> Result<(), MultibodyErrors> {
        match self.initialized {
            Some(n) if n == self.bodies.len() => Ok(()),
            _ => Err(MultibodyErrors::ModelNotInitialized),
        }
    }

    /// Number of movable bodies, which is also the number of joint coordinates.
    pub fn n_bodies(&self) -> usize {
        self.bodies.len() - 1
    }

    pub fn is_floating(&self) -> bool {
        self.floating_base
    }

    /// Pose of the base in the world frame.
    pub fn base_transform(&self) -> Transform {
        Transform::new(
            RotationMatrix::from(self.base_rotation),
            self.base_translation,
        )
    }

    pub fn parent(&self, body_id: usize) -> Result<usize, MultibodyErrors> {
        self.parents
            .get(body_id)
            .copied()
            .ok_or(MultibodyErrors::BodyNotFound(body_id))
    }

    pub fn body(&self, body_id: usize) -> Result<&Body, MultibodyErrors> {
        self.bodies
            .get(body_id)
            .ok_or(MultibodyErrors::BodyNotFound(body_id))
    }

    pub fn joint(&self, joint_id: usize) -> Result<&Joint, MultibodyErrors> {
        self.joints
            .get(joint_id)
            .ok_or(MultibodyErrors::JointNotFound(joint_id))
    }

    pub fn joint_frame(&self, joint_id: usize) -> Result<&SpatialTransform, MultibodyErrors> {
        self.joint_frames
            .get(joint_id)
            .ok_or(MultibodyErrors::JointNotFound(joint_id))
    }

    pub fn contact(&self, contact_id: usize) -> Result<&Contact, MultibodyErrors> {
        self.contacts
            .get(contact_id)
            .ok_or(MultibodyErrors::ContactNotFound(contact_id))
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rotations::axes::Axis;
    use std::f64::consts::FRAC_PI_2;
    const TOL: f64 = 1e-12;

    fn link() -> Body {
        Body::new(1.0, Vector3::new(0.5, 0.0, 0.0), Vector3::new(0.1, 0.1, 0.1)).unwrap()
    }

    #[test]
    fn test_add_body_assigns_sequential_ids() {
        let mut model = Model::new();
        let joint = Joint::revolute(Axis::Zp).unwrap();
        let b1 = model
            .add_body(0, Transform::identity(), joint, link())
            .unwrap();
        let b2 = model
            .add_body(b1, Transform::identity(), joint, link())
            .unwrap();
        let b3 = model
            .add_body(b1, Transform::identity(), Joint::fixed(), link())
            .unwrap();
        assert_eq!((b1, b2, b3), (1, 2, 3));
        assert_eq!(model.n_bodies(), 3);
        assert_eq!(model.parent(b3).unwrap(), b1);
        assert!(model.joint(b3).unwrap().is_fixed());
    }

    #[test]
    fn test_add_body_unknown_parent() {
        let mut model = Model::new();
        let joint = Joint::revolute(Axis::Zp).unwrap();
        let result = model.add_body(4, Transform::identity(), joint, link());
        assert!(matches!(result, Err(MultibodyErrors::BodyNotFound(4))));
    }

    #[test]
    fn test_add_body_rejects_undefined_joint() {
        let mut model = Model::new();
        let result = model.add_body(0, Transform::identity(), Joint::default(), link());
        assert!(matches!(
            result,
            Err(MultibodyErrors::Joint(JointErrors::UnsupportedJointType(_)))
        ));
        assert_eq!(model.n_bodies(), 0);
    }

    #[test]
    fn test_contacts() {
        let mut model = Model::new();
        let joint = Joint::revolute(Axis::Xp).unwrap();
        let b1 = model
            .add_body(0, Transform::identity(), joint, link())
            .unwrap();
        let c0 = model.add_contact(b1, Vector3::new(1.0, 0.0, 0.0)).unwrap();
        let c1 = model.add_contact(b1, Vector3::new(0.0, 1.0, 0.0)).unwrap();
        assert_eq!((c0, c1), (0, 1));
        assert_eq!(model.contact(c1).unwrap().point, Vector3::new(0.0, 1.0, 0.0));
        assert!(matches!(
            model.contact(2),
            Err(MultibodyErrors::ContactNotFound(2))
        ));
        assert!(matches!(
            model.add_contact(7, Vector3::zeros()),
            Err(MultibodyErrors::BodyNotFound(7))
        ));
    }

    #[test]
    fn test_init_tracks_topology() {
        let mut model = Model::new();
        assert!(model.ensure_initialized().is_err());
        model.init().unwrap();
        assert!(model.ensure_initialized().is_ok());

        let joint = Joint::revolute(Axis::Yp).unwrap();
        model
            .add_body(0, Transform::identity(), joint, link())
            .unwrap();
        assert!(matches!(
            model.ensure_initialized(),
            Err(MultibodyErrors::ModelNotInitialized)
        ));
        model.init().unwrap();
        assert!(model.ensure_initialized().is_ok());
    }

    #[test]
    fn test_with_settings() {
        let settings = ModelSettings {
            gravity: [0.0, 0.0, -1.62],
            singular_tolerance: 1e-9,
        };
        let model = Model::new().with_settings(&settings);
        assert_eq!(model.gravity, Vector3::new(0.0, 0.0, -1.62));
        assert_eq!(model.singular_tolerance, 1e-9);
    }

    #[test]
    fn test_base_transform() {
        let mut model = Model::new();
        model.base_translation = Vector3::new(1.0, 2.0, 3.0);
        model.base_rotation = EulerAngles::new(FRAC_PI_2, 0.0, 0.0);
        let base = model.base_transform();
        // the base x axis points along world y
        let p = base.inv_transform_point(Vector3::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(p, Vector3::new(1.0, 3.0, 3.0), epsilon = TOL);
    }
}
