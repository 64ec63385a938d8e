use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A labeled point on a body, in body coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub body_id: usize,
    pub point: Vector3<f64>,
}

impl Contact {
    pub fn new(body_id: usize, point: Vector3<f64>) -> Self {
        Self { body_id, point }
    }
}
