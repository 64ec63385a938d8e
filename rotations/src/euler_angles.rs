use serde::{Deserialize, Serialize};

/// Tait-Bryan angles applied in Z, Y, X order (yaw, pitch, roll).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    /// rotation about z, applied first
    pub phi: f64,
    /// rotation about the once-rotated y
    pub theta: f64,
    /// rotation about the twice-rotated x
    pub psi: f64,
}

impl EulerAngles {
    pub fn new(phi: f64, theta: f64, psi: f64) -> Self {
        Self { phi, theta, psi }
    }
}
