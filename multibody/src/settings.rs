use crate::MultibodyErrors;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Tunables applied to a `Model`, usually read from a RON file.
///
/// ```ron
/// (gravity: (0.0, 0.0, -9.81), singular_tolerance: 1e-10)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    pub gravity: [f64; 3],
    /// joints whose effective inertia is at or below this are reported as singular
    pub singular_tolerance: f64,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            gravity: [0.0, -9.81, 0.0],
            singular_tolerance: 1e-12,
        }
    }
}

impl ModelSettings {
    pub fn from_ron(s: &str) -> Result<Self, MultibodyErrors> {
        Ok(ron::from_str(s)?)
    }

    pub fn gravity(&self) -> Vector3<f64> {
        Vector3::from(self.gravity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ron() {
        let settings =
            ModelSettings::from_ron("(gravity: (0.0, 0.0, -9.81), singular_tolerance: 1e-10)")
                .unwrap();
        assert_eq!(settings.gravity, [0.0, 0.0, -9.81]);
        assert_eq!(settings.singular_tolerance, 1e-10);
    }

    #[test]
    fn test_from_ron_defaults() {
        let settings = ModelSettings::from_ron("(gravity: (0.0, 0.0, 0.0))").unwrap();
        assert_eq!(settings.gravity(), Vector3::zeros());
        assert_eq!(settings.singular_tolerance, 1e-12);

        assert_eq!(ModelSettings::from_ron("()").unwrap(), ModelSettings::default());
    }

    #[test]
    fn test_from_ron_invalid() {
        let result = ModelSettings::from_ron("(gravity: \"down\")");
        assert!(matches!(result, Err(MultibodyErrors::Settings(_))));
    }
}
