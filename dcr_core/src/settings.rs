//! # Engine Settings
//!
//! Configuration shared by every analysis: code resistance factors,
//! default discretization and a guard on domain size. Settings serialize
//! to plain JSON; any field left out of a settings file takes its default.
//!
//! ## Example
//!
//! ```rust
//! use dcr_core::settings::EngineSettings;
//!
//! let settings: EngineSettings = serde_json::from_str(r#"{ "phi_shear": 0.6 }"#).unwrap();
//! assert_eq!(settings.phi_shear, 0.6);
//! assert_eq!(settings.phi_flexure, 0.9);
//! assert!(settings.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// ACI 318 strength reduction factor for tension-controlled flexure
pub const PHI_FLEXURE: f64 = 0.9;

/// ACI 318 strength reduction factor for shear
pub const PHI_SHEAR: f64 = 0.75;

/// Engine-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Resistance factor applied to nominal moment capacity Mn
    pub phi_flexure: f64,

    /// Resistance factor applied to nominal shear capacity Vn
    pub phi_shear: f64,

    /// Samples along the span when a bending request omits `n_samples`
    pub default_beam_samples: usize,

    /// Samples over the wall height when a wall request omits `n_samples`
    pub default_wall_samples: usize,

    /// Depth increment (m) when a pile request omits `dz_m`
    pub default_pile_step_m: f64,

    /// Upper bound on the number of samples in any domain
    pub max_samples: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            phi_flexure: PHI_FLEXURE,
            phi_shear: PHI_SHEAR,
            default_beam_samples: 100,
            default_wall_samples: 100,
            default_pile_step_m: 0.1,
            max_samples: 1_000_000,
        }
    }
}

impl EngineSettings {
    /// Validate settings before an analysis uses them.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, phi) in [("phi_flexure", self.phi_flexure), ("phi_shear", self.phi_shear)] {
            if !(phi > 0.0 && phi <= 1.0) {
                return Err(CalcError::invalid_parameter(
                    field,
                    phi.to_string(),
                    "Resistance factor must be in (0, 1]",
                ));
            }
        }
        if !(self.default_pile_step_m.is_finite() && self.default_pile_step_m > 0.0) {
            return Err(CalcError::invalid_domain(
                "default_pile_step_m",
                self.default_pile_step_m.to_string(),
                "Default increment must be positive",
            ));
        }
        if self.max_samples < 2 {
            return Err(CalcError::invalid_domain(
                "max_samples",
                self.max_samples.to_string(),
                "At least two samples are required",
            ));
        }
        Ok(())
    }

    /// Parse settings from JSON text.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: EngineSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.phi_flexure, 0.9);
        assert_eq!(settings.phi_shear, 0.75);
        assert_eq!(settings.default_beam_samples, 100);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = EngineSettings::from_json(r#"{ "default_wall_samples": 250 }"#).unwrap();
        assert_eq!(settings.default_wall_samples, 250);
        assert_eq!(settings.phi_flexure, PHI_FLEXURE);
    }

    #[test]
    fn test_rejects_bad_resistance_factor() {
        let settings = EngineSettings {
            phi_flexure: 1.2,
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");

        let settings = EngineSettings {
            phi_shear: 0.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_tiny_sample_limit() {
        let settings = EngineSettings {
            max_samples: 1,
            ..Default::default()
        };
        assert_eq!(settings.validate().unwrap_err().error_code(), "INVALID_DOMAIN");
    }

    #[test]
    fn test_malformed_json() {
        let err = EngineSettings::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
