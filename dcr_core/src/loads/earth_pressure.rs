//! Rankine active earth pressure on a cantilever wall stem

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use super::LoadModel;
use crate::equations::{active_pressure, rankine_active_coefficient, Equation};
use crate::errors::{require_finite, require_non_negative, require_positive, CalcError, CalcResult};
use crate::units::{Degrees, Radians};

/// Lateral pressure law `p(z) = Ka·γ·z + Ka·q` with depth `z` from the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveEarthPressure {
    ka: f64,
    unit_weight_kn_m3: f64,
    surcharge_kpa: f64,
}

impl ActiveEarthPressure {
    /// Build from a friction angle in radians.
    ///
    /// `φ` must lie in `[0, π/2)`; at π/2 the coefficient collapses and the
    /// law has no physical meaning.
    pub fn new(phi: Radians, unit_weight_kn_m3: f64, surcharge_kpa: f64) -> CalcResult<Self> {
        let phi = require_finite("friction_angle", phi.0)?;
        if !(0.0..FRAC_PI_2).contains(&phi) {
            let deg: Degrees = Radians(phi).into();
            return Err(CalcError::invalid_parameter(
                "friction_angle",
                format!("{:.3}°", deg.0),
                "Friction angle must be in [0°, 90°)",
            ));
        }
        require_positive("unit_weight_kn_m3", unit_weight_kn_m3)?;
        require_non_negative("surcharge_kpa", surcharge_kpa)?;

        Ok(ActiveEarthPressure {
            ka: rankine_active_coefficient(phi),
            unit_weight_kn_m3,
            surcharge_kpa,
        })
    }

    /// Build from a friction angle in degrees (the form users enter).
    pub fn from_degrees(phi_deg: f64, unit_weight_kn_m3: f64, surcharge_kpa: f64) -> CalcResult<Self> {
        // Checked in degrees too; 90° may round just below π/2
        if !(0.0..90.0).contains(&phi_deg) {
            return Err(CalcError::invalid_parameter(
                "friction_angle",
                format!("{:.3}°", phi_deg),
                "Friction angle must be in [0°, 90°)",
            ));
        }
        Self::new(Degrees(phi_deg).into(), unit_weight_kn_m3, surcharge_kpa)
    }

    /// Active earth pressure coefficient
    pub fn ka(&self) -> f64 {
        self.ka
    }

    /// Soil unit weight γ (kN/m³)
    pub fn unit_weight_kn_m3(&self) -> f64 {
        self.unit_weight_kn_m3
    }

    /// Uniform surcharge q (kPa)
    pub fn surcharge_kpa(&self) -> f64 {
        self.surcharge_kpa
    }

    /// Lateral pressure (kPa) at depth `z`
    pub fn pressure_at(&self, z: f64) -> f64 {
        active_pressure(self.ka, self.unit_weight_kn_m3, self.surcharge_kpa, z)
    }
}

impl LoadModel for ActiveEarthPressure {
    fn name(&self) -> &'static str {
        "active earth pressure"
    }

    fn intensity_at(&self, position: f64) -> f64 {
        self.pressure_at(position)
    }

    fn equations(&self) -> &'static [Equation] {
        &[Equation::RankineActiveCoefficient, Equation::ActivePressure]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ka_thirty_degrees() {
        let law = ActiveEarthPressure::from_degrees(30.0, 18.0, 0.0).unwrap();
        assert!((law.ka() - 0.333).abs() < 1e-3);
        assert!((law.pressure_at(3.0) - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_ka_zero_friction() {
        let law = ActiveEarthPressure::new(Radians(0.0), 18.0, 0.0).unwrap();
        assert_eq!(law.ka(), 1.0);
    }

    #[test]
    fn test_ka_strictly_decreasing() {
        let mut previous = f64::INFINITY;
        for i in 0..89 {
            let ka = ActiveEarthPressure::from_degrees(i as f64 + 0.5, 18.0, 0.0).unwrap().ka();
            assert!(ka < previous, "Ka not decreasing at {}°", i);
            assert!(ka > 0.0);
            previous = ka;
        }
    }

    #[test]
    fn test_surcharge_shifts_pressure() {
        let law = ActiveEarthPressure::from_degrees(30.0, 18.0, 12.0).unwrap();
        assert!((law.pressure_at(0.0) - 4.0).abs() < 1e-9);
        assert!((law.pressure_at(3.0) - 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_friction_angle_out_of_range() {
        let err = ActiveEarthPressure::from_degrees(90.0, 18.0, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
        assert!(ActiveEarthPressure::from_degrees(120.0, 18.0, 0.0).is_err());
        assert!(ActiveEarthPressure::from_degrees(-5.0, 18.0, 0.0).is_err());
        assert!(ActiveEarthPressure::new(Radians(FRAC_PI_2), 18.0, 0.0).is_err());
    }

    #[test]
    fn test_bad_soil_parameters() {
        assert!(ActiveEarthPressure::from_degrees(30.0, 0.0, 0.0).is_err());
        assert!(ActiveEarthPressure::from_degrees(30.0, 18.0, -1.0).is_err());
    }
}
