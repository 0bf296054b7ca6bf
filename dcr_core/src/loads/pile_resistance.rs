//! Shaft friction and base resistance of a bored pile

use serde::{Deserialize, Serialize};

use super::LoadModel;
use crate::equations::{base_resistance, shaft_friction_increment, Equation};
use crate::errors::{require_positive, CalcResult};

/// Depth-proportional shaft friction plus a single base resistance.
///
/// The intensity is already a force per depth increment `dz`, so its
/// profile is accumulated without further scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PileResistance {
    diameter_m: f64,
    ks_kn_m3: f64,
    kb_kpa: f64,
    dz_m: f64,
}

impl PileResistance {
    pub fn new(diameter_m: f64, ks_kn_m3: f64, kb_kpa: f64, dz_m: f64) -> CalcResult<Self> {
        Ok(PileResistance {
            diameter_m: require_positive("diameter_m", diameter_m)?,
            ks_kn_m3: require_positive("ks", ks_kn_m3)?,
            kb_kpa: require_positive("kb", kb_kpa)?,
            dz_m: require_positive("dz_m", dz_m)?,
        })
    }

    /// Shaft force (kN) mobilised over the increment starting at depth `z`
    pub fn shaft_increment_at(&self, z: f64) -> f64 {
        shaft_friction_increment(self.ks_kn_m3, z, self.diameter_m, self.dz_m)
    }

    /// Base resistance Qb (kN), independent of depth
    pub fn base_resistance(&self) -> f64 {
        base_resistance(self.kb_kpa, self.diameter_m)
    }
}

impl LoadModel for PileResistance {
    fn name(&self) -> &'static str {
        "shaft friction"
    }

    fn intensity_at(&self, position: f64) -> f64 {
        self.shaft_increment_at(position)
    }

    fn equations(&self) -> &'static [Equation] {
        &[Equation::ShaftFriction, Equation::BaseResistance]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Domain;

    #[test]
    fn test_base_resistance() {
        let pile = PileResistance::new(1.0, 500.0, 2000.0, 0.1).unwrap();
        assert!((pile.base_resistance() - 1570.796).abs() < 0.01);
    }

    #[test]
    fn test_shaft_intensity_non_negative_and_linear() {
        let pile = PileResistance::new(1.0, 500.0, 2000.0, 0.1).unwrap();
        let domain = Domain::with_increment(10.0, 0.1).unwrap();
        let profile = pile.sample(&domain).unwrap();
        assert_eq!(profile.values()[0], 0.0);
        assert!(profile.values().iter().all(|v| *v >= 0.0));
        // 500 · 5 · π · 0.1 at z = 5
        assert!((pile.shaft_increment_at(5.0) - 250.0 * std::f64::consts::PI).abs() < 1e-9);
    }

    #[test]
    fn test_equations_cover_shaft_and_base() {
        let pile = PileResistance::new(1.0, 500.0, 2000.0, 0.1).unwrap();
        assert_eq!(pile.equations(), &[Equation::ShaftFriction, Equation::BaseResistance]);
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        assert!(PileResistance::new(0.0, 500.0, 2000.0, 0.1).is_err());
        assert!(PileResistance::new(1.0, -500.0, 2000.0, 0.1).is_err());
        assert!(PileResistance::new(1.0, 500.0, 0.0, 0.1).is_err());
        assert_eq!(
            PileResistance::new(1.0, 500.0, 2000.0, f64::NAN).unwrap_err().error_code(),
            "INVALID_PARAMETER"
        );
    }
}
