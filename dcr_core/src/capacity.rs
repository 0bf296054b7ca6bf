//! # Capacity Evaluator
//!
//! Closed-form, code-based capacities computed from section and material
//! inputs alone, independent of any demand profile. Each value is tagged
//! with the [`Equation`] that produced it.
//!
//! Two families implement [`CapacityEvaluator`]:
//!
//! - [`FlexureShearCapacity`] - reinforced concrete wall stem, ACI stress block
//! - [`PileAxialCapacity`] - shaft plus base resistance of a pile
//!
//! ## Example
//!
//! ```rust
//! use dcr_core::capacity::{CapacityEvaluator, ConcreteSection, FlexureShearCapacity};
//! use dcr_core::settings::EngineSettings;
//!
//! let section = ConcreteSection {
//!     fc_mpa: 25.0,
//!     fy_mpa: 420.0,
//!     thickness_m: 0.3,
//!     effective_depth_m: 0.25,
//!     steel_area_m2: 0.001,
//! };
//! let capacity = FlexureShearCapacity::new(section, &EngineSettings::default())
//!     .evaluate()
//!     .unwrap();
//! assert!((capacity.value("phi_Vn").unwrap() - 47.8125).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::{nominal_moment, nominal_shear, stress_block_depth, Equation};
use crate::errors::{require_finite, require_positive, CalcError, CalcResult};
use crate::loads::PileResistance;
use crate::profile::Profile;
use crate::settings::EngineSettings;
use crate::units::{KilonewtonMeters, Kilonewtons, MeganewtonMeters, Meganewtons};

/// One capacity value and the formula behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capacity {
    /// Short symbol (e.g., "phi_Mn", "Qu")
    pub name: String,
    /// Value in kN or kN·m
    pub value: f64,
    /// Governing formula
    pub equation: Equation,
}

/// Capacities produced by one evaluator, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapacityResult {
    pub capacities: Vec<Capacity>,
}

impl CapacityResult {
    fn push(&mut self, name: &str, value: f64, equation: Equation) {
        self.capacities.push(Capacity {
            name: name.to_string(),
            value,
            equation,
        });
    }

    /// Look up a capacity by name
    pub fn get(&self, name: &str) -> Option<&Capacity> {
        self.capacities.iter().find(|c| c.name == name)
    }

    /// Look up a capacity value by name
    pub fn value(&self, name: &str) -> Option<f64> {
        self.get(name).map(|c| c.value)
    }
}

/// A code-based capacity calculation.
pub trait CapacityEvaluator {
    /// Compute every capacity of this family.
    fn evaluate(&self) -> CalcResult<CapacityResult>;
}

// =============================================================================
// FLEXURE / SHEAR (wall stem)
// =============================================================================

/// Singly reinforced rectangular concrete section.
///
/// Strengths in MPa, dimensions in m, steel area in m².
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteSection {
    /// Concrete compressive strength f'c (MPa)
    pub fc_mpa: f64,
    /// Reinforcement yield strength fy (MPa)
    pub fy_mpa: f64,
    /// Section width t resisting the compression block (m)
    pub thickness_m: f64,
    /// Effective depth d (m)
    pub effective_depth_m: f64,
    /// Tension steel area As (m²)
    pub steel_area_m2: f64,
}

/// Design flexural and shear capacity of a concrete section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlexureShearCapacity {
    pub section: ConcreteSection,
    /// Strength reduction factor for flexure
    pub phi_flexure: f64,
    /// Strength reduction factor for shear
    pub phi_shear: f64,
}

impl FlexureShearCapacity {
    /// Take the resistance factors from `settings`.
    pub fn new(section: ConcreteSection, settings: &EngineSettings) -> Self {
        FlexureShearCapacity {
            section,
            phi_flexure: settings.phi_flexure,
            phi_shear: settings.phi_shear,
        }
    }

    fn validate(&self) -> CalcResult<()> {
        let s = &self.section;
        require_finite("fc_mpa", s.fc_mpa)?;
        if s.fc_mpa <= 0.0 {
            return Err(CalcError::invalid_parameter(
                "fc_mpa",
                s.fc_mpa.to_string(),
                "Concrete strength must be positive (√f'c is undefined otherwise)",
            ));
        }
        require_positive("thickness_m", s.thickness_m)?;
        if 0.85 * s.fc_mpa * s.thickness_m == 0.0 {
            return Err(CalcError::invalid_parameter(
                "thickness_m",
                s.thickness_m.to_string(),
                "Stress block denominator 0.85·f'c·t is zero",
            ));
        }
        require_positive("fy_mpa", s.fy_mpa)?;
        require_positive("effective_depth_m", s.effective_depth_m)?;
        require_positive("steel_area_m2", s.steel_area_m2)?;
        Ok(())
    }

    /// Depth of the equivalent stress block a (m)
    pub fn stress_block_depth_m(&self) -> CalcResult<f64> {
        self.validate()?;
        let s = &self.section;
        Ok(stress_block_depth(s.steel_area_m2, s.fy_mpa, s.fc_mpa, s.thickness_m))
    }
}

impl CapacityEvaluator for FlexureShearCapacity {
    fn evaluate(&self) -> CalcResult<CapacityResult> {
        let a_block = self.stress_block_depth_m()?;
        let s = &self.section;

        let mn: KilonewtonMeters =
            MeganewtonMeters(nominal_moment(s.steel_area_m2, s.fy_mpa, s.effective_depth_m, a_block)).into();
        let vn: Kilonewtons = Meganewtons(nominal_shear(s.fc_mpa, s.thickness_m, s.effective_depth_m)).into();

        let mut result = CapacityResult::default();
        result.push("Mn", mn.value(), Equation::NominalMoment);
        result.push("phi_Mn", (mn * self.phi_flexure).value(), Equation::DesignStrength);
        result.push("Vn", vn.value(), Equation::NominalShear);
        result.push("phi_Vn", (vn * self.phi_shear).value(), Equation::DesignStrength);
        Ok(result)
    }
}

// =============================================================================
// PILE AXIAL
// =============================================================================

/// Ultimate axial capacity `Qu = Qs + Qb`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PileAxialCapacity {
    /// Total shaft resistance Qs (kN)
    pub shaft_kn: f64,
    /// Base resistance Qb (kN)
    pub base_kn: f64,
}

impl PileAxialCapacity {
    /// Qs is the final value of the cumulative shaft profile.
    pub fn new(pile: &PileResistance, cumulative_shaft: &Profile) -> Self {
        PileAxialCapacity {
            shaft_kn: cumulative_shaft.last_value(),
            base_kn: pile.base_resistance(),
        }
    }
}

impl CapacityEvaluator for PileAxialCapacity {
    fn evaluate(&self) -> CalcResult<CapacityResult> {
        for (field, value) in [("Qs", self.shaft_kn), ("Qb", self.base_kn)] {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_parameter(
                    field,
                    value.to_string(),
                    "Resistance must be finite and non-negative",
                ));
            }
        }

        let mut result = CapacityResult::default();
        result.push("Qs", self.shaft_kn, Equation::ShaftFriction);
        result.push("Qb", self.base_kn, Equation::BaseResistance);
        result.push("Qu", self.shaft_kn + self.base_kn, Equation::PileUltimateCapacity);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if b.abs() < 1e-10 {
            a.abs() < tol
        } else {
            ((a - b) / b).abs() < tol
        }
    }

    fn stem() -> ConcreteSection {
        ConcreteSection {
            fc_mpa: 25.0,
            fy_mpa: 420.0,
            thickness_m: 0.3,
            effective_depth_m: 0.25,
            steel_area_m2: 0.001,
        }
    }

    #[test]
    fn test_flexure_shear_capacity() {
        let cap = FlexureShearCapacity::new(stem(), &EngineSettings::default());
        assert!(approx_eq(cap.stress_block_depth_m().unwrap(), 0.0658824, 1e-6));

        let result = cap.evaluate().unwrap();
        // Mn = 0.0911647 MN·m = 91.1647 kN·m
        assert!(approx_eq(result.value("Mn").unwrap(), 91.1647, 1e-5));
        assert!(approx_eq(result.value("phi_Mn").unwrap(), 0.9 * 91.1647, 1e-5));
        // Vn = 0.06375 MN = 63.75 kN
        assert!(approx_eq(result.value("Vn").unwrap(), 63.75, 1e-9));
        assert!(approx_eq(result.value("phi_Vn").unwrap(), 47.8125, 1e-9));
        assert_eq!(result.get("Mn").unwrap().equation, Equation::NominalMoment);
    }

    #[test]
    fn test_resistance_factors_from_settings() {
        let settings = EngineSettings {
            phi_flexure: 0.8,
            phi_shear: 0.6,
            ..Default::default()
        };
        let result = FlexureShearCapacity::new(stem(), &settings).evaluate().unwrap();
        assert!(approx_eq(result.value("phi_Vn").unwrap(), 0.6 * 63.75, 1e-9));
        assert!(approx_eq(
            result.value("phi_Mn").unwrap(),
            0.8 * result.value("Mn").unwrap(),
            1e-12
        ));
    }

    #[test]
    fn test_non_positive_concrete_strength() {
        for fc in [0.0, -20.0] {
            let section = ConcreteSection { fc_mpa: fc, ..stem() };
            let err = FlexureShearCapacity::new(section, &EngineSettings::default())
                .evaluate()
                .unwrap_err();
            assert_eq!(err.error_code(), "INVALID_PARAMETER");
        }
    }

    #[test]
    fn test_zero_thickness() {
        let section = ConcreteSection { thickness_m: 0.0, ..stem() };
        assert!(FlexureShearCapacity::new(section, &EngineSettings::default())
            .evaluate()
            .is_err());
    }

    #[test]
    fn test_pile_capacity_sums() {
        let result = PileAxialCapacity {
            shaft_kn: 1200.0,
            base_kn: 300.0,
        }
        .evaluate()
        .unwrap();
        assert_eq!(result.value("Qu"), Some(1500.0));
        assert_eq!(result.get("Qb").unwrap().equation, Equation::BaseResistance);
        assert_eq!(result.value("missing"), None);
    }

    #[test]
    fn test_pile_capacity_rejects_negative() {
        let err = PileAxialCapacity {
            shaft_kn: -1.0,
            base_kn: 300.0,
        }
        .evaluate()
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
    }
}
