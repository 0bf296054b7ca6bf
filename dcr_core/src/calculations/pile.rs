//! # Axial Pile Capacity Analysis
//!
//! Bored pile resisting axial load through shaft friction and end bearing.
//! Shaft force per increment grows linearly with depth; the running total
//! gives the mobilised shaft resistance `Qs(z)`, and `Qu = Qs + Qb`.
//!
//! The load-transfer profile `N(z) = Qu − Qs(z)` is the axial force left in
//! the pile at each depth when `Qu` is applied at the head.
//!
//! ## Example
//!
//! ```rust
//! use dcr_core::calculations::pile::{calculate, PileInput};
//! use dcr_core::settings::EngineSettings;
//!
//! let input = PileInput {
//!     label: "P-1".to_string(),
//!     length_m: 10.0,
//!     diameter_m: 1.0,
//!     ks_kn_m3: 500.0,
//!     kb_kpa: 2000.0,
//!     dz_m: Some(0.1),
//! };
//!
//! let result = calculate(&input, &EngineSettings::default()).unwrap();
//! assert!((result.base_kn - 1570.796).abs() < 0.01);
//! assert_eq!(result.ultimate_kn, result.shaft_kn + result.base_kn);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::capacity::{CapacityEvaluator, CapacityResult, PileAxialCapacity};
use crate::domain::{Domain, Spacing};
use crate::equations::{Equation, EquationTracker};
use crate::errors::{CalcError, CalcResult};
use crate::integrate::running_total;
use crate::loads::{LoadModel, PileResistance};
use crate::profile::Profile;
use crate::settings::EngineSettings;

/// Input parameters for an axial pile analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "P-1",
///   "length_m": 10.0,
///   "diameter_m": 1.0,
///   "ks_kn_m3": 500.0,
///   "kb_kpa": 2000.0,
///   "dz_m": 0.1
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PileInput {
    /// User label (e.g., "P-1")
    #[serde(default)]
    pub label: String,

    /// Embedded length L (m)
    pub length_m: f64,

    /// Shaft diameter D (m)
    pub diameter_m: f64,

    /// Shaft friction modulus ks (kN/m³)
    pub ks_kn_m3: f64,

    /// Base resistance modulus kb (kPa)
    pub kb_kpa: f64,

    /// Depth increment dz (m); settings default when absent
    #[serde(default)]
    pub dz_m: Option<f64>,
}

impl PileInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.length_m.is_finite() || self.length_m <= 0.0 {
            return Err(CalcError::invalid_domain(
                "length_m",
                self.length_m.to_string(),
                "Pile length must be positive and finite",
            ));
        }
        Ok(())
    }
}

/// Results from an axial pile analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PileResult {
    /// Total shaft resistance Qs (kN)
    pub shaft_kn: f64,

    /// Base resistance Qb (kN)
    pub base_kn: f64,

    /// Ultimate axial capacity Qu = Qs + Qb (kN)
    pub ultimate_kn: f64,

    /// Qs, Qb, Qu with their formulas
    pub capacities: CapacityResult,

    /// Shaft force mobilised over each increment (kN)
    pub shaft_increments: Profile,

    /// Cumulative shaft resistance Qs(z) (kN)
    pub cumulative_shaft: Profile,

    /// Axial force in the pile N(z) = Qu − Qs(z) (kN)
    pub load_transfer: Profile,

    /// Equations evaluated, in first-use order
    pub equations: Vec<Equation>,
}

impl PileResult {
    /// Share of Qu carried by the shaft
    pub fn shaft_fraction(&self) -> f64 {
        self.shaft_kn / self.ultimate_kn
    }
}

/// Run an axial pile analysis.
///
/// # Returns
///
/// * `Ok(PileResult)` - Shaft, base and ultimate capacity with profiles
/// * `Err(CalcError)` - Invalid pile, soil or increment parameters
pub fn calculate(input: &PileInput, settings: &EngineSettings) -> CalcResult<PileResult> {
    input.validate()?;

    let dz = input.dz_m.unwrap_or(settings.default_pile_step_m);
    let domain = Domain::build(input.length_m, Spacing::Increment(dz), settings.max_samples)?;
    let pile = PileResistance::new(input.diameter_m, input.ks_kn_m3, input.kb_kpa, dz)?;
    debug!(label = %input.label, law = pile.name(), samples = domain.len(), dz_m = dz, "pile analysis");

    let mut tracker = EquationTracker::new();

    let shaft_increments = pile.sample(&domain)?;
    let cumulative_shaft = running_total(&shaft_increments)?;
    tracker.record_all(pile.equations(), "Shaft and base resistance");
    tracker.record(Equation::CumulativeIntegration, "Cumulative shaft resistance");

    let capacities = PileAxialCapacity::new(&pile, &cumulative_shaft).evaluate()?;
    for capacity in &capacities.capacities {
        tracker.record(capacity.equation, format!("Pile {}", capacity.name));
    }
    let lookup = |name: &str| {
        capacities
            .value(name)
            .ok_or_else(|| CalcError::invalid_parameter(name, "missing", "Pile capacity was not evaluated"))
    };
    let (shaft_kn, base_kn, ultimate_kn) = (lookup("Qs")?, lookup("Qb")?, lookup("Qu")?);

    let load_transfer = cumulative_shaft.map(|qs| ultimate_kn - qs)?;
    debug!(qs_kn = shaft_kn, qb_kn = base_kn, qu_kn = ultimate_kn, "pile capacity");

    Ok(PileResult {
        shaft_kn,
        base_kn,
        ultimate_kn,
        capacities,
        shaft_increments,
        cumulative_shaft,
        load_transfer,
        equations: tracker.unique_equations(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrate::is_non_decreasing;
    use std::f64::consts::PI;

    fn test_input() -> PileInput {
        PileInput {
            label: "Test Pile".to_string(),
            length_m: 10.0,
            diameter_m: 1.0,
            ks_kn_m3: 500.0,
            kb_kpa: 2000.0,
            dz_m: Some(0.1),
        }
    }

    #[test]
    fn test_reference_pile() {
        let result = calculate(&test_input(), &EngineSettings::default()).unwrap();
        assert!((result.base_kn - 500.0 * PI).abs() < 1e-9);
        // Σ 500 · (0.1 i) · π · 0.1 for i < 100 = 24750π
        assert!((result.shaft_kn - 24750.0 * PI).abs() < 1e-6);
        assert!(result.shaft_kn.is_finite() && result.shaft_kn > 0.0);
        assert_eq!(result.cumulative_shaft.len(), 100);
    }

    #[test]
    fn test_cumulative_shaft_non_decreasing() {
        let result = calculate(&test_input(), &EngineSettings::default()).unwrap();
        assert!(is_non_decreasing(result.cumulative_shaft.values()));
        assert_eq!(result.cumulative_shaft.last_value(), result.shaft_kn);
    }

    #[test]
    fn test_load_transfer_ends_at_base() {
        let result = calculate(&test_input(), &EngineSettings::default()).unwrap();
        let n = result.load_transfer.values();
        assert_eq!(n[0], result.ultimate_kn);
        assert!(n.windows(2).all(|w| w[1] <= w[0]));
        assert!((result.load_transfer.last_value() - result.base_kn).abs() < 1e-9);
    }

    #[test]
    fn test_default_step_from_settings() {
        let input = PileInput {
            dz_m: None,
            ..test_input()
        };
        let settings = EngineSettings {
            default_pile_step_m: 0.5,
            ..Default::default()
        };
        let result = calculate(&input, &settings).unwrap();
        assert_eq!(result.cumulative_shaft.len(), 20);
    }

    #[test]
    fn test_invalid_inputs() {
        let settings = EngineSettings::default();

        let input = PileInput { length_m: 0.0, ..test_input() };
        assert_eq!(calculate(&input, &settings).unwrap_err().error_code(), "INVALID_DOMAIN");

        let input = PileInput { dz_m: Some(-0.1), ..test_input() };
        assert_eq!(calculate(&input, &settings).unwrap_err().error_code(), "INVALID_DOMAIN");

        let input = PileInput { kb_kpa: 0.0, ..test_input() };
        assert_eq!(calculate(&input, &settings).unwrap_err().error_code(), "INVALID_PARAMETER");
    }
}
