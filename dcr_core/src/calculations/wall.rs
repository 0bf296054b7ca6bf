//! # Cantilever Retaining Wall Stem Analysis
//!
//! Rankine active pressure on a reinforced concrete stem, integrated twice
//! down the height (pressure → shear → moment) and checked against the
//! ACI stress-block capacities at every depth.
//!
//! ## Assumptions
//!
//! - Depth `z` measured down from the top of the stem, `0 <= z <= H`
//! - Cohesionless backfill, level surface, uniform surcharge `q`
//! - Singly reinforced section; stem thickness `t` is the section width
//!   resisting the compression block and shear
//! - Resistance factors from [`EngineSettings`]
//!
//! The closed-form thrust `Pa` and its base moment `Ma` are reported next
//! to the integrated base shear and moment as a cross-check.
//!
//! ## Example
//!
//! ```rust
//! use dcr_core::calculations::wall::{calculate, WallInput};
//! use dcr_core::settings::EngineSettings;
//!
//! let input = WallInput {
//!     label: "RW-1".to_string(),
//!     height_m: 3.0,
//!     unit_weight_kn_m3: 18.0,
//!     friction_angle_deg: 30.0,
//!     surcharge_kpa: 0.0,
//!     fc_mpa: 25.0,
//!     fy_mpa: 420.0,
//!     thickness_m: 0.3,
//!     effective_depth_m: 0.25,
//!     steel_area_m2: 0.001,
//!     n_samples: None,
//! };
//!
//! let result = calculate(&input, &EngineSettings::default()).unwrap();
//! assert!((result.ka - 1.0 / 3.0).abs() < 1e-9);
//! assert!(result.passes());
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::capacity::{CapacityEvaluator, CapacityResult, ConcreteSection, FlexureShearCapacity};
use crate::domain::{Domain, Spacing};
use crate::equations::{active_thrust, active_thrust_moment, Equation, EquationTracker};
use crate::errors::{CalcError, CalcResult};
use crate::integrate::cumulative;
use crate::loads::{ActiveEarthPressure, LoadModel};
use crate::profile::Profile;
use crate::ratio::{demand_capacity, DemandCapacity, GoverningAction};
use crate::settings::EngineSettings;

/// Input parameters for a retaining wall stem.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "RW-1",
///   "height_m": 3.0,
///   "unit_weight_kn_m3": 18.0,
///   "friction_angle_deg": 30.0,
///   "surcharge_kpa": 10.0,
///   "fc_mpa": 25.0,
///   "fy_mpa": 420.0,
///   "thickness_m": 0.3,
///   "effective_depth_m": 0.25,
///   "steel_area_m2": 0.001
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallInput {
    /// User label (e.g., "RW-1")
    #[serde(default)]
    pub label: String,

    /// Retained height H (m)
    pub height_m: f64,

    /// Backfill unit weight γ (kN/m³)
    pub unit_weight_kn_m3: f64,

    /// Backfill friction angle φ (degrees)
    pub friction_angle_deg: f64,

    /// Uniform surcharge q (kPa)
    pub surcharge_kpa: f64,

    /// Concrete compressive strength f'c (MPa)
    pub fc_mpa: f64,

    /// Reinforcement yield strength fy (MPa)
    pub fy_mpa: f64,

    /// Stem thickness t (m)
    pub thickness_m: f64,

    /// Effective depth d (m)
    pub effective_depth_m: f64,

    /// Tension steel area As per metre run (m²)
    pub steel_area_m2: f64,

    /// Samples over the height; settings default when absent
    #[serde(default)]
    pub n_samples: Option<usize>,
}

impl WallInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.height_m.is_finite() || self.height_m <= 0.0 {
            return Err(CalcError::invalid_domain(
                "height_m",
                self.height_m.to_string(),
                "Wall height must be positive and finite",
            ));
        }
        if self.effective_depth_m > self.thickness_m {
            return Err(CalcError::invalid_parameter(
                "effective_depth_m",
                self.effective_depth_m.to_string(),
                format!("Effective depth exceeds the stem thickness ({} m)", self.thickness_m),
            ));
        }
        Ok(())
    }

    /// Stem cross-section seen by the capacity evaluator
    pub fn section(&self) -> ConcreteSection {
        ConcreteSection {
            fc_mpa: self.fc_mpa,
            fy_mpa: self.fy_mpa,
            thickness_m: self.thickness_m,
            effective_depth_m: self.effective_depth_m,
            steel_area_m2: self.steel_area_m2,
        }
    }
}

/// Results from a retaining wall stem analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallResult {
    /// Active earth pressure coefficient Ka
    pub ka: f64,

    // === Capacity ===
    /// Depth of the equivalent stress block a (m)
    pub stress_block_depth_m: f64,

    /// Mn, φMn, Vn, φVn in kN·m / kN
    pub capacities: CapacityResult,

    /// Design flexural capacity φMn (kN·m)
    pub phi_mn_knm: f64,

    /// Design shear capacity φVn (kN)
    pub phi_vn_kn: f64,

    // === Demand ===
    /// Integrated shear at the base (kN)
    pub base_shear_kn: f64,

    /// Integrated moment at the base (kN·m)
    pub base_moment_knm: f64,

    /// Closed-form total thrust Pa (kN)
    pub closed_form_thrust_kn: f64,

    /// Closed-form thrust moment about the base Ma (kN·m)
    pub closed_form_moment_knm: f64,

    // === Profiles ===
    /// Lateral pressure p(z) (kPa)
    pub pressure: Profile,

    /// Shear V(z) (kN)
    pub shear: Profile,

    /// Moment M(z) (kN·m)
    pub moment: Profile,

    /// max(M/φMn, V/φVn) per depth and the action behind it
    pub ratio: DemandCapacity,

    /// Equations evaluated, in first-use order
    pub equations: Vec<Equation>,
}

impl WallResult {
    /// Largest demand/capacity ratio over the height
    pub fn governing_ratio(&self) -> f64 {
        self.ratio.ratio.governing_value
    }

    /// Depth of the governing ratio (m)
    pub fn governing_depth_m(&self) -> f64 {
        self.ratio.ratio.governing_position
    }

    /// Flexure or shear, at the governing depth
    pub fn governing_action(&self) -> GoverningAction {
        self.ratio.governing_action()
    }

    /// True when no depth exceeds its capacity
    pub fn passes(&self) -> bool {
        self.ratio.ratio.passes()
    }
}

/// Run a retaining wall stem analysis.
///
/// # Returns
///
/// * `Ok(WallResult)` - Pressure, shear, moment, capacities and ratios
/// * `Err(CalcError)` - Invalid soil, section or domain parameters
pub fn calculate(input: &WallInput, settings: &EngineSettings) -> CalcResult<WallResult> {
    input.validate()?;

    let soil = ActiveEarthPressure::from_degrees(input.friction_angle_deg, input.unit_weight_kn_m3, input.surcharge_kpa)?;
    let evaluator = FlexureShearCapacity::new(input.section(), settings);
    // Capacities first: a bad section fails before any profile is built
    let capacities = evaluator.evaluate()?;

    let n = input.n_samples.unwrap_or(settings.default_wall_samples);
    let domain = Domain::build(input.height_m, Spacing::Count(n), settings.max_samples)?;
    debug!(label = %input.label, law = soil.name(), samples = domain.len(), ka = soil.ka(), "wall analysis");

    let mut tracker = EquationTracker::new();
    tracker.record_all(soil.equations(), "Backfill pressure");

    let pressure = soil.sample(&domain)?;
    let shear = cumulative(&domain, &pressure)?;
    tracker.record(Equation::CumulativeIntegration, "Pressure to shear");
    let moment = cumulative(&domain, &shear)?;
    tracker.record(Equation::CumulativeIntegration, "Shear to moment");

    tracker.record(Equation::StressBlockDepth, "Stem stress block");
    for capacity in &capacities.capacities {
        tracker.record(capacity.equation, format!("Stem {}", capacity.name));
    }
    let phi_mn = capacities
        .value("phi_Mn")
        .ok_or_else(|| CalcError::invalid_parameter("phi_Mn", "missing", "Flexural capacity was not evaluated"))?;
    let phi_vn = capacities
        .value("phi_Vn")
        .ok_or_else(|| CalcError::invalid_parameter("phi_Vn", "missing", "Shear capacity was not evaluated"))?;

    let ratio = demand_capacity(&moment, &shear, phi_mn, phi_vn)?;
    tracker.record(Equation::DemandCapacityRatio, "Stem utilisation");

    tracker.record(Equation::ActiveThrust, "Closed-form cross-check");
    let closed_form_thrust_kn = active_thrust(soil.ka(), input.unit_weight_kn_m3, input.surcharge_kpa, input.height_m);
    let closed_form_moment_knm =
        active_thrust_moment(soil.ka(), input.unit_weight_kn_m3, input.surcharge_kpa, input.height_m);

    debug!(
        ratio = ratio.ratio.governing_value,
        depth_m = ratio.ratio.governing_position,
        action = ratio.governing_action().as_str(),
        "wall governing check"
    );

    Ok(WallResult {
        ka: soil.ka(),
        stress_block_depth_m: evaluator.stress_block_depth_m()?,
        phi_mn_knm: phi_mn,
        phi_vn_kn: phi_vn,
        capacities,
        base_shear_kn: shear.last_value(),
        base_moment_knm: moment.last_value(),
        closed_form_thrust_kn,
        closed_form_moment_knm,
        pressure,
        shear,
        moment,
        ratio,
        equations: tracker.unique_equations(),
    })
}
