//! # Point-Load Bending Analysis
//!
//! Simply-supported rectangular beam carrying one concentrated load.
//! Moment and shear are evaluated in closed form at every sample, then
//! turned into extreme-fiber stress and its `[0, 1]` display rescaling.
//!
//! There is no allowable-stress comparison: the result reports raw stress
//! and its governing location only.
//!
//! ## Example
//!
//! ```rust
//! use dcr_core::calculations::bending::{calculate, BendingInput};
//! use dcr_core::settings::EngineSettings;
//!
//! let input = BendingInput {
//!     label: "B-1".to_string(),
//!     length_m: 6.0,
//!     load_kn: 20.0,
//!     offset_m: 2.5,
//!     width_m: 0.3,
//!     height_m: 0.5,
//!     n_samples: None,
//! };
//!
//! let result = calculate(&input, &EngineSettings::default()).unwrap();
//! assert!((result.reaction_left_kn + result.reaction_right_kn - 20.0).abs() < 1e-12);
//! assert_eq!(result.moment.len(), 100);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{Domain, Spacing};
use crate::equations::{section_modulus, Equation, EquationTracker};
use crate::errors::{require_finite, require_positive, CalcResult};
use crate::loads::{LoadModel, PointLoadBending};
use crate::profile::{Profile, RatioProfile};
use crate::ratio::{bending_stress, normalize};
use crate::settings::EngineSettings;

/// Input parameters for a point-load bending analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "length_m": 6.0,
///   "load_kn": 20.0,
///   "offset_m": 2.5,
///   "width_m": 0.3,
///   "height_m": 0.5,
///   "n_samples": 100
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendingInput {
    /// User label (e.g., "B-1")
    #[serde(default)]
    pub label: String,

    /// Span L (m)
    pub length_m: f64,

    /// Point load P (kN), positive downward
    pub load_kn: f64,

    /// Load offset a from the left support (m)
    pub offset_m: f64,

    /// Section width b (m)
    pub width_m: f64,

    /// Section height h (m)
    pub height_m: f64,

    /// Samples along the span; settings default when absent
    #[serde(default)]
    pub n_samples: Option<usize>,
}

impl BendingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("width_m", self.width_m)?;
        require_positive("height_m", self.height_m)?;
        require_finite("load_kn", self.load_kn)?;
        // Span and offset are checked by the load law
        PointLoadBending::new(self.length_m, self.load_kn, self.offset_m)?;
        Ok(())
    }
}

/// Results from a point-load bending analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendingResult {
    // === Reactions ===
    /// Left reaction RA (kN)
    pub reaction_left_kn: f64,

    /// Right reaction RB (kN)
    pub reaction_right_kn: f64,

    // === Demand ===
    /// Largest sampled moment (kN·m)
    pub max_moment_knm: f64,

    /// Position of the largest sampled moment (m)
    pub max_moment_position_m: f64,

    /// Moment directly under the load, RA·a (kN·m)
    pub moment_under_load_knm: f64,

    // === Section Properties ===
    /// Moment of inertia I = bh³/12 (m⁴)
    pub moment_of_inertia_m4: f64,

    /// Extreme fiber distance h/2 (m)
    pub y_max_m: f64,

    /// Section modulus S = I/y_max (m³)
    pub section_modulus_m3: f64,

    // === Profiles ===
    /// Bending moment M(x) (kN·m)
    pub moment: Profile,

    /// Shear V(x) (kN)
    pub shear: Profile,

    /// Extreme-fiber stress σ(x) (kPa) with its governing (maximum) sample
    pub stress: RatioProfile,

    /// σ(x) rescaled onto [0, 1]
    pub normalized_stress: Profile,

    /// Equations evaluated, in first-use order
    pub equations: Vec<Equation>,
}

impl BendingResult {
    /// Peak extreme-fiber stress (kPa)
    pub fn max_stress_kpa(&self) -> f64 {
        self.stress.governing_value
    }
}

/// Run a point-load bending analysis.
///
/// # Returns
///
/// * `Ok(BendingResult)` - Reactions, closed-form diagrams and stress
/// * `Err(CalcError)` - Invalid span, offset, section or sample count
pub fn calculate(input: &BendingInput, settings: &EngineSettings) -> CalcResult<BendingResult> {
    input.validate()?;

    let law = PointLoadBending::new(input.length_m, input.load_kn, input.offset_m)?;
    if law.is_at_support() {
        warn!(offset_m = law.offset_m(), "point load sits on a support; moment is zero along the span");
    }
    let n = input.n_samples.unwrap_or(settings.default_beam_samples);
    let domain = Domain::build(input.length_m, Spacing::Count(n), settings.max_samples)?;
    debug!(label = %input.label, law = law.name(), samples = domain.len(), "bending analysis");

    let mut tracker = EquationTracker::new();

    let (ra, rb) = law.reactions();
    let moment = law.sample(&domain)?;
    let shear = Profile::from_domain(&domain, domain.positions().iter().map(|&x| law.shear_at(x)).collect())?;
    tracker.record_all(law.equations(), "Reactions and diagrams");

    let stress = bending_stress(&moment, input.width_m, input.height_m)?;
    tracker.record(Equation::RectangularMomentOfInertia, "Section inertia");
    tracker.record(Equation::BendingStress, "Extreme fiber stress");

    let normalized_stress = normalize(&stress.stress)?;
    tracker.record(Equation::StressNormalization, "Display field");

    let (max_moment_position_m, max_moment_knm) = moment.max();
    let stress_profile = RatioProfile::new(stress.stress);
    debug!(
        max_stress_kpa = stress_profile.governing_value,
        position_m = stress_profile.governing_position,
        "bending governing stress"
    );

    Ok(BendingResult {
        reaction_left_kn: ra,
        reaction_right_kn: rb,
        max_moment_knm,
        max_moment_position_m,
        moment_under_load_knm: law.moment_under_load(),
        moment_of_inertia_m4: stress.moment_of_inertia_m4,
        y_max_m: stress.y_max_m,
        section_modulus_m3: section_modulus(stress.moment_of_inertia_m4, stress.y_max_m),
        moment,
        shear,
        stress: stress_profile,
        normalized_stress,
        equations: tracker.unique_equations(),
    })
}
