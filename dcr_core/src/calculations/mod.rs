//! # Analyses
//!
//! Each analysis mode follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Mode-specific results (JSON-serializable)
//! - `calculate(input, settings) -> CalcResult<*Result>` - Pure calculation function
//!
//! [`AnalysisRequest`] tags one input with its mode, and [`run`] dispatches it
//! and condenses the outcome into an [`AnalysisResult`]: the governing profile
//! plus a summary of named scalars that a presentation shell can show without
//! knowing the mode.
//!
//! ## Available Analyses
//!
//! - [`bending`] - Simply-supported beam under a point load (stress, no capacity check)
//! - [`wall`] - Retaining wall stem under active earth pressure (demand/capacity ratio)
//! - [`pile`] - Axial pile capacity from shaft friction and end bearing
//!
//! ## Example
//!
//! ```rust
//! use dcr_core::calculations::{run, AnalysisRequest};
//! use dcr_core::settings::EngineSettings;
//!
//! let json = r#"{
//!     "type": "Pile",
//!     "length_m": 10.0,
//!     "diameter_m": 1.0,
//!     "ks_kn_m3": 500.0,
//!     "kb_kpa": 2000.0
//! }"#;
//!
//! let request = AnalysisRequest::from_json(json).unwrap();
//! let result = run(&request, &EngineSettings::default()).unwrap();
//! assert!(result.summary.scalar("Qu").unwrap() > result.summary.scalar("Qb").unwrap());
//! ```

pub mod bending;
pub mod pile;
pub mod wall;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::Equation;
use crate::errors::CalcResult;
use crate::profile::{Profile, RatioProfile};
use crate::ratio::normalize;
use crate::settings::EngineSettings;

// Re-export commonly used types
pub use bending::{BendingInput, BendingResult};
pub use pile::{PileInput, PileResult};
pub use wall::{WallInput, WallResult};

/// One analysis request, tagged by mode.
///
/// ## JSON Example
///
/// ```json
/// { "type": "Bending", "length_m": 6.0, "load_kn": 20.0, "offset_m": 2.5,
///   "width_m": 0.3, "height_m": 0.5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnalysisRequest {
    /// Point-load bending of a simply-supported beam
    Bending(BendingInput),
    /// Retaining wall stem under active earth pressure
    Wall(WallInput),
    /// Axial pile capacity
    Pile(PileInput),
}

impl AnalysisRequest {
    /// Parse a request from JSON text.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get the user-provided label for this request
    pub fn label(&self) -> &str {
        match self {
            AnalysisRequest::Bending(b) => &b.label,
            AnalysisRequest::Wall(w) => &w.label,
            AnalysisRequest::Pile(p) => &p.label,
        }
    }

    /// Analysis mode of this request
    pub fn mode(&self) -> AnalysisMode {
        match self {
            AnalysisRequest::Bending(_) => AnalysisMode::Bending,
            AnalysisRequest::Wall(_) => AnalysisMode::Wall,
            AnalysisRequest::Pile(_) => AnalysisMode::Pile,
        }
    }

    /// Physical extent of the analysis domain (span, height or length, m)
    pub fn extent_m(&self) -> f64 {
        match self {
            AnalysisRequest::Bending(b) => b.length_m,
            AnalysisRequest::Wall(w) => w.height_m,
            AnalysisRequest::Pile(p) => p.length_m,
        }
    }
}

/// Analysis mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisMode {
    Bending,
    Wall,
    Pile,
}

impl AnalysisMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            AnalysisMode::Bending => "Point-Load Bending",
            AnalysisMode::Wall => "Retaining Wall Stem",
            AnalysisMode::Pile => "Axial Pile Capacity",
        }
    }

    /// What the governing profile holds, with units
    pub fn profile_quantity(&self) -> &'static str {
        match self {
            AnalysisMode::Bending => "bending stress (kPa)",
            AnalysisMode::Wall => "demand/capacity ratio",
            AnalysisMode::Pile => "cumulative shaft resistance (kN)",
        }
    }
}

/// Mode-independent summary of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Maximum of the governing profile
    pub governing_value: f64,

    /// Position of the governing value (m)
    pub governing_position: f64,

    /// Reactions, capacities, coefficients and section properties by symbol
    pub named_scalars: BTreeMap<String, f64>,

    /// Flexure or shear at the governing depth (wall only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governing_action: Option<String>,

    /// Whether the governing ratio is at most 1.0 (wall only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passes: Option<bool>,
}

impl Summary {
    fn new(governing: &RatioProfile) -> Self {
        Summary {
            governing_value: governing.governing_value,
            governing_position: governing.governing_position,
            named_scalars: BTreeMap::new(),
            governing_action: None,
            passes: None,
        }
    }

    fn with(mut self, name: &str, value: f64) -> Self {
        self.named_scalars.insert(name.to_string(), value);
        self
    }

    /// Look up a named scalar
    pub fn scalar(&self, name: &str) -> Option<f64> {
        self.named_scalars.get(name).copied()
    }
}

/// Mode-specific results behind an [`AnalysisResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnalysisDetail {
    Bending(BendingResult),
    Wall(WallResult),
    Pile(PileResult),
}

/// Outcome of [`run`]: governing profile, summary and full detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Mode that produced this result
    pub mode: AnalysisMode,

    /// Label copied from the request
    pub label: String,

    /// Governing profile: stress, ratio, or cumulative shaft resistance
    pub profile: Profile,

    /// Governing value, its position and named scalars
    pub summary: Summary,

    /// Equations evaluated, in first-use order
    pub equations: Vec<Equation>,

    /// Every profile and scalar the mode computed
    pub detail: AnalysisDetail,
}

impl AnalysisResult {
    /// Governing profile rescaled onto `[0, 1]`, ready for a renderer.
    pub fn display_field(&self) -> CalcResult<Profile> {
        normalize(&self.profile)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run one analysis request.
///
/// Settings are validated first; no partial result is ever returned.
pub fn run(request: &AnalysisRequest, settings: &EngineSettings) -> CalcResult<AnalysisResult> {
    settings.validate()?;
    debug!(mode = ?request.mode(), label = request.label(), "running analysis");

    let (profile, summary, equations, detail) = match request {
        AnalysisRequest::Bending(input) => {
            let result = bending::calculate(input, settings)?;
            let summary = Summary::new(&result.stress)
                .with("RA", result.reaction_left_kn)
                .with("RB", result.reaction_right_kn)
                .with("M_max", result.max_moment_knm)
                .with("M_under_load", result.moment_under_load_knm)
                .with("I", result.moment_of_inertia_m4)
                .with("y_max", result.y_max_m)
                .with("S", result.section_modulus_m3);
            (
                result.stress.profile.clone(),
                summary,
                result.equations.clone(),
                AnalysisDetail::Bending(result),
            )
        }
        AnalysisRequest::Wall(input) => {
            let result = wall::calculate(input, settings)?;
            let mut summary = Summary::new(&result.ratio.ratio)
                .with("Ka", result.ka)
                .with("a_block", result.stress_block_depth_m)
                .with("V_base", result.base_shear_kn)
                .with("M_base", result.base_moment_knm)
                .with("Pa", result.closed_form_thrust_kn)
                .with("Ma", result.closed_form_moment_knm);
            for capacity in &result.capacities.capacities {
                summary = summary.with(&capacity.name, capacity.value);
            }
            summary.governing_action = Some(result.governing_action().as_str().to_string());
            summary.passes = Some(result.passes());
            (
                result.ratio.ratio.profile.clone(),
                summary,
                result.equations.clone(),
                AnalysisDetail::Wall(result),
            )
        }
        AnalysisRequest::Pile(input) => {
            let result = pile::calculate(input, settings)?;
            let governing = RatioProfile::new(result.cumulative_shaft.clone());
            let mut summary = Summary::new(&governing);
            for capacity in &result.capacities.capacities {
                summary = summary.with(&capacity.name, capacity.value);
            }
            (
                governing.profile,
                summary,
                result.equations.clone(),
                AnalysisDetail::Pile(result),
            )
        }
    };

    Ok(AnalysisResult {
        mode: request.mode(),
        label: request.label().to_string(),
        profile,
        summary,
        equations,
        detail,
    })
}
