//! # Ratio and Stress Derivation
//!
//! Turns demand profiles into the quantities a reviewer reads:
//!
//! - [`bending_stress`]: `σ(x) = M(x)·y_max / I` for a rectangular section,
//!   with no allowable-stress comparison
//! - [`normalize`]: rescale a profile onto `[0, 1]` for display
//! - [`demand_capacity`]: `max(M/φMn, V/φVn)` at every depth, with the
//!   governing action recorded per sample
//!
//! A zero capacity is a [`CalcError::DivisionByZero`] and a negative one an
//! [`CalcError::InvalidParameter`]; neither silently becomes infinity.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::equations::{bending_stress as flexure_formula, rectangular_extreme_fiber, rectangular_moment_of_inertia};
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::profile::{Profile, RatioProfile};

/// Bending stress profile and the section properties used for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressProfile {
    /// Extreme-fiber stress (kPa)
    pub stress: Profile,
    /// Moment of inertia I (m⁴)
    pub moment_of_inertia_m4: f64,
    /// Extreme fiber distance y_max (m)
    pub y_max_m: f64,
}

/// Extreme-fiber bending stress of a `b × h` rectangle at every sample.
pub fn bending_stress(moment: &Profile, width_m: f64, height_m: f64) -> CalcResult<StressProfile> {
    require_positive("width_m", width_m)?;
    require_positive("height_m", height_m)?;

    let i = rectangular_moment_of_inertia(width_m, height_m);
    if i <= 0.0 {
        return Err(CalcError::division_by_zero("bending stress", "moment of inertia underflows to zero"));
    }
    let y_max = rectangular_extreme_fiber(height_m);
    let stress = moment.map(|m| flexure_formula(m, y_max, i))?;

    Ok(StressProfile {
        stress,
        moment_of_inertia_m4: i,
        y_max_m: y_max,
    })
}

/// Rescale values onto `[0, 1]`: `(v − min)/(max − min)`.
///
/// A flat profile (`max == min`) maps to all zeros.
pub fn normalize(profile: &Profile) -> CalcResult<Profile> {
    let (_, min) = profile.min();
    let (_, max) = profile.max();
    let range = max - min;

    if range == 0.0 {
        warn!(value = min, "profile has zero range; normalized field is all zero");
        return profile.map(|_| 0.0);
    }
    profile.map(|v| (v - min) / range)
}

/// Which action consumed more of its capacity at a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoverningAction {
    Flexure,
    Shear,
}

impl GoverningAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoverningAction::Flexure => "flexure",
            GoverningAction::Shear => "shear",
        }
    }
}

/// Demand/capacity ratios along a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandCapacity {
    /// `max(M/φMn, V/φVn)` per sample, with its governing sample
    pub ratio: RatioProfile,
    /// Governing action per sample
    pub actions: Vec<GoverningAction>,
}

impl DemandCapacity {
    /// Action at the governing sample
    pub fn governing_action(&self) -> GoverningAction {
        self.actions[self.ratio.governing_index]
    }
}

fn check_capacity(quantity: &str, capacity: f64) -> CalcResult<f64> {
    if capacity == 0.0 {
        return Err(CalcError::division_by_zero(quantity, "capacity is zero"));
    }
    if !capacity.is_finite() || capacity < 0.0 {
        return Err(CalcError::invalid_parameter(
            quantity,
            capacity.to_string(),
            "Capacity must be positive and finite",
        ));
    }
    Ok(capacity)
}

/// Flexure and shear utilisation at every sample; the larger one governs.
pub fn demand_capacity(moment: &Profile, shear: &Profile, phi_mn: f64, phi_vn: f64) -> CalcResult<DemandCapacity> {
    let phi_mn = check_capacity("M/phi_Mn", phi_mn)?;
    let phi_vn = check_capacity("V/phi_Vn", phi_vn)?;
    if moment.positions() != shear.positions() {
        return Err(CalcError::invalid_domain(
            "shear",
            shear.len().to_string(),
            "Moment and shear profiles must share positions",
        ));
    }

    let (values, actions): (Vec<f64>, Vec<GoverningAction>) = moment
        .values()
        .iter()
        .zip(shear.values())
        .map(|(m, v)| {
            let flexure = m / phi_mn;
            let shear = v / phi_vn;
            if flexure >= shear {
                (flexure, GoverningAction::Flexure)
            } else {
                (shear, GoverningAction::Shear)
            }
        })
        .unzip();

    Ok(DemandCapacity {
        ratio: RatioProfile::new(Profile::new(moment.positions().to_vec(), values)?),
        actions,
    })
}
