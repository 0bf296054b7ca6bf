//! # Lateral Earth Pressure Formulas
//!
//! Rankine active pressure on a vertical wall with a level backfill.
//!
//! ## Notation
//!
//! - `φ` = Soil friction angle (radians)
//! - `Ka` = Active earth pressure coefficient
//! - `γ` = Soil unit weight (kN/m³)
//! - `q` = Uniform surcharge on the backfill (kPa)
//! - `z` = Depth below top of wall (m)
//! - `H` = Retained height (m)
//!
//! ## References
//!
//! - Rankine (1857), as tabulated in Das, Principles of Foundation Engineering, Ch. 13

use std::f64::consts::FRAC_PI_4;

/// Rankine active earth pressure coefficient
///
/// # Formula
/// Ka = tan²(π/4 − φ/2)
///
/// Equivalent to (1 − sin φ)/(1 + sin φ). Ka = 1 at φ = 0 and falls toward
/// 0 as φ approaches π/2.
///
/// # Example
/// ```rust
/// use dcr_core::equations::earth::rankine_active_coefficient;
///
/// let ka = rankine_active_coefficient(30f64.to_radians());
/// assert!((ka - 1.0 / 3.0).abs() < 1e-12);
/// ```
#[inline]
pub fn rankine_active_coefficient(phi: f64) -> f64 {
    (FRAC_PI_4 - phi / 2.0).tan().powi(2)
}

/// Active lateral pressure at depth z
///
/// # Formula
/// p(z) = Ka·γ·z + Ka·q
#[inline]
pub fn active_pressure(ka: f64, gamma: f64, q: f64, z: f64) -> f64 {
    ka * gamma * z + ka * q
}

/// Resultant active thrust over height H (per unit length of wall)
///
/// # Formula
/// Pa = ½·Ka·γ·H² + Ka·q·H
#[inline]
pub fn active_thrust(ka: f64, gamma: f64, q: f64, h: f64) -> f64 {
    0.5 * ka * gamma * h * h + ka * q * h
}

/// Moment of the active thrust about the base of the retained height
///
/// # Formula
/// Ma = Ka·γ·H³/6 + Ka·q·H²/2
#[inline]
pub fn active_thrust_moment(ka: f64, gamma: f64, q: f64, h: f64) -> f64 {
    ka * gamma * h.powi(3) / 6.0 + ka * q * h * h / 2.0
}
