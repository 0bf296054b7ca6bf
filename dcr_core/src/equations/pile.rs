//! # Pile Axial Resistance Formulas
//!
//! Subgrade-reaction style shaft and base resistance for a circular pile.
//! Shaft friction grows linearly with depth; base resistance is a single
//! value at the tip.
//!
//! ## Notation
//!
//! - `D` = Pile diameter (m)
//! - `ks` = Shaft friction modulus (kN/m³): unit friction at depth z is ks·z
//! - `kb` = Base resistance (kPa)
//! - `dz` = Depth increment (m)

use std::f64::consts::PI;

/// Pile circumference
///
/// # Formula
/// perimeter = π·D
#[inline]
pub fn shaft_perimeter(d: f64) -> f64 {
    PI * d
}

/// Pile tip area
///
/// # Formula
/// A_b = π·D²/4
#[inline]
pub fn base_area(d: f64) -> f64 {
    PI * d * d / 4.0
}

/// Shaft force mobilised over one depth increment
///
/// # Formula
/// dQs = ks·z·π·D·dz
#[inline]
pub fn shaft_friction_increment(ks: f64, z: f64, d: f64, dz: f64) -> f64 {
    ks * z * shaft_perimeter(d) * dz
}

/// Base resistance
///
/// # Formula
/// Qb = kb·π·D²/4
///
/// # Example
/// ```rust
/// use dcr_core::equations::pile::base_resistance;
///
/// let qb = base_resistance(2000.0, 1.0);
/// assert!((qb - 1570.796).abs() < 1e-3);
/// ```
#[inline]
pub fn base_resistance(kb: f64, d: f64) -> f64 {
    kb * base_area(d)
}
