//! # Reinforced Concrete Section Strength
//!
//! Nominal flexural and one-way shear strength of a singly reinforced
//! rectangular section using the ACI equivalent rectangular stress block.
//!
//! ## Notation
//!
//! - `As` = Area of tension reinforcement (m²)
//! - `fy` = Reinforcement yield strength (MPa)
//! - `f'c` = Concrete compressive strength (MPa)
//! - `t` = Section width resisting the compression block (m)
//! - `d` = Effective depth to reinforcement centroid (m)
//! - `a` = Depth of equivalent stress block (m)
//!
//! With these units forces come out in MN and moments in MN·m.
//!
//! ## References
//!
//! - ACI 318-19 Section 22.2 (flexure), Section 22.5.5.1 (Vc, SI form)

/// Depth of the Whitney stress block
///
/// # Formula
/// a = As·fy / (0.85·f'c·t)
#[inline]
pub fn stress_block_depth(as_m2: f64, fy: f64, fc: f64, t: f64) -> f64 {
    as_m2 * fy / (0.85 * fc * t)
}

/// Nominal moment strength
///
/// # Formula
/// Mn = As·fy·(d − a/2)
#[inline]
pub fn nominal_moment(as_m2: f64, fy: f64, d: f64, a_block: f64) -> f64 {
    as_m2 * fy * (d - a_block / 2.0)
}

/// Nominal concrete shear strength
///
/// # Formula
/// Vn = 0.17·√f'c·t·d
#[inline]
pub fn nominal_shear(fc: f64, t: f64, d: f64) -> f64 {
    0.17 * fc.sqrt() * t * d
}
