//! # Cross-Section Property Formulas
//!
//! Geometric properties of a solid rectangular section and the elastic
//! flexure formula that uses them.
//!
//! ## Notation
//!
//! - `I` = Moment of inertia (second moment of area)
//! - `c` = Distance from neutral axis to extreme fiber (y_max)
//! - `S` = Section modulus (I/c)
//! - `b` = Width of section
//! - `h` = Height of section
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Chapter 3

/// Moment of inertia for a rectangular section about its centroidal axis
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │ ════════│ ← neutral axis at h/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = bh³/12
///
/// # Example
/// ```rust
/// use dcr_core::equations::section::rectangular_moment_of_inertia;
///
/// // 300 x 500 mm beam
/// let i = rectangular_moment_of_inertia(0.3, 0.5);
/// assert!((i - 0.003125).abs() < 1e-12);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

/// Distance from the neutral axis to the extreme fiber of a rectangle
///
/// # Formula
/// y_max = h/2
#[inline]
pub fn rectangular_extreme_fiber(h: f64) -> f64 {
    h / 2.0
}

/// Elastic section modulus from inertia and extreme fiber distance
///
/// # Formula
/// S = I / y_max
#[inline]
pub fn section_modulus(i: f64, y_max: f64) -> f64 {
    i / y_max
}

/// Extreme-fiber bending stress (flexure formula)
///
/// # Formula
/// σ = M·y_max / I
///
/// With M in kN·m, y_max in m and I in m⁴ the result is in kPa.
#[inline]
pub fn bending_stress(m: f64, y_max: f64, i: f64) -> f64 {
    m * y_max / i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_properties() {
        let i = rectangular_moment_of_inertia(0.3, 0.5);
        let y = rectangular_extreme_fiber(0.5);
        assert_eq!(y, 0.25);
        // S = bh²/6 = 0.3 * 0.25 / 6 = 0.0125
        assert!((section_modulus(i, y) - 0.0125).abs() < 1e-12);
    }

    #[test]
    fn test_bending_stress() {
        // 31.25 kN·m on a 300x500 section: σ = M/S = 31.25 / 0.0125 = 2500 kPa
        let i = rectangular_moment_of_inertia(0.3, 0.5);
        let sigma = bending_stress(31.25, 0.25, i);
        assert!((sigma - 2500.0).abs() < 1e-9);
    }
}
