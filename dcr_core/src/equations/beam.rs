//! # Point Load on a Simple Span
//!
//! Closed-form reactions, shear and moment for one concentrated load `P` at
//! offset `a` on a pin-roller span of length `L`. Positions `x` run from the
//! pin (x = 0) to the roller (x = L). Units: m and kN.
//!
//! Downward loads and upward reactions are positive. Sagging moment is
//! positive; shear is positive when the left face is pushed up.
//!
//! Source: Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1.

/// Calculate reactions for point load P at position a on span L
///
/// ```text
///        P
///        ↓
///    ────┬────────────
///    △   a            △
///   RA  ←───────L────→ RB
/// ```
///
/// # Formulas (Roark's Table 8.1, Case 1a)
/// - RA = P(L-a)/L
/// - RB = Pa/L
///
/// # Returns
/// (RA, RB) - Left and right reactions (positive upward)
///
/// # Example
/// ```rust
/// use dcr_core::equations::beam::point_load_reactions;
///
/// let (ra, rb) = point_load_reactions(20.0, 2.5, 6.0);
/// assert!((ra - 35.0 / 3.0).abs() < 1e-12);
/// assert!((rb - 25.0 / 3.0).abs() < 1e-12);
/// ```
#[inline]
pub fn point_load_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    let ra = p * (l - a) / l;
    let rb = p * a / l;
    (ra, rb)
}

/// Calculate shear at position x for point load P at position a
///
/// # Formulas
/// - V(x) = RA           for x < a
/// - V(x) = RA - P       for x ≥ a
#[inline]
pub fn point_load_shear(p: f64, a: f64, l: f64, x: f64) -> f64 {
    let (ra, _) = point_load_reactions(p, a, l);
    if x < a {
        ra
    } else {
        ra - p
    }
}

/// Calculate moment at position x for point load P at position a
///
/// # Formulas (Roark's Table 8.1, Case 1a)
/// - M(x) = RA·x           for x < a
/// - M(x) = RA·x - P(x-a)  for x ≥ a
///
/// Maximum moment occurs at the load point:
/// - M_max = Pa(L-a)/L = RA·a
#[inline]
pub fn point_load_moment(p: f64, a: f64, l: f64, x: f64) -> f64 {
    let (ra, _) = point_load_reactions(p, a, l);
    if x < a {
        ra * x
    } else {
        ra * x - p * (x - a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reactions_sum_to_load() {
        for &(p, a, l) in &[(20.0, 2.5, 6.0), (1.0, 0.0, 3.0), (7.3, 4.0, 4.0), (100.0, 1.1, 9.7)] {
            let (ra, rb) = point_load_reactions(p, a, l);
            assert!((ra + rb - p).abs() < 1e-12);
        }
    }

    #[test]
    fn test_moment_peak_at_load() {
        // 10 m span, 100 kN at midspan: M = PL/4 = 250 kN·m
        assert!((point_load_moment(100.0, 5.0, 10.0, 5.0) - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_moment_zero_at_supports() {
        assert_eq!(point_load_moment(20.0, 2.5, 6.0, 0.0), 0.0);
        assert!(point_load_moment(20.0, 2.5, 6.0, 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_shear_jump() {
        let (ra, rb) = point_load_reactions(20.0, 2.5, 6.0);
        assert_eq!(point_load_shear(20.0, 2.5, 6.0, 2.0), ra);
        assert!((point_load_shear(20.0, 2.5, 6.0, 3.0) + rb).abs() < 1e-12);
    }
}
