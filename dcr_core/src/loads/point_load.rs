//! Point-load bending on a simply-supported span
//!
//! The moment is evaluated in closed form at each position rather than
//! integrated, so sampled values match the analytic diagram exactly.

use serde::{Deserialize, Serialize};

use super::LoadModel;
use crate::equations::{point_load_moment, point_load_reactions, point_load_shear, Equation};
use crate::errors::{require_finite, CalcError, CalcResult};

/// Simply-supported span of length `span_m` carrying `load_kn` at `offset_m`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoadBending {
    span_m: f64,
    load_kn: f64,
    offset_m: f64,
}

impl PointLoadBending {
    /// Validate and build the law.
    ///
    /// The offset must lie on the span, `0 <= a <= L`. A load exactly at a
    /// support is accepted; it goes straight into that reaction and the
    /// moment is zero everywhere.
    pub fn new(span_m: f64, load_kn: f64, offset_m: f64) -> CalcResult<Self> {
        if !span_m.is_finite() || span_m <= 0.0 {
            return Err(CalcError::invalid_domain(
                "length_m",
                span_m.to_string(),
                "Span must be positive and finite",
            ));
        }
        require_finite("load_kn", load_kn)?;
        require_finite("offset_m", offset_m)?;
        if offset_m < 0.0 || offset_m > span_m {
            return Err(CalcError::invalid_domain(
                "offset_m",
                offset_m.to_string(),
                format!("Load offset must lie within the span [0, {}]", span_m),
            ));
        }

        Ok(PointLoadBending {
            span_m,
            load_kn,
            offset_m,
        })
    }

    /// Load offset from the left support (m)
    pub fn offset_m(&self) -> f64 {
        self.offset_m
    }

    /// True when the load acts directly over a support (`a == 0` or `a == L`)
    pub fn is_at_support(&self) -> bool {
        self.offset_m == 0.0 || self.offset_m == self.span_m
    }

    /// (RA, RB) in kN
    pub fn reactions(&self) -> (f64, f64) {
        point_load_reactions(self.load_kn, self.offset_m, self.span_m)
    }

    /// Bending moment (kN·m) at `x`
    pub fn moment_at(&self, x: f64) -> f64 {
        point_load_moment(self.load_kn, self.offset_m, self.span_m, x)
    }

    /// Shear (kN) at `x`
    pub fn shear_at(&self, x: f64) -> f64 {
        point_load_shear(self.load_kn, self.offset_m, self.span_m, x)
    }

    /// Peak moment, under the load: RA·a
    pub fn moment_under_load(&self) -> f64 {
        self.moment_at(self.offset_m)
    }
}

impl LoadModel for PointLoadBending {
    fn name(&self) -> &'static str {
        "point-load bending"
    }

    fn intensity_at(&self, position: f64) -> f64 {
        self.moment_at(position)
    }

    fn equations(&self) -> &'static [Equation] {
        &[Equation::PointLoadReactions, Equation::PointLoadMoment, Equation::PointLoadShear]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Domain;

    #[test]
    fn test_reference_beam() {
        let law = PointLoadBending::new(6.0, 20.0, 2.5).unwrap();
        let (ra, rb) = law.reactions();
        // RA = 20 · 3.5 / 6, RB = 20 · 2.5 / 6
        assert!((ra - 11.6667).abs() < 1e-4);
        assert!((rb - 8.3333).abs() < 1e-4);
        assert!((law.moment_at(2.5) - 29.1667).abs() < 1e-4);
        assert_eq!(law.moment_under_load(), law.moment_at(2.5));
    }

    #[test]
    fn test_reactions_balance_load() {
        for &a in &[0.0, 0.3, 2.5, 5.99, 6.0] {
            let (ra, rb) = PointLoadBending::new(6.0, 20.0, a).unwrap().reactions();
            assert!((ra + rb - 20.0).abs() < 1e-12, "a = {}", a);
        }
    }

    #[test]
    fn test_sampled_moment_is_exact() {
        let law = PointLoadBending::new(6.0, 20.0, 2.5).unwrap();
        let domain = Domain::with_count(6.0, 100).unwrap();
        let profile = law.sample(&domain).unwrap();
        for (x, m) in profile.iter() {
            assert_eq!(m, law.moment_at(x));
        }
        assert_eq!(profile.values()[0], 0.0);
        assert!(profile.last_value().abs() < 1e-12);
    }

    #[test]
    fn test_load_at_support() {
        let law = PointLoadBending::new(4.0, 10.0, 0.0).unwrap();
        assert!(law.is_at_support());
        assert_eq!(law.reactions(), (10.0, 0.0));
        assert_eq!(law.moment_at(2.0), 0.0);

        let law = PointLoadBending::new(4.0, 10.0, 4.0).unwrap();
        assert!(law.is_at_support());
        assert_eq!(law.reactions(), (0.0, 10.0));
        assert_eq!(law.moment_at(2.0), 0.0);
    }

    #[test]
    fn test_offset_off_span() {
        let err = PointLoadBending::new(6.0, 20.0, 6.5).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DOMAIN");
        assert!(PointLoadBending::new(6.0, 20.0, -0.1).is_err());
    }

    #[test]
    fn test_invalid_span() {
        assert_eq!(
            PointLoadBending::new(0.0, 20.0, 0.0).unwrap_err().error_code(),
            "INVALID_DOMAIN"
        );
        assert!(PointLoadBending::new(6.0, f64::NAN, 1.0).is_err());
    }
}
