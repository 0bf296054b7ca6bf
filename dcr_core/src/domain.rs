//! # Domain Discretizer
//!
//! Builds the ordered sample positions over a physical extent (beam span,
//! wall height, pile length) that every other engine step works on.
//!
//! Two spacing modes are supported:
//!
//! - **Count**: `n` evenly spaced samples from `0` to `extent`, both ends
//!   included. The last sample is exactly `extent`.
//! - **Increment**: samples `0, dz, 2dz, ...` strictly below `extent`
//!   (half-open range). The last sample may fall short of `extent`. A
//!   sample that lands on `extent` up to rounding is left out.
//!
//! A deserialized domain is rebuilt from its extent and spacing under the
//! default sample limit.
//!
//! ## Example
//!
//! ```rust
//! use dcr_core::domain::Domain;
//!
//! let span = Domain::with_count(6.0, 4).unwrap();
//! assert_eq!(span.positions(), &[0.0, 2.0, 4.0, 6.0]);
//!
//! let depth = Domain::with_increment(1.0, 0.25).unwrap();
//! assert_eq!(depth.positions(), &[0.0, 0.25, 0.5, 0.75]);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::settings::EngineSettings;

/// How samples are laid out over the extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Spacing {
    /// Fixed number of samples, endpoints included
    Count(usize),
    /// Fixed increment, `extent` itself excluded
    Increment(f64),
}

/// Relative slack when deciding whether an increment sample reaches the extent
const EXTENT_TOLERANCE: f64 = 1e-12;

/// Ordered sample positions over `[0, extent]`.
///
/// Strictly increasing, first element 0. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DomainShape")]
pub struct Domain {
    extent: f64,
    spacing: Spacing,
    step: f64,
    positions: Vec<f64>,
}

/// What a serialized domain is rebuilt from
#[derive(Deserialize)]
struct DomainShape {
    extent: f64,
    spacing: Spacing,
}

impl TryFrom<DomainShape> for Domain {
    type Error = CalcError;

    fn try_from(shape: DomainShape) -> CalcResult<Self> {
        Domain::build(shape.extent, shape.spacing, EngineSettings::default().max_samples)
    }
}

impl Domain {
    /// Evenly spaced samples from 0 to `extent` inclusive.
    pub fn with_count(extent: f64, n: usize) -> CalcResult<Self> {
        Self::build(extent, Spacing::Count(n), EngineSettings::default().max_samples)
    }

    /// Samples from 0 up to but not including `extent`, `dz` apart.
    pub fn with_increment(extent: f64, dz: f64) -> CalcResult<Self> {
        Self::build(extent, Spacing::Increment(dz), EngineSettings::default().max_samples)
    }

    /// Build a domain, refusing anything larger than `max_samples`.
    pub fn build(extent: f64, spacing: Spacing, max_samples: usize) -> CalcResult<Self> {
        if !extent.is_finite() || extent <= 0.0 {
            return Err(CalcError::invalid_domain(
                "extent",
                extent.to_string(),
                "Extent must be positive and finite",
            ));
        }

        let (step, count) = match spacing {
            Spacing::Count(n) => {
                if n < 2 {
                    return Err(CalcError::invalid_domain(
                        "n_samples",
                        n.to_string(),
                        "At least two samples are required",
                    ));
                }
                (extent / (n - 1) as f64, n)
            }
            Spacing::Increment(dz) => {
                if !dz.is_finite() || dz <= 0.0 {
                    return Err(CalcError::invalid_domain(
                        "dz",
                        dz.to_string(),
                        "Increment must be positive and finite",
                    ));
                }
                let estimate = (extent / dz).ceil();
                if estimate > max_samples as f64 + 1.0 {
                    return Err(CalcError::invalid_domain(
                        "dz",
                        dz.to_string(),
                        format!("Increment yields more than {} samples", max_samples),
                    ));
                }

                // Sample i is kept only while i·dz stays below the extent
                let limit = extent * (1.0 - EXTENT_TOLERANCE);
                let mut count = estimate as usize;
                while count > 0 && (count - 1) as f64 * dz >= limit {
                    count -= 1;
                }
                while (count as f64) * dz < limit {
                    count += 1;
                }

                if count < 2 {
                    return Err(CalcError::invalid_domain(
                        "dz",
                        dz.to_string(),
                        format!("Increment must be smaller than the extent ({})", extent),
                    ));
                }
                if count > max_samples {
                    return Err(CalcError::invalid_domain(
                        "dz",
                        dz.to_string(),
                        format!("Increment yields more than {} samples", max_samples),
                    ));
                }
                (dz, count)
            }
        };

        if count > max_samples {
            return Err(CalcError::invalid_domain(
                "n_samples",
                count.to_string(),
                format!("Sample count exceeds the limit of {}", max_samples),
            ));
        }

        let mut positions: Vec<f64> = (0..count).map(|i| i as f64 * step).collect();
        if let Spacing::Count(_) = spacing {
            // Pin the far end so the closed-form checks at x = L see exactly L
            positions[count - 1] = extent;
        }

        Ok(Domain {
            extent,
            spacing,
            step,
            positions,
        })
    }

    /// Sample positions, strictly increasing from 0
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Distance between neighbouring samples
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false for a successfully built domain
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Last sample position
    pub fn last(&self) -> f64 {
        self.positions.last().copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_mode_endpoints() {
        let domain = Domain::with_count(6.0, 100).unwrap();
        assert_eq!(domain.len(), 100);
        assert_eq!(domain.positions()[0], 0.0);
        assert_eq!(domain.last(), 6.0);
        assert!((domain.step() - 6.0 / 99.0).abs() < 1e-15);
    }

    #[test]
    fn test_strictly_increasing() {
        let domain = Domain::with_count(3.0, 57).unwrap();
        assert!(domain.positions().windows(2).all(|w| w[1] > w[0]));

        let domain = Domain::with_increment(10.0, 0.1).unwrap();
        assert!(domain.positions().windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_increment_mode_half_open() {
        let domain = Domain::with_increment(10.0, 0.1).unwrap();
        assert_eq!(domain.len(), 100);
        assert!(domain.last() < 10.0);
        assert!((domain.last() - 9.9).abs() < 1e-9);
    }

    #[test]
    fn test_increment_not_dividing_extent() {
        // 0, 0.4, 0.8 - the next sample (1.2) would pass the extent
        let domain = Domain::with_increment(1.0, 0.4).unwrap();
        assert_eq!(domain.len(), 3);
        assert!((domain.last() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_increment_exact_multiple_excludes_extent() {
        // extent / dz rounds above the integer for several of these
        let cases = [
            (2.1, 0.3, 7),
            (4.2, 0.3, 14),
            (8.4, 0.3, 28),
            (0.7, 0.1, 7),
            (0.3, 0.1, 3),
            (1.2, 0.2, 6),
            (3.5, 0.7, 5),
            (0.15, 0.05, 3),
            (1.0, 0.25, 4),
        ];
        for &(extent, dz, expected) in &cases {
            let domain = Domain::with_increment(extent, dz).unwrap();
            assert_eq!(domain.len(), expected, "extent = {}, dz = {}", extent, dz);
            assert!(domain.last() < extent, "extent = {}, dz = {}", extent, dz);
            assert!(domain.len() as f64 * dz >= extent - 1e-9);
        }
    }

    #[test]
    fn test_deserialize_rebuilds_positions() {
        let domain: Domain = serde_json::from_str(r#"{"extent": 2.0, "spacing": {"Count": 3}}"#).unwrap();
        assert_eq!(domain.positions(), &[0.0, 1.0, 2.0]);

        let domain: Domain =
            serde_json::from_str(r#"{"extent": 1.0, "spacing": {"Increment": 0.25}, "positions": [0.0]}"#).unwrap();
        assert_eq!(domain.positions(), &[0.0, 0.25, 0.5, 0.75]);

        let original = Domain::with_count(3.0, 4).unwrap();
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(serde_json::from_str::<Domain>(&json).unwrap(), original);
    }

    #[test]
    fn test_deserialize_rejects_invalid_domain() {
        assert!(serde_json::from_str::<Domain>(r#"{"extent": -1.0, "spacing": {"Count": 3}}"#).is_err());
        assert!(serde_json::from_str::<Domain>(r#"{"extent": 1.0, "spacing": {"Count": 1}}"#).is_err());
        assert!(serde_json::from_str::<Domain>(r#"{"extent": 1.0, "spacing": {"Increment": 0.0}}"#).is_err());
    }

    #[test]
    fn test_invalid_extent() {
        assert_eq!(Domain::with_count(0.0, 10).unwrap_err().error_code(), "INVALID_DOMAIN");
        assert!(Domain::with_count(-2.0, 10).is_err());
        assert!(Domain::with_count(f64::NAN, 10).is_err());
        assert!(Domain::with_increment(f64::INFINITY, 0.1).is_err());
    }

    #[test]
    fn test_invalid_count() {
        assert!(Domain::with_count(5.0, 1).is_err());
        assert!(Domain::with_count(5.0, 0).is_err());
        assert!(Domain::with_count(5.0, 2).is_ok());
    }

    #[test]
    fn test_invalid_increment() {
        assert!(Domain::with_increment(5.0, 0.0).is_err());
        assert!(Domain::with_increment(5.0, -0.1).is_err());
        assert!(Domain::with_increment(5.0, 5.0).is_err());
        assert!(Domain::with_increment(5.0, f64::NAN).is_err());
    }

    #[test]
    fn test_sample_limit() {
        let err = Domain::build(1.0, Spacing::Increment(1e-9), 1000).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DOMAIN");

        assert!(Domain::build(1.0, Spacing::Count(1001), 1000).is_err());
        assert!(Domain::build(1.0, Spacing::Count(1000), 1000).is_ok());
    }
}
