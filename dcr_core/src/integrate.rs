//! # Internal-Force Integrator
//!
//! Accumulates sampled intensities into running profiles:
//!
//! - [`cumulative`]: running sum of `intensity × step` (pressure → shear,
//!   shear → moment). Each sample stands for the strip starting at its
//!   position, so the value at sample `i` includes strip `i`.
//! - [`running_total`]: running sum without scaling, for intensities that
//!   are already increments (pile shaft force per `dz`).
//!
//! Closed-form profiles (point-load bending) never pass through here.
//!
//! ## Example
//!
//! ```rust
//! use dcr_core::domain::Domain;
//! use dcr_core::integrate::cumulative;
//! use dcr_core::profile::Profile;
//!
//! let domain = Domain::with_increment(1.0, 0.25).unwrap();
//! let pressure = Profile::from_domain(&domain, vec![4.0; 4]).unwrap();
//! let shear = cumulative(&domain, &pressure).unwrap();
//! assert_eq!(shear.values(), &[1.0, 2.0, 3.0, 4.0]);
//! ```

use crate::domain::Domain;
use crate::errors::{CalcError, CalcResult};
use crate::profile::Profile;

/// Running sum of `values`, each term multiplied by `step`.
pub fn cumulative_values(values: &[f64], step: f64) -> Vec<f64> {
    let mut total = 0.0;
    values
        .iter()
        .map(|v| {
            total += v * step;
            total
        })
        .collect()
}

/// Integrate `intensity` over `domain` with the domain step.
pub fn cumulative(domain: &Domain, intensity: &Profile) -> CalcResult<Profile> {
    if intensity.len() != domain.len() {
        return Err(CalcError::invalid_domain(
            "intensity",
            intensity.len().to_string(),
            format!("Intensity has {} samples, domain has {}", intensity.len(), domain.len()),
        ));
    }
    Profile::from_domain(domain, cumulative_values(intensity.values(), domain.step()))
}

/// Running sum of per-increment quantities, no step scaling.
pub fn running_total(increments: &Profile) -> CalcResult<Profile> {
    Profile::new(
        increments.positions().to_vec(),
        cumulative_values(increments.values(), 1.0),
    )
}

/// True when every value is at least the one before it.
pub fn is_non_decreasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[1] >= w[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_values() {
        assert_eq!(cumulative_values(&[1.0, 2.0, 3.0], 0.5), vec![0.5, 1.5, 3.0]);
        assert!(cumulative_values(&[], 1.0).is_empty());
    }

    #[test]
    fn test_linear_pressure_double_integration() {
        // p = z on [0, 1): shear ≈ z²/2, moment ≈ z³/6
        let domain = Domain::with_increment(1.0, 0.001).unwrap();
        let pressure = Profile::from_domain(&domain, domain.positions().to_vec()).unwrap();
        let shear = cumulative(&domain, &pressure).unwrap();
        let moment = cumulative(&domain, &shear).unwrap();

        let z = domain.last();
        assert!((shear.last_value() - z * z / 2.0).abs() < 1e-3);
        assert!((moment.last_value() - z.powi(3) / 6.0).abs() < 1e-3);
    }

    #[test]
    fn test_non_negative_intensity_gives_non_decreasing_profile() {
        let domain = Domain::with_count(3.0, 50).unwrap();
        let intensity = Profile::from_domain(
            &domain,
            domain.positions().iter().map(|z| (z * 7.0).sin().abs()).collect(),
        )
        .unwrap();
        let first = cumulative(&domain, &intensity).unwrap();
        let second = cumulative(&domain, &first).unwrap();
        assert!(is_non_decreasing(first.values()));
        assert!(is_non_decreasing(second.values()));
    }

    #[test]
    fn test_running_total_unscaled() {
        let increments = Profile::new(vec![0.0, 0.1, 0.2], vec![0.0, 2.0, 4.0]).unwrap();
        let total = running_total(&increments).unwrap();
        assert_eq!(total.values(), &[0.0, 2.0, 6.0]);
        assert_eq!(total.positions(), increments.positions());
    }

    #[test]
    fn test_mismatched_lengths() {
        let domain = Domain::with_count(1.0, 5).unwrap();
        let intensity = Profile::new(vec![0.0, 1.0], vec![1.0, 1.0]).unwrap();
        assert_eq!(cumulative(&domain, &intensity).unwrap_err().error_code(), "INVALID_DOMAIN");
    }
}
