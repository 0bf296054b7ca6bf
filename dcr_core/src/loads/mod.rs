//! Load and resistance intensity laws
//!
//! Each analysis mode evaluates a local intensity at every sample of its
//! domain. The laws share one contract, [`LoadModel`]: given a position and
//! the parameters captured at construction, return a scalar.
//!
//! # Overview
//!
//! - [`PointLoadBending`] - closed-form moment of a simply-supported span under a point load
//! - [`ActiveEarthPressure`] - Rankine active pressure `Ka·γ·z + Ka·q`
//! - [`PileResistance`] - shaft force per depth increment `ks·z·π·D·dz`, plus base resistance
//!
//! Constructors validate their parameters, so a built law always yields
//! finite intensities over its domain.
//!
//! # Example
//!
//! ```
//! use dcr_core::domain::Domain;
//! use dcr_core::loads::{ActiveEarthPressure, LoadModel};
//!
//! let law = ActiveEarthPressure::from_degrees(30.0, 18.0, 0.0).unwrap();
//! let domain = Domain::with_count(3.0, 31).unwrap();
//! let pressure = law.sample(&domain).unwrap();
//! assert!((pressure.last_value() - 18.0).abs() < 1e-9);
//! ```

pub mod earth_pressure;
pub mod pile_resistance;
pub mod point_load;

pub use earth_pressure::ActiveEarthPressure;
pub use pile_resistance::PileResistance;
pub use point_load::PointLoadBending;

use crate::domain::Domain;
use crate::equations::Equation;
use crate::errors::CalcResult;
use crate::profile::Profile;

/// A local intensity function over a one-dimensional domain.
pub trait LoadModel {
    /// Short name for logs and reports
    fn name(&self) -> &'static str;

    /// Intensity at `position` (m from the domain origin)
    fn intensity_at(&self, position: f64) -> f64;

    /// Equations the law evaluates
    fn equations(&self) -> &'static [Equation];

    /// Evaluate the law at every sample of `domain`.
    fn sample(&self, domain: &Domain) -> CalcResult<Profile> {
        let values = domain
            .positions()
            .iter()
            .map(|&x| self.intensity_at(x))
            .collect();
        Profile::from_domain(domain, values)
    }
}
