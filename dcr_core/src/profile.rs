//! # Profiles
//!
//! A [`Profile`] is a quantity (pressure, shear, moment, stress, cumulative
//! load) sampled over a domain: equal-length position and value sequences.
//! A [`RatioProfile`] adds the governing (maximum) value and where it occurs.
//!
//! Construction checks the invariants once so downstream steps can rely on
//! them: equal lengths, at least one sample, strictly increasing positions
//! and finite values. Deserialization goes through the same checks.
//!
//! ## Example
//!
//! ```rust
//! use dcr_core::profile::{Profile, RatioProfile};
//!
//! let profile = Profile::new(vec![0.0, 1.0, 2.0], vec![0.2, 0.9, 0.4]).unwrap();
//! let ratio = RatioProfile::new(profile);
//! assert_eq!(ratio.governing_value, 0.9);
//! assert_eq!(ratio.governing_position, 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::Domain;
use crate::errors::{CalcError, CalcResult};

/// Values sampled over ordered positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProfile")]
pub struct Profile {
    positions: Vec<f64>,
    values: Vec<f64>,
}

/// Unchecked wire form of a [`Profile`]
#[derive(Deserialize)]
struct RawProfile {
    positions: Vec<f64>,
    values: Vec<f64>,
}

impl TryFrom<RawProfile> for Profile {
    type Error = CalcError;

    fn try_from(raw: RawProfile) -> CalcResult<Self> {
        Profile::new(raw.positions, raw.values)
    }
}

impl Profile {
    /// Build a profile, checking lengths, ordering and finiteness.
    pub fn new(positions: Vec<f64>, values: Vec<f64>) -> CalcResult<Self> {
        if positions.len() != values.len() {
            return Err(CalcError::invalid_domain(
                "values",
                values.len().to_string(),
                format!("Expected {} values to match the positions", positions.len()),
            ));
        }
        if positions.is_empty() {
            return Err(CalcError::invalid_domain("positions", "0", "Profile needs at least one sample"));
        }
        if let Some(x) = positions.iter().find(|x| !x.is_finite()) {
            return Err(CalcError::invalid_domain("positions", x.to_string(), "Positions must be finite"));
        }
        if let Some(w) = positions.windows(2).find(|w| w[1] <= w[0]) {
            return Err(CalcError::invalid_domain(
                "positions",
                format!("{} then {}", w[0], w[1]),
                "Positions must be strictly increasing",
            ));
        }
        if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(CalcError::invalid_parameter(
                "values",
                v.to_string(),
                format!("Non-finite value at sample {} (x = {})", i, positions[i]),
            ));
        }
        Ok(Profile { positions, values })
    }

    /// Pair a value sequence with a domain's positions.
    pub fn from_domain(domain: &Domain, values: Vec<f64>) -> CalcResult<Self> {
        Self::new(domain.positions().to_vec(), values)
    }

    /// Sample positions
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Sampled values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a successfully built profile
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate (position, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.positions.iter().copied().zip(self.values.iter().copied())
    }

    /// Index of the first sample that beats every other under `better`
    fn extreme_index(&self, better: impl Fn(f64, f64) -> bool) -> usize {
        let mut best = 0;
        for (i, v) in self.values.iter().enumerate() {
            if better(*v, self.values[best]) {
                best = i;
            }
        }
        best
    }

    /// Index of the largest sample (first one on ties)
    pub fn max_index(&self) -> usize {
        self.extreme_index(|a, b| a > b)
    }

    /// Position and value of the largest sample (first one on ties)
    pub fn max(&self) -> (f64, f64) {
        let i = self.max_index();
        (self.positions[i], self.values[i])
    }

    /// Position and value of the smallest sample (first one on ties)
    pub fn min(&self) -> (f64, f64) {
        let i = self.extreme_index(|a, b| a < b);
        (self.positions[i], self.values[i])
    }

    /// Value at the last sample
    pub fn last_value(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Apply `f` to every value, keeping positions. Fails if `f` produces
    /// a non-finite value.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> CalcResult<Profile> {
        Profile::new(self.positions.clone(), self.values.iter().map(|v| f(*v)).collect())
    }
}

/// A profile of ratios or normalized stresses plus its governing sample.
///
/// Only the profile is read back when deserializing; the governing sample
/// is located again from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRatioProfile")]
pub struct RatioProfile {
    /// The sampled ratios
    pub profile: Profile,

    /// Maximum value over the profile
    pub governing_value: f64,

    /// Position of the maximum
    pub governing_position: f64,

    /// Sample index of the maximum
    pub governing_index: usize,
}

impl RatioProfile {
    /// Wrap a profile and locate its governing (maximum) sample.
    pub fn new(profile: Profile) -> Self {
        let (governing_position, governing_value) = profile.max();
        RatioProfile {
            governing_value,
            governing_position,
            governing_index: profile.max_index(),
            profile,
        }
    }

    /// True when no sample exceeds 1.0
    pub fn passes(&self) -> bool {
        self.governing_value <= 1.0
    }
}

#[derive(Deserialize)]
struct RawRatioProfile {
    profile: Profile,
}

impl From<RawRatioProfile> for RatioProfile {
    fn from(raw: RawRatioProfile) -> Self {
        RatioProfile::new(raw.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch() {
        let err = Profile::new(vec![0.0, 1.0], vec![1.0]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DOMAIN");
    }

    #[test]
    fn test_empty_rejected() {
        assert!(Profile::new(vec![], vec![]).is_err());
    }

    #[test]
    fn test_unordered_positions_rejected() {
        assert!(Profile::new(vec![0.0, 2.0, 1.0], vec![1.0, 2.0, 3.0]).is_err());
        assert!(Profile::new(vec![0.0, 1.0, 1.0], vec![1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = Profile::new(vec![0.0, 1.0], vec![1.0, f64::NAN]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
        assert!(Profile::new(vec![0.0, 1.0], vec![f64::INFINITY, 0.0]).is_err());
    }

    #[test]
    fn test_from_domain() {
        let domain = Domain::with_count(2.0, 3).unwrap();
        let profile = Profile::from_domain(&domain, vec![5.0, 6.0, 7.0]).unwrap();
        assert_eq!(profile.positions(), &[0.0, 1.0, 2.0]);
        assert_eq!(profile.last_value(), 7.0);
        assert_eq!(profile.iter().collect::<Vec<_>>(), vec![(0.0, 5.0), (1.0, 6.0), (2.0, 7.0)]);
    }

    #[test]
    fn test_min_max() {
        let profile = Profile::new(vec![0.0, 1.0, 2.0, 3.0], vec![-1.0, 4.0, 4.0, -2.0]).unwrap();
        assert_eq!(profile.max(), (1.0, 4.0));
        assert_eq!(profile.min(), (3.0, -2.0));
    }

    #[test]
    fn test_map_rejects_non_finite() {
        let profile = Profile::new(vec![0.0, 1.0], vec![0.0, 1.0]).unwrap();
        assert!(profile.map(|v| v * 2.0).is_ok());
        assert!(profile.map(|v| 1.0 / v).is_err());
    }

    #[test]
    fn test_ratio_profile_governing() {
        let profile = Profile::new(vec![0.0, 0.5, 1.0], vec![0.3, 1.2, 0.8]).unwrap();
        let ratio = RatioProfile::new(profile);
        assert_eq!(ratio.governing_value, 1.2);
        assert_eq!(ratio.governing_position, 0.5);
        assert_eq!(ratio.governing_index, 1);
        assert!(!ratio.passes());
    }

    #[test]
    fn test_max_index_first_on_ties() {
        let profile = Profile::new(vec![0.0, 1.0, 2.0], vec![2.0, 7.0, 7.0]).unwrap();
        assert_eq!(profile.max_index(), 1);
        assert_eq!(RatioProfile::new(profile).governing_position, 1.0);
    }

    #[test]
    fn test_deserialize_checks_lengths() {
        let err = serde_json::from_str::<Profile>(r#"{"positions":[0.0,1.0,2.0],"values":[5.0]}"#).unwrap_err();
        assert!(err.to_string().contains("Expected 3 values"));
    }

    #[test]
    fn test_deserialize_rejects_empty_and_unordered() {
        assert!(serde_json::from_str::<Profile>(r#"{"positions":[],"values":[]}"#).is_err());
        assert!(serde_json::from_str::<Profile>(r#"{"positions":[1.0,0.0],"values":[1.0,2.0]}"#).is_err());
    }

    #[test]
    fn test_deserialize_valid_profile() {
        let profile: Profile = serde_json::from_str(r#"{"positions":[0.0,0.5],"values":[1.0,3.0]}"#).unwrap();
        assert_eq!(profile.max(), (0.5, 3.0));
    }

    #[test]
    fn test_ratio_profile_deserialize_relocates_governing() {
        let json = r#"{
            "profile": {"positions":[0.0,1.0,2.0],"values":[0.2,0.4,0.9]},
            "governing_value": 0.1, "governing_position": 0.0, "governing_index": 0
        }"#;
        let ratio: RatioProfile = serde_json::from_str(json).unwrap();
        assert_eq!(ratio.governing_value, 0.9);
        assert_eq!(ratio.governing_index, 2);

        let bad = r#"{"profile": {"positions":[0.0,1.0],"values":[0.2]}}"#;
        assert!(serde_json::from_str::<RatioProfile>(bad).is_err());
    }
}
