//! # Unit Types
//!
//! Type-safe wrappers for the SI units the engine converts between. These
//! are plain f64 newtypes that serialize as bare numbers.
//!
//! ## SI Units
//!
//! - Length: metres (m)
//! - Force: kilonewtons (kN), meganewtons (MN)
//! - Moment: kN·m, MN·m
//! - Pressure: kPa (soil), MPa (concrete and steel strengths)
//! - Angle: degrees at the input boundary, radians internally
//!
//! Concrete capacities come out of the ACI formulas in MN and MN·m when
//! strengths are in MPa and dimensions in metres; they are converted to kN
//! and kN·m to sit on the same scale as the soil demand.
//!
//! ## Example
//!
//! ```rust
//! use dcr_core::units::{Degrees, Radians, Meganewtons, Kilonewtons};
//!
//! let phi: Radians = Degrees(30.0).into();
//! assert!((phi.0 - std::f64::consts::FRAC_PI_6).abs() < 1e-12);
//!
//! let v: Kilonewtons = Meganewtons(0.25).into();
//! assert_eq!(v.0, 250.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

/// Force in meganewtons (1 MN = 1000 kN)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meganewtons(pub f64);

impl From<Meganewtons> for Kilonewtons {
    fn from(mn: Meganewtons) -> Self {
        Kilonewtons(mn.0 * 1000.0)
    }
}

impl From<Kilonewtons> for Meganewtons {
    fn from(kn: Kilonewtons) -> Self {
        Meganewtons(kn.0 / 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonMeters(pub f64);

/// Moment in meganewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeganewtonMeters(pub f64);

impl From<MeganewtonMeters> for KilonewtonMeters {
    fn from(mnm: MeganewtonMeters) -> Self {
        KilonewtonMeters(mnm.0 * 1000.0)
    }
}

impl From<KilonewtonMeters> for MeganewtonMeters {
    fn from(knm: KilonewtonMeters) -> Self {
        MeganewtonMeters(knm.0 / 1000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Degrees);
impl_arithmetic!(Radians);
impl_arithmetic!(Kilonewtons);
impl_arithmetic!(Meganewtons);
impl_arithmetic!(KilonewtonMeters);
impl_arithmetic!(MeganewtonMeters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_to_radians() {
        let rad: Radians = Degrees(90.0).into();
        assert!((rad.0 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);

        let back: Degrees = rad.into();
        assert!((back.0 - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_meganewton_moments() {
        let m: KilonewtonMeters = MeganewtonMeters(0.125).into();
        assert_eq!(m.0, 125.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Kilonewtons(10.0);
        let b = Kilonewtons(4.0);
        assert_eq!((a + b).value(), 14.0);
        assert_eq!((a - b).value(), 6.0);
        assert_eq!((a * 0.75).value(), 7.5);
        assert_eq!((a / 2.0).value(), 5.0);
    }

    #[test]
    fn test_serialization() {
        let phi = Degrees(30.0);
        let json = serde_json::to_string(&phi).unwrap();
        assert_eq!(json, "30.0");

        let roundtrip: Degrees = serde_json::from_str(&json).unwrap();
        assert_eq!(phi, roundtrip);
    }
}
