//! # Field Mapper
//!
//! Resamples a profile computed on the analysis domain onto target positions
//! supplied by a renderer (mesh cell centres, vertices, probe points). Values
//! are piecewise-linear between analysis samples and clamped to the nearest
//! endpoint value outside the analysis range. No physics happens here.
//!
//! ```text
//!   value
//!     │          ●───────●
//!     │        ╱           ╲
//!     │ ●────●               ●───────── clamped
//!     └──┬───┬───┬───────┬───┬──────► position
//!        x0  x1  x2      x3  x4
//! ```
//!
//! ## Example
//!
//! ```rust
//! use dcr_core::mapper::map_field;
//! use dcr_core::profile::Profile;
//!
//! let profile = Profile::new(vec![0.0, 1.0, 2.0], vec![0.0, 10.0, 20.0]).unwrap();
//! let mapped = map_field(&profile, &[-1.0, 0.5, 1.25, 3.0]).unwrap();
//! assert_eq!(mapped, vec![0.0, 5.0, 12.5, 20.0]);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::profile::Profile;

/// Coordinate axis the analysis runs along in renderer space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    #[default]
    Z,
}

impl Axis {
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Linear interpolation of `profile` at `t`, clamped at both ends.
pub fn value_at(profile: &Profile, t: f64) -> f64 {
    let xs = profile.positions();
    let vs = profile.values();
    let n = xs.len();

    if t <= xs[0] {
        return vs[0];
    }
    if t >= xs[n - 1] {
        return vs[n - 1];
    }

    // First sample strictly past t; xs[idx - 1] <= t < xs[idx]
    let idx = xs.partition_point(|&x| x <= t);
    let (x0, x1) = (xs[idx - 1], xs[idx]);
    let (v0, v1) = (vs[idx - 1], vs[idx]);
    if t == x0 {
        return v0;
    }
    v0 + (t - x0) / (x1 - x0) * (v1 - v0)
}

/// Resample `profile` at every target position.
pub fn map_field(profile: &Profile, targets: &[f64]) -> CalcResult<Vec<f64>> {
    targets
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            if !t.is_finite() {
                return Err(CalcError::invalid_parameter(
                    "targets",
                    t.to_string(),
                    format!("Target position {} is not finite", i),
                ));
            }
            Ok(value_at(profile, t))
        })
        .collect()
}

/// Resample `profile` at 3-D points, reading each point's coordinate on `axis`.
pub fn map_points(profile: &Profile, points: &[[f64; 3]], axis: Axis) -> CalcResult<Vec<f64>> {
    let coords: Vec<f64> = points.iter().map(|p| p[axis.index()]).collect();
    map_field(profile, &coords)
}

/// Centres of `cells` equal cells spanning `[0, extent]`.
pub fn uniform_cell_centres(extent: f64, cells: usize) -> CalcResult<Vec<f64>> {
    if !extent.is_finite() || extent <= 0.0 {
        return Err(CalcError::invalid_domain("extent", extent.to_string(), "Extent must be positive and finite"));
    }
    if cells == 0 {
        return Err(CalcError::invalid_domain("targets", "0", "At least one target cell is required"));
    }
    let width = extent / cells as f64;
    Ok((0..cells).map(|i| (i as f64 + 0.5) * width).collect())
}
