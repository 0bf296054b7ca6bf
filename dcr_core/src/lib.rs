//! # dcr_core - Discretized Structural Demand/Capacity Engine
//!
//! `dcr_core` discretizes a structural member along one axis, evaluates a
//! load or resistance law at every sample, integrates it into internal
//! forces, compares those demands against code-based capacities and hands
//! back profiles a renderer can map onto its own geometry.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **All or nothing**: A failed analysis never returns a partial profile
//!
//! ## Quick Start
//!
//! ```rust
//! use dcr_core::{run, AnalysisRequest, EngineSettings};
//! use dcr_core::calculations::WallInput;
//!
//! let request = AnalysisRequest::Wall(WallInput {
//!     label: "RW-1".to_string(),
//!     height_m: 3.0,
//!     unit_weight_kn_m3: 18.0,
//!     friction_angle_deg: 30.0,
//!     surcharge_kpa: 0.0,
//!     fc_mpa: 25.0,
//!     fy_mpa: 420.0,
//!     thickness_m: 0.3,
//!     effective_depth_m: 0.25,
//!     steel_area_m2: 0.001,
//!     n_samples: None,
//! });
//!
//! let result = run(&request, &EngineSettings::default()).unwrap();
//! println!("Governing ratio {:.3} at z = {:.2} m",
//!     result.summary.governing_value, result.summary.governing_position);
//! ```
//!
//! ## Pipeline
//!
//! [`domain`] → [`loads`] → [`integrate`] → [`capacity`] → [`ratio`] → [`mapper`]
//!
//! ## Modules
//!
//! - [`calculations`] - Bending, wall and pile analyses plus the tagged request
//! - [`domain`] - Sample positions over a member
//! - [`loads`] - Point-load, earth-pressure and shaft-friction laws
//! - [`integrate`] - Running sums turning intensities into forces
//! - [`capacity`] - Concrete flexure/shear and pile axial capacities
//! - [`ratio`] - Bending stress, normalization, demand/capacity ratios
//! - [`mapper`] - Resampling onto renderer positions
//! - [`equations`] - Closed-form formulas and their registry
//! - [`profile`] - Sampled quantities and governing values
//! - [`settings`] - Resistance factors and discretization defaults
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod capacity;
pub mod domain;
pub mod equations;
pub mod errors;
pub mod integrate;
pub mod loads;
pub mod mapper;
pub mod profile;
pub mod ratio;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{run, AnalysisMode, AnalysisRequest, AnalysisResult, Summary};
pub use errors::{CalcError, CalcResult};
pub use mapper::{map_field, map_points, Axis};
pub use profile::{Profile, RatioProfile};
pub use settings::EngineSettings;
