//! # Engineering Equations
//!
//! Every closed-form formula the engine evaluates, kept in one place so each
//! can be checked against its reference.
//!
//! ## Modules
//!
//! - [`beam`] - Simply-supported point-load formulas (reactions, shear, moment)
//! - [`section`] - Rectangular section properties and the flexure formula
//! - [`earth`] - Rankine active earth pressure
//! - [`concrete`] - ACI stress block, nominal moment and shear strength
//! - [`pile`] - Shaft friction and base resistance
//! - [`registry`] - Equation metadata and usage tracking
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (beam) or toward the wall/pile (soil)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Shear**: Positive when left side moves up relative to right
//! - **Reactions**: Positive upward
//! - **Depth**: Positive downward from the top of wall / pile head

pub mod beam;
pub mod concrete;
pub mod earth;
pub mod pile;
pub mod registry;
pub mod section;

pub use beam::{point_load_moment, point_load_reactions, point_load_shear};
pub use concrete::{nominal_moment, nominal_shear, stress_block_depth};
pub use earth::{active_pressure, active_thrust, active_thrust_moment, rankine_active_coefficient};
pub use pile::{base_area, base_resistance, shaft_friction_increment, shaft_perimeter};
pub use registry::{Equation, EquationCategory, EquationTracker};
pub use section::{bending_stress, rectangular_extreme_fiber, rectangular_moment_of_inertia, section_modulus};
