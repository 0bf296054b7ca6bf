//! # Equation Registry
//!
//! Central registry of every formula the engine evaluates. Each equation
//! carries metadata (plain-text formula, code reference, variables) so a
//! capacity can be tagged with the formula that produced it and a result
//! can list the equations it relied on.
//!
//! ## Usage
//!
//! ```rust
//! use dcr_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::NominalMoment, "Stem section");
//!
//! let meta = Equation::NominalMoment.metadata();
//! assert_eq!(meta.formula_plain, "Mn = As*fy*(d - a/2)");
//! assert_eq!(tracker.unique_equations(), vec![Equation::NominalMoment]);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a code, standard or textbook an equation comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// Roark's Formulas for Stress and Strain
    Roarks {
        edition: u8,
        table: &'static str,
        case: &'static str,
    },
    /// ACI 318 - Building Code Requirements for Structural Concrete
    ACI318 {
        year: u16,
        section: &'static str,
    },
    /// Das, Principles of Foundation Engineering
    Das {
        edition: u8,
        chapter: u8,
    },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Roarks { edition, table, case } => {
                format!("Roark's {}ed, {}, Case {}", edition, table, case)
            }
            CodeReference::ACI318 { year, section } => {
                format!("ACI 318-{} Section {}", year % 100, section)
            }
            CodeReference::Das { edition, chapter } => {
                format!("Das {}ed, Ch. {}", edition, chapter)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::Roarks { .. } => "Roark's",
            CodeReference::ACI318 { .. } => "ACI 318",
            CodeReference::Das { .. } => "Das",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Section properties (I, y_max)
    SectionProperties,
    /// Support reactions
    Reactions,
    /// Applied load and resistance intensities
    Loads,
    /// Internal forces and cumulative profiles
    InternalForces,
    /// Stress calculations
    Stresses,
    /// Code-based capacities
    Capacities,
    /// Demand/capacity checks
    DesignChecks,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::SectionProperties => "Section Properties",
            EquationCategory::Reactions => "Reactions",
            EquationCategory::Loads => "Loads and Resistances",
            EquationCategory::InternalForces => "Internal Forces",
            EquationCategory::Stresses => "Stresses",
            EquationCategory::Capacities => "Capacities",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }

    /// Sort order in listings (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::SectionProperties => 1,
            EquationCategory::Reactions => 2,
            EquationCategory::Loads => 3,
            EquationCategory::InternalForces => 4,
            EquationCategory::Stresses => 5,
            EquationCategory::Capacities => 6,
            EquationCategory::DesignChecks => 7,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "M", "Ka", "φ")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "kN·m", "m", "kPa")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Nominal Moment Strength")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Function implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations evaluated by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Simply-Supported Beam: Point Load
    // -------------------------------------------------------------------------
    /// RA = P(L-a)/L, RB = Pa/L
    PointLoadReactions,
    /// V(x) for point load
    PointLoadShear,
    /// M(x) for point load
    PointLoadMoment,

    // -------------------------------------------------------------------------
    // Section and Stress
    // -------------------------------------------------------------------------
    /// I = bh^3/12
    RectangularMomentOfInertia,
    /// σ = M*y_max/I
    BendingStress,
    /// (σ - min)/(max - min)
    StressNormalization,

    // -------------------------------------------------------------------------
    // Earth Pressure
    // -------------------------------------------------------------------------
    /// Ka = tan^2(π/4 - φ/2)
    RankineActiveCoefficient,
    /// p(z) = Ka*γ*z + Ka*q
    ActivePressure,
    /// Pa = ½Ka*γ*H^2 + Ka*q*H
    ActiveThrust,
    /// Running sum of intensity times step
    CumulativeIntegration,

    // -------------------------------------------------------------------------
    // Reinforced Concrete
    // -------------------------------------------------------------------------
    /// a = As*fy/(0.85*f'c*t)
    StressBlockDepth,
    /// Mn = As*fy*(d - a/2)
    NominalMoment,
    /// Vn = 0.17*sqrt(f'c)*t*d
    NominalShear,
    /// φMn, φVn
    DesignStrength,
    /// max(M/φMn, V/φVn)
    DemandCapacityRatio,

    // -------------------------------------------------------------------------
    // Pile
    // -------------------------------------------------------------------------
    /// dQs = ks*z*π*D*dz
    ShaftFriction,
    /// Qb = kb*π*D^2/4
    BaseResistance,
    /// Qu = Qs + Qb
    PileUltimateCapacity,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::PointLoadReactions => EquationMetadata {
                name: "Point Load Reactions",
                description: "Support reactions for a concentrated load at distance a from the left support",
                formula_plain: "RA = P(L-a)/L, RB = Pa/L",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                variables: vec![
                    Variable::new("P", "Point load magnitude", "kN"),
                    Variable::new("a", "Distance from left support to load", "m"),
                    Variable::new("L", "Span length", "m"),
                    Variable::new("RA", "Left reaction", "kN"),
                    Variable::new("RB", "Right reaction", "kN"),
                ],
                category: EquationCategory::Reactions,
                source_function: "equations::beam::point_load_reactions",
            },

            Equation::PointLoadShear => EquationMetadata {
                name: "Point Load Shear",
                description: "Shear force at position x for a concentrated load",
                formula_plain: "V(x) = RA for x < a, V(x) = RA - P for x >= a",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                variables: vec![
                    Variable::new("V", "Shear force", "kN"),
                    Variable::new("x", "Position along beam", "m"),
                ],
                category: EquationCategory::InternalForces,
                source_function: "equations::beam::point_load_shear",
            },

            Equation::PointLoadMoment => EquationMetadata {
                name: "Point Load Moment",
                description: "Bending moment at position x for a concentrated load",
                formula_plain: "M(x) = RA*x for x < a, M(x) = RA*x - P(x-a) for x >= a",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                variables: vec![
                    Variable::new("M", "Bending moment", "kN·m"),
                    Variable::new("x", "Position along beam", "m"),
                ],
                category: EquationCategory::InternalForces,
                source_function: "equations::beam::point_load_moment",
            },

            Equation::RectangularMomentOfInertia => EquationMetadata {
                name: "Rectangular Moment of Inertia",
                description: "Second moment of area of a solid rectangle about its centroidal axis",
                formula_plain: "I = b*h^3/12",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("b", "Section width", "m"),
                    Variable::new("h", "Section height", "m"),
                    Variable::new("I", "Moment of inertia", "m^4"),
                ],
                category: EquationCategory::SectionProperties,
                source_function: "equations::section::rectangular_moment_of_inertia",
            },

            Equation::BendingStress => EquationMetadata {
                name: "Bending Stress",
                description: "Extreme-fiber normal stress from the flexure formula",
                formula_plain: "sigma = M * y_max / I",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("sigma", "Bending stress", "kPa"),
                    Variable::new("y_max", "Neutral axis to extreme fiber, h/2", "m"),
                ],
                category: EquationCategory::Stresses,
                source_function: "equations::section::bending_stress",
            },

            Equation::StressNormalization => EquationMetadata {
                name: "Stress Normalization",
                description: "Rescales a stress profile onto [0, 1] for display",
                formula_plain: "sigma_n = (sigma - min) / (max - min), all zero when max == min",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("sigma_n", "Normalized stress", "-")],
                category: EquationCategory::Stresses,
                source_function: "ratio::normalize",
            },

            Equation::RankineActiveCoefficient => EquationMetadata {
                name: "Rankine Active Coefficient",
                description: "Ratio of lateral to vertical effective stress under active conditions",
                formula_plain: "Ka = tan^2(pi/4 - phi/2)",
                reference: CodeReference::Das { edition: 9, chapter: 13 },
                variables: vec![
                    Variable::new("phi", "Soil friction angle", "rad"),
                    Variable::new("Ka", "Active earth pressure coefficient", "-"),
                ],
                category: EquationCategory::Loads,
                source_function: "equations::earth::rankine_active_coefficient",
            },

            Equation::ActivePressure => EquationMetadata {
                name: "Active Earth Pressure",
                description: "Lateral pressure on the wall at depth z",
                formula_plain: "p(z) = Ka*gamma*z + Ka*q",
                reference: CodeReference::Das { edition: 9, chapter: 13 },
                variables: vec![
                    Variable::new("gamma", "Soil unit weight", "kN/m^3"),
                    Variable::new("q", "Uniform surcharge", "kPa"),
                    Variable::new("z", "Depth below top of wall", "m"),
                ],
                category: EquationCategory::Loads,
                source_function: "equations::earth::active_pressure",
            },

            Equation::ActiveThrust => EquationMetadata {
                name: "Active Thrust",
                description: "Closed-form resultant of the active pressure diagram and its moment about the base",
                formula_plain: "Pa = 0.5*Ka*gamma*H^2 + Ka*q*H, Ma = Ka*gamma*H^3/6 + Ka*q*H^2/2",
                reference: CodeReference::Das { edition: 9, chapter: 13 },
                variables: vec![
                    Variable::new("H", "Retained height", "m"),
                    Variable::new("Pa", "Active thrust per metre of wall", "kN/m"),
                ],
                category: EquationCategory::InternalForces,
                source_function: "equations::earth::active_thrust",
            },

            Equation::CumulativeIntegration => EquationMetadata {
                name: "Cumulative Integration",
                description: "Running sum of sampled intensity times the domain step",
                formula_plain: "F_i = dz * sum(q_j, j <= i)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("q", "Sampled intensity", "varies"),
                    Variable::new("dz", "Domain step", "m"),
                ],
                category: EquationCategory::InternalForces,
                source_function: "integrate::cumulative",
            },

            Equation::StressBlockDepth => EquationMetadata {
                name: "Stress Block Depth",
                description: "Depth of the equivalent rectangular compression block",
                formula_plain: "a = As*fy / (0.85*fc*t)",
                reference: CodeReference::ACI318 { year: 2019, section: "22.2.2" },
                variables: vec![
                    Variable::new("As", "Tension steel area", "m^2"),
                    Variable::new("fy", "Steel yield strength", "MPa"),
                    Variable::new("fc", "Concrete compressive strength", "MPa"),
                    Variable::new("t", "Section width", "m"),
                ],
                category: EquationCategory::Capacities,
                source_function: "equations::concrete::stress_block_depth",
            },

            Equation::NominalMoment => EquationMetadata {
                name: "Nominal Moment Strength",
                description: "Flexural strength of a singly reinforced rectangular section",
                formula_plain: "Mn = As*fy*(d - a/2)",
                reference: CodeReference::ACI318 { year: 2019, section: "22.2" },
                variables: vec![
                    Variable::new("d", "Effective depth", "m"),
                    Variable::new("Mn", "Nominal moment strength", "kN·m"),
                ],
                category: EquationCategory::Capacities,
                source_function: "equations::concrete::nominal_moment",
            },

            Equation::NominalShear => EquationMetadata {
                name: "Nominal Shear Strength",
                description: "One-way concrete shear strength without shear reinforcement",
                formula_plain: "Vn = 0.17*sqrt(fc)*t*d",
                reference: CodeReference::ACI318 { year: 2019, section: "22.5.5.1" },
                variables: vec![Variable::new("Vn", "Nominal shear strength", "kN")],
                category: EquationCategory::Capacities,
                source_function: "equations::concrete::nominal_shear",
            },

            Equation::DesignStrength => EquationMetadata {
                name: "Design Strength",
                description: "Nominal strength reduced by the strength reduction factor",
                formula_plain: "phiMn = phi_flex*Mn, phiVn = phi_shear*Vn",
                reference: CodeReference::ACI318 { year: 2019, section: "21.2" },
                variables: vec![
                    Variable::new("phi_flex", "Flexure reduction factor", "-"),
                    Variable::new("phi_shear", "Shear reduction factor", "-"),
                ],
                category: EquationCategory::Capacities,
                source_function: "capacity::FlexureShearCapacity::evaluate",
            },

            Equation::DemandCapacityRatio => EquationMetadata {
                name: "Demand/Capacity Ratio",
                description: "Governing of flexure and shear utilisation at each depth",
                formula_plain: "ratio(z) = max(M(z)/phiMn, V(z)/phiVn)",
                reference: CodeReference::ACI318 { year: 2019, section: "9.5.1.1" },
                variables: vec![Variable::new("ratio", "Demand/capacity ratio", "-")],
                category: EquationCategory::DesignChecks,
                source_function: "ratio::demand_capacity",
            },

            Equation::ShaftFriction => EquationMetadata {
                name: "Shaft Friction",
                description: "Shaft force mobilised over one depth increment",
                formula_plain: "dQs = ks*z*pi*D*dz",
                reference: CodeReference::Das { edition: 9, chapter: 12 },
                variables: vec![
                    Variable::new("ks", "Shaft friction modulus", "kN/m^3"),
                    Variable::new("D", "Pile diameter", "m"),
                    Variable::new("dz", "Depth increment", "m"),
                ],
                category: EquationCategory::Loads,
                source_function: "equations::pile::shaft_friction_increment",
            },

            Equation::BaseResistance => EquationMetadata {
                name: "Base Resistance",
                description: "End bearing on the pile tip",
                formula_plain: "Qb = kb*pi*D^2/4",
                reference: CodeReference::Das { edition: 9, chapter: 12 },
                variables: vec![Variable::new("kb", "Base resistance", "kPa")],
                category: EquationCategory::Capacities,
                source_function: "equations::pile::base_resistance",
            },

            Equation::PileUltimateCapacity => EquationMetadata {
                name: "Pile Ultimate Capacity",
                description: "Sum of total shaft resistance and base resistance",
                formula_plain: "Qu = Qs + Qb",
                reference: CodeReference::Das { edition: 9, chapter: 12 },
                variables: vec![
                    Variable::new("Qs", "Total shaft resistance", "kN"),
                    Variable::new("Qu", "Ultimate axial capacity", "kN"),
                ],
                category: EquationCategory::Capacities,
                source_function: "capacity::PileAxialCapacity::evaluate",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// All categories, in listing order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![
            SectionProperties,
            Reactions,
            Loads,
            InternalForces,
            Stresses,
            Capacities,
            DesignChecks,
        ];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::PointLoadReactions,
    Equation::PointLoadShear,
    Equation::PointLoadMoment,
    Equation::RectangularMomentOfInertia,
    Equation::BendingStress,
    Equation::StressNormalization,
    Equation::RankineActiveCoefficient,
    Equation::ActivePressure,
    Equation::ActiveThrust,
    Equation::CumulativeIntegration,
    Equation::StressBlockDepth,
    Equation::NominalMoment,
    Equation::NominalShear,
    Equation::DesignStrength,
    Equation::DemandCapacityRatio,
    Equation::ShaftFriction,
    Equation::BaseResistance,
    Equation::PileUltimateCapacity,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Where/why it was used (e.g., "Stem flexure")
    pub context: String,
}

impl EquationUsage {
    /// Create a new equation usage record
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
        }
    }
}

/// Collector for equation usage during an analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Record a set of equations evaluated together, e.g. by one load law
    pub fn record_all(&mut self, equations: &[Equation], context: &str) {
        for eq in equations {
            self.record(*eq, context);
        }
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Get unique equations used, in first-use order
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }
}

// ============================================================================
// Markdown Listing
// ============================================================================

/// Render the whole registry as markdown, grouped by category.
pub fn generate_equations_markdown() -> String {
    let mut output = String::from("# Equations\n");

    for category in Equation::all_categories() {
        let equations = Equation::in_category(category);
        if equations.is_empty() {
            continue;
        }
        output.push_str(&format!("\n## {}\n", category.display_name()));

        for eq in equations {
            let meta = eq.metadata();
            output.push_str(&format!("\n### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("    {}\n\n", meta.formula_plain));
            output.push_str(&format!("*Reference:* {}  \n", meta.reference.citation()));
            output.push_str(&format!("*Source:* `{}`\n", meta.source_function));

            if !meta.variables.is_empty() {
                output.push('\n');
                for var in &meta.variables {
                    output.push_str(&format!("- `{}`: {} ({})\n", var.symbol, var.description, var.units));
                }
            }
        }
    }

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 18);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
        }

        let ka = Equation::RankineActiveCoefficient.metadata();
        assert!(ka.formula_plain.contains("tan^2"));
    }

    #[test]
    fn test_code_reference_citation() {
        let roark = CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" };
        assert_eq!(roark.citation(), "Roark's 8ed, Table 8.1, Case 1a");

        let aci = CodeReference::ACI318 { year: 2019, section: "22.2" };
        assert_eq!(aci.citation(), "ACI 318-19 Section 22.2");
        assert_eq!(aci.short_form(), "ACI 318");
    }

    #[test]
    fn test_equation_tracker() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::ActivePressure, "Stem");
        tracker.record(Equation::CumulativeIntegration, "Shear");
        tracker.record(Equation::CumulativeIntegration, "Moment");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(
            tracker.unique_equations(),
            vec![Equation::ActivePressure, Equation::CumulativeIntegration]
        );
    }

    #[test]
    fn test_record_all_keeps_order() {
        let mut tracker = EquationTracker::new();
        tracker.record_all(&[Equation::ShaftFriction, Equation::BaseResistance], "Pile");
        tracker.record(Equation::BaseResistance, "Base");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(tracker.usages()[0].context, "Pile");
        assert_eq!(
            tracker.unique_equations(),
            vec![Equation::ShaftFriction, Equation::BaseResistance]
        );
    }

    #[test]
    fn test_design_strength_uses_configurable_factors() {
        let formula = Equation::DesignStrength.metadata().formula_plain;
        assert!(formula.contains("phi_flex*Mn"));
        assert!(formula.contains("phi_shear*Vn"));
        assert!(!formula.contains("0.9"));
    }

    #[test]
    fn test_every_category_listed() {
        let listed: usize = Equation::all_categories()
            .into_iter()
            .map(|c| Equation::in_category(c).len())
            .sum();
        assert_eq!(listed, ALL_EQUATIONS.len());
    }

    #[test]
    fn test_generate_equations_markdown() {
        let md = generate_equations_markdown();
        assert!(md.starts_with("# Equations"));
        assert!(md.contains("## Capacities"));
        assert!(md.contains("Mn = As*fy*(d - a/2)"));
        assert!(md.contains("ACI 318-19"));
    }
}
