use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use dcr_core::calculations::{AnalysisRequest, BendingInput, PileInput, WallInput};

#[derive(Parser)]
#[command(name = "dcr")]
#[command(about = "Discretized structural demand/capacity engine.", version)]
pub struct CommandLine {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG is used otherwise
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Engine settings JSON file (resistance factors, default sampling)
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Print the result as JSON instead of a report
    #[arg(long, global = true)]
    pub json: bool,

    /// Resample the normalized field onto N cell centres over the extent
    #[arg(long, global = true, value_name = "N")]
    pub targets: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simply-supported beam under a point load
    #[command(alias = "b")]
    Bending {
        /// Span L (m)
        #[arg(long)]
        length: f64,
        /// Point load P (kN)
        #[arg(long)]
        load: f64,
        /// Load offset a from the left support (m)
        #[arg(long)]
        offset: f64,
        /// Section width b (m)
        #[arg(long)]
        width: f64,
        /// Section height h (m)
        #[arg(long)]
        height: f64,
        /// Samples along the span
        #[arg(long)]
        samples: Option<usize>,
        #[arg(long, default_value = "")]
        label: String,
    },
    /// Retaining wall stem under active earth pressure
    #[command(alias = "w")]
    Wall {
        /// Retained height H (m)
        #[arg(long)]
        height: f64,
        /// Backfill unit weight γ (kN/m³)
        #[arg(long)]
        unit_weight: f64,
        /// Backfill friction angle φ (degrees)
        #[arg(long)]
        friction_angle: f64,
        /// Uniform surcharge q (kPa)
        #[arg(long)]
        surcharge: f64,
        /// Concrete strength f'c (MPa)
        #[arg(long)]
        fc: f64,
        /// Steel yield strength fy (MPa)
        #[arg(long)]
        fy: f64,
        /// Stem thickness t (m)
        #[arg(long)]
        thickness: f64,
        /// Effective depth d (m)
        #[arg(long)]
        depth: f64,
        /// Tension steel area As (m²)
        #[arg(long)]
        steel_area: f64,
        /// Samples over the height
        #[arg(long)]
        samples: Option<usize>,
        #[arg(long, default_value = "")]
        label: String,
    },
    /// Axial pile capacity from shaft friction and end bearing
    #[command(alias = "p")]
    Pile {
        /// Embedded length L (m)
        #[arg(long)]
        length: f64,
        /// Shaft diameter D (m)
        #[arg(long)]
        diameter: f64,
        /// Shaft friction modulus ks (kN/m³)
        #[arg(long)]
        ks: f64,
        /// Base resistance modulus kb (kPa)
        #[arg(long)]
        kb: f64,
        /// Depth increment dz (m)
        #[arg(long)]
        step: Option<f64>,
        #[arg(long, default_value = "")]
        label: String,
    },
    /// Run a JSON analysis request
    #[command(alias = "r")]
    Run { file: PathBuf },
    /// List every equation the engine evaluates
    #[command(alias = "e")]
    Equations,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Commands {
    /// Build the analysis request for the inline analysis commands.
    pub fn to_request(&self) -> Option<AnalysisRequest> {
        match self {
            Commands::Bending {
                length,
                load,
                offset,
                width,
                height,
                samples,
                label,
            } => Some(AnalysisRequest::Bending(BendingInput {
                label: label.clone(),
                length_m: *length,
                load_kn: *load,
                offset_m: *offset,
                width_m: *width,
                height_m: *height,
                n_samples: *samples,
            })),
            Commands::Wall {
                height,
                unit_weight,
                friction_angle,
                surcharge,
                fc,
                fy,
                thickness,
                depth,
                steel_area,
                samples,
                label,
            } => Some(AnalysisRequest::Wall(WallInput {
                label: label.clone(),
                height_m: *height,
                unit_weight_kn_m3: *unit_weight,
                friction_angle_deg: *friction_angle,
                surcharge_kpa: *surcharge,
                fc_mpa: *fc,
                fy_mpa: *fy,
                thickness_m: *thickness,
                effective_depth_m: *depth,
                steel_area_m2: *steel_area,
                n_samples: *samples,
            })),
            Commands::Pile {
                length,
                diameter,
                ks,
                kb,
                step,
                label,
            } => Some(AnalysisRequest::Pile(PileInput {
                label: label.clone(),
                length_m: *length,
                diameter_m: *diameter,
                ks_kn_m3: *ks,
                kb_kpa: *kb,
                dz_m: *step,
            })),
            Commands::Run { .. } | Commands::Equations => None,
        }
    }
}
