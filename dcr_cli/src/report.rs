//! Plain-text reports for terminal output.

use dcr_core::calculations::{AnalysisDetail, AnalysisResult, BendingResult, PileResult, WallResult};
use dcr_core::equations::Equation;

const RULE: &str = "═══════════════════════════════════════";

fn banner(title: &str) {
    println!("{}", RULE);
    println!("  {}", title);
    println!("{}", RULE);
    println!();
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}

pub fn print_result(result: &AnalysisResult) {
    let title = if result.label.is_empty() {
        result.mode.display_name().to_uppercase()
    } else {
        format!("{} - {}", result.mode.display_name().to_uppercase(), result.label)
    };
    banner(&title);

    match &result.detail {
        AnalysisDetail::Bending(b) => print_bending(b),
        AnalysisDetail::Wall(w) => print_wall(w),
        AnalysisDetail::Pile(p) => print_pile(p),
    }

    println!();
    println!("Governing {}:", result.mode.profile_quantity());
    println!(
        "  {:.4} at {:.3} m ({} samples)",
        result.summary.governing_value,
        result.summary.governing_position,
        result.profile.len()
    );
    println!();
    print_equations(&result.equations);
    println!();

    match result.summary.passes {
        Some(passes) => {
            println!("{}", RULE);
            println!(
                "  RESULT: {} (governs: {})",
                if passes { "PASS" } else { "FAIL" },
                result.summary.governing_action.as_deref().unwrap_or("-")
            );
            println!("{}", RULE);
        }
        None => println!("{}", RULE),
    }
}

fn print_bending(r: &BendingResult) {
    println!("Reactions:");
    println!("  RA = {:.3} kN", r.reaction_left_kn);
    println!("  RB = {:.3} kN", r.reaction_right_kn);
    println!();
    println!("Demand:");
    println!("  M under load = {:.3} kN·m", r.moment_under_load_knm);
    println!("  M_max        = {:.3} kN·m at x = {:.3} m", r.max_moment_knm, r.max_moment_position_m);
    println!();
    println!("Section:");
    println!("  I     = {:.4e} m⁴", r.moment_of_inertia_m4);
    println!("  y_max = {:.3} m", r.y_max_m);
    println!("  S     = {:.4e} m³", r.section_modulus_m3);
    println!();
    println!("Stress:");
    println!(
        "  σ_max = {:.1} kPa at x = {:.3} m (no allowable check)",
        r.max_stress_kpa(),
        r.stress.governing_position
    );
}

fn print_wall(r: &WallResult) {
    println!("Soil:");
    println!("  Ka = {:.4}", r.ka);
    println!();
    println!("Demand at base:");
    println!("  V = {:.3} kN     (closed form Pa = {:.3} kN)", r.base_shear_kn, r.closed_form_thrust_kn);
    println!("  M = {:.3} kN·m   (closed form Ma = {:.3} kN·m)", r.base_moment_knm, r.closed_form_moment_knm);
    println!();
    println!("Capacity:");
    println!("  a   = {:.4} m", r.stress_block_depth_m);
    for c in &r.capacities.capacities {
        println!("  {:<6} = {:.3}", c.name, c.value);
    }
    println!();
    println!("Capacity Checks:");
    println!(
        "  D/C:  {:.3} at z = {:.3} m ({}) {}",
        r.governing_ratio(),
        r.governing_depth_m(),
        r.governing_action().as_str(),
        status_icon(r.passes())
    );
}

fn print_pile(r: &PileResult) {
    println!("Capacity:");
    println!("  Qs = {:.2} kN (shaft)", r.shaft_kn);
    println!("  Qb = {:.2} kN (base)", r.base_kn);
    println!("  Qu = {:.2} kN", r.ultimate_kn);
    println!();
    println!("  Shaft carries {:.1}% of Qu", 100.0 * r.shaft_fraction());
}

fn print_equations(equations: &[Equation]) {
    println!("Equations:");
    for eq in equations {
        let meta = eq.metadata();
        println!("  {:<34} {}", meta.name, meta.reference.short_form());
    }
}

pub fn print_mapped_field(positions: &[f64], values: &[f64]) {
    println!();
    println!("Mapped display field:");
    println!("  {:>10}  {:>8}", "position", "value");
    for (x, v) in positions.iter().zip(values) {
        println!("  {:>10.4}  {:>8.4}", x, v);
    }
}
