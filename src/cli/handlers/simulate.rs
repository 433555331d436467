//! Gap analysis and what-if simulation command handlers

use serde::Serialize;
use tracing::info;

use crate::cli::commands::InputArgs;
use crate::cli::handlers::input::load_posts;
use crate::cli::output::{
    print_gap_report, print_json, print_profile, print_simulation, print_warning,
};
use crate::diff::{predicted_shift, simulate, AxisShift, GapReport};
use crate::dimensions::{aggregate, PersonaProfile};
use crate::targets::find_target;
use crate::AppConfig;
use crate::Result;

#[derive(Debug, Serialize)]
pub struct GapOutput {
    pub profile: PersonaProfile,
    pub report: GapReport,
}

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub draft: String,
    pub current: PersonaProfile,
    pub simulated: PersonaProfile,
    pub shift: Vec<AxisShift>,
}

/// Handle gap command
pub fn handle_gap(
    config: &AppConfig,
    input: &InputArgs,
    target_id: Option<&str>,
    json: bool,
) -> Result<()> {
    let target = find_target(target_id.unwrap_or_else(|| config.default_target()))?;
    let posts = load_posts(config, input)?;
    let profile = aggregate(&posts);
    let report = GapReport::new(&profile, &target);

    info!(
        target_id = %target.id,
        misaligned = report.misaligned().count(),
        "Computed gap report"
    );

    if json {
        return print_json(&GapOutput { profile, report });
    }

    print_profile(&profile);
    println!();
    print_gap_report(&report);

    Ok(())
}

/// Handle simulate command
pub fn handle_simulate(
    config: &AppConfig,
    input: &InputArgs,
    draft: &str,
    json: bool,
) -> Result<()> {
    let posts = load_posts(config, input)?;
    let current = aggregate(&posts);

    if draft.trim().is_empty() && !json {
        print_warning("Draft is empty; nothing to simulate.");
        return Ok(());
    }

    let simulated = simulate(&posts, draft, &current);
    let report = SimulationReport {
        draft: draft.trim().to_string(),
        current,
        shift: predicted_shift(&current, &simulated),
        simulated,
    };

    if json {
        return print_json(&report);
    }

    print_profile(&report.current);
    println!();
    print_simulation(&report.draft, &report.simulated, &report.shift);

    Ok(())
}
