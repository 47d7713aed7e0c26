use advis_engine::calculate_risk;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RiskArgs;
use crate::output::output;

/// Handle `advis risk`. Needs no snapshot.
pub fn handle(args: &RiskArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&calculate_risk(args.gpa, args.attendance), flags.format)
}
