use advis_engine::RosterQuery;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `advis dashboard`.
pub async fn handle(args: &DashboardArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = RosterQuery {
        page: args.page,
        page_size: args.page_size,
        risk: args.risk.clone(),
        major: args.major.clone(),
    };
    let response = ctx.service.advisor_dashboard(&query).await?;
    output(&response, flags.format)
}
