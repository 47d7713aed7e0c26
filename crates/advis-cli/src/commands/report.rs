use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `advis report`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = ctx.service.risk_report().await?;
    output(&response, flags.format)
}
