use crate::cli::GlobalFlags;
use crate::cli::root_commands::StudentArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `advis student`.
pub async fn handle(args: &StudentArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = ctx.service.student_dashboard(args.student_id).await?;
    output(&response, flags.format)
}
