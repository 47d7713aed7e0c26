use crate::cli::GlobalFlags;
use crate::cli::root_commands::StudentArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `advis notes`. The term comes from `--term`, else the configured term.
pub async fn handle(args: &StudentArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let term_id = ctx.service.settings().term_id;
    let response = ctx.service.notes_context(args.student_id, term_id).await?;
    output(&response, flags.format)
}
