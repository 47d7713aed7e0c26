use advis_engine::SearchQuery;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StudentsArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `advis students`.
pub async fn handle(args: &StudentsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = SearchQuery {
        query: args.query.clone(),
        page: args.page,
        page_size: args.page_size,
    };
    let response = ctx.service.search_students(&query).await?;
    output(&response, flags.format)
}
