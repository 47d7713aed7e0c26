use std::sync::Arc;

use tokio::runtime::Handle;

use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;
use crate::server::ApiServer;

/// Handle `advis serve`. Preloads every table so a broken snapshot fails
/// before the listener opens.
pub async fn handle(args: &ServeArgs, ctx: &AppContext) -> anyhow::Result<()> {
    ctx.service.tables().preload().await?;

    let bind = args.bind.as_deref().unwrap_or(&ctx.config.server.bind);
    let server = ApiServer::bind(bind, Arc::clone(&ctx.service))?;
    if let Some(addr) = server.local_addr() {
        eprintln!("Serving the Advis API on http://{addr}");
    }

    let handle = Handle::current();
    tokio::task::spawn_blocking(move || server.run(&handle)).await?;
    Ok(())
}
