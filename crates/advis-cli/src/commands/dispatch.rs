use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Dashboard(args) => commands::dashboard::handle(&args, ctx, flags).await,
        Commands::Students(args) => commands::students::handle(&args, ctx, flags).await,
        Commands::Student(args) => commands::student::handle(&args, ctx, flags).await,
        Commands::Profile(args) => commands::profile::handle(&args, ctx, flags).await,
        Commands::Notes(args) => commands::notes::handle(&args, ctx, flags).await,
        Commands::Report => commands::report::handle(ctx, flags).await,
        Commands::Tables { action } => commands::tables::handle(&action, ctx, flags).await,
        Commands::Serve(args) => commands::serve::handle(&args, ctx).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
        Commands::Risk(args) => commands::risk::handle(&args, flags),
    }
}
