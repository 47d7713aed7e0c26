use clap::Subcommand;

/// Snapshot table commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TablesCommands {
    /// Load every table and list row counts.
    List,
    /// Print the header and first rows of one table.
    Show {
        /// Table name (`students`, `lms_events`, `lms-events`, ...)
        table: String,
        #[arg(long)]
        limit: Option<u32>,
    },
}
