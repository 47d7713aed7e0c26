use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `advis` binary.
#[derive(Debug, Parser)]
#[command(
    name = "advis",
    version,
    about = "Advis - student retention risk dashboards"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the CSV snapshot (defaults to config, then the
    /// embedded sample snapshot)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Term used by per-student views (defaults to `general.term_id`)
    #[arg(short, long, global = true)]
    pub term: Option<u32>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            data_dir: self.data_dir.clone(),
            term: self.term,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::TablesCommands;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "advis",
            "--format",
            "table",
            "--term",
            "2",
            "--verbose",
            "report",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.term, Some(2));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Report));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["advis", "report", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Report));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["advis", "--format", "xml", "report"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn dashboard_accepts_filters_and_paging() {
        let cli = Cli::try_parse_from([
            "advis",
            "dashboard",
            "--page",
            "2",
            "--page-size",
            "5",
            "--risk",
            "high",
            "--major",
            "Computer Science",
        ])
        .expect("cli should parse");

        let Commands::Dashboard(args) = cli.command else {
            panic!("expected dashboard");
        };
        assert_eq!(args.page, Some(2));
        assert_eq!(args.page_size, Some(5));
        assert_eq!(args.risk.as_deref(), Some("high"));
        assert_eq!(args.major.as_deref(), Some("Computer Science"));
    }

    #[test]
    fn risk_accepts_negative_inputs() {
        let cli = Cli::try_parse_from(["advis", "risk", "-1", "105"]).expect("cli should parse");
        let Commands::Risk(args) = cli.command else {
            panic!("expected risk");
        };
        assert!((args.gpa + 1.0).abs() < f64::EPSILON);
        assert!((args.attendance - 105.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tables_show_parses_table_and_limit() {
        let cli = Cli::try_parse_from(["advis", "tables", "show", "lms-events", "--limit", "3"])
            .expect("cli should parse");
        let Commands::Tables { action } = cli.command else {
            panic!("expected tables");
        };
        let TablesCommands::Show { table, limit } = action else {
            panic!("expected show");
        };
        assert_eq!(table, "lms-events");
        assert_eq!(limit, Some(3));
    }

    #[test]
    fn notes_reads_term_from_global_flag() {
        let cli =
            Cli::try_parse_from(["advis", "notes", "7", "--term", "2"]).expect("cli should parse");
        assert_eq!(cli.term, Some(2));
        let Commands::Notes(args) = cli.command else {
            panic!("expected notes");
        };
        assert_eq!(args.student_id, 7);
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["advis", "--data-dir", "/srv/snapshot", "report"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.data_dir.as_deref(), Some(Path::new("/srv/snapshot")));
        assert_eq!(flags.term, None);
    }
}
