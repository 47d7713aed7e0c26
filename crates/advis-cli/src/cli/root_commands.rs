use clap::{Args, Subcommand};

use crate::cli::subcommands::TablesCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Advisor dashboard: roster summary with risk and major filters.
    Dashboard(DashboardArgs),
    /// Search students by name or major.
    Students(StudentsArgs),
    /// Student dashboard for the configured term.
    Student(StudentArgs),
    /// Advisor-facing student profile.
    Profile(StudentArgs),
    /// A student's advising notes for a term, newest first.
    Notes(StudentArgs),
    /// Score a single GPA / attendance pair.
    Risk(RiskArgs),
    /// Cohort risk and GPA distribution report.
    Report,
    /// Inspect the snapshot tables.
    Tables {
        #[command(subcommand)]
        action: TablesCommands,
    },
    /// Print the JSON Schema of a record or response type.
    Schema(SchemaArgs),
    /// Serve the views as a JSON HTTP API.
    Serve(ServeArgs),
}

/// Arguments for `advis dashboard`.
#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// 1-based page number
    #[arg(long)]
    pub page: Option<u32>,
    /// Rows per page (defaults to `general.page_size`)
    #[arg(long)]
    pub page_size: Option<u32>,
    /// Risk tier filter: high, medium, low, or all
    #[arg(long)]
    pub risk: Option<String>,
    /// Exact major filter, or all
    #[arg(long)]
    pub major: Option<String>,
}

/// Arguments for `advis students`.
#[derive(Clone, Debug, Args)]
pub struct StudentsArgs {
    /// Case-insensitive substring of a name or major
    #[arg(default_value = "")]
    pub query: String,
    #[arg(long)]
    pub page: Option<u32>,
    #[arg(long)]
    pub page_size: Option<u32>,
}

/// Arguments for `advis student`, `advis profile` and `advis notes`.
#[derive(Clone, Debug, Args)]
pub struct StudentArgs {
    pub student_id: u32,
}

/// Arguments for `advis risk`.
#[derive(Clone, Debug, Args)]
pub struct RiskArgs {
    /// Cumulative GPA (0-4; out-of-range values are clamped)
    #[arg(allow_negative_numbers = true)]
    pub gpa: f64,
    /// Attendance percentage (0-100; out-of-range values are clamped)
    #[arg(allow_negative_numbers = true)]
    pub attendance: f64,
}

/// Arguments for `advis schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name; omit to list every name
    pub type_name: Option<String>,
}

/// Arguments for `advis serve`.
#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Address to bind (defaults to `server.bind`)
    #[arg(long)]
    pub bind: Option<String>,
}
