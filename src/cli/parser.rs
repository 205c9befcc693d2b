use crate::export::ExportFormat;
use crate::models::report_kind::ReportKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ojtlog
/// CLI application to keep OJT weekly reports with SQLite
#[derive(Parser)]
#[command(
    name = "ojtlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "OJT weekly attendance / activity reports: daily entries, hours, confirmation and submission",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create, list and show reports
    Report {
        #[command(subcommand)]
        action: ReportAction,
    },

    /// Edit one day of a report, then confirm it or keep it as a draft
    Entry {
        /// Report id
        report_id: i64,

        /// Day to edit (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", help = "Time in (HH:MM)")]
        time_in: Option<String>,

        #[arg(long = "out", help = "Time out (HH:MM)")]
        time_out: Option<String>,

        #[arg(long = "text", help = "Daily accomplishments")]
        accomplishments: Option<String>,

        #[arg(long = "notes", help = "Additional notes")]
        notes: Option<String>,

        #[arg(long = "status", help = "Day status: present or late")]
        status: Option<String>,

        #[arg(long = "absent", help = "Toggle the absent flag")]
        absent: bool,

        #[arg(long = "holiday", help = "Toggle the holiday flag")]
        holiday: bool,

        #[arg(long = "confirm", help = "Confirm (lock) the day after editing")]
        confirm: bool,
    },

    /// Submit a fully confirmed report for review
    Submit {
        report_id: i64,

        #[arg(long = "sign", help = "Acknowledge and sign the report")]
        sign: bool,
    },

    /// Approve or reject a pending report (supervisor)
    Review {
        report_id: i64,

        #[arg(long = "approve", conflicts_with = "reject", required_unless_present = "reject")]
        approve: bool,

        #[arg(long = "reject")]
        reject: bool,

        #[arg(long = "remarks", help = "Reviewer remarks")]
        remarks: Option<String>,
    },

    /// Export every day of a report
    Export {
        report_id: i64,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Bulk import trainees from a CSV sheet
    Import {
        /// CSV file with header student_id,first_name,last_name,email,section
        file: String,

        #[arg(long = "dry-run", help = "Validate only, insert nothing")]
        dry_run: bool,
    },
}

#[derive(Subcommand)]
pub enum ReportAction {
    /// Create a report covering [start, end]
    New {
        #[arg(long, help = "Trainee student number")]
        trainee: String,

        #[arg(long, value_enum, default_value = "attendance")]
        kind: ReportKind,

        #[arg(long, help = "First day (YYYY-MM-DD)")]
        start: String,

        #[arg(long, help = "Last day, inclusive (YYYY-MM-DD)")]
        end: String,

        #[arg(long)]
        title: Option<String>,
    },

    /// List reports
    List {
        #[arg(long)]
        trainee: Option<String>,

        #[arg(long, help = "not_submitted, pending, approved or rejected")]
        status: Option<String>,
    },

    /// Show every day of a report
    Show { report_id: i64 },
}
