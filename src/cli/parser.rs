use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for runlog
/// CLI application to log runs and analyse them with SQLite
#[derive(Parser)]
#[command(
    name = "runlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple running log CLI: record runs, track progress and predict race times using SQLite",
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

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log a new run
    Log {
        /// Date of the run (DD-MM-YYYY or YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Distance in kilometers
        #[arg(long)]
        distance: f64,

        /// Duration (HH:MM:SS or MM:SS)
        #[arg(long)]
        time: String,

        /// Pace in minutes per km (derived when omitted)
        #[arg(long)]
        pace: Option<f64>,

        /// Optional notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// List all logged runs
    List,

    /// List runs within a date range (bounds inclusive)
    Filter {
        #[arg(long = "start", help = "Start date (DD-MM-YYYY or YYYY-MM-DD)")]
        start: String,

        #[arg(long = "end", help = "End date, defaults to the start date")]
        end: Option<String>,
    },

    /// Show a single run
    Show { id: i64 },

    /// Edit an existing run; omitted fields keep their value
    Edit {
        id: i64,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        distance: Option<f64>,

        #[arg(long)]
        time: Option<String>,

        #[arg(long, conflicts_with = "recalc_pace")]
        pace: Option<f64>,

        #[arg(
            long = "recalc-pace",
            help = "Recalculate pace from distance and time"
        )]
        recalc_pace: bool,

        #[arg(long, help = "New notes (an empty string clears them)")]
        notes: Option<String>,
    },

    /// Delete a run by ID
    Delete {
        id: i64,

        #[arg(long, help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Overall statistics, monthly summary and best efforts
    Stats {
        #[arg(long = "progress", help = "Also show cumulative progress")]
        progress: bool,
    },

    /// Predict the time for a target distance from your average pace
    Predict {
        /// Target distance in kilometers
        distance: f64,

        #[arg(
            long = "recent",
            help = "Number of most recent runs to consider (default: all)"
        )]
        recent: Option<usize>,
    },

    /// Compare the pace of the last two runs
    Compare,

    /// Export runs (csv/json) or the full report (pdf)
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter runs by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Print the internal audit log
    Audit {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
