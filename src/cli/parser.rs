use crate::export::{ExportFormat, TableKind};
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for babystats
/// CLI application to summarize Baby Tracker exports
#[derive(Parser)]
#[command(
    name = "babystats",
    version = env!("CARGO_PKG_VERSION"),
    about = "Summarize Baby Tracker CSV exports: gaps between daytime naps, feeding tables",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Enable debug logging on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output of the `analyze` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AnalyzeFormat {
    Text,
    Csv,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize the hours between daytime naps of the last N weeks
    Analyze {
        /// Exported zip archive
        archive: String,

        #[arg(
            long,
            short = 'w',
            help = "Analyze the last N weeks (default from the configuration file)"
        )]
        weeks: Option<u32>,

        #[arg(long, value_enum, default_value = "text")]
        format: AnalyzeFormat,

        #[arg(
            long,
            value_name = "FILE",
            required_if_eq_any = [("format", "csv"), ("format", "json")],
            help = "Output file for csv/json"
        )]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Export one canonical table
    Export {
        /// Exported zip archive
        archive: String,

        #[arg(long, value_enum)]
        table: TableKind,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show row counts and time ranges of every table
    Inspect {
        /// Exported zip archive
        archive: String,
    },

    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },
}
