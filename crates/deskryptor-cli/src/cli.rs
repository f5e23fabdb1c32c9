use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "DESkryptor CLI - Screen hydrogen-bond donor and acceptor pairs for deep eutectic solvent formation using precomputed EFI scores.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick a donor and/or an acceptor and show what the selection resolves to.
    Screen(ScreenArgs),
    /// Print one of the dataset tables.
    List(ListArgs),
    /// Write one of the dataset tables as CSV.
    Export(ExportArgs),
    /// Manage the local dataset directory.
    Data(DataArgs),
}

/// Options shared by every command that loads the dataset.
#[derive(Args, Debug, Clone, Default)]
pub struct DatasetArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Dataset location: a directory or an http(s) base URL.
    /// Overrides `data.source` from the config file.
    #[arg(short, long = "data", value_name = "DIR_OR_URL")]
    pub source: Option<String>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S display.highlight-threshold=7.5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `screen` subcommand.
#[derive(Args, Debug)]
pub struct ScreenArgs {
    /// Hydrogen-bond donor id (e.g. 'urea').
    #[arg(long, value_name = "ID")]
    pub donor: Option<String>,

    /// Hydrogen-bond acceptor id (e.g. 'cholineChloride').
    #[arg(long, value_name = "ID")]
    pub acceptor: Option<String>,

    #[command(flatten)]
    pub dataset: DatasetArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Donors,
    Acceptors,
    Complexes,
}

/// Arguments for the `list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Table to print.
    #[arg(value_enum)]
    pub table: Table,

    /// Override the EFI score above which complexes are highlighted.
    #[arg(long, value_name = "FLOAT")]
    pub highlight_threshold: Option<f64>,

    #[command(flatten)]
    pub dataset: DatasetArgs,
}

/// Arguments for the `export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Table to export.
    #[arg(value_enum)]
    pub table: Table,

    /// Path of the CSV file to write.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    #[command(flatten)]
    pub dataset: DatasetArgs,
}

/// Arguments for the `data` subcommand.
#[derive(Args, Debug)]
pub struct DataArgs {
    #[command(subcommand)]
    pub command: DataCommands,
}

/// Available commands for data management.
#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Download the three dataset documents into the local data directory.
    Download {
        /// Base URL that serves hbd.json, hba.json and complexes.json.
        #[arg(long, required = true, value_name = "URL")]
        from: String,
        /// Force re-download and overwrite existing data.
        #[arg(long)]
        force: bool,
        /// Path to a configuration file whose `data.*-file` names are written.
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
        /// Set a document file name, overriding the config file.
        /// Example: -S data.donors-file=donors.json
        #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
        set_values: Vec<String>,
    },
    /// Show the absolute path to the local data directory.
    Path,
    /// Set a custom absolute path for the local data directory.
    SetPath {
        /// The new path to use for storing data files.
        #[arg(required = true)]
        path: PathBuf,
    },
    /// Reset the data path to its default, OS-specific location.
    ResetPath,
}
