//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use datkit_core::Variant;

#[derive(Parser)]
#[command(name = "datkit")]
#[command(about = "Filter, deduplicate, and convert DAT records", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file to use instead of ~/.config/datkit/settings.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the records that pass every filter
    Filter {
        /// JSON record list ("-" for stdin)
        input: PathBuf,

        /// Filter expression such as rom.crc==deadbeef (repeatable)
        #[arg(short, long = "filter")]
        filters: Vec<String>,

        /// Ignore the default filters from the settings file
        #[arg(long)]
        no_defaults: bool,
    },

    /// Merge duplicate items and rename distinct items that share a name
    Dedupe {
        /// JSON record list ("-" for stdin)
        input: PathBuf,
    },

    /// Replace disks and media with equivalent ROM records
    Convert {
        /// JSON record list ("-" for stdin)
        input: PathBuf,
    },

    /// List the fields a record type accepts
    Fields {
        /// Record type (e.g., rom, disk, machine)
        variant: Variant,
    },

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file location and contents
    Show,

    /// Print the settings file path
    Path,
}
