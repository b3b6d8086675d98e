//! datkit CLI
//!
//! Command-line interface for filtering, deduplicating, and converting DAT
//! records stored as JSON.

mod cli_types;
mod commands;
mod error;
mod logging;
mod records;
mod settings;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use commands::config::{run_config_path, run_config_show};
use commands::convert::run_convert;
use commands::dedupe::run_dedupe;
use commands::fields::run_fields;
use commands::filter::run_filter;
use settings::Settings;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    let settings_path = cli.config.unwrap_or_else(settings::settings_path);

    let result = match cli.command {
        Commands::Filter {
            input,
            filters,
            no_defaults,
        } => {
            let settings = Settings::load(&settings_path);
            run_filter(&input, &filters, &settings, no_defaults)
        }
        Commands::Dedupe { input } => run_dedupe(&input),
        Commands::Convert { input } => run_convert(&input),
        Commands::Fields { variant } => {
            run_fields(variant);
            Ok(())
        }
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => run_config_show(&settings_path),
                ConfigAction::Path => run_config_path(&settings_path),
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
