//! Logger setup for the `datkit` binary.
//!
//! Command summaries go through `log::info!` on stderr so that stdout only
//! ever carries record JSON.

use std::io::Write;

use log::{Level, LevelFilter};

/// Install the global logger.
///
/// `--quiet` keeps warnings and errors, `--verbose` adds debug output with
/// timestamps. `RUST_LOG` overrides either.
pub(crate) fn init(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);

    if verbose {
        builder.format_timestamp_millis().format_target(false);
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level.as_str().to_lowercase(), record.args()),
        });
    }

    builder.parse_default_env().init();
}
