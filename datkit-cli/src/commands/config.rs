use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::settings::{Settings, load_settings_string};

/// Show the settings file location, its contents, and the filters it sets.
pub(crate) fn run_config_show(path: &Path) {
    log::info!(
        "{}",
        "datkit Configuration".if_supports_color(Stderr, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stderr, |t| t.cyan()),
            "(exists)".if_supports_color(Stderr, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stderr, |t| t.cyan()),
            "(not found)".if_supports_color(Stderr, |t| t.dimmed()),
        );
        return;
    }

    let settings = Settings::load(path);
    log::info!("");
    if settings.default_filters.is_empty() {
        log::info!("  Default filters: none");
    } else {
        log::info!("  Default filters:");
        for filter in &settings.default_filters {
            log::info!("    {filter}");
        }
    }

    if let Some(contents) = load_settings_string(path) {
        log::info!("");
        for line in contents.lines() {
            log::info!("  {line}");
        }
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path(path: &Path) {
    println!("{}", path.display());
}
