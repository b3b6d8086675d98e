use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use datkit_core::Record;
use datkit_filter::FilterSet;

use crate::error::CliError;
use crate::records::{read_records, write_records};
use crate::settings::Settings;

/// Print the records that pass every filter.
pub(crate) fn run_filter(
    input: &Path,
    filters: &[String],
    settings: &Settings,
    no_defaults: bool,
) -> Result<(), CliError> {
    let defaults = if no_defaults {
        &[][..]
    } else {
        settings.default_filters.as_slice()
    };
    if !defaults.is_empty() {
        log::debug!("default filters: {}", defaults.join(", "));
    }

    let set = FilterSet::from_strings(defaults.iter().chain(filters))?;
    let records = read_records(input)?;
    let total = records.len();

    let kept: Vec<Record> = records.into_iter().filter(|r| set.run(r)).collect();
    write_records(&kept)?;

    log::info!(
        "{} of {} records passed {} filter{}",
        kept.len().if_supports_color(Stderr, |t| t.green()),
        total,
        set.len(),
        if set.len() == 1 { "" } else { "s" },
    );
    Ok(())
}
