use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use datkit_dat::{merge_duplicates, resolve_duplicate_names};

use crate::error::CliError;
use crate::records::{read_records, write_records};

/// Merge duplicate items, then rename distinct items that still share a name.
pub(crate) fn run_dedupe(input: &Path) -> Result<(), CliError> {
    let records = read_records(input)?;
    let total = records.len();

    let mut merged = merge_duplicates(records);
    let renamed = resolve_duplicate_names(&mut merged);
    write_records(&merged)?;

    log::info!(
        "{} records, {} duplicates merged, {} renamed",
        merged.len().if_supports_color(Stderr, |t| t.bold()),
        (total - merged.len()).if_supports_color(Stderr, |t| t.green()),
        renamed.if_supports_color(Stderr, |t| t.yellow()),
    );
    Ok(())
}
