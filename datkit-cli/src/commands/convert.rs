use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use datkit_core::Record;
use datkit_dat::convert_to_rom;

use crate::error::CliError;
use crate::records::{read_records, write_records};

/// Replace every disk and media record with its ROM equivalent.
pub(crate) fn run_convert(input: &Path) -> Result<(), CliError> {
    let records = read_records(input)?;

    let mut converted = 0;
    let output: Vec<Record> = records
        .into_iter()
        .map(|record| match convert_to_rom(&record) {
            Some(rom) => {
                converted += 1;
                rom
            }
            None => record,
        })
        .collect();
    write_records(&output)?;

    log::info!(
        "converted {} of {} records to roms",
        converted.if_supports_color(Stderr, |t| t.green()),
        output.len(),
    );
    Ok(())
}
