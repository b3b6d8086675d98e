//! Reading and writing JSON record lists.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use datkit_core::Record;

use crate::error::CliError;

/// Read a JSON array of records from `path`, or from stdin when `path` is `-`.
pub(crate) fn read_records(path: &Path) -> Result<Vec<Record>, CliError> {
    let records: Vec<Record> = if path == Path::new("-") {
        serde_json::from_reader(io::stdin().lock())?
    } else {
        let file = File::open(path).map_err(|e| CliError::input(path, e))?;
        serde_json::from_reader(BufReader::new(file))?
    };
    log::debug!("read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Write records to stdout as a pretty-printed JSON array.
pub(crate) fn write_records(records: &[Record]) -> Result<(), CliError> {
    let mut out = BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut out, records)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
