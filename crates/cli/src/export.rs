//! CSV export of run results: decorated roster + unmatched subset.

use std::path::Path;

use rollcall_match::RunResult;

use crate::exit_codes::EXIT_RUNTIME;
use crate::CliError;

/// Write the roster with `test_taker_status` and `match_percentage`
/// columns appended to the original columns.
pub fn write_decorated_csv(path: &Path, result: &RunResult) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .from_path(path)
        .map_err(csv_err)?;

    let mut headers = result.headers.clone();
    headers.push("test_taker_status".into());
    headers.push("match_percentage".into());
    writer.write_record(&headers).map_err(csv_err)?;

    for row in &result.rows {
        let mut record = row.entry.raw.clone();
        record.push(row.status.to_string());
        record.push(row.confidence.to_string());
        writer.write_record(&record).map_err(csv_err)?;
    }

    writer
        .flush()
        .map_err(|e| CliError::new(EXIT_RUNTIME, e.to_string()))
}

/// Write the NoMatch rows with their original columns unchanged.
pub fn write_unmatched_csv(path: &Path, result: &RunResult) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .from_path(path)
        .map_err(csv_err)?;

    writer.write_record(&result.headers).map_err(csv_err)?;
    for entry in &result.unmatched {
        writer.write_record(&entry.raw).map_err(csv_err)?;
    }

    writer
        .flush()
        .map_err(|e| CliError::new(EXIT_RUNTIME, e.to_string()))
}

fn csv_err(e: csv::Error) -> CliError {
    CliError::new(EXIT_RUNTIME, e.to_string())
}
