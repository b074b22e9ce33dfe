use crate::config::{PoolColumns, RosterColumns, RunConfig};
use crate::error::MatchError;
use crate::matcher::classify;
use crate::model::{
    DecoratedRow, MatchInput, MatchStatus, RosterEntry, RosterTable, RunMeta, RunResult,
    TestTakerEntry,
};
use crate::summary::compute_summary;

/// Run one batch: classify every roster row against the pool.
///
/// Pure iteration over validated inputs; all failure modes live in the
/// loaders and config validation, so the driver itself cannot fail.
pub fn run(config: &RunConfig, input: &MatchInput) -> RunResult {
    let mut rows = Vec::with_capacity(input.roster.entries.len());
    let mut unmatched = Vec::new();

    for entry in &input.roster.entries {
        let result = classify(entry, &input.pool, &config.thresholds);
        if result.status == MatchStatus::NoMatch {
            unmatched.push(entry.clone());
        }
        rows.push(DecoratedRow {
            entry: entry.clone(),
            status: result.status,
            confidence: result.confidence,
        });
    }

    let summary = compute_summary(&rows);

    RunResult {
        meta: RunMeta {
            config_name: config.name.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        headers: input.roster.headers.clone(),
        rows,
        unmatched,
    }
}

/// Load the master roster from CSV text, applying the column mapping and
/// validating every required cell before classification begins.
pub fn load_roster_csv(
    source: &str,
    csv_data: &str,
    columns: &RosterColumns,
) -> Result<RosterTable, MatchError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_data.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| MatchError::Io(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let name_idx = column_index(&headers, &columns.name, source)?;
    let number_idx = column_index(&headers, &columns.number, source)?;

    let mut entries = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| MatchError::Io(e.to_string()))?;
        let row = i + 2; // 1-based, after the header row

        let name = required_cell(&record, name_idx, source, row, &columns.name)?;
        let number = required_cell(&record, number_idx, source, row, &columns.number)?;

        entries.push(RosterEntry {
            name,
            number: normalize_number(&number),
            raw: record.iter().map(|c| c.to_string()).collect(),
        });
    }

    Ok(RosterTable { headers, entries })
}

/// Load one test-taker sheet from CSV text. Callers concatenate the
/// returned rows across sheets to form the pool.
pub fn load_pool_csv(
    source: &str,
    csv_data: &str,
    columns: &PoolColumns,
) -> Result<Vec<TestTakerEntry>, MatchError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_data.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| MatchError::Io(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let name_idx = column_index(&headers, &columns.full_name, source)?;
    let number_idx = column_index(&headers, &columns.mobile_number, source)?;

    let mut entries = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| MatchError::Io(e.to_string()))?;
        let row = i + 2;

        let full_name = required_cell(&record, name_idx, source, row, &columns.full_name)?;
        let mobile_number =
            required_cell(&record, number_idx, source, row, &columns.mobile_number)?;

        entries.push(TestTakerEntry {
            full_name,
            mobile_number: normalize_number(&mobile_number),
        });
    }

    Ok(entries)
}

fn column_index(headers: &[String], name: &str, source: &str) -> Result<usize, MatchError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| MatchError::MissingColumn {
            source: source.into(),
            column: name.into(),
        })
}

fn required_cell(
    record: &csv::StringRecord,
    idx: usize,
    source: &str,
    row: usize,
    column: &str,
) -> Result<String, MatchError> {
    let value = record.get(idx).unwrap_or("").trim();
    if value.is_empty() {
        return Err(MatchError::EmptyField {
            source: source.into(),
            row,
            column: column.into(),
        });
    }
    Ok(value.to_string())
}

/// Strip the ".0" a spreadsheet export appends to integral numeric cells,
/// so an integer and its string rendering compare as the same digits.
/// Leading zeros are preserved.
fn normalize_number(value: &str) -> String {
    match value.strip_suffix(".0") {
        Some(digits) if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) => {
            digits.to_string()
        }
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThresholdConfig;

    fn roster_columns() -> RosterColumns {
        RosterColumns {
            name: "Name of Student".into(),
            number: "Student Number".into(),
        }
    }

    fn pool_columns() -> PoolColumns {
        PoolColumns {
            full_name: "Full Name".into(),
            mobile_number: "Mobile Number".into(),
        }
    }

    #[test]
    fn load_roster_basic() {
        let csv = "\
Name of Student,Student Number,Grade
John Smith,5551234,6
Jane Doe,5559999.0,7
";
        let table = load_roster_csv("students.csv", csv, &roster_columns()).unwrap();
        assert_eq!(table.headers, vec!["Name of Student", "Student Number", "Grade"]);
        assert_eq!(table.entries.len(), 2);
        assert_eq!(table.entries[0].name, "John Smith");
        assert_eq!(table.entries[0].number, "5551234");
        // float rendering normalized, raw cell kept verbatim
        assert_eq!(table.entries[1].number, "5559999");
        assert_eq!(table.entries[1].raw, vec!["Jane Doe", "5559999.0", "7"]);
    }

    #[test]
    fn load_roster_missing_column() {
        let csv = "\
Student,Number
John Smith,5551234
";
        let err = load_roster_csv("students.csv", csv, &roster_columns()).unwrap_err();
        assert!(matches!(err, MatchError::MissingColumn { .. }));
        assert!(err.to_string().contains("Name of Student"));
    }

    #[test]
    fn load_roster_empty_cell_is_hard_error() {
        let csv = "\
Name of Student,Student Number
John Smith,5551234
Jane Doe,
";
        let err = load_roster_csv("students.csv", csv, &roster_columns()).unwrap_err();
        match err {
            MatchError::EmptyField { row, column, .. } => {
                assert_eq!(row, 3);
                assert_eq!(column, "Student Number");
            }
            other => panic!("expected EmptyField, got {other}"),
        }
    }

    #[test]
    fn load_pool_basic() {
        let csv = "\
Full Name,Mobile Number,Seat
Jon Smith,5551234,A1
Jane Doe,5559999,A2
";
        let pool = load_pool_csv("center-a.csv", csv, &pool_columns()).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool[0].full_name, "Jon Smith");
        assert_eq!(pool[1].mobile_number, "5559999");
    }

    #[test]
    fn number_normalization_preserves_leading_zeros() {
        assert_eq!(normalize_number("0551234"), "0551234");
        assert_eq!(normalize_number("5551234.0"), "5551234");
        assert_eq!(normalize_number("12.50"), "12.50");
        assert_eq!(normalize_number(".0"), ".0");
    }

    #[test]
    fn run_preserves_roster_order_and_collects_unmatched() {
        let roster_csv = "\
Name of Student,Student Number
John Smith,5551234
Unknown Person,1110000
Jane Doe,5559999
Another Stranger,2220000
";
        let pool_csv = "\
Full Name,Mobile Number
Jon Smith,5551234
Jane Doe,5559999
";
        let roster = load_roster_csv("students.csv", roster_csv, &roster_columns()).unwrap();
        let pool = load_pool_csv("center-a.csv", pool_csv, &pool_columns()).unwrap();

        let config = RunConfig {
            name: "order test".into(),
            roster: crate::config::RosterConfig {
                file: "students.csv".into(),
                columns: roster_columns(),
            },
            pool: crate::config::PoolConfig {
                files: vec!["center-a.csv".into()],
                columns: pool_columns(),
            },
            thresholds: ThresholdConfig { name: 88, number: 90 },
            output: Default::default(),
        };

        let result = run(&config, &MatchInput { roster, pool });

        assert_eq!(result.rows.len(), 4);
        assert_eq!(result.rows[0].entry.name, "John Smith");
        assert_eq!(result.rows[0].status, MatchStatus::NumberMatch);
        assert_eq!(result.rows[0].confidence, 100);
        assert_eq!(result.rows[2].status, MatchStatus::NumberMatch);

        assert_eq!(result.unmatched.len(), 2);
        assert_eq!(result.unmatched[0].name, "Unknown Person");
        assert_eq!(result.unmatched[1].name, "Another Stranger");

        assert_eq!(result.summary.total_rows, 4);
        assert_eq!(result.summary.unmatched, 2);
    }
}
