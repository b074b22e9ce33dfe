//! `rollcall run` / `rollcall validate` — config-driven roster reconciliation.

use std::path::{Path, PathBuf};

use rollcall_match::engine::{load_pool_csv, load_roster_csv, run};
use rollcall_match::model::MatchInput;
use rollcall_match::RunConfig;

use crate::exit_codes::{EXIT_INVALID_CONFIG, EXIT_RUNTIME, EXIT_UNMATCHED};
use crate::export;
use crate::CliError;

fn run_err(code: u8, msg: impl Into<String>) -> CliError {
    CliError::new(code, msg)
}

pub fn cmd_run(
    config_path: PathBuf,
    json_output: bool,
    output_file: Option<PathBuf>,
) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(&config_path)
        .map_err(|e| run_err(EXIT_RUNTIME, format!("cannot read config: {e}")))?;

    let config = RunConfig::from_toml(&config_str)
        .map_err(|e| run_err(EXIT_INVALID_CONFIG, e.to_string()))?;

    // Data files resolve relative to the config file's directory
    let base_dir = config_path
        .parent()
        .unwrap_or_else(|| Path::new("."));

    let roster_path = base_dir.join(&config.roster.file);
    let roster_data = std::fs::read_to_string(&roster_path).map_err(|e| {
        run_err(EXIT_RUNTIME, format!("cannot read {}: {e}", roster_path.display()))
    })?;
    let roster = load_roster_csv(&config.roster.file, &roster_data, &config.roster.columns)
        .map_err(|e| run_err(EXIT_RUNTIME, e.to_string()))?;

    // Union of all test-taker sheets, row order preserved per sheet
    let mut pool = Vec::new();
    for file in &config.pool.files {
        let path = base_dir.join(file);
        let data = std::fs::read_to_string(&path)
            .map_err(|e| run_err(EXIT_RUNTIME, format!("cannot read {}: {e}", path.display())))?;
        let rows = load_pool_csv(file, &data, &config.pool.columns)
            .map_err(|e| run_err(EXIT_RUNTIME, e.to_string()))?;
        pool.extend(rows);
    }

    let result = run(&config, &MatchInput { roster, pool });

    // Configured file outputs
    if let Some(ref path) = config.output.decorated {
        let path = base_dir.join(path);
        export::write_decorated_csv(&path, &result)?;
        eprintln!("wrote {}", path.display());
    }
    if let Some(ref path) = config.output.unmatched {
        let path = base_dir.join(path);
        export::write_unmatched_csv(&path, &result)?;
        eprintln!("wrote {}", path.display());
    }

    let json_str = serde_json::to_string_pretty(&result)
        .map_err(|e| run_err(EXIT_RUNTIME, format!("JSON serialization error: {e}")))?;

    if let Some(ref path) = config.output.json {
        let path = base_dir.join(path);
        std::fs::write(&path, &json_str)
            .map_err(|e| run_err(EXIT_RUNTIME, format!("cannot write output: {e}")))?;
        eprintln!("wrote {}", path.display());
    }
    if let Some(ref path) = output_file {
        std::fs::write(path, &json_str)
            .map_err(|e| run_err(EXIT_RUNTIME, format!("cannot write output: {e}")))?;
        eprintln!("wrote {}", path.display());
    }

    if json_output {
        println!("{json_str}");
    }

    // Human summary to stderr
    let s = &result.summary;
    eprintln!(
        "{} roster rows: {} name matches, {} number matches, {} unmatched",
        s.total_rows, s.name_matches, s.number_matches, s.unmatched,
    );

    if s.unmatched > 0 {
        return Err(run_err(
            EXIT_UNMATCHED,
            format!("{} roster row(s) did not match any test taker", s.unmatched),
        ));
    }

    Ok(())
}

pub fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(&config_path)
        .map_err(|e| run_err(EXIT_RUNTIME, format!("cannot read config: {e}")))?;

    match RunConfig::from_toml(&config_str) {
        Ok(config) => {
            eprintln!(
                "valid: '{}' with roster '{}', {} pool file(s), thresholds name={} number={}",
                config.name,
                config.roster.file,
                config.pool.files.len(),
                config.thresholds.name,
                config.thresholds.number,
            );
            Ok(())
        }
        Err(e) => Err(run_err(EXIT_INVALID_CONFIG, e.to_string())),
    }
}
