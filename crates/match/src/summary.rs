use std::collections::HashMap;

use crate::model::{DecoratedRow, MatchStatus, RunSummary};

/// Compute summary statistics from decorated rows.
pub fn compute_summary(rows: &[DecoratedRow]) -> RunSummary {
    let mut status_counts: HashMap<String, usize> = HashMap::new();
    let mut name_matches = 0;
    let mut number_matches = 0;
    let mut unmatched = 0;

    for r in rows {
        *status_counts.entry(r.status.to_string()).or_insert(0) += 1;

        match r.status {
            MatchStatus::NameMatch => name_matches += 1,
            MatchStatus::NumberMatch => number_matches += 1,
            MatchStatus::NoMatch => unmatched += 1,
        }
    }

    RunSummary {
        total_rows: rows.len(),
        name_matches,
        number_matches,
        unmatched,
        status_counts,
    }
}
