use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One row of the master roster.
#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
    pub name: String,
    /// Identifying number as a normalized digit string.
    pub number: String,
    /// Original cells in header order, kept verbatim for export.
    #[serde(skip)]
    pub raw: Vec<String>,
}

/// One row from a test-taker sheet.
#[derive(Debug, Clone)]
pub struct TestTakerEntry {
    pub full_name: String,
    pub mobile_number: String,
}

/// Parsed master roster: header row plus entries in file order.
#[derive(Debug, Clone)]
pub struct RosterTable {
    pub headers: Vec<String>,
    pub entries: Vec<RosterEntry>,
}

/// Pre-loaded inputs for one run. The pool is the union of every
/// test-taker sheet, concatenated row-wise.
pub struct MatchInput {
    pub roster: RosterTable,
    pub pool: Vec<TestTakerEntry>,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    NameMatch,
    NumberMatch,
    NoMatch,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameMatch => write!(f, "name_match"),
            Self::NumberMatch => write!(f, "number_match"),
            Self::NoMatch => write!(f, "no_match"),
        }
    }
}

/// Outcome of classifying one roster entry against the pool.
///
/// `confidence` is 0 exactly when `status` is `NoMatch`; otherwise it is
/// the best qualifying similarity for the winning category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub status: MatchStatus,
    pub confidence: u8,
}

// ---------------------------------------------------------------------------
// Driver output
// ---------------------------------------------------------------------------

/// A roster entry annotated with its classification.
#[derive(Debug, Clone, Serialize)]
pub struct DecoratedRow {
    #[serde(flatten)]
    pub entry: RosterEntry,
    pub status: MatchStatus,
    pub confidence: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub total_rows: usize,
    pub name_matches: usize,
    pub number_matches: usize,
    pub unmatched: usize,
    pub status_counts: HashMap<String, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunMeta {
    pub config_name: String,
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub meta: RunMeta,
    pub summary: RunSummary,
    /// Original roster headers, for CSV export.
    pub headers: Vec<String>,
    /// Every roster row in original order, decorated.
    pub rows: Vec<DecoratedRow>,
    /// The NoMatch subset, original relative order, undecorated.
    pub unmatched: Vec<RosterEntry>,
}
