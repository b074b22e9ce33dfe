//! `rollcall-match` — roster-to-test-taker matching engine.
//!
//! Pure engine crate: receives pre-loaded tables, returns classified rows.
//! No CLI or file IO dependencies.

pub mod config;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod model;
pub mod similarity;
pub mod summary;

pub use config::RunConfig;
pub use engine::run;
pub use error::MatchError;
pub use model::{MatchInput, MatchResult, MatchStatus, RosterEntry, RunResult, TestTakerEntry};
