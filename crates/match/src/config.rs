use serde::Deserialize;

use crate::error::MatchError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct RunConfig {
    pub name: String,
    pub roster: RosterConfig,
    pub pool: PoolConfig,
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    pub file: String,
    pub columns: RosterColumns,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterColumns {
    pub name: String,
    pub number: String,
}

/// Test-taker sheets. All files share one column mapping and are
/// concatenated row-wise, in order, into a single pool.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolConfig {
    pub files: Vec<String>,
    pub columns: PoolColumns,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolColumns {
    pub full_name: String,
    pub mobile_number: String,
}

// ---------------------------------------------------------------------------
// Thresholds + Output
// ---------------------------------------------------------------------------

/// Similarity cutoffs in [0, 100], applied uniformly to every comparison
/// in a run. Defaults match the reference settings (name 88, number 90).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ThresholdConfig {
    #[serde(default = "default_name_threshold")]
    pub name: u8,
    #[serde(default = "default_number_threshold")]
    pub number: u8,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            name: default_name_threshold(),
            number: default_number_threshold(),
        }
    }
}

fn default_name_threshold() -> u8 {
    88
}

fn default_number_threshold() -> u8 {
    90
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Roster with status + confidence columns appended.
    #[serde(default)]
    pub decorated: Option<String>,
    /// NoMatch rows with original columns unchanged.
    #[serde(default)]
    pub unmatched: Option<String>,
    /// Full run result as JSON.
    #[serde(default)]
    pub json: Option<String>,
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl RunConfig {
    pub fn from_toml(input: &str) -> Result<Self, MatchError> {
        let config: RunConfig =
            toml::from_str(input).map_err(|e| MatchError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.thresholds.name > 100 || self.thresholds.number > 100 {
            return Err(MatchError::ConfigValidation(format!(
                "thresholds must be within 0..=100, got name={} number={}",
                self.thresholds.name, self.thresholds.number
            )));
        }

        if self.roster.file.is_empty() {
            return Err(MatchError::ConfigValidation(
                "roster file must not be empty".into(),
            ));
        }

        if self.pool.files.is_empty() {
            return Err(MatchError::ConfigValidation(
                "at least one pool file is required".into(),
            ));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
