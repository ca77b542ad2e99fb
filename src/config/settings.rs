//! User settings for fintrack
//!
//! Manages display preferences, report window sizes and the behaviour of
//! the in-memory demo store.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::FintrackError;
use crate::storage::write_json_atomic;

/// User settings for fintrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Number of months offered by `fintrack months`
    #[serde(default = "default_month_options")]
    pub month_options: usize,

    /// Length of the spending trend window on the dashboard
    #[serde(default = "default_trend_months")]
    pub trend_months: usize,

    /// Number of recent transactions shown on the dashboard
    #[serde(default = "default_recent_transactions")]
    pub recent_transactions: usize,

    /// Artificial delay applied to each call of the in-memory demo store
    #[serde(default)]
    pub simulated_latency_ms: u64,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_month_options() -> usize {
    12
}

fn default_trend_months() -> usize {
    6
}

fn default_recent_transactions() -> usize {
    5
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            month_options: default_month_options(),
            trend_months: default_trend_months(),
            recent_transactions: default_recent_transactions(),
            simulated_latency_ms: 0,
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Simulated latency as a duration
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FintrackError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FintrackError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
