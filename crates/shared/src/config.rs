//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Ledger engine configuration.
    #[serde(default)]
    pub ledger: LedgerConfig,
}

/// Ledger engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Number of transactions returned in the savings recent-activity window.
    #[serde(default = "default_recent_activity_limit")]
    pub recent_activity_limit: usize,
    /// Description markers that classify an imported row as an inflow.
    #[serde(default = "default_inflow_markers")]
    pub inflow_markers: Vec<String>,
}

fn default_recent_activity_limit() -> usize {
    20
}

fn default_inflow_markers() -> Vec<String> {
    ["refund", "payment", "reversal", "cashback", "deposit"]
        .into_iter()
        .map(str::to_owned)
        .collect()
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            recent_activity_limit: default_recent_activity_limit(),
            inflow_markers: default_inflow_markers(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TALLY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
