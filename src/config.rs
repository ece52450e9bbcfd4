//! Configuration module

use crate::runner::DEFAULT_OPERATIONS;
use serde::{Deserialize, Serialize};

/// Main configuration struct
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Iterations per bench method
    pub operations: i64,

    /// Logging settings
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json_output: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            operations: DEFAULT_OPERATIONS,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_output: false,
        }
    }
}

impl BenchConfig {
    /// Load config from the file named by `BENCH_CONFIG`, or defaults
    pub fn from_env() -> anyhow::Result<Self> {
        let config_path = std::env::var("BENCH_CONFIG")
            .unwrap_or_else(|_| "config/bench.json".to_string());

        Self::load(&config_path)
    }

    /// Load config from a JSON file, falling back to defaults if it is missing
    pub fn load(path: &str) -> anyhow::Result<Self> {
        if std::path::Path::new(path).exists() {
            let content = std::fs::read_to_string(path)?;
            let config: BenchConfig = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(BenchConfig::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.operations > 0,
            "operations must be greater than 0 (got {})",
            self.operations
        );
        Ok(())
    }
}
