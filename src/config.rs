use serde::Deserialize;

use crate::error::{LookupError, Result};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub lookup: LookupConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LookupConfig {
    pub base_url: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BatchConfig {
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::default(),
            concurrency: default_concurrency(),
        }
    }
}

fn default_concurrency() -> usize {
    1
}

/// What a batch does when one lookup fails.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// First fault aborts the batch, no partial results.
    #[default]
    Abort,
    /// Every card gets its own outcome.
    Collect,
}

impl Config {
    /// Load from an optional TOML file, then `BIN_STATUS_*` environment variables.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("BIN_STATUS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let base_url = self.lookup.base_url.trim();
        if base_url.is_empty() {
            return Err(LookupError::Config("lookup.base_url is empty".to_string()));
        }

        let parsed = reqwest::Url::parse(base_url)
            .map_err(|e| LookupError::Config(format!("Invalid lookup.base_url: {}", e)))?;
        if parsed.query().is_some() {
            return Err(LookupError::Config(
                "lookup.base_url must not carry a query string".to_string(),
            ));
        }

        Ok(())
    }
}
