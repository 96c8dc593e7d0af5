use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::{
    config::LookupConfig,
    error::{LookupError, Result},
    lookup::types::LookupResponse,
};

/// Anything that can answer a BIN status query.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BinLookup: Send + Sync {
    async fn lookup(&self, bin: &str) -> Result<LookupResponse>;
}

/// HTTP client for the remote BIN status service.
pub struct LookupClient {
    client: reqwest::Client,
    base_url: String,
}

impl LookupClient {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim().to_string(),
        })
    }

    /// Request URL for a BIN. Plain substitution, nothing is escaped.
    pub fn url_for(&self, bin: &str) -> String {
        format!("{}?bin={}", self.base_url, bin)
    }
}

#[async_trait]
impl BinLookup for LookupClient {
    async fn lookup(&self, bin: &str) -> Result<LookupResponse> {
        let url = self.url_for(bin);
        debug!("Querying status for BIN {}", bin);

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        serde_json::from_str(&body).map_err(|source| LookupError::Schema {
            bin: bin.to_string(),
            source,
        })
    }
}
