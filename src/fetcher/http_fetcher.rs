use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::app::{AltError, Result};
use crate::config::HttpConfig;
use crate::fetcher::{FetchOptions, Fetcher};

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig, options: FetchOptions) -> Result<Self> {
        if options.insecure {
            tracing::warn!("TLS certificate verification is disabled");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.as_str())
            .connection_verbose(options.verbose)
            .danger_accept_invalid_certs(options.insecure)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("GET {} -> {}", url, status);

        if !status.is_success() {
            let reason = status
                .canonical_reason()
                .unwrap_or("Unknown status")
                .to_string();
            return Err(AltError::Status { status, reason });
        }

        Ok(response.text().await?)
    }
}
