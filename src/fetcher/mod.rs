pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

/// Transport switches taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchOptions {
    /// Log connection activity.
    pub verbose: bool,
    /// Skip TLS certificate verification.
    pub insecure: bool,
}

#[async_trait]
pub trait Fetcher {
    /// Fetch the document at `url`, failing on any non-success status.
    async fn fetch(&self, url: &str) -> Result<String>;
}
