use std::sync::Arc;

use url::Url;

use crate::app::error::Result;
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::{FetchOptions, Fetcher};
use crate::normalizer::Normalizer;

pub struct AppContext {
    pub config: Config,
    pub feed_url: Url,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub normalizer: Normalizer,
}

impl AppContext {
    pub fn new(config: Config, options: FetchOptions) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> =
            Arc::new(HttpFetcher::new(&config.http, options)?);
        Self::with_fetcher(config, fetcher)
    }

    /// Build a context around an existing fetcher.
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Result<Self> {
        let feed_url = Url::parse(&config.feed.url)?;

        Ok(Self {
            config,
            feed_url,
            fetcher,
            normalizer: Normalizer::new(),
        })
    }
}
