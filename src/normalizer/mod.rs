use crate::app::{AltError, Result};
use crate::document::{self, Node};
use crate::domain::{FeedItem, FeedItemCollection};

const CHANNEL_PATH: &str = "rss.channel";

#[derive(Clone)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, body: &str) -> Result<FeedItemCollection> {
        let document = document::parse(body)?;
        collect_items(&document)
    }
}

/// Build the collection from every `<item>` directly under `rss.channel`.
///
/// Other channel children are skipped. The first item that is missing a
/// field aborts the whole collection.
pub fn collect_items(document: &Node) -> Result<FeedItemCollection> {
    let channel = document
        .child(CHANNEL_PATH)
        .ok_or_else(|| AltError::Structure(CHANNEL_PATH.to_string()))?;

    let items = channel
        .children()
        .filter(|(name, _)| *name == "item")
        .map(|(_, node)| FeedItem::from_node(node))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Collected {} items from channel", items.len());
    Ok(FeedItemCollection::new(items))
}
