use crate::app::{AltError, Result};
use crate::domain::FeedItem;

/// Items of one feed in document order, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedItemCollection {
    items: Vec<FeedItem>,
}

impl FeedItemCollection {
    pub fn new(items: Vec<FeedItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pick the item `back` entries before the most recent one.
    pub fn select(&self, back: usize) -> Result<&FeedItem> {
        if self.items.is_empty() {
            return Err(AltError::EmptyFeed);
        }
        self.items.get(back).ok_or(AltError::OutOfRange {
            max: self.items.len() - 1,
            requested: back,
        })
    }
}
