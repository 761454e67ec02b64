pub mod collection;
pub mod item;

pub use collection::FeedItemCollection;
pub use item::FeedItem;
