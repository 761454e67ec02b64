//! # altfeed
//!
//! Prints the image alt text of an XKCD comic, fortune-style.
//!
//! ## Architecture
//!
//! Every run is a single sequential pipeline:
//!
//! ```text
//! Fetcher → Document → Normalizer → Selection → Format → stdout
//! ```
//!
//! - [`fetcher`]: HTTP client for the feed
//! - [`document`]: generic XML tree with path lookups
//! - [`normalizer`]: turns `rss.channel` items into [`domain::FeedItem`]s
//! - [`format`]: line wrapping and output layout
//!
//! ## Quick Start
//!
//! ```bash
//! # Alt text of the newest strip
//! altfeed
//!
//! # Two strips back, on one line
//! altfeed -b2 -o
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires the fetcher and normalizer to the
/// loaded configuration. [`AltError`](app::AltError) carries one variant per
/// failure category, each with its own exit status.
pub mod app;

/// Command-line interface using clap, and the command that runs the
/// pipeline.
pub mod cli;

/// Configuration loaded from `~/.config/altfeed/config.toml`.
pub mod config;

/// XML parsing into a path-addressable tree.
pub mod document;

/// Core domain models.
///
/// - [`FeedItem`](domain::FeedItem): one feed entry with its embedded image
/// - [`FeedItemCollection`](domain::FeedItemCollection): items in feed order
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait for feed fetching
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Column-aware line wrapping and item rendering.
pub mod format;

/// Builds the item collection from a parsed feed.
pub mod normalizer;
