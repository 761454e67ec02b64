use std::io::Write;

use crate::app::{AppContext, Result};
use crate::format::{self, Layout};

/// Fetch the feed, pick the item `back` entries before the newest and write
/// its alt text to `out`.
///
/// Output is rendered in full before anything is written, so a failure at
/// any step leaves `out` untouched.
pub async fn show_alt_text<W: Write>(
    ctx: &AppContext,
    back: usize,
    layout: Layout,
    out: &mut W,
) -> Result<()> {
    tracing::debug!("Fetching {}", ctx.feed_url);
    let body = ctx.fetcher.fetch(ctx.feed_url.as_str()).await?;

    tracing::debug!("Parsing {} bytes", body.len());
    let items = ctx.normalizer.normalize(&body)?;

    let item = items.select(back)?;
    tracing::debug!(
        title = item.title(),
        published = ?item.published_at(),
        "Selected item {} of {}",
        back,
        items.len()
    );

    let rendered = format::render(item, layout);
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
