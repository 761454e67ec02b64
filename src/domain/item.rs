use chrono::{DateTime, FixedOffset};

use crate::app::{AltError, Result};
use crate::document::{self, Node};

/// One `<item>` of the feed, with the image embedded in its description
/// broken out into its own fields.
///
/// Only [`FeedItem::from_node`] builds one, so every field is always set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    title: String,
    link: String,
    image_source: String,
    image_title: String,
    image_alt: String,
    publication_date: String,
    guid: String,
}

impl FeedItem {
    /// Read an item from its `<item>` subtree.
    ///
    /// `<description>` carries escaped markup holding an `<img>`; it is parsed
    /// again as its own document to read the image's `src`, `title` and `alt`.
    pub fn from_node(node: &Node) -> Result<Self> {
        let scalar = |path: &str| {
            node.get_value(path)
                .map(str::to_string)
                .map_err(|e| AltError::extraction(path, e))
        };

        let title = scalar("title")?;
        let link = scalar("link")?;
        let publication_date = scalar("pubDate")?;
        let guid = scalar("guid")?;

        let description = scalar("description")?;
        let fragment =
            document::parse(&description).map_err(|e| AltError::extraction("description", e))?;
        let image = |attr: &str| {
            fragment
                .get_attribute("img", attr)
                .map(str::to_string)
                .map_err(|e| AltError::extraction(&format!("img@{attr}"), e))
        };

        Ok(Self {
            title,
            link,
            image_source: image("src")?,
            image_title: image("title")?,
            image_alt: image("alt")?,
            publication_date,
            guid,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn image_source(&self) -> &str {
        &self.image_source
    }

    /// Usually the same text as [`image_alt`](Self::image_alt).
    pub fn image_title(&self) -> &str {
        &self.image_title
    }

    pub fn image_alt(&self) -> &str {
        &self.image_alt
    }

    /// Publication date exactly as the feed wrote it.
    pub fn publication_date(&self) -> &str {
        &self.publication_date
    }

    pub fn guid(&self) -> &str {
        &self.guid
    }

    /// Publication date read as RFC 2822, if it is one.
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(self.publication_date.trim()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEM_SAMPLE: &str = r#"<item>
  <title>Bad Map Projection: Time Zones</title>
  <link>https://xkcd.com/2951/</link>
  <description>&lt;img src="https://imgs.xkcd.com/comics/time_zones.png" title="It&amp;#39;s always noon somewhere." alt="It&amp;#39;s always noon somewhere." /&gt;</description>
  <pubDate>Fri, 31 May 2024 04:00:00 +0000</pubDate>
  <guid>https://xkcd.com/2951/</guid>
</item>"#;

    fn item_node(xml: &str) -> Node {
        document::parse(xml)
            .unwrap()
            .get_child("item")
            .unwrap()
            .clone()
    }

    #[test]
    fn test_from_node_reads_every_field() {
        let item = FeedItem::from_node(&item_node(ITEM_SAMPLE)).unwrap();

        assert_eq!(item.title(), "Bad Map Projection: Time Zones");
        assert_eq!(item.link(), "https://xkcd.com/2951/");
        assert_eq!(
            item.image_source(),
            "https://imgs.xkcd.com/comics/time_zones.png"
        );
        assert_eq!(item.image_title(), "It's always noon somewhere.");
        assert_eq!(item.image_alt(), "It's always noon somewhere.");
        assert_eq!(item.publication_date(), "Fri, 31 May 2024 04:00:00 +0000");
        assert_eq!(item.guid(), "https://xkcd.com/2951/");
    }

    #[test]
    fn test_description_in_cdata() {
        let xml = r#"<item>
  <title>T</title><link>L</link><pubDate>D</pubDate><guid>G</guid>
  <description><![CDATA[<img src="s.png" title="ti" alt="al" />]]></description>
</item>"#;
        let item = FeedItem::from_node(&item_node(xml)).unwrap();

        assert_eq!(item.image_source(), "s.png");
        assert_eq!(item.image_title(), "ti");
        assert_eq!(item.image_alt(), "al");
    }

    #[test]
    fn test_missing_guid_fails() {
        let xml = ITEM_SAMPLE.replace("<guid>https://xkcd.com/2951/</guid>", "");
        let err = FeedItem::from_node(&item_node(&xml)).unwrap_err();

        match err {
            AltError::Extraction { field, .. } => assert_eq!(field, "guid"),
            other => panic!("expected Extraction error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_alt_fails() {
        let xml = ITEM_SAMPLE.replace(r#" alt="It&amp;#39;s always noon somewhere.""#, "");
        let err = FeedItem::from_node(&item_node(&xml)).unwrap_err();

        match err {
            AltError::Extraction { field, .. } => assert_eq!(field, "img@alt"),
            other => panic!("expected Extraction error, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_text_description_fails() {
        let xml = r#"<item>
  <title>T</title><link>L</link><pubDate>D</pubDate><guid>G</guid>
  <description>No image here</description>
</item>"#;
        let err = FeedItem::from_node(&item_node(xml)).unwrap_err();

        match err {
            AltError::Extraction { field, .. } => assert_eq!(field, "description"),
            other => panic!("expected Extraction error, got {:?}", other),
        }
    }

    #[test]
    fn test_published_at() {
        let item = FeedItem::from_node(&item_node(ITEM_SAMPLE)).unwrap();
        let published = item.published_at().unwrap();
        assert_eq!(published.to_rfc3339(), "2024-05-31T04:00:00+00:00");

        let xml = ITEM_SAMPLE.replace("Fri, 31 May 2024 04:00:00 +0000", "last tuesday");
        let item = FeedItem::from_node(&item_node(&xml)).unwrap();
        assert_eq!(item.published_at(), None);
        assert_eq!(item.publication_date(), "last tuesday");
    }
}
