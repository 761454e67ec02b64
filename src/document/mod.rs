//! Generic markup tree built from quick-xml events.
//!
//! [`parse`] returns an unnamed root [`Node`] whose children are the
//! top-level elements, so a feed is addressed as `rss.channel.item`.
//! Children keep document order and duplicate names are allowed; path
//! lookups resolve each segment to the first matching child.

use html_escape::decode_html_entities;
use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    Attribute(#[from] AttrError),

    #[error("Unexpected closing tag </{0}>")]
    UnmatchedEnd(String),

    #[error("Element <{0}> is never closed")]
    Unclosed(String),

    #[error("No root element found")]
    NoRoot,

    #[error("Path not found: {0}")]
    MissingPath(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Node>,
}

/// Parse markup into a tree. Comments, processing instructions and the
/// XML declaration are dropped.
pub fn parse(markup: &str) -> Result<Node, DocumentError> {
    let mut reader = Reader::from_str(markup);
    reader.config_mut().trim_text(true);

    let mut stack = vec![Node::default()];

    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(Node::from_start(&e)?),
            Event::Empty(e) => {
                let node = Node::from_start(&e)?;
                push_child(&mut stack, node);
            }
            Event::End(e) => {
                if stack.len() < 2 {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    return Err(DocumentError::UnmatchedEnd(name));
                }
                if let Some(node) = stack.pop() {
                    push_child(&mut stack, node);
                }
            }
            Event::Text(e) => {
                let raw = e.into_inner();
                let text = decode_html_entities(&String::from_utf8_lossy(&raw)).into_owned();
                append_text(&mut stack, &text);
            }
            Event::CData(e) => {
                let raw = e.into_inner();
                append_text(&mut stack, &String::from_utf8_lossy(&raw));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if stack.len() > 1 {
        let open = stack.pop().map(|n| n.name).unwrap_or_default();
        return Err(DocumentError::Unclosed(open));
    }

    let root = stack.pop().unwrap_or_default();
    if root.children.is_empty() {
        return Err(DocumentError::NoRoot);
    }
    Ok(root)
}

fn push_child(stack: &mut [Node], node: Node) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}

fn append_text(stack: &mut [Node], text: &str) {
    if let Some(current) = stack.last_mut() {
        current.text.push_str(text);
    }
}

impl Node {
    fn from_start(e: &BytesStart<'_>) -> Result<Self, DocumentError> {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();

        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = decode_html_entities(&String::from_utf8_lossy(&attr.value)).into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            ..Self::default()
        })
    }

    /// Element name; empty for the document root.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct text content of this element (child elements excluded).
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Immediate children as `(name, node)` pairs in document order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|c| (c.name.as_str(), c))
    }

    /// Resolve a dotted path such as `rss.channel`.
    pub fn child(&self, path: &str) -> Option<&Node> {
        path.split('.').try_fold(self, |node, segment| {
            node.children.iter().find(|c| c.name == segment)
        })
    }

    pub fn get_child(&self, path: &str) -> Result<&Node, DocumentError> {
        self.child(path)
            .ok_or_else(|| DocumentError::MissingPath(path.to_string()))
    }

    pub fn get_value(&self, path: &str) -> Result<&str, DocumentError> {
        self.get_child(path).map(Node::text)
    }

    pub fn get_attribute(&self, path: &str, name: &str) -> Result<&str, DocumentError> {
        self.get_child(path)?
            .attribute(name)
            .ok_or_else(|| DocumentError::MissingPath(format!("{path}@{name}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_paths() {
        let doc = parse(
            r#"<?xml version="1.0"?>
<rss version="2.0">
  <channel>
    <title>Feed</title>
  </channel>
</rss>"#,
        )
        .unwrap();

        assert_eq!(doc.name(), "");
        assert_eq!(doc.get_value("rss.channel.title").unwrap(), "Feed");
        assert_eq!(doc.get_attribute("rss", "version").unwrap(), "2.0");
    }

    #[test]
    fn test_children_keep_order_and_duplicates() {
        let doc = parse("<list><a>1</a><b>2</b><a>3</a></list>").unwrap();
        let list = doc.get_child("list").unwrap();

        let pairs: Vec<(&str, &str)> = list.children().map(|(k, n)| (k, n.text())).collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2"), ("a", "3")]);
        // Path lookup takes the first match.
        assert_eq!(list.get_value("a").unwrap(), "1");
    }

    #[test]
    fn test_missing_path_is_reported() {
        let doc = parse("<rss><channel/></rss>").unwrap();

        match doc.get_value("rss.channel.item") {
            Err(DocumentError::MissingPath(path)) => assert_eq!(path, "rss.channel.item"),
            other => panic!("expected MissingPath, got {:?}", other),
        }
        match doc.get_attribute("rss", "version") {
            Err(DocumentError::MissingPath(path)) => assert_eq!(path, "rss@version"),
            other => panic!("expected MissingPath, got {:?}", other),
        }
    }

    #[test]
    fn test_escaped_markup_in_text_is_decoded() {
        let doc = parse(
            r#"<item><description>&lt;img src="a.png" alt="x &amp;amp; y" /&gt;</description></item>"#,
        )
        .unwrap();

        assert_eq!(
            doc.get_value("item.description").unwrap(),
            r#"<img src="a.png" alt="x &amp; y" />"#
        );
    }

    #[test]
    fn test_attribute_html_entities() {
        let doc = parse(r#"<img alt="It&#39;s caf&eacute; &quot;time&quot;" />"#).unwrap();
        assert_eq!(
            doc.get_attribute("img", "alt").unwrap(),
            r#"It's café "time""#
        );
    }

    #[test]
    fn test_cdata_is_kept_verbatim() {
        let doc = parse("<d><![CDATA[<img src=\"a.png\"/> &amp;]]></d>").unwrap();
        assert_eq!(doc.get_value("d").unwrap(), "<img src=\"a.png\"/> &amp;");
    }

    #[test]
    fn test_comments_are_dropped() {
        let doc = parse("<a><!-- note --><b>x</b></a>").unwrap();
        let a = doc.get_child("a").unwrap();
        assert_eq!(a.children().count(), 1);
        assert_eq!(a.text(), "");
    }

    #[test]
    fn test_malformed_markup_fails() {
        assert!(parse("<rss><channel></rss>").is_err());
        assert!(parse("<rss><channel>").is_err());
        assert!(matches!(parse("just some text"), Err(DocumentError::NoRoot)));
        assert!(matches!(parse(""), Err(DocumentError::NoRoot)));
    }
}
