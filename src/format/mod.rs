mod wrap;

pub use wrap::{wrap, wrap_default, DEFAULT_WIDTH};

use crate::domain::FeedItem;

/// How an item is laid out on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `alt -- guid` on a single line.
    OneLine,
    /// Wrapped alt text with the guid attributed underneath.
    Fortune { width: usize, hard_wrap: bool },
}

impl Default for Layout {
    fn default() -> Self {
        Self::Fortune {
            width: DEFAULT_WIDTH,
            hard_wrap: false,
        }
    }
}

/// Render the alt text of `item`, newline terminated.
pub fn render(item: &FeedItem, layout: Layout) -> String {
    match layout {
        Layout::OneLine => format!("{} -- {}\n", item.image_alt(), item.guid()),
        Layout::Fortune { width, hard_wrap } => format!(
            "{}\n\t\t-- {}\n",
            wrap(item.image_alt(), width, hard_wrap),
            item.guid()
        ),
    }
}
