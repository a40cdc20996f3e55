//! Rendering of log documents for display.
//!
//! Documents are stored newest-first, so reverse-chronological display is the
//! raw text and chronological display reverses the entry blocks.

use crate::document::blocks;

/// Display order for a rendered log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderOrder {
    /// Oldest entry first.
    #[default]
    Forward,
    /// Newest entry first, as stored on disk.
    Reverse,
}

/// Renders `content` in the requested order.
pub fn render(content: &str, order: RenderOrder) -> String {
    match order {
        RenderOrder::Forward => render_forward(content),
        RenderOrder::Reverse => render_reverse(content),
    }
}

/// Renders entries oldest-first.
///
/// Blocks keep their own spacing; the oldest entry, which on disk is the
/// last block and has no trailing separator, gets a blank line appended so
/// that it stays separated from the entry that follows it. The result is
/// trimmed.
///
/// # Examples
///
/// ```
/// use devlog::render::render_forward;
///
/// let doc = "# B\nentry2\n\n# A\nentry1";
/// assert_eq!(render_forward(doc), "# A\nentry1\n\n# B\nentry2");
/// ```
pub fn render_forward(content: &str) -> String {
    let mut blocks = blocks(content);
    blocks.reverse();

    let mut rendered = String::with_capacity(content.len() + 2);
    for (idx, block) in blocks.iter().enumerate() {
        rendered.push_str(block.text());
        if idx == 0 {
            rendered.push_str("\n\n");
        }
    }

    rendered.trim().to_string()
}

/// Renders entries newest-first, which is the stored order.
pub fn render_reverse(content: &str) -> String {
    content.to_string()
}
