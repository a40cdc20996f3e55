//! Tokenizer for log documents.
//!
//! A log document is a flat text blob in which every line starting with
//! [`ENTRY_MARKER`] opens a new entry. There is no escaping: a body line that
//! happens to start with `#` is read as the header of a new entry.
//!
//! [`blocks`] scans the document line by line and yields one [`Block`] per
//! entry. The marker is kept on the block it introduces, so concatenating all
//! blocks in order reproduces the input text exactly.

/// Character that marks the header line of an entry.
pub const ENTRY_MARKER: char = '#';

/// A contiguous slice of a log document.
///
/// A block normally starts with an entry header line and extends up to the
/// next header or the end of the document. Text that precedes the first
/// header (for example a hand-edited file) forms a single undelimited
/// preamble block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    text: &'a str,
}

impl<'a> Block<'a> {
    /// Returns the raw text of the block, header line included.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Returns `true` if the block starts with an entry header.
    pub fn is_entry(&self) -> bool {
        self.text.starts_with(ENTRY_MARKER)
    }

    /// Returns the header line without the marker and surrounding whitespace.
    ///
    /// Preamble blocks have no header.
    pub fn header(&self) -> Option<&'a str> {
        if !self.is_entry() {
            return None;
        }
        let line = self.text.lines().next().unwrap_or_default();
        Some(line[ENTRY_MARKER.len_utf8()..].trim())
    }

    /// Returns the entry body with surrounding whitespace removed.
    ///
    /// For a preamble block this is the whole block text, trimmed.
    pub fn body(&self) -> &'a str {
        if !self.is_entry() {
            return self.text.trim();
        }
        match self.text.split_once('\n') {
            Some((_, body)) => body.trim(),
            None => "",
        }
    }
}

/// Splits a log document into blocks, in document order.
///
/// An empty document yields no blocks. The preamble block, if any, is only
/// produced when it is non-empty.
///
/// # Examples
///
/// ```
/// use devlog::document::blocks;
///
/// let doc = "# B\nentry2\n\n# A\nentry1";
/// let texts: Vec<_> = blocks(doc).iter().map(|b| b.text()).collect();
/// assert_eq!(texts, ["# B\nentry2\n\n", "# A\nentry1"]);
/// ```
pub fn blocks(content: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        if line.starts_with(ENTRY_MARKER) && offset > start {
            blocks.push(Block {
                text: &content[start..offset],
            });
            start = offset;
        }
        offset += line.len();
    }

    if offset > start {
        blocks.push(Block {
            text: &content[start..offset],
        });
    }

    blocks
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn texts(content: &str) -> Vec<&str> {
        blocks(content).iter().map(Block::text).collect()
    }

    #[test]
    fn test_empty_document_has_no_blocks() {
        assert!(blocks("").is_empty());
    }

    #[test]
    fn test_single_entry() {
        let doc = "# 1/2/2024 10:00:00 AM\nhello";
        let blocks = blocks(doc);

        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].is_entry());
        assert_eq!(blocks[0].header(), Some("1/2/2024 10:00:00 AM"));
        assert_eq!(blocks[0].body(), "hello");
    }

    #[test]
    fn test_marker_is_retained_on_each_block() {
        assert_eq!(
            texts("# B\nentry2\n\n# A\nentry1\n"),
            ["# B\nentry2\n\n", "# A\nentry1\n"]
        );
    }

    #[test]
    fn test_preamble_block() {
        let blocks = blocks("Existing file contents\n# A\nentry1");

        assert_eq!(blocks.len(), 2);
        assert!(!blocks[0].is_entry());
        assert_eq!(blocks[0].header(), None);
        assert_eq!(blocks[0].body(), "Existing file contents");
        assert!(blocks[1].is_entry());
    }

    #[test]
    fn test_marker_inside_a_line_does_not_split() {
        assert_eq!(texts("# A\nissue #42 fixed\n"), ["# A\nissue #42 fixed\n"]);
    }

    #[test]
    fn test_body_line_starting_with_marker_splits() {
        // Known limitation: no escaping of body lines.
        assert_eq!(
            texts("# A\nnotes\n# not a header\n"),
            ["# A\nnotes\n", "# not a header\n"]
        );
    }

    #[test]
    fn test_header_only_block_has_empty_body() {
        let blocks = blocks("# A");
        assert_eq!(blocks[0].header(), Some("A"));
        assert_eq!(blocks[0].body(), "");
    }

    #[test]
    fn test_body_keeps_internal_blank_lines() {
        let blocks = blocks("# A\nfirst\n\nsecond\n\n");
        assert_eq!(blocks[0].body(), "first\n\nsecond");
    }

    proptest! {
        #[test]
        fn prop_blocks_concatenate_to_document(content in "[#a-z \n]{0,64}") {
            let joined: String = blocks(&content).iter().map(Block::text).collect();
            prop_assert_eq!(joined, content);
        }

        #[test]
        fn prop_only_first_block_may_be_preamble(content in "[#a-z \n]{0,64}") {
            for block in blocks(&content).iter().skip(1) {
                prop_assert!(block.is_entry());
            }
        }
    }
}
