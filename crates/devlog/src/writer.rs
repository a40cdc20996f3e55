//! Composition of new log entries.
//!
//! [`EntryWriter`] works purely on text: it takes the raw submission and the
//! current document and returns the document to persist. Reading and writing
//! the file is left to [`LogFile`](crate::store::LogFile).

use log::debug;

use crate::{
    clock::{Clock, SystemClock, TimestampFormat},
    document::ENTRY_MARKER,
};

/// Result of submitting text to an [`EntryWriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The text was empty after trimming; nothing must be written.
    Blank,
    /// The full document to persist, new entry first.
    Saved { content: String },
}

impl Submission {
    /// Returns the new document content, or `None` for a blank submission.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Blank => None,
            Self::Saved { content } => Some(content),
        }
    }
}

/// Builds timestamped entries and prepends them to a log document.
pub struct EntryWriter {
    clock: Box<dyn Clock>,
    format: TimestampFormat,
}

impl EntryWriter {
    /// Creates a writer stamping entries with `clock` in the given format.
    pub fn new(clock: Box<dyn Clock>, format: TimestampFormat) -> Self {
        Self { clock, format }
    }

    /// Returns the header text (without the marker) for an entry made now.
    pub fn timestamp(&self) -> String {
        self.format.format(&self.clock.now())
    }

    /// Prepends `raw_text` as a new entry to `existing`.
    ///
    /// The body is `raw_text` with outer whitespace removed; blank lines
    /// inside it are kept. Whitespace-only input yields
    /// [`Submission::Blank`]. The returned document has no leading or
    /// trailing whitespace.
    pub fn submit(&self, raw_text: &str, existing: &str) -> Submission {
        let body = raw_text.trim();
        if body.is_empty() {
            debug!(raw_len = raw_text.len(); "Ignoring blank submission");
            return Submission::Blank;
        }

        let mut content = format!("{ENTRY_MARKER} {}\n{body}\n\n", self.timestamp());
        if !existing.is_empty() {
            content.push_str(existing);
            content.push('\n');
        }

        debug!(
            body_len = body.len(),
            existing_len = existing.len();
            "Composed new entry"
        );

        Submission::Saved {
            content: content.trim().to_string(),
        }
    }
}

impl Default for EntryWriter {
    fn default() -> Self {
        Self::new(Box::new(SystemClock), TimestampFormat::from_env())
    }
}

impl std::fmt::Debug for EntryWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryWriter")
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{clock::FixedClock, document::blocks};

    const HEADER: &str = "# 03/09/24 14:05:07";

    fn writer() -> EntryWriter {
        let clock = FixedClock::at(2024, 3, 9, 14, 5, 7).expect("valid local time");
        EntryWriter::new(Box::new(clock), TimestampFormat::default())
    }

    fn saved(submission: Submission) -> String {
        match submission {
            Submission::Saved { content } => content,
            Submission::Blank => panic!("Expected a saved submission"),
        }
    }

    #[test]
    fn test_first_entry() {
        let content = saved(writer().submit("New data", ""));
        assert_eq!(content, format!("{HEADER}\nNew data"));
    }

    #[test]
    fn test_entry_is_prepended() {
        let content = saved(writer().submit("New data", "Existing file contents"));
        assert_eq!(
            content,
            format!("{HEADER}\nNew data\n\nExisting file contents")
        );
    }

    #[test]
    fn test_blank_input_is_ignored() {
        assert_eq!(writer().submit("   \n  ", "Existing"), Submission::Blank);
        assert_eq!(writer().submit("", ""), Submission::Blank);
        assert_eq!(writer().submit("\n\n\n\t", ""), Submission::Blank);
    }

    #[test]
    fn test_outer_whitespace_is_trimmed() {
        let content = saved(writer().submit("\n\n   foo\n   \n  ", "Existing file contents"));
        assert!(content.contains("foo\n\nExisting file contents"));
        assert_eq!(content, format!("{HEADER}\nfoo\n\nExisting file contents"));
    }

    #[test]
    fn test_internal_blank_lines_are_kept() {
        let content = saved(writer().submit("  first\n\n\nsecond  \n", ""));
        assert_eq!(content, format!("{HEADER}\nfirst\n\n\nsecond"));
    }

    #[test]
    fn test_trailing_whitespace_of_existing_content_is_trimmed() {
        let content = saved(writer().submit("new", "# old\nbody\n\n\n"));
        assert_eq!(content, format!("{HEADER}\nnew\n\n# old\nbody"));
    }

    #[test]
    fn test_submission_content() {
        assert_eq!(Submission::Blank.content(), None);
        let submission = writer().submit("x", "");
        assert_eq!(submission.content(), Some(format!("{HEADER}\nx").as_str()));
    }

    proptest! {
        #[test]
        fn prop_whitespace_is_always_blank(raw in "[ \t\n\r]{0,32}", existing in ".{0,32}") {
            prop_assert_eq!(writer().submit(&raw, &existing), Submission::Blank);
        }

        #[test]
        fn prop_first_entry_holds_trimmed_body(raw in "[a-z \n]{0,16}[a-z][a-z \n]{0,16}") {
            let content = saved(writer().submit(&raw, ""));
            let blocks = blocks(&content);

            prop_assert_eq!(blocks.len(), 1);
            prop_assert_eq!(blocks[0].body(), raw.trim());
        }

        #[test]
        fn prop_later_entries_come_first(
            first in "[a-z]{1,12}",
            second in "[a-z]{1,12}",
        ) {
            let writer = writer();
            let after_first = saved(writer.submit(&format!("one {first}"), ""));
            let after_second = saved(writer.submit(&format!("two {second}"), &after_first));
            let blocks = blocks(&after_second);

            prop_assert_eq!(blocks.len(), 2);
            prop_assert_eq!(blocks[0].body(), format!("two {second}"));
            prop_assert_eq!(blocks[1].body(), format!("one {first}"));
        }
    }
}
