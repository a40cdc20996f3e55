//! devlog - a timestamped developer journal kept in a single text file.
//!
//! New entries are prepended to the log, so the file reads newest-first.
//! Each entry is a `#` header line carrying a localized timestamp followed by
//! free text. The log can be printed oldest-first or newest-first.
//!
//! The text-level rules live in [`writer`] (composing entries) and [`render`]
//! (ordering them for display). [`Journal`] ties them to a log file and an
//! [`OutputSink`](sink::OutputSink) for user-facing messages.

pub mod clock;
pub mod config;
pub mod document;
pub mod location;
pub mod render;
pub mod sink;
pub mod store;
pub mod writer;

mod error;

pub use error::DevlogError;

use std::path::{Path, PathBuf};

use log::{debug, info};

use clock::{Clock, SystemClock, TimestampFormat};
use location::{LogLocation, LogScope};
use render::RenderOrder;
use sink::{OutputSink, StdioSink};
use store::LogFile;
use writer::{EntryWriter, Submission};

/// Name of the executable, used in hints shown to the user.
pub const PROGRAM_NAME: &str = "devlog";

/// Status shown when a submission is empty after trimming.
pub const BLANK_ENTRY_MESSAGE: &str = "\nIgnoring blank log entry.";

/// Outcome of [`Journal::add_entry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The submission was blank; the log was not touched.
    Blank,
    /// The entry was written to the log at `path`.
    Saved { path: PathBuf },
}

/// Everything a [`Journal`] needs: where the log is, how to stamp entries,
/// and where to send user-facing messages.
pub struct JournalConfig {
    location: LogLocation,
    clock: Box<dyn Clock>,
    format: TimestampFormat,
    sink: Box<dyn OutputSink>,
}

impl JournalConfig {
    /// Creates a configuration for `location` using the system clock, the
    /// environment's locale and standard output.
    pub fn new(location: LogLocation) -> Self {
        Self {
            location,
            clock: Box::new(SystemClock),
            format: TimestampFormat::from_env(),
            sink: Box::new(StdioSink),
        }
    }

    /// Replaces the clock used to stamp entries.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replaces the timestamp format.
    pub fn with_format(mut self, format: TimestampFormat) -> Self {
        self.format = format;
        self
    }

    /// Replaces the output sink.
    pub fn with_sink(mut self, sink: impl OutputSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }
}

/// A journal bound to one log file.
///
/// # Examples
///
/// ```rust,no_run
/// use devlog::{
///     Journal, JournalConfig,
///     location::{LogLocation, LogScope},
/// };
///
/// let location = LogLocation::new("/tmp/devlog.md", LogScope::Local);
/// let journal = Journal::new(JournalConfig::new(location));
///
/// journal.setup().expect("Failed to create log");
/// journal.add_entry("Fixed the flaky test").expect("Failed to save entry");
/// journal.print_log().expect("Failed to print log");
/// ```
pub struct Journal {
    location: LogLocation,
    file: LogFile,
    writer: EntryWriter,
    sink: Box<dyn OutputSink>,
}

impl Journal {
    /// Creates a journal from its configuration.
    pub fn new(config: JournalConfig) -> Self {
        let JournalConfig {
            location,
            clock,
            format,
            sink,
        } = config;

        Self {
            file: LogFile::new(location.path()),
            location,
            writer: EntryWriter::new(clock, format),
            sink,
        }
    }

    /// Returns the log location.
    pub fn location(&self) -> &LogLocation {
        &self.location
    }

    /// Returns the log file path.
    pub fn path(&self) -> &Path {
        self.location.path()
    }

    /// Returns the sink receiving user-facing messages.
    pub fn sink(&self) -> &dyn OutputSink {
        self.sink.as_ref()
    }

    /// Creates the log file (and its directory) if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`DevlogError::Setup`] if the file cannot be created.
    pub fn setup(&self) -> Result<(), DevlogError> {
        self.file.ensure_exists()
    }

    /// Adds `raw_text` as the newest entry.
    ///
    /// Blank input leaves the log untouched and reports
    /// [`BLANK_ENTRY_MESSAGE`]. Otherwise the entry is prepended and the
    /// saved path is reported together with the command that prints the log.
    ///
    /// # Errors
    ///
    /// Returns [`DevlogError::Read`] or [`DevlogError::Write`] if the log
    /// cannot be read or written. No success status is emitted in that case.
    pub fn add_entry(&self, raw_text: &str) -> Result<EntryOutcome, DevlogError> {
        // Checked before reading so a blank entry never touches the file.
        if raw_text.trim().is_empty() {
            self.sink.info(BLANK_ENTRY_MESSAGE);
            return Ok(EntryOutcome::Blank);
        }

        let existing = self.file.read()?;
        let content = match self.writer.submit(raw_text, &existing) {
            Submission::Saved { content } => content,
            Submission::Blank => {
                self.sink.info(BLANK_ENTRY_MESSAGE);
                return Ok(EntryOutcome::Blank);
            }
        };

        self.file.write(&content)?;

        info!(
            path = self.path().display().to_string(),
            scope:% = self.location.scope();
            "Entry saved"
        );
        self.sink.info(&saved_message(&self.location));

        Ok(EntryOutcome::Saved {
            path: self.path().to_path_buf(),
        })
    }

    /// Prints the log oldest-first.
    ///
    /// # Errors
    ///
    /// Returns [`DevlogError::Read`] if the log cannot be read.
    pub fn print_log(&self) -> Result<(), DevlogError> {
        self.print(RenderOrder::Forward)
    }

    /// Prints the log newest-first.
    ///
    /// # Errors
    ///
    /// Returns [`DevlogError::Read`] if the log cannot be read.
    pub fn print_log_reverse(&self) -> Result<(), DevlogError> {
        self.print(RenderOrder::Reverse)
    }

    /// Prints the log in `order`. An empty log prints nothing.
    ///
    /// # Errors
    ///
    /// Returns [`DevlogError::Read`] if the log cannot be read.
    pub fn print(&self, order: RenderOrder) -> Result<(), DevlogError> {
        let content = self.file.read()?;
        let rendered = render::render(&content, order);

        if rendered.trim().is_empty() {
            debug!(path = self.path().display().to_string(); "Log is empty, nothing to print");
            return Ok(());
        }

        self.sink.info(&rendered);
        Ok(())
    }
}

/// Returns the command that prints a log of the given scope.
pub fn print_hint(scope: LogScope) -> String {
    match scope {
        LogScope::Global => format!("{PROGRAM_NAME} -p"),
        LogScope::Local => format!("{PROGRAM_NAME} -p -l"),
    }
}

/// Returns the status shown after an entry was saved to `location`.
pub fn saved_message(location: &LogLocation) -> String {
    format!(
        "\nLog saved to {}\nType \"{}\" to print the log",
        location.path().display(),
        print_hint(location.scope())
    )
}
