//! Output sinks for user-facing messages.
//!
//! Status lines, rendered logs and help text are meant for the person at the
//! terminal, not for diagnostics, so they go through an [`OutputSink`] handed
//! to the [`Journal`](crate::Journal) instead of the `log` facade.

use std::{
    io::{self, Write},
    sync::{Arc, Mutex, PoisonError},
};

/// Channel a message was sent on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Regular output: statuses, rendered logs, help.
    Info,
    /// Failures reported to the user.
    Error,
}

/// Destination for user-facing messages.
pub trait OutputSink {
    /// Emits an informational message.
    fn info(&self, message: &str);

    /// Emits an error message.
    fn error(&self, message: &str);
}

/// Writes info messages to stdout and errors to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdioSink;

impl OutputSink for StdioSink {
    fn info(&self, message: &str) {
        // A closed stdout (e.g. `devlog -p | head`) is not worth a panic.
        let _ = writeln!(io::stdout().lock(), "{message}");
    }

    fn error(&self, message: &str) {
        let _ = writeln!(io::stderr().lock(), "{message}");
    }
}

/// Records messages in memory.
///
/// Clones share the same buffer, so a test can keep one handle and give
/// another to the code under test.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    messages: Arc<Mutex<Vec<(Channel, String)>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every recorded message in emission order.
    pub fn messages(&self) -> Vec<(Channel, String)> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the messages recorded on `channel`.
    pub fn on(&self, channel: Channel) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, m)| m)
            .collect()
    }

    /// Returns the info messages.
    pub fn infos(&self) -> Vec<String> {
        self.on(Channel::Info)
    }

    /// Returns the error messages.
    pub fn errors(&self) -> Vec<String> {
        self.on(Channel::Error)
    }

    fn push(&self, channel: Channel, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((channel, message.to_string()));
    }
}

impl OutputSink for MemorySink {
    fn info(&self, message: &str) {
        self.push(Channel::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(Channel::Error, message);
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &S {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}
