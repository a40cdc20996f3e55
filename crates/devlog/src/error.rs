//! Error types for devlog operations.
//!
//! A blank entry is not an error (see
//! [`EntryOutcome::Blank`](crate::EntryOutcome::Blank)), and neither is a
//! missing log file on read: it simply reads as an empty document.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for devlog operations.
#[derive(Debug, Error)]
pub enum DevlogError {
    #[error("Failed to read log file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write log file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to set up log file {}: {source}", path.display())]
    Setup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not determine the home directory for the global log")]
    NoHomeDirectory,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl DevlogError {
    /// Returns the log path involved in the failure, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } | Self::Setup { path, .. } => {
                Some(path)
            }
            Self::NoHomeDirectory | Self::Config(_) | Self::Io(_) => None,
        }
    }

    /// Returns the underlying I/O error kind, if any.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } | Self::Setup { source, .. } => {
                Some(source.kind())
            }
            Self::Io(err) => Some(err.kind()),
            Self::NoHomeDirectory | Self::Config(_) => None,
        }
    }
}
