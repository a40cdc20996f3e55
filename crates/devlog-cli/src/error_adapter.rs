//! Error adapter for converting DevlogError to miette diagnostics.
//!
//! This module provides the bridge between the library's error type and
//! miette's report formatting used in the CLI.

use std::{fmt, io::ErrorKind};

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, GraphicalTheme};

use devlog::DevlogError;

/// Adapter giving a [`DevlogError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a DevlogError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            DevlogError::Read { .. } => "devlog::read",
            DevlogError::Write { .. } => "devlog::write",
            DevlogError::Setup { .. } => "devlog::setup",
            DevlogError::NoHomeDirectory => "devlog::home",
            DevlogError::Config(_) => "devlog::config",
            DevlogError::Io(_) => "devlog::io",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match (self.0, self.0.io_kind()) {
            (_, Some(ErrorKind::PermissionDenied)) => {
                "check the permissions of the log file and its directory"
            }
            (DevlogError::Read { .. }, Some(ErrorKind::IsADirectory)) => {
                "the log path points to a directory, not a file"
            }
            (DevlogError::NoHomeDirectory, _) => {
                "set `global_dir` in the configuration file or use -l for a local log"
            }
            (DevlogError::Config(_), _) => "fix the configuration file or pass --config",
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// Renders `err` as a miette report without colors or unicode decorations.
pub fn render_report(err: &DevlogError) -> String {
    let reporter = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut writer = String::new();
    if reporter
        .render_report(&mut writer, &ErrorAdapter(err))
        .is_err()
    {
        return err.to_string();
    }
    writer
}
