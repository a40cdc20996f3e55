//! Dispatch of the journal flags.
//!
//! Flags are not validated against each other. Exactly one command runs per
//! invocation, picked by first match in this order: help, message, print,
//! print reverse, and interactive entry when nothing else matches.

use devlog::location::LogScope;

/// Prints usage information.
pub const HELP_FLAG: &str = "-?";
/// Selects the log in the current working directory.
pub const LOCAL_FLAG: &str = "-l";
/// Adds the following token as an entry to the local log.
pub const MESSAGE_FLAG: &str = "-m";
/// Prints the log oldest-first.
pub const PRINT_FLAG: &str = "-p";
/// Prints the log newest-first.
pub const REVERSE_PRINT_FLAG: &str = "-pr";

/// The single command an invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show usage information.
    Help,
    /// Add the given text as an entry without prompting.
    Message(String),
    /// Print the log oldest-first.
    Print,
    /// Print the log newest-first.
    PrintReverse,
    /// Read an entry from standard input.
    Interactive,
}

impl Command {
    /// Picks the command for the given flag tokens.
    ///
    /// `-m` takes the token right after it as the message, whatever it is;
    /// with nothing after it the message is empty.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let position = |flag: &str| tokens.iter().position(|t| t.as_ref() == flag);

        if position(HELP_FLAG).is_some() {
            Self::Help
        } else if let Some(idx) = position(MESSAGE_FLAG) {
            let message = tokens
                .get(idx + 1)
                .map(|t| t.as_ref().to_string())
                .unwrap_or_default();
            Self::Message(message)
        } else if position(PRINT_FLAG).is_some() {
            Self::Print
        } else if position(REVERSE_PRINT_FLAG).is_some() {
            Self::PrintReverse
        } else {
            Self::Interactive
        }
    }
}

/// Picks the log scope for the given flag tokens.
///
/// `-l` selects the local log, and so does `-m`.
pub fn scope_from_tokens<S: AsRef<str>>(tokens: &[S]) -> LogScope {
    let local = tokens
        .iter()
        .any(|t| matches!(t.as_ref(), LOCAL_FLAG | MESSAGE_FLAG));
    if local {
        LogScope::Local
    } else {
        LogScope::Global
    }
}
