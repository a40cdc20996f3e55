//! CLI logic for the devlog journal.
//!
//! [`run`] resolves configuration and the log location from the process
//! environment, then [`execute`] performs the one command picked from the
//! journal flags.

pub mod error_adapter;

mod args;
mod command;
mod config;
mod help;
mod input;

pub use args::Args;
pub use command::{
    Command, HELP_FLAG, LOCAL_FLAG, MESSAGE_FLAG, PRINT_FLAG, REVERSE_PRINT_FLAG,
    scope_from_tokens,
};
pub use config::{ConfigError, load_config, system_config_path};
pub use help::{help_lines, show_help};
pub use input::{InputChannel, InputEvent};

use std::{
    env,
    io::{self, BufReader},
};

use log::{debug, info, warn};

use devlog::{
    DevlogError, Journal, JournalConfig,
    config::AppConfig,
    location::{LogLocation, LogScope},
};

/// Run the devlog CLI application
///
/// Loads the configuration, resolves the log for the current directory and
/// executes the command selected by the journal flags, reading an entry from
/// standard input when no flag selects anything else.
///
/// # Errors
///
/// Returns `DevlogError` for:
/// - Configuration loading errors
/// - A missing home directory for the global log
/// - Log file setup, read or write errors
/// - Terminal I/O errors during interactive input
pub fn run(args: &Args) -> Result<(), DevlogError> {
    let app_config = load_config(args.config.as_ref())?;
    let cwd = env::current_dir()?;

    let command = Command::from_tokens(args.tokens.as_slice());
    let scope = scope_from_tokens(args.tokens.as_slice());
    let journal = open_journal(&app_config, scope, &cwd)?;

    info!(
        command:? = command,
        path = journal.path().display().to_string();
        "Running command"
    );

    execute(&command, &journal, || {
        capture_stdin(&journal, app_config.prompt())
    })
}

/// Builds the journal for `scope` with the configured timestamp locale and
/// standard output.
///
/// # Errors
///
/// Returns [`DevlogError::NoHomeDirectory`] if the global log cannot be
/// located.
pub fn open_journal(
    app_config: &AppConfig,
    scope: LogScope,
    cwd: &std::path::Path,
) -> Result<Journal, DevlogError> {
    let location = LogLocation::resolve(scope, cwd, app_config)?;
    let config = JournalConfig::new(location).with_format(app_config.timestamp_format());
    Ok(Journal::new(config))
}

/// Execute one command against `journal`.
///
/// The log is bootstrapped first, whatever the command. `capture` supplies
/// the entry text for [`Command::Interactive`] and is not called otherwise.
///
/// # Errors
///
/// Returns `DevlogError` if the log cannot be set up, read or written, or if
/// `capture` fails.
pub fn execute<F>(command: &Command, journal: &Journal, capture: F) -> Result<(), DevlogError>
where
    F: FnOnce() -> io::Result<String>,
{
    journal.setup()?;

    match command {
        Command::Help => {
            show_help(journal.sink(), &journal.path().display().to_string());
        }
        Command::Message(message) => {
            journal.add_entry(message)?;
        }
        Command::Print => journal.print_log()?,
        Command::PrintReverse => journal.print_log_reverse()?,
        Command::Interactive => {
            let text = capture()?;
            journal.add_entry(&text)?;
        }
    }

    debug!("Command finished");
    Ok(())
}

/// Reads an entry from standard input until end of input or Ctrl+C.
fn capture_stdin(journal: &Journal, prompt: &str) -> io::Result<String> {
    journal.sink().info(&format!(
        "Add log entry to {}: (press Ctrl+C when finished)",
        journal.path().display()
    ));

    let channel = InputChannel::spawn(BufReader::new(io::stdin()));
    let closer = channel.closer();
    if let Err(err) = ctrlc::set_handler(move || {
        let _ = closer.send(InputEvent::Closed);
    }) {
        warn!(err:%; "Failed to install Ctrl+C handler, input ends at end of file only");
    }

    channel.capture(&mut io::stdout(), prompt)
}
