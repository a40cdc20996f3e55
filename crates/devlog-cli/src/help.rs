//! Usage text.

use devlog::{PROGRAM_NAME, sink::OutputSink};

use crate::command::{HELP_FLAG, LOCAL_FLAG, MESSAGE_FLAG, PRINT_FLAG, REVERSE_PRINT_FLAG};

/// Returns the usage lines, one sink message each.
pub fn help_lines(log_path: &str) -> Vec<String> {
    let name = PROGRAM_NAME;
    vec![
        format!("\nUsage: {name} <options>\n"),
        format!("{name}           Create a log entry in the global devlog"),
        format!("{name} {HELP_FLAG}        This help information"),
        format!("{name} {LOCAL_FLAG}        Create a log entry in the local devlog in the current directory"),
        format!("{name} {MESSAGE_FLAG} \"msg\"  Add \"msg\" to the devlog in the current directory"),
        format!("{name} {PRINT_FLAG}        Print the log from oldest-to-newest"),
        format!("{name} {REVERSE_PRINT_FLAG}       Print the log from newest-to-oldest\n"),
        format!("Global log location: {log_path}"),
    ]
}

/// Writes the usage text to `sink`.
pub fn show_help(sink: &dyn OutputSink, log_path: &str) {
    for line in help_lines(log_path) {
        sink.info(&line);
    }
}
