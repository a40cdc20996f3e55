//! Command-line argument definitions for the devlog CLI.
//!
//! Only the ambient options (logging, configuration) are real clap options.
//! The journal commands keep their historical single-dash spellings (`-?`,
//! `-m`, `-pr`, ...), which clap cannot express as flags, so they are
//! collected verbatim into [`Args::tokens`] and dispatched by
//! [`Command::from_tokens`](crate::Command::from_tokens).

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the devlog journal
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Path to configuration file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Journal flags: -? | -l | -m "msg" | -p | -pr
    #[arg(
        value_name = "FLAGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub tokens: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("devlog").chain(argv.iter().copied()))
            .expect("arguments parse")
    }

    #[test]
    fn test_no_arguments() {
        let args = parse(&[]);
        assert!(args.tokens.is_empty());
        assert_eq!(args.log_level, "warn");
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_legacy_flags_are_collected_verbatim() {
        let args = parse(&["-m", "my message", "-p"]);
        assert_eq!(args.tokens, ["-m", "my message", "-p"]);
    }

    #[test]
    fn test_clustered_looking_flags_stay_whole() {
        assert_eq!(parse(&["-pr"]).tokens, ["-pr"]);
        assert_eq!(parse(&["-?"]).tokens, ["-?"]);
        assert_eq!(parse(&["-l", "-p"]).tokens, ["-l", "-p"]);
    }

    #[test]
    fn test_ambient_options_before_flags() {
        let args = parse(&["--log-level", "debug", "--config", "devlog.toml", "-p", "-l"]);
        assert_eq!(args.log_level, "debug");
        assert_eq!(args.config, Some(PathBuf::from("devlog.toml")));
        assert_eq!(args.tokens, ["-p", "-l"]);
    }

    #[test]
    fn test_unknown_tokens_are_kept_for_dispatch() {
        let args = parse(&["-?", "-other args do not matter", "-p"]);
        assert_eq!(args.tokens, ["-?", "-other args do not matter", "-p"]);
    }
}
