#![forbid(unsafe_code)]

//! Command-line argument definitions
//!
//! clap owns the usage grammar. After parsing, the command definition is
//! walked against the matches so that every key the usage declares ends up in
//! the flat [`Options`] mapping, present or not.

use crate::options::{OptionValue, Options};
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum};
use std::ffi::OsString;

const AFTER_HELP: &str = "\
Examples:
  scaffold hello
  scaffold info --color never

Help:
  Run `scaffold <COMMAND> --help` for the options of a single command.";

/// Top-level CLI
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "scaffold", version, about, long_about = None)]
#[command(disable_help_subcommand = true, after_help = AFTER_HELP)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// When to colorize output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Subcommands known to the parser
///
/// Every variant here must have a matching entry in the dispatch registry.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    /// Print a greeting
    Hello,
    /// Print process information and the parsed options
    Info,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve against whether the target stream is a terminal
    ///
    /// termcolor's own `Auto` only looks at `TERM`/`NO_COLOR`, so piped output
    /// is downgraded here.
    pub fn to_termcolor(self, is_terminal: bool) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Auto if !is_terminal => termcolor::ColorChoice::Never,
            ColorChoice::Auto => termcolor::ColorChoice::Auto,
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}

/// Parse `args` (including the binary name) into the typed CLI and its
/// flattened options mapping
///
/// Help, version and usage errors come back as `clap::Error`; calling
/// `exit()` on it prints the appropriate text and exit code.
pub fn parse_from<I, T>(args: I) -> Result<(Cli, Options), clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut command = Cli::command();
    let matches = command.try_get_matches_from_mut(args)?;
    let cli = Cli::from_arg_matches(&matches)?;

    command.build();
    let options = collect_options(&command, &matches);

    Ok((cli, options))
}

/// Usage line for the top-level command
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

/// Flatten matches into an options mapping keyed by the usage definition
fn collect_options(command: &clap::Command, matches: &ArgMatches) -> Options {
    let mut entries: Vec<(String, OptionValue)> = Vec::new();

    for arg in command.get_arguments() {
        let id = arg.get_id().as_str();
        let key = match arg.get_long() {
            Some(long) => format!("--{}", long),
            None => id.to_string(),
        };

        let value = match arg.get_action() {
            ArgAction::SetTrue => OptionValue::Bool(matches.get_flag(id)),
            ArgAction::Set | ArgAction::Append => raw_value(matches, id),
            // Help and version exit inside the parser, so reaching here means
            // they were not given.
            _ => OptionValue::Bool(false),
        };

        entries.push((key, value));
    }

    let selected = matches.subcommand_name();
    for sub in command.get_subcommands() {
        let name = sub.get_name();
        entries.push((name.to_string(), OptionValue::Bool(selected == Some(name))));
    }

    entries.into_iter().collect()
}

fn raw_value(matches: &ArgMatches, id: &str) -> OptionValue {
    matches
        .get_raw(id)
        .and_then(|mut values| values.next())
        .map(|value| OptionValue::Str(value.to_string_lossy().into_owned()))
        .unwrap_or(OptionValue::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_hello_options() {
        let (cli, options) = parse_from(["scaffold", "hello"]).unwrap();
        assert_eq!(cli.command, Some(CliCommand::Hello));

        assert_eq!(options.get("hello"), Some(&OptionValue::Bool(true)));
        assert_eq!(options.get("info"), Some(&OptionValue::Bool(false)));
        assert_eq!(options.get("--help"), Some(&OptionValue::Bool(false)));
        assert_eq!(options.get("--version"), Some(&OptionValue::Bool(false)));
        assert_eq!(options.get("--verbose"), Some(&OptionValue::Bool(false)));
        assert_eq!(
            options.get("--color"),
            Some(&OptionValue::Str("auto".to_string()))
        );
    }

    #[test]
    fn test_every_usage_key_is_present() {
        let (_, options) = parse_from(["scaffold"]).unwrap();
        let keys: Vec<&str> = options.keys().collect();
        assert_eq!(
            keys,
            vec!["--color", "--help", "--verbose", "--version", "hello", "info"]
        );
        assert!(options.iter().all(|(k, v)| k == "--color" || !v.is_truthy()));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let (cli, options) =
            parse_from(["scaffold", "info", "--verbose", "--color", "never"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(options.is_truthy("--verbose"));
        assert!(options.is_truthy("info"));
        assert_eq!(
            options.get("--color"),
            Some(&OptionValue::Str("never".to_string()))
        );
    }

    #[test]
    fn test_help_and_version_are_parser_exits() {
        let err = parse_from(["scaffold", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let err = parse_from(["scaffold", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_unknown_subcommand_is_usage_error() {
        let err = parse_from(["scaffold", "goodbye"]).unwrap_err();
        assert!(err.use_stderr());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_help_subcommand_is_disabled() {
        let err = parse_from(["scaffold", "help"]).unwrap_err();
        assert_ne!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_auto_color_off_when_piped() {
        assert_eq!(
            ColorChoice::Auto.to_termcolor(false),
            termcolor::ColorChoice::Never
        );
        assert_eq!(
            ColorChoice::Auto.to_termcolor(true),
            termcolor::ColorChoice::Auto
        );
        assert_eq!(
            ColorChoice::Always.to_termcolor(false),
            termcolor::ColorChoice::Always
        );
    }

    #[test]
    fn test_help_lists_examples() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("Examples:"));
        assert!(help.contains("scaffold hello"));
        assert!(help.contains("Help:"));
    }

    #[test]
    fn test_usage_mentions_binary() {
        assert!(usage().contains("scaffold"));
    }
}
