#![forbid(unsafe_code)]

//! Command dispatch
//!
//! Maps the options mapping to at most one command and runs it. Commands are
//! looked up in a static registry keyed by name; there is exactly one
//! constructor per name.

use crate::commands::{Command, Hello, Info};
use crate::error::DispatchError;
use crate::options::Options;
use termcolor::WriteColor;
use tracing::debug;

/// Builds a command from the full options mapping
pub type CommandFactory = fn(&Options) -> Box<dyn Command>;

/// Every command the dispatcher can run, keyed by its option name
static REGISTRY: &[(&str, CommandFactory)] = &[("hello", build_hello), ("info", build_info)];

fn build_hello(options: &Options) -> Box<dyn Command> {
    Box::new(Hello::new(options))
}

fn build_info(options: &Options) -> Box<dyn Command> {
    Box::new(Info::new(options))
}

fn entry(name: &str) -> Option<(&'static str, CommandFactory)> {
    REGISTRY
        .iter()
        .find(|(registered, _)| *registered == name)
        .copied()
}

/// Looks up the constructor registered under `name`
pub fn lookup(name: &str) -> Option<CommandFactory> {
    entry(name).map(|(_, factory)| factory)
}

/// Names of all registered commands, in registry order
pub fn registered_names() -> Vec<&'static str> {
    REGISTRY.iter().map(|(name, _)| *name).collect()
}

/// Finds the first truthy option, in key order, that names a registered
/// command
pub fn select(options: &Options) -> Option<(&'static str, CommandFactory)> {
    options
        .iter()
        .filter(|(_, value)| value.is_truthy())
        .find_map(|(key, _)| entry(key))
}

/// Selects, constructs and runs a command
///
/// Returns the name of the command that ran, or `DispatchError::NoCommand`
/// when no truthy option names a registered command.
pub fn dispatch(
    options: &Options,
    out: &mut dyn WriteColor,
) -> Result<&'static str, DispatchError> {
    let Some((name, factory)) = select(options) else {
        debug!("no registered command among truthy options");
        return Err(DispatchError::NoCommand);
    };

    debug!(command = name, "dispatching");
    let command = factory(options);
    command.run(out)?;
    debug!(command = name, "command finished");

    Ok(name)
}
