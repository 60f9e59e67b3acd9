//! `info` command

use super::{Command, write_greeting};
use crate::error::DispatchError;
use crate::options::Options;
use termcolor::WriteColor;

pub const GREETING: &str = "Hello info";

pub const OPTIONS_PREFIX: &str = "You supplied the following options: ";

/// Stand-in for the id of a companion process that this scaffold never starts
pub const PLACEHOLDER_PID: u32 = 35301;

/// Prints process ids and the options it was constructed with
#[derive(Debug, Clone)]
pub struct Info {
    options: Options,
}

impl Info {
    pub fn new(options: &Options) -> Self {
        Info {
            options: options.clone(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl Command for Info {
    fn name(&self) -> &'static str {
        "info"
    }

    fn run(&self, out: &mut dyn WriteColor) -> Result<(), DispatchError> {
        // Render first so a serialization failure leaves no partial output.
        let json = self.options.to_pretty_json()?;

        write_greeting(out, GREETING)?;
        writeln!(out, "Python process id: {}", std::process::id())?;
        writeln!(out, "NodeJS process id: {}", PLACEHOLDER_PID)?;
        writeln!(out, "{}{}", OPTIONS_PREFIX, json)?;
        Ok(())
    }
}
