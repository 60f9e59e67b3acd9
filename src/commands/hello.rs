//! `hello` command

use super::{Command, write_greeting};
use crate::error::DispatchError;
use crate::options::Options;
use termcolor::WriteColor;

pub const GREETING: &str = "Hello, world!";

/// Prints a static greeting
#[derive(Debug, Clone, Copy, Default)]
pub struct Hello;

impl Hello {
    /// The greeting ignores every option, including its own flag.
    pub fn new(_options: &Options) -> Self {
        Hello
    }
}

impl Command for Hello {
    fn name(&self) -> &'static str {
        "hello"
    }

    fn run(&self, out: &mut dyn WriteColor) -> Result<(), DispatchError> {
        write_greeting(out, GREETING)?;
        Ok(())
    }
}
