#![forbid(unsafe_code)]

//! Runnable commands
//!
//! A command is built from the full options mapping right before it runs and
//! dropped afterwards. It holds no state between invocations.

pub mod hello;
pub mod info;

pub use hello::Hello;
pub use info::Info;

use crate::error::DispatchError;
use termcolor::{Color, ColorSpec, WriteColor};

/// A unit of work selected by the dispatcher
pub trait Command {
    /// Name this command is registered under
    fn name(&self) -> &'static str;

    /// Run the command, writing its output to `out`
    fn run(&self, out: &mut dyn WriteColor) -> Result<(), DispatchError>;
}

/// Write a greeting line, highlighted when the writer supports color
pub(crate) fn write_greeting(out: &mut dyn WriteColor, text: &str) -> std::io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(out, "{}", text)?;
    out.reset()?;
    writeln!(out)
}
