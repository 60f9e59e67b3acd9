#![forbid(unsafe_code)]

//! Scaffold: a minimal command-dispatch CLI
//!
//! Arguments are parsed into a flat options mapping, and the dispatcher runs
//! the one registered command whose name is set in that mapping.

pub mod cli;
pub mod commands;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod options;
