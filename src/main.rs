#![forbid(unsafe_code)]

use scaffold::cli;
use scaffold::dispatch;
use scaffold::error::DispatchError;
use scaffold::logging;
use std::io::IsTerminal;
use std::process::ExitCode;
use termcolor::StandardStream;

fn main() -> ExitCode {
    // Help, version and usage errors exit from here with clap's own codes.
    let (cli, options) = match cli::parse_from(std::env::args_os()) {
        Ok(parsed) => parsed,
        Err(e) => e.exit(),
    };

    logging::init(cli.verbose);
    tracing::debug!(?options, "parsed options");

    let color = cli.color.to_termcolor(std::io::stdout().is_terminal());
    let mut stdout = StandardStream::stdout(color);

    match dispatch::dispatch(&options, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e @ DispatchError::NoCommand) => {
            eprintln!("{}", cli::usage());
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
