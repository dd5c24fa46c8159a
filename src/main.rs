mod book;
mod cli;
mod clipboard;
mod content;
mod extract;
mod nav;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match extract::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // All reporting goes to stdout; the message is the whole surface.
            println!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
