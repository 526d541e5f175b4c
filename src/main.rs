mod cache;
mod cli;
mod config;
mod context;
mod convert;
mod decompose_cmd;
mod forecast_cmd;
mod logging;
mod output;
mod summary_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Decompose(args) => decompose_cmd::run(args),
        Command::Forecast(args) => forecast_cmd::run(args),
        Command::Summary(args) => summary_cmd::run(args),
    }
}
