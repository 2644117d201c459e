// regexpr/src/main.rs
//! regexpr entry point.
//!
//! Exit status: 0 when the command succeeded (and, for `match` and `find`,
//! found something), 1 when nothing matched, 2 on error.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::io::{self, Write};
use std::process::ExitCode;

use regexpr::cli::{Cli, Commands};
use regexpr::commands::{build::run_build, find::run_find, matching::run_match};
use regexpr::logger;

fn run(cli: &Cli) -> Result<bool> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let found = match &cli.command {
        Commands::Build(cmd) => {
            run_build(cmd, &mut out)?;
            true
        }
        Commands::Match(cmd) => run_match(cmd, &mut out)?,
        Commands::Find(cmd) => run_find(cmd, &mut out)?,
    };

    out.flush()?;
    Ok(found)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if cli.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(2)
        }
    }
}
