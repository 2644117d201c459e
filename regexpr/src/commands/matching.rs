// regexpr/src/commands/matching.rs
//! `match` command: line filter over a recipe.

use anyhow::Result;
use log::{debug, info};
use std::io::Write;

use crate::cli::MatchCommand;
use crate::commands::{load_recipes, read_input};

/// Writes every input line the recipe matches. Returns whether any line matched.
pub fn run_match<W: Write>(cmd: &MatchCommand, out: &mut W) -> Result<bool> {
    let config = load_recipes(&cmd.source)?;
    let expr = config.build(&cmd.name)?;
    debug!("Matching lines against {}", expr);

    let input = read_input(cmd.input_file.as_deref())?;
    let mut matched = 0usize;
    for line in input.lines() {
        if expr.matches(line)? {
            writeln!(out, "{}", line)?;
            matched += 1;
        }
    }

    info!("{} line(s) matched recipe '{}'.", matched, cmd.name);
    Ok(matched > 0)
}
