// regexpr/src/commands/find.rs
//! `find` command: lists every match of a recipe.

use anyhow::Result;
use log::{debug, info};
use std::io::Write;

use crate::cli::FindCommand;
use crate::commands::{load_recipes, read_input};

/// Writes one line per match: the matched text, then each capture group,
/// tab-separated. Returns whether anything matched.
pub fn run_find<W: Write>(cmd: &FindCommand, out: &mut W) -> Result<bool> {
    let config = load_recipes(&cmd.source)?;
    let expr = config.build(&cmd.name)?;
    debug!("Searching input with {}", expr);

    let input = read_input(cmd.input_file.as_deref())?;
    let found = expr.find_all(&input)?;
    for groups in &found {
        writeln!(out, "{}", groups.join("\t"))?;
    }

    info!("Found {} match(es) for recipe '{}'.", found.len(), cmd.name);
    Ok(!found.is_empty())
}
