// regexpr/src/commands/mod.rs
//! Command implementations and the helpers they share.

pub mod build;
pub mod find;
pub mod matching;

use anyhow::{Context, Result};
use log::debug;
use std::io::{self, Read};
use std::path::Path;

use regexpr_core::{merge_recipes, validate_recipes, RecipeConfig};

use crate::cli::RecipeSource;

/// Built-in recipes, with the user's recipe file merged on top when given.
pub fn load_recipes(source: &RecipeSource) -> Result<RecipeConfig> {
    let defaults = RecipeConfig::load_default_recipes()?;
    let user = source
        .recipes
        .as_deref()
        .map(RecipeConfig::load_overrides_from_file)
        .transpose()?;

    let merged = merge_recipes(defaults, user);
    validate_recipes(&merged.patterns)?;
    debug!("Using {} recipes after merging.", merged.patterns.len());
    Ok(merged)
}

/// Reads the whole input from a file, or from stdin when no file is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            debug!("Reading input from file: {}", path.display());
            std::fs::read_to_string(path).with_context(|| format!("Failed to read input file {}", path.display()))
        }
        None => {
            debug!("Reading input from stdin.");
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}
