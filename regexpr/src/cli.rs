// regexpr/src/cli.rs
//! This file defines the command-line interface (CLI) for the regexpr application,
//! including all available commands and their arguments.
//! License: MIT OR APACHE 2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "regexpr",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Build and run regular expressions described as pattern recipes",
    long_about = "regexpr turns YAML pattern recipes, lists of descriptive builder steps such as `exactly: 4` and `digits`, into regular expressions. It can print the built expressions, filter input lines that match a recipe, or list every match with its capture groups.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `regexpr` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prints the expression and flags built from each selected recipe.
    #[command(about = "Print the expression and flags built from recipes.")]
    Build(BuildCommand),

    /// Prints the input lines that match a recipe.
    #[command(about = "Print the input lines that match a recipe.")]
    Match(MatchCommand),

    /// Prints every match of a recipe in the input, with its capture groups.
    #[command(about = "Print every match of a recipe in the input, with its capture groups.")]
    Find(FindCommand),
}

/// Where recipes come from. Built-in recipes are always loaded; a file is
/// merged on top of them.
#[derive(Parser, Debug, Clone)]
pub struct RecipeSource {
    /// Path to a YAML recipe file.
    #[arg(long = "recipes", short = 'r', value_name = "FILE", env = "REGEXPR_RECIPES", help = "Path to a YAML recipe file merged over the built-in recipes.")]
    pub recipes: Option<PathBuf>,
}

/// Arguments for the `build` command.
#[derive(Parser, Debug)]
pub struct BuildCommand {
    #[command(flatten)]
    pub source: RecipeSource,

    /// Recipe names to build (all recipes if none are given).
    #[arg(value_name = "NAME", help = "Recipe names to build; builds every recipe when omitted.")]
    pub names: Vec<String>,

    /// Print a JSON array instead of tab-separated lines.
    #[arg(long, help = "Print the built patterns as a JSON array.")]
    pub json: bool,
}

/// Arguments for the `match` command.
#[derive(Parser, Debug)]
pub struct MatchCommand {
    #[command(flatten)]
    pub source: RecipeSource,

    /// Recipe to match with.
    #[arg(value_name = "NAME", help = "Name of the recipe to match with.")]
    pub name: String,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,
}

/// Arguments for the `find` command.
#[derive(Parser, Debug)]
pub struct FindCommand {
    #[command(flatten)]
    pub source: RecipeSource,

    /// Recipe to search with.
    #[arg(value_name = "NAME", help = "Name of the recipe to search with.")]
    pub name: String,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,
}
