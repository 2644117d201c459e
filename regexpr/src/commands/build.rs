// regexpr/src/commands/build.rs
//! `build` command: prints the expressions built from recipes.

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::io::Write;

use regexpr_core::RegExpr;

use crate::cli::BuildCommand;
use crate::commands::load_recipes;

/// One built recipe as printed by `build --json`.
#[derive(Debug, Serialize)]
pub struct BuiltPattern {
    pub name: String,
    pub expression: String,
    pub flags: String,
}

impl BuiltPattern {
    fn new(name: String, expr: &RegExpr) -> Self {
        Self {
            name,
            expression: expr.expression().to_string(),
            flags: expr.flags().to_string(),
        }
    }
}

pub fn run_build<W: Write>(cmd: &BuildCommand, out: &mut W) -> Result<()> {
    let config = load_recipes(&cmd.source)?;

    let built = if cmd.names.is_empty() {
        config.build_all()?
    } else {
        cmd.names
            .iter()
            .map(|name| Ok((name.clone(), config.build(name)?)))
            .collect::<Result<Vec<_>>>()?
    };
    info!("Built {} pattern(s).", built.len());

    if cmd.json {
        let patterns: Vec<BuiltPattern> = built
            .into_iter()
            .map(|(name, expr)| BuiltPattern::new(name, &expr))
            .collect();
        let json = serde_json::to_string_pretty(&patterns).context("Failed to serialize built patterns")?;
        writeln!(out, "{}", json)?;
    } else {
        for (name, expr) in &built {
            writeln!(out, "{}\t{}", name, expr)?;
        }
    }

    Ok(())
}
