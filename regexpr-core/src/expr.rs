//! The finalized `(expression, flags)` pair and its engine delegation methods.
//!
//! License: MIT OR APACHE 2.0

use fancy_regex::{Captures, Regex};
use std::fmt;
use std::sync::Arc;

use crate::compiler::get_or_compile;
use crate::config::EngineConfig;
use crate::errors::RegExprError;
use crate::flags::{Flag, Flags};

/// An immutable expression with its matching options.
///
/// Produced by [`RegExprBuilder::build`](crate::RegExprBuilder::build). Later
/// changes to the builder never affect a `RegExpr` that was already produced.
/// Matching compiles lazily through the shared pattern cache; engine errors
/// are returned unchanged inside [`RegExprError`].
#[derive(Debug, Clone)]
pub struct RegExpr {
    expression: String,
    flags: Flags,
    engine: EngineConfig,
}

impl PartialEq for RegExpr {
    fn eq(&self, other: &Self) -> bool {
        self.expression == other.expression && self.flags == other.flags
    }
}

impl Eq for RegExpr {}

impl RegExpr {
    pub fn new(expression: impl Into<String>, flags: Flags) -> Self {
        Self {
            expression: expression.into(),
            flags,
            engine: EngineConfig::default(),
        }
    }

    /// Uses these engine limits when compiling.
    pub fn with_engine_config(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn engine_config(&self) -> &EngineConfig {
        &self.engine
    }

    pub fn compile(&self) -> Result<Arc<Regex>, RegExprError> {
        get_or_compile(&self.expression, self.flags, &self.engine)
    }

    /// True when the expression matches somewhere in `input`.
    pub fn matches(&self, input: &str) -> Result<bool, RegExprError> {
        let regex = self.compile()?;
        regex.is_match(input).map_err(|source| self.runtime_error(source))
    }

    /// The first match followed by every capturing group in number order.
    /// Groups that did not participate are empty strings. Empty when nothing
    /// matches.
    pub fn find_in(&self, input: &str) -> Result<Vec<String>, RegExprError> {
        let regex = self.compile()?;
        let captures = regex.captures(input).map_err(|source| self.runtime_error(source))?;
        Ok(captures.map(|caps| capture_texts(&caps)).unwrap_or_default())
    }

    /// Same as [`find_in`](Self::find_in).
    pub fn exec(&self, input: &str) -> Result<Vec<String>, RegExprError> {
        self.find_in(input)
    }

    /// Every non-overlapping match, each shaped like [`find_in`](Self::find_in).
    pub fn find_all(&self, input: &str) -> Result<Vec<Vec<String>>, RegExprError> {
        let regex = self.compile()?;
        regex
            .captures_iter(input)
            .map(|caps| {
                caps.map(|caps| capture_texts(&caps))
                    .map_err(|source| self.runtime_error(source))
            })
            .collect()
    }

    /// Text captured by the named group in the first match.
    pub fn named_group(&self, input: &str, name: &str) -> Result<Option<String>, RegExprError> {
        let regex = self.compile()?;
        let captures = regex.captures(input).map_err(|source| self.runtime_error(source))?;
        Ok(captures.and_then(|caps| caps.name(name).map(|m| m.as_str().to_string())))
    }

    /// Replaces the first match with `callback(matched_text)`, or every match
    /// when the global flag is set.
    pub fn replace<F>(&self, input: &str, mut callback: F) -> Result<String, RegExprError>
    where
        F: FnMut(&str) -> String,
    {
        let regex = self.compile()?;
        let replacer = |caps: &Captures<'_>| callback(caps.get(0).map_or("", |m| m.as_str()));
        // A limit of 0 replaces every match.
        let limit = if self.flags.contains(Flag::Global) { 0 } else { 1 };
        regex
            .try_replacen(input, limit, replacer)
            .map(|text| text.into_owned())
            .map_err(|source| self.runtime_error(source))
    }

    fn runtime_error(&self, source: fancy_regex::Error) -> RegExprError {
        RegExprError::Runtime {
            expression: self.expression.clone(),
            source,
        }
    }
}

impl fmt::Display for RegExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.expression, self.flags)
    }
}

fn capture_texts(caps: &Captures<'_>) -> Vec<String> {
    (0..caps.len())
        .map(|i| caps.get(i).map_or_else(String::new, |m| m.as_str().to_string()))
        .collect()
}
