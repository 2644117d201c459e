//! errors.rs - Custom error types for the regexpr-core library.
//!
//! The builder itself never fails. Everything that can go wrong happens at the
//! engine boundary (compiling or running a finalized expression) or while
//! turning a recipe file into patterns.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `regexpr-core` library.
///
/// Engine failures carry the expression that triggered them and keep the
/// original `fancy_regex::Error` as their source, unchanged.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RegExprError {
    #[error("Failed to compile expression '{expression}': {source}")]
    Compile {
        expression: String,
        #[source]
        source: fancy_regex::Error,
    },

    #[error("Matching expression '{expression}' failed: {source}")]
    Runtime {
        expression: String,
        #[source]
        source: fancy_regex::Error,
    },

    #[error("Pattern '{0}': expression length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Pattern '{0}' is not defined in the recipe set")]
    UnknownPattern(String),

    #[error("Pattern '{0}' refers back to itself through its operands")]
    RecipeCycle(String),
}
