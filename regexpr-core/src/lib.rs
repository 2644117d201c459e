//! # regexpr Core Library
//!
//! `regexpr-core` composes regular expressions from a chain of descriptive
//! calls ("exactly 3 of 'p'", "either this or that", "not followed by ..."),
//! instead of writing expression syntax by hand. Builders can be spliced into
//! other builders, and the library keeps backreference numbers correct across
//! every splice.
//!
//! ## Modules
//!
//! * `builder`: The fluent [`RegExprBuilder`] and its pending-unit and fragment machinery.
//! * `expr`: [`RegExpr`], the finalized `(expression, flags)` pair with matching helpers.
//! * `flags`: [`Flag`] and [`Flags`], the matching options carried next to an expression.
//! * `compiler`: Compiles finalized expressions with `fancy_regex` and caches the programs.
//! * `config`: YAML pattern recipes that describe builder chains as data.
//! * `errors`: The [`RegExprError`] type for engine and recipe failures.
//!
//! ## Usage Example
//!
//! ```rust
//! use regexpr_core::RegExprBuilder;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let expr = RegExprBuilder::new()
//!         .start_of_input()
//!         .exactly(4).digits()
//!         .then("_")
//!         .exactly(2).digits()
//!         .then("_")
//!         .min(3).max(10).letters()
//!         .then(".")
//!         .any_of(["png", "jpg", "gif"])
//!         .end_of_input()
//!         .build();
//!
//!     assert!(expr.matches("2020_10_hund.jpg")?);
//!     assert!(!expr.matches("2015_05_thisnameistoolong.jpg")?);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Building never fails. Compiling and matching return [`RegExprError`], which
//! keeps the engine's own error as its source. Recipe loading returns
//! `anyhow::Result` with file context.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod builder;
pub mod compiler;
pub mod config;
pub mod errors;
pub mod expr;
pub mod flags;

/// Re-exports the builder and the operand type accepted by its composition methods.
pub use builder::{Alternative, RegExprBuilder};

/// Re-exports the finalized expression type.
pub use expr::RegExpr;

pub use flags::{Flag, Flags};

/// Re-exports the custom error type for clear error reporting.
pub use errors::RegExprError;

/// Re-exports the recipe types and functions for patterns described in YAML.
pub use config::{
    merge_recipes,
    validate_recipes,
    EngineConfig,
    Operand,
    PatternRecipe,
    RecipeConfig,
    Step,
    MAX_PATTERN_LENGTH,
};

pub use compiler::{compile_pattern, get_or_compile};
