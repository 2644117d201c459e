//! compiler.rs - Compiles finalized expressions and caches the result.
//!
//! Expressions are handed to `fancy_regex`, which supports the backreferences
//! and look-ahead the builder emits. Compiled programs are kept in a global,
//! thread-safe cache so that repeated `matches` calls on equal expressions do
//! not recompile.
//!
//! License: MIT OR APACHE 2.0

use fancy_regex::{Regex, RegexBuilder};
use lazy_static::lazy_static;
use log::debug;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, PoisonError, RwLock};

use crate::config::EngineConfig;
use crate::errors::RegExprError;
use crate::flags::Flags;

lazy_static! {
    /// Compiled programs keyed by a hash of expression, flags and engine options.
    static ref COMPILED_PATTERN_CACHE: RwLock<HashMap<u64, Arc<Regex>>> = RwLock::new(HashMap::new());
}

fn cache_key(expression: &str, flags: Flags, engine: &EngineConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    expression.hash(&mut hasher);
    flags.hash(&mut hasher);
    engine.hash(&mut hasher);
    hasher.finish()
}

/// The source actually given to the engine: flags as an inline prefix, then
/// the expression.
pub fn engine_source(expression: &str, flags: Flags) -> String {
    format!("{}{}", flags.inline_prefix(), expression)
}

/// Compiles an expression without consulting the cache.
pub fn compile_pattern(expression: &str, flags: Flags, engine: &EngineConfig) -> Result<Regex, RegExprError> {
    let source = engine_source(expression, flags);
    debug!("Compiling engine source '{}'.", source);

    let mut builder = RegexBuilder::new(&source);
    if let Some(limit) = engine.backtrack_limit {
        builder.backtrack_limit(limit);
    }
    if let Some(limit) = engine.delegate_size_limit {
        builder.delegate_size_limit(limit);
    }

    builder.build().map_err(|source| RegExprError::Compile {
        expression: expression.to_string(),
        source,
    })
}

/// Gets a compiled program from the cache, compiling it on a miss.
pub fn get_or_compile(expression: &str, flags: Flags, engine: &EngineConfig) -> Result<Arc<Regex>, RegExprError> {
    let cache_key = cache_key(expression, flags, engine);

    {
        let cache = COMPILED_PATTERN_CACHE.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(regex) = cache.get(&cache_key) {
            debug!("Serving compiled pattern from cache for key: {}", cache_key);
            return Ok(Arc::clone(regex));
        }
    }

    debug!("Compiled pattern not found in cache. Compiling now.");
    let compiled = Arc::new(compile_pattern(expression, flags, engine)?);

    COMPILED_PATTERN_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(cache_key, Arc::clone(&compiled));

    debug!("Successfully compiled and cached pattern for key: {}", cache_key);
    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::Flag;

    #[test]
    fn cache_returns_shared_program() {
        let engine = EngineConfig::default();
        let first = get_or_compile("(?:(?:q){2,2})", Flags::new(), &engine).unwrap();
        let second = get_or_compile("(?:(?:q){2,2})", Flags::new(), &engine).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn flags_are_part_of_the_key() {
        let engine = EngineConfig::default();
        let plain = get_or_compile("(?:(?:z){1,1})", Flags::new(), &engine).unwrap();
        let folded = get_or_compile("(?:(?:z){1,1})", Flags::new().with(Flag::IgnoreCase), &engine).unwrap();
        assert!(!Arc::ptr_eq(&plain, &folded));
        assert!(folded.is_match("Z").unwrap());
        assert!(!plain.is_match("Z").unwrap());
    }

    #[test]
    fn compile_errors_carry_the_expression() {
        let err = compile_pattern("(?:(?:p){7,3})", Flags::new(), &EngineConfig::default()).unwrap_err();
        match err {
            RegExprError::Compile { expression, .. } => assert_eq!(expression, "(?:(?:p){7,3})"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
