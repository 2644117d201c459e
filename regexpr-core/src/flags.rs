//! Matching options attached to a finalized expression.
//!
//! Flags are applied at match time and never appear in the expression text
//! itself. When an expression is handed to the engine, case-insensitivity and
//! multi-line anchoring become an inline `(?im)` prefix; the global flag only
//! changes how many matches `replace` rewrites.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single matching option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    /// `i`: letters match regardless of case.
    IgnoreCase,
    /// `m`: start/end-of-input assertions also match at line boundaries.
    MultiLine,
    /// `g`: replace every match instead of the first one.
    Global,
}

impl Flag {
    pub fn as_char(self) -> char {
        match self {
            Flag::IgnoreCase => 'i',
            Flag::MultiLine => 'm',
            Flag::Global => 'g',
        }
    }
}

/// A set of [`Flag`]s. Inserting a flag twice has no effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flags {
    ignore_case: bool,
    multi_line: bool,
    global: bool,
}

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, flag: Flag) {
        match flag {
            Flag::IgnoreCase => self.ignore_case = true,
            Flag::MultiLine => self.multi_line = true,
            Flag::Global => self.global = true,
        }
    }

    pub fn with(mut self, flag: Flag) -> Self {
        self.insert(flag);
        self
    }

    pub fn contains(&self, flag: Flag) -> bool {
        match flag {
            Flag::IgnoreCase => self.ignore_case,
            Flag::MultiLine => self.multi_line,
            Flag::Global => self.global,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.ignore_case || self.multi_line || self.global)
    }

    /// Iterates the set flags in canonical `g`, `i`, `m` order.
    pub fn iter(&self) -> impl Iterator<Item = Flag> + '_ {
        [Flag::Global, Flag::IgnoreCase, Flag::MultiLine]
            .into_iter()
            .filter(move |flag| self.contains(*flag))
    }

    /// The inline group that applies these flags inside the engine, e.g. `(?im)`.
    /// Empty when no engine-level flag is set.
    pub fn inline_prefix(&self) -> String {
        let mut letters = String::new();
        if self.ignore_case {
            letters.push('i');
        }
        if self.multi_line {
            letters.push('m');
        }
        if letters.is_empty() {
            letters
        } else {
            format!("(?{})", letters)
        }
    }
}

impl FromIterator<Flag> for Flags {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        let mut flags = Flags::new();
        for flag in iter {
            flags.insert(flag);
        }
        flags
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in self.iter() {
            write!(f, "{}", flag.as_char())?;
        }
        Ok(())
    }
}
