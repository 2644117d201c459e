//! Emitted pattern text with typed backreference slots.
//!
//! A [`Pattern`] is a sequence of raw expression text and backreferences.
//! Backreferences are never stored as `\N` text, so renumbering a spliced
//! sub-pattern is a walk over its slots rather than a textual rewrite that
//! could also hit digits which are not group references.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

/// One piece of a [`Pattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Piece {
    /// Expression source, already escaped where needed.
    Text(String),
    /// A reference to the capturing group with this 1-based number.
    Backref(usize),
}

/// Expression source made of text and backreference slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Pattern {
    pieces: Vec<Piece>,
}

impl Pattern {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn text(text: &str) -> Self {
        let mut pattern = Self::new();
        pattern.push_str(text);
        pattern
    }

    /// Appends raw text, merging it into a trailing text piece.
    pub(crate) fn push_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.pieces.last_mut() {
            Some(Piece::Text(last)) => last.push_str(text),
            _ => self.pieces.push(Piece::Text(text.to_string())),
        }
    }

    pub(crate) fn push_backref(&mut self, group: usize) {
        self.pieces.push(Piece::Backref(group));
    }

    pub(crate) fn append(&mut self, other: &Pattern) {
        for piece in &other.pieces {
            match piece {
                Piece::Text(text) => self.push_str(text),
                Piece::Backref(group) => self.push_backref(*group),
            }
        }
    }

    /// Renumbers every backreference by `offset`. Text is left untouched.
    pub(crate) fn shift(&mut self, offset: usize) {
        if offset == 0 {
            return;
        }
        for piece in &mut self.pieces {
            if let Piece::Backref(group) = piece {
                *group += offset;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn backrefs(&self) -> Vec<usize> {
        self.pieces
            .iter()
            .filter_map(|piece| match piece {
                Piece::Backref(group) => Some(*group),
                Piece::Text(_) => None,
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in &self.pieces {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Backref(group) => write!(f, "\\{}", group)?,
            }
        }
        Ok(())
    }
}

/// One finalized unit in a builder's output sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Fragment {
    /// A closed group, anchor or look-ahead.
    Unit(Pattern),
    /// A flat alternation `(?:(?:A)|(?:B)|...)`. Chained `or_find` calls
    /// push further branches here instead of nesting a new alternation.
    Alternation(Vec<Pattern>),
}

impl Fragment {
    pub(crate) fn write_into(&self, out: &mut Pattern) {
        match self {
            Fragment::Unit(pattern) => out.append(pattern),
            Fragment::Alternation(branches) => {
                out.push_str("(?:");
                for (i, branch) in branches.iter().enumerate() {
                    if i > 0 {
                        out.push_str("|");
                    }
                    out.push_str("(?:");
                    out.append(branch);
                    out.push_str(")");
                }
                out.push_str(")");
            }
        }
    }
}
