//! The not-yet-emitted unit of repetition.
//!
//! License: MIT OR APACHE 2.0

use super::fragment::Pattern;

/// How often the pending selector repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Quantity {
    #[default]
    Unset,
    Exactly(usize),
    AtLeast(usize),
    AtMost(usize),
    Between(usize, usize),
}

impl Quantity {
    /// A lower bound keeps an upper bound that is already set.
    pub(crate) fn with_min(self, min: usize) -> Self {
        match self {
            Quantity::AtMost(max) | Quantity::Between(_, max) => Quantity::Between(min, max),
            _ => Quantity::AtLeast(min),
        }
    }

    /// An upper bound keeps a lower bound that is already set.
    pub(crate) fn with_max(self, max: usize) -> Self {
        match self {
            Quantity::AtLeast(min) | Quantity::Between(min, _) => Quantity::Between(min, max),
            _ => Quantity::AtMost(max),
        }
    }

    /// Unset counts as exactly one.
    pub(crate) fn literal(self) -> String {
        match self {
            Quantity::Unset => "{1,1}".to_string(),
            Quantity::Exactly(n) => format!("{{{},{}}}", n, n),
            Quantity::AtLeast(min) => format!("{{{},}}", min),
            Quantity::AtMost(max) => format!("{{0,{}}}", max),
            Quantity::Between(min, max) => format!("{{{},{}}}", min, max),
        }
    }

    pub(crate) fn is_inverted(self) -> bool {
        matches!(self, Quantity::Between(min, max) if min > max)
    }
}

/// Spliced output of another builder, together with the number of capturing
/// groups it declares. Its backreferences are still numbered from 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SubPattern {
    pub(crate) pattern: Pattern,
    pub(crate) groups: usize,
}

/// The selector that wins at flush time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Selector<'a> {
    Literal(&'a str),
    AnyChar,
    Backref(usize),
    Set(&'a str),
    NotSet(&'a str),
    Sub(&'a SubPattern),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PendingDescriptor {
    pub(crate) quantity: Quantity,
    /// Escaped literal text.
    pub(crate) literal: Option<String>,
    pub(crate) any_char: bool,
    pub(crate) backref: Option<usize>,
    /// Body of a character class, escaped where it came from user input.
    pub(crate) set: Option<String>,
    pub(crate) not_set: Option<String>,
    pub(crate) sub: Option<SubPattern>,
    /// `Some(name)` when the unit captures; the inner name is optional.
    pub(crate) capture: Option<Option<String>>,
    pub(crate) reluctant: bool,
}

impl PendingDescriptor {
    /// Resolves overlapping selector fields. The first one set wins, in the
    /// order literal, any-char, backreference, set, negated set, sub-pattern.
    pub(crate) fn selector(&self) -> Option<Selector<'_>> {
        if let Some(literal) = &self.literal {
            return Some(Selector::Literal(literal));
        }
        if self.any_char {
            return Some(Selector::AnyChar);
        }
        if let Some(group) = self.backref {
            return Some(Selector::Backref(group));
        }
        if let Some(set) = &self.set {
            return Some(Selector::Set(set));
        }
        if let Some(not_set) = &self.not_set {
            return Some(Selector::NotSet(not_set));
        }
        self.sub.as_ref().map(Selector::Sub)
    }

    #[cfg(test)]
    pub(crate) fn is_idle(&self) -> bool {
        *self == PendingDescriptor::default()
    }

    /// True for the "anything, zero or more" state left behind by `anything`.
    pub(crate) fn is_open_anything(&self) -> bool {
        self.any_char && self.quantity == Quantity::AtLeast(0)
    }

    pub(crate) fn reset(&mut self) {
        *self = PendingDescriptor::default();
    }

    /// Opening of the unit's outer group.
    pub(crate) fn capture_marker(&self) -> String {
        match &self.capture {
            Some(Some(name)) => format!("?<{}>", name),
            Some(None) => String::new(),
            None => "?:".to_string(),
        }
    }

    pub(crate) fn reluctant_marker(&self) -> &'static str {
        if self.reluctant {
            "?"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_literal_mapping() {
        assert_eq!(Quantity::Exactly(3).literal(), "{3,3}");
        assert_eq!(Quantity::AtLeast(2).literal(), "{2,}");
        assert_eq!(Quantity::Between(3, 7).literal(), "{3,7}");
        assert_eq!(Quantity::AtMost(3).literal(), "{0,3}");
        assert_eq!(Quantity::Unset.literal(), "{1,1}");
    }

    #[test]
    fn min_and_max_combine() {
        assert_eq!(Quantity::Unset.with_min(3).with_max(7), Quantity::Between(3, 7));
        assert_eq!(Quantity::Unset.with_max(7).with_min(3), Quantity::Between(3, 7));
        assert_eq!(Quantity::Exactly(2).with_min(4), Quantity::AtLeast(4));
        assert!(Quantity::Between(5, 2).is_inverted());
    }

    #[test]
    fn literal_text_outranks_every_other_selector() {
        let pending = PendingDescriptor {
            literal: Some("p".to_string()),
            any_char: true,
            backref: Some(1),
            set: Some("abc".to_string()),
            ..Default::default()
        };
        assert_eq!(pending.selector(), Some(Selector::Literal("p")));
    }

    #[test]
    fn set_outranks_negated_set_and_sub_pattern() {
        let pending = PendingDescriptor {
            set: Some("abc".to_string()),
            not_set: Some("xyz".to_string()),
            sub: Some(SubPattern::default()),
            ..Default::default()
        };
        assert_eq!(pending.selector(), Some(Selector::Set("abc")));
    }

    #[test]
    fn quantity_alone_has_no_selector() {
        let pending = PendingDescriptor {
            quantity: Quantity::Exactly(4),
            ..Default::default()
        };
        assert_eq!(pending.selector(), None);
        assert!(!pending.is_idle());
    }

    #[test]
    fn capture_markers() {
        let mut pending = PendingDescriptor::default();
        assert_eq!(pending.capture_marker(), "?:");
        pending.capture = Some(None);
        assert_eq!(pending.capture_marker(), "");
        pending.capture = Some(Some("year".to_string()));
        assert_eq!(pending.capture_marker(), "?<year>");
    }
}
