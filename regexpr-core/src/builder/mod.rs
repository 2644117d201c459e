//! The fluent expression builder.
//!
//! A [`RegExprBuilder`] accumulates descriptive calls into an ordered list of
//! fragments. Quantities and character selectors are buffered in a pending
//! descriptor and only emitted ("flushed") when a later call needs the state
//! settled: a new quantity, an anchor, a look-ahead or composition, or
//! finalization through [`RegExprBuilder::build`].
//!
//! Every emitted unit is wrapped in its own group, `(?:(?:p){3,3})`, so that
//! each unit occupies exactly one group slot whether it captures or not.
//!
//! ## Splicing
//!
//! Composition operations (`append`, `like`, `either_find`, `ahead`, ...) take
//! a snapshot of another builder and insert it into this one. Backreferences in
//! the snapshot are renumbered by the number of capturing groups that precede
//! the insertion point, so group numbers stay left-to-right however deeply
//! builders are nested:
//!
//! ```rust
//! use regexpr_core::RegExprBuilder;
//!
//! let mut pair = RegExprBuilder::new();
//! pair.exactly(2).of("a").as_group().exactly(1).of_group(1);
//!
//! let mut outer = RegExprBuilder::new();
//! outer.exactly(1).of("x").as_group().append(&pair);
//! let expr = outer.build();
//! assert_eq!(outer.groups_declared(), 2);
//! assert!(expr.expression().contains("\\2"));
//! ```
//!
//! License: MIT OR APACHE 2.0

pub(crate) mod fragment;
pub(crate) mod pending;

use log::{debug, trace, warn};

use crate::expr::RegExpr;
use crate::flags::{Flag, Flags};
use fragment::{Fragment, Pattern};
use pending::{PendingDescriptor, Quantity, Selector, SubPattern};

const ANY_LETTER: &str = "A-Za-z";
const LOWER_CASE_LETTER: &str = "a-z";
const UPPER_CASE_LETTER: &str = "A-Z";

/// An operand for the composition operations: either literal text, meaning
/// "exactly one occurrence of this text", or another builder.
#[derive(Debug, Clone, Copy)]
pub enum Alternative<'a> {
    Literal(&'a str),
    Pattern(&'a RegExprBuilder),
}

impl<'a> From<&'a str> for Alternative<'a> {
    fn from(text: &'a str) -> Self {
        Alternative::Literal(text)
    }
}

impl<'a> From<&'a String> for Alternative<'a> {
    fn from(text: &'a String) -> Self {
        Alternative::Literal(text.as_str())
    }
}

impl<'a> From<&'a RegExprBuilder> for Alternative<'a> {
    fn from(builder: &'a RegExprBuilder) -> Self {
        Alternative::Pattern(builder)
    }
}

impl<'a> From<&'a mut RegExprBuilder> for Alternative<'a> {
    fn from(builder: &'a mut RegExprBuilder) -> Self {
        Alternative::Pattern(builder)
    }
}

impl Alternative<'_> {
    fn snapshot(self) -> SubPattern {
        match self {
            Alternative::Literal(text) => RegExprBuilder::new().exactly(1).of(text).snapshot(),
            Alternative::Pattern(builder) => builder.snapshot(),
        }
    }
}

/// Builds an expression and its flags from a chain of descriptive calls.
///
/// Chain methods take `&mut self` and return `&mut Self`. The builder stays
/// usable after [`build`](Self::build); [`fresh`](Self::fresh) starts over
/// with an unrelated empty builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegExprBuilder {
    flags: Flags,
    fragments: Vec<Fragment>,
    pending: PendingDescriptor,
    /// Left operand of an alternation whose `or_find` has not arrived yet.
    either: Option<SubPattern>,
    groups_declared: usize,
}

impl RegExprBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new, empty builder that shares nothing with this one.
    pub fn fresh(&self) -> Self {
        Self::new()
    }

    /// Number of capturing groups emitted so far, spliced ones included.
    pub fn groups_declared(&self) -> usize {
        self.groups_declared
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Flushes pending state and returns the finalized expression and flags.
    /// Calling it twice in a row yields equal results.
    pub fn build(&mut self) -> RegExpr {
        let expression = self.expression();
        debug!("Built expression '{}' with flags '{}'.", expression, self.flags);
        RegExpr::new(expression, self.flags)
    }

    /// Flushes pending state and returns only the expression text.
    pub fn expression(&mut self) -> String {
        self.finalize();
        self.render().to_string()
    }

    // ----- flags -----

    pub fn add_flag(&mut self, flag: Flag) -> &mut Self {
        self.flags.insert(flag);
        self
    }

    pub fn ignore_case(&mut self) -> &mut Self {
        self.add_flag(Flag::IgnoreCase)
    }

    pub fn multi_line(&mut self) -> &mut Self {
        self.add_flag(Flag::MultiLine)
    }

    pub fn global_match(&mut self) -> &mut Self {
        self.add_flag(Flag::Global)
    }

    // ----- anchors -----

    pub fn start_of_input(&mut self) -> &mut Self {
        self.flush();
        self.push_unit("(?:^)")
    }

    /// Like [`start_of_input`](Self::start_of_input), and turns on multi-line
    /// matching so it also matches after every line break.
    pub fn start_of_line(&mut self) -> &mut Self {
        self.multi_line();
        self.start_of_input()
    }

    pub fn end_of_input(&mut self) -> &mut Self {
        self.flush();
        self.push_unit("(?:$)")
    }

    pub fn end_of_line(&mut self) -> &mut Self {
        self.multi_line();
        self.end_of_input()
    }

    // ----- quantity -----

    pub fn exactly(&mut self, n: usize) -> &mut Self {
        self.flush();
        self.pending.quantity = Quantity::Exactly(n);
        self
    }

    pub fn min(&mut self, n: usize) -> &mut Self {
        self.flush();
        self.pending.quantity = self.pending.quantity.with_min(n);
        self
    }

    pub fn max(&mut self, n: usize) -> &mut Self {
        self.flush();
        self.pending.quantity = self.pending.quantity.with_max(n);
        self
    }

    /// Makes the pending quantity lazy.
    pub fn reluctantly(&mut self) -> &mut Self {
        self.pending.reluctant = true;
        self
    }

    // ----- selectors -----

    /// Literal text; metacharacters are escaped.
    pub fn of(&mut self, text: &str) -> &mut Self {
        self.pending.literal = (!text.is_empty()).then(|| sanitize(text));
        self
    }

    pub fn of_any(&mut self) -> &mut Self {
        self.pending.any_char = true;
        self
    }

    /// A backreference to capturing group `group` (1-based) of this builder.
    pub fn of_group(&mut self, group: usize) -> &mut Self {
        if group == 0 {
            warn!("Ignoring backreference to group 0; groups are numbered from 1.");
            return self;
        }
        self.pending.backref = Some(group);
        self
    }

    /// Any one of the given characters.
    pub fn from<I, S>(&mut self, chars: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.pending.set = joined_class(chars);
        self
    }

    /// Any character except the given ones.
    pub fn not_from<I, S>(&mut self, chars: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.pending.not_set = joined_class(chars);
        self
    }

    /// Repeats another pattern as the pending unit.
    pub fn like<'a>(&mut self, pattern: impl Into<Alternative<'a>>) -> &mut Self {
        self.pending.sub = Some(pattern.into().snapshot());
        self
    }

    // ----- capture -----

    /// Makes the pending unit a capturing group.
    pub fn as_group(&mut self) -> &mut Self {
        self.pending.capture = Some(None);
        self
    }

    pub fn as_named_group(&mut self, name: &str) -> &mut Self {
        self.pending.capture = Some(Some(name.to_string()));
        self
    }

    // ----- look-ahead -----

    pub fn ahead<'a>(&mut self, pattern: impl Into<Alternative<'a>>) -> &mut Self {
        self.flush();
        self.close_lone_either();
        let spliced = self.splice(pattern.into().snapshot());
        self.push_wrapped("(?=", &spliced, ")")
    }

    pub fn not_ahead<'a>(&mut self, pattern: impl Into<Alternative<'a>>) -> &mut Self {
        self.flush();
        self.close_lone_either();
        let spliced = self.splice(pattern.into().snapshot());
        self.push_wrapped("(?!", &spliced, ")")
    }

    // ----- composition -----

    /// Records the first operand of an alternation; [`or_find`](Self::or_find)
    /// completes it.
    pub fn either_find<'a>(&mut self, pattern: impl Into<Alternative<'a>>) -> &mut Self {
        self.flush();
        self.either = Some(pattern.into().snapshot());
        self
    }

    /// Adds an operand to the current alternation.
    ///
    /// Following [`either_find`](Self::either_find) this emits
    /// `(?:(?:EITHER)|(?:OR))`. Following another `or_find` the new operand
    /// joins that same group, so chains stay one level deep.
    pub fn or_find<'a>(&mut self, pattern: impl Into<Alternative<'a>>) -> &mut Self {
        let operand = pattern.into().snapshot();
        let either = self.either.take();
        self.flush();

        if let Some(either) = either {
            let first = self.splice(either);
            let second = self.splice(operand);
            self.fragments.push(Fragment::Alternation(vec![first, second]));
            return self;
        }

        let branch = self.splice(operand);
        match self.fragments.last_mut() {
            Some(Fragment::Alternation(branches)) => {
                trace!("Extending alternation with branch {}.", branches.len() + 1);
                branches.push(branch);
            }
            _ => {
                debug!("or_find without a preceding alternation; opening a new one.");
                self.fragments.push(Fragment::Alternation(vec![branch]));
            }
        }
        self
    }

    /// Matches any one of the operands. An empty list adds nothing.
    pub fn any_of<'a, I, A>(&mut self, alternatives: I) -> &mut Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Alternative<'a>>,
    {
        let mut alternatives = alternatives.into_iter();
        let Some(first) = alternatives.next() else {
            return self;
        };
        self.either_find(first);
        for alternative in alternatives {
            self.or_find(alternative);
        }
        self
    }

    /// Asserts that `pattern` does not start here.
    pub fn neither<'a>(&mut self, pattern: impl Into<Alternative<'a>>) -> &mut Self {
        self.not_ahead(pattern)
    }

    /// Asserts that `pattern` does not start here either, then consumes
    /// anything.
    pub fn nor<'a>(&mut self, pattern: impl Into<Alternative<'a>>) -> &mut Self {
        if self.pending.is_open_anything() {
            self.pending.quantity = Quantity::Unset;
            self.pending.any_char = false;
        }
        self.neither(pattern);
        self.anything()
    }

    /// Exactly one occurrence of another pattern.
    pub fn append<'a>(&mut self, pattern: impl Into<Alternative<'a>>) -> &mut Self {
        self.exactly(1);
        self.pending.sub = Some(pattern.into().snapshot());
        self
    }

    /// Zero or one occurrence of another pattern.
    pub fn optional<'a>(&mut self, pattern: impl Into<Alternative<'a>>) -> &mut Self {
        self.max(1);
        self.pending.sub = Some(pattern.into().snapshot());
        self
    }

    // ----- shorthands -----

    pub fn then(&mut self, text: &str) -> &mut Self {
        self.exactly(1).of(text)
    }

    pub fn find(&mut self, text: &str) -> &mut Self {
        self.then(text)
    }

    pub fn some<I, S>(&mut self, chars: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.min(1).from(chars)
    }

    pub fn maybe_some<I, S>(&mut self, chars: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.min(0).from(chars)
    }

    pub fn maybe(&mut self, text: &str) -> &mut Self {
        self.max(1).of(text)
    }

    pub fn anything(&mut self) -> &mut Self {
        self.min(0).of_any()
    }

    /// A single character: one or more of anything but that character.
    /// Longer text: anything that does not start with it.
    pub fn anything_but(&mut self, text: &str) -> &mut Self {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (None, _) => {
                warn!("anything_but called with empty text; matching anything.");
                self.anything()
            }
            (Some(c), None) => self.min(1).not_from([c.to_string()]),
            _ => {
                self.not_ahead(text);
                self.anything()
            }
        }
    }

    pub fn something(&mut self) -> &mut Self {
        self.min(1).of_any()
    }

    pub fn any(&mut self) -> &mut Self {
        self.exactly(1).of_any()
    }

    pub fn line_break(&mut self) -> &mut Self {
        self.flush();
        self.push_unit("(?:\\r\\n|\\r|\\n)")
    }

    pub fn line_breaks(&mut self) -> &mut Self {
        self.like(RegExprBuilder::new().line_break())
    }

    /// Without a pending quantity this emits one whitespace character right
    /// away; otherwise whitespace becomes the pending unit.
    pub fn whitespace(&mut self) -> &mut Self {
        self.class_shorthand("\\s")
    }

    pub fn not_whitespace(&mut self) -> &mut Self {
        self.class_shorthand("\\S")
    }

    pub fn tab(&mut self) -> &mut Self {
        self.flush();
        self.push_unit("(?:\\t)")
    }

    pub fn tabs(&mut self) -> &mut Self {
        self.like(RegExprBuilder::new().tab())
    }

    pub fn digit(&mut self) -> &mut Self {
        self.flush();
        self.push_unit("(?:\\d)")
    }

    pub fn not_digit(&mut self) -> &mut Self {
        self.flush();
        self.push_unit("(?:\\D)")
    }

    pub fn digits(&mut self) -> &mut Self {
        self.like(RegExprBuilder::new().digit())
    }

    pub fn not_digits(&mut self) -> &mut Self {
        self.like(RegExprBuilder::new().not_digit())
    }

    pub fn letter(&mut self) -> &mut Self {
        self.exactly(1);
        self.pending.set = Some(ANY_LETTER.to_string());
        self
    }

    pub fn not_letter(&mut self) -> &mut Self {
        self.exactly(1);
        self.pending.not_set = Some(ANY_LETTER.to_string());
        self
    }

    pub fn letters(&mut self) -> &mut Self {
        self.pending.set = Some(ANY_LETTER.to_string());
        self
    }

    pub fn not_letters(&mut self) -> &mut Self {
        self.pending.not_set = Some(ANY_LETTER.to_string());
        self
    }

    pub fn lower_case_letter(&mut self) -> &mut Self {
        self.exactly(1);
        self.pending.set = Some(LOWER_CASE_LETTER.to_string());
        self
    }

    pub fn lower_case_letters(&mut self) -> &mut Self {
        self.pending.set = Some(LOWER_CASE_LETTER.to_string());
        self
    }

    pub fn upper_case_letter(&mut self) -> &mut Self {
        self.exactly(1);
        self.pending.set = Some(UPPER_CASE_LETTER.to_string());
        self
    }

    pub fn upper_case_letters(&mut self) -> &mut Self {
        self.pending.set = Some(UPPER_CASE_LETTER.to_string());
        self
    }

    // ----- internals -----

    fn class_shorthand(&mut self, class: &str) -> &mut Self {
        if self.pending.quantity == Quantity::Unset {
            self.flush();
            return self.push_wrapped("(?:", &Pattern::text(class), ")");
        }
        self.pending.sub = Some(SubPattern {
            pattern: Pattern::text(class),
            groups: 0,
        });
        self
    }

    /// Emits the pending descriptor as one fragment. Does nothing while no
    /// selector is set, so a bare quantity survives until one arrives.
    fn flush(&mut self) {
        if self.pending.selector().is_some() {
            self.close_lone_either();
        }
        let Some(selector) = self.pending.selector() else {
            return;
        };

        let mut unit = Pattern::text("(");
        unit.push_str(&self.pending.capture_marker());
        unit.push_str("(?:");
        match selector {
            Selector::Literal(text) => unit.push_str(text),
            Selector::AnyChar => unit.push_str("."),
            Selector::Backref(group) => unit.push_backref(group),
            Selector::Set(set) => unit.push_str(&format!("[{}]", set)),
            Selector::NotSet(set) => unit.push_str(&format!("[^{}]", set)),
            Selector::Sub(sub) => {
                // The unit's own group opens before the sub-pattern's groups.
                let mut pattern = sub.pattern.clone();
                let offset = self.groups_declared + usize::from(self.pending.capture.is_some());
                pattern.shift(offset);
                unit.append(&pattern);
            }
        }
        unit.push_str(")");

        let quantity = self.pending.quantity;
        if quantity.is_inverted() {
            warn!("Quantity {} has its minimum above its maximum; the engine will reject it.", quantity.literal());
        }
        unit.push_str(&quantity.literal());
        unit.push_str(self.pending.reluctant_marker());
        unit.push_str(")");

        if self.pending.capture.is_some() {
            self.groups_declared += 1;
        }
        if let Selector::Sub(sub) = selector {
            self.groups_declared += sub.groups;
        }

        trace!("Flushed fragment '{}'.", unit);
        self.fragments.push(Fragment::Unit(unit));
        self.pending.reset();
    }

    fn finalize(&mut self) {
        self.flush();
        self.close_lone_either();
    }

    /// Emits an `either_find` operand that no `or_find` completed as a
    /// one-branch alternation. Runs before any other fragment is pushed so the
    /// operand keeps its place in the sequence.
    fn close_lone_either(&mut self) {
        if let Some(either) = self.either.take() {
            debug!("either_find without or_find; emitting it as a single alternative.");
            let branch = self.splice(either);
            self.fragments.push(Fragment::Alternation(vec![branch]));
        }
    }

    /// Renumbers a snapshot's backreferences past this builder's groups and
    /// counts its groups as this builder's own.
    fn splice(&mut self, sub: SubPattern) -> Pattern {
        let SubPattern { mut pattern, groups } = sub;
        debug!(
            "Splicing sub-pattern with {} group(s) after {} existing group(s).",
            groups, self.groups_declared
        );
        pattern.shift(self.groups_declared);
        self.groups_declared += groups;
        pattern
    }

    /// This builder's output as if finalized, without mutating it.
    fn snapshot(&self) -> SubPattern {
        let mut finalized = self.clone();
        finalized.finalize();
        SubPattern {
            pattern: finalized.render(),
            groups: finalized.groups_declared,
        }
    }

    fn render(&self) -> Pattern {
        let mut out = Pattern::new();
        for fragment in &self.fragments {
            fragment.write_into(&mut out);
        }
        out
    }

    fn push_unit(&mut self, text: &str) -> &mut Self {
        self.close_lone_either();
        self.fragments.push(Fragment::Unit(Pattern::text(text)));
        self
    }

    fn push_wrapped(&mut self, open: &str, inner: &Pattern, close: &str) -> &mut Self {
        self.close_lone_either();
        let mut unit = Pattern::text(open);
        unit.append(inner);
        unit.push_str(close);
        self.fragments.push(Fragment::Unit(unit));
        self
    }
}

/// Escapes expression metacharacters in literal text.
fn sanitize(text: &str) -> String {
    regex::escape(text)
}

fn joined_class<I, S>(chars: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined: String = chars.into_iter().map(|c| sanitize(c.as_ref())).collect();
    (!joined.is_empty()).then_some(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_shape() {
        let mut builder = RegExprBuilder::new();
        builder.exactly(3).of("p");
        assert_eq!(builder.expression(), "(?:(?:p){3,3})");
    }

    #[test]
    fn selector_without_quantity_repeats_once() {
        let mut builder = RegExprBuilder::new();
        builder.of("p");
        assert_eq!(builder.expression(), "(?:(?:p){1,1})");
    }

    #[test]
    fn quantity_without_selector_emits_nothing() {
        let mut builder = RegExprBuilder::new();
        builder.exactly(4).start_of_input().min(2);
        assert_eq!(builder.expression(), "(?:^)");
        assert!(!builder.pending.is_idle());
    }

    #[test]
    fn min_then_max_survives_intermediate_flush() {
        let mut builder = RegExprBuilder::new();
        builder.min(3).max(7).of("p");
        assert_eq!(builder.expression(), "(?:(?:p){3,7})");
    }

    #[test]
    fn capture_counts_at_flush() {
        let mut builder = RegExprBuilder::new();
        builder.exactly(1).of("a").as_group();
        assert_eq!(builder.groups_declared(), 0);
        builder.exactly(1).of("b");
        assert_eq!(builder.groups_declared(), 1);
    }

    #[test]
    fn literal_is_escaped() {
        let mut builder = RegExprBuilder::new();
        builder.then("a.b*");
        assert_eq!(builder.expression(), "(?:(?:a\\.b\\*){1,1})");
    }

    #[test]
    fn character_set_is_escaped() {
        let mut builder = RegExprBuilder::new();
        builder.exactly(1).from(["a", "-", "]"]);
        assert_eq!(builder.expression(), "(?:(?:[a\\-\\]]){1,1})");
    }

    #[test]
    fn reluctant_marker_follows_quantity() {
        let mut builder = RegExprBuilder::new();
        builder.min(2).of_any().reluctantly();
        assert_eq!(builder.expression(), "(?:(?:.){2,}?)");
    }

    #[test]
    fn chained_or_find_stays_flat() {
        let mut builder = RegExprBuilder::new();
        builder.either_find("p").or_find("q").or_find("r");
        assert_eq!(
            builder.expression(),
            "(?:(?:(?:(?:p){1,1}))|(?:(?:(?:q){1,1}))|(?:(?:(?:r){1,1})))"
        );
    }

    #[test]
    fn empty_any_of_contributes_nothing() {
        let mut builder = RegExprBuilder::new();
        builder.any_of(Vec::<&str>::new());
        assert_eq!(builder.expression(), "");
    }

    #[test]
    fn any_of_reads_caller_sequence_without_consuming_it() {
        let extensions = vec!["png".to_string(), "jpg".to_string()];
        let mut builder = RegExprBuilder::new();
        builder.any_of(&extensions);
        assert_eq!(extensions.len(), 2);
        assert!(builder.expression().contains("|"));
    }

    #[test]
    fn nor_discards_pending_anything() {
        let mut builder = RegExprBuilder::new();
        builder.neither("milk").anything().nor("juice");
        assert_eq!(
            builder.expression(),
            "(?!(?:(?:milk){1,1}))(?!(?:(?:juice){1,1}))(?:(?:.){0,})"
        );
    }

    #[test]
    fn anything_but_single_character() {
        let mut builder = RegExprBuilder::new();
        builder.anything_but("Y");
        assert_eq!(builder.expression(), "(?:(?:[^Y]){1,})");
    }

    #[test]
    fn anything_but_text() {
        let mut builder = RegExprBuilder::new();
        builder.anything_but("admin");
        assert_eq!(builder.expression(), "(?!(?:(?:admin){1,1}))(?:(?:.){0,})");
    }

    #[test]
    fn whitespace_without_quantity_is_immediate() {
        let mut builder = RegExprBuilder::new();
        builder.whitespace().exactly(2).whitespace();
        assert_eq!(builder.expression(), "(?:\\s)(?:(?:\\s){2,2})");
    }

    #[test]
    fn capture_group_numbers_before_spliced_groups() {
        let mut inner = RegExprBuilder::new();
        inner.exactly(1).of("a").as_group().exactly(1).of_group(1);

        let mut outer = RegExprBuilder::new();
        outer.exactly(1).like(&inner).as_group();
        assert_eq!(
            outer.expression(),
            "((?:((?:a){1,1})(?:(?:\\2){1,1})){1,1})"
        );
        assert_eq!(outer.groups_declared(), 2);
    }

    #[test]
    fn snapshot_leaves_source_untouched() {
        let mut source = RegExprBuilder::new();
        source.exactly(1).of("a").as_group();
        let before = source.clone();
        let mut dest = RegExprBuilder::new();
        dest.append(&source);
        assert_eq!(source, before);
    }

    #[test]
    fn lone_either_keeps_its_place_before_later_units() {
        let mut builder = RegExprBuilder::new();
        builder.either_find("a").then("b");
        assert_eq!(
            builder.expression(),
            "(?:(?:(?:(?:a){1,1})))(?:(?:b){1,1})"
        );

        let mut anchored = RegExprBuilder::new();
        anchored.either_find("a").digit().end_of_input();
        assert_eq!(
            anchored.expression(),
            "(?:(?:(?:(?:a){1,1})))(?:\\d)(?:$)"
        );
    }

    #[test]
    fn lone_either_groups_number_before_later_groups() {
        let mut captured = RegExprBuilder::new();
        captured.exactly(1).of("a").as_group();

        let mut builder = RegExprBuilder::new();
        builder.either_find(&captured).exactly(1).of("b").as_group().exactly(1).of_group(2);
        assert_eq!(
            builder.expression(),
            "(?:(?:((?:a){1,1})))((?:b){1,1})(?:(?:\\2){1,1})"
        );
    }

    #[test]
    fn lone_either_is_emitted_at_finalization() {
        let mut builder = RegExprBuilder::new();
        builder.either_find("p");
        assert_eq!(builder.expression(), "(?:(?:(?:(?:p){1,1})))");
        builder.or_find("q");
        assert_eq!(
            builder.expression(),
            "(?:(?:(?:(?:p){1,1}))|(?:(?:(?:q){1,1})))"
        );
    }
}
