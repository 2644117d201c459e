// regexpr-core/tests/composition_tests.rs
//! Splicing, group numbering and finalization behaviour across builders.
use anyhow::Result;
use test_log::test; // For integrating with `env_logger` in tests

use regexpr_core::RegExprBuilder;

/// `(a{2})` followed by a reference to it: matches "aaaa".
fn repeated_pair() -> RegExprBuilder {
    let mut builder = RegExprBuilder::new();
    builder.exactly(2).of("a").as_group().exactly(1).of_group(1);
    builder
}

#[test]
fn test_build_is_idempotent() {
    let mut builder = RegExprBuilder::new();
    builder.exactly(1).of("a").as_group().min(2).of_group(1);

    let first = builder.build();
    let second = builder.build();
    assert_eq!(first, second);
    assert_eq!(first.expression(), "((?:a){1,1})(?:(?:\\1){2,})");
}

#[test]
fn test_builder_stays_usable_after_build() -> Result<()> {
    let mut builder = RegExprBuilder::new();
    builder.then("a");
    let before = builder.build();

    builder.then("b");
    let after = builder.build();

    assert_eq!(before.expression(), "(?:(?:a){1,1})");
    assert_eq!(after.expression(), "(?:(?:a){1,1})(?:(?:b){1,1})");
    assert!(!before.matches("b")?);
    Ok(())
}

#[test]
fn test_fresh_shares_nothing() {
    let mut builder = RegExprBuilder::new();
    builder.ignore_case().exactly(1).of("a").as_group();

    let mut fresh = builder.fresh();
    assert_eq!(fresh.groups_declared(), 0);
    assert!(fresh.flags().is_empty());
    assert_eq!(fresh.expression(), "");
}

#[test]
fn test_spliced_backreferences_follow_preceding_groups() -> Result<()> {
    let pair = repeated_pair();

    let mut outer = RegExprBuilder::new();
    outer
        .start_of_input()
        .exactly(1).of("x").as_group()
        .append(&pair)
        .end_of_input();
    let expr = outer.build();

    assert_eq!(outer.groups_declared(), 2);
    assert_eq!(
        expr.expression(),
        "(?:^)((?:x){1,1})(?:(?:((?:a){2,2})(?:(?:\\2){1,1})){1,1})(?:$)"
    );
    assert!(expr.matches("xaaaa")?);
    assert!(!expr.matches("xaax")?);
    Ok(())
}

#[test]
fn test_captured_like_counts_its_own_group_first() -> Result<()> {
    let pair = repeated_pair();

    let expr = RegExprBuilder::new()
        .start_of_input()
        .exactly(1).like(&pair).as_group()
        .exactly(1).of_group(1)
        .end_of_input()
        .build();

    assert!(expr.matches("aaaaaaaa")?);
    assert!(!expr.matches("aaaa")?);
    assert_eq!(expr.find_in("aaaaaaaa")?, vec!["aaaaaaaa", "aaaa", "aa"]);
    Ok(())
}

#[test]
fn test_nested_splices_keep_numbering() -> Result<()> {
    let pair = repeated_pair();

    let mut middle = RegExprBuilder::new();
    middle.exactly(1).of("-").as_group().append(&pair);

    let mut outer = RegExprBuilder::new();
    outer
        .start_of_input()
        .exactly(1).of("x").as_group()
        .append(&middle)
        .exactly(1).of_group(1)
        .end_of_input();
    let expr = outer.build();

    assert_eq!(outer.groups_declared(), 3);
    assert!(expr.expression().contains("\\3"));
    assert!(expr.matches("x-aaaax")?);
    assert!(!expr.matches("x-aaaa-")?);
    Ok(())
}

#[test]
fn test_alternation_operands_are_shifted() -> Result<()> {
    let pair = repeated_pair();

    let mut builder = RegExprBuilder::new();
    builder
        .start_of_input()
        .exactly(1).of("x").as_group()
        .either_find(&pair)
        .or_find(&pair)
        .end_of_input();
    let expr = builder.build();

    assert_eq!(builder.groups_declared(), 3);
    assert!(expr.expression().contains("\\2"));
    assert!(expr.expression().contains("\\3"));
    assert!(expr.matches("xaaaa")?);
    Ok(())
}

#[test]
fn test_look_ahead_operand_is_shifted() -> Result<()> {
    let pair = repeated_pair();

    let expr = RegExprBuilder::new()
        .exactly(1).of("x").as_group()
        .ahead(&pair)
        .build();

    assert!(expr.expression().contains("(?=((?:a){2,2})(?:(?:\\2){1,1}))"));
    assert!(expr.matches("xaaaa")?);
    assert!(!expr.matches("xaab")?);
    Ok(())
}

#[test]
fn test_or_chain_is_one_flat_group() {
    let mut builder = RegExprBuilder::new();
    builder.either_find("p").or_find("q").or_find("r").or_find("s");
    let expression = builder.expression();

    assert!(expression.starts_with("(?:(?:(?:(?:p){1,1}))|"));
    assert_eq!(expression.matches('|').count(), 3);
    assert!(expression.ends_with("(?:(?:(?:s){1,1})))"));
}

#[test]
fn test_or_find_without_either_opens_alternation() {
    let mut builder = RegExprBuilder::new();
    builder.then("a").or_find("b");
    assert_eq!(builder.expression(), "(?:(?:a){1,1})(?:(?:(?:(?:b){1,1})))");
}

#[test]
fn test_or_find_after_other_units_starts_a_new_alternation() {
    let mut builder = RegExprBuilder::new();
    builder.either_find("a").or_find("b").then("c").either_find("d").or_find("e");
    let expression = builder.expression();
    assert_eq!(expression.matches('|').count(), 2);
    assert!(expression.contains("(?:(?:c){1,1})"));
}

#[test]
fn test_spliced_source_is_not_modified() {
    let mut source = RegExprBuilder::new();
    source.exactly(1).of("a").as_group().either_find("b");
    let snapshot = source.clone();

    let mut dest = RegExprBuilder::new();
    dest.like(&source).append(&source).either_find(&source).or_find(&source);
    let _ = dest.build();

    assert_eq!(source, snapshot);
}

#[test]
fn test_optional_pattern_with_group() -> Result<()> {
    let pair = repeated_pair();
    let expr = RegExprBuilder::new()
        .start_of_input()
        .exactly(1).of("x").as_group()
        .optional(&pair)
        .then("y")
        .end_of_input()
        .build();

    assert!(expr.matches("xy")?);
    assert!(expr.matches("xaaaay")?);
    assert!(!expr.matches("xaay")?);
    Ok(())
}

#[test]
fn test_inverted_range_is_reported_by_the_engine() {
    let expr = RegExprBuilder::new().min(7).max(3).of("p").build();
    assert_eq!(expr.expression(), "(?:(?:p){7,3})");
    assert!(expr.matches("ppp").is_err());
}

#[test]
fn test_lone_either_stays_in_sequence() -> Result<()> {
    let expr = RegExprBuilder::new()
        .start_of_input()
        .either_find("a")
        .then("b")
        .end_of_input()
        .build();

    assert!(expr.matches("ab")?);
    assert!(!expr.matches("ba")?);
    Ok(())
}

#[test]
fn test_lone_either_group_is_numbered_first() -> Result<()> {
    let mut captured = RegExprBuilder::new();
    captured.exactly(1).of("x").as_group();

    let mut builder = RegExprBuilder::new();
    builder
        .start_of_input()
        .either_find(&captured)
        .exactly(1).of("y").as_group()
        .exactly(1).of_group(1)
        .exactly(1).of_group(2)
        .end_of_input();
    let expr = builder.build();

    assert_eq!(builder.groups_declared(), 2);
    assert!(expr.matches("xyxy")?);
    assert!(!expr.matches("xyyx")?);
    Ok(())
}
