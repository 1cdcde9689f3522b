//! Whole grammars built from the public API

use regex::RegexBuilder;
use textcomb::prelude::*;
use textcomb::text::{RegexParser, decimal, end, literal, regex};
use textcomb::{BoxedParser, Cursor, SkipPattern, between, lazy};

fn fold(first: f64, rest: Vec<(&str, f64)>) -> f64 {
    rest.into_iter().fold(first, |acc, (op, n)| match op {
        "+" => acc + n,
        "-" => acc - n,
        "*" => acc * n,
        _ => acc / n,
    })
}

// expr = term (("+" | "-") term)*
fn expr<'code>() -> BoxedParser<'code, f64> {
    term()
        .then(literal("+").or(literal("-")).then(term()).rep())
        .map(|(first, rest)| fold(first, rest))
        .named("expr")
        .boxed()
}

// term = factor (("*" | "/") factor)*
fn term<'code>() -> BoxedParser<'code, f64> {
    factor()
        .then(literal("*").or(literal("/")).then(factor()).rep())
        .map(|(first, rest)| fold(first, rest))
        .named("term")
        .boxed()
}

// factor = decimal | "(" expr ")"
fn factor<'code>() -> BoxedParser<'code, f64> {
    decimal()
        .or(between(literal("("), lazy(expr), literal(")")))
        .named("factor")
        .boxed()
}

#[test]
fn test_arithmetic_precedence() {
    assert_eq!(expr().parse_str("(1 + 2) * 3").unwrap(), 9.0);
    assert_eq!(expr().parse_str("(7 - 1) / (1 + 2)").unwrap(), 2.0);
    assert_eq!(expr().parse_str("1 + 2 * 3").unwrap(), 7.0);
    assert_eq!(expr().parse_str("2 * (3 + (4 - 1)) / 4").unwrap(), 3.0);
}

#[test]
fn test_arithmetic_left_associative() {
    assert_eq!(expr().parse_str("10 - 3 - 2").unwrap(), 5.0);
    assert_eq!(expr().parse_str("64 / 4 / 2").unwrap(), 8.0);
}

#[test]
fn test_arithmetic_whole_input() {
    let program = expr().save_left(end());

    assert!(program.parse_str(" (1 + 2) * 3 \n").is_success());

    let failure = program.parse_str("1 + 2)").into_result().unwrap_err();
    assert_eq!(failure.parser, "end");
    assert_eq!(failure.rest.offset(), 5);

    let failure = program.parse_str("(1 + 2").into_result().unwrap_err();
    assert_eq!(failure.parser, "literal[)]");
}

#[test]
fn test_tag_without_skip_keeps_whitespace() {
    let tag = between(literal("<a>"), regex("[^<]*").unwrap(), literal("</a>"));
    let cursor = Cursor::with_skip("<a>  hello</a>", None);

    assert_eq!(tag.parse(cursor).unwrap(), "  hello");
}

#[test]
fn test_tag_with_custom_skip() {
    let tag = between(literal("<a>"), regex("[^<]*").unwrap(), literal("</a>"));
    let skip = SkipPattern::new("x+").unwrap();
    let cursor = Cursor::with_skip("<a>xxxhello</a>", Some(&skip));

    assert_eq!(tag.parse(cursor).unwrap(), "hello");
}

#[test]
fn test_tag_with_default_skip() {
    let tag = between(literal("<a>"), regex("[^<]*").unwrap(), literal("</a>"));
    assert_eq!(tag.parse_str("<a>  hello</a>").unwrap(), "hello");
}

#[test]
fn test_digits_in_sequence() {
    let digit = regex("[0-9]").unwrap();
    let result = (&digit).then(&digit).then(&digit).parse_str("1 2 3 4");

    assert_eq!(result.value(), Some(&(("1", "2"), "3")));
    assert_eq!(result.remaining(), " 4");
}

#[test]
fn test_repeated_digits() {
    let digit = regex("[0-9]").unwrap();
    let result = digit.rep().parse_str("1 2 3 4 a");

    assert_eq!(result.value(), Some(&vec!["1", "2", "3", "4"]));
    assert_eq!(result.remaining(), " a");
}

#[test]
fn test_decimal_list() {
    let result = decimal().rep1_sep(literal(",")).parse_str("1,2,3,5,8,13");

    assert_eq!(result.value(), Some(&vec![1.0, 2.0, 3.0, 5.0, 8.0, 13.0]));
    assert_eq!(result.remaining(), "");
}

#[test]
fn test_failure_report() {
    let key = regex("[a-z]+").unwrap();
    let entry = (&key).save_left(literal("=")).then(decimal());
    let config = entry.rep1_sep(literal(";")).save_left(end());

    let source = "width = 80;\nheight = ?;\ndepth = 3";
    let failure = config.parse_str(source).into_result().unwrap_err();
    let report = failure.to_string();

    assert!(report.starts_with("Syntax error at line 1, byte offset 10 in end:"));
    assert!(report.contains("  > 1 | width = 80;"));
    assert!(report.contains("    2 | height = ?;"));
}

#[test]
fn test_case_insensitive_keywords() {
    let keyword = RegexBuilder::new("select|from")
        .case_insensitive(true)
        .build()
        .unwrap();
    let keyword = RegexParser::from_regex(&keyword);
    let ident = regex("[a-z_]+").unwrap();
    let query = (&keyword).save_right(&ident).then((&keyword).save_right(&ident));

    assert_eq!(
        query.parse_str("SELECT name From users").unwrap(),
        ("name", "users")
    );
}
