use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser combinator that runs a list of parsers one after another
///
/// The cursor is threaded left to right and the values are collected in
/// order. The first failure ends the run and is returned unmodified.
///
/// All operands share one type. Mix different parsers by boxing them:
///
/// ```
/// use textcomb::prelude::*;
/// use textcomb::sequence;
/// use textcomb::text::{literal, regex};
///
/// let tag = sequence([
///     literal("<").boxed(),
///     regex("[a-z]+").unwrap().boxed(),
///     literal(">").boxed(),
/// ]);
/// assert_eq!(tag.parse_str("<div>").unwrap(), vec!["<", "div", ">"]);
/// ```
#[derive(Clone)]
pub struct Sequence<P> {
    parsers: Vec<P>,
}

impl<P> Sequence<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Sequence { parsers }
    }
}

impl<'code, P> Parser<'code> for Sequence<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn apply(&self, mut cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            match parser.parse(cursor) {
                ParseResult::Success { value, rest } => {
                    results.push(value);
                    cursor = rest;
                }
                ParseResult::Failure(failure) => return ParseResult::Failure(failure),
            }
        }

        ParseResult::success(results, cursor)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("sequence")
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<'code, P>(parsers: impl IntoIterator<Item = P>) -> Sequence<P>
where
    P: Parser<'code>,
{
    Sequence::new(parsers.into_iter().collect())
}
