use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser combinator whose second parser depends on the value of the first
///
/// The first parser's value (not its cursor) is fed into `next`, which builds
/// the parser to run on the remaining input. This is how context-sensitive
/// grammars and left folds are written:
///
/// ```
/// use textcomb::prelude::*;
/// use textcomb::text::{integer, literal};
///
/// // 10 - 3 - 2 folds to (10 - 3) - 2
/// let minus = integer().and_then(|first| {
///     literal("-")
///         .save_right(integer())
///         .rep()
///         .map(move |rest| rest.into_iter().fold(first, |acc, n| acc - n))
/// });
/// assert_eq!(minus.parse_str("10 - 3 - 2").unwrap(), 5);
/// ```
#[derive(Clone)]
pub struct AndThen<P, F> {
    parser: P,
    next: F,
}

impl<P, F> AndThen<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        AndThen { parser, next }
    }
}

impl<'code, P, F, Q> Parser<'code> for AndThen<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            ParseResult::Success { value, rest } => (self.next)(value).parse(rest),
            ParseResult::Failure(failure) => ParseResult::Failure(failure),
        }
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("and_then")
    }
}

/// Convenience function to create an AndThen parser
pub fn and_then<'code, P, F, Q>(parser: P, next: F) -> AndThen<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    AndThen::new(parser, next)
}

/// Extension trait to add .and_then() method support for parsers
pub trait AndThenExt<'code>: Parser<'code> + Sized {
    fn and_then<F, Q>(self, next: F) -> AndThen<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        AndThen::new(self, next)
    }
}

/// Implement AndThenExt for all parsers
impl<'code, P> AndThenExt<'code> for P where P: Parser<'code> {}
