use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Ordered choice: the first success wins. The second parser starts from the
/// original cursor, so nothing the first one consumed leaks across. When both
/// fail, only the second failure is reported.
#[derive(Clone)]
pub struct Or<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Or { first, second }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.first.parse(cursor) {
            success @ ParseResult::Success { .. } => success,
            ParseResult::Failure(_) => self.second.parse(cursor),
        }
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("or")
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(first: P1, second: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(first, second)
}
