use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails. The rest cursor is where the last successful match ended.
/// An inner parser that succeeds without consuming input repeats forever.
#[derive(Clone)]
pub struct Rep<P> {
    parser: P,
}

impl<P> Rep<P> {
    pub fn new(parser: P) -> Self {
        Rep { parser }
    }
}

impl<'code, P> Parser<'code> for Rep<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn apply(&self, mut cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();

        // The first failure ends the repetition and is dropped
        while let ParseResult::Success { value, rest } = self.parser.parse(cursor) {
            results.push(value);
            cursor = rest;
        }

        ParseResult::success(results, cursor)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("rep")
    }
}

/// Convenience function to create a Rep parser
pub fn rep<'code, P>(parser: P) -> Rep<P>
where
    P: Parser<'code>,
{
    Rep::new(parser)
}

/// Extension trait to add .rep() method support for parsers
pub trait RepExt<'code>: Parser<'code> + Sized {
    fn rep(self) -> Rep<Self> {
        Rep::new(self)
    }
}

/// Implement RepExt for all parsers
impl<'code, P> RepExt<'code> for P where P: Parser<'code> {}
