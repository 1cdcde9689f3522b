use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser combinator that matches zero or one occurrence of the given parser
///
/// Yields `Some(value)` on a match. On a failure it yields `None` at the
/// original cursor; the inner failure is dropped.
#[derive(Clone)]
pub struct Opt<P> {
    parser: P,
}

impl<P> Opt<P> {
    pub fn new(parser: P) -> Self {
        Opt { parser }
    }
}

impl<'code, P> Parser<'code> for Opt<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            ParseResult::Success { value, rest } => ParseResult::success(Some(value), rest),
            ParseResult::Failure(_) => ParseResult::success(None, cursor),
        }
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("opt")
    }
}

/// Convenience function to create an Opt parser
pub fn opt<'code, P>(parser: P) -> Opt<P>
where
    P: Parser<'code>,
{
    Opt::new(parser)
}

/// Extension trait to add .opt() method support for parsers
pub trait OptExt<'code>: Parser<'code> + Sized {
    fn opt(self) -> Opt<Self> {
        Opt::new(self)
    }
}

/// Implement OptExt for all parsers
impl<'code, P> OptExt<'code> for P where P: Parser<'code> {}
