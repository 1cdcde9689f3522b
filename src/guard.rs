use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser combinator that performs positive lookahead
///
/// Succeeds with () if the given parser matches at the current position and
/// fails otherwise. Never consumes input: the inner parser's rest cursor is
/// thrown away either way, and so is its failure.
#[derive(Clone)]
pub struct Guard<P> {
    parser: P,
}

impl<P> Guard<P> {
    pub fn new(parser: P) -> Self {
        Guard { parser }
    }
}

impl<'code, P> Parser<'code> for Guard<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            ParseResult::Success { .. } => ParseResult::success((), cursor),
            ParseResult::Failure(_) => ParseResult::failure(
                cursor,
                format!("positive lookahead failed: no match of {}", self.parser.name()),
                "guard",
            ),
        }
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("guard")
    }
}

/// Convenience function to create a Guard parser for positive lookahead
pub fn guard<'code, P>(parser: P) -> Guard<P>
where
    P: Parser<'code>,
{
    Guard::new(parser)
}

/// Extension trait to add .guard() method support for parsers
pub trait GuardExt<'code>: Parser<'code> + Sized {
    fn guard(self) -> Guard<Self> {
        Guard::new(self)
    }
}

/// Implement GuardExt for all parsers
impl<'code, P> GuardExt<'code> for P where P: Parser<'code> {}
