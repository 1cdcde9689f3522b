use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
#[derive(Clone)]
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'code, P> Parser<'code> for Not<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            ParseResult::Success { .. } => ParseResult::failure(
                cursor,
                format!("negative lookahead failed: unexpected match of {}", self.parser.name()),
                "not",
            ),
            ParseResult::Failure(_) => ParseResult::success((), cursor),
        }
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("not")
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<'code, P>(parser: P) -> Not<P>
where
    P: Parser<'code>,
{
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt<'code>: Parser<'code> + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<'code, P> NotExt<'code> for P where P: Parser<'code> {}
