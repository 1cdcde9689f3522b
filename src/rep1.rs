use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser combinator that matches one or more occurrences of the given parser
#[derive(Clone)]
pub struct Rep1<P> {
    parser: P,
}

impl<P> Rep1<P> {
    pub fn new(parser: P) -> Self {
        Rep1 { parser }
    }
}

impl<'code, P> Parser<'code> for Rep1<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        // First parse must succeed
        let (first, mut cursor) = match self.parser.parse(cursor) {
            ParseResult::Success { value, rest } => (value, rest),
            ParseResult::Failure(failure) => return ParseResult::Failure(failure),
        };
        let mut results = vec![first];

        while let ParseResult::Success { value, rest } = self.parser.parse(cursor) {
            results.push(value);
            cursor = rest;
        }

        ParseResult::success(results, cursor)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("rep1")
    }
}

/// Convenience function to create a Rep1 parser
pub fn rep1<'code, P>(parser: P) -> Rep1<P>
where
    P: Parser<'code>,
{
    Rep1::new(parser)
}

/// Extension trait to add .rep1() method support for parsers
pub trait Rep1Ext<'code>: Parser<'code> + Sized {
    fn rep1(self) -> Rep1<Self> {
        Rep1::new(self)
    }
}

/// Implement Rep1Ext for all parsers
impl<'code, P> Rep1Ext<'code> for P where P: Parser<'code> {}
