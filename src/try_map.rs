use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;
use std::fmt;

/// Parser that converts the output of another parser with a fallible function
///
/// When the conversion returns `Err`, the parser fails at the position where
/// the wrapped parser started, with the error's text as the message.
#[derive(Clone)]
pub struct TryMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> TryMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Self { parser, mapper }
    }
}

impl<'code, P, F, U, E> Parser<'code> for TryMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Result<U, E>,
    E: fmt::Display,
{
    type Output = U;

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor) {
            ParseResult::Success { value, rest } => match (self.mapper)(value) {
                Ok(mapped) => ParseResult::success(mapped, rest),
                Err(e) => ParseResult::failure(cursor, e.to_string(), "try_map"),
            },
            ParseResult::Failure(failure) => ParseResult::Failure(failure),
        }
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("try_map")
    }
}

/// Extension trait to add try_map method to all parsers
pub trait TryMapExt<'code>: Parser<'code> + Sized {
    fn try_map<F, U, E>(self, mapper: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, E>,
        E: fmt::Display,
    {
        TryMap::new(self, mapper)
    }
}

impl<'code, P: Parser<'code>> TryMapExt<'code> for P {}

/// Convenience function to create a TryMap parser
pub fn try_map<'code, P, F, U, E>(parser: P, mapper: F) -> TryMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Result<U, E>,
    E: fmt::Display,
{
    TryMap::new(parser, mapper)
}
