use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// A parser built from a raw transform and a name
///
/// The transform receives the cursor after whitespace skipping and decides
/// everything else itself.
#[derive(Clone)]
pub struct FnParser<F> {
    name: Cow<'static, str>,
    transform: F,
}

impl<F> FnParser<F> {
    pub fn new(name: impl Into<Cow<'static, str>>, transform: F) -> Self {
        FnParser {
            name: name.into(),
            transform,
        }
    }
}

impl<'code, F, T> Parser<'code> for FnParser<F>
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, T>,
{
    type Output = T;

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (self.transform)(cursor)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

/// Build a parser from a name and a transform
///
/// ```
/// use textcomb::{from_fn, Parser, ParseResult};
///
/// let upper = from_fn("upper", |cursor| match cursor.remaining().chars().next() {
///     Some(c) if c.is_uppercase() => {
///         ParseResult::success(c, cursor.advance(cursor.offset() + c.len_utf8()))
///     }
///     _ => ParseResult::failure(cursor, "expected an uppercase letter", "upper"),
/// });
/// assert_eq!(upper.parse_str("  Xy").unwrap(), 'X');
/// ```
pub fn from_fn<'code, F, T>(name: impl Into<Cow<'static, str>>, transform: F) -> FnParser<F>
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, T>,
{
    FnParser::new(name, transform)
}
