use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;
use std::fmt;

/// Byte range of a match within its source
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Span<'code> {
    source: &'code str,
    pub start: usize,
    pub end: usize,
}

impl<'code> Span<'code> {
    pub fn new(source: &'code str, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= source.len());
        Span { source, start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The matched text
    pub fn as_str(&self) -> &'code str {
        &self.source[self.start..self.end]
    }
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Parser that pairs the output of another parser with the span it matched
///
/// The span starts after leading whitespace, so it covers only what the
/// wrapped parser itself consumed.
#[derive(Clone)]
pub struct Spanned<P> {
    parser: P,
}

impl<P> Spanned<P> {
    pub fn new(parser: P) -> Self {
        Spanned { parser }
    }
}

impl<'code, P> Parser<'code> for Spanned<P>
where
    P: Parser<'code>,
{
    type Output = (P::Output, Span<'code>);

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let start = cursor.skip_whitespace().offset();
        match self.parser.parse(cursor) {
            ParseResult::Success { value, rest } => {
                let span = Span::new(cursor.source(), start, rest.offset());
                ParseResult::success((value, span), rest)
            }
            ParseResult::Failure(failure) => ParseResult::Failure(failure),
        }
    }

    fn name(&self) -> Cow<'_, str> {
        self.parser.name()
    }
}

/// Extension trait to add .spanned() method support for parsers
pub trait SpannedExt<'code>: Parser<'code> + Sized {
    fn spanned(self) -> Spanned<Self> {
        Spanned::new(self)
    }
}

impl<'code, P> SpannedExt<'code> for P where P: Parser<'code> {}
