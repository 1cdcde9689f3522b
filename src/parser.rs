use crate::cursor::Cursor;
use crate::result::ParseResult;
use std::borrow::Cow;
use std::rc::Rc;

/// Core parser trait for parser combinators
///
/// An implementation supplies the raw transform [`Parser::apply`] and a display
/// name. Callers go through [`Parser::parse`], which skips whitespace first:
///
/// 1. If the cursor's skip pattern matches at the current offset, move past
///    that single match.
/// 2. Run `apply` on the (possibly advanced) cursor.
/// 3. Return its result unchanged.
///
/// Combinators run their operands through `parse` as well, so every nesting
/// level gets its own skip attempt. With a pattern that cannot match twice in
/// a row, such as the default `\s+`, the extra attempts find nothing and
/// wrapping a parser never changes what it matches. With one that can, like
/// `x`, each wrapper skips one more match.
///
/// Parsers hold no mutable state, so one value can be invoked any number of
/// times, from any number of places, with the same behavior.
pub trait Parser<'code> {
    type Output;

    /// The raw transform, without whitespace skipping
    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;

    /// Display name, used in failures and traces
    fn name(&self) -> Cow<'_, str>;

    /// Skip whitespace, then run the transform
    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let result = self.apply(cursor.skip_whitespace());
        if result.is_failure() {
            log_trace!(
                "{} failed at byte {}",
                self.name(),
                result.rest().offset()
            );
        }
        result
    }

    /// Parse `source` from the start, skipping whitespace with the default pattern
    fn parse_str(&self, source: &'code str) -> ParseResult<'code, Self::Output> {
        self.parse(Cursor::new(source))
    }
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).apply(cursor)
    }

    fn name(&self) -> Cow<'_, str> {
        (**self).name()
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).apply(cursor)
    }

    fn name(&self) -> Cow<'_, str> {
        (**self).name()
    }
}

impl<'code, P> Parser<'code> for Rc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).apply(cursor)
    }

    fn name(&self) -> Cow<'_, str> {
        (**self).name()
    }
}
