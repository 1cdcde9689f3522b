use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
///
/// A rule that refers to itself (or to a rule that refers back to it) must do
/// so through `lazy`; building the reference eagerly recurses forever before
/// any input is read. Such rules return [`BoxedParser`](crate::BoxedParser)
/// so their type can be written down.
#[derive(Clone)]
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("lazy")
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}
