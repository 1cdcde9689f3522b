use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;
use std::rc::Rc;

/// A type-erased parser behind a shared pointer
///
/// Cloning is cheap and every clone runs the same parser. Boxing gives
/// recursive rules a nameable return type and lets parsers of different
/// concrete types share one collection.
///
/// The pointer is an `Rc`, so a `BoxedParser` (and any grammar containing
/// one, which includes every recursive grammar) is neither `Send` nor `Sync`.
/// Such a grammar can only be used from the thread that built it; build one
/// per thread instead. Grammars made only of leaf parsers and combinators are
/// `Send + Sync` whenever their closures are.
pub struct BoxedParser<'code, T>(Rc<dyn Parser<'code, Output = T> + 'code>);

impl<'code, T> BoxedParser<'code, T> {
    pub fn new(parser: impl Parser<'code, Output = T> + 'code) -> Self {
        BoxedParser(Rc::new(parser))
    }
}

impl<T> Clone for BoxedParser<'_, T> {
    fn clone(&self) -> Self {
        BoxedParser(Rc::clone(&self.0))
    }
}

impl<'code, T> Parser<'code> for BoxedParser<'code, T> {
    type Output = T;

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.0.apply(cursor)
    }

    fn name(&self) -> Cow<'_, str> {
        self.0.name()
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}
