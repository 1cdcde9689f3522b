use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// The second parser starts where the first one stopped. If the first parser
/// fails, the second is never run and the first failure is returned as is.
///
/// Chaining `.then()` produces nested tuples like `((a, b), c)` rather than
/// flat ones; Rust has no variadic generics, and the nesting spells out the
/// parsing order when destructuring. Use [`sequence`](crate::sequence) for
/// a flat list of same-typed values.
///
/// ```
/// use textcomb::prelude::*;
/// use textcomb::text::{integer, literal};
///
/// let ((whole, _), frac) = integer()
///     .then(literal("."))
///     .then(integer())
///     .parse_str("12.5")
///     .unwrap();
/// assert_eq!((whole, frac), (12, 5));
/// ```
#[derive(Clone)]
pub struct Then<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Then { first, second }
    }
}

impl<'code, P1, P2> Parser<'code> for Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.first.parse(cursor) {
            ParseResult::Success { value, rest } => {
                self.second.parse(rest).map(|second| (value, second))
            }
            ParseResult::Failure(failure) => ParseResult::Failure(failure),
        }
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("then")
    }
}

/// Convenience function to create a Then parser
pub fn then<'code, P1, P2>(first: P1, second: P2) -> Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Then::new(first, second)
}

/// Extension trait to add .then() method support for parsers
pub trait ThenExt<'code>: Parser<'code> + Sized {
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<'code>,
    {
        Then::new(self, other)
    }
}

/// Implement ThenExt for all parsers
impl<'code, P> ThenExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_fn::from_fn;
    use crate::text::{literal, regex};
    use std::cell::Cell;

    #[test]
    fn test_then_both_succeed() {
        let parser = literal("A").then(literal("5"));
        let result = parser.parse_str("A5xyz");

        assert_eq!(result.value(), Some(&("A", "5")));
        assert_eq!(result.remaining(), "xyz");
    }

    #[test]
    fn test_then_first_fails_without_running_second() {
        let calls = Cell::new(0);
        let counting = from_fn("counting", |cursor| {
            calls.set(calls.get() + 1);
            ParseResult::success((), cursor)
        });
        let parser = literal("A").then(&counting);

        let result = parser.parse_str("Bxyz");
        assert!(result.is_failure());
        assert_eq!(result.failure_ref().unwrap().parser, "literal[A]");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_then_second_failure_is_propagated() {
        let parser = then(literal("A"), literal("5"));
        let result = parser.parse_str("Axyz");

        let failure = result.failure_ref().unwrap();
        assert_eq!(failure.parser, "literal[5]");
        assert_eq!(failure.rest.offset(), 1);
    }

    #[test]
    fn test_then_chain_with_whitespace() {
        let digit = regex("[0-9]").unwrap();
        let parser = (&digit).then(&digit).then(&digit);
        let result = parser.parse_str("1 2 3 4");

        assert_eq!(result.value(), Some(&(("1", "2"), "3")));
        // Whitespace before "4" is only skipped by the next parser to run
        assert_eq!(result.remaining(), " 4");
    }
}
