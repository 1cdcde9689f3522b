use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). It returns a vector of the items only;
/// separator values are dropped.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!["a", "b", "c"]`
/// - `"1;2;3"` with separator `,` → `vec![1]`, rest `";2;3"`
///
/// # Note
/// - Requires at least one element
/// - A trailing separator is not an error: the list ends before it and the
///   separator is left for the next parser
#[derive(Clone)]
pub struct Rep1Sep<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> Rep1Sep<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        Rep1Sep { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for Rep1Sep<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        // Parse the first element (required)
        let (first, mut cursor) = match self.parser.parse(cursor) {
            ParseResult::Success { value, rest } => (value, rest),
            ParseResult::Failure(failure) => return ParseResult::Failure(failure),
        };
        let mut results = vec![first];

        // Each further element must come as a (separator, element) pair
        loop {
            let after_separator = match self.separator.parse(cursor) {
                ParseResult::Success { rest, .. } => rest,
                ParseResult::Failure(_) => break,
            };
            match self.parser.parse(after_separator) {
                ParseResult::Success { value, rest } => {
                    results.push(value);
                    cursor = rest;
                }
                ParseResult::Failure(_) => break,
            }
        }

        ParseResult::success(results, cursor)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("rep1_sep")
    }
}

/// Creates a parser that matches one or more items separated by the given parser
pub fn rep1_sep<'code, P, PS>(parser: P, separator: PS) -> Rep1Sep<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    Rep1Sep::new(parser, separator)
}

/// Extension trait to add .rep1_sep() method support for parsers
pub trait Rep1SepExt<'code>: Parser<'code> + Sized {
    fn rep1_sep<PS>(self, separator: PS) -> Rep1Sep<Self, PS>
    where
        PS: Parser<'code>,
    {
        Rep1Sep::new(self, separator)
    }
}

/// Implement Rep1SepExt for all parsers
impl<'code, P> Rep1SepExt<'code> for P where P: Parser<'code> {}
