use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser that matches an exact string
///
/// The value is the matched slice of the source, so it borrows from the
/// input rather than from the parser.
#[derive(Debug, Clone)]
pub struct Literal {
    expected: Cow<'static, str>,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }
}

impl<'code> Parser<'code> for Literal {
    type Output = &'code str;

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let remaining = cursor.remaining();

        if remaining.starts_with(self.expected.as_ref()) {
            let end = cursor.offset() + self.expected.len();
            return ParseResult::success(&cursor.source()[cursor.offset()..end], cursor.advance(end));
        }

        let message = if self.expected.starts_with(remaining) {
            format!("expected `{}`, but reached end of input", self.expected)
        } else {
            let found: String = remaining.chars().take(self.expected.chars().count()).collect();
            format!("expected `{}`, found `{}`", self.expected, found)
        };
        ParseResult::failure(cursor, message, format!("literal[{}]", self.expected))
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("literal[{}]", self.expected))
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}
