use crate::cursor::Cursor;
use crate::error::Location;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Why a parser gave up, and where
///
/// The failure is independent of the value type the parser would have
/// produced, so it passes through `map` and friends untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure<'code> {
    /// Cursor at the position where matching gave up
    pub rest: Cursor<'code>,
    pub message: Cow<'static, str>,
    /// Display name of the parser that produced the failure
    pub parser: Cow<'static, str>,
}

impl<'code> Failure<'code> {
    pub fn new(
        rest: Cursor<'code>,
        message: impl Into<Cow<'static, str>>,
        parser: impl Into<Cow<'static, str>>,
    ) -> Self {
        Failure {
            rest,
            message: message.into(),
            parser: parser.into(),
        }
    }

    pub fn location(&self) -> Location<'code> {
        Location::new(self.rest.source(), self.rest.offset())
    }
}

impl fmt::Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loc = self.location();
        let pos = loc.readable_position();
        writeln!(
            f,
            "Syntax error at line {}, byte offset {} in {}: {}",
            pos.line, pos.byte_offset, self.parser, self.message
        )?;
        writeln!(f)?;
        for line in loc.context_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl Error for Failure<'_> {}

/// Outcome of running a parser: a value and the rest of the input, or a failure
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult<'code, T> {
    Success { value: T, rest: Cursor<'code> },
    Failure(Failure<'code>),
}

impl<'code, T> ParseResult<'code, T> {
    pub fn success(value: T, rest: Cursor<'code>) -> Self {
        ParseResult::Success { value, rest }
    }

    pub fn failure(
        rest: Cursor<'code>,
        message: impl Into<Cow<'static, str>>,
        parser: impl Into<Cow<'static, str>>,
    ) -> Self {
        ParseResult::Failure(Failure::new(rest, message, parser))
    }

    /// Cursor after the match, or at the failure point
    pub fn rest(&self) -> Cursor<'code> {
        match self {
            ParseResult::Success { rest, .. } => *rest,
            ParseResult::Failure(failure) => failure.rest,
        }
    }

    /// Unparsed text after the match, or from the failure point
    pub fn remaining(&self) -> &'code str {
        self.rest().remaining()
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ParseResult::Success { value, .. } => Some(value),
            ParseResult::Failure(_) => None,
        }
    }

    pub fn failure_ref(&self) -> Option<&Failure<'code>> {
        match self {
            ParseResult::Success { .. } => None,
            ParseResult::Failure(failure) => Some(failure),
        }
    }

    /// Transform the value of a success; a failure only changes its type
    pub fn map<U, F>(self, f: F) -> ParseResult<'code, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ParseResult::Success { value, rest } => ParseResult::Success {
                value: f(value),
                rest,
            },
            ParseResult::Failure(failure) => ParseResult::Failure(failure),
        }
    }

    pub fn into_result(self) -> Result<(T, Cursor<'code>), Failure<'code>> {
        match self {
            ParseResult::Success { value, rest } => Ok((value, rest)),
            ParseResult::Failure(failure) => Err(failure),
        }
    }

    /// The parsed value
    ///
    /// # Panics
    ///
    /// On a failure. Reading a value that was never produced is a bug in the
    /// caller; match on the result or use [`ParseResult::into_result`] instead.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            ParseResult::Success { value, .. } => value,
            ParseResult::Failure(failure) => panic!(
                "no result in failure: {} (in {} at byte {})",
                failure.message,
                failure.parser,
                failure.rest.offset()
            ),
        }
    }
}

impl<'code, T> From<ParseResult<'code, T>> for Result<(T, Cursor<'code>), Failure<'code>> {
    fn from(result: ParseResult<'code, T>) -> Self {
        result.into_result()
    }
}
