use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Runs two parsers in sequence and keeps only the left value (`<~`)
#[derive(Clone)]
pub struct SaveLeft<P1, P2> {
    left: P1,
    right: P2,
}

impl<P1, P2> SaveLeft<P1, P2> {
    pub fn new(left: P1, right: P2) -> Self {
        SaveLeft { left, right }
    }
}

impl<'code, P1, P2> Parser<'code> for SaveLeft<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.left.parse(cursor) {
            ParseResult::Success { value, rest } => self.right.parse(rest).map(|_| value),
            ParseResult::Failure(failure) => ParseResult::Failure(failure),
        }
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("save_left")
    }
}

/// Runs two parsers in sequence and keeps only the right value (`~>`)
#[derive(Clone)]
pub struct SaveRight<P1, P2> {
    left: P1,
    right: P2,
}

impl<P1, P2> SaveRight<P1, P2> {
    pub fn new(left: P1, right: P2) -> Self {
        SaveRight { left, right }
    }
}

impl<'code, P1, P2> Parser<'code> for SaveRight<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.left.parse(cursor) {
            ParseResult::Success { rest, .. } => self.right.parse(rest),
            ParseResult::Failure(failure) => ParseResult::Failure(failure),
        }
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("save_right")
    }
}

pub fn save_left<'code, P1, P2>(left: P1, right: P2) -> SaveLeft<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    SaveLeft::new(left, right)
}

pub fn save_right<'code, P1, P2>(left: P1, right: P2) -> SaveRight<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    SaveRight::new(left, right)
}

/// Extension trait to add .save_left() and .save_right() method support for parsers
pub trait SaveExt<'code>: Parser<'code> + Sized {
    /// Same as `then`, but discard the right value
    fn save_left<P>(self, other: P) -> SaveLeft<Self, P>
    where
        P: Parser<'code>,
    {
        SaveLeft::new(self, other)
    }

    /// Same as `then`, but discard the left value
    fn save_right<P>(self, other: P) -> SaveRight<Self, P>
    where
        P: Parser<'code>,
    {
        SaveRight::new(self, other)
    }
}

/// Implement SaveExt for all parsers
impl<'code, P> SaveExt<'code> for P where P: Parser<'code> {}
