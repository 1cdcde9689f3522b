use crate::cursor::{Cursor, anchored};
use crate::parser::Parser;
use crate::result::ParseResult;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

static DECIMAL: Lazy<Regex> = Lazy::new(|| {
    anchored(r"[+-]?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("decimal pattern is valid")
});

static INTEGER: Lazy<Regex> =
    Lazy::new(|| anchored(r"[+-]?[0-9]+").expect("integer pattern is valid"));

/// Parser that matches a numeric literal and converts it with [`FromStr`]
///
/// A literal that matches the pattern but does not fit the target type (an
/// out of range integer, say) is a failure at the literal's start.
pub struct Number<T> {
    regex: &'static Regex,
    name: &'static str,
    expected: &'static str,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Clone for Number<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Number<T> {}

impl<'code, T> Parser<'code> for Number<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Output = T;

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let Some(m) = self.regex.find(cursor.remaining()) else {
            return ParseResult::failure(
                cursor,
                format!("expected {}", self.expected),
                self.name,
            );
        };

        match m.as_str().parse::<T>() {
            Ok(value) => ParseResult::success(value, cursor.advance(cursor.offset() + m.end())),
            Err(e) => ParseResult::failure(
                cursor,
                format!("invalid {} `{}`: {}", self.name, m.as_str(), e),
                self.name,
            ),
        }
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name)
    }
}

/// Parser that matches a decimal number with optional sign, fraction and exponent
///
/// Accepts `12`, `-0.5`, `.25` and `6.02e23`, but not `5.` or `e3`.
pub fn decimal() -> Number<f64> {
    Number {
        regex: &DECIMAL,
        name: "decimal",
        expected: "a decimal number",
        _phantom: PhantomData,
    }
}

/// Parser that matches an integer with optional sign
pub fn integer() -> Number<i64> {
    Number {
        regex: &INTEGER,
        name: "integer",
        expected: "an integer",
        _phantom: PhantomData,
    }
}
