use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always succeeds with a fixed value without consuming input
#[derive(Clone)]
pub struct Succeed<T> {
    value: T,
}

impl<T> Succeed<T> {
    pub fn new(value: T) -> Self {
        Succeed { value }
    }
}

impl<'code, T> Parser<'code> for Succeed<T>
where
    T: Clone,
{
    type Output = T;

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        ParseResult::success(self.value.clone(), cursor)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("success")
    }
}

/// Parser that always fails with a fixed message without consuming input
pub struct Fail<T> {
    message: Cow<'static, str>,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Fail<T> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Fail {
            message: message.into(),
            _phantom: PhantomData,
        }
    }
}

impl<T> Clone for Fail<T> {
    fn clone(&self) -> Self {
        Fail::new(self.message.clone())
    }
}

impl<'code, T> Parser<'code> for Fail<T> {
    type Output = T;

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        ParseResult::failure(cursor, self.message.clone(), "failure")
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("failure")
    }
}

/// Convenience function to create a parser that always yields `value`
pub fn success<T>(value: T) -> Succeed<T>
where
    T: Clone,
{
    Succeed::new(value)
}

/// Convenience function to create a parser that always fails with `message`
pub fn failure<T>(message: impl Into<Cow<'static, str>>) -> Fail<T> {
    Fail::new(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::or::OrExt;
    use crate::text::literal;

    #[test]
    fn test_success_consumes_nothing() {
        let result = success(42).parse_str("abc");

        assert_eq!(result.value(), Some(&42));
        assert_eq!(result.rest().offset(), 0);
    }

    #[test]
    fn test_success_after_whitespace() {
        let result = success("x").parse_str("   abc");
        assert_eq!(result.remaining(), "abc");
    }

    #[test]
    fn test_success_on_empty_input() {
        let result = success(String::from("default")).parse_str("");

        assert_eq!(result.value(), Some(&String::from("default")));
        assert!(result.rest().is_at_end());
    }

    #[test]
    fn test_failure_reports_message() {
        let result = failure::<i32>("not implemented").parse_str("abc");
        let failure = result.into_result().unwrap_err();

        assert_eq!(failure.message, "not implemented");
        assert_eq!(failure.parser, "failure");
        assert_eq!(failure.rest.offset(), 0);
    }

    #[test]
    fn test_failure_as_last_alternative() {
        let parser = literal("yes").or(literal("no")).or(failure("expected yes or no"));

        assert_eq!(parser.parse_str("no").unwrap(), "no");
        let failure = parser.parse_str("maybe").into_result().unwrap_err();
        assert_eq!(failure.message, "expected yes or no");
    }
}
