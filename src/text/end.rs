use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// Parser that succeeds only at the end of the input
#[derive(Debug, Clone, Copy)]
pub struct End;

impl<'code> Parser<'code> for End {
    type Output = ();

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        if cursor.is_at_end() {
            return ParseResult::success((), cursor);
        }
        let found: String = cursor.remaining().chars().take(16).collect();
        ParseResult::failure(
            cursor,
            format!("expected end of input, found `{}`", found),
            "end",
        )
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("end")
    }
}

pub fn end() -> End {
    End
}
