use crate::cursor::{Cursor, anchored};
use crate::error::PatternError;
use crate::parser::Parser;
use crate::result::ParseResult;
use regex::Regex;
use std::borrow::Cow;

/// Parser that matches a regular expression at the current position
///
/// A match must start exactly at the cursor. Patterns compiled by this module
/// are anchored, so text further ahead is never searched.
#[derive(Debug, Clone)]
pub struct RegexParser {
    regex: Regex,
    name: Cow<'static, str>,
    expected: Cow<'static, str>,
}

impl RegexParser {
    /// Compile `pattern` into an anchored parser
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Ok(RegexParser {
            regex: anchored(pattern)?,
            name: Cow::Owned(format!("regex[{}]", pattern)),
            expected: Cow::Owned(format!("regex `{}`", pattern)),
        })
    }

    /// Build a parser from an already compiled regex
    ///
    /// The regex is used as given, so options set through
    /// [`RegexBuilder`](regex::RegexBuilder) (case folding, multi-line and so
    /// on) keep applying. It is not anchored: a failed attempt searches the
    /// rest of the input before reporting that no match starts at the cursor.
    /// Prefer [`regex`] when the options can be written inline, like `(?i)`.
    pub fn from_regex(regex: &Regex) -> Self {
        RegexParser {
            regex: regex.clone(),
            name: Cow::Owned(format!("regex[{}]", regex.as_str())),
            expected: Cow::Owned(format!("regex `{}`", regex.as_str())),
        }
    }

    /// Parser over an anchored regex with its own name and expectation
    pub(crate) fn with_name(
        regex: Regex,
        name: &'static str,
        expected: &'static str,
    ) -> Self {
        RegexParser {
            regex,
            name: Cow::Borrowed(name),
            expected: Cow::Borrowed(expected),
        }
    }
}

impl<'code> Parser<'code> for RegexParser {
    type Output = &'code str;

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.regex.find(cursor.remaining()).filter(|m| m.start() == 0) {
            Some(m) => {
                let matched = m.as_str();
                ParseResult::success(matched, cursor.advance(cursor.offset() + m.end()))
            }
            None => ParseResult::failure(
                cursor,
                format!("input does not match {}", self.expected),
                self.name.clone(),
            ),
        }
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

/// Convenience function to create a RegexParser
pub fn regex(pattern: &str) -> Result<RegexParser, PatternError> {
    RegexParser::new(pattern)
}
