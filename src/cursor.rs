use crate::error::PatternError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static WHITESPACE: Lazy<SkipPattern> =
    Lazy::new(|| SkipPattern::new(r"\s+").expect("default whitespace pattern is valid"));

/// A pattern that parsers skip before they run
///
/// The pattern is anchored at the start of the remaining input, so it either
/// matches right at the cursor or not at all. It never scans ahead.
#[derive(Clone)]
pub struct SkipPattern {
    pattern: String,
    regex: Regex,
}

impl SkipPattern {
    /// Compile a skip pattern from regex source
    pub fn new(pattern: impl Into<String>) -> Result<Self, PatternError> {
        let pattern = pattern.into();
        let regex = anchored(&pattern)?;
        Ok(SkipPattern { pattern, regex })
    }

    /// The default pattern: one or more whitespace characters
    pub fn whitespace() -> &'static SkipPattern {
        &WHITESPACE
    }

    /// The pattern source as it was given
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Length in bytes of the match at the start of `text`, if any
    pub fn match_len(&self, text: &str) -> Option<usize> {
        self.regex.find(text).map(|m| m.end())
    }
}

impl fmt::Debug for SkipPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SkipPattern").field(&self.pattern).finish()
    }
}

impl PartialEq for SkipPattern {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for SkipPattern {}

/// Compile `pattern` so that it only matches at the start of the haystack
pub(crate) fn anchored(pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(&format!("^(?:{})", pattern)).map_err(|source| PatternError {
        pattern: pattern.to_string(),
        source,
    })
}

/// Immutable position in a source text
///
/// A cursor pairs the source with a byte offset and the skip pattern that is in
/// effect. Cursors are `Copy`; advancing produces a new cursor that shares the
/// source and skip pattern, so any saved cursor stays valid for backtracking.
///
/// Invariant: `offset <= source.len()` and `offset` is on a char boundary.
#[derive(Debug, Copy, Clone)]
pub struct Cursor<'code> {
    source: &'code str,
    offset: usize,
    skip: Option<&'code SkipPattern>,
}

impl<'code> Cursor<'code> {
    /// Cursor at the start of `source` that skips whitespace
    pub fn new(source: &'code str) -> Self {
        Cursor::with_skip(source, Some(SkipPattern::whitespace()))
    }

    /// Cursor at the start of `source` with a custom skip pattern
    ///
    /// Passing `None` disables skipping, so parsers see every character.
    pub fn with_skip(source: &'code str, skip: Option<&'code SkipPattern>) -> Self {
        Cursor {
            source,
            offset: 0,
            skip,
        }
    }

    /// New cursor at `offset` over the same source and skip pattern
    ///
    /// # Panics
    ///
    /// If `offset` is past the end of the source or not on a char boundary.
    pub fn advance(self, offset: usize) -> Self {
        assert!(
            self.source.is_char_boundary(offset),
            "cursor offset {} is outside the source or inside a character (source length {})",
            offset,
            self.source.len()
        );
        Cursor { offset, ..self }
    }

    /// Apply the skip pattern once at the current offset
    ///
    /// Returns the cursor moved past the match, or unchanged when the pattern
    /// does not match here or no pattern is configured.
    pub fn skip_whitespace(self) -> Self {
        let Some(skip) = self.skip else {
            return self;
        };
        match skip.match_len(self.remaining()) {
            Some(len) => self.advance(self.offset + len),
            None => self,
        }
    }

    pub fn source(&self) -> &'code str {
        self.source
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn skip_pattern(&self) -> Option<&'code SkipPattern> {
        self.skip
    }

    /// The unparsed tail of the source
    pub fn remaining(&self) -> &'code str {
        &self.source[self.offset..]
    }

    pub fn is_at_end(&self) -> bool {
        self.offset == self.source.len()
    }
}

impl<'code> From<&'code str> for Cursor<'code> {
    fn from(source: &'code str) -> Self {
        Cursor::new(source)
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && self.source == other.source && self.skip == other.skip
    }
}

impl Eq for Cursor<'_> {}
