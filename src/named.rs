use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::borrow::Cow;

/// A parser with a different display name
///
/// Renaming consumes the parser and returns a new value, so no other holder
/// of the original ever sees its name change. Only diagnostics use the name;
/// parsing behavior is that of the wrapped parser.
#[derive(Clone)]
pub struct Named<P> {
    parser: P,
    name: Cow<'static, str>,
}

impl<P> Named<P> {
    pub fn new(parser: P, name: impl Into<Cow<'static, str>>) -> Self {
        Named {
            parser,
            name: name.into(),
        }
    }
}

impl<'code, P> Parser<'code> for Named<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn apply(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.apply(cursor)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

/// Extension trait to add .named() method support for parsers
pub trait NamedExt<'code>: Parser<'code> + Sized {
    fn named(self, name: impl Into<Cow<'static, str>>) -> Named<Self> {
        Named::new(self, name)
    }
}

/// Implement NamedExt for all parsers
impl<'code, P> NamedExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::not::NotExt;
    use crate::text::literal;

    #[test]
    fn test_named_changes_display_name() {
        let keyword = literal("fn").named("keyword");
        assert_eq!(keyword.name(), "keyword");
    }

    #[test]
    fn test_named_keeps_behavior() {
        let plain = literal("fn");
        let named = literal("fn").named("keyword");

        assert_eq!(named.parse_str(" fn x"), plain.parse_str(" fn x"));
        assert_eq!(named.parse_str("let"), plain.parse_str("let"));
    }

    #[test]
    fn test_renaming_returns_a_new_parser() {
        let original = literal("fn");
        let renamed = original.clone().named(format!("kw-{}", 1));

        assert_eq!(original.name(), "literal[fn]");
        assert_eq!(renamed.name(), "kw-1");
    }

    #[test]
    fn test_name_shows_up_in_lookahead_failure() {
        let parser = literal("fn").named("keyword").not();
        let failure = parser.parse_str("fn").into_result().unwrap_err();

        assert!(failure.message.contains("keyword"));
    }
}
