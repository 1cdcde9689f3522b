use super::pattern::RegexParser;
use crate::cursor::anchored;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    anchored(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}")
        .expect("email pattern is valid")
});

/// Parser that matches an email address of the form `local@domain.tld`
///
/// This is a practical pattern, not full RFC 5322: quoted local parts and
/// IP literal domains are rejected.
pub fn email() -> RegexParser {
    RegexParser::with_name(EMAIL.clone(), "email", "an email address")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com")]
    #[case("first.last+tag@mail.example.org")]
    #[case("a_b%c@sub-domain.co")]
    fn test_accepts(#[case] input: &str) {
        let result = email().parse_str(input);

        assert_eq!(result.value(), Some(&input));
        assert!(result.rest().is_at_end());
    }

    #[rstest]
    #[case("@example.com")]
    #[case("user@")]
    #[case("user@localhost")]
    #[case("user@example.c")]
    fn test_rejects(#[case] input: &str) {
        let failure = email().parse_str(input).into_result().unwrap_err();

        assert_eq!(failure.parser, "email");
        assert_eq!(failure.message, "input does not match an email address");
    }

    #[test]
    fn test_stops_after_address() {
        let result = email().parse_str("  bob@example.com, alice@example.com");

        assert_eq!(result.value(), Some(&"bob@example.com"));
        assert_eq!(result.remaining(), ", alice@example.com");
    }
}
