//! Property-based tests for the combinator laws

use proptest::prelude::*;
use textcomb::prelude::*;
use textcomb::text::{integer, literal, regex};
use textcomb::Cursor;

proptest! {
    #[test]
    fn literal_matches_its_own_prefix(word in "[a-z]{1,8}", tail in "[a-z0-9 ]{0,8}") {
        let input = format!("{}{}", word, tail);
        let result = literal(word.clone()).parse_str(&input);

        prop_assert_eq!(result.value(), Some(&word.as_str()));
        prop_assert_eq!(result.remaining(), tail.as_str());
    }

    #[test]
    fn regex_matches_leading_digits(input in "[0-9a-z]{0,10}") {
        let digits = regex("[0-9]+").unwrap();
        let result = digits.parse(Cursor::with_skip(&input, None));
        let expected: String = input.chars().take_while(|c| c.is_ascii_digit()).collect();

        if expected.is_empty() {
            prop_assert!(result.is_failure());
        } else {
            prop_assert_eq!(result.value(), Some(&expected.as_str()));
        }
    }

    #[test]
    fn map_identity_changes_nothing(input in "\\PC{0,12}") {
        let mapped = integer().map(|n| n);
        prop_assert_eq!(mapped.parse_str(&input), integer().parse_str(&input));
    }

    #[test]
    fn or_prefers_a_successful_left(input in "[a-z ]{0,12}") {
        let left = regex("[a-c]+").unwrap();
        let right = regex("[a-z]+").unwrap();
        let left_result = left.parse_str(&input);

        if left_result.is_success() {
            prop_assert_eq!((&left).or(&right).parse_str(&input), left_result);
        }
    }

    #[test]
    fn rep_never_fails(input in "\\PC{0,16}") {
        let result = regex("[ab]").unwrap().rep().parse_str(&input);
        prop_assert!(result.is_success());
    }

    #[test]
    fn integer_round_trips(n in any::<i64>()) {
        prop_assert_eq!(integer().parse_str(&n.to_string()).unwrap(), n);
    }
}
