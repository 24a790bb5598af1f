//! 後置記法変換のテスト

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case("2 + 3 * 4", "2 3 4 * +" ; "multiplication binds tighter than addition")]
#[test_case("2 * 3 + 4", "2 3 * 4 +" ; "multiplication first")]
#[test_case("8 - 6 / 2", "8 6 2 / -" ; "division binds tighter than subtraction")]
#[test_case("2 * 3 ^ 2", "2 3 2 ^ *" ; "power binds tighter than multiplication")]
#[test_case("2 ^ 3 * 2", "2 3 ^ 2 *" ; "power before trailing multiplication")]
fn test_precedence(source: &str, expected: &str) {
    assert_eq!(postfix_of(source), expected);
}

#[test_case("10 - 2 - 3", "10 2 - 3 -" ; "subtraction is left associative")]
#[test_case("100 / 10 / 2", "100 10 / 2 /" ; "division is left associative")]
#[test_case("1 + 2 - 3 + 4", "1 2 + 3 - 4 +" ; "mixed additive chain")]
#[test_case("2 * 3 / 4 * 5", "2 3 * 4 / 5 *" ; "mixed multiplicative chain")]
#[test_case("2 ^ 3 ^ 2", "2 3 2 ^ ^" ; "power is right associative")]
#[test_case("2 ^ 3 ^ 2 ^ 1", "2 3 2 1 ^ ^ ^" ; "long power chain")]
fn test_associativity(source: &str, expected: &str) {
    assert_eq!(postfix_of(source), expected);
}

#[test_case("(2 + 3) * 4", "2 3 + 4 *" ; "grouping overrides precedence")]
#[test_case("2 * (3 + 4)", "2 3 4 + *" ; "grouping on the right")]
#[test_case("(2 ^ 3) ^ 2", "2 3 ^ 2 ^" ; "grouping overrides right associativity")]
#[test_case("10 - (2 - 3)", "10 2 3 - -" ; "grouping overrides left associativity")]
#[test_case("((((7))))", "7" ; "deeply nested single operand")]
#[test_case("(1 + (2 * (3 - 4))) / 5", "1 2 3 4 - * + 5 /" ; "nested groups")]
fn test_parentheses(source: &str, expected: &str) {
    assert_eq!(postfix_of(source), expected);
}

#[test]
fn test_numbers_are_canonicalised() {
    assert_eq!(postfix_of("1.50 + 002 + 3.0"), "1.5 2 + 3 +");
}

#[test]
fn test_no_whitespace_needed() {
    assert_eq!(postfix_of("2+3*4"), postfix_of("2 + 3 * 4"));
    assert_eq!(postfix_of("(2+3)*4"), "2 3 + 4 *");
}

#[test]
fn test_postfix_has_no_parentheses() {
    let postfix = to_postfix("((1 + 2) * (3 + 4)) ^ (5 - 6)").unwrap();
    assert!(postfix.iter().all(|t| t != "(" && t != ")"));
    assert_eq!(postfix.len(), 11);
}
