//! 不正な式のテスト

use super::*;
use exprtree::parser::{build_ast, MAX_DEPTH};
use exprtree::Span;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test]
fn test_invalid_character() {
    assert_eq!(
        parse_error("2 + a"),
        ParseError::InvalidCharacter {
            ch: 'a',
            span: Span::new(4, 5)
        }
    );
}

#[test_case("1.2.3" ; "two decimal points")]
#[test_case("." ; "lone decimal point")]
#[test_case("1 + .." ; "double point operand")]
fn test_invalid_number(source: &str) {
    assert!(matches!(parse_error(source), ParseError::InvalidToken { .. }));
}

#[test]
fn test_invalid_number_reports_text_and_span() {
    assert_eq!(
        parse_error("4 * 1..2"),
        ParseError::InvalidToken {
            token: "1..2".to_string(),
            span: Span::new(4, 8)
        }
    );
}

#[test_case(")" ; "lone closing")]
#[test_case("2 + 3)" ; "extra closing")]
#[test_case("(2 + 3))" ; "one closing too many")]
#[test_case("(2 + 3" ; "unclosed opening")]
#[test_case("((2 + 3)" ; "one opening too many")]
#[test_case(") 2 (" ; "reversed")]
fn test_mismatched_parentheses(source: &str) {
    assert!(matches!(
        parse_error(source),
        ParseError::MismatchedParentheses { .. }
    ));
}

#[test]
fn test_unclosed_parenthesis_is_not_drained_as_an_operator() {
    // 閉じられていない "(" は後置記法に流さず、変換時点でエラーにする
    assert_eq!(
        to_postfix("1 + (2 * 3"),
        Err(ParseError::MismatchedParentheses {
            span: Span::new(4, 5)
        })
    );
}

#[test_case("2 +" ; "trailing operator")]
#[test_case("+ 2" ; "leading operator")]
#[test_case("- 5" ; "no unary minus")]
#[test_case("2 * * 3" ; "doubled operator")]
fn test_insufficient_operands(source: &str) {
    assert_eq!(parse_error(source), ParseError::InsufficientOperands);
}

#[test_case("" ; "empty")]
#[test_case("   " ; "spaces only")]
#[test_case("\t" ; "tab only")]
#[test_case("()" ; "empty parentheses")]
#[test_case("2 3" ; "two operands")]
#[test_case("(2)(3)" ; "no implicit multiplication")]
fn test_malformed_expression(source: &str) {
    assert_eq!(parse_error(source), ParseError::MalformedExpression);
}

#[test]
fn test_build_rejects_unknown_tokens() {
    assert_eq!(
        build_ast(&["1", "2", "x"]),
        Err(ParseError::InvalidBuildToken {
            token: "x".to_string()
        })
    );
}

#[test]
fn test_all_parse_errors_are_invalid_expressions() {
    for source in ["2 + a", "1.2.3", "(2", "2 +", ""] {
        let message = parse_error(source).to_string();
        assert!(
            message.starts_with("Invalid expression: "),
            "unexpected message for {:?}: {}",
            source,
            message
        );
    }
}

/// `1 <op> 1 <op> ... 1` の形の長い式を作る
fn long_chain(op: &str, operators: usize) -> String {
    let mut source = String::from("1");
    for _ in 0..operators {
        source.push_str(&format!(" {} 1", op));
    }
    source
}

#[test_case("+" ; "left associative addition")]
#[test_case("-" ; "left associative subtraction")]
#[test_case("^" ; "right associative power")]
fn test_very_long_chain_is_rejected(op: &str) {
    let source = long_chain(op, 100_000);
    assert_eq!(
        parse_error(&source),
        ParseError::TooDeep { limit: MAX_DEPTH }
    );
}

#[test]
fn test_deeply_nested_parentheses_are_rejected() {
    let depth = 100_000;
    let source = format!("{}1{}", "(1 + ".repeat(depth), ")".repeat(depth));
    assert_eq!(
        parse_error(&source),
        ParseError::TooDeep { limit: MAX_DEPTH }
    );
}

#[test]
fn test_depth_error_is_an_invalid_expression() {
    let message = parse_error(&long_chain("*", MAX_DEPTH)).to_string();
    assert_eq!(
        message,
        format!("Invalid expression: nesting deeper than {} levels", MAX_DEPTH)
    );
}
