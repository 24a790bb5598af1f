//! AST構築のテスト

use super::*;
use exprtree::ast::BinaryOp;
use exprtree::parser::build_ast;
use pretty_assertions::assert_eq;

#[test]
fn test_tree_shape_for_precedence() {
    let ast = assert_parse_success("2 + 3 * 4");
    let expected = Node::operator(
        BinaryOp::Add,
        Node::operand(2.0),
        Node::operator(BinaryOp::Multiply, Node::operand(3.0), Node::operand(4.0)),
    );
    assert_eq!(ast, expected);
}

#[test]
fn test_tree_shape_for_left_associativity() {
    let ast = assert_parse_success("10 - 2 - 3");
    let expected = Node::operator(
        BinaryOp::Subtract,
        Node::operator(BinaryOp::Subtract, Node::operand(10.0), Node::operand(2.0)),
        Node::operand(3.0),
    );
    assert_eq!(ast, expected);
}

#[test]
fn test_tree_shape_for_right_associativity() {
    let ast = assert_parse_success("2 ^ 3 ^ 2");
    let expected = Node::operator(
        BinaryOp::Power,
        Node::operand(2.0),
        Node::operator(BinaryOp::Power, Node::operand(3.0), Node::operand(2.0)),
    );
    assert_eq!(ast, expected);
}

#[test]
fn test_build_from_hand_written_postfix() {
    let ast = build_ast(&["1", "2", "+", "3", "4", "-", "*"]).unwrap();
    assert_eq!(ast.to_string(), "((1 + 2) * (3 - 4))");
}

#[test]
fn test_build_accepts_owned_strings() {
    let postfix = vec!["6".to_string(), "3".to_string(), "/".to_string()];
    assert_eq!(build_ast(&postfix).unwrap().evaluate(), Ok(2.0));
}

#[test]
fn test_every_operator_has_two_children() {
    fn check(node: &Node) -> usize {
        match node {
            Node::Operand(_) => 0,
            Node::Operator(o) => 1 + check(&o.left) + check(&o.right),
        }
    }

    let ast = assert_parse_success("1 + 2 * 3 ^ 4 - (5 / 6)");
    let operators = check(&ast);
    // n 個の二項演算子を持つ木は n + 1 個の葉を持つ
    assert_eq!(operators, 5);
    assert_eq!(ast.node_count(), 2 * operators + 1);
}
