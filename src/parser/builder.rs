//! 後置記法のトークン列からASTを構築する

use crate::ast::{BinaryOp, Node};
use crate::error::{ParseError, ParseResult};

/// 構築できる木の最大の深さ
///
/// 評価や各種表記の生成は木の深さだけ再帰するので、これを超える式は構築時に拒否する。
pub const MAX_DEPTH: usize = 512;

/// 後置記法のトークン列から木を構築する
///
/// 数値として解釈できるトークンは葉に、1文字の演算子は直前の2つの部分木を
/// 左右の子に持つ節になる。最後にスタックに残る木はちょうど1つでなければならない。
/// 深さが [`MAX_DEPTH`] を超える木は `TooDeep` になる。
pub fn build_ast<S: AsRef<str>>(postfix: &[S]) -> ParseResult<Node> {
    // 部分木とその深さ
    let mut stack: Vec<(Node, usize)> = Vec::new();

    for token in postfix {
        let token = token.as_ref();

        if let Ok(value) = token.parse::<f64>() {
            stack.push((Node::operand(value), 1));
            continue;
        }

        let op = single_operator(token).ok_or_else(|| ParseError::InvalidBuildToken {
            token: token.to_string(),
        })?;

        if stack.len() < 2 {
            return Err(ParseError::InsufficientOperands);
        }
        let (right, right_depth) = stack.pop().ok_or(ParseError::InsufficientOperands)?;
        let (left, left_depth) = stack.pop().ok_or(ParseError::InsufficientOperands)?;

        let depth = 1 + left_depth.max(right_depth);
        if depth > MAX_DEPTH {
            return Err(ParseError::TooDeep { limit: MAX_DEPTH });
        }
        stack.push((Node::operator(op, left, right), depth));
    }

    if stack.len() != 1 {
        return Err(ParseError::MalformedExpression);
    }
    let (root, _) = stack.pop().ok_or(ParseError::MalformedExpression)?;

    log::debug!("built tree with {} nodes: {}", root.node_count(), root);
    Ok(root)
}

fn single_operator(token: &str) -> Option<BinaryOp> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => BinaryOp::from_symbol(symbol),
        _ => None,
    }
}
