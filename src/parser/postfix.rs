//! 中置記法から後置記法への変換（操車場アルゴリズム）

use crate::ast::{format_number, BinaryOp, Span};
use crate::error::{ParseError, ParseResult};
use crate::lexer::{tokenize, Token, TokenWithPosition};

/// 演算子スタックの要素
#[derive(Debug, Clone, Copy)]
enum StackEntry {
    LeftParen(Span),
    Operator(BinaryOp),
}

/// 式を後置記法のトークン列に変換する
///
/// 字句解析のエラーはそのまま返す。
pub fn to_postfix(expression: &str) -> ParseResult<Vec<String>> {
    let tokens = tokenize(expression)?;
    postfix_from_tokens(&tokens)
}

/// トークン化済みの列を後置記法に変換する
pub fn postfix_from_tokens(tokens: &[TokenWithPosition]) -> ParseResult<Vec<String>> {
    let mut output: Vec<String> = Vec::new();
    let mut stack: Vec<StackEntry> = Vec::new();

    for item in tokens {
        match &item.token {
            Token::Number(text) => {
                let value: f64 = text.parse().map_err(|_| ParseError::InvalidToken {
                    token: text.clone(),
                    span: item.span,
                })?;
                output.push(format_number(value));
            }

            Token::LeftParen => stack.push(StackEntry::LeftParen(item.span)),

            Token::RightParen => loop {
                match stack.pop() {
                    Some(StackEntry::Operator(op)) => output.push(op.symbol().to_string()),
                    Some(StackEntry::LeftParen(_)) => break,
                    None => {
                        return Err(ParseError::MismatchedParentheses { span: item.span });
                    }
                }
            },

            token => {
                let op = operator_for(token).ok_or_else(|| ParseError::InvalidToken {
                    token: token.to_string(),
                    span: item.span,
                })?;

                while let Some(StackEntry::Operator(top)) = stack.last().copied() {
                    if !should_pop(top, op) {
                        break;
                    }
                    output.push(top.symbol().to_string());
                    stack.pop();
                }
                stack.push(StackEntry::Operator(op));
            }
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Operator(op) => output.push(op.symbol().to_string()),
            StackEntry::LeftParen(span) => {
                return Err(ParseError::MismatchedParentheses { span });
            }
        }
    }

    log::debug!("postfix: {}", output.join(" "));
    Ok(output)
}

fn operator_for(token: &Token) -> Option<BinaryOp> {
    match token {
        Token::Plus => Some(BinaryOp::Add),
        Token::Minus => Some(BinaryOp::Subtract),
        Token::Star => Some(BinaryOp::Multiply),
        Token::Slash => Some(BinaryOp::Divide),
        Token::Caret => Some(BinaryOp::Power),
        _ => None,
    }
}

/// スタック上の演算子 `top` を、入ってきた `incoming` より先に出力すべきか
fn should_pop(top: BinaryOp, incoming: BinaryOp) -> bool {
    if incoming.is_right_associative() {
        top.precedence() > incoming.precedence()
    } else {
        top.precedence() >= incoming.precedence()
    }
}
