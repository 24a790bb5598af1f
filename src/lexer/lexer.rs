//! レキサーのメイン実装

use logos::{Lexer as LogosLexer, Logos};

use super::token::Token;
use crate::ast::Span;
use crate::error::{ParseError, ParseResult};

/// 位置情報付きトークン
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPosition {
    pub token: Token,
    pub span: Span,
}

/// 算術式のレキサー
///
/// 認識できない入力は `Token::Error` として返し、走査は続ける。
pub struct Lexer<'a> {
    inner: LogosLexer<'a, Token>,
}

impl<'a> Lexer<'a> {
    /// 新しいレキサーを作成
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: Token::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = TokenWithPosition;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        let span = self.inner.span().into();
        let token = result.unwrap_or(Token::Error);
        Some(TokenWithPosition { token, span })
    }
}

/// 式をトークン化する
///
/// 最初の不正な文字で失敗する。空白のみの入力は空のトークン列になる。
pub fn tokenize(expression: &str) -> ParseResult<Vec<TokenWithPosition>> {
    let mut tokens = Vec::new();

    for item in Lexer::new(expression) {
        if item.token == Token::Error {
            let ch = expression[item.span.start..]
                .chars()
                .next()
                .unwrap_or('\0');
            let span = Span::new(item.span.start, item.span.start + ch.len_utf8());
            return Err(ParseError::InvalidCharacter { ch, span });
        }
        tokens.push(item);
    }

    log::debug!(
        "tokenized {:?} into {} tokens: [{}]",
        expression,
        tokens.len(),
        tokens
            .iter()
            .map(|t| t.token.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(tokens)
}
