//! トークン定義

use logos::Logos;
use std::fmt;

/// 算術式のトークン型
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t]+")] // スペースとタブのみ区切りとして扱う
pub enum Token {
    // 数値リテラル（小数点の重複はここでは検査しない）
    #[regex(r"[0-9.]+", |lex| lex.slice().to_owned())]
    Number(String),

    // 演算子
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,

    // 括弧
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    // 認識できない入力
    Error,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Caret => write!(f, "^"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Error => write!(f, "<error>"),
        }
    }
}
