//! 統一的なエラーハンドリングモジュール
//!
//! 字句解析・後置記法変換・AST構築で発生するエラーは [`ParseError`]、
//! 評価時のエラーは [`EvalError`] にまとめ、両者を [`ExprError`] で包む。

use crate::ast::Span;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use thiserror::Error;

/// exprtree全体の統一エラー型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    /// 解析エラー
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// 評価エラー
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// ファイルI/Oエラー
    #[error("I/O error: {0}")]
    Io(String),
}

impl ExprError {
    /// エラー位置（分かる場合のみ）
    pub fn span(&self) -> Option<Span> {
        match self {
            ExprError::Parse(e) => e.span(),
            ExprError::Eval(_) | ExprError::Io(_) => None,
        }
    }
}

/// 不正な式（InvalidExpression）の詳細
///
/// どの変種も `Invalid expression: <理由>` として表示される。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Invalid expression: invalid character: {ch:?}")]
    InvalidCharacter { ch: char, span: Span },

    #[error("Invalid expression: invalid token {token}")]
    InvalidToken { token: String, span: Span },

    #[error("Invalid expression: mismatched parentheses")]
    MismatchedParentheses { span: Span },

    #[error("Invalid expression: insufficient operands")]
    InsufficientOperands,

    #[error("Invalid expression: invalid token in AST build: {token}")]
    InvalidBuildToken { token: String },

    #[error("Invalid expression: malformed expression")]
    MalformedExpression,

    #[error("Invalid expression: nesting deeper than {limit} levels")]
    TooDeep { limit: usize },
}

impl ParseError {
    /// 元の文字列に対応する位置を返す
    ///
    /// AST構築段階のエラーは後置記法のトークン列から生じるため位置を持たない。
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::InvalidCharacter { span, .. }
            | ParseError::InvalidToken { span, .. }
            | ParseError::MismatchedParentheses { span } => Some(*span),
            ParseError::InsufficientOperands
            | ParseError::InvalidBuildToken { .. }
            | ParseError::MalformedExpression
            | ParseError::TooDeep { .. } => None,
        }
    }

    /// 診断メッセージ用のラベル文言
    pub fn label(&self) -> &'static str {
        match self {
            ParseError::InvalidCharacter { .. } => "this character is not allowed here",
            ParseError::InvalidToken { .. } => "not a valid number",
            ParseError::MismatchedParentheses { .. } => "no matching parenthesis",
            ParseError::InsufficientOperands => "operator is missing an operand",
            ParseError::InvalidBuildToken { .. } => "unexpected token while building the tree",
            ParseError::MalformedExpression => "expression is incomplete",
            ParseError::TooDeep { .. } => "split the expression into smaller parts",
        }
    }
}

/// 評価エラーの詳細
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("Division by zero")]
    DivisionByZero,
}

/// エラー情報とソースの位置情報を含むエラー
#[derive(Debug, Clone)]
pub struct DiagnosticError {
    pub error: ExprError,
    pub file_id: usize,
}

impl DiagnosticError {
    pub fn new(error: ExprError, file_id: usize) -> Self {
        Self { error, file_id }
    }

    /// codespan-reportingのDiagnosticに変換
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        let labels = match (&self.error, self.error.span()) {
            (ExprError::Parse(e), Some(span)) => {
                vec![Label::primary(self.file_id, span.start..span.end).with_message(e.label())]
            }
            _ => vec![],
        };

        let mut diagnostic = Diagnostic::error()
            .with_message(self.error.to_string())
            .with_labels(labels);

        if let ExprError::Parse(e) = &self.error {
            if e.span().is_none() {
                diagnostic = diagnostic.with_notes(vec![e.label().to_string()]);
            }
        }

        diagnostic
    }
}

/// 統一結果型
pub type ExprResult<T> = Result<T, ExprError>;

/// 解析結果型
pub type ParseResult<T> = Result<T, ParseError>;

/// 評価結果型
pub type EvalResult<T> = Result<T, EvalError>;
