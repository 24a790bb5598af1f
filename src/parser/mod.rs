//! パーサーモジュール
//!
//! トークン列を後置記法（逆ポーランド記法）に変換し、そこから抽象構文木（AST）を
//! 組み立てる。演算子の優先順位と結合性は操車場アルゴリズムで処理する。
//!
//! ```text
//! "2 + 3 * 4"  →  ["2", "3", "4", "*", "+"]  →  (2 + (3 * 4))
//! ```
//!
//! `+ - * /` は左結合、`^` は右結合で、`^` が最も強く結合する。

mod builder;
mod postfix;

// 公開API
pub use builder::{build_ast, MAX_DEPTH};
pub use postfix::{postfix_from_tokens, to_postfix};

pub use crate::error::{ParseError, ParseResult};

use crate::ast::Node;

/// 式を解析してASTを返す
///
/// 字句解析 → 後置記法変換 → AST構築 の順に実行し、最初のエラーで止まる。
pub fn parse(expression: &str) -> ParseResult<Node> {
    let postfix = to_postfix(expression)?;
    build_ast(&postfix)
}
