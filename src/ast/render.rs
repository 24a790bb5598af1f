//! 木の文字列表現
//!
//! 前置記法・後置記法・完全括弧付き中置記法・インデント付きの木構造ダンプを生成する。
//! 数値の表記はすべて [`format_number`] に揃える。

use std::fmt;

use super::Node;

/// 数値を文字列化する
///
/// `f64` の最短往復表記を使う（`3.0` は `3`、指数表記にはならない）。
/// 後置記法変換の出力もこの表記なので、再トークン化しても値が変わらない。
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

impl Node {
    /// 前置記法: `<op> <left> <right>`
    pub fn prefix(&self) -> String {
        match self {
            Node::Operand(o) => format_number(o.value),
            Node::Operator(o) => {
                format!("{} {} {}", o.op, o.left.prefix(), o.right.prefix())
            }
        }
    }

    /// 後置記法: `<left> <right> <op>`
    pub fn postfix(&self) -> String {
        match self {
            Node::Operand(o) => format_number(o.value),
            Node::Operator(o) => {
                format!("{} {} {}", o.left.postfix(), o.right.postfix(), o.op)
            }
        }
    }

    /// インデント付きの木構造ダンプ（1ノード1行、子は親より2桁深い）
    pub fn formatted_string(&self, indent: &str) -> String {
        match self {
            Node::Operand(o) => format!("{}Operand: {}", indent, format_number(o.value)),
            Node::Operator(o) => {
                let child_indent = format!("{}  ", indent);
                format!(
                    "{}Operator: {}\n{}\n{}",
                    indent,
                    o.op,
                    o.left.formatted_string(&child_indent),
                    o.right.formatted_string(&child_indent)
                )
            }
        }
    }
}

/// 完全括弧付きの中置記法
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Operand(o) => write!(f, "{}", format_number(o.value)),
            Node::Operator(o) => write!(f, "({} {} {})", o.left, o.op, o.right),
        }
    }
}
