//! Abstract Syntax Tree (AST) definitions for arithmetic expressions.
//!
//! A tree is either a single [`Operand`] leaf or an [`Operator`] that owns
//! exactly two subtrees. Trees are never mutated after they are built.

use serde::{Deserialize, Serialize};
use std::fmt;

mod eval;
mod render;

pub use render::format_number;

/// Span information for source location tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// Node of an expression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Operand(Operand),
    Operator(Operator),
}

/// Numeric leaf
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Operand {
    pub value: f64,
}

/// Binary operation owning both of its operands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    pub op: BinaryOp,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::Power,
    ];

    pub const fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '/',
            BinaryOp::Power => '^',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<BinaryOp> {
        match symbol {
            '+' => Some(BinaryOp::Add),
            '-' => Some(BinaryOp::Subtract),
            '*' => Some(BinaryOp::Multiply),
            '/' => Some(BinaryOp::Divide),
            '^' => Some(BinaryOp::Power),
            _ => None,
        }
    }

    /// Binding strength: `+ -` < `* /` < `^`.
    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Subtract => 1,
            BinaryOp::Multiply | BinaryOp::Divide => 2,
            BinaryOp::Power => 3,
        }
    }

    pub const fn is_right_associative(self) -> bool {
        matches!(self, BinaryOp::Power)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Node {
    pub fn operand(value: f64) -> Self {
        Node::Operand(Operand { value })
    }

    pub fn operator(op: BinaryOp, left: Node, right: Node) -> Self {
        Node::Operator(Operator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Number of nodes in the tree, root included
    pub fn node_count(&self) -> usize {
        match self {
            Node::Operand(_) => 1,
            Node::Operator(o) => 1 + o.left.node_count() + o.right.node_count(),
        }
    }

    /// Depth of the tree; a single leaf has depth 1
    pub fn depth(&self) -> usize {
        match self {
            Node::Operand(_) => 1,
            Node::Operator(o) => 1 + o.left.depth().max(o.right.depth()),
        }
    }
}
