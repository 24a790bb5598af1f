//! Arithmetic Expression Tree Library
//!
//! This library parses arithmetic expressions built from numbers, the
//! operators `+ - * / ^` and parentheses into an expression tree, and
//! evaluates or renders that tree in prefix, postfix and infix notation.
//!
//! ```
//! let ast = exprtree::parse("2 ^ 3 ^ 2").unwrap();
//! assert_eq!(ast.postfix(), "2 3 2 ^ ^");
//! assert_eq!(ast.evaluate(), Ok(512.0));
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod pipeline;

// Re-export commonly used types
pub use ast::{BinaryOp, Node, Operand, Operator, Span};
pub use error::{EvalError, ExprError, ExprResult, ParseError, ParseResult};
pub use lexer::{tokenize, Lexer, Token, TokenWithPosition};
pub use parser::{build_ast, parse, to_postfix};
pub use pipeline::{Evaluation, EvaluationState, Pipeline};
