//! Lexical analysis module for arithmetic expressions.
//!
//! This module splits an expression string into numbers, the operators
//! `+ - * / ^` and parentheses. Spaces and tabs separate tokens; any other
//! character is rejected.

#[allow(clippy::module_inception)]
mod lexer;
mod token;

pub use lexer::{tokenize, Lexer, TokenWithPosition};
pub use token::Token;
