//! Monkey source code parser
//!
//! This module transforms Monkey source text into an Abstract Syntax Tree (AST):
//! - [`token`]: Token kinds and the [`token::TokenSource`] pull protocol
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: The parser session (tokens → AST)
//! - [`ast`]: AST node definitions and canonical source rendering
//! - [`diagnostics`]: Parse errors, collected rather than raised
//! - [`dump`]: Indented tree rendering for inspection
//!
//! # Supported Language
//!
//! - Statements: `let`, `return`, expression statements; trailing `;` optional
//! - Expressions: integers, booleans, identifiers, prefix `!`/`-`, infix
//!   arithmetic and comparison, grouping, `if`/`else`, `fn` literals, calls
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with a Pratt table for expressions.
//! No external parser generator dependencies.

pub mod ast;
pub mod diagnostics;
pub mod dump;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
pub mod token;

pub use expressions::Precedence;
