//! # Introduction
//!
//! monkey is the front end of an interpreter for the Monkey language: it turns
//! source text into an abstract syntax tree and reports every syntax problem it
//! finds along the way, without stopping at the first one.  Parsed programs
//! can be browsed in a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Parsing pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → Program + Diagnostics
//! ```
//!
//! 1. [`parser::lexer`] scans text into [`parser::token::Token`]s.  Any
//!    [`parser::token::TokenSource`] can feed the parser, so a recorded
//!    [`parser::token::TokenStream`] works just as well.
//! 2. [`parser::parse`] drives a recursive descent over statements and a
//!    Pratt table over expressions.
//! 3. [`parser::diagnostics`] collects the problems; a failed statement is
//!    dropped from the program and costs one diagnostic.
//! 4. [`repl`] prints tokens or parsed programs line by line.
//! 5. [`ui`] is the ratatui-based inspector; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use monkey::parser::parse::parse;
//!
//! let (program, diagnostics) = parse("let x = 1 + 2 * 3;");
//! assert!(diagnostics.is_empty());
//! assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
//! ```

pub mod parser;
pub mod repl;
pub mod ui;
