//! Main parser coordinator
//!
//! This module provides the [`Parser`] session and the core parsing
//! infrastructure: the two-token cursor, the top-level statement loop, error
//! recovery and the expectation helpers shared by every grammar routine.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, cursor helpers, recovery, and coordination
//! - `statements`: Parsing `let`, `return`, expression and block statements
//! - `expressions`: Parsing expressions with a Pratt (precedence climbing) table
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! # Errors
//!
//! Grammar routines return [`ParseResult`] and bail out with `?` on the first
//! problem. Only [`Parser::parse_program`] turns a failure into a recorded
//! diagnostic, so a failed statement costs exactly one entry and never stops
//! the parse.

use crate::parser::ast::*;
use crate::parser::diagnostics::{Diagnostics, ParseError};
use crate::parser::expressions::{InfixParseFn, Precedence, PrefixParseFn};
use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenKind, TokenSource};
use rustc_hash::FxHashMap;

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest expression tree a session will build. Every prefix operator,
/// grouping, block and chained infix operator counts as one level.
pub const MAX_NESTING: usize = 256;

/// What the top-level loop does after a statement fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Recovery {
    /// Skip ahead to the `;` or `}` that ends the failed statement (or to end
    /// of input) before resuming. Terminators inside blocks the statement
    /// opened are stepped over.
    #[default]
    Statement,
    /// Resume right after the token the failed statement started on.
    Token,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    pub recovery: Recovery,
}

/// Recursive descent parser for Monkey
///
/// One session parses one input. It owns its token source, the
/// `current`/`peek` cursor and the diagnostics collected along the way.
pub struct Parser<S: TokenSource> {
    source: S,
    pub(crate) current: Token,
    pub(crate) peek: Token,
    diagnostics: Diagnostics,
    config: ParserConfig,
    /// Unmatched `{` among the tokens before `current`
    brace_depth: usize,
    /// Depth of the expression tree under construction
    pub(crate) nesting: usize,
    pub(crate) prefix_fns: FxHashMap<TokenKind, PrefixParseFn<S>>,
    pub(crate) infix_fns: FxHashMap<TokenKind, (Precedence, InfixParseFn<S>)>,
}

impl Parser<Lexer> {
    /// Build a parser that reads straight from source text.
    pub fn from_source(source: &str) -> Self {
        Parser::new(Lexer::new(source))
    }
}

impl<S: TokenSource> Parser<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, ParserConfig::default())
    }

    /// Create a parser and read two tokens, so `current` and `peek` are both
    /// set before any grammar routine runs.
    pub fn with_config(mut source: S, config: ParserConfig) -> Self {
        let current = source.next_token();
        let peek = source.next_token();
        Self {
            source,
            current,
            peek,
            diagnostics: Diagnostics::new(),
            config,
            brace_depth: 0,
            nesting: 0,
            prefix_fns: Self::prefix_table(),
            infix_fns: Self::infix_table(),
        }
    }

    /// Parse the entire program.
    ///
    /// Always returns a program; statements that fail to parse are left out
    /// and reported through [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_is(TokenKind::Eof) {
            let base_depth = self.brace_depth;
            match self.parse_statement() {
                Ok(statement) => program.statements.push(statement),
                Err(err) => {
                    self.diagnostics.push(err);
                    if self.config.recovery == Recovery::Statement {
                        self.synchronize(base_depth);
                    }
                }
            }
            // Unconditional, so every iteration consumes at least one token
            self.next_token();
        }

        program
    }

    pub fn errors(&self) -> &[ParseError] {
        self.diagnostics.as_slice()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    pub fn config(&self) -> ParserConfig {
        self.config
    }

    /// The token source this session pulls from
    pub fn source(&self) -> &S {
        &self.source
    }

    // ===== Helper methods =====

    /// Shift `peek` into `current` and pull a fresh `peek`.
    pub(crate) fn next_token(&mut self) {
        match self.current.kind {
            TokenKind::LBrace => self.brace_depth += 1,
            TokenKind::RBrace => self.brace_depth = self.brace_depth.saturating_sub(1),
            _ => {}
        }
        let next = self.source.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Count one more level of nesting, failing past [`MAX_NESTING`].
    pub(crate) fn deepen(&mut self) -> ParseResult<()> {
        if self.nesting >= MAX_NESTING {
            return Err(ParseError::TooDeep {
                limit: MAX_NESTING,
                location: self.current.location,
            });
        }
        self.nesting += 1;
        Ok(())
    }

    /// Run `parse` one nesting level deeper.
    pub(crate) fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let depth = self.nesting;
        let result = self.deepen().and_then(|()| parse(self));
        self.nesting = depth;
        result
    }

    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advance if `peek` has the given kind, otherwise fail without moving.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.peek_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(self.peek_error(kind))
        }
    }

    pub(crate) fn peek_error(&self, expected: TokenKind) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            actual: self.peek.kind,
            location: self.peek.location,
        }
    }

    /// Consume a trailing `;` if one follows.
    pub(crate) fn skip_optional_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    /// The current token as an identifier node
    pub(crate) fn current_identifier(&self) -> Identifier {
        Identifier {
            token: self.current.clone(),
            value: self.current.literal.clone(),
        }
    }

    /// Move forward to the end of the statement that started at `base_depth`:
    /// a `;` at that depth, the `}` closing the block the statement opened
    /// (plus a `;` right after it), or end of input. A `}` followed by `else`
    /// does not end an `if`.
    fn synchronize(&mut self, base_depth: usize) {
        loop {
            match self.current.kind {
                TokenKind::Eof => return,
                TokenKind::Semicolon if self.brace_depth <= base_depth => return,
                TokenKind::RBrace
                    if self.brace_depth == base_depth + 1 && !self.peek_is(TokenKind::Else) =>
                {
                    self.skip_optional_semicolon();
                    return;
                }
                _ => self.next_token(),
            }
        }
    }
}

/// Parse source text with the default configuration, returning the program
/// together with everything that went wrong.
pub fn parse(source: &str) -> (Program, Diagnostics) {
    let mut parser = Parser::from_source(source);
    let program = parser.parse_program();
    (program, parser.into_diagnostics())
}
