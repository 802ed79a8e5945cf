//! Statement parsing implementation
//!
//! This module handles parsing of every Monkey statement form:
//!
//! - Let statements: `let x = 5;`
//! - Return statements: `return x + 1;`
//! - Expression statements: `add(1, 2);`
//! - Blocks: `{ ... }`, as the bodies of `if` branches and function literals
//!
//! # Grammar
//!
//! ```text
//! statement      ::= let_stmt | return_stmt | expr_stmt
//! let_stmt       ::= "let" identifier "=" expression ";"?
//! return_stmt    ::= "return" expression ";"?
//! expr_stmt      ::= expression ";"?
//! block          ::= "{" statement* "}"
//! ```
//!
//! Every routine starts with `current` on the first token of its construct and
//! leaves `current` on the last token it consumed.

use crate::parser::ast::*;
use crate::parser::diagnostics::ParseError;
use crate::parser::expressions::Precedence;
use crate::parser::parse::{ParseResult, Parser};
use crate::parser::token::{TokenKind, TokenSource};

impl<S: TokenSource> Parser<S> {
    /// Parse a statement, dispatching on the current token
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            _ => self
                .parse_expression_statement()
                .map(Statement::Expression),
        }
    }

    /// Parse let statement: let name = value;
    fn parse_let_statement(&mut self) -> ParseResult<LetStatement> {
        let token = self.current.clone();

        self.expect_peek(TokenKind::Ident)?;
        let name = self.current_identifier();

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(LetStatement { token, name, value })
    }

    /// Parse return statement: return value;
    fn parse_return_statement(&mut self) -> ParseResult<ReturnStatement> {
        let token = self.current.clone();
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(ReturnStatement { token, value })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<ExpressionStatement> {
        let token = self.current.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(ExpressionStatement { token, expression })
    }

    /// Parse block statements, starting on the opening brace and ending on the
    /// closing one
    pub(crate) fn parse_block_statement(&mut self) -> ParseResult<BlockStatement> {
        self.nested(Self::parse_block_body)
    }

    fn parse_block_body(&mut self) -> ParseResult<BlockStatement> {
        let token = self.current.clone();
        let mut statements = Vec::new();
        self.next_token();

        while !self.current_is(TokenKind::RBrace) {
            if self.current_is(TokenKind::Eof) {
                return Err(ParseError::UnexpectedToken {
                    expected: TokenKind::RBrace,
                    actual: TokenKind::Eof,
                    location: self.current.location,
                });
            }
            statements.push(self.parse_statement()?);
            self.next_token();
        }

        Ok(BlockStatement { token, statements })
    }
}
