//! Expression parsing implementation
//!
//! This module handles parsing of Monkey expressions with a Pratt parser:
//! every token kind that can start an expression has a prefix routine, every
//! token kind that can continue one has an infix routine and a binding power.
//! Both tables are keyed by [`TokenKind`] and built once per parser session.
//!
//! # Supported Expressions
//!
//! - Literals: integers, `true`, `false`
//! - Identifiers
//! - Prefix operators: `!`, `-`
//! - Infix operators: `+ - * / < > == !=`
//! - Grouping: `( expr )`
//! - Conditionals: `if (cond) { ... } else { ... }`
//! - Function literals: `fn(a, b) { ... }`
//! - Calls: `callee(arg, ...)`
//!
//! # Precedence
//!
//! From loosest to tightest: equality, comparison, sums, products, prefix
//! operators, calls. All infix operators are left-associative.

use crate::parser::ast::*;
use crate::parser::diagnostics::ParseError;
use crate::parser::parse::{ParseResult, Parser};
use crate::parser::token::{TokenKind, TokenSource};
use rustc_hash::FxHashMap;

/// Binding power of an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,      // ==
    LessGreater, // > or <
    Sum,         // +
    Product,     // *
    Prefix,      // -x or !x
    Call,        // f(x)
}

pub(crate) type PrefixParseFn<S> = fn(&mut Parser<S>) -> ParseResult<Expression>;
pub(crate) type InfixParseFn<S> = fn(&mut Parser<S>, Expression) -> ParseResult<Expression>;

impl<S: TokenSource> Parser<S> {
    pub(crate) fn prefix_table() -> FxHashMap<TokenKind, PrefixParseFn<S>> {
        let entries: [(TokenKind, PrefixParseFn<S>); 9] = [
            (TokenKind::Ident, Self::parse_identifier),
            (TokenKind::Int, Self::parse_integer_literal),
            (TokenKind::True, Self::parse_boolean),
            (TokenKind::False, Self::parse_boolean),
            (TokenKind::Bang, |p| p.parse_prefix_expression(UnOp::Not)),
            (TokenKind::Minus, |p| p.parse_prefix_expression(UnOp::Neg)),
            (TokenKind::LParen, Self::parse_grouped_expression),
            (TokenKind::If, Self::parse_if_expression),
            (TokenKind::Function, Self::parse_function_literal),
        ];
        entries.into_iter().collect()
    }

    pub(crate) fn infix_table() -> FxHashMap<TokenKind, (Precedence, InfixParseFn<S>)> {
        let entries: [(TokenKind, Precedence, InfixParseFn<S>); 9] = [
            (TokenKind::Eq, Precedence::Equals, |p, left| {
                p.parse_infix_expression(left, BinOp::Eq)
            }),
            (TokenKind::NotEq, Precedence::Equals, |p, left| {
                p.parse_infix_expression(left, BinOp::NotEq)
            }),
            (TokenKind::Lt, Precedence::LessGreater, |p, left| {
                p.parse_infix_expression(left, BinOp::Lt)
            }),
            (TokenKind::Gt, Precedence::LessGreater, |p, left| {
                p.parse_infix_expression(left, BinOp::Gt)
            }),
            (TokenKind::Plus, Precedence::Sum, |p, left| {
                p.parse_infix_expression(left, BinOp::Add)
            }),
            (TokenKind::Minus, Precedence::Sum, |p, left| {
                p.parse_infix_expression(left, BinOp::Sub)
            }),
            (TokenKind::Asterisk, Precedence::Product, |p, left| {
                p.parse_infix_expression(left, BinOp::Mul)
            }),
            (TokenKind::Slash, Precedence::Product, |p, left| {
                p.parse_infix_expression(left, BinOp::Div)
            }),
            (TokenKind::LParen, Precedence::Call, Self::parse_call_expression),
        ];
        entries
            .into_iter()
            .map(|(kind, precedence, parse_fn)| (kind, (precedence, parse_fn)))
            .collect()
    }

    /// Parse an expression whose operators all bind tighter than `precedence`
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        let depth = self.nesting;
        let result = self.parse_operator_chain(precedence);
        self.nesting = depth;
        result
    }

    /// Prefix routine for `current`, then infix routines while they bind
    /// tighter than `precedence`. Each link deepens the tree by one level.
    fn parse_operator_chain(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        self.deepen()?;
        let prefix = self
            .prefix_fns
            .get(&self.current.kind)
            .copied()
            .ok_or_else(|| ParseError::NoPrefixParse {
                kind: self.current.kind,
                location: self.current.location,
            })?;
        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) {
            let Some(&(binding_power, infix)) = self.infix_fns.get(&self.peek.kind) else {
                break;
            };
            if precedence >= binding_power {
                break;
            }
            self.deepen()?;
            self.next_token();
            left = infix(self, left)?;
        }

        Ok(left)
    }

    fn current_precedence(&self) -> Precedence {
        self.infix_fns
            .get(&self.current.kind)
            .map(|&(precedence, _)| precedence)
            .unwrap_or(Precedence::Lowest)
    }

    fn parse_identifier(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Identifier(self.current_identifier()))
    }

    fn parse_integer_literal(&mut self) -> ParseResult<Expression> {
        let token = self.current.clone();
        let value = token
            .literal
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidInteger {
                literal: token.literal.clone(),
                location: token.location,
            })?;

        Ok(Expression::Integer(IntegerLiteral { token, value }))
    }

    fn parse_boolean(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Boolean(BooleanLiteral {
            token: self.current.clone(),
            value: self.current_is(TokenKind::True),
        }))
    }

    /// Parse prefix operator application: !x, -x
    fn parse_prefix_expression(&mut self, operator: UnOp) -> ParseResult<Expression> {
        let token = self.current.clone();
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    /// Parse binary operator application, with `current` on the operator
    fn parse_infix_expression(&mut self, left: Expression, operator: BinOp) -> ParseResult<Expression> {
        let token = self.current.clone();
        let precedence = self.current_precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;

        Ok(Expression::Infix(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    /// Parse parenthesized expression
    fn parse_grouped_expression(&mut self) -> ParseResult<Expression> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Ok(expr)
    }

    /// Parse if expression: if (cond) { ... } [else { ... }]
    fn parse_if_expression(&mut self) -> ParseResult<Expression> {
        let token = self.current.clone();

        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(Expression::If(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    /// Parse function literal: fn(params) { body }
    fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        let token = self.current.clone();

        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expression::Function(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    /// Parse parameter list, starting on `(` and ending on `)`
    fn parse_function_parameters(&mut self) -> ParseResult<Vec<Identifier>> {
        let mut params = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Ok(params);
        }

        self.expect_peek(TokenKind::Ident)?;
        params.push(self.current_identifier());

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Ident)?;
            params.push(self.current_identifier());
        }

        self.expect_peek(TokenKind::RParen)?;
        Ok(params)
    }

    /// Parse call, with `current` on the `(` following the callee
    fn parse_call_expression(&mut self, function: Expression) -> ParseResult<Expression> {
        let token = self.current.clone();
        let arguments = self.parse_argument_list()?;

        Ok(Expression::Call(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    /// Parse argument list: (expr, expr, ...)
    fn parse_argument_list(&mut self) -> ParseResult<Vec<Expression>> {
        let mut args = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Ok(args);
        }

        self.next_token();
        args.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            args.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(TokenKind::RParen)?;
        Ok(args)
    }
}
