//! Lexer (tokenizer) for Monkey source code
//!
//! Turns raw source text into [`Token`]s on demand. Characters the language
//! does not know become [`TokenKind::Illegal`] tokens instead of errors, so
//! scanning itself never fails; the parser reports what it cannot use.

use super::ast::SourceLocation;
use super::token::{Token, TokenKind, TokenSource};

/// Lexer for Monkey source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input, ending with (and including) the first
    /// end-of-input token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.is(TokenKind::Eof);
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }

    /// Scan the token starting at the current position
    fn scan_token(&mut self) -> Token {
        self.skip_whitespace();

        let loc = self.current_location();
        let Some(ch) = self.advance() else {
            return Token::eof(loc);
        };

        match ch {
            // Numeric literals
            '0'..='9' => self.number_literal(ch, loc),

            // Identifiers and keywords
            'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(ch, loc),

            // Operators and punctuation
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::Eq, "==", loc)
                } else {
                    Token::new(TokenKind::Assign, "=", loc)
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Token::new(TokenKind::NotEq, "!=", loc)
                } else {
                    Token::new(TokenKind::Bang, "!", loc)
                }
            }
            '+' => Token::new(TokenKind::Plus, "+", loc),
            '-' => Token::new(TokenKind::Minus, "-", loc),
            '*' => Token::new(TokenKind::Asterisk, "*", loc),
            '/' => Token::new(TokenKind::Slash, "/", loc),
            '<' => Token::new(TokenKind::Lt, "<", loc),
            '>' => Token::new(TokenKind::Gt, ">", loc),
            ',' => Token::new(TokenKind::Comma, ",", loc),
            ';' => Token::new(TokenKind::Semicolon, ";", loc),
            '(' => Token::new(TokenKind::LParen, "(", loc),
            ')' => Token::new(TokenKind::RParen, ")", loc),
            '{' => Token::new(TokenKind::LBrace, "{", loc),
            '}' => Token::new(TokenKind::RBrace, "}", loc),

            _ => Token::new(TokenKind::Illegal, ch.to_string(), loc),
        }
    }

    /// Scan numeric literal (integers only, digits kept verbatim)
    fn number_literal(&mut self, first_digit: char, loc: SourceLocation) -> Token {
        let mut num_str = String::new();
        num_str.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                num_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::new(TokenKind::Int, num_str, loc)
    }

    /// Scan identifier or keyword
    fn identifier_or_keyword(&mut self, first_char: char, loc: SourceLocation) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = TokenKind::keyword(&ident).unwrap_or(TokenKind::Ident);
        Token::new(kind, ident, loc)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r' | '\n') = self.peek() {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        self.scan_token()
    }
}
