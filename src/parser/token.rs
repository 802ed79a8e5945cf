//! Token model and the pull protocol the parser consumes
//!
//! The parser never sees raw text. It pulls one [`Token`] at a time from a
//! [`TokenSource`]; the [`Lexer`](super::lexer::Lexer) is the source for
//! source text, and [`TokenStream`] replays an already recorded sequence.

use super::ast::SourceLocation;
use std::collections::VecDeque;
use std::fmt;

/// Every kind of token the language knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    // Identifiers and literals
    Ident,
    Int,

    // Operators
    Assign,   // =
    Plus,     // +
    Minus,    // -
    Bang,     // !
    Asterisk, // *
    Slash,    // /
    Lt,       // <
    Gt,       // >
    Eq,       // ==
    NotEq,    // !=

    // Delimiters
    Comma,     // ,
    Semicolon, // ;
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    pub const ALL: [TokenKind; 27] = [
        TokenKind::Illegal,
        TokenKind::Eof,
        TokenKind::Ident,
        TokenKind::Int,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Bang,
        TokenKind::Asterisk,
        TokenKind::Slash,
        TokenKind::Lt,
        TokenKind::Gt,
        TokenKind::Eq,
        TokenKind::NotEq,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Function,
        TokenKind::Let,
        TokenKind::True,
        TokenKind::False,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Return,
    ];

    /// Map an identifier-shaped word to its keyword kind, if it is one.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        match word {
            "fn" => Some(TokenKind::Function),
            "let" => Some(TokenKind::Let),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "return" => Some(TokenKind::Return),
            _ => None,
        }
    }

    /// The fixed source spelling of this kind, if it has exactly one.
    ///
    /// Identifiers, integers, illegal characters and end-of-input have no
    /// fixed spelling.
    pub fn spelling(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Illegal | TokenKind::Eof | TokenKind::Ident | TokenKind::Int => {
                return None;
            }
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "fn",
            TokenKind::Let => "let",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Return => "return",
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            // Operators and delimiters are named by their spelling
            other => other.spelling().unwrap_or("?"),
        };
        write!(f, "{}", name)
    }
}

/// A single lexical unit. Never mutated after the token source creates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            literal: literal.into(),
            location,
        }
    }

    /// End-of-input marker at the given location.
    pub fn eof(location: SourceLocation) -> Self {
        Self::new(TokenKind::Eof, "", location)
    }

    /// Whether this token has the given kind. The literal and location are
    /// not compared, so an `Eof` token matches `TokenKind::Eof` wherever it
    /// was produced.
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.literal)
    }
}

/// Stateful pull source of tokens.
///
/// Once the input is exhausted an implementation must keep handing out
/// [`TokenKind::Eof`] tokens, however often it is called.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// Replays a recorded token sequence.
///
/// A synthetic end-of-input token is appended when the recording does not end
/// with one, so the parser always terminates.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: VecDeque<Token>,
    eof: Token,
    pulls: usize,
}

impl TokenStream {
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        let tokens: VecDeque<Token> = tokens.into_iter().collect();
        let eof = match tokens.iter().find(|t| t.is(TokenKind::Eof)) {
            Some(eof) => eof.clone(),
            None => {
                let location = tokens
                    .back()
                    .map(|t| t.location)
                    .unwrap_or_else(|| SourceLocation::new(1, 1));
                Token::eof(location)
            }
        };
        Self {
            tokens,
            eof,
            pulls: 0,
        }
    }

    /// Build a stream from bare kinds, giving each token its fixed spelling
    /// (or a stand-in literal for kinds without one).
    pub fn from_kinds(kinds: &[TokenKind]) -> Self {
        let tokens = kinds.iter().enumerate().map(|(i, &kind)| {
            let literal = match kind {
                TokenKind::Ident => "x",
                TokenKind::Int => "5",
                TokenKind::Illegal => "@",
                TokenKind::Eof => "",
                other => other.spelling().unwrap_or_default(),
            };
            Token::new(kind, literal, SourceLocation::new(1, i + 1))
        });
        Self::new(tokens)
    }

    /// How many tokens have been pulled so far, including repeated end-of-input.
    pub fn pulls(&self) -> usize {
        self.pulls
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        self.pulls += 1;
        match self.tokens.pop_front() {
            Some(token) if token.is(TokenKind::Eof) => {
                // Everything after the first end-of-input is unreachable
                self.tokens.clear();
                token
            }
            Some(token) => token,
            None => self.eof.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_compares_kind_only() {
        let plus = Token::new(TokenKind::Plus, "+", SourceLocation::new(3, 7));
        assert!(plus.is(TokenKind::Plus));
        assert!(!plus.is(TokenKind::Minus));

        let eof = Token::eof(SourceLocation::new(9, 1));
        assert!(eof.is(TokenKind::Eof));
        assert!(!Token::new(TokenKind::Ident, "EOF", SourceLocation::new(1, 1)).is(TokenKind::Eof));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::Ident.to_string(), "IDENT");
        assert_eq!(TokenKind::Assign.to_string(), "=");
        assert_eq!(TokenKind::NotEq.to_string(), "!=");
        assert_eq!(TokenKind::Let.to_string(), "LET");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::keyword("let"), Some(TokenKind::Let));
        assert_eq!(TokenKind::keyword("fn"), Some(TokenKind::Function));
        assert_eq!(TokenKind::keyword("letter"), None);
    }

    #[test]
    fn test_every_keyword_round_trips_through_spelling() {
        for kind in TokenKind::ALL {
            if let Some(word) = kind.spelling() {
                if word.chars().all(|c| c.is_ascii_alphabetic()) {
                    assert_eq!(TokenKind::keyword(word), Some(kind));
                }
            }
        }
    }

    #[test]
    fn test_stream_keeps_returning_eof() {
        let mut stream = TokenStream::from_kinds(&[TokenKind::Ident]);
        assert!(stream.next_token().is(TokenKind::Ident));
        for _ in 0..3 {
            assert!(stream.next_token().is(TokenKind::Eof));
        }
        assert_eq!(stream.pulls(), 4);
    }

    #[test]
    fn test_stream_stops_at_recorded_eof() {
        let mut stream =
            TokenStream::from_kinds(&[TokenKind::Eof, TokenKind::Let, TokenKind::Ident]);
        assert!(stream.next_token().is(TokenKind::Eof));
        assert!(stream.next_token().is(TokenKind::Eof));
    }
}
