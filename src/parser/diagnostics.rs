//! Parse diagnostics
//!
//! Parse problems are recorded, not raised: every failed statement appends one
//! [`ParseError`] to the session's [`Diagnostics`], and the caller decides what
//! to do with them once [`Parser::parse_program`] returns.
//!
//! [`Parser::parse_program`]: super::parse::Parser::parse_program

use crate::parser::ast::SourceLocation;
use crate::parser::token::TokenKind;

/// A single non-fatal parse problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The token after the current one was not the one the grammar requires.
    #[error("expected next token to be {expected}, got {actual} instead")]
    UnexpectedToken {
        expected: TokenKind,
        actual: TokenKind,
        location: SourceLocation,
    },

    /// No expression can start with this kind of token.
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParse {
        kind: TokenKind,
        location: SourceLocation,
    },

    #[error("could not parse {literal:?} as integer")]
    InvalidInteger {
        literal: String,
        location: SourceLocation,
    },

    /// Input nested deeper than the parser will follow.
    #[error("nesting deeper than {limit} levels")]
    TooDeep {
        limit: usize,
        location: SourceLocation,
    },
}

impl ParseError {
    /// Where in the source the problem was found
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::UnexpectedToken { location, .. }
            | ParseError::NoPrefixParse { location, .. }
            | ParseError::InvalidInteger { location, .. }
            | ParseError::TooDeep { location, .. } => *location,
        }
    }
}

/// Ordered, append-only list of the problems found in one parse session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<ParseError>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `true` means the parse was clean
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParseError> {
        self.errors.iter()
    }

    pub fn as_slice(&self) -> &[ParseError] {
        &self.errors
    }

    /// Rendered messages, in the order they were recorded
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a ParseError;
    type IntoIter = std::slice::Iter<'a, ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_token_message() {
        let err = ParseError::UnexpectedToken {
            expected: TokenKind::Ident,
            actual: TokenKind::Assign,
            location: SourceLocation::new(1, 5),
        };
        assert_eq!(
            err.to_string(),
            "expected next token to be IDENT, got = instead"
        );
        assert_eq!(err.location(), SourceLocation::new(1, 5));
    }

    #[test]
    fn test_other_messages() {
        let no_prefix = ParseError::NoPrefixParse {
            kind: TokenKind::Semicolon,
            location: SourceLocation::new(2, 1),
        };
        assert_eq!(no_prefix.to_string(), "no prefix parse function for ; found");

        let bad_int = ParseError::InvalidInteger {
            literal: "99999999999999999999".to_string(),
            location: SourceLocation::new(1, 1),
        };
        assert_eq!(
            bad_int.to_string(),
            "could not parse \"99999999999999999999\" as integer"
        );
    }

    #[test]
    fn test_too_deep_message() {
        let err = ParseError::TooDeep {
            limit: 256,
            location: SourceLocation::new(4, 2),
        };
        assert_eq!(err.to_string(), "nesting deeper than 256 levels");
        assert_eq!(err.location(), SourceLocation::new(4, 2));
    }

    #[test]
    fn test_diagnostics_keep_order_and_duplicates() {
        let err = ParseError::NoPrefixParse {
            kind: TokenKind::RParen,
            location: SourceLocation::new(1, 1),
        };
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());

        diagnostics.push(err.clone());
        diagnostics.push(err);
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(
            diagnostics.messages(),
            vec![
                "no prefix parse function for ) found".to_string(),
                "no prefix parse function for ) found".to_string(),
            ]
        );
    }
}
