use std::ascii;
use std::fmt::Display;

use thiserror::Error;

use crate::token::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Unterminated block comment starting at {offset} bytes")]
    UnterminatedBlockComment { offset: usize },

    #[error("Unterminated string literal starting at {offset} bytes")]
    UnterminatedStringLiteral { offset: usize },

    #[error("Unexpected character: {} at {offset} bytes", escape_byte(.byte))]
    UnexpectedCharacter { byte: u8, offset: usize },
}

fn escape_byte(byte: &u8) -> String {
    ascii::escape_default(*byte).to_string()
}

impl LexError {
    /// Byte offset of the opening delimiter or of the offending byte.
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnterminatedBlockComment { offset }
            | LexError::UnterminatedStringLiteral { offset }
            | LexError::UnexpectedCharacter { offset, .. } => *offset,
        }
    }
}

/// What the parser wanted when it found something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Token(TokenKind),
    ExpressionStart,
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "`{}`", kind),
            Expected::ExpressionStart => f.write_str("the start of an expression"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unexpected end of file")]
    UnexpectedEndOfInput,

    #[error("Unexpected token `{found}` at token {token_index}, wanted {expected}")]
    UnexpectedToken {
        found: Token,
        token_index: usize,
        expected: Expected,
    },
}

impl ParseError {
    pub fn token_index(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedEndOfInput => None,
            ParseError::UnexpectedToken { token_index, .. } => Some(*token_index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompilerError {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::{CompilerError, Expected, LexError, ParseError};
    use crate::token::{Token, TokenKind};

    #[test]
    fn test_lex_error_messages() {
        assert_eq!(
            LexError::UnexpectedCharacter {
                byte: b'|',
                offset: 7
            }
            .to_string(),
            "Unexpected character: | at 7 bytes"
        );
        assert_eq!(
            LexError::UnexpectedCharacter {
                byte: 0xff,
                offset: 0
            }
            .to_string(),
            "Unexpected character: \\xff at 0 bytes"
        );
        assert_eq!(
            LexError::UnterminatedStringLiteral { offset: 3 }.to_string(),
            "Unterminated string literal starting at 3 bytes"
        );
    }

    #[test]
    fn test_lex_error_offset() {
        assert_eq!(LexError::UnterminatedBlockComment { offset: 12 }.offset(), 12);
        assert_eq!(
            LexError::UnexpectedCharacter {
                byte: b'#',
                offset: 5
            }
            .offset(),
            5
        );
    }

    #[test]
    fn test_parse_error_messages() {
        let err = ParseError::UnexpectedToken {
            found: Token::Semicolon,
            token_index: 3,
            expected: Expected::ExpressionStart,
        };
        assert_eq!(
            err.to_string(),
            "Unexpected token `;` at token 3, wanted the start of an expression"
        );
        assert_eq!(err.token_index(), Some(3));

        let err = ParseError::UnexpectedToken {
            found: Token::Identifier("y".into()),
            token_index: 0,
            expected: Expected::Token(TokenKind::Let),
        };
        assert_eq!(err.to_string(), "Unexpected token `y` at token 0, wanted `let`");
        assert_eq!(ParseError::UnexpectedEndOfInput.token_index(), None);
    }

    #[test]
    fn test_compiler_error_from() {
        let err: CompilerError = ParseError::UnexpectedEndOfInput.into();
        assert_eq!(err.to_string(), "Parse error: Unexpected end of file");

        let err: CompilerError = LexError::UnterminatedBlockComment { offset: 0 }.into();
        assert_eq!(
            err,
            CompilerError::Lex(LexError::UnterminatedBlockComment { offset: 0 })
        );
    }
}
