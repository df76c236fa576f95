//! Front end for a small expression language: bytes to tokens to declarations.

use error::{CompilerError, LexError, ParseError};
use lexer::Lexer;
use parser::Parser;

pub mod decl;
pub mod error;
pub mod expr;
mod lexer;
mod parser;
pub mod pos;
mod scanner;
pub mod token;


pub use decl::Declaration;
pub use expr::Expr;
pub use pos::WithTokenMetadata;
pub use token::{Token, TokenKind};

pub fn lex<B: AsRef<[u8]> + ?Sized>(buf: &B) -> Result<Vec<WithTokenMetadata<Token>>, LexError> {
    Lexer::new(buf.as_ref()).tokenize()
}

pub fn parse_tokens(tokens: &[WithTokenMetadata<Token>]) -> Result<Vec<Declaration>, ParseError> {
    Parser::new(tokens).parse()
}

pub fn parse<B: AsRef<[u8]> + ?Sized>(buf: &B) -> Result<Vec<Declaration>, CompilerError> {
    Ok(parse_tokens(&lex(buf)?)?)
}
