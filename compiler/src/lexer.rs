use std::str::FromStr;

use lazy_static::lazy_static;

use crate::{
    error::LexError,
    pos::{BytePos, WithTokenMetadata},
    scanner::{pair, Scanner},
    token::Token,
};

const LINE_COMMENT: u16 = pair(b"//");
const BLOCK_COMMENT_OPEN: u16 = pair(b"/*");
const BLOCK_COMMENT_CLOSE: u16 = pair(b"*/");
const COLON_EQ: u16 = pair(b":=");
const ARROW: u16 = pair(b"=>");

lazy_static! {
    static ref IDENTIFIER_START: [bool; 256] = {
        let mut table = [false; 256];
        for b in (b'a'..=b'z').chain(b'A'..=b'Z') {
            table[b as usize] = true;
        }
        table[b'_' as usize] = true;

        table
    };
    static ref IDENTIFIER_CONTINUE: [bool; 256] = {
        let mut table = *IDENTIFIER_START;
        for b in b'0'..=b'9' {
            table[b as usize] = true;
        }

        table
    };
}

pub struct Lexer<'a> {
    scanner: Scanner<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(buf: &'a [u8]) -> Lexer<'a> {
        Lexer {
            scanner: Scanner::new(buf),
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<WithTokenMetadata<Token>>, LexError> {
        let mut tokens: Vec<WithTokenMetadata<Token>> = Vec::new();

        while !self.scanner.is_at_end() {
            let start = self.scanner.pos;
            let line = self.scanner.line();

            if let Some(token) = self.match_token()? {
                tokens.push(WithTokenMetadata::new(
                    token,
                    start,
                    BytePos(self.scanner.pos.0 - 1),
                    line,
                ));
            }
        }

        Ok(tokens)
    }

    fn match_token(&mut self) -> Result<Option<Token>, LexError> {
        if let Some(p) = self.scanner.peek_pair() {
            match p {
                LINE_COMMENT => {
                    self.scanner.advance(2);
                    // The newline, or the end of the buffer, ends the comment.
                    self.scanner.consume_while(|b| b != b'\n');
                    return Ok(None);
                }
                BLOCK_COMMENT_OPEN => {
                    self.skip_block_comment()?;
                    return Ok(None);
                }
                COLON_EQ => {
                    self.scanner.advance(2);
                    return Ok(Some(Token::ColonEq));
                }
                ARROW => {
                    self.scanner.advance(2);
                    return Ok(Some(Token::Arrow));
                }
                _ => {}
            }
        }

        let offset = self.scanner.pos.0;
        let c = match self.scanner.next() {
            Some(c) => c,
            None => return Ok(None),
        };

        match c {
            b'(' => Ok(Some(Token::LeftParen)),
            b')' => Ok(Some(Token::RightParen)),
            b';' => Ok(Some(Token::Semicolon)),
            b' ' | b'\t' | b'\n' => Ok(None),
            b'"' => self.tokenize_string(offset).map(Some),
            c if IDENTIFIER_START[c as usize] => Ok(Some(self.tokenize_ident(offset))),
            byte => Err(LexError::UnexpectedCharacter { byte, offset }),
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let offset = self.scanner.pos.0;
        self.scanner.advance(2);

        let mut depth: usize = 1;
        while depth > 0 {
            match self.scanner.peek_pair() {
                Some(BLOCK_COMMENT_OPEN) => {
                    self.scanner.advance(2);
                    depth += 1;
                }
                Some(BLOCK_COMMENT_CLOSE) => {
                    self.scanner.advance(2);
                    depth -= 1;
                }
                Some(_) => {
                    self.scanner.next();
                }
                None => return Err(LexError::UnterminatedBlockComment { offset }),
            }
        }

        Ok(())
    }

    /// Scans past the closing quote; `offset` is where the opening quote sits.
    fn tokenize_string(&mut self, offset: usize) -> Result<Token, LexError> {
        let begin = self.scanner.pos;

        loop {
            match self.scanner.next() {
                None => return Err(LexError::UnterminatedStringLiteral { offset }),
                Some(b'"') => break,
                Some(b'\\') => {
                    self.scanner.next();
                }
                Some(_) => {}
            }
        }

        let end = BytePos(self.scanner.pos.0 - 1);
        let text = self.scanner.slice(begin, end);

        Ok(Token::StringLit(text.to_vec()))
    }

    /// `offset` is where the already consumed start character sits.
    fn tokenize_ident(&mut self, offset: usize) -> Token {
        self.scanner.consume_while(|b| IDENTIFIER_CONTINUE[b as usize]);

        let text = self.scanner.slice(BytePos(offset), self.scanner.pos);
        let name = String::from_utf8_lossy(text).into_owned();

        match Token::from_str(&name) {
            Ok(keyword) => keyword,
            Err(_) => Token::Identifier(name),
        }
    }
}
