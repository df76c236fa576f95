use std::fmt::Display;
use std::str::FromStr;

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum Token {
    Fun,
    Let,
    ColonEq,
    Arrow,
    LeftParen,
    RightParen,
    Semicolon,

    /// Raw bytes between the quotes; escapes are kept as written.
    StringLit(Vec<u8>),
    Identifier(String),
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::StringLit(v) => write!(f, "\"{}\"", String::from_utf8_lossy(v)),
            Token::Identifier(v) => f.write_str(v),
            t => write!(f, "{}", TokenKind::from(t)),
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum TokenKind {
    Fun,
    Let,
    ColonEq,
    Arrow,
    LeftParen,
    RightParen,
    Semicolon,
    StringLit,
    Identifier,
}

impl TokenKind {
    /// Whether a token of this kind can begin an atom, and so continue an
    /// application chain.
    pub fn starts_atom(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::StringLit | TokenKind::Fun | TokenKind::LeftParen
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TokenKind::Fun => "fun",
            TokenKind::Let => "let",
            TokenKind::ColonEq => ":=",
            TokenKind::Arrow => "=>",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Semicolon => ";",
            TokenKind::StringLit => "string-literal",
            TokenKind::Identifier => "identifier",
        })
    }
}

impl FromStr for Token {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "let" => Ok(Token::Let),
            "fun" => Ok(Token::Fun),
            v => Err(format!("Not a valid keyword: {}", v)),
        }
    }
}

impl From<&Token> for TokenKind {
    fn from(value: &Token) -> Self {
        match value {
            Token::Fun => TokenKind::Fun,
            Token::Let => TokenKind::Let,
            Token::ColonEq => TokenKind::ColonEq,
            Token::Arrow => TokenKind::Arrow,
            Token::LeftParen => TokenKind::LeftParen,
            Token::RightParen => TokenKind::RightParen,
            Token::Semicolon => TokenKind::Semicolon,
            Token::StringLit(_) => TokenKind::StringLit,
            Token::Identifier(_) => TokenKind::Identifier,
        }
    }
}

impl From<&crate::pos::WithTokenMetadata<Token>> for TokenKind {
    fn from(t: &crate::pos::WithTokenMetadata<Token>) -> Self {
        TokenKind::from(&t.value)
    }
}
