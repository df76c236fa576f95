use colored::Colorize;
use compiler::{Token, WithTokenMetadata};

/// Keywords in bright magenta, string literals in green behind an opening
/// quote, identifiers in blue, punctuation as written.
pub fn render_token(token: &Token) -> String {
    match token {
        Token::Fun | Token::Let => token.to_string().bright_magenta().to_string(),
        Token::StringLit(v) => format!("\"{}", String::from_utf8_lossy(v)).green().to_string(),
        Token::Identifier(v) => v.blue().to_string(),
        t => t.to_string(),
    }
}

pub fn render_tokens(tokens: &[WithTokenMetadata<Token>]) -> String {
    tokens
        .iter()
        .map(|t| render_token(&t.value))
        .collect::<Vec<String>>()
        .join(" ")
}
