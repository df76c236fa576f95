use crate::{
    decl::Declaration,
    error::{Expected, ParseError},
    expr::Expr,
    pos::WithTokenMetadata,
    token::{Token, TokenKind},
};

/// Recursive descent over a lexed token slice, one token of lookahead.
///
/// ```text
/// program     := declaration*
/// declaration := LET IDENTIFIER COLON_EQ expr SEMICOLON
/// expr        := atom atom*
/// atom        := IDENTIFIER | STRING_LIT | FUN IDENTIFIER ARROW expr | L_PAREN expr R_PAREN
/// ```
pub struct Parser<'a> {
    tokens: &'a [WithTokenMetadata<Token>],
    cursor: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [WithTokenMetadata<Token>]) -> Parser<'a> {
        Parser { tokens, cursor: 0 }
    }

    pub fn parse(&mut self) -> Result<Vec<Declaration>, ParseError> {
        let mut declarations: Vec<Declaration> = Vec::new();

        while self.peek().is_some() {
            declarations.push(self.parse_declaration()?);
        }

        Ok(declarations)
    }

    fn peek(&self) -> Option<&'a WithTokenMetadata<Token>> {
        self.tokens.get(self.cursor)
    }

    fn next(&mut self) -> Result<&'a WithTokenMetadata<Token>, ParseError> {
        match self.tokens.get(self.cursor) {
            Some(t) => {
                self.cursor += 1;

                Ok(t)
            }
            None => Err(ParseError::UnexpectedEndOfInput),
        }
    }

    /// Whether the upcoming token extends the current application chain.
    fn continues_application(&self) -> bool {
        match self.peek() {
            Some(t) => TokenKind::from(t).starts_atom(),
            None => false,
        }
    }

    /// Error for the token most recently returned by `next`.
    fn unexpected(&self, found: &Token, expected: Expected) -> ParseError {
        ParseError::UnexpectedToken {
            found: found.clone(),
            token_index: self.cursor - 1,
            expected,
        }
    }

    fn consume(&mut self, t: TokenKind) -> Result<&'a WithTokenMetadata<Token>, ParseError> {
        let token = self.next()?;
        if TokenKind::from(token) == t {
            Ok(token)
        } else {
            Err(self.unexpected(&token.value, Expected::Token(t)))
        }
    }

    fn consume_identifier(&mut self) -> Result<String, ParseError> {
        match &self.next()?.value {
            Token::Identifier(name) => Ok(name.to_owned()),
            t => Err(self.unexpected(t, Expected::Token(TokenKind::Identifier))),
        }
    }

    fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        self.consume(TokenKind::Let)?;
        let name = self.consume_identifier()?;
        self.consume(TokenKind::ColonEq)?;
        let value = self.parse_expr()?;
        self.consume(TokenKind::Semicolon)?;

        Ok(Declaration { name, value })
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_atom()?;

        while self.continues_application() {
            let argument = self.parse_atom()?;
            expr = Expr::application(expr, argument);
        }

        Ok(expr)
    }

    fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        match &self.next()?.value {
            Token::Identifier(v) => Ok(Expr::variable(v.to_owned())),
            Token::StringLit(v) => Ok(Expr::string(v.to_owned())),
            Token::Fun => {
                let parameter = self.consume_identifier()?;
                self.consume(TokenKind::Arrow)?;
                // The body takes the rest of the enclosing chain.
                let body = self.parse_expr()?;

                Ok(Expr::lambda(parameter, body))
            }
            Token::LeftParen => {
                let expr = self.parse_expr()?;
                self.consume(TokenKind::RightParen)?;

                Ok(expr)
            }
            t => Err(self.unexpected(t, Expected::ExpressionStart)),
        }
    }
}
