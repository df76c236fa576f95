//! Renders core errors with the offending source span underlined.

use compiler::{
    error::{CompilerError, LexError, ParseError},
    Token, WithTokenMetadata,
};
use miette::{Diagnostic, NamedSource, SourceSpan};

#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(lamb::syntax))]
pub struct SourceDiagnostic {
    pub message: String,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("{label}")]
    pub span: SourceSpan,
    pub label: String,
}

impl SourceDiagnostic {
    /// Parse errors are located through `tokens`, the sequence the parser was given.
    pub fn from_compiler_error(
        error: &CompilerError,
        tokens: &[WithTokenMetadata<Token>],
        source_path: &str,
        source: &[u8],
    ) -> Self {
        let end_of_input: SourceSpan = (source.len(), 0).into();

        let (span, label): (SourceSpan, String) = match error {
            CompilerError::Lex(e) => {
                let label = match e {
                    LexError::UnexpectedCharacter { .. } => "unexpected character",
                    LexError::UnterminatedBlockComment { .. } => "comment starts here",
                    LexError::UnterminatedStringLiteral { .. } => "string starts here",
                };
                ((e.offset(), 1).into(), label.to_owned())
            }
            CompilerError::Parse(e) => {
                let label = match e {
                    ParseError::UnexpectedEndOfInput => "input ends here".to_owned(),
                    ParseError::UnexpectedToken { expected, .. } => format!("wanted {}", expected),
                };
                let span = match e.token_index().and_then(|i| tokens.get(i)) {
                    Some(t) => (t.pos.start_inclusive.0, t.pos.len()).into(),
                    None => end_of_input,
                };
                (span, label)
            }
        };

        Self {
            message: error.to_string(),
            src: NamedSource::new(source_path, String::from_utf8_lossy(source).into_owned()),
            span,
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    use compiler::error::CompilerError;

    use super::SourceDiagnostic;

    fn diagnose(source: &str) -> SourceDiagnostic {
        let tokens = compiler::lex(source).unwrap_or_default();
        let error = compiler::parse(source).expect_err("expected source to fail");
        SourceDiagnostic::from_compiler_error(&error, &tokens, "test.lamb", source.as_bytes())
    }

    #[test]
    fn test_unexpected_token() {
        let diag = diagnose("let x := ;");

        assert_eq!(
            diag.message,
            "Parse error: Unexpected token `;` at token 3, wanted the start of an expression"
        );
        assert_eq!(diag.span.offset(), 9);
        assert_eq!(diag.span.len(), 1);
        assert_eq!(diag.label, "wanted the start of an expression");
    }

    #[test]
    fn test_multibyte_token_span() {
        let diag = diagnose("let x := y =>");

        assert_eq!(diag.span.offset(), 11);
        assert_eq!(diag.span.len(), 2);
        assert_eq!(diag.label, "wanted `;`");
    }

    #[test]
    fn test_end_of_input() {
        let diag = diagnose("let x := y");

        assert_eq!(diag.message, "Parse error: Unexpected end of file");
        assert_eq!(diag.span.offset(), 10);
        assert_eq!(diag.span.len(), 0);
        assert_eq!(diag.label, "input ends here");
    }

    #[test]
    fn test_lex_errors() {
        let diag = diagnose("let x := y | z;");
        assert_eq!(diag.span.offset(), 11);
        assert_eq!(diag.label, "unexpected character");

        let diag = diagnose("let x := \"abc");
        assert_eq!(diag.span.offset(), 9);
        assert_eq!(diag.label, "string starts here");
        assert!(matches!(
            compiler::parse("let x := \"abc"),
            Err(CompilerError::Lex(_))
        ));
    }
}
