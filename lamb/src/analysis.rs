use compiler::{error::CompilerError, Declaration, Token, WithTokenMetadata};
use tracing::debug;

use crate::{
    diagnostic::SourceDiagnostic,
    timer::{PhaseTiming, Timer},
};

pub struct Analysis {
    pub tokens: Vec<WithTokenMetadata<Token>>,
    pub declarations: Vec<Declaration>,
    pub lexing: PhaseTiming,
    pub parsing: PhaseTiming,
}

/// A failed analysis keeps whatever tokens were produced so parse errors can
/// still be located in the source.
#[derive(Debug)]
pub struct AnalysisFailure {
    pub error: CompilerError,
    pub tokens: Vec<WithTokenMetadata<Token>>,
}

impl AnalysisFailure {
    pub fn into_diagnostic(self, source_path: &str, source: &[u8]) -> SourceDiagnostic {
        SourceDiagnostic::from_compiler_error(&self.error, &self.tokens, source_path, source)
    }
}

pub fn analyze(source: &[u8]) -> Result<Analysis, AnalysisFailure> {
    let timer = Timer::start("Lexing");
    let tokens = compiler::lex(source).map_err(|e| AnalysisFailure {
        error: e.into(),
        tokens: Vec::new(),
    })?;
    let lexing = timer.stop();
    debug!(count = tokens.len(), "lexed tokens");

    let timer = Timer::start("Parsing");
    let declarations = match compiler::parse_tokens(&tokens) {
        Ok(declarations) => declarations,
        Err(e) => {
            return Err(AnalysisFailure {
                error: e.into(),
                tokens,
            })
        }
    };
    let parsing = timer.stop();
    debug!(count = declarations.len(), "parsed declarations");

    Ok(Analysis {
        tokens,
        declarations,
        lexing,
        parsing,
    })
}
