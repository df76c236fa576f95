use std::io;

use miette::Diagnostic;
use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::diagnostic::SourceDiagnostic;

#[derive(Debug, Error, Diagnostic)]
pub enum LambError {
    #[error("Failed to open: {path}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Compile(#[from] SourceDiagnostic),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
}

impl LambError {
    pub fn exit_code(&self) -> u8 {
        match self {
            LambError::Open { .. } => 2,
            LambError::Compile(_) => 3,
            LambError::Io(_) | LambError::Readline(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::LambError;

    #[test]
    fn test_exit_codes() {
        let err = LambError::Open {
            path: "missing.lamb".to_owned(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Failed to open: missing.lamb");

        let err: LambError = io::Error::new(io::ErrorKind::Other, "boom").into();
        assert_eq!(err.exit_code(), 1);
    }
}
