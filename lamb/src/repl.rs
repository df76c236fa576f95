use std::io::Write;

use rustyline::{error::ReadlineError, history::FileHistory};
use tracing::debug;

use crate::{analysis::analyze, error::LambError};

const REPL_SOURCE_NAME: &str = "<repl>";

#[derive(Debug, PartialEq)]
pub enum IterStatus {
    Continue,
    Break,
}

pub struct Repl {
    prompt: String,
    editor: rustyline::Editor<(), FileHistory>,
    out: Box<dyn Write>,
    buffer: String,
}

impl Repl {
    pub fn new() -> Result<Self, LambError> {
        Ok(Repl {
            out: Box::new(std::io::stderr()),
            editor: rustyline::DefaultEditor::new()?,
            prompt: "> ".into(),
            buffer: String::new(),
        })
    }

    fn iter(&mut self) -> Result<IterStatus, LambError> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    return Ok(IterStatus::Continue);
                }

                self.editor.add_history_entry(line.trim())?;
                self.handle_line(&line)
            }
            Err(ReadlineError::Interrupted) => {
                writeln!(&mut self.out, "SIGINT received; exiting...")?;
                Ok(IterStatus::Break)
            }
            Err(ReadlineError::Eof) => Ok(IterStatus::Break),
            Err(err) => {
                writeln!(&mut self.out, "Error: {err:?}")?;
                Ok(IterStatus::Continue)
            }
        }
    }

    fn process_buffer(&mut self) -> Result<IterStatus, LambError> {
        if self.buffer.trim() == "quit;" {
            return Ok(IterStatus::Break);
        }

        debug!(bytes = self.buffer.len(), "parsing repl buffer");
        match analyze(self.buffer.as_bytes()) {
            Ok(analysis) => {
                for decl in &analysis.declarations {
                    println!("{}", decl);
                }
            }
            Err(failure) => {
                let diagnostic = failure.into_diagnostic(REPL_SOURCE_NAME, self.buffer.as_bytes());
                writeln!(&mut self.out, "{:?}", miette::Report::new(diagnostic))?;
            }
        }

        Ok(IterStatus::Continue)
    }

    /// Buffers `line` until the input so far ends with `;`, then parses it.
    pub fn handle_line(&mut self, line: &str) -> Result<IterStatus, LambError> {
        self.buffer.push_str(line);

        if !self.buffer.trim_end().ends_with(';') {
            self.buffer.push('\n');
            return Ok(IterStatus::Continue);
        }

        let status = self.process_buffer();
        self.buffer.clear();

        status
    }

    pub fn run(&mut self) -> Result<(), LambError> {
        while self.iter()? == IterStatus::Continue {}
        Ok(())
    }
}
