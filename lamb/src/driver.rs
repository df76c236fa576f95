use std::{fs, io::Write, path::Path};

use tracing::info;

use crate::{analysis::analyze, error::LambError, stats::ProgramStats, tokens::render_tokens};

/// Lexes and parses `path`, writing timings and statistics to `out`.
pub fn run_file<W: Write>(path: &Path, show_tokens: bool, out: &mut W) -> Result<(), LambError> {
    let display_path = path.display().to_string();
    let source = fs::read(path).map_err(|source| LambError::Open {
        path: display_path.clone(),
        source,
    })?;
    info!(path = %display_path, bytes = source.len(), "read source");

    writeln!(out, "Mapping {} bytes\n", source.len())?;

    let analysis =
        analyze(&source).map_err(|failure| failure.into_diagnostic(&display_path, &source))?;

    writeln!(out, "{}", analysis.lexing)?;
    if show_tokens {
        writeln!(out, "Tokens: {}", render_tokens(&analysis.tokens))?;
    }
    writeln!(out, "{}", analysis.parsing)?;
    writeln!(out)?;
    write!(
        out,
        "{}",
        ProgramStats::collect(&analysis.tokens, &analysis.declarations)
    )?;

    Ok(())
}
