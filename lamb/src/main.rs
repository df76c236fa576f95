use std::{io, path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};
use lamb::{driver::run_file, repl::Repl};
use tracing_subscriber::EnvFilter;

/// Lex and parse programs in a small lambda language.
#[derive(Debug, Parser)]
#[command(name = "lamb", version, about, long_about = None)]
struct Cli {
    /// Source file to lex and parse; starts a REPL when omitted
    file: Option<PathBuf>,

    /// Print the token stream after lexing
    #[arg(long)]
    tokens: bool,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "lamb=warn",
        1 => "lamb=debug",
        _ => "lamb=trace",
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_ansi(false)
        .with_writer(io::stderr)
        .init();

    let result = match &cli.file {
        Some(path) => run_file(path, cli.tokens, &mut io::stdout().lock()),
        None => Repl::new().and_then(|mut repl| repl.run()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e.exit_code();
            eprintln!("{:?}", miette::Report::new(e));
            ExitCode::from(code)
        }
    }
}
