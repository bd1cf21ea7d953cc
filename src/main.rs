use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::Context;
use clap::Parser;
use mavl::{
    lexer::lexer::{tokenize, Lexer},
    parser::parser::parse,
    render_error,
};
use tracing_subscriber::EnvFilter;

/// Parses a MAVL source file and prints its syntax tree.
#[derive(Debug, Parser)]
#[command(name = "mavlc", version)]
struct MavlcArgs {
    /// Source file to parse
    file: PathBuf,

    /// Print the token stream instead of parsing
    #[arg(long)]
    tokens: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = MavlcArgs::parse();
    let source = read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    if args.tokens {
        for token in tokenize(source) {
            println!("{}", token);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let start = Instant::now();
    match parse(Lexer::new(source.as_str())) {
        Ok(module) => {
            tracing::info!(elapsed = ?start.elapsed(), "parsed {}", args.file.display());
            println!("{}", module.dump());
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprintln!("{}", render_error(&error, &source, &args.file));
            Ok(ExitCode::FAILURE)
        }
    }
}
