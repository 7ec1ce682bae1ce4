//! # goofy
//!
//! Command line runner for goofy scripts.

use ansi_term::Style;
use clap::Parser;
use goofy::exec::{Engine, Event};
use goofy::lang::lex;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "goofy", about = "Run a goofy script", version)]
struct Args {
    /// Path to the script; must end in .goofy
    script: PathBuf,

    /// Print the classified tokens instead of running
    #[arg(long)]
    tokens: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .init();

    let args = Args::parse();
    if args.script.extension().and_then(|e| e.to_str()) != Some("goofy") {
        tracing::error!("{} is not a .goofy script", args.script.display());
        return ExitCode::FAILURE;
    }
    let source = match std::fs::read_to_string(&args.script) {
        Ok(source) => source,
        Err(error) => {
            tracing::error!("{}: {}", args.script.display(), error);
            return ExitCode::FAILURE;
        }
    };
    let tokens = lex(&source);
    tracing::debug!("classified {} tokens", tokens.len());

    if args.tokens {
        for (position, token) in tokens.iter().enumerate() {
            println!("{:>4} {:<12} {}", position + 1, token.kind().to_string(), token);
        }
        return ExitCode::SUCCESS;
    }

    match main_loop(Engine::new(tokens)) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}

fn main_loop(mut engine: Engine) -> std::io::Result<bool> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut success = true;
    loop {
        match engine.execute(5000) {
            Event::Stopped => return Ok(success),
            Event::Running => {}
            Event::Print(text) => {
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
            }
            Event::Input => {
                let mut line = String::new();
                stdin.lock().read_line(&mut line)?;
                engine.enter(&line);
            }
            Event::Errors(errors) => {
                success = false;
                for error in errors.iter() {
                    eprintln!("{}", Style::new().bold().paint(error.to_string()));
                }
            }
        }
    }
}
