//! pwd-check - command line front end.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use pwd_check::{
    Evaluator, Report, Rules, SymbolSet, EMPTY_PASSWORD_NOTICE, MIN_LENGTH_VAR, SYMBOLS_VAR,
};
use secrecy::{ExposeSecret, SecretString};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit code when the password is empty.
const EXIT_EMPTY_PASSWORD: u8 = 2;

#[derive(Parser)]
#[command(
    name = "pwd-check",
    about = "Scores a password and suggests how to strengthen it",
    version
)]
struct Cli {
    /// Password to check; read from stdin when omitted
    password: Option<String>,

    /// Minimum number of characters
    #[arg(long, env = MIN_LENGTH_VAR)]
    min_length: Option<usize>,

    /// Characters accepted as symbols
    #[arg(long, env = SYMBOLS_VAR)]
    symbols: Option<String>,

    /// Print only the strength
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn rules(&self) -> Result<Rules> {
        let mut rules = Rules::default();
        if let Some(min_length) = self.min_length {
            rules = rules.with_min_length(min_length)?;
        }
        if let Some(symbols) = &self.symbols {
            rules = rules.with_symbols(SymbolSet::new(symbols)?);
        }
        Ok(rules)
    }

    fn password(&mut self, mut input: impl BufRead) -> Result<SecretString> {
        if let Some(password) = self.password.take() {
            return Ok(SecretString::new(password.into()));
        }
        let mut line = String::new();
        input
            .read_line(&mut line)
            .context("Failed to read password from stdin")?;
        let password = line.trim_end_matches(['\r', '\n']).to_string();
        Ok(SecretString::new(password.into()))
    }
}

fn run(mut cli: Cli, input: impl BufRead, mut out: impl Write, mut err: impl Write) -> Result<ExitCode> {
    let evaluator = Evaluator::new(cli.rules()?);
    let password = cli.password(input)?;

    if password.expose_secret().is_empty() {
        writeln!(err, "{}", EMPTY_PASSWORD_NOTICE)?;
        return Ok(ExitCode::from(EXIT_EMPTY_PASSWORD));
    }

    let result = evaluator.evaluate(&password);
    tracing::info!(score = result.score.value(), "evaluation complete");

    if cli.quiet {
        writeln!(out, "{}", result.strength)?;
    } else {
        writeln!(out, "{}", Report(&result))?;
        writeln!(out, "Progress: {}%", result.percent())?;
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pwd_check=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    run(cli, io::stdin().lock(), io::stdout().lock(), io::stderr().lock())
}
