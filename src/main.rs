use anyhow::{Context, Result};
use clap::Parser;
use palcheck::{argument_bytes, check_stdin, Invocation, LineReaderConfig, Verdict};
use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "palcheck")]
#[command(about = "Check whether a string, or each line of stdin, is a palindrome")]
// WHY: any single argument is a candidate, including -h and --version
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// String to check; reads stdin line by line when omitted
    #[arg(allow_hyphen_values = true)]
    candidates: Vec<OsString>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // WHY: stdout carries verdicts only, so logs go to stderr and stay quiet unless RUST_LOG asks
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .json()
        .init();

    let args = Args::parse();
    debug!(?args, "Parsed CLI arguments");

    let invocation = match Invocation::from_args(args.candidates) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    match invocation {
        Invocation::Single(candidate) => {
            info!("Checking single argument");
            let candidate = argument_bytes(&candidate);
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&Verdict::check(&*candidate).to_line())
                .and_then(|()| stdout.flush())
                .context("Failed to write verdict")?;
        }
        Invocation::Lines => {
            info!("Checking standard input line by line");
            check_stdin(LineReaderConfig::default()).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
