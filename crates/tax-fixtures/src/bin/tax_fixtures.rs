//! Fixture CLI for generating taxpayer batches from a registry.
//!
//! This binary delegates to `tax_fixtures::fixture_cli` for parsing and
//! generation logic, keeping the CLI behaviour testable without spawning a
//! process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use chrono::Utc;
use tax_fixtures::fixture_cli::{
    CliError, ParseOutcome, generate, parse_args, success_message, write_output,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let report = generate(&options, Utc::now())?;
            match options.output() {
                Some(path) => {
                    write_output(path, &report)?;
                    write_stdout(&success_message(&report, path));
                }
                None => write_stdout(&report.json),
            }
            Ok(())
        }
    }
}

/// Logs go to stderr so stdout carries only fixture JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Fails only when a global subscriber is already installed.
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        drop(err);
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: tax-fixtures --registry <path> [options]\n",
        "\n",
        "Options:\n",
        "  --registry <path>     Path to the fixture registry JSON file\n",
        "  --seed-name <name>    Seed to generate (defaults to the first seed)\n",
        "  --count <n>           Override the seed's fixture count\n",
        "  --output <path>       Write JSON to a file instead of stdout\n",
        "  -h, --help            Print this help output\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_stdout(message: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{message}") {
        drop(err);
    }
}
