//! Lighter CLI - Marathon deployment tool
//!
//! Usage: lighter [OPTIONS] --marathon <URL> <FILES>...
//!
//! Each file is merged with its sibling `globals.yml` and the artifact
//! descriptor from the Maven repository, compared with what Marathon is
//! running, and pushed.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lighter::presentation::{create_deploy_use_case, create_event_sink, Cli, TextRenderer};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every file deployed
fn run(cli: &Cli) -> Result<bool> {
    let use_case =
        create_deploy_use_case(&cli.marathon).context("failed to initialise HTTP client")?;

    let result = use_case.execute_with_events(&cli.deploy_options(), create_event_sink(cli.json));

    if !cli.json {
        TextRenderer::default()
            .render(&result, &mut io::stdout().lock())
            .context("failed to write summary")?;
    }

    Ok(result.is_success())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "lighter=debug,info"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
