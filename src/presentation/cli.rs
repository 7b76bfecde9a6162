//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap. Every file named on
//! the command line is resolved, compared and deployed in order.

use std::path::PathBuf;

use clap::builder::{BoolishValueParser, NonEmptyStringValueParser};
use clap::{ArgAction, Parser};

use crate::application::{BatchPolicy, DeployOptions};

/// Lighter - Marathon deployment tool
#[derive(Parser, Debug)]
#[command(name = "lighter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Marathon url, e.g. "http://marathon-01:8080/"
    #[arg(short, long, env = "MARATHON_URL", value_name = "URL", value_parser = NonEmptyStringValueParser::new())]
    pub marathon: String,

    /// Increase logging verbosity
    #[arg(short, long, env = "VERBOSE", action = ArgAction::SetTrue, value_parser = BoolishValueParser::new())]
    pub verbose: bool,

    /// Resolve and compare, but do not push anything to Marathon
    #[arg(long)]
    pub dry_run: bool,

    /// Continue with the next file when one fails
    #[arg(long)]
    pub keep_going: bool,

    /// Emit NDJSON deploy events on stdout
    #[arg(long)]
    pub json: bool,

    /// Service specification files, e.g. staging/myservice.yml
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    pub fn deploy_options(&self) -> DeployOptions {
        let policy = if self.keep_going {
            BatchPolicy::ContinueOnError
        } else {
            BatchPolicy::AbortOnError
        };
        DeployOptions::new(self.files.iter().cloned())
            .with_dry_run(self.dry_run)
            .with_batch_policy(policy)
    }
}
