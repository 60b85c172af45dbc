//! docpick - Retrieves the single most relevant markdown documentation file
//!
//! docpick provides:
//! - Multi-strategy relevance ranking over a local markdown corpus
//! - Exact-filename, keyword filename/path, and content/heading scoring
//! - A structured single-result model for LLM tool hosts
//! - Named-tool dispatch with JSON arguments

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod retriever;
mod tools;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.quiet, cli.verbose);
    cli::run(cli)
}
