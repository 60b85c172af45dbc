//! Named tool dispatch - The host-facing boundary of the retriever
//!
//! A host (or the `tool` subcommand) invokes the retriever as a named
//! operation with a JSON argument object. Argument-schema violations are
//! dispatch errors; everything retrieval-semantic comes back as a structured
//! `Retrieval`, never as an error.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::core::model::Retrieval;
use crate::retriever::{retrieve, RetrieverConfig};

/// Tool name for the documentation file retriever
pub const GET_DOCUMENTATION_FILE: &str = "get_documentation_file";

/// Names of all dispatchable tools
pub fn available_tools() -> &'static [&'static str] {
    &[GET_DOCUMENTATION_FILE]
}

/// Arguments accepted by `get_documentation_file`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetrieveArgs {
    /// Keywords, a topic description, or a partial/full filename
    pub search_term: String,
    /// Optional documentation area to narrow the search
    #[serde(default)]
    pub doc_area: Option<String>,
}

/// Dispatch a named tool call with raw JSON arguments
pub fn dispatch(
    root: &Path,
    name: &str,
    raw_args: &str,
    config: &RetrieverConfig,
) -> Result<Retrieval> {
    match name {
        GET_DOCUMENTATION_FILE => {
            let args: RetrieveArgs = serde_json::from_str(raw_args)
                .with_context(|| format!("Invalid arguments for tool {}", name))?;
            if args.search_term.is_empty() {
                bail!("Tool {}: search_term must not be empty", name);
            }
            Ok(retrieve(
                root,
                &args.search_term,
                args.doc_area.as_deref(),
                config,
            ))
        }
        other => bail!(
            "Unknown tool \"{}\". Available tools: {}",
            other,
            available_tools().join(", ")
        ),
    }
}
