//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::retriever::{query::Vocabulary, RetrieverConfig};

/// docpick - retrieves the single most relevant markdown documentation file.
#[derive(Parser, Debug)]
#[command(name = "docpick")]
#[command(
    author,
    version,
    about,
    long_about = r#"docpick searches a local markdown documentation corpus and returns the
single best-matching file, or a structured failure, as one result object.

Matching runs in priority order: exact filename match, weighted keyword
scoring over filenames and paths, then content/heading scoring when the
filename signal is weak. Exactly one file (or a no-match result) comes back.

Output formats:
- json: the result object (default; --pretty for indentation)
- md: human-friendly Markdown with the file content fenced
- raw: file content only (empty on failure)

Examples:
    docpick get "text to speech pricing"
    docpick get "translate.md" --area api-ref
    docpick list --area cookbook
    docpick tool get_documentation_file --args '{"search_term": "pdf parsing"}'
"#
)]
pub struct Cli {
    /// Documentation root directory.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Documentation root directory (defaults to the current directory).\n\n\
Areas are subdirectories of this root, and all paths emitted in results are\n\
relative to it."
    )]
    pub root: PathBuf,

    /// Output format (json/md/raw).
    #[arg(
        long,
        global = true,
        default_value = "json",
        value_name = "FORMAT",
        long_help = "Select the output format for the result object.\n\n\
Supported values:\n\
- json (default)\n\
- md (markdown)\n\
- raw (file content only)\n\n\
Tip: Prefer json when piping into tools/LLM hosts; the object carries the\n\
status and error fields as well as the content."
    )]
    pub format: String,

    /// Pretty-print JSON output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON output with indentation for human readability.\n\n\
Has no effect on md/raw formats."
    )]
    pub pretty: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Reduce diagnostics to errors only. The result object is still printed\n\
to stdout."
    )]
    pub quiet: bool,

    /// Verbose mode (scoring diagnostics on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable per-candidate scoring diagnostics on stderr. Intended for\n\
debugging relevance decisions."
    )]
    pub verbose: bool,

    /// Core-term vocabulary file (JSON string array).
    #[arg(
        long,
        global = true,
        env = "DOCPICK_VOCAB",
        value_name = "FILE",
        long_help = "Override the built-in core-term vocabulary with a JSON string array\n\
file. Core terms are multi-word or compound domain phrases scored as atomic\n\
units (e.g. \"text to speech\"). Order matters: earlier terms claim their\n\
span first, so list longer phrases before the shorter phrases they contain."
    )]
    pub vocab: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Retrieve the single most relevant documentation file.
    #[command(
        long_about = r#"Search the documentation corpus and return the single best-matching
markdown file as one result object.

The search term can be keywords, a topic description, or a partial/full
filename; a term ending in .md that names a candidate exactly wins outright.

Examples:
    docpick get "how to use the transliteration api"
    docpick get "pdf parsing options" --area cookbook
    docpick get sarvam-parse.md
"#
    )]
    Get {
        /// Keywords, a topic description, or a partial/full filename.
        #[arg(value_name = "SEARCH_TERM")]
        search_term: String,

        /// Limit the search to one documentation area.
        #[arg(
            long,
            value_name = "AREA",
            long_help = "Limit the search to one documentation area (a subdirectory of ROOT,\n\
e.g. api-ref or cookbook). When omitted, the default areas are searched.\n\n\
An explicitly requested area is held to a stricter contract: it must exist,\n\
must be listable, and must not escape the documentation root."
        )]
        area: Option<String>,
    },

    /// List the candidate markdown files the retriever would consider.
    #[command(
        long_about = "Enumerate the markdown candidate corpus under ROOT (or a single --area)\n\
and print one root-relative path per line (a JSON array with --format json).\n\n\
Use this to verify what the retriever can see before debugging a query.\n\n\
Examples:\n\
  docpick list\n\
  docpick list --area api-ref --format json\n"
    )]
    List {
        /// Limit the listing to one documentation area.
        #[arg(long, value_name = "AREA")]
        area: Option<String>,
    },

    /// Invoke a named tool with JSON arguments (the host boundary).
    #[command(
        long_about = r#"Dispatch a named tool call the way an LLM tool host would: the tool name
plus a JSON argument object. Argument-schema violations are reported as
command errors; everything retrieval-semantic (invalid area, empty corpus,
no match) comes back inside the result object.

Example:
    docpick tool get_documentation_file \
        --args '{"search_term": "speech to text", "doc_area": "api-ref"}'
"#
    )]
    Tool {
        /// Tool name.
        #[arg(value_name = "NAME")]
        name: String,

        /// JSON argument object for the tool.
        #[arg(long, value_name = "JSON")]
        args: String,
    },
}

/// Initialize logging from the CLI flags (RUST_LOG still wins when set)
pub fn init_logging(quiet: bool, verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else if quiet {
        builder.filter_level(log::LevelFilter::Error);
    }
    builder.init();
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    let mut config = RetrieverConfig::default();
    if let Some(vocab_path) = &cli.vocab {
        config.vocabulary = Vocabulary::from_file(vocab_path)?;
    }

    match cli.command {
        Commands::Get { search_term, area } => {
            let result =
                crate::retriever::retrieve(&root, &search_term, area.as_deref(), &config);
            let renderer = Renderer::with_config(render_config);
            println!("{}", renderer.render(&result));
            Ok(())
        }

        Commands::List { area } => {
            let corpus =
                crate::retriever::corpus::enumerate(&root, area.as_deref(), &config.default_areas)?;
            match format {
                OutputFormat::Json => {
                    let out = if cli.pretty {
                        serde_json::to_string_pretty(&corpus.files)?
                    } else {
                        serde_json::to_string(&corpus.files)?
                    };
                    println!("{}", out);
                }
                _ => {
                    for file in &corpus.files {
                        println!("{}", file);
                    }
                }
            }
            Ok(())
        }

        Commands::Tool { name, args } => {
            let result = crate::tools::dispatch(&root, &name, &args, &config)?;
            let renderer = Renderer::with_config(render_config);
            println!("{}", renderer.render(&result));
            Ok(())
        }
    }
}
