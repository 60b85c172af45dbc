//! Renderer module
//!
//! Renders a `Retrieval` to different output formats: json, md, raw

use crate::core::model::Retrieval;
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Markdown,
    Raw,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "raw" => Ok(OutputFormat::Raw),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for retrieval results
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a retrieval to a string
    pub fn render(&self, retrieval: &Retrieval) -> String {
        match self.config.format {
            OutputFormat::Json => self.render_json(retrieval),
            OutputFormat::Markdown => self.render_markdown(retrieval),
            OutputFormat::Raw => self.render_raw(retrieval),
        }
    }

    /// Render to a writer
    #[allow(dead_code)]
    pub fn render_to<W: Write>(&self, retrieval: &Retrieval, mut writer: W) -> std::io::Result<()> {
        let output = self.render(retrieval);
        writer.write_all(output.as_bytes())
    }

    /// Render as a single JSON object
    fn render_json(&self, retrieval: &Retrieval) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(retrieval).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(retrieval).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, retrieval: &Retrieval) -> String {
        let mut output = String::new();

        output.push_str("## Retrieval\n\n");
        output.push_str(&format!("- status: {}\n", retrieval.status_message));

        if let Some(error) = &retrieval.error_message {
            output.push_str(&format!("- error: {}\n", error));
        }

        if let Some(path) = &retrieval.retrieved_file_path {
            output.push_str(&format!("- file: `{}`\n", path));
        }

        if let Some(content) = &retrieval.file_content {
            output.push_str("\n````markdown\n");
            output.push_str(content);
            if !content.ends_with('\n') {
                output.push('\n');
            }
            output.push_str("````\n");
        }

        output
    }

    /// Render the file content only (empty on failure)
    fn render_raw(&self, retrieval: &Retrieval) -> String {
        retrieval.file_content.clone().unwrap_or_default()
    }
}
