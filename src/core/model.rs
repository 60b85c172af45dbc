//! Retrieval result model
//!
//! Every command maps to a single `Retrieval` object before rendering: either
//! a retrieved file (path + full content) or a structured failure. A failure
//! with `error_message: None` means "nothing relevant was found", which callers
//! must distinguish from "something went wrong".

use serde::{Deserialize, Serialize};

/// Which strategy produced a scored candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// The normalized query was a `.md` filename matching the candidate exactly
    ExactFilenameMatch,
    /// Weighted keyword/phrase heuristics over filename and relative path
    KeywordFilenamePathMatch,
    /// Content and heading evidence, possibly combined with a filename score
    ContentHeadingMatch,
    /// The corpus offered exactly one candidate and no strategy matched
    SingleCandidateFallback,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::ExactFilenameMatch => "exact_filename_match",
            Strategy::KeywordFilenamePathMatch => "keyword_filename_path_match",
            Strategy::ContentHeadingMatch => "content_heading_match",
            Strategy::SingleCandidateFallback => "single_candidate_fallback",
        }
    }
}

/// A candidate file with its relevance score
///
/// Scores are non-negative; `f64::INFINITY` marks an exact filename match and
/// short-circuits all further scoring for the query.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    /// Path relative to the documentation root, using '/' as separator
    pub file: String,
    pub score: f64,
    pub strategy: Strategy,
}

impl ScoredCandidate {
    pub fn new(file: impl Into<String>, score: f64, strategy: Strategy) -> Self {
        Self {
            file: file.into(),
            score,
            strategy,
        }
    }
}

/// The result of a retrieval call
///
/// On success `retrieved_file_path` and `file_content` are set and
/// `error_message` is null. On failure both are null; `error_message` is set
/// only when something actually went wrong (invalid area, unreadable
/// directory, vanished file), not for a plain no-match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Retrieval {
    pub retrieved_file_path: Option<String>,
    pub file_content: Option<String>,
    pub status_message: String,
    pub error_message: Option<String>,
}

impl Retrieval {
    /// Create a successful retrieval
    pub fn success(file: impl Into<String>, content: impl Into<String>) -> Self {
        let file = file.into();
        Self {
            status_message: format!("Successfully retrieved documentation file: {}", file),
            retrieved_file_path: Some(file),
            file_content: Some(content.into()),
            error_message: None,
        }
    }

    /// Create a no-match result (not an error)
    pub fn no_match(status: impl Into<String>) -> Self {
        Self {
            retrieved_file_path: None,
            file_content: None,
            status_message: status.into(),
            error_message: None,
        }
    }

    /// Create a failure result carrying an error cause
    pub fn failure(status: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            retrieved_file_path: None,
            file_content: None,
            status_message: status.into(),
            error_message: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.retrieved_file_path.is_some()
    }
}
