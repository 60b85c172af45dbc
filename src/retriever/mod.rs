//! Retriever module - Pick and load the single best-matching documentation file
//!
//! Strategies run in priority order: exact filename match, weighted
//! filename/path scoring, then content/heading scoring when the filename
//! signal is weak, with a single-candidate fallback at the end. Every call is
//! a fresh, synchronous computation over current on-disk state; nothing is
//! cached between invocations.

use log::{debug, info, warn};
use std::path::Path;

use crate::core::model::{Retrieval, ScoredCandidate, Strategy};
use crate::core::paths::join_normalized;

pub mod content;
pub mod corpus;
pub mod filename;
pub mod query;

use query::{QueryAnalysis, Vocabulary};

/// Markdown file extension used for candidate filtering and exact matching
pub const MARKDOWN_EXT: &str = ".md";

/// Retriever configuration
///
/// Passed in rather than read from ambient process state, so the retrieval
/// algorithm stays side-effect-free and independently testable.
#[derive(Debug, Clone)]
pub struct RetrieverConfig {
    /// Areas searched when the caller does not request one
    pub default_areas: Vec<String>,
    /// Recognized multi-word domain terms
    pub vocabulary: Vocabulary,
}

impl Default for RetrieverConfig {
    fn default() -> Self {
        Self {
            default_areas: vec![
                "api-ref".to_string(),
                "cookbook".to_string(),
                "docs-section".to_string(),
            ],
            vocabulary: Vocabulary::default(),
        }
    }
}

/// Retrieve the single most relevant markdown file for a search term
///
/// Always returns a structured `Retrieval`; retrieval-semantic problems
/// (invalid area, empty corpus, no match, vanished winner) never surface as
/// errors.
pub fn retrieve(
    root: &Path,
    search_term: &str,
    doc_area: Option<&str>,
    config: &RetrieverConfig,
) -> Retrieval {
    info!(
        "retrieving documentation file for search_term {:?}, doc_area {:?}",
        search_term, doc_area
    );

    let corpus = match corpus::enumerate(root, doc_area, &config.default_areas) {
        Ok(corpus) => corpus,
        Err(err) => {
            let status = err.to_string();
            let cause = match &err {
                corpus::CorpusError::InvalidArea { .. } => status.clone(),
                corpus::CorpusError::ListArea { message, .. } => message.clone(),
            };
            return Retrieval::failure(status, cause);
        }
    };

    let areas = corpus.searched_areas.join(", ");
    if corpus.files.is_empty() {
        return Retrieval::no_match(format!(
            "No .md files found in the searched documentation areas: {}.",
            areas
        ));
    }

    let analysis = query::analyze(search_term, &config.vocabulary);
    debug!(
        "query analysis: core {:?}, secondary {:?}",
        analysis.core_terms, analysis.secondary_terms
    );

    match select(root, &corpus.files, &analysis) {
        Some(best) => {
            debug!(
                "selected {} via {} (score {:.1})",
                best.file,
                best.strategy.as_str(),
                best.score
            );
            load(root, &best)
        }
        None => Retrieval::no_match(format!(
            "No relevant file found for \"{}\" in areas: {}. \
             Please try different keywords or check filenames.",
            search_term, areas
        )),
    }
}

/// Run the strategies in priority order and pick exactly one winner
pub fn select(
    root: &Path,
    candidates: &[String],
    analysis: &QueryAnalysis,
) -> Option<ScoredCandidate> {
    if let Some(exact) = filename::exact_match(candidates, analysis) {
        return Some(exact);
    }

    let name_scores = filename::score_by_name(candidates, analysis);
    let mut best = name_scores.first().cloned();

    let inconclusive = best
        .as_ref()
        .map_or(true, |b| b.score < content::ESCALATION_THRESHOLD);
    if inconclusive {
        if let Some(winner) =
            content::score_by_content(root, candidates, analysis, &name_scores, best.as_ref())
        {
            // Equal scores resolve toward content evidence
            let replace = best.as_ref().map_or(true, |b| winner.score >= b.score);
            if replace {
                best = Some(winner);
            }
        }
    }

    if best.is_none() && candidates.len() == 1 && analysis.has_terms() {
        debug!(
            "single candidate and no strong matches, falling back to {}",
            candidates[0]
        );
        best = Some(ScoredCandidate::new(
            candidates[0].clone(),
            1.0,
            Strategy::SingleCandidateFallback,
        ));
    }

    best
}

/// Load the winning candidate's full text and package the result
fn load(root: &Path, best: &ScoredCandidate) -> Retrieval {
    let absolute = join_normalized(root, &best.file);
    match std::fs::read_to_string(&absolute) {
        Ok(content) => Retrieval::success(&best.file, content),
        Err(err) => {
            warn!("Error reading file {}: {}", best.file, err);
            Retrieval::failure(
                format!(
                    "Found a potential match {}, but an error occurred while reading its content.",
                    best.file
                ),
                format!(
                    "Error reading file {} (at {}): {}",
                    best.file,
                    absolute.display(),
                    err
                ),
            )
        }
    }
}
