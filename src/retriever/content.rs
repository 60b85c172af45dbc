//! Content/heading scoring strategy
//!
//! Applied only when filename scoring is inconclusive: no filename match at
//! all, or a best score below the escalation threshold. Content evidence
//! dominates a weak filename signal and only nudges a credible one.

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

use crate::core::model::{ScoredCandidate, Strategy};
use crate::core::paths::join_normalized;
use crate::retriever::query::{matches_term, QueryAnalysis};

/// Filename score below which content scanning is triggered
pub const ESCALATION_THRESHOLD: f64 = 40.0;

const CORE_IN_CONTENT: f64 = 10.0;
const CORE_IN_HEADING: f64 = 25.0;
const SECONDARY_IN_CONTENT: f64 = 2.0;
const SECONDARY_IN_HEADING: f64 = 5.0;
const QUERY_IN_CONTENT: f64 = 15.0;
const QUERY_IN_HEADING: f64 = 30.0;
const ALL_CORE_IN_CONTENT: f64 = 20.0;
const PARTIAL_CORE_IN_CONTENT: f64 = 5.0;

/// Markdown ATX heading line, marker stripped by the capture group
static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s{0,3}#{1,6}\s+(.*)$").expect("Invalid HEADING_RE regex")
});

/// Extract heading lines from (lower-cased) markdown content
pub fn extract_headings(content: &str) -> Vec<String> {
    HEADING_RE
        .captures_iter(content)
        .map(|c| c[1].trim().to_string())
        .collect()
}

/// Score a single file's (lower-cased) content against the query
pub fn score_content(content: &str, query: &QueryAnalysis) -> f64 {
    let headings = extract_headings(content);
    let mut score = 0.0;

    for term in &query.core_terms {
        if matches_term(content, term) {
            score += CORE_IN_CONTENT;
        }
        for heading in &headings {
            if matches_term(heading, term) {
                score += CORE_IN_HEADING;
            }
        }
    }

    for term in &query.secondary_terms {
        if content.contains(term.as_str()) {
            score += SECONDARY_IN_CONTENT;
        }
        for heading in &headings {
            if heading.contains(term.as_str()) {
                score += SECONDARY_IN_HEADING;
            }
        }
    }

    if !query.normalized.is_empty() {
        let multiplier = (query.core_count() + 1) as f64;
        if content.contains(&query.normalized) {
            score += QUERY_IN_CONTENT * multiplier;
        }
        if headings.iter().any(|h| h.contains(&query.normalized)) {
            score += QUERY_IN_HEADING * multiplier;
        }
    }

    if query.core_count() > 1 {
        let present = query
            .core_terms
            .iter()
            .filter(|t| matches_term(content, t))
            .count();
        if present == query.core_count() {
            score += ALL_CORE_IN_CONTENT;
        } else {
            score += PARTIAL_CORE_IN_CONTENT * present as f64;
        }
    }

    score
}

/// Scan candidate contents and pick the best content-inclusive score
///
/// The prior best match (if any) is scanned first, then the remaining
/// candidates in enumeration order. Each candidate's existing filename score
/// is folded in: below the escalation threshold content dominates
/// (`prior + content`), at or above it content only boosts
/// (`prior + 0.5 * content`). Unreadable files are skipped. Returns the
/// highest-scoring candidate of the pass, or `None` when nothing scored
/// above zero.
pub fn score_by_content(
    root: &Path,
    candidates: &[String],
    query: &QueryAnalysis,
    name_scores: &[ScoredCandidate],
    prior_best: Option<&ScoredCandidate>,
) -> Option<ScoredCandidate> {
    let prior: HashMap<&str, f64> = name_scores
        .iter()
        .map(|s| (s.file.as_str(), s.score))
        .collect();

    let best_file = prior_best.map(|b| b.file.as_str());
    let ordered = best_file
        .into_iter()
        .chain(candidates.iter().map(String::as_str).filter(|f| Some(*f) != best_file));

    let mut top: Option<ScoredCandidate> = None;

    for file in ordered {
        let absolute = join_normalized(root, file);
        let text = match std::fs::read_to_string(&absolute) {
            Ok(text) => text,
            Err(err) => {
                warn!("Could not read or score content for {}: {}", file, err);
                continue;
            }
        };

        let content = text.to_lowercase();
        let content_score = score_content(&content, query);
        let prior_score = prior.get(file).copied().unwrap_or(0.0);
        let score = if prior_score < ESCALATION_THRESHOLD {
            prior_score + content_score
        } else {
            prior_score + 0.5 * content_score
        };

        if score <= 0.0 {
            continue;
        }
        debug!("content score {:.1} for {}", score, file);

        let better = top.as_ref().map_or(true, |t| score > t.score);
        if better {
            top = Some(ScoredCandidate::new(
                file,
                score,
                Strategy::ContentHeadingMatch,
            ));
        }
    }

    top
}
