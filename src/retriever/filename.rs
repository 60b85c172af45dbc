//! Filename/path scoring strategy
//!
//! Two passes: an exact-match pass that short-circuits everything when the
//! query itself is a `.md` filename, and a weighted scan over the bare
//! filename and relative path. The weights are empirically chosen and kept
//! as-is for behavioral compatibility.

use log::debug;
use std::cmp::Ordering;

use crate::core::model::{ScoredCandidate, Strategy};
use crate::core::paths::basename;
use crate::retriever::query::{matches_term, QueryAnalysis};
use crate::retriever::MARKDOWN_EXT;

const CORE_IN_FILENAME: f64 = 30.0;
const CORE_IN_PATH: f64 = 15.0;
const SECONDARY_IN_FILENAME: f64 = 10.0;
const SECONDARY_IN_PATH: f64 = 5.0;
const HYPHENATED_DIRECT_HIT: f64 = 25.0;
const VERBATIM_DIRECT_HIT: f64 = 20.0;
const ALL_CORE_IN_FILENAME: f64 = 20.0;
const PARTIAL_CORE_IN_FILENAME: f64 = 10.0;

/// Exact filename pass
///
/// Only runs when the normalized query ends with the markdown extension. A
/// candidate whose path equals the query, ends with `/` + query, or whose bare
/// filename equals the query's bare filename wins outright with an infinite
/// score, skipping all other scoring.
pub fn exact_match(candidates: &[String], query: &QueryAnalysis) -> Option<ScoredCandidate> {
    let normalized = &query.normalized;
    if !normalized.ends_with(MARKDOWN_EXT) {
        return None;
    }

    let by_path = candidates.iter().find(|file| {
        let lower = file.to_lowercase();
        lower == *normalized || lower.ends_with(&format!("/{}", normalized))
    });

    let hit = by_path.or_else(|| {
        let wanted = basename(normalized);
        candidates
            .iter()
            .find(|file| basename(file).to_lowercase() == wanted)
    })?;

    debug!("exact filename match: {}", hit);
    Some(ScoredCandidate::new(
        hit.clone(),
        f64::INFINITY,
        Strategy::ExactFilenameMatch,
    ))
}

/// Weighted keyword scan over filename and relative path
///
/// Candidates scoring 0 are dropped. The survivors are sorted descending by
/// score with a stable sort, so ties keep enumeration order.
pub fn score_by_name(candidates: &[String], query: &QueryAnalysis) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .iter()
        .filter_map(|file| {
            let score = score_name(file, query);
            if score > 0.0 {
                debug!("filename score {:.1} for {}", score, file);
                Some(ScoredCandidate::new(
                    file.clone(),
                    score,
                    Strategy::KeywordFilenamePathMatch,
                ))
            } else {
                None
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
}

fn score_name(file: &str, query: &QueryAnalysis) -> f64 {
    let filename = basename(file).to_lowercase();
    let path = file.to_lowercase();
    let mut score = 0.0;

    for term in &query.core_terms {
        if matches_term(&filename, term) {
            score += CORE_IN_FILENAME;
        } else if matches_term(&path, term) {
            score += CORE_IN_PATH;
        }
    }

    for term in &query.secondary_terms {
        if filename.contains(term.as_str()) {
            score += SECONDARY_IN_FILENAME;
        } else if path.contains(term.as_str()) {
            score += SECONDARY_IN_PATH;
        }
    }

    // Direct-hit bonus: the whole query appearing in the filename, hyphenated
    // or verbatim, scaled by how many core terms it carries.
    if !query.normalized.is_empty() {
        let multiplier = (query.core_count() + 1) as f64;
        let stem = filename.strip_suffix(MARKDOWN_EXT).unwrap_or(&filename);
        let hyphenated = query.normalized.replace(' ', "-");
        if stem.contains(&hyphenated) {
            score += HYPHENATED_DIRECT_HIT * multiplier;
        } else if filename.contains(&query.normalized) {
            score += VERBATIM_DIRECT_HIT * multiplier;
        }
    }

    // Co-occurrence bonus when the query carries multiple core terms
    if query.core_count() > 1 {
        let present = query
            .core_terms
            .iter()
            .filter(|t| matches_term(&filename, t))
            .count();
        if present == query.core_count() {
            score += ALL_CORE_IN_FILENAME;
        } else if present > 1 {
            score += PARTIAL_CORE_IN_FILENAME * present as f64;
        }
    }

    score
}
