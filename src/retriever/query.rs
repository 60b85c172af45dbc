//! Query analysis - Decompose a free-text query into scored keyword sets
//!
//! A query is split into *core terms* (multi-word or compound domain phrases
//! recognized as atomic units, e.g. "text to speech") and *secondary terms*
//! (the remaining loose tokens). Recognition is substring containment against
//! an injectable vocabulary; matched spans are claimed so overlapping shorter
//! terms are not counted twice. This component is pure and does no I/O.

use anyhow::{Context, Result};
use std::path::Path;

/// Built-in compound domain terms, most specific first so that longer phrases
/// claim their span before any shorter phrase they contain.
const DEFAULT_CORE_TERMS: &[&str] = &[
    "speech to text translate",
    "speech to text",
    "text to speech",
    "language identification",
    "document translation",
    "call analytics",
    "text analytics",
    "pdf parse",
    "rate limit",
    "api reference",
    "tts",
    "stt",
];

/// The recognized multi-word/compound term vocabulary
///
/// Represented as configuration so the term list can evolve without touching
/// the scoring logic. Terms are stored lower-cased; lookup order is the
/// vocabulary order.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::from_terms(DEFAULT_CORE_TERMS.iter().copied())
    }
}

impl Vocabulary {
    /// Build a vocabulary from an ordered list of terms
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if !term.is_empty() && !out.contains(&term) {
                out.push(term);
            }
        }
        Self { terms: out }
    }

    /// Load a vocabulary from a JSON string-array file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read vocabulary file: {:?}", path))?;
        let terms: Vec<String> = serde_json::from_str(&raw)
            .with_context(|| format!("Vocabulary file is not a JSON string array: {:?}", path))?;
        Ok(Self::from_terms(terms))
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// The decomposition of a raw search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryAnalysis {
    /// Trimmed, lower-cased query
    pub normalized: String,
    /// Recognized vocabulary terms, in vocabulary order
    pub core_terms: Vec<String>,
    /// Remaining tokens (len > 1, deduplicated, disjoint from core terms)
    pub secondary_terms: Vec<String>,
}

impl QueryAnalysis {
    pub fn core_count(&self) -> usize {
        self.core_terms.len()
    }

    pub fn has_terms(&self) -> bool {
        !self.core_terms.is_empty() || !self.secondary_terms.is_empty()
    }
}

/// Substring containment that also accepts the hyphenated form of a
/// multi-word term, since corpus filenames hyphenate compound phrases
/// (`text to speech` matches `text-to-speech.md`).
pub fn matches_term(haystack: &str, term: &str) -> bool {
    if haystack.contains(term) {
        return true;
    }
    term.contains(' ') && haystack.contains(&term.replace(' ', "-"))
}

/// Analyze a raw search query against a vocabulary
///
/// A non-empty query never produces an empty term set: when nothing else can
/// be derived the whole normalized query becomes the sole secondary term.
pub fn analyze(raw_query: &str, vocab: &Vocabulary) -> QueryAnalysis {
    let normalized = raw_query.trim().to_lowercase();

    // Claim byte spans for each vocabulary term found as a substring, in
    // vocabulary order, never overlapping an already-claimed span.
    let mut core_terms: Vec<String> = Vec::new();
    let mut claimed: Vec<(usize, usize)> = Vec::new();

    for term in vocab.terms() {
        let mut from = 0;
        let mut found = false;
        while let Some(pos) = normalized[from..].find(term.as_str()) {
            let start = from + pos;
            let end = start + term.len();
            if !claimed.iter().any(|&(s, e)| start < e && end > s) {
                claimed.push((start, end));
                found = true;
            }
            from = end;
        }
        if found {
            core_terms.push(term.clone());
        }
    }

    // Blank out claimed spans so core terms are not re-tokenized as loose
    // words, then tokenize what remains.
    let mut masked = String::with_capacity(normalized.len());
    for (i, ch) in normalized.char_indices() {
        if claimed.iter().any(|&(s, e)| i >= s && i < e) {
            masked.push(' ');
        } else {
            masked.push(ch);
        }
    }

    let mut secondary_terms: Vec<String> = Vec::new();
    for token in masked.split_whitespace() {
        if token.chars().count() <= 1 {
            continue;
        }
        if core_terms.iter().any(|c| c == token) {
            continue;
        }
        if secondary_terms.iter().any(|s| s == token) {
            continue;
        }
        secondary_terms.push(token.to_string());
    }

    if core_terms.is_empty() && secondary_terms.is_empty() && !normalized.is_empty() {
        secondary_terms.push(normalized.clone());
    }

    QueryAnalysis {
        normalized,
        core_terms,
        secondary_terms,
    }
}
