//! Corpus enumeration - List eligible markdown candidates under the docs root
//!
//! Areas are subdirectories of the documentation root. Without an explicit
//! area the configured default areas are searched; a missing default area is
//! skipped with a warning. An explicitly requested area is held to a stricter
//! contract: traversal outside the root is rejected and a listing failure is
//! fatal.

use ignore::WalkBuilder;
use log::{debug, warn};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::core::paths::{escapes_root, is_within_root, make_relative};
use crate::retriever::MARKDOWN_EXT;

/// Fatal enumeration failures for an explicitly requested area
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Invalid doc_area \"{area}\": path escapes the documentation root")]
    InvalidArea { area: String },

    #[error("Failed to list directory for specified doc_area: {area}. Error: {message}")]
    ListArea { area: String, message: String },
}

/// The enumerated candidate set plus the areas that were searched
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Root-relative '/'-separated markdown paths, deduplicated, in area
    /// order then sorted by name within each area
    pub files: Vec<String>,
    pub searched_areas: Vec<String>,
}

/// Enumerate markdown candidates under the documentation root
pub fn enumerate(
    root: &Path,
    area: Option<&str>,
    default_areas: &[String],
) -> Result<Corpus, CorpusError> {
    let explicit = area.is_some();
    let areas: Vec<String> = match area {
        Some(a) => vec![a.trim_end_matches('/').to_string()],
        None => default_areas.to_vec(),
    };

    let mut files: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for area in &areas {
        if explicit && escapes_root(area) {
            return Err(CorpusError::InvalidArea { area: area.clone() });
        }

        let dir = root.join(area);
        if !dir.is_dir() {
            if explicit {
                return Err(CorpusError::ListArea {
                    area: area.clone(),
                    message: "directory does not exist or is not a directory".to_string(),
                });
            }
            warn!("Search path {:?} does not exist or is not a directory. Skipping.", dir);
            continue;
        }

        // Symlinked areas can point outside the root; re-check the resolved path.
        if explicit && !is_within_root(&dir, root) {
            return Err(CorpusError::InvalidArea { area: area.clone() });
        }

        let mut area_files: Vec<String> = Vec::new();
        for entry in WalkBuilder::new(&dir).build() {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    if explicit {
                        return Err(CorpusError::ListArea {
                            area: area.clone(),
                            message: err.to_string(),
                        });
                    }
                    warn!("Could not list directory {}, continuing: {}", area, err);
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if !name.ends_with(MARKDOWN_EXT) {
                continue;
            }
            if let Some(relative) = make_relative(path, root) {
                area_files.push(relative);
            }
        }

        area_files.sort();
        for file in area_files {
            if seen.insert(file.clone()) {
                files.push(file);
            }
        }
    }

    debug!("enumerated {} candidate files in areas {:?}", files.len(), areas);
    Ok(Corpus {
        files,
        searched_areas: areas,
    })
}
