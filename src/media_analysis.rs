use log::warn;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::file_utils::FileManager;

// @module: OTIO media reference analysis

/// Result of scanning an OTIO document for referenced media.
///
/// The document's editorial semantics are never interpreted; only
/// `target_url` string fields are collected, at any nesting depth.
#[derive(Debug, Clone, Default)]
pub struct MediaPathAnalysis {
    /// Every media path referenced by the document
    pub media_files: BTreeSet<String>,
    /// Parent directories of the referenced media paths
    pub media_directories: BTreeSet<String>,
    /// Best candidate directory to relink media from
    pub recommended_source_path: Option<String>,
    /// True iff any media reference was found
    pub requires_source_clips: bool,
    /// True when the document could not be read or parsed
    pub degraded: bool,
}

impl MediaPathAnalysis {
    /// Number of distinct media files referenced
    pub fn total_media_files(&self) -> usize {
        self.media_files.len()
    }

    fn degraded() -> Self {
        Self {
            degraded: true,
            ..Self::default()
        }
    }
}

/// Scan an OTIO document for media references.
///
/// A read or parse failure degrades to an all-empty analysis rather than
/// propagating; the caller decides how cautious to be with a degraded
/// result.
pub fn analyze_media_paths<P: AsRef<Path>>(otio_path: P) -> MediaPathAnalysis {
    let otio_path = otio_path.as_ref();

    let content = match FileManager::read_to_string(otio_path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Could not read OTIO file for media analysis: {}", e);
            return MediaPathAnalysis::degraded();
        }
    };

    let document: Value = match serde_json::from_str(&content) {
        Ok(document) => document,
        Err(e) => {
            warn!("Could not parse OTIO file as JSON: {}", e);
            return MediaPathAnalysis::degraded();
        }
    };

    let mut media_files = BTreeSet::new();
    collect_target_urls(&document, &mut media_files);

    let media_directories: BTreeSet<String> = media_files
        .iter()
        .filter_map(|file| {
            Path::new(file)
                .parent()
                .map(|dir| dir.to_string_lossy().to_string())
        })
        .filter(|dir| !dir.is_empty())
        .collect();

    let recommended_source_path = recommend_directory(&media_files);
    let requires_source_clips = !media_files.is_empty();

    MediaPathAnalysis {
        media_files,
        media_directories,
        recommended_source_path,
        requires_source_clips,
        degraded: false,
    }
}

/// Recursively collect every string found under a `target_url` key.
///
/// The document is an untyped tree of mappings, sequences and scalars;
/// anything that is not one of those is ignored.
pub fn collect_target_urls(value: &Value, found: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if key == "target_url" {
                    if let Value::String(url) = child {
                        found.insert(url.clone());
                    }
                }
                collect_target_urls(child, found);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_target_urls(item, found);
            }
        }
        _ => {}
    }
}

/// Pick the directory holding the most referenced media files.
///
/// Ties break lexicographically so the recommendation is stable across
/// runs and platforms.
fn recommend_directory(media_files: &BTreeSet<String>) -> Option<String> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for file in media_files {
        if let Some(dir) = Path::new(file).parent() {
            let dir = dir.to_string_lossy().to_string();
            if !dir.is_empty() {
                *counts.entry(dir).or_insert(0) += 1;
            }
        }
    }

    let mut best: Option<(&String, usize)> = None;
    for (dir, count) in &counts {
        // Strictly-greater keeps the lexicographically first directory on ties
        if best.is_none_or(|(_, best_count)| *count > best_count) {
            best = Some((dir, *count));
        }
    }

    best.map(|(dir, _)| dir.clone())
}
