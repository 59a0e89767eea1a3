use log::{info, warn};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::ImportError;
use crate::file_utils::FileManager;
use crate::host::{HostClient, ImportOptions, ProjectHandle, TimelineDetails};
use crate::media_analysis::{MediaPathAnalysis, analyze_media_paths};

// @module: Timeline import against the host application

/// Caller-supplied knobs for a single import
#[derive(Debug, Clone)]
pub struct ImportRequest {
    /// Name for the imported timeline; file stem when absent
    pub timeline_name: Option<String>,
    /// Tri-state clip-import flag; derived from media analysis when unset
    pub import_source_clips: Option<bool>,
    /// Directory the host searches for source clips; recommendation when unset
    pub source_clips_path: Option<String>,
    /// Media-pool folder names to search for clips
    pub source_clips_folders: Vec<String>,
    /// Whether media analysis may fill in unset knobs
    pub auto_detect: bool,
}

impl Default for ImportRequest {
    fn default() -> Self {
        Self {
            timeline_name: None,
            import_source_clips: None,
            source_clips_path: None,
            source_clips_folders: Vec::new(),
            auto_detect: true,
        }
    }
}

/// Imports OTIO timelines into the host application through an injected client
pub struct TimelineImporter {
    host: Box<dyn HostClient>,
}

impl TimelineImporter {
    /// Create an importer over the given host client
    pub fn new(host: Box<dyn HostClient>) -> Self {
        Self { host }
    }

    /// Import an OTIO file as a new timeline.
    ///
    /// Connects to the host, resolves the open project, derives unset
    /// options from media analysis, and invokes the host's import call.
    /// An empty result with clip import still off triggers one retry with
    /// clip import forced on; there is no further recovery.
    pub fn import(
        &self,
        otio_path: &Path,
        request: &ImportRequest,
    ) -> Result<TimelineDetails, ImportError> {
        info!("Connecting to the host application...");
        let project = self.host.current_project()?;
        info!("Connected to project: {}", project.name());

        if !FileManager::file_exists(otio_path) {
            return Err(ImportError::FileNotFound(otio_path.to_path_buf()));
        }

        let has_otio_ext = otio_path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("otio"));
        if !has_otio_ext {
            warn!("File doesn't have .otio extension: {:?}", otio_path);
        }

        let analysis = analyze_media_paths(otio_path);
        if analysis.degraded {
            warn!("Media analysis degraded; defaulting to importing source clips");
        } else {
            info!(
                "Media analysis: {} file(s) across {} directory(ies)",
                analysis.total_media_files(),
                analysis.media_directories.len()
            );
        }

        // Degraded analysis biases toward importing clips
        let clips_required = analysis.requires_source_clips || analysis.degraded;

        let import_source_clips = match request.import_source_clips {
            Some(explicit) => explicit,
            None if request.auto_detect => clips_required,
            None => false,
        };

        let source_clips_path = request
            .source_clips_path
            .clone()
            .or_else(|| {
                if request.auto_detect {
                    analysis.recommended_source_path.clone()
                } else {
                    None
                }
            })
            .unwrap_or_default();

        let base_name = match &request.timeline_name {
            Some(name) => name.clone(),
            None => otio_path
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_else(|| "Imported Timeline".to_string()),
        };
        let timeline_name = Self::unique_timeline_name(project.as_ref(), &base_name);
        info!("Timeline name: {}", timeline_name);

        let options = ImportOptions {
            timeline_name,
            import_source_clips,
            source_clips_path,
            source_clips_folders: request.source_clips_folders.clone(),
        };
        info!("Importing OTIO timeline with options: {:?}", options);

        let mut timeline = project.import_timeline(otio_path, &options)?;

        // Single-shot fallback, not a loop
        if timeline.is_none() && !options.import_source_clips && clips_required {
            warn!("Initial import returned no timeline, retrying with source clips enabled");
            let mut fallback = options.clone();
            fallback.import_source_clips = true;
            if fallback.source_clips_path.is_empty() {
                if let Some(recommended) = &analysis.recommended_source_path {
                    fallback.source_clips_path = recommended.clone();
                }
            }
            timeline = project.import_timeline(otio_path, &fallback)?;
            if timeline.is_some() {
                info!("Fallback import with source clips succeeded");
            }
        }

        match timeline {
            Some(details) => {
                info!("Timeline '{}' imported successfully", details.name);
                Self::log_timeline_details(&details);
                Ok(details)
            }
            None => {
                warn!("All import attempts returned no timeline");
                Self::log_media_existence(&analysis);
                Err(ImportError::EmptyResult(otio_path.to_path_buf()))
            }
        }
    }

    /// Resolve a timeline name that is not already taken in the project.
    ///
    /// Probes `"name (1)"` through `"name (1000)"` before falling back to a
    /// Unix-timestamp suffix; a failed name query falls back the same way.
    pub fn unique_timeline_name(project: &dyn ProjectHandle, base_name: &str) -> String {
        let existing: HashSet<String> = match project.timeline_names() {
            Ok(names) => names.into_iter().collect(),
            Err(e) => {
                warn!("Could not check existing timelines: {}", e);
                return Self::timestamp_name(base_name);
            }
        };

        if !existing.contains(base_name) {
            return base_name.to_string();
        }

        for suffix in 1..=1000 {
            let candidate = format!("{} ({})", base_name, suffix);
            if !existing.contains(&candidate) {
                info!(
                    "Timeline '{}' already exists - using '{}' instead",
                    base_name, candidate
                );
                return candidate;
            }
        }

        warn!("Could not find unique name after 1000 attempts, using timestamp suffix");
        Self::timestamp_name(base_name)
    }

    fn timestamp_name(base_name: &str) -> String {
        format!("{}_{}", base_name, chrono::Utc::now().timestamp())
    }

    /// Best-effort report of the imported timeline's display attributes
    fn log_timeline_details(details: &TimelineDetails) {
        info!("Timeline details:");
        info!("  Name: {}", details.name);
        info!("  Duration: {} frames", details.duration_frames());
        info!("  Start frame: {}", details.start_frame);
        info!("  End frame: {}", details.end_frame);
        match &details.start_timecode {
            Some(timecode) => info!("  Start timecode: {}", timecode),
            None => warn!("  Start timecode unavailable"),
        }
        info!(
            "  Tracks - Video: {}, Audio: {}, Subtitle: {}",
            details.video_tracks, details.audio_tracks, details.subtitle_tracks
        );
        info!(
            "  Items - Video: {}, Audio: {}",
            details.video_items, details.audio_items
        );
    }

    /// Post-failure diagnostic: which referenced media files exist on disk
    fn log_media_existence(analysis: &MediaPathAnalysis) {
        if analysis.media_files.is_empty() {
            return;
        }
        warn!("Referenced media on disk:");
        for file in &analysis.media_files {
            let marker = if Path::new(file).exists() {
                "[OK]"
            } else {
                "[MISSING]"
            };
            warn!("  {} {}", marker, file);
        }
    }
}
