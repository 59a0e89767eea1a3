/*!
 * Client seam for the video-editing host application.
 *
 * The host exposes its project model only through its own scripting
 * interface; everything here treats project and timeline objects as opaque
 * capability handles owned by the host process. Two clients exist:
 * - `bridge`: talks to the real host through a sidecar script
 * - `mock`: in-memory stand-in for tests
 */

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::path::Path;

use crate::errors::HostError;

/// Options record passed to the host's timeline-import call.
///
/// Built once per import attempt and not retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportOptions {
    /// Name for the new timeline
    #[serde(rename = "timelineName")]
    pub timeline_name: String,
    /// Whether the host should also import the source clips
    #[serde(rename = "importSourceClips")]
    pub import_source_clips: bool,
    /// Filesystem path the host searches for source clips
    #[serde(rename = "sourceClipsPath")]
    pub source_clips_path: String,
    /// Media-pool folder names the host searches for clips
    #[serde(rename = "sourceClipsFolders")]
    pub source_clips_folders: Vec<String>,
}

/// Display attributes read from a freshly created timeline.
///
/// The timeline handle itself stays with the host; only these attributes
/// are read immediately after creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimelineDetails {
    pub name: String,
    pub start_frame: i64,
    pub end_frame: i64,
    pub start_timecode: Option<String>,
    pub video_tracks: u32,
    pub audio_tracks: u32,
    pub subtitle_tracks: u32,
    pub video_items: u32,
    pub audio_items: u32,
}

impl TimelineDetails {
    /// Timeline duration in frames
    pub fn duration_frames(&self) -> i64 {
        self.end_frame - self.start_frame + 1
    }
}

/// Connection to the host application
pub trait HostClient: Debug {
    /// Resolve the currently open project.
    ///
    /// Fails with `HostError::Unreachable` when the host cannot be reached
    /// and `HostError::NoProjectOpen` when nothing is open.
    fn current_project(&self) -> Result<Box<dyn ProjectHandle>, HostError>;
}

/// Capability handle for the host's currently open project
pub trait ProjectHandle {
    /// Project display name
    fn name(&self) -> String;

    /// Names of every timeline already present in the project
    fn timeline_names(&self) -> Result<Vec<String>, HostError>;

    /// Ask the host's media pool to import a timeline from an OTIO file.
    ///
    /// `Ok(None)` means the host accepted the call but produced no
    /// timeline, which the importer treats as a retryable empty result.
    fn import_timeline(
        &self,
        otio_path: &Path,
        options: &ImportOptions,
    ) -> Result<Option<TimelineDetails>, HostError>;
}

pub mod bridge;
pub mod mock;
