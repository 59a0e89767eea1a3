/*!
 * Mock host client for testing.
 *
 * Simulates interesting host behaviors without a running host application:
 * - `MockHost::working()` - import always succeeds
 * - `MockHost::requires_clips()` - import succeeds only with clip import on
 * - `MockHost::no_project()` - connects but no project is open
 * - `MockHost::unreachable()` - cannot be reached at all
 * - `MockHost::failing_name_query()` - timeline-name enumeration errors
 */

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::errors::HostError;
use crate::host::{HostClient, ImportOptions, ProjectHandle, TimelineDetails};

/// Behavior mode for the mock host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Every import call yields a timeline
    Working,
    /// Import yields a timeline only when source-clip import is enabled
    RequiresClips,
    /// No project is open in the host
    NoProject,
    /// The host cannot be reached
    Unreachable,
    /// The timeline-name query fails, import works
    FailingNameQuery,
}

/// Mock host client recording every import call it receives.
///
/// Clones share the recorded call log, so a test can keep one clone and
/// hand the other to the importer.
#[derive(Debug, Clone)]
pub struct MockHost {
    behavior: MockBehavior,
    existing_timelines: Vec<String>,
    import_calls: Arc<Mutex<Vec<ImportOptions>>>,
}

impl MockHost {
    /// Create a mock host with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            existing_timelines: Vec::new(),
            import_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Mock host where every import succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Mock host that only imports when clip import is enabled
    pub fn requires_clips() -> Self {
        Self::new(MockBehavior::RequiresClips)
    }

    /// Mock host with no open project
    pub fn no_project() -> Self {
        Self::new(MockBehavior::NoProject)
    }

    /// Mock host that cannot be reached
    pub fn unreachable() -> Self {
        Self::new(MockBehavior::Unreachable)
    }

    /// Mock host whose timeline-name query always errors
    pub fn failing_name_query() -> Self {
        Self::new(MockBehavior::FailingNameQuery)
    }

    /// Seed the project with existing timeline names
    pub fn with_timelines<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.existing_timelines = names.into_iter().map(Into::into).collect();
        self
    }

    /// Options records received by `import_timeline`, in call order
    pub fn recorded_calls(&self) -> Vec<ImportOptions> {
        self.import_calls.lock().unwrap().clone()
    }
}

impl HostClient for MockHost {
    fn current_project(&self) -> Result<Box<dyn ProjectHandle>, HostError> {
        match self.behavior {
            MockBehavior::Unreachable => Err(HostError::Unreachable(
                "simulated unreachable host".to_string(),
            )),
            MockBehavior::NoProject => Err(HostError::NoProjectOpen),
            _ => Ok(Box::new(MockProject {
                behavior: self.behavior,
                timelines: self.existing_timelines.clone(),
                import_calls: Arc::clone(&self.import_calls),
            })),
        }
    }
}

struct MockProject {
    behavior: MockBehavior,
    timelines: Vec<String>,
    import_calls: Arc<Mutex<Vec<ImportOptions>>>,
}

impl ProjectHandle for MockProject {
    fn name(&self) -> String {
        "Mock Project".to_string()
    }

    fn timeline_names(&self) -> Result<Vec<String>, HostError> {
        if self.behavior == MockBehavior::FailingNameQuery {
            return Err(HostError::CallFailed(
                "simulated timeline query failure".to_string(),
            ));
        }
        Ok(self.timelines.clone())
    }

    fn import_timeline(
        &self,
        _otio_path: &Path,
        options: &ImportOptions,
    ) -> Result<Option<TimelineDetails>, HostError> {
        self.import_calls.lock().unwrap().push(options.clone());

        let imported = match self.behavior {
            MockBehavior::RequiresClips => options.import_source_clips,
            _ => true,
        };

        if imported {
            Ok(Some(TimelineDetails {
                name: options.timeline_name.clone(),
                start_frame: 86400,
                end_frame: 86499,
                start_timecode: Some("01:00:00:00".to_string()),
                video_tracks: 2,
                audio_tracks: 1,
                subtitle_tracks: 0,
                video_items: 5,
                audio_items: 3,
            }))
        } else {
            Ok(None)
        }
    }
}
