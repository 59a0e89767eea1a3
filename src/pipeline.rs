use anyhow::{Context, Result, anyhow};
use log::{info, warn};
use serde::Serialize;
use std::path::PathBuf;

use crate::app_config::Config;
use crate::file_utils::{DirStatus, FileManager};
use crate::host::HostClient;
use crate::host::bridge::BridgeClient;
use crate::importer::{ImportRequest, TimelineImporter};
use crate::script_runner::ScriptRunner;

// @module: Workflow orchestrator

const EXPORT_SCRIPT: &str = "exportotio.py";
const OTIO_TO_JSON_SCRIPT: &str = "otio2json.py";
const JSON_TO_OTIO_SCRIPT: &str = "json2otio.py";

/// Read-only snapshot of both staging folders
#[derive(Debug, Serialize)]
pub struct PipelineStatus {
    pub project_root: String,
    pub timeline_ref: DirStatus,
    pub timeline_edited: DirStatus,
}

/// Sequences the staging folders, converter scripts and timeline importer
/// into the three pipeline workflows.
///
/// Every workflow is a strict step sequence: the first failing step aborts
/// the rest, and nothing done so far is rolled back (a cleared folder stays
/// cleared).
pub struct Pipeline {
    config: Config,
    runner: ScriptRunner,
    importer: TimelineImporter,
}

impl Pipeline {
    /// Create a pipeline talking to the real host through the bridge script
    pub fn new(config: Config) -> Result<Self> {
        let host = BridgeClient::new(
            config.bridge_script_path(),
            config.script_launcher.clone(),
        );
        Self::with_host(config, Box::new(host))
    }

    /// Create a pipeline over an injected host client
    pub fn with_host(config: Config, host: Box<dyn HostClient>) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        let runner = ScriptRunner::new(&config.scripts_dir, config.script_launcher.clone());
        let importer = TimelineImporter::new(host);

        let pipeline = Self {
            config,
            runner,
            importer,
        };
        pipeline.ensure_directories()?;
        Ok(pipeline)
    }

    /// Staging layout the workflows operate on
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn ensure_directories(&self) -> Result<()> {
        for directory in [
            self.config.data_dir(),
            self.config.timeline_ref_dir(),
            self.config.timeline_edited_dir(),
        ] {
            FileManager::ensure_dir(&directory)
                .with_context(|| format!("Failed to create directory: {:?}", directory))?;
        }
        Ok(())
    }

    /// Workflow 1: export the host timeline and convert it to JSON.
    ///
    /// Clears the reference staging folder, runs the host-side OTIO
    /// exporter (optionally scoped to a named timeline), converts the
    /// produced file to JSON and returns the JSON path.
    pub fn workflow_export(&self, timeline_name: Option<&str>) -> Result<PathBuf> {
        info!("=== WORKFLOW 1: EXPORT TIMELINE FROM HOST ===");
        let ref_dir = self.config.timeline_ref_dir();

        info!("Step 1: Clearing reference staging folder");
        FileManager::clear_directory(&ref_dir)
            .with_context(|| format!("Failed to clear directory: {:?}", ref_dir))?;

        info!("Step 2: Exporting OTIO from the host application");
        let export_target = ref_dir.join("exported_timeline.otio");
        let mut export_args = vec![
            "--output".to_string(),
            export_target.to_string_lossy().to_string(),
        ];
        if let Some(name) = timeline_name {
            export_args.push("--timeline".to_string());
            export_args.push(name.to_string());
        }
        self.runner
            .run(EXPORT_SCRIPT, &export_args)
            .context("OTIO export failed")?;

        // The folder was just cleared, so at most one match is expected
        let otio_files = FileManager::find_files(&ref_dir, "otio")?;
        let otio_file = otio_files
            .first()
            .ok_or_else(|| anyhow!("No OTIO file found after export in {:?}", ref_dir))?;

        info!("Step 3: Converting OTIO to JSON");
        self.runner
            .run(
                OTIO_TO_JSON_SCRIPT,
                &[otio_file.to_string_lossy().to_string()],
            )
            .context("OTIO to JSON conversion failed")?;

        let json_files = FileManager::find_files(&ref_dir, "json")?;
        let json_file = json_files
            .first()
            .ok_or_else(|| anyhow!("No JSON file found after conversion in {:?}", ref_dir))?;

        info!("Workflow 1 completed successfully");
        info!("JSON file ready for editing: {:?}", json_file);
        Ok(json_file.clone())
    }

    /// Workflow 2: clear the edit staging folder
    pub fn workflow_clear_edited(&self) -> Result<usize> {
        info!("=== WORKFLOW 2: CLEAR EDIT STAGING FOLDER ===");
        let edited_dir = self.config.timeline_edited_dir();
        let deleted = FileManager::clear_directory(&edited_dir)
            .with_context(|| format!("Failed to clear directory: {:?}", edited_dir))?;
        info!("Workflow 2 completed successfully");
        Ok(deleted)
    }

    /// Workflow 3: convert the edited JSON back to OTIO and import it.
    ///
    /// Picks the newest JSON in the edit staging folder (warning when
    /// several are present), converts it, then hands the newest resulting
    /// OTIO to the timeline importer.
    pub fn workflow_import(
        &self,
        timeline_name: Option<&str>,
        import_clips: Option<bool>,
    ) -> Result<()> {
        info!("=== WORKFLOW 3: IMPORT TIMELINE TO HOST ===");
        let edited_dir = self.config.timeline_edited_dir();

        info!("Step 1: Converting JSON to OTIO");
        let json_files = FileManager::find_files(&edited_dir, "json")?;
        if json_files.is_empty() {
            return Err(anyhow!(
                "No JSON files found in the edit staging folder; place your edited JSON in {:?}",
                edited_dir
            ));
        }
        if json_files.len() > 1 {
            warn!(
                "Multiple JSON files found, using most recent: {:?}",
                json_files
                    .iter()
                    .filter_map(|path| path.file_name())
                    .collect::<Vec<_>>()
            );
        }
        let json_file = FileManager::newest_file(&json_files)
            .ok_or_else(|| anyhow!("No JSON file selectable in {:?}", edited_dir))?;
        info!("Using JSON file: {:?}", json_file);

        self.runner
            .run(
                JSON_TO_OTIO_SCRIPT,
                &[
                    json_file.to_string_lossy().to_string(),
                    "--project-root".to_string(),
                    self.config.project_root.to_string_lossy().to_string(),
                ],
            )
            .context("JSON to OTIO conversion failed")?;

        let otio_files = FileManager::find_files(&edited_dir, "otio")?;
        if otio_files.is_empty() {
            return Err(anyhow!("No OTIO file found after conversion in {:?}", edited_dir));
        }
        let otio_file = FileManager::newest_file(&otio_files)
            .ok_or_else(|| anyhow!("No OTIO file selectable in {:?}", edited_dir))?;
        info!("Using OTIO file: {:?}", otio_file);

        info!("Step 2: Importing OTIO into the host application");
        let request = ImportRequest {
            timeline_name: timeline_name.map(str::to_string),
            import_source_clips: import_clips,
            ..ImportRequest::default()
        };
        self.importer
            .import(&otio_file, &request)
            .context("OTIO import failed")?;

        info!("Workflow 3 completed successfully");
        info!("Timeline is now available in the host application");
        Ok(())
    }

    /// Read-only status of both staging folders
    pub fn status(&self) -> Result<PipelineStatus> {
        Ok(PipelineStatus {
            project_root: self.config.project_root.to_string_lossy().to_string(),
            timeline_ref: FileManager::dir_status(self.config.timeline_ref_dir())?,
            timeline_edited: FileManager::dir_status(self.config.timeline_edited_dir())?,
        })
    }
}
