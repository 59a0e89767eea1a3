use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::{Path, PathBuf};

/// Application configuration module
/// This module handles the pipeline configuration: the project root the
/// staging folders hang off, where the converter scripts live, how they are
/// launched, and the logging level.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Project root directory the staging layout is anchored to
    pub project_root: PathBuf,

    /// Directory holding the converter and bridge scripts
    #[serde(default = "default_scripts_dir")]
    pub scripts_dir: PathBuf,

    /// Command prefix used to launch converter scripts
    #[serde(default = "default_script_launcher")]
    pub script_launcher: Vec<String>,

    /// File name of the host bridge script inside `scripts_dir`
    #[serde(default = "default_bridge_script")]
    pub bridge_script: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_scripts_dir() -> PathBuf {
    // Converter scripts ship alongside the executable
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_script_launcher() -> Vec<String> {
    vec!["uv".to_string(), "run".to_string()]
}

fn default_bridge_script() -> String {
    "resolvebridge.py".to_string()
}

impl Config {
    /// Build a configuration rooted at the given project directory
    pub fn for_root<P: AsRef<Path>>(project_root: P) -> Self {
        Self {
            project_root: project_root.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Staging parent directory: `<project_root>/data/timelineprocessing`
    pub fn data_dir(&self) -> PathBuf {
        self.project_root.join("data").join("timelineprocessing")
    }

    /// Reference staging folder receiving exported timelines
    pub fn timeline_ref_dir(&self) -> PathBuf {
        self.data_dir().join("timeline_ref")
    }

    /// Edit staging folder the user drops edited JSON files into
    pub fn timeline_edited_dir(&self) -> PathBuf {
        self.data_dir().join("timeline_edited")
    }

    /// Full path to the host bridge script
    pub fn bridge_script_path(&self) -> PathBuf {
        self.scripts_dir.join(&self.bridge_script)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.project_root.as_os_str().is_empty() {
            return Err(anyhow!("Project root must not be empty"));
        }

        if self.script_launcher.is_empty() {
            return Err(anyhow!("Script launcher must name at least a command"));
        }

        if self.bridge_script.is_empty() {
            return Err(anyhow!("Bridge script name must not be empty"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            scripts_dir: default_scripts_dir(),
            script_launcher: default_script_launcher(),
            bridge_script: default_bridge_script(),
            log_level: LogLevel::default(),
        }
    }
}
