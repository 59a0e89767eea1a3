use log::{error, info};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::errors::ScriptError;
use crate::file_utils::FileManager;

// @module: Converter script invocation

/// Runs the sibling converter scripts as subprocesses.
///
/// Scripts are resolved inside a single configured directory and launched
/// through a configurable command prefix (`uv run` by default). Only the
/// exit status is inspected; script output goes straight to the console.
#[derive(Debug, Clone)]
pub struct ScriptRunner {
    scripts_dir: PathBuf,
    launcher: Vec<String>,
}

impl ScriptRunner {
    /// Create a runner resolving scripts inside `scripts_dir`
    pub fn new<P: AsRef<Path>>(scripts_dir: P, launcher: Vec<String>) -> Self {
        Self {
            scripts_dir: scripts_dir.as_ref().to_path_buf(),
            launcher,
        }
    }

    /// Full path a script name resolves to
    pub fn script_path(&self, script_name: &str) -> PathBuf {
        self.scripts_dir.join(script_name)
    }

    /// Run a named script with arguments, succeeding iff it exits zero.
    ///
    /// Fails fast without spawning anything when the script file is absent.
    /// Launch failures and non-zero exits are reported as distinct errors
    /// but both are terminal for the calling step.
    pub fn run(&self, script_name: &str, args: &[String]) -> Result<(), ScriptError> {
        let script_path = self.script_path(script_name);
        if !FileManager::file_exists(&script_path) {
            error!("Script not found: {:?}", script_path);
            return Err(ScriptError::NotFound(script_path));
        }

        let (program, prefix) = self
            .launcher
            .split_first()
            .map(|(head, tail)| (head.as_str(), tail))
            .unwrap_or(("uv", &[]));

        let mut command = Command::new(program);
        command
            .args(prefix)
            .arg(&script_path)
            .args(args)
            // Scripts print UTF-8 regardless of console code page
            .env("PYTHONIOENCODING", "utf-8");

        info!(
            "Running: {} {} {:?} {}",
            program,
            prefix.join(" "),
            script_path,
            args.join(" ")
        );

        let status = command.status().map_err(|source| ScriptError::Launch {
            script: script_path.clone(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(ScriptError::NonZeroExit {
                script: script_path,
                status: status.to_string(),
            })
        }
    }
}
