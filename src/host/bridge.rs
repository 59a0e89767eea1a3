/*!
 * Bridge client for the host application's scripting interface.
 *
 * The host only speaks through its own Python scripting module, located via
 * host-managed environment variables. A sidecar bridge script wraps that
 * module behind a one-shot protocol: one JSON request on stdin, one JSON
 * reply on stdout. Each call here spawns the bridge once and blocks until
 * it answers; there is no timeout, matching the rest of the pipeline.
 */

use log::debug;
use serde::Deserialize;
use serde_json::{Value, json};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::errors::HostError;
use crate::host::{HostClient, ImportOptions, ProjectHandle, TimelineDetails};

/// Host client backed by the sidecar bridge script
#[derive(Debug, Clone)]
pub struct BridgeClient {
    bridge_path: PathBuf,
    launcher: Vec<String>,
}

/// Envelope every bridge reply arrives in
#[derive(Debug, Deserialize)]
struct BridgeReply {
    success: bool,
    #[serde(default)]
    error_kind: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    result: Value,
}

#[derive(Debug, Deserialize)]
struct ProjectInfo {
    name: String,
    #[serde(default)]
    timelines: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ImportReply {
    timeline: Option<TimelineDetails>,
}

impl BridgeClient {
    /// Create a client spawning the bridge script at `bridge_path`
    pub fn new<P: AsRef<Path>>(bridge_path: P, launcher: Vec<String>) -> Self {
        Self {
            bridge_path: bridge_path.as_ref().to_path_buf(),
            launcher,
        }
    }

    /// Issue one request to the bridge and return its `result` payload
    fn call(&self, request: &Value) -> Result<Value, HostError> {
        if !self.bridge_path.is_file() {
            return Err(HostError::Unreachable(format!(
                "bridge script not found: {:?}",
                self.bridge_path
            )));
        }

        let (program, prefix) = self
            .launcher
            .split_first()
            .map(|(head, tail)| (head.as_str(), tail))
            .unwrap_or(("uv", &[]));

        debug!("Bridge request: {}", request);

        let mut child = Command::new(program)
            .args(prefix)
            .arg(&self.bridge_path)
            .env("PYTHONIOENCODING", "utf-8")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| HostError::Unreachable(format!("failed to launch bridge: {}", e)))?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin
                .write_all(request.to_string().as_bytes())
                .map_err(|e| HostError::Unreachable(format!("failed to write to bridge: {}", e)))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| HostError::Unreachable(format!("failed to wait for bridge: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HostError::Unreachable(format!(
                "bridge exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let reply: BridgeReply = serde_json::from_str(&stdout)
            .map_err(|e| HostError::Protocol(format!("{} in reply: {}", e, stdout.trim())))?;

        if reply.success {
            return Ok(reply.result);
        }

        let message = reply.error.unwrap_or_else(|| "unspecified error".to_string());
        match reply.error_kind.as_deref() {
            Some("unreachable") => Err(HostError::Unreachable(message)),
            Some("no_project") => Err(HostError::NoProjectOpen),
            _ => Err(HostError::CallFailed(message)),
        }
    }

    fn project_info(&self) -> Result<ProjectInfo, HostError> {
        let result = self.call(&json!({ "command": "project-info" }))?;
        serde_json::from_value(result)
            .map_err(|e| HostError::Protocol(format!("bad project-info result: {}", e)))
    }
}

impl HostClient for BridgeClient {
    fn current_project(&self) -> Result<Box<dyn ProjectHandle>, HostError> {
        let info = self.project_info()?;
        Ok(Box::new(BridgeProject {
            client: self.clone(),
            name: info.name,
        }))
    }
}

/// Project handle that forwards every call through the bridge
struct BridgeProject {
    client: BridgeClient,
    name: String,
}

impl ProjectHandle for BridgeProject {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn timeline_names(&self) -> Result<Vec<String>, HostError> {
        Ok(self.client.project_info()?.timelines)
    }

    fn import_timeline(
        &self,
        otio_path: &Path,
        options: &ImportOptions,
    ) -> Result<Option<TimelineDetails>, HostError> {
        let result = self.client.call(&json!({
            "command": "import-timeline",
            "args": {
                "path": otio_path.to_string_lossy(),
                "options": options,
            }
        }))?;

        let reply: ImportReply = serde_json::from_value(result)
            .map_err(|e| HostError::Protocol(format!("bad import-timeline result: {}", e)))?;
        Ok(reply.timeline)
    }
}
