/*!
 * Error types for the otioflow application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when talking to the host application's scripting interface
#[derive(Error, Debug)]
pub enum HostError {
    /// Error when the host application cannot be reached at all
    #[error("Could not connect to the host application: {0}")]
    Unreachable(String),

    /// Error when no project is currently open in the host application
    #[error("No project is currently open in the host application")]
    NoProjectOpen,

    /// Error when the bridge reply cannot be understood
    #[error("Malformed bridge reply: {0}")]
    Protocol(String),

    /// Error reported by the host for a specific call
    #[error("Host call failed: {0}")]
    CallFailed(String),
}

/// Errors that can occur when running a converter script
#[derive(Error, Debug)]
pub enum ScriptError {
    /// Error when the named script does not exist in the scripts directory
    #[error("Script not found: {0}")]
    NotFound(PathBuf),

    /// Error when the script process could not be launched
    #[error("Failed to launch script {script}: {source}")]
    Launch {
        /// Script file that failed to launch
        script: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Error when the script ran but exited with a non-zero status
    #[error("Script {script} exited with status {status}")]
    NonZeroExit {
        /// Script file that failed
        script: PathBuf,
        /// Exit status description
        status: String,
    },
}

/// Errors that can occur during a timeline import
#[derive(Error, Debug)]
pub enum ImportError {
    /// Error from the host application
    #[error("Host error: {0}")]
    Host(#[from] HostError),

    /// Error when the OTIO file to import does not exist
    #[error("OTIO file does not exist: {0}")]
    FileNotFound(PathBuf),

    /// Error when the host's import call returned no timeline
    #[error("Host import call returned no timeline for: {0}")]
    EmptyResult(PathBuf),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the host application
    #[error("Host error: {0}")]
    Host(#[from] HostError),

    /// Error from a converter script
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    /// Error from a timeline import
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
