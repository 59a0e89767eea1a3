use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use walkdir::WalkDir;

// @module: Staging directory utilities

/// Per-file entry in a directory status report
#[derive(Debug, Clone, Serialize)]
pub struct FileInfo {
    /// File name without its directory
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Modification time as Unix seconds
    pub modified: u64,
}

/// Read-only snapshot of a staging directory
#[derive(Debug, Clone, Serialize)]
pub struct DirStatus {
    /// Absolute or configured path of the directory
    pub path: String,
    /// Number of regular files directly inside
    pub file_count: usize,
    /// Per-file details
    pub files: Vec<FileInfo>,
}

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Delete every regular file directly inside a directory.
    ///
    /// Non-recursive: subdirectories and their contents are left untouched.
    /// Returns the number of files deleted; clearing an already-empty
    /// directory succeeds with a count of zero. The first deletion error
    /// aborts, so a partial clear is possible.
    pub fn clear_directory<P: AsRef<Path>>(directory: P) -> Result<usize> {
        let directory = directory.as_ref();
        info!("Clearing directory: {:?}", directory);

        if !Self::dir_exists(directory) {
            return Err(anyhow!("Not a directory: {:?}", directory));
        }

        let mut file_count = 0;
        let entries = fs::read_dir(directory)
            .with_context(|| format!("Failed to read directory: {:?}", directory))?;

        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            if path.is_file() {
                fs::remove_file(&path)
                    .with_context(|| format!("Failed to delete file: {:?}", path))?;
                file_count += 1;
                debug!("  Deleted: {:?}", path.file_name().unwrap_or_default());
            }
        }

        if file_count == 0 {
            info!("  Directory was already empty");
        } else {
            info!("  Deleted {} files", file_count);
        }

        Ok(file_count)
    }

    /// Find files with a specific extension directly inside a directory
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let wanted = extension.trim_start_matches('.');

        // Staging folders are flat; only look at the top level
        for entry in WalkDir::new(dir.as_ref()).min_depth(1).max_depth(1) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(wanted) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }

    /// Pick the most recently modified file from a list
    pub fn newest_file(files: &[PathBuf]) -> Option<PathBuf> {
        files
            .iter()
            .max_by_key(|path| {
                fs::metadata(path)
                    .and_then(|meta| meta.modified())
                    .unwrap_or(UNIX_EPOCH)
            })
            .cloned()
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Snapshot the regular files directly inside a directory
    pub fn dir_status<P: AsRef<Path>>(directory: P) -> Result<DirStatus> {
        let directory = directory.as_ref();
        let mut files = Vec::new();

        for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let meta = entry
                .metadata()
                .with_context(|| format!("Failed to read metadata: {:?}", path))?;
            let modified = meta
                .modified()
                .ok()
                .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
                .map(|duration| duration.as_secs())
                .unwrap_or(0);

            files.push(FileInfo {
                name: path
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_default(),
                size: meta.len(),
                modified,
            });
        }

        Ok(DirStatus {
            path: directory.to_string_lossy().to_string(),
            file_count: files.len(),
            files,
        })
    }
}
