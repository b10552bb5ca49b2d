//! Read-only file access rooted at a workspace directory.
//!
//! Backs the `list_files` and `read_file` tools and the `/api/v1/files`
//! routes. Listings are non-recursive and skip build and VCS directories;
//! reads reject any path that could escape the root.

use std::fs;
use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Directory names excluded from workspace listings.
const EXCLUDED_DIRS: [&str; 5] = [".git", "target", "node_modules", "dist", "build"];

/// Environment variable overriding the workspace root.
pub const WORKSPACE_ENV_VAR: &str = "TASKDECK_WORKSPACE";

/// Workspace access errors.
#[derive(Error, Diagnostic, Debug)]
pub enum FilesError {
    #[error("Invalid file path")]
    #[diagnostic(code(taskdeck::files::invalid_path))]
    InvalidPath { path: String },

    #[error("File not found or cannot be read: {path}")]
    #[diagnostic(code(taskdeck::files::not_found))]
    NotFound { path: String },

    #[error("File system error: {message}")]
    #[diagnostic(code(taskdeck::files::io))]
    Io { message: String },
}

/// Result type for workspace operations.
pub type FilesResult<T> = Result<T, FilesError>;

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    File,
    Directory,
}

/// A single entry in a workspace listing.
#[derive(Debug, Clone, Serialize)]
pub struct FileEntry {
    pub name: String,
    /// Relative to the workspace root (one level deep, so equal to `name`).
    pub path: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    /// Present for files, absent for directories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Last modification time (RFC 3339), if the platform reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

/// Contents of a file read from the workspace.
#[derive(Debug, Clone, Serialize)]
pub struct FileContent {
    pub content: String,
    pub path: String,
    pub size: u64,
}

/// The directory the file tools operate on.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root from `TASKDECK_WORKSPACE`, falling back to the process working
    /// directory.
    pub fn from_env() -> FilesResult<Self> {
        match std::env::var(WORKSPACE_ENV_VAR) {
            Ok(dir) if !dir.is_empty() => Ok(Self::new(dir)),
            _ => {
                let cwd = std::env::current_dir().map_err(|e| FilesError::Io {
                    message: e.to_string(),
                })?;
                Ok(Self::new(cwd))
            }
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Non-recursive listing of the workspace root, sorted by name.
    ///
    /// Entries whose metadata cannot be read are skipped with a warning
    /// rather than failing the whole listing.
    pub fn list(&self) -> FilesResult<Vec<FileEntry>> {
        let entries = fs::read_dir(&self.root).map_err(|e| FilesError::Io {
            message: e.to_string(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Could not read directory entry: {e}");
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            if EXCLUDED_DIRS.contains(&name.as_str()) {
                continue;
            }
            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!("Could not read file info for {name}: {e}");
                    continue;
                }
            };

            let kind = if metadata.is_dir() {
                FileKind::Directory
            } else {
                FileKind::File
            };
            files.push(FileEntry {
                path: name.clone(),
                name,
                kind,
                size: metadata.is_file().then(|| metadata.len()),
                modified: modified_timestamp(&metadata),
            });
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }

    /// Read a UTF-8 file at a path relative to the workspace root.
    ///
    /// Absolute paths and paths containing a parent-directory segment are
    /// rejected before touching the filesystem.
    pub fn read(&self, relative: &str) -> FilesResult<FileContent> {
        let candidate = Path::new(relative);
        if candidate.is_absolute()
            || candidate
                .components()
                .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(FilesError::InvalidPath {
                path: relative.to_string(),
            });
        }

        let content = fs::read_to_string(self.root.join(candidate)).map_err(|_| {
            FilesError::NotFound {
                path: relative.to_string(),
            }
        })?;
        let size = content.len() as u64;
        Ok(FileContent {
            content,
            path: relative.to_string(),
            size,
        })
    }
}

fn modified_timestamp(metadata: &fs::Metadata) -> Option<String> {
    let modified = metadata.modified().ok()?;
    let datetime: DateTime<Utc> = modified.into();
    Some(datetime.to_rfc3339_opts(SecondsFormat::Secs, true))
}
