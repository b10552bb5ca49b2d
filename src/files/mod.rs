//! Workspace file access for the file tools.

mod workspace;


pub use workspace::{
    FileContent, FileEntry, FileKind, FilesError, FilesResult, WORKSPACE_ENV_VAR, Workspace,
};
