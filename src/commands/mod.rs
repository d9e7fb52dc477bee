//! Command implementations for the relprep CLI

pub mod completions;
pub mod package;
pub mod prep;
pub mod publish;
pub mod show;
pub mod version;

use std::path::PathBuf;

use crate::error::{RelprepError, Result};

/// Resolve the workspace root from the global --workspace option
fn workspace_root(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| RelprepError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}
