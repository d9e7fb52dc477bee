//! Invocation of the external packaging and upload commands

use std::path::{Path, PathBuf};
use std::process::Command;

use console::Style;

use crate::error::{RelprepError, Result};

/// Run an external argv with the workspace root as working directory.
///
/// Spawn failures and non-zero exits both abort the run.
pub fn run_command(argv: &[String], root: &Path) -> Result<()> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| RelprepError::CommandFailed {
            command: String::new(),
            reason: "empty command".to_string(),
        })?;
    let command_line = argv.join(" ");

    println!("running: {}", Style::new().dim().apply_to(&command_line));

    let status = Command::new(program)
        .args(args)
        .current_dir(root)
        .status()
        .map_err(|e| RelprepError::CommandFailed {
            command: command_line.clone(),
            reason: e.to_string(),
        })?;

    if !status.success() {
        return Err(RelprepError::CommandFailed {
            command: command_line,
            reason: format!("exited with {status}"),
        });
    }

    Ok(())
}

/// Upload capability for the package index; opaque and irreversible
pub trait Upload {
    fn upload(&self) -> Result<()>;
}

/// Upload by running the configured publish argv
pub struct CommandUpload {
    argv: Vec<String>,
    root: PathBuf,
}

impl CommandUpload {
    pub fn new(argv: Vec<String>, root: &Path) -> Self {
        Self {
            argv,
            root: root.to_path_buf(),
        }
    }
}

impl Upload for CommandUpload {
    fn upload(&self) -> Result<()> {
        run_command(&self.argv, &self.root)
    }
}
