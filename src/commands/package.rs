//! Package command: build the distribution using the committed description

use std::path::PathBuf;

use crate::config::ReleaseConfig;
use crate::error::{RelprepError, Result};
use crate::exec;
use crate::text;

/// Run package: read the committed description as-is and hand off to the
/// external packaging command.
///
/// No regeneration and no synchronization check happen here; packaging
/// always uses exactly what is checked in.
pub fn run(workspace: Option<PathBuf>) -> Result<()> {
    let root = super::workspace_root(workspace)?;
    let config = ReleaseConfig::load(&root)?;

    let description_path = &config.description;
    if !description_path.exists() {
        return Err(RelprepError::DescriptionMissing {
            path: description_path.display().to_string(),
        });
    }

    // Decode strictly up front so packaging never ships a mis-encoded
    // description.
    let description = text::read_text(description_path)?;
    println!(
        "using description from: {} ({} bytes)",
        description_path.display(),
        description.len()
    );

    exec::run_command(&config.package_command, &root)
}
