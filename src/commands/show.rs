//! Show command: print the long-form description
//!
//! Prints the committed description for review before a release, for example
//! to feed an offline renderer that checks the publication format parses.

use std::path::PathBuf;

use crate::cli::ShowArgs;
use crate::config::ReleaseConfig;
use crate::convert::CommandConverter;
use crate::description::DescriptionAssembler;
use crate::error::{RelprepError, Result};
use crate::text;

/// Run show command
pub fn run(workspace: Option<PathBuf>, args: ShowArgs) -> Result<()> {
    let root = super::workspace_root(workspace)?;
    let config = ReleaseConfig::load(&root)?;

    let description = if args.fresh {
        let converter = CommandConverter::new(config.converter.clone(), &root);
        DescriptionAssembler::new(&config, &converter).assemble()?
    } else {
        if !config.description.exists() {
            return Err(RelprepError::DescriptionMissing {
                path: config.description.display().to_string(),
            });
        }
        text::read_text(&config.description)?
    };

    print!("{description}");

    Ok(())
}
