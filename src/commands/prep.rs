//! Prep command: regenerate the canonical description file

use std::path::PathBuf;

use console::Style;

use crate::config::ReleaseConfig;
use crate::convert::CommandConverter;
use crate::description::DescriptionAssembler;
use crate::error::Result;
use crate::text;

/// Run prep: assemble the description and overwrite the canonical file.
///
/// This is the only mode permitted to mutate the description file; the
/// result must be committed for publish to proceed.
pub fn run(workspace: Option<PathBuf>) -> Result<()> {
    let root = super::workspace_root(workspace)?;
    let config = ReleaseConfig::load(&root)?;
    let converter = CommandConverter::new(config.converter.clone(), &root);

    let description = DescriptionAssembler::new(&config, &converter).assemble()?;
    text::write_text(&description, &config.description)?;

    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Description regenerated:"),
        config.description.display()
    );

    Ok(())
}
